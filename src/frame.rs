use crate::camera::Camera;
use crate::render::{self, InstanceBatch};
use crate::state::AppState;
use galaxy_core::{FrameClock, SceneComposer, SceneNodes};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<AppState>>,
    pub composer: SceneComposer,
    pub nodes: SceneNodes,
    pub clock: FrameClock,

    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub batch: InstanceBatch,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let tick = self.clock.tick();
        {
            // controls are read once per frame; input handlers only write between frames
            let state = self.state.borrow();
            self.composer.compose(tick, &state.controls, &mut self.nodes);
        }
        render::build_instances(&self.composer, &self.nodes, tick.elapsed, &mut self.batch);

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);
        self.camera.set_viewport(w, h);
        match gpu.render(&self.camera, &self.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost, reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
