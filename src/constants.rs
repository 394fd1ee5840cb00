// Front-end tuning: camera, clear colour, lighting and DOM hooks.

// Camera looks at the galaxy centre from slightly above the orbit plane
pub const CAMERA_EYE: [f32; 3] = [0.0, 4.5, 12.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Background
pub const CLEAR_RGB: [f64; 3] = [0.02, 0.02, 0.06];

// Lighting
pub const LIGHT_DIR: [f32; 3] = [-0.4, -1.0, -0.6]; // direction the light travels
pub const AMBIENT: f32 = 0.35; // fraction of colour kept on unlit faces

// Trails shrink and fade towards the tail
pub const TRAIL_HEAD_ALPHA: f32 = 0.6;
pub const TRAIL_SIZE_FACTOR: f32 = 0.35;
pub const TRAIL_TAIL_SHRINK: f32 = 0.7;

// Instance buffer starts with room for this many cubes and grows by doubling
pub const INITIAL_INSTANCE_CAPACITY: usize = 1024;

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint-overlay";
pub const PANEL_ID: &str = "control-panel";

// Events exchanged with the host page, which owns WebXR negotiation
pub const XR_REQUEST_EVENT: &str = "galaxy-xr-request";
pub const XR_END_EVENT: &str = "galaxy-xr-end";
pub const XR_ENDED_EVENT: &str = "galaxy-xr-ended";
