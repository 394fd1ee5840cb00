pub mod clock;
pub mod config;
pub mod constants;
pub mod controls;
pub mod effects;
pub mod panel;
pub mod params;
pub mod pose;
pub mod scene;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use effects::*;
pub use panel::*;
pub use params::*;
pub use pose::*;
pub use scene::*;
