mod input;
mod loop_runner;
mod metrics;
mod rendering;

pub use input::{
    classify_joystick_drag, InputAction, JOYSTICK_DEAD_BAND_FRACTION, JOYSTICK_MAX_TRAVEL_PX,
    JOYSTICK_SECTOR_HALF_WIDTH_DEGREES,
};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use rendering::{world_to_screen, world_to_screen_px, Renderer};
