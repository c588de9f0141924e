mod camera;
pub(crate) mod collision;
mod config;
mod intent;
mod motion;
mod readiness;
mod stepper;
mod types;

pub use camera::{CameraController, DeadZone, DEFAULT_DEAD_ZONE_FACTOR, DEFAULT_ZOOM};
pub use collision::CollisionMask;
pub use config::{ControllerConfig, DEFAULT_SPAWN, DEFAULT_SPEED, MAX_DEAD_ZONE_FACTOR};
pub use intent::InputIntent;
pub use motion::{resolve_motion, MotionOutcome, MotionResolution};
pub use readiness::{AssetReadiness, ReadinessEvent, ReadinessState};
pub use stepper::{Actor, DirtyFlag, FrameStepper, GameState};
pub use types::{Size, Vec2, Viewport};
