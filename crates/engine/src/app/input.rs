use crate::world::{InputIntent, Vec2};

pub const JOYSTICK_MAX_TRAVEL_PX: f32 = 60.0;
pub const JOYSTICK_DEAD_BAND_FRACTION: f32 = 0.3;
/// 90° cardinal sector plus a 22.5° margin on each side. Neighbouring
/// sectors overlap, so drags near a diagonal activate two directions.
pub const JOYSTICK_SECTOR_HALF_WIDTH_DEGREES: f32 = 45.0 + 22.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Quit,
}

const ACTION_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }

    pub(crate) fn movement_intent(&self) -> InputIntent {
        InputIntent {
            up: self.is_down(InputAction::MoveUp),
            down: self.is_down(InputAction::MoveDown),
            left: self.is_down(InputAction::MoveLeft),
            right: self.is_down(InputAction::MoveRight),
        }
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Quit => 4,
        }
    }
}

/// Drag-based stick: a press anchors the base, the pointer position
/// relative to it is classified into cardinal directions until release.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VirtualJoystick {
    max_travel_px: f32,
    origin_px: Option<Vec2>,
    intent: InputIntent,
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new(JOYSTICK_MAX_TRAVEL_PX)
    }
}

impl VirtualJoystick {
    pub(crate) fn new(max_travel_px: f32) -> Self {
        Self {
            max_travel_px,
            origin_px: None,
            intent: InputIntent::NONE,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.origin_px.is_some()
    }

    pub(crate) fn begin(&mut self, origin_px: Vec2) {
        self.origin_px = Some(origin_px);
        self.intent = InputIntent::NONE;
    }

    pub(crate) fn drag_to(&mut self, position_px: Vec2) {
        let Some(origin) = self.origin_px else {
            return;
        };
        self.intent = classify_joystick_drag(
            position_px.x - origin.x,
            position_px.y - origin.y,
            self.max_travel_px,
        );
    }

    pub(crate) fn end(&mut self) {
        self.origin_px = None;
        self.intent = InputIntent::NONE;
    }

    pub(crate) fn intent(&self) -> InputIntent {
        self.intent
    }
}

/// Maps a screen-space drag (`+y` down) to directions. Drags shorter than
/// the dead band produce no intent.
pub fn classify_joystick_drag(dx: f32, dy: f32, max_travel_px: f32) -> InputIntent {
    let distance = dx.hypot(dy);
    let dead_band = max_travel_px.max(0.0) * JOYSTICK_DEAD_BAND_FRACTION;
    if !(distance > 0.0 && distance >= dead_band) {
        return InputIntent::NONE;
    }

    let angle = (-dy).atan2(dx).to_degrees();
    InputIntent {
        right: within_sector(angle, 0.0),
        up: within_sector(angle, 90.0),
        left: within_sector(angle, 180.0),
        down: within_sector(angle, 270.0),
    }
}

fn within_sector(angle_degrees: f32, center_degrees: f32) -> bool {
    let delta = (angle_degrees - center_degrees).rem_euclid(360.0);
    let delta = if delta > 180.0 { 360.0 - delta } else { delta };
    delta <= JOYSTICK_SECTOR_HALF_WIDTH_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_at_angle(degrees: f32, distance: f32) -> InputIntent {
        let radians = degrees.to_radians();
        classify_joystick_drag(
            radians.cos() * distance,
            -radians.sin() * distance,
            JOYSTICK_MAX_TRAVEL_PX,
        )
    }

    #[test]
    fn drag_inside_dead_band_is_ignored() {
        assert_eq!(classify_joystick_drag(10.0, 0.0, 60.0), InputIntent::NONE);
        assert_eq!(classify_joystick_drag(0.0, 0.0, 60.0), InputIntent::NONE);
        assert!(classify_joystick_drag(18.5, 0.0, 60.0).right);
    }

    #[test]
    fn cardinal_drags_map_to_single_direction() {
        let right = drag_at_angle(0.0, 40.0);
        assert_eq!(
            right,
            InputIntent {
                right: true,
                ..InputIntent::NONE
            }
        );
        assert_eq!(
            drag_at_angle(90.0, 40.0),
            InputIntent {
                up: true,
                ..InputIntent::NONE
            }
        );
        assert_eq!(
            classify_joystick_drag(0.0, 40.0, 60.0),
            InputIntent {
                down: true,
                ..InputIntent::NONE
            }
        );
        assert_eq!(
            classify_joystick_drag(-40.0, 0.0, 60.0),
            InputIntent {
                left: true,
                ..InputIntent::NONE
            }
        );
    }

    #[test]
    fn near_cardinal_drag_stays_single_direction() {
        let intent = drag_at_angle(20.0, 40.0);
        assert!(intent.right);
        assert!(!intent.up && !intent.down && !intent.left);
    }

    #[test]
    fn overlapping_sectors_yield_diagonal() {
        let up_right = drag_at_angle(45.0, 40.0);
        assert!(up_right.up && up_right.right);
        assert!(!up_right.down && !up_right.left);

        let down_left = drag_at_angle(225.0, 40.0);
        assert!(down_left.down && down_left.left);
    }

    #[test]
    fn joystick_release_clears_intent() {
        let mut joystick = VirtualJoystick::default();
        joystick.drag_to(Vec2::new(100.0, 0.0));
        assert_eq!(joystick.intent(), InputIntent::NONE);

        joystick.begin(Vec2::new(100.0, 100.0));
        joystick.drag_to(Vec2::new(100.0, 50.0));
        assert!(joystick.is_active());
        assert!(joystick.intent().up);

        joystick.end();
        assert!(!joystick.is_active());
        assert_eq!(joystick.intent(), InputIntent::NONE);
    }

    #[test]
    fn held_actions_form_movement_intent() {
        let mut states = ActionStates::default();
        states.set(InputAction::MoveUp, true);
        states.set(InputAction::MoveRight, true);
        states.set(InputAction::Quit, true);

        let intent = states.movement_intent();
        assert!(intent.up && intent.right);
        assert!(!intent.down && !intent.left);
    }
}
