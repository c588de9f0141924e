/// Directional intent for a single tick. Opposite directions may be held
/// together; they cancel on that axis when the stepper composes a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    pub const NONE: InputIntent = InputIntent {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn union(self, other: InputIntent) -> InputIntent {
        InputIntent {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    /// Net unit steps per axis in screen orientation (`+x` right, `+y` down).
    pub fn axis_steps(&self) -> (i32, i32) {
        let x = i32::from(self.right) - i32::from(self.left);
        let y = i32::from(self.down) - i32::from(self.up);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel_per_axis() {
        let intent = InputIntent {
            up: true,
            down: true,
            left: false,
            right: true,
        };
        assert_eq!(intent.axis_steps(), (1, 0));
    }

    #[test]
    fn union_keeps_every_active_direction() {
        let keys = InputIntent {
            up: true,
            ..InputIntent::NONE
        };
        let stick = InputIntent {
            left: true,
            ..InputIntent::NONE
        };
        let merged = keys.union(stick);
        assert!(merged.up && merged.left);
        assert!(!merged.down && !merged.right);
        assert_eq!(merged.axis_steps(), (-1, -1));
    }

    #[test]
    fn none_has_no_displacement() {
        assert_eq!(InputIntent::NONE.axis_steps(), (0, 0));
        assert_eq!(InputIntent::default(), InputIntent::NONE);
    }
}
