use super::{CollisionMask, Size, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// No net displacement was attempted.
    Stationary,
    /// The attempted position was accepted as-is.
    Moved,
    SlidX,
    SlidY,
    /// The move collided and no slide was possible.
    Blocked,
    /// Diagonal into a corner where each axis alone would be free.
    Cornered,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionResolution {
    pub position: Vec2,
    pub outcome: MotionOutcome,
}

impl MotionResolution {
    /// Accepts `attempted` unconditionally; used until collision data exists.
    pub fn pass_through(old: Vec2, attempted: Vec2) -> Self {
        let outcome = if attempted == old {
            MotionOutcome::Stationary
        } else {
            MotionOutcome::Moved
        };
        Self {
            position: attempted,
            outcome,
        }
    }

    fn at(position: Vec2, outcome: MotionOutcome) -> Self {
        Self { position, outcome }
    }
}

/// Moves an actor box from `old` toward `attempted` against the mask.
///
/// The destination rectangle is tested as a whole (no swept test). A blocked
/// diagonal may slide along exactly one free axis; when both axes are free on
/// their own the move reverts instead of picking one. An actor already
/// overlapping blocked pixels is left where it is.
pub fn resolve_motion(
    old: Vec2,
    attempted: Vec2,
    size: Size,
    mask: &CollisionMask,
) -> MotionResolution {
    if attempted == old {
        return MotionResolution::at(old, MotionOutcome::Stationary);
    }

    let is_free = |position: Vec2| {
        !mask.is_blocked_region(position.x, position.y, size.width, size.height)
    };
    if is_free(attempted) {
        return MotionResolution::at(attempted, MotionOutcome::Moved);
    }

    let moved_in_x = attempted.x != old.x;
    let moved_in_y = attempted.y != old.y;
    if !(moved_in_x && moved_in_y) {
        return MotionResolution::at(old, MotionOutcome::Blocked);
    }

    let slide_x = Vec2::new(attempted.x, old.y);
    let slide_y = Vec2::new(old.x, attempted.y);
    match (is_free(slide_x), is_free(slide_y)) {
        (true, true) => MotionResolution::at(old, MotionOutcome::Cornered),
        (true, false) => MotionResolution::at(slide_x, MotionOutcome::SlidX),
        (false, true) => MotionResolution::at(slide_y, MotionOutcome::SlidY),
        (false, false) => MotionResolution::at(old, MotionOutcome::Blocked),
    }
}
