use crate::content::AssetKind;

/// Asset readiness, advanced strictly in map → collision → sprite order.
/// A signal that arrives ahead of its predecessor is latched and applied
/// once the predecessor lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadinessState {
    #[default]
    Empty,
    MapReady,
    CollisionReady,
    /// Every asset is in; waiting for the stepper to initialize the camera.
    SpriteReady,
    AllReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessEvent {
    Decoded(AssetKind),
    Initialized,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssetReadiness {
    state: ReadinessState,
    received: [bool; 3],
}

impl AssetReadiness {
    pub fn state(&self) -> ReadinessState {
        self.state
    }

    pub fn is_all_ready(&self) -> bool {
        self.state == ReadinessState::AllReady
    }

    pub fn has_received(&self, kind: AssetKind) -> bool {
        self.received[kind.index()]
    }

    pub fn apply(&mut self, event: ReadinessEvent) -> ReadinessState {
        match event {
            ReadinessEvent::Decoded(kind) => {
                self.received[kind.index()] = true;
                if self.state != ReadinessState::AllReady {
                    self.state = self.latched_state();
                }
            }
            ReadinessEvent::Initialized => {
                if self.state == ReadinessState::SpriteReady {
                    self.state = ReadinessState::AllReady;
                }
            }
        }
        self.state
    }

    fn latched_state(&self) -> ReadinessState {
        if !self.has_received(AssetKind::Map) {
            ReadinessState::Empty
        } else if !self.has_received(AssetKind::Collision) {
            ReadinessState::MapReady
        } else if !self.has_received(AssetKind::Sprite) {
            ReadinessState::CollisionReady
        } else {
            ReadinessState::SpriteReady
        }
    }
}
