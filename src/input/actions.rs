//! Game action definitions

/// All actions the game reacts to
///
/// Keyboard layout:
/// - Arrows / WASD = Move
/// - Space (and Up / W in platformer mode) = Jump
/// - R = Restart from spawn
/// - Escape = Back to menu
/// - F1 = Debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,
    Restart,
    Back,
    ToggleDebug,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Jump,
        Action::Restart,
        Action::Back,
        Action::ToggleDebug,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Small bitset of actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u16);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn union(self, other: ActionSet) -> ActionSet {
        ActionSet(self.0 | other.0)
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Input snapshot for one frame, decoupled from the windowing library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Actions whose key is currently down
    pub held: ActionSet,
    /// Actions whose key went down this frame
    pub pressed: ActionSet,
}

impl FrameInput {
    pub fn held(&self, action: Action) -> bool {
        self.held.contains(action)
    }

    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    /// Digital movement direction, -1/0/1 per axis (y grows downward).
    /// Opposing keys cancel out.
    pub fn axis(&self) -> (i8, i8) {
        let x = self.held(Action::MoveRight) as i8 - self.held(Action::MoveLeft) as i8;
        let y = self.held(Action::MoveDown) as i8 - self.held(Action::MoveUp) as i8;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_set() {
        let set: ActionSet = [Action::Jump, Action::Back].into_iter().collect();
        assert!(set.contains(Action::Jump));
        assert!(set.contains(Action::Back));
        assert!(!set.contains(Action::MoveLeft));
        assert_eq!(ActionSet::empty(), ActionSet::default());

        let more = set.union([Action::Restart].into_iter().collect());
        assert!(more.contains(Action::Restart));
        assert!(more.contains(Action::Jump));
    }

    #[test]
    fn test_axis_cancels_opposites() {
        let input = FrameInput {
            held: [Action::MoveLeft, Action::MoveRight, Action::MoveUp].into_iter().collect(),
            pressed: ActionSet::empty(),
        };
        assert_eq!(input.axis(), (0, -1));
    }
}
