//! Logical input actions and the per-press trigger latch.
//!
//! The front-end translates raw key events into [`Action`] presses and
//! releases on an [`InputState`]; the simulation samples it once per tick.
//! Terminals that only report presses go through [`HeldKeys`] instead.

use crate::core::constants::{INPUT_HOLD_TICKS, TRIGGER_HOLD_TICKS};

/// Logical actions understood by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Cast when the line is in, reel when it is out.
    CastReel,
    OpenShop,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::CastReel,
        Action::OpenShop,
    ];

    fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::CastReel => 2,
            Action::OpenShop => 3,
        }
    }
}

/// Horizontal rowing intent derived from the held direction keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDirection {
    None,
    Left,
    Right,
    /// Both held; the impulses cancel.
    Both,
}

/// Continuously updated press/release record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.pressed[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.pressed[action.index()] = false;
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 4];
    }

    pub fn row_direction(&self) -> RowDirection {
        match (
            self.is_pressed(Action::MoveLeft),
            self.is_pressed(Action::MoveRight),
        ) {
            (false, false) => RowDirection::None,
            (true, false) => RowDirection::Left,
            (false, true) => RowDirection::Right,
            (true, true) => RowDirection::Both,
        }
    }
}

/// Fires once per press of a held input.
///
/// `fire` returns true on the first tick the input is seen pressed, then
/// stays quiet until a tick where the input is released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerLatch {
    handled: bool,
}

impl TriggerLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.handled = false;
            return false;
        }
        if self.handled {
            return false;
        }
        self.handled = true;
        true
    }

    pub fn is_armed(&self) -> bool {
        !self.handled
    }

    /// Treats the current press as already handled.
    pub fn consume(&mut self) {
        self.handled = true;
    }
}

/// Synthesizes releases for terminals that only report key presses.
///
/// Each press keeps its action held for a few ticks. Key-repeat events
/// refresh the hold, so a held key stays pressed continuously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    ticks: [u32; 4],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    fn hold_ticks(action: Action) -> u32 {
        match action {
            Action::CastReel => TRIGGER_HOLD_TICKS,
            _ => INPUT_HOLD_TICKS,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.ticks[action.index()] = Self::hold_ticks(action);
    }

    /// Writes the current holds into `input`, then counts them down one tick.
    pub fn apply(&mut self, input: &mut InputState) {
        for action in Action::ALL {
            let remaining = &mut self.ticks[action.index()];
            input.set(action, *remaining > 0);
            *remaining = remaining.saturating_sub(1);
        }
    }

    pub fn clear(&mut self) {
        self.ticks = [0; 4];
    }
}
