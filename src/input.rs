//! Polled input boundary
//!
//! The hardware rig feeds two analog lines, probed once per tick, each
//! carrying a small integer: a movement code and an action code, set by a
//! keyboard-listener process on the host. The engine keeps that shape: an
//! [`InputSource`] yields one [`InputFrame`] of raw codes per tick, and a
//! per-game [`ControlMap`] turns the codes into semantic [`Action`]s.
//! Unknown codes decode to [`Action::Neutral`]; a failing source is fatal.

use std::fmt;

/// Raw codes read from the two input lines in one poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub movement: i32,
    pub action: i32,
}

impl InputFrame {
    pub const NEUTRAL: Self = Self { movement: 0, action: 0 };

    pub fn new(movement: i32, action: i32) -> Self {
        Self { movement, action }
    }
}

/// Semantic meaning of a code, game-specific via [`ControlMap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    /// No input (or an unrecognized code).
    #[default]
    Neutral,
    Thrust,
    Up,
    Down,
    Left,
    Right,
    Fire,
    Jump,
    Quit,
}

/// Decoded input for one tick. Rebuilt from scratch every poll; never
/// retained across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub movement: Action,
    pub action: Action,
}

impl InputState {
    /// True if either line carries the quit code.
    pub fn wants_quit(&self) -> bool {
        self.movement == Action::Quit || self.action == Action::Quit
    }
}

/// Per-game lookup table from raw codes to semantic actions.
#[derive(Debug, Clone)]
pub struct ControlMap {
    movement: Vec<(i32, Action)>,
    action: Vec<(i32, Action)>,
}

impl ControlMap {
    pub fn new(movement: &[(i32, Action)], action: &[(i32, Action)]) -> Self {
        Self {
            movement: movement.to_vec(),
            action: action.to_vec(),
        }
    }

    fn lookup(table: &[(i32, Action)], code: i32) -> Action {
        table
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, a)| *a)
            .unwrap_or(Action::Neutral)
    }

    /// Decode one raw frame. Codes not in the table are neutral, never an
    /// error.
    pub fn decode(&self, frame: InputFrame) -> InputState {
        InputState {
            movement: Self::lookup(&self.movement, frame.movement),
            action: Self::lookup(&self.action, frame.action),
        }
    }
}

/// Input source failure. There is no recovery path: the game loop treats
/// this as fatal and ends the run.
#[derive(Debug)]
pub enum InputError {
    /// The source has shut down (listener process gone, line closed).
    Closed,
    /// Device-level failure with a description.
    Device(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "input source closed"),
            InputError::Device(msg) => write!(f, "input device failure: {msg}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Something the game loop can poll once per tick.
///
/// A poll that times out or sees no key held should return
/// [`InputFrame::NEUTRAL`], not an error.
pub trait InputSource {
    fn poll(&mut self) -> Result<InputFrame, InputError>;
}

/// Replays a fixed list of frames, then holds neutral.
///
/// Drives demos and tests the way the hardware lines would; build scripts
/// with [`ScriptedInput::hold`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<InputFrame>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Append `ticks` copies of the given codes.
    pub fn hold(mut self, movement: i32, action: i32, ticks: usize) -> Self {
        self.frames
            .extend(std::iter::repeat_n(InputFrame::new(movement, action), ticks));
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputFrame, InputError> {
        let frame = self
            .frames
            .get(self.cursor)
            .copied()
            .unwrap_or(InputFrame::NEUTRAL);
        self.cursor += 1;
        Ok(frame)
    }
}
