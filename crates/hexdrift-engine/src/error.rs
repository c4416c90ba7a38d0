//! Errors returned by the engine and the realtime driver.

use std::error::Error;
use std::fmt;

use hexdrift_core::HexError;
use hexdrift_space::WindowError;

/// Errors from a single engine step.
///
/// Collisions and length overflow are not errors; they resolve as
/// [`TickOutcome::Reset`](crate::TickOutcome::Reset).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The move offset was not a unit direction.
    Hex(HexError),
    /// The window rejected an operation.
    Window(WindowError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(e) => write!(f, "move: {e}"),
            Self::Window(e) => write!(f, "window: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hex(e) => Some(e),
            Self::Window(e) => Some(e),
        }
    }
}

impl From<HexError> for EngineError {
    fn from(e: HexError) -> Self {
        Self::Hex(e)
    }
}

impl From<WindowError> for EngineError {
    fn from(e: WindowError) -> Self {
        Self::Window(e)
    }
}

/// Error sending a request to the tick thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlError {
    /// The tick thread has shut down.
    Shutdown,
    /// The control channel is full.
    ChannelFull,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "control channel full"),
        }
    }
}

impl Error for ControlError {}
