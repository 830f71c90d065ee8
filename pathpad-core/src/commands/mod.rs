//! # Commands
//!
//! Commands are the only way the drawing is modified. Each one names a small
//! composable edit; the [session](crate::session) applies them one at a time,
//! and a failed application leaves the state untouched.

pub use crate::state::document::commands::Command as CanvasCommand;
pub use crate::state::layer::commands::Command as LayerCommand;
pub use crate::state::path::commands::Command as PathCommand;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("no unit path is selected")]
    NothingSelected,
    #[error("layer index out of range")]
    UnknownLayer,
    #[error("current element has no such control point")]
    NoSuchControl,
    #[error("numeric argument is not finite")]
    NotFinite,
}
impl CommandError {
    /// Whether this error is an expected no-op rather than a fault. The
    /// command stream legitimately contains edits issued before any path
    /// exists; those are ignored, not failed.
    #[must_use]
    pub fn is_ignorable(self) -> bool {
        matches!(
            self,
            Self::NothingSelected | Self::UnknownLayer | Self::NoSuchControl
        )
    }
}

pub trait CommandConsumer<C> {
    /// Apply a single command. If this generates an error, the state of
    /// `self` is *not* observably changed.
    fn apply(&mut self, command: &C) -> Result<(), CommandError>;
}

#[derive(Clone, Debug)]
pub enum Command {
    Canvas(CanvasCommand),
    Layer(LayerCommand),
    Path(PathCommand),
}
impl From<CanvasCommand> for Command {
    fn from(value: CanvasCommand) -> Self {
        Self::Canvas(value)
    }
}
impl From<LayerCommand> for Command {
    fn from(value: LayerCommand) -> Self {
        Self::Layer(value)
    }
}
impl From<PathCommand> for Command {
    fn from(value: PathCommand) -> Self {
        Self::Path(value)
    }
}
impl Command {
    #[must_use]
    pub fn canvas(&self) -> Option<&CanvasCommand> {
        match self {
            Self::Canvas(c) => Some(c),
            _ => None,
        }
    }
    #[must_use]
    pub fn layer(&self) -> Option<&LayerCommand> {
        match self {
            Self::Layer(c) => Some(c),
            _ => None,
        }
    }
    #[must_use]
    pub fn path(&self) -> Option<&PathCommand> {
        match self {
            Self::Path(c) => Some(c),
            _ => None,
        }
    }
    /// Reject non-finite numeric arguments at the boundary. The data model
    /// itself assumes well-formed input and does not re-validate.
    pub fn sanitize(&self) -> Result<(), CommandError> {
        let finite = match self {
            Self::Canvas(c) => c.is_finite(),
            Self::Layer(c) => c.is_finite(),
            Self::Path(c) => c.is_finite(),
        };
        if finite {
            Ok(())
        } else {
            Err(CommandError::NotFinite)
        }
    }
}
