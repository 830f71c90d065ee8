//! # Session
//!
//! The single writer over one drawing. Commands are dispatched to completion
//! one at a time, so between any two dispatches the state tree is valid and
//! any read is consistent. Collaborators that draw the state watch the
//! revision stamp instead of subscribing to individual edits, which keeps
//! render a pure function of a snapshot.

use crate::commands::{Command, CommandConsumer, CommandError};
use crate::render;
use crate::state::{CanvasMode, Document, LayerSet, ReferenceImage};
use crate::util::Opacity;

/// Starting configuration of a drawing session, explicit so embedders can
/// choose rather than inherit process-wide constants.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub reference_source: String,
    pub reference_opacity: Opacity,
    pub mode: CanvasMode,
}
impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            reference_source: String::new(),
            reference_opacity: Opacity::new_lossy(0.5),
            mode: CanvasMode::Edit,
        }
    }
}

/// A consistent copy of the drawing at some revision.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub revision: u64,
    pub document: Document,
    pub layers: LayerSet,
}
impl Snapshot {
    /// The rendered document for this snapshot.
    #[must_use]
    pub fn svg(&self) -> String {
        render::render(&self.document, &self.layers)
    }
}

#[derive(Debug)]
pub struct Session {
    document: Document,
    layers: LayerSet,
    revision: u64,
}
impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
impl Session {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            document: Document {
                mode: options.mode,
                reference: ReferenceImage {
                    source: options.reference_source,
                    opacity: options.reference_opacity,
                },
                extent: None,
            },
            layers: LayerSet::new(),
            revision: 0,
        }
    }
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
    #[must_use]
    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }
    /// Bumped once per command that changed anything.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            document: self.document.clone(),
            layers: self.layers.clone(),
        }
    }
    /// The rendered document as of now. Equivalent to `snapshot().svg()`
    /// without the clone.
    #[must_use]
    pub fn svg(&self) -> String {
        render::render(&self.document, &self.layers)
    }
    /// Status readout: the grammar token of the element last edited on the
    /// active layer.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        self.layers.active().last_element_code()
    }
    /// Dispatch one command. `Ok(true)` means the drawing changed and the
    /// revision moved. Ignorable errors, edits that arrived before anything
    /// was selected, are logged and absorbed as `Ok(false)`; boundary
    /// violations are returned.
    pub fn dispatch(&mut self, command: &Command) -> Result<bool, CommandError> {
        command.sanitize()?;
        match self.apply(command) {
            Ok(()) => {
                self.revision += 1;
                Ok(true)
            }
            Err(error) if error.is_ignorable() => {
                log::debug!("ignoring {command:?}: {error}");
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }
}
impl CommandConsumer<Command> for Session {
    fn apply(&mut self, command: &Command) -> Result<(), CommandError> {
        match command {
            Command::Canvas(command) => self.document.apply(command),
            Command::Layer(command) => self.layers.apply(command),
            Command::Path(command) => self.layers.apply(command),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Session, SessionOptions};
    use crate::commands::{Command, CommandError, PathCommand};
    use crate::geom::{Direction, Point, Step};

    fn dispatch(session: &mut Session, command: impl Into<Command>) -> bool {
        session.dispatch(&command.into()).unwrap()
    }

    #[test]
    fn premature_commands_are_absorbed() {
        let mut session = Session::default();
        // One layer exists, but nothing is selected yet.
        assert!(!dispatch(&mut session, PathCommand::ToggleEnclosure));
        assert!(!dispatch(
            &mut session,
            PathCommand::AddLine {
                to: Point::new(10.0, 0.0)
            }
        ));
        assert_eq!(session.revision(), 0);
    }
    #[test]
    fn non_finite_offsets_are_rejected_not_absorbed() {
        let mut session = Session::default();
        assert!(dispatch(&mut session, PathCommand::AddUnitPath));
        let result = session.dispatch(
            &PathCommand::AddLine {
                to: Point::new(f32::INFINITY, 0.0),
            }
            .into(),
        );
        assert_eq!(result, Err(CommandError::NotFinite));
        // Nothing reached the model.
        assert_eq!(session.layers().active().paths()[0].elements().len(), 1);
    }
    #[test]
    fn large_step_nudge_moves_by_ten() {
        let mut session = Session::default();
        assert!(dispatch(&mut session, PathCommand::AddUnitPath));
        assert!(dispatch(
            &mut session,
            PathCommand::AddLine {
                to: Point::new(10.0, 0.0)
            }
        ));
        assert!(dispatch(
            &mut session,
            PathCommand::NudgeAnchor {
                direction: Direction::Right,
                step: Step::Large,
            }
        ));
        let path = &session.layers().active().paths()[0];
        assert_eq!(path.current().anchor(), Point::new(20.0, 0.0));
    }
    #[test]
    fn path_selection_wraps() {
        let mut session = Session::default();
        assert!(dispatch(&mut session, PathCommand::AddUnitPath));
        assert!(dispatch(&mut session, PathCommand::AddUnitPath));
        // Two paths, the second selected. Cycle back to the first, then wrap.
        assert!(dispatch(
            &mut session,
            PathCommand::SelectUnitPath { delta: 1 }
        ));
        assert_eq!(session.layers().active().path_to_edit(), Some(0));
        assert!(dispatch(
            &mut session,
            PathCommand::SelectUnitPath { delta: 1 }
        ));
        assert_eq!(session.layers().active().path_to_edit(), Some(1));
    }
    #[test]
    fn revision_moves_only_on_change() {
        let mut session = Session::new(SessionOptions::default());
        let before = session.revision();
        assert!(!dispatch(&mut session, PathCommand::DeleteElement));
        assert_eq!(session.revision(), before);
        assert!(dispatch(&mut session, PathCommand::AddUnitPath));
        assert_eq!(session.revision(), before + 1);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.revision, session.revision());
        assert!(snapshot.svg().starts_with("<svg"));
    }
    #[test]
    fn status_line_reports_the_last_element() {
        let mut session = Session::default();
        assert_eq!(session.status_line(), None);
        assert!(dispatch(&mut session, PathCommand::AddUnitPath));
        assert!(dispatch(
            &mut session,
            PathCommand::AddLine {
                to: Point::new(10.0, 0.0)
            }
        ));
        assert_eq!(session.status_line().as_deref(), Some("L 10 0"));
    }
}
