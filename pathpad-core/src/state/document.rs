//! Document-wide canvas state: the editing mode, the traced reference image,
//! and the recorded surface extent.

pub mod commands {
    use super::{CanvasMode, Extent};
    use crate::util::Opacity;

    #[derive(Clone, Debug)]
    pub enum Command {
        SetMode { mode: CanvasMode },
        SetReferenceSource { source: String },
        SetReferenceOpacity { opacity: Opacity },
        /// Reported once when the reference image loads. Sizing only.
        SetDimensions { extent: Extent },
    }
    impl Command {
        #[must_use]
        pub fn is_finite(&self) -> bool {
            match self {
                Self::SetDimensions { extent } => {
                    extent.width.is_finite() && extent.height.is_finite()
                }
                // Opacity is clamped finite on construction.
                Self::SetMode { .. }
                | Self::SetReferenceSource { .. }
                | Self::SetReferenceOpacity { .. } => true,
            }
        }
    }
}

use crate::commands::{CommandConsumer, CommandError};
use crate::util::Opacity;

/// Whether the surface is being edited or previewed. One canonical mode for
/// the whole canvas.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum CanvasMode {
    #[default]
    Edit,
    Preview,
}

/// Width and height of the editing surface. Never participates in geometry,
/// only in sizing the rendered document.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

/// The image traced over while editing.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ReferenceImage {
    pub source: String,
    pub opacity: Opacity,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Document {
    pub mode: CanvasMode,
    pub reference: ReferenceImage,
    /// `None` until the render collaborator reports a loaded image.
    pub extent: Option<Extent>,
}
impl CommandConsumer<commands::Command> for Document {
    fn apply(&mut self, command: &commands::Command) -> Result<(), CommandError> {
        use commands::Command;
        match command {
            Command::SetMode { mode } => self.mode = *mode,
            Command::SetReferenceSource { source } => {
                self.reference.source.clone_from(source);
            }
            Command::SetReferenceOpacity { opacity } => self.reference.opacity = *opacity,
            Command::SetDimensions { extent } => self.extent = Some(*extent),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{commands::Command, CanvasMode, Document, Extent};
    use crate::commands::CommandConsumer;
    use crate::util::Opacity;

    #[test]
    fn commands_apply() {
        let mut document = Document::default();
        assert_eq!(document.mode, CanvasMode::Edit);
        document
            .apply(&Command::SetMode {
                mode: CanvasMode::Preview,
            })
            .unwrap();
        document
            .apply(&Command::SetReferenceOpacity {
                opacity: Opacity::new_lossy(0.25),
            })
            .unwrap();
        document
            .apply(&Command::SetDimensions {
                extent: Extent {
                    width: 640.0,
                    height: 480.0,
                },
            })
            .unwrap();
        assert_eq!(document.mode, CanvasMode::Preview);
        assert_eq!(document.reference.opacity.get(), 0.25);
        assert_eq!(
            document.extent,
            Some(Extent {
                width: 640.0,
                height: 480.0
            })
        );
    }
    #[test]
    fn mode_names_are_lowercase() {
        assert_eq!(CanvasMode::Preview.as_ref(), "preview");
        assert_eq!("edit".parse::<CanvasMode>().unwrap(), CanvasMode::Edit);
    }
}
