use super::Rgb;

/// Layer-management edits. Style edits name their layer by index, matching
/// the panel they arrive from, rather than going through the active-layer
/// cursor.
#[derive(Clone, Debug)]
pub enum Command {
    AddLayer,
    SelectLayer { index: usize },
    SetStrokeWidth { index: usize, width: f32 },
    SetStroke { index: usize, color: Rgb },
    SetFill { index: usize, fill: Option<Rgb> },
}
impl Command {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::SetStrokeWidth { width, .. } => width.is_finite(),
            Self::AddLayer
            | Self::SelectLayer { .. }
            | Self::SetStroke { .. }
            | Self::SetFill { .. } => true,
        }
    }
}
