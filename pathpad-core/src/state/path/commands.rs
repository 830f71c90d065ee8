use crate::geom::{Direction, Point, Step};

/// Edits routed to the active layer's path collection. The `Add*` offsets are
/// relative displacements from the previous anchor, never absolute
/// coordinates, which keeps a command stream valid under any translation of
/// the path it lands on.
#[derive(Clone, Debug)]
pub enum Command {
    AddUnitPath,
    SelectUnitPath { delta: isize },
    AddLine { to: Point },
    AddCubic { ctrl1: Point, ctrl2: Point, to: Point },
    AddSmoothCubic { ctrl2: Point, to: Point },
    AddQuadratic { ctrl1: Point, to: Point },
    AddSmoothQuadratic { to: Point },
    NudgeAnchor { direction: Direction, step: Step },
    NudgeUnitPath { direction: Direction, step: Step },
    NudgeFirstControl { direction: Direction, step: Step },
    NudgeSecondControl { direction: Direction, step: Step },
    ToggleEnclosure,
    DeleteElement,
}
impl Command {
    /// All offsets carried by this command are finite. Directional nudges
    /// carry no raw numerics and always pass.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::AddLine { to } | Self::AddSmoothQuadratic { to } => to.is_finite(),
            Self::AddCubic { ctrl1, ctrl2, to } => {
                ctrl1.is_finite() && ctrl2.is_finite() && to.is_finite()
            }
            Self::AddSmoothCubic { ctrl2, to } => ctrl2.is_finite() && to.is_finite(),
            Self::AddQuadratic { ctrl1, to } => ctrl1.is_finite() && to.is_finite(),
            Self::AddUnitPath
            | Self::SelectUnitPath { .. }
            | Self::NudgeAnchor { .. }
            | Self::NudgeUnitPath { .. }
            | Self::NudgeFirstControl { .. }
            | Self::NudgeSecondControl { .. }
            | Self::ToggleEnclosure
            | Self::DeleteElement => true,
        }
    }
}
