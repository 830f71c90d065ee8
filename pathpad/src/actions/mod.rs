//! # Actions
//!
//! The logical editing operations a key chord can resolve to. The mapping is
//! one action to many chords; which chord matched still matters afterward,
//! since its shift modifier selects the large step.

pub mod hotkeys;

use pathpad_core::commands::{Command, PathCommand};
use pathpad_core::geom::{Direction, Point, Step};

#[derive(
    serde::Serialize,
    serde::Deserialize,
    Hash,
    PartialEq,
    Eq,
    strum::AsRefStr,
    strum::EnumIter,
    Clone,
    Copy,
    Debug,
)]
pub enum Action {
    AddNewUnitPath,
    SelectPrevUnitPath,
    SelectNextUnitPath,

    AddLine,
    AddCubic,
    AddSmoothCubic,
    AddQuadratic,
    AddSmoothQuadratic,
    ToggleEnclosure,
    Delete,

    MoveElementUp,
    MoveElementDown,
    MoveElementLeft,
    MoveElementRight,
    MoveUnitPathUp,
    MoveUnitPathDown,
    MoveUnitPathLeft,
    MoveUnitPathRight,
    MoveFirstControlUp,
    MoveFirstControlDown,
    MoveFirstControlLeft,
    MoveFirstControlRight,
    MoveSecondControlUp,
    MoveSecondControlDown,
    MoveSecondControlLeft,
    MoveSecondControlRight,
}
impl Action {
    /// Build the core command for this action. `large` is whether the matched
    /// chord held shift, the ×10 step.
    ///
    /// New segments start with zero offsets; they are meant to be nudged into
    /// place afterward.
    #[must_use]
    pub fn command(self, large: bool) -> Command {
        let step = if large { Step::Large } else { Step::Unit };
        let element = |direction| PathCommand::NudgeAnchor { direction, step }.into();
        let unit_path = |direction| PathCommand::NudgeUnitPath { direction, step }.into();
        let first = |direction| PathCommand::NudgeFirstControl { direction, step }.into();
        let second = |direction| PathCommand::NudgeSecondControl { direction, step }.into();
        match self {
            Self::AddNewUnitPath => PathCommand::AddUnitPath.into(),
            Self::SelectPrevUnitPath => PathCommand::SelectUnitPath { delta: -1 }.into(),
            Self::SelectNextUnitPath => PathCommand::SelectUnitPath { delta: 1 }.into(),
            Self::AddLine => PathCommand::AddLine { to: Point::ZERO }.into(),
            Self::AddCubic => PathCommand::AddCubic {
                ctrl1: Point::ZERO,
                ctrl2: Point::ZERO,
                to: Point::ZERO,
            }
            .into(),
            Self::AddSmoothCubic => PathCommand::AddSmoothCubic {
                ctrl2: Point::ZERO,
                to: Point::ZERO,
            }
            .into(),
            Self::AddQuadratic => PathCommand::AddQuadratic {
                ctrl1: Point::ZERO,
                to: Point::ZERO,
            }
            .into(),
            Self::AddSmoothQuadratic => PathCommand::AddSmoothQuadratic { to: Point::ZERO }.into(),
            Self::ToggleEnclosure => PathCommand::ToggleEnclosure.into(),
            Self::Delete => PathCommand::DeleteElement.into(),

            Self::MoveElementUp => element(Direction::Up),
            Self::MoveElementDown => element(Direction::Down),
            Self::MoveElementLeft => element(Direction::Left),
            Self::MoveElementRight => element(Direction::Right),
            Self::MoveUnitPathUp => unit_path(Direction::Up),
            Self::MoveUnitPathDown => unit_path(Direction::Down),
            Self::MoveUnitPathLeft => unit_path(Direction::Left),
            Self::MoveUnitPathRight => unit_path(Direction::Right),
            Self::MoveFirstControlUp => first(Direction::Up),
            Self::MoveFirstControlDown => first(Direction::Down),
            Self::MoveFirstControlLeft => first(Direction::Left),
            Self::MoveFirstControlRight => first(Direction::Right),
            Self::MoveSecondControlUp => second(Direction::Up),
            Self::MoveSecondControlDown => second(Direction::Down),
            Self::MoveSecondControlLeft => second(Direction::Left),
            Self::MoveSecondControlRight => second(Direction::Right),
        }
    }
}
