//! # Layers
//!
//! A drawing is an ordered stack of layers. Each owns its unit paths plus a
//! cursor naming the path that element edits land on. Selection is an index,
//! never a reference, so snapshots and equality stay structural.

pub mod commands;

use crate::commands::{CommandConsumer, CommandError};
use crate::state::path::{commands as path_commands, DeleteOutcome, UnitPath};

/// An `#rrggbb` color for layer styling.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}
impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbParseError {
    #[error("expected `#rrggbb`")]
    Malformed,
}
impl std::str::FromStr for Rgb {
    type Err = RgbParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(RgbParseError::Malformed)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(RgbParseError::Malformed);
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| RgbParseError::Malformed)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// How a layer's outlines are drawn.
#[derive(Clone, PartialEq, Debug)]
pub struct Style {
    pub stroke_width: f32,
    pub stroke: Rgb,
    /// `None` renders as an unfilled outline.
    pub fill: Option<Rgb>,
}
impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            stroke: Rgb::BLACK,
            fill: None,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Layer {
    paths: Vec<UnitPath>,
    /// Invariant: `Some(i)` implies `i < paths.len()`; `None` exactly when
    /// `paths` is empty.
    path_to_edit: Option<usize>,
    pub style: Style,
}
impl Layer {
    #[must_use]
    pub fn paths(&self) -> &[UnitPath] {
        &self.paths
    }
    #[must_use]
    pub fn path_to_edit(&self) -> Option<usize> {
        self.path_to_edit
    }
    #[must_use]
    pub fn edited_path(&self) -> Option<&UnitPath> {
        self.paths.get(self.path_to_edit?)
    }
    fn edited_path_mut(&mut self) -> Result<&mut UnitPath, CommandError> {
        let index = self.path_to_edit.ok_or(CommandError::NothingSelected)?;
        // Index OK - the selection invariant.
        Ok(&mut self.paths[index])
    }
    /// Append a fresh unit path and select it.
    pub fn add_unit_path(&mut self) {
        self.paths.push(UnitPath::new());
        self.path_to_edit = Some(self.paths.len() - 1);
    }
    /// Cycle the edited-path cursor by `delta` with wraparound.
    pub fn select_unit_path(&mut self, delta: isize) -> Result<(), CommandError> {
        let index = self.path_to_edit.ok_or(CommandError::NothingSelected)?;
        let len = self.paths.len() as isize;
        // rem_euclid keeps backwards cycling in range.
        let next = (index as isize + delta).rem_euclid(len) as usize;
        self.path_to_edit = Some(next);
        Ok(())
    }
    fn delete_element(&mut self) -> Result<(), CommandError> {
        let index = self.path_to_edit.ok_or(CommandError::NothingSelected)?;
        if self.paths[index].delete_element() == DeleteOutcome::Empty {
            self.paths.remove(index);
            self.path_to_edit = if self.paths.is_empty() {
                None
            } else {
                Some(index.min(self.paths.len() - 1))
            };
        }
        Ok(())
    }

    /// Every unit path's outline, joined into one multi-subpath description.
    #[must_use]
    pub fn path_code(&self) -> String {
        let codes: Vec<String> = self.paths.iter().map(UnitPath::path_code).collect();
        codes.join(" ")
    }
    /// Guide overlay for the path being edited. Nothing to show when no path
    /// is selected.
    #[must_use]
    pub fn guide_code(&self) -> String {
        self.edited_path().map(UnitPath::guide_code).unwrap_or_default()
    }
    /// Status readout: the grammar token of the edited path's last element.
    #[must_use]
    pub fn last_element_code(&self) -> Option<String> {
        Some(self.edited_path()?.last_element_code())
    }
}
impl CommandConsumer<path_commands::Command> for Layer {
    fn apply(&mut self, command: &path_commands::Command) -> Result<(), CommandError> {
        use path_commands::Command;
        match command {
            Command::AddUnitPath => {
                self.add_unit_path();
                Ok(())
            }
            Command::SelectUnitPath { delta } => self.select_unit_path(*delta),
            Command::AddLine { to } => {
                self.edited_path_mut()?.add_line(*to);
                Ok(())
            }
            Command::AddCubic { ctrl1, ctrl2, to } => {
                self.edited_path_mut()?.add_cubic(*ctrl1, *ctrl2, *to);
                Ok(())
            }
            Command::AddSmoothCubic { ctrl2, to } => {
                self.edited_path_mut()?.add_smooth_cubic(*ctrl2, *to);
                Ok(())
            }
            Command::AddQuadratic { ctrl1, to } => {
                self.edited_path_mut()?.add_quadratic(*ctrl1, *to);
                Ok(())
            }
            Command::AddSmoothQuadratic { to } => {
                self.edited_path_mut()?.add_smooth_quadratic(*to);
                Ok(())
            }
            Command::NudgeAnchor { direction, step } => {
                self.edited_path_mut()?.nudge_anchor(direction.step(*step));
                Ok(())
            }
            Command::NudgeUnitPath { direction, step } => {
                self.edited_path_mut()?.translate(direction.step(*step));
                Ok(())
            }
            Command::NudgeFirstControl { direction, step } => {
                let delta = direction.step(*step);
                self.edited_path_mut()?.nudge_first_control(delta)
            }
            Command::NudgeSecondControl { direction, step } => {
                let delta = direction.step(*step);
                self.edited_path_mut()?.nudge_second_control(delta)
            }
            Command::ToggleEnclosure => {
                self.edited_path_mut()?.toggle_enclosure();
                Ok(())
            }
            Command::DeleteElement => self.delete_element(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct LayerSet {
    layers: Vec<Layer>,
    /// Invariant: `active < layers.len()`.
    active: usize,
}
impl Default for LayerSet {
    /// One empty layer, selected. A drawing never has zero layers.
    fn default() -> Self {
        Self {
            layers: vec![Layer::default()],
            active: 0,
        }
    }
}
impl LayerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }
    #[must_use]
    pub fn active(&self) -> &Layer {
        // Index OK - the active invariant.
        &self.layers[self.active]
    }
    fn active_mut(&mut self) -> &mut Layer {
        &mut self.layers[self.active]
    }
    fn layer_mut(&mut self, index: usize) -> Result<&mut Layer, CommandError> {
        self.layers.get_mut(index).ok_or(CommandError::UnknownLayer)
    }
    /// Append a fresh layer and make it active.
    pub fn add_layer(&mut self) {
        self.layers.push(Layer::default());
        self.active = self.layers.len() - 1;
    }
    pub fn select_layer(&mut self, index: usize) -> Result<(), CommandError> {
        if index >= self.layers.len() {
            return Err(CommandError::UnknownLayer);
        }
        self.active = index;
        Ok(())
    }
}
impl CommandConsumer<commands::Command> for LayerSet {
    fn apply(&mut self, command: &commands::Command) -> Result<(), CommandError> {
        use commands::Command;
        match command {
            Command::AddLayer => {
                self.add_layer();
                Ok(())
            }
            Command::SelectLayer { index } => self.select_layer(*index),
            Command::SetStrokeWidth { index, width } => {
                self.layer_mut(*index)?.style.stroke_width = *width;
                Ok(())
            }
            Command::SetStroke { index, color } => {
                self.layer_mut(*index)?.style.stroke = *color;
                Ok(())
            }
            Command::SetFill { index, fill } => {
                self.layer_mut(*index)?.style.fill = *fill;
                Ok(())
            }
        }
    }
}
/// Element-level edits fall through to the active layer's edited path.
impl CommandConsumer<path_commands::Command> for LayerSet {
    fn apply(&mut self, command: &path_commands::Command) -> Result<(), CommandError> {
        self.active_mut().apply(command)
    }
}

#[cfg(test)]
mod test {
    use super::{commands, path_commands, CommandConsumer, CommandError, Layer, LayerSet, Rgb};
    use crate::geom::Point;

    #[test]
    fn hex_round_trip() {
        let color: Rgb = "#1a2b3c".parse().unwrap();
        assert_eq!(
            color,
            Rgb {
                r: 0x1a,
                g: 0x2b,
                b: 0x3c
            }
        );
        assert_eq!(color.to_string(), "#1a2b3c");
        assert!("1a2b3c".parse::<Rgb>().is_err());
        assert!("#1a2b".parse::<Rgb>().is_err());
        assert!("#1a2b3g".parse::<Rgb>().is_err());
    }
    #[test]
    fn selection_cycles_with_wraparound() {
        let mut layer = Layer::default();
        layer.add_unit_path();
        layer.add_unit_path();
        assert_eq!(layer.path_to_edit(), Some(1));
        layer.select_unit_path(1).unwrap();
        assert_eq!(layer.path_to_edit(), Some(0));
        layer.select_unit_path(1).unwrap();
        assert_eq!(layer.path_to_edit(), Some(1));
        layer.select_unit_path(-1).unwrap();
        layer.select_unit_path(-1).unwrap();
        assert_eq!(layer.path_to_edit(), Some(1));
    }
    #[test]
    fn edits_before_any_path_are_rejected_as_unselected() {
        let mut layer = Layer::default();
        assert_eq!(
            layer.apply(&path_commands::Command::AddLine {
                to: Point::new(10.0, 0.0)
            }),
            Err(CommandError::NothingSelected)
        );
        assert_eq!(
            layer.select_unit_path(1),
            Err(CommandError::NothingSelected)
        );
        assert_eq!(
            layer.apply(&path_commands::Command::DeleteElement),
            Err(CommandError::NothingSelected)
        );
    }
    #[test]
    fn deleting_the_last_path_clears_the_selection() {
        let mut layer = Layer::default();
        layer.add_unit_path();
        layer
            .apply(&path_commands::Command::AddLine {
                to: Point::new(10.0, 0.0),
            })
            .unwrap();
        // One deletion per element, then the path itself goes.
        layer.apply(&path_commands::Command::DeleteElement).unwrap();
        layer.apply(&path_commands::Command::DeleteElement).unwrap();
        assert!(layer.paths().is_empty());
        assert_eq!(layer.path_to_edit(), None);
        // And the layer is back to the premature-command case.
        assert_eq!(
            layer.apply(&path_commands::Command::DeleteElement),
            Err(CommandError::NothingSelected)
        );
    }
    #[test]
    fn layer_code_joins_subpaths() {
        let mut layer = Layer::default();
        layer.add_unit_path();
        layer
            .apply(&path_commands::Command::AddLine {
                to: Point::new(10.0, 0.0),
            })
            .unwrap();
        layer.add_unit_path();
        assert_eq!(layer.path_code(), "M 0 0 L 10 0 M 0 0");
    }
    #[test]
    fn style_commands_address_layers_by_index() {
        let mut set = LayerSet::new();
        set.add_layer();
        set.apply(&commands::Command::SetStrokeWidth {
            index: 0,
            width: 3.0,
        })
        .unwrap();
        assert_eq!(set.layers()[0].style.stroke_width, 3.0);
        assert_eq!(set.layers()[1].style.stroke_width, 1.0);
        assert_eq!(
            set.apply(&commands::Command::SelectLayer { index: 9 }),
            Err(CommandError::UnknownLayer)
        );
        // The failed select left the active layer alone.
        assert_eq!(set.active_index(), 1);
    }
}
