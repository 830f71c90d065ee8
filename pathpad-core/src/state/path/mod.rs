//! # Unit paths
//!
//! An independently closable outline: an ordered run of elements, an
//! enclosure flag, and a cursor naming the element the next reposition
//! command edits.

pub mod commands;
pub mod element;

use crate::commands::CommandError;
use crate::geom::Point;
use element::Element;

/// What a deletion left behind.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[must_use = "an emptied path must be dropped by its owning layer"]
pub enum DeleteOutcome {
    Remaining,
    Empty,
}

#[derive(Clone, PartialEq, Debug)]
pub struct UnitPath {
    /// Invariant: non-empty, and `elements[0]` is always `Element::Move`.
    elements: Vec<Element>,
    closed: bool,
    /// Invariant: `current < elements.len()`.
    current: usize,
}
impl Default for UnitPath {
    fn default() -> Self {
        Self::new()
    }
}
impl UnitPath {
    /// A fresh path: a single `Move` at the origin, open, cursor on it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec![Element::Move { to: Point::ZERO }],
            closed: false,
            current: 0,
        }
    }
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }
    #[must_use]
    pub fn current(&self) -> &Element {
        // Index OK - both invariants guarantee it.
        &self.elements[self.current]
    }
    fn last_anchor(&self) -> Point {
        // Unwrap OK - elements is never empty.
        self.elements.last().unwrap().anchor()
    }
    fn push(&mut self, element: Element) {
        self.elements.push(element);
        self.current = self.elements.len() - 1;
    }

    /// Append a line ending `to` away from the previous anchor and move the
    /// cursor onto it. Zero offsets are valid, a zero-length segment is meant
    /// to be nudged into place afterward. All the `add_*` below share both
    /// behaviors.
    pub fn add_line(&mut self, to: Point) {
        let base = self.last_anchor();
        self.push(Element::Line { to: base + to });
    }
    pub fn add_cubic(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let base = self.last_anchor();
        self.push(Element::Cubic {
            ctrl1: base + ctrl1,
            ctrl2: base + ctrl2,
            to: base + to,
        });
    }
    pub fn add_smooth_cubic(&mut self, ctrl2: Point, to: Point) {
        let base = self.last_anchor();
        self.push(Element::SmoothCubic {
            ctrl2: base + ctrl2,
            to: base + to,
        });
    }
    pub fn add_quadratic(&mut self, ctrl1: Point, to: Point) {
        let base = self.last_anchor();
        self.push(Element::Quadratic {
            ctrl1: base + ctrl1,
            to: base + to,
        });
    }
    pub fn add_smooth_quadratic(&mut self, to: Point) {
        let base = self.last_anchor();
        self.push(Element::SmoothQuadratic { to: base + to });
    }

    /// Shift the current element's anchor.
    pub fn nudge_anchor(&mut self, delta: Point) {
        *self.elements[self.current].anchor_mut() += delta;
    }
    /// Shift the current element's stored first control. Smooth kinds derive
    /// theirs, so for them (and for lines) this reports [`CommandError::NoSuchControl`].
    pub fn nudge_first_control(&mut self, delta: Point) -> Result<(), CommandError> {
        let control = self.elements[self.current]
            .first_control_mut()
            .ok_or(CommandError::NoSuchControl)?;
        *control += delta;
        Ok(())
    }
    pub fn nudge_second_control(&mut self, delta: Point) -> Result<(), CommandError> {
        let control = self.elements[self.current]
            .second_control_mut()
            .ok_or(CommandError::NoSuchControl)?;
        *control += delta;
        Ok(())
    }
    /// Shift every anchor and stored control by the same vector. Offsets
    /// between points are untouched, so the outline's shape is invariant.
    pub fn translate(&mut self, delta: Point) {
        for element in &mut self.elements {
            element.translate(delta);
        }
    }
    /// Flip the enclosure flag. Two applications restore it.
    pub fn toggle_enclosure(&mut self) {
        self.closed = !self.closed;
    }
    /// Remove the element under the cursor. The cursor clamps to the new last
    /// element; removing the head `Move` promotes whatever follows it so the
    /// outline still starts somewhere.
    pub fn delete_element(&mut self) -> DeleteOutcome {
        self.elements.remove(self.current);
        if self.elements.is_empty() {
            return DeleteOutcome::Empty;
        }
        self.current = self.current.min(self.elements.len() - 1);
        let first = &mut self.elements[0];
        if !matches!(first, Element::Move { .. }) {
            *first = Element::Move { to: first.anchor() };
        }
        DeleteOutcome::Remaining
    }

    /// The whole outline in the path grammar: one token per element, relative
    /// offsets, `Z` terminator when enclosed.
    #[must_use]
    pub fn path_code(&self) -> String {
        let mut origin = Point::ZERO;
        let mut tokens = Vec::with_capacity(self.elements.len() + 1);
        for element in &self.elements {
            tokens.push(element.command(origin));
            origin = element.anchor();
        }
        if self.closed {
            tokens.push("Z".to_owned());
        }
        tokens.join(" ")
    }
    /// The editing overlay: every element's guide primitives, in order.
    #[must_use]
    pub fn guide_code(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<&Element> = None;
        for (index, element) in self.elements.iter().enumerate() {
            for guide in element.guides(prev, index == self.current) {
                out.push_str(&guide.markup());
            }
            prev = Some(element);
        }
        out
    }
    /// The grammar token of the final element, the status-bar readout.
    #[must_use]
    pub fn last_element_code(&self) -> String {
        let origin = match self.elements.len() {
            0 | 1 => Point::ZERO,
            len => self.elements[len - 2].anchor(),
        };
        // Unwrap OK - elements is never empty.
        self.elements.last().unwrap().command(origin)
    }
}

#[cfg(test)]
mod test {
    use super::{DeleteOutcome, UnitPath};
    use crate::commands::CommandError;
    use crate::geom::Point;
    use crate::state::path::element::Element;

    #[test]
    fn render_matches_issued_offsets() {
        let mut path = UnitPath::new();
        path.add_line(Point::new(10.0, 0.0));
        path.add_cubic(
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(path.path_code(), "M 0 0 L 10 0 C 0 10 10 10 10 0");
        assert_eq!(path.elements().len(), 3);
    }
    #[test]
    fn adds_count_elements() {
        let mut path = UnitPath::new();
        path.add_line(Point::ZERO);
        path.add_quadratic(Point::ZERO, Point::ZERO);
        path.add_smooth_cubic(Point::ZERO, Point::ZERO);
        path.add_smooth_quadratic(Point::ZERO);
        // The initial Move is never counted.
        assert_eq!(path.elements().len() - 1, 4);
        assert_eq!(path.current_index(), 4);
    }
    #[test]
    fn nudge_moves_current_anchor() {
        let mut path = UnitPath::new();
        path.add_line(Point::new(10.0, 0.0));
        path.nudge_anchor(Point::new(10.0, 0.0));
        assert_eq!(path.current().anchor(), Point::new(20.0, 0.0));
        // The rendered offset follows the anchor.
        assert_eq!(path.path_code(), "M 0 0 L 20 0");
    }
    #[test]
    fn control_nudges_require_a_stored_control() {
        let mut path = UnitPath::new();
        path.add_line(Point::new(10.0, 0.0));
        assert_eq!(
            path.nudge_first_control(Point::new(1.0, 0.0)),
            Err(CommandError::NoSuchControl)
        );
        path.add_smooth_cubic(Point::new(5.0, 5.0), Point::new(10.0, 0.0));
        // The smooth first control is mirrored, not stored.
        assert_eq!(
            path.nudge_first_control(Point::new(1.0, 0.0)),
            Err(CommandError::NoSuchControl)
        );
        assert_eq!(path.nudge_second_control(Point::new(1.0, 0.0)), Ok(()));
    }
    #[test]
    fn translate_round_trips_exactly() {
        let mut path = UnitPath::new();
        path.add_cubic(
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        path.add_line(Point::new(-3.0, 7.5));
        let before = path.clone();
        path.translate(Point::new(12.0, -4.5));
        assert_ne!(path, before);
        path.translate(Point::new(-12.0, 4.5));
        assert_eq!(path, before);
    }
    #[test]
    fn enclosure_toggles_in_pairs() {
        let mut path = UnitPath::new();
        path.add_line(Point::new(10.0, 0.0));
        assert!(!path.is_closed());
        path.toggle_enclosure();
        assert!(path.is_closed());
        assert_eq!(path.path_code(), "M 0 0 L 10 0 Z");
        path.toggle_enclosure();
        assert!(!path.is_closed());
        assert_eq!(path.path_code(), "M 0 0 L 10 0");
    }
    #[test]
    fn mirror_tracks_previous_repositioning() {
        let mut path = UnitPath::new();
        path.add_quadratic(Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        path.add_smooth_quadratic(Point::new(10.0, 0.0));
        let mirror_of = |path: &UnitPath| {
            let elements = path.elements();
            Element::mirrored_control(&elements[elements.len() - 2])
        };
        // 2 * (10, 0) - (5, 10)
        assert_eq!(mirror_of(&path), Point::new(15.0, -10.0));

        // Move the cursor back to the quadratic and drag its control; the
        // mirror must follow, it is recomputed rather than cached.
        assert_eq!(path.delete_element(), DeleteOutcome::Remaining);
        path.nudge_first_control(Point::new(0.0, -4.0)).unwrap();
        path.add_smooth_quadratic(Point::new(10.0, 0.0));
        assert_eq!(mirror_of(&path), Point::new(15.0, -6.0));
    }
    #[test]
    fn delete_clamps_cursor_and_reports_empty() {
        let mut path = UnitPath::new();
        path.add_line(Point::new(10.0, 0.0));
        path.add_line(Point::new(10.0, 0.0));
        assert_eq!(path.delete_element(), DeleteOutcome::Remaining);
        assert_eq!(path.current_index(), 1);
        assert_eq!(path.delete_element(), DeleteOutcome::Remaining);
        assert_eq!(path.current_index(), 0);
        assert_eq!(path.delete_element(), DeleteOutcome::Empty);
    }
    #[test]
    fn deleting_the_head_promotes_a_new_move() {
        // The observed command surface keeps the cursor on the last element,
        // but the invariant has to survive a head deletion regardless.
        let mut path = UnitPath {
            elements: vec![
                Element::Move { to: Point::ZERO },
                Element::Line {
                    to: Point::new(10.0, 5.0),
                },
            ],
            closed: false,
            current: 0,
        };
        assert_eq!(path.delete_element(), DeleteOutcome::Remaining);
        assert!(matches!(path.elements()[0], Element::Move { .. }));
        assert_eq!(path.elements()[0].anchor(), Point::new(10.0, 5.0));
    }
    #[test]
    fn last_element_code_is_relative_to_its_predecessor() {
        let mut path = UnitPath::new();
        path.add_line(Point::new(10.0, 0.0));
        path.add_line(Point::new(5.0, 5.0));
        assert_eq!(path.last_element_code(), "L 5 5");
    }
}
