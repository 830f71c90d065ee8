//! # Elements
//!
//! One drawable segment of a unit path. Anchors and control points are stored
//! absolute; the path grammar re-derives relative offsets at render time, so
//! repositioning one point never disturbs where the rest of the outline sits.

use crate::geom::Point;
use smallvec::SmallVec;

/// A single segment: where it ends, and the control geometry that shapes it.
///
/// Control-point presence is structural. Smooth kinds do not store their
/// first control at all, it is mirrored from the previous segment on demand,
/// see [`Element::mirrored_control`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Element {
    Move { to: Point },
    Line { to: Point },
    Cubic { ctrl1: Point, ctrl2: Point, to: Point },
    SmoothCubic { ctrl2: Point, to: Point },
    Quadratic { ctrl1: Point, to: Point },
    SmoothQuadratic { to: Point },
}

impl Element {
    /// The endpoint of this segment.
    #[must_use]
    pub fn anchor(&self) -> Point {
        match self {
            Self::Move { to }
            | Self::Line { to }
            | Self::Cubic { to, .. }
            | Self::SmoothCubic { to, .. }
            | Self::Quadratic { to, .. }
            | Self::SmoothQuadratic { to } => *to,
        }
    }
    pub(crate) fn anchor_mut(&mut self) -> &mut Point {
        match self {
            Self::Move { to }
            | Self::Line { to }
            | Self::Cubic { to, .. }
            | Self::SmoothCubic { to, .. }
            | Self::Quadratic { to, .. }
            | Self::SmoothQuadratic { to } => to,
        }
    }
    /// The last *stored* control point, the one a following smooth segment
    /// mirrors. A quadratic's single control counts.
    #[must_use]
    pub fn last_control(&self) -> Option<Point> {
        match self {
            Self::Cubic { ctrl2, .. } | Self::SmoothCubic { ctrl2, .. } => Some(*ctrl2),
            Self::Quadratic { ctrl1, .. } => Some(*ctrl1),
            Self::Move { .. } | Self::Line { .. } | Self::SmoothQuadratic { .. } => None,
        }
    }
    /// The stored first control, where one exists. Smooth kinds have none,
    /// theirs is derived.
    pub(crate) fn first_control_mut(&mut self) -> Option<&mut Point> {
        match self {
            Self::Cubic { ctrl1, .. } | Self::Quadratic { ctrl1, .. } => Some(ctrl1),
            _ => None,
        }
    }
    pub(crate) fn second_control_mut(&mut self) -> Option<&mut Point> {
        match self {
            Self::Cubic { ctrl2, .. } | Self::SmoothCubic { ctrl2, .. } => Some(ctrl2),
            _ => None,
        }
    }
    /// Shift the anchor and every stored control by `delta`.
    pub(crate) fn translate(&mut self, delta: Point) {
        match self {
            Self::Move { to } | Self::Line { to } | Self::SmoothQuadratic { to } => *to += delta,
            Self::Cubic { ctrl1, ctrl2, to } => {
                *ctrl1 += delta;
                *ctrl2 += delta;
                *to += delta;
            }
            Self::SmoothCubic { ctrl2, to } => {
                *ctrl2 += delta;
                *to += delta;
            }
            Self::Quadratic { ctrl1, to } => {
                *ctrl1 += delta;
                *to += delta;
            }
        }
    }
    /// The implied first control of a smooth segment following `prev`: the
    /// previous segment's last control, mirrored through the previous anchor.
    ///
    /// When `prev` stores no control (a smooth segment after a line, say) the
    /// mirror degenerates to the previous anchor. That is the intended
    /// flat-start policy, not an error.
    #[must_use]
    pub fn mirrored_control(prev: &Self) -> Point {
        match prev.last_control() {
            Some(control) => control.reflect_about(prev.anchor()),
            None => {
                log::debug!("no control to mirror, degenerating to the previous anchor");
                prev.anchor()
            }
        }
    }
    /// Path-grammar token for this segment, offsets relative to `origin` (the
    /// previous anchor). Mirrored controls are never emitted, the grammar's
    /// smooth commands imply them.
    #[must_use]
    pub fn command(&self, origin: Point) -> String {
        match self {
            Self::Move { to } => format!("M {}", *to - origin),
            Self::Line { to } => format!("L {}", *to - origin),
            Self::Cubic { ctrl1, ctrl2, to } => {
                format!("C {} {} {}", *ctrl1 - origin, *ctrl2 - origin, *to - origin)
            }
            Self::SmoothCubic { ctrl2, to } => {
                format!("S {} {}", *ctrl2 - origin, *to - origin)
            }
            Self::Quadratic { ctrl1, to } => {
                format!("Q {} {}", *ctrl1 - origin, *to - origin)
            }
            Self::SmoothQuadratic { to } => format!("T {}", *to - origin),
        }
    }
    /// The editing-overlay primitives for this segment: its anchor marker,
    /// markers on stored and mirrored controls, and the handle lines joining
    /// controls to the anchors they shape.
    ///
    /// Purely derived, never part of the path itself.
    #[must_use]
    pub fn guides(&self, prev: Option<&Self>, current: bool) -> SmallVec<[Guide; 5]> {
        let origin = prev.map_or(Point::ZERO, Self::anchor);
        let anchor = Guide::Anchor {
            at: self.anchor(),
            current,
        };
        match self {
            Self::Move { .. } | Self::Line { .. } => SmallVec::from_iter([anchor]),
            Self::Cubic { ctrl1, ctrl2, to } => SmallVec::from_iter([
                Guide::Handle {
                    from: origin,
                    to: *ctrl1,
                },
                Guide::Control { at: *ctrl1 },
                Guide::Handle {
                    from: *to,
                    to: *ctrl2,
                },
                Guide::Control { at: *ctrl2 },
                anchor,
            ]),
            Self::SmoothCubic { ctrl2, to } => {
                let mirrored = prev.map_or(origin, Self::mirrored_control);
                SmallVec::from_iter([
                    Guide::Handle {
                        from: origin,
                        to: mirrored,
                    },
                    Guide::MirroredControl { at: mirrored },
                    Guide::Handle {
                        from: *to,
                        to: *ctrl2,
                    },
                    Guide::Control { at: *ctrl2 },
                    anchor,
                ])
            }
            Self::Quadratic { ctrl1, to } => SmallVec::from_iter([
                Guide::Handle {
                    from: origin,
                    to: *ctrl1,
                },
                Guide::Handle {
                    from: *to,
                    to: *ctrl1,
                },
                Guide::Control { at: *ctrl1 },
                anchor,
            ]),
            Self::SmoothQuadratic { to } => {
                let mirrored = prev.map_or(origin, Self::mirrored_control);
                SmallVec::from_iter([
                    Guide::Handle {
                        from: origin,
                        to: mirrored,
                    },
                    Guide::Handle {
                        from: *to,
                        to: mirrored,
                    },
                    Guide::MirroredControl { at: mirrored },
                    anchor,
                ])
            }
        }
    }
}

/// One drawable primitive of the guide overlay.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Guide {
    /// Marker on a segment anchor. `current` marks the element the cursor
    /// is on.
    Anchor { at: Point, current: bool },
    /// Marker on a stored control point.
    Control { at: Point },
    /// Marker on a derived (mirrored) control point.
    MirroredControl { at: Point },
    /// Line joining an anchor to the control that shapes it.
    Handle { from: Point, to: Point },
}

const ANCHOR_RADIUS: f32 = 2.0;
const CONTROL_RADIUS: f32 = 1.5;

impl Guide {
    /// Overlay markup for this primitive. Styling hangs off the classes.
    #[must_use]
    pub fn markup(&self) -> String {
        fn circle(class: &str, at: Point, radius: f32) -> String {
            format!(
                r#"<circle class="{class}" cx="{}" cy="{}" r="{radius}"/>"#,
                at.x, at.y
            )
        }
        match self {
            Self::Anchor { at, current: false } => circle("guide-anchor", *at, ANCHOR_RADIUS),
            Self::Anchor { at, current: true } => {
                circle("guide-anchor guide-current", *at, ANCHOR_RADIUS)
            }
            Self::Control { at } => circle("guide-control", *at, CONTROL_RADIUS),
            Self::MirroredControl { at } => {
                circle("guide-control guide-mirrored", *at, CONTROL_RADIUS)
            }
            Self::Handle { from, to } => format!(
                r#"<line class="guide-handle" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                from.x, from.y, to.x, to.y
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Element, Guide};
    use crate::geom::Point;

    #[test]
    fn commands_are_relative() {
        let origin = Point::new(10.0, 0.0);
        assert_eq!(
            Element::Line {
                to: Point::new(20.0, 0.0)
            }
            .command(origin),
            "L 10 0"
        );
        assert_eq!(
            Element::Cubic {
                ctrl1: Point::new(10.0, 10.0),
                ctrl2: Point::new(20.0, 10.0),
                to: Point::new(20.0, 0.0),
            }
            .command(origin),
            "C 0 10 10 10 10 0"
        );
        assert_eq!(
            Element::SmoothQuadratic {
                to: Point::new(15.0, 5.0)
            }
            .command(origin),
            "T 5 5"
        );
    }
    #[test]
    fn mirrored_control_reflects_previous() {
        let prev = Element::Cubic {
            ctrl1: Point::new(0.0, 10.0),
            ctrl2: Point::new(10.0, 10.0),
            to: Point::new(20.0, 0.0),
        };
        // 2 * (20, 0) - (10, 10)
        assert_eq!(Element::mirrored_control(&prev), Point::new(30.0, -10.0));
    }
    #[test]
    fn mirrored_control_degenerates_without_previous_control() {
        let prev = Element::Line {
            to: Point::new(20.0, 0.0),
        };
        assert_eq!(Element::mirrored_control(&prev), Point::new(20.0, 0.0));
    }
    #[test]
    fn translate_carries_controls() {
        let mut element = Element::Quadratic {
            ctrl1: Point::new(5.0, 5.0),
            to: Point::new(10.0, 0.0),
        };
        element.translate(Point::new(1.0, 2.0));
        assert_eq!(
            element,
            Element::Quadratic {
                ctrl1: Point::new(6.0, 7.0),
                to: Point::new(11.0, 2.0),
            }
        );
    }
    #[test]
    fn smooth_guides_show_the_mirror() {
        let prev = Element::Quadratic {
            ctrl1: Point::new(5.0, 10.0),
            to: Point::new(10.0, 0.0),
        };
        let element = Element::SmoothQuadratic {
            to: Point::new(20.0, 0.0),
        };
        let mirrored = Point::new(15.0, -10.0);
        assert!(element
            .guides(Some(&prev), false)
            .contains(&Guide::MirroredControl { at: mirrored }));
    }
}
