//! 2D primitives for the editing plane.
//!
//! `Point` doubles as a displacement, since every command argument is a
//! relative offset. +X is right and +Y is down, matching the render surface.

/// A position or displacement on the canvas.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Mirror `self` through `about`. This is the smooth-control reflection,
    /// `2 * about - self`.
    #[must_use]
    pub fn reflect_about(self, about: Self) -> Self {
        about * 2.0 - self
    }
}
impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl std::ops::Mul<f32> for Point {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
/// Formats as `x y`, the spelling the path grammar uses between command
/// letters. Whole values print without a fraction.
impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Cardinal directions of the editing keys.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum::AsRefStr, strum::EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
impl Direction {
    /// Unit displacement. +Y points down, so `Up` is `(0, -1)`.
    #[must_use]
    pub fn unit(self) -> Point {
        match self {
            Self::Up => Point::new(0.0, -1.0),
            Self::Down => Point::new(0.0, 1.0),
            Self::Left => Point::new(-1.0, 0.0),
            Self::Right => Point::new(1.0, 0.0),
        }
    }
    /// Displacement of one nudge in this direction.
    #[must_use]
    pub fn step(self, step: Step) -> Point {
        self.unit() * step.magnitude()
    }
}

/// Magnitude of one nudge. `Large` is the shift-modified step of the input
/// surface.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Step {
    Unit,
    Large,
}
impl Step {
    #[must_use]
    pub fn magnitude(self) -> f32 {
        match self {
            Self::Unit => 1.0,
            Self::Large => 10.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, Point, Step};

    #[test]
    fn reflection() {
        let control = Point::new(10.0, 10.0);
        let anchor = Point::new(20.0, 0.0);
        assert_eq!(control.reflect_about(anchor), Point::new(30.0, -10.0));
        // Reflecting a point about itself is the identity.
        assert_eq!(anchor.reflect_about(anchor), anchor);
    }
    #[test]
    fn direction_steps() {
        assert_eq!(Direction::Up.step(Step::Unit), Point::new(0.0, -1.0));
        assert_eq!(Direction::Down.step(Step::Large), Point::new(0.0, 10.0));
        assert_eq!(Direction::Left.step(Step::Large), Point::new(-10.0, 0.0));
        assert_eq!(Direction::Right.step(Step::Unit), Point::new(1.0, 0.0));
    }
    #[test]
    fn display_drops_fraction_for_whole_values() {
        assert_eq!(Point::new(10.0, 0.0).to_string(), "10 0");
        assert_eq!(Point::new(-2.5, 7.0).to_string(), "-2.5 7");
    }
}
