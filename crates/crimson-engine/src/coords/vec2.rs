use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D point or direction in logical pixels.
///
/// Arithmetic operators are pure and return a new value. The compound-assignment
/// operators (`+=`, `-=`, `*=`) are the explicit in-place forms.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Builds a vector from untrusted components, replacing NaN/infinite values with `0`.
    #[inline]
    pub fn sanitized(x: f32, y: f32) -> Self {
        let fix = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self::new(fix(x), fix(y))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns `self / |self|`.
    ///
    /// Not guarded: a zero-length vector produces NaN components. Use
    /// [`try_normalized`](Self::try_normalized) when the input may be degenerate.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        self / self.length()
    }

    /// Like [`normalized`](Self::normalized) but returns `None` for zero or non-finite length.
    #[inline]
    pub fn try_normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({},{})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < EPS);
        assert!((v.x - 0.6).abs() < EPS);
        assert!((v.y - 0.8).abs() < EPS);
    }

    #[test]
    fn normalized_zero_is_nan() {
        // Unguarded on purpose; the checked variant reports it instead.
        let v = Vec2::zero().normalized();
        assert!(v.x.is_nan() && v.y.is_nan());
        assert!(Vec2::zero().try_normalized().is_none());
    }

    #[test]
    fn operators_are_pure() {
        let a = Vec2::new(1.0, 2.0);
        let b = a + Vec2::new(10.0, 20.0);
        assert_eq!(a, Vec2::new(1.0, 2.0));
        assert_eq!(b, Vec2::new(11.0, 22.0));
        assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn compound_assignment_mutates_in_place() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(2.0, 3.0);
        v *= 2.0;
        v -= Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(5.0, 7.0));
    }

    #[test]
    fn sanitized_coerces_non_finite_to_zero() {
        assert_eq!(Vec2::sanitized(f32::NAN, 2.0), Vec2::new(0.0, 2.0));
        assert_eq!(Vec2::sanitized(1.0, f32::INFINITY), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec2::new(1.5, -2.0).to_string(), "Vector2(1.5,-2)");
    }
}
