//! 2D integer points used by the figure catalog, collision checks and the cup.

use std::ops::{Add, AddAssign, Neg};

/// Plain (x, y) pair; copied freely, no invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_add_inverse_restores() {
        let p = Point::new(3, -2);
        let d = Point::new(-1, 5);
        assert_eq!(p + d + -d, p);
    }
}
