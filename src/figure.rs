//! Figure catalog: the 7 shapes as pivot-relative offsets, plus the 90° rotation.

use crate::geometry::Point;

/// The 7 figure shapes. Doubles as the colour key for `Theme::figure_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    Square,
    Stick,
    S,
    Z,
    L,
    J,
    T,
}

impl FigureKind {
    pub const ALL: [Self; 7] = [
        Self::Square,
        Self::Stick,
        Self::S,
        Self::Z,
        Self::L,
        Self::J,
        Self::T,
    ];

    /// 4 cells relative to the rotation pivot at the origin. The square and
    /// stick are deliberately asymmetric around the pivot; rotation behaviour
    /// follows from these literals, not from a centred rotation.
    pub fn template(self) -> [Point; 4] {
        match self {
            Self::Square => [
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1),
            ],
            Self::Stick => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
            ],
            Self::S => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(0, -1),
                Point::new(1, -1),
            ],
            Self::Z => [
                Point::new(-1, -1),
                Point::new(0, -1),
                Point::new(0, 0),
                Point::new(1, 0),
            ],
            Self::L => [
                Point::new(0, 1),
                Point::new(0, 0),
                Point::new(0, -1),
                Point::new(-1, -1),
            ],
            Self::J => [
                Point::new(0, 1),
                Point::new(0, 0),
                Point::new(0, -1),
                Point::new(1, -1),
            ],
            Self::T => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
            ],
        }
    }

    /// Name shown in the legend next to the "next" preview.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Stick => "Stick",
            Self::S => "S",
            Self::Z => "Z",
            Self::L => "L",
            Self::J => "J",
            Self::T => "T",
        }
    }

    /// Colour slot 0..7 for `Theme::figure_color`.
    #[inline]
    pub fn color_index(self) -> u8 {
        self as u8
    }
}

/// Rotation direction for the falling figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// 90° rotation of local points about the origin. Left is (x, y) → (y, −x),
/// right is (x, y) → (−y, x); the two are exact inverses.
pub fn rotated(points: [Point; 4], dir: Rotation) -> [Point; 4] {
    points.map(|p| match dir {
        Rotation::Left => Point::new(p.y, -p.x),
        Rotation::Right => Point::new(-p.y, p.x),
    })
}

/// The falling figure: 4 local points (pivot at origin) and its shape identity.
/// Copied from the catalog at spawn; rotation replaces the points wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub points: [Point; 4],
    pub kind: FigureKind,
}

impl Figure {
    pub fn new(kind: FigureKind) -> Self {
        Self {
            points: kind.template(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_left_then_right_restores_all_kinds() {
        for kind in FigureKind::ALL {
            let points = kind.template();
            assert_eq!(rotated(rotated(points, Rotation::Left), Rotation::Right), points);
            assert_eq!(rotated(rotated(points, Rotation::Right), Rotation::Left), points);
        }
    }

    #[test]
    fn four_left_rotations_are_identity() {
        for kind in FigureKind::ALL {
            let mut points = kind.template();
            for _ in 0..4 {
                points = rotated(points, Rotation::Left);
            }
            assert_eq!(points, kind.template());
        }
    }

    #[test]
    fn stick_template_matches_catalog() {
        assert_eq!(
            FigureKind::Stick.template(),
            [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
            ]
        );
    }

    #[test]
    fn every_kind_has_four_distinct_cells() {
        for kind in FigureKind::ALL {
            let points = kind.template();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(points[i], points[j], "{:?} has duplicate cells", kind);
                }
            }
        }
    }
}
