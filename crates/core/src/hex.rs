//! Geometry for a single regular hexagon in screen space.
//!
//! ## Orientation
//!
//! Hexagons come in two orientations, 30° apart:
//!
//! ```text
//!   flat-top          pointy-top
//!    4 ___ 5              4
//!     /   \             /   \
//!  3 /     \ 0        3       5
//!    \     /          |       |
//!     \___/           2       0
//!    2     1            \   /
//!                         1
//! ```
//!
//! Vertex `k` sits at angle `rotation + 60k`, measured from the positive x
//! axis with y growing **downward**. Edge `k` runs from vertex `k` to vertex
//! `k + 1`, so the numbers above also tell you which edge is which: in a
//! flat-top hexagon edge 2 is the lower-left side, edge 3 the upper-left, etc.
//! Hit-testing depends on this mapping, so don't reorder the vertices.

use crate::{
    error::GridError,
    trig::TrigTable,
    util::unit::{Point2, Rect, Vector2},
};
use serde::{Deserialize, Serialize};

/// The two ways a hexagon can be rotated
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Horizontal top and bottom edges, vertices on the left and right
    FlatTop,
    /// Vertices on the top and bottom, vertical left and right edges
    PointyTop,
}

impl Orientation {
    /// Angle (in degrees) of the first vertex
    pub fn rotation(self) -> i32 {
        match self {
            Self::FlatTop => 0,
            Self::PointyTop => 30,
        }
    }
}

/// The line along one edge of a hexagon, as a function of one axis. A
/// hexagon edge can be axis-aligned, in which case it only has a value in
/// one direction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EdgeFn {
    /// Every point on the line has this x. Solving for y is undefined.
    Vertical { x: f64 },
    /// Every point on the line has this y. Solving for x is undefined.
    Horizontal { y: f64 },
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
}

impl EdgeFn {
    /// Build the line that passes through two points. The points can't be
    /// identical.
    pub fn between(p1: Point2, p2: Point2) -> Self {
        if p1.x == p2.x {
            Self::Vertical { x: p1.x }
        } else if p1.y == p2.y {
            Self::Horizontal { y: p1.y }
        } else {
            let slope = (p2.y - p1.y) / (p2.x - p1.x);
            Self::Sloped {
                slope,
                intercept: p1.y - slope * p1.x,
            }
        }
    }

    /// Get the y value of the line at the given x
    pub fn y_at(self, x: f64) -> anyhow::Result<f64> {
        match self {
            Self::Vertical { .. } => Err(GridError::UndefinedValue {
                function: "vertical edge y(x)",
                input: x,
            }
            .into()),
            Self::Horizontal { y } => Ok(y),
            Self::Sloped { slope, intercept } => Ok(slope * x + intercept),
        }
    }

    /// Get the x value of the line at the given y
    pub fn x_at(self, y: f64) -> anyhow::Result<f64> {
        match self {
            Self::Vertical { x } => Ok(x),
            Self::Horizontal { .. } => Err(GridError::UndefinedValue {
                function: "horizontal edge x(y)",
                input: y,
            }
            .into()),
            Self::Sloped { slope, intercept } => Ok((y - intercept) / slope),
        }
    }
}

/// A regular hexagon in screen space. The vertex list is closed: it holds
/// the 6 corners plus a copy of the first corner at the end, so that edge `k`
/// is always `vertices[k]..vertices[k + 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    /// Side length, which is also the distance from the center to any vertex
    side: f64,
    /// Distance from the center to the midpoint of any side
    apothem: f64,
    orientation: Orientation,
    center: Point2,
    vertices: [Point2; 7],
    bounds: Rect,
    edges: [EdgeFn; 6],
}

impl Hexagon {
    pub fn new(
        table: &TrigTable,
        side: f64,
        center: Point2,
        orientation: Orientation,
    ) -> Self {
        let rotation = orientation.rotation();
        let mut vertices = [center; 7];
        for (k, vertex) in vertices.iter_mut().take(6).enumerate() {
            *vertex =
                center + table.displacement(rotation + 60 * k as i32, side);
        }
        vertices[6] = vertices[0];

        let apothem = side * table.cos_deg(30);
        let bounds = match orientation {
            Orientation::FlatTop => {
                Rect::from_center(center, side * 2.0, apothem * 2.0)
            }
            Orientation::PointyTop => {
                Rect::from_center(center, apothem * 2.0, side * 2.0)
            }
        };

        Self {
            side,
            apothem,
            orientation,
            center,
            vertices,
            bounds,
            edges: Self::edges_for(&vertices),
        }
    }

    fn edges_for(vertices: &[Point2; 7]) -> [EdgeFn; 6] {
        let mut edges = [EdgeFn::Horizontal { y: 0.0 }; 6];
        for (k, edge) in edges.iter_mut().enumerate() {
            *edge = EdgeFn::between(vertices[k], vertices[k + 1]);
        }
        edges
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn apothem(&self) -> f64 {
        self.apothem
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    /// All 7 vertices, where the last is a copy of the first
    pub fn vertices(&self) -> &[Point2; 7] {
        &self.vertices
    }

    /// The 6 distinct corners of the hexagon
    pub fn corners(&self) -> &[Point2] {
        &self.vertices[..6]
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Edge functions, where edge `k` runs from vertex `k` to vertex `k + 1`
    pub fn edges(&self) -> &[EdgeFn; 6] {
        &self.edges
    }

    /// Move the whole hexagon by an offset
    pub fn translate(&mut self, offset: Vector2) {
        self.center += offset;
        for vertex in self.vertices.iter_mut() {
            *vertex += offset;
        }
        self.bounds.translate(offset);
        self.edges = Self::edges_for(&self.vertices);
    }

    /// Is the point inside (or on the border of) this hexagon?
    pub fn contains_point(&self, point: Point2) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        match self.orientation {
            Orientation::FlatTop => self.contains_flat_top(point),
            Orientation::PointyTop => self.contains_pointy_top(point),
        }
    }

    /// The middle vertical band of a flat-top hexagon is a rectangle, which
    /// the bounds check already covered. Outside that band, the point has to
    /// sit between the upper and lower slanted edges on that side.
    fn contains_flat_top(&self, point: Point2) -> bool {
        let half_side = self.side / 2.0;
        let (upper, lower) = if point.x < self.center.x - half_side {
            (self.edges[3], self.edges[2])
        } else if point.x > self.center.x + half_side {
            (self.edges[5], self.edges[0])
        } else {
            return true;
        };
        match (upper.y_at(point.x), lower.y_at(point.x)) {
            (Ok(top), Ok(bottom)) => top <= point.y && point.y <= bottom,
            _ => false,
        }
    }

    /// Same idea as flat-top, rotated: the middle horizontal band is a
    /// rectangle, above it the point must be below both upper edges, and
    /// below it the point must be above both lower edges.
    fn contains_pointy_top(&self, point: Point2) -> bool {
        let half_side = self.side / 2.0;
        let (left, right, above) = if point.y < self.center.y - half_side {
            (self.edges[3], self.edges[4], true)
        } else if point.y > self.center.y + half_side {
            (self.edges[1], self.edges[0], false)
        } else {
            return true;
        };
        match (left.y_at(point.x), right.y_at(point.x)) {
            (Ok(left_y), Ok(right_y)) if above => {
                point.y >= left_y && point.y >= right_y
            }
            (Ok(left_y), Ok(right_y)) => {
                point.y <= left_y && point.y <= right_y
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn hexagon(orientation: Orientation) -> Hexagon {
        Hexagon::new(&TrigTable::new(), 10.0, Point2::ORIGIN, orientation)
    }

    #[test]
    fn test_vertices() {
        let hex = hexagon(Orientation::FlatTop);
        let vertices = hex.vertices();
        assert_eq!(vertices[0], Point2::new(10.0, 0.0));
        assert_eq!(vertices[3], Point2::new(-10.0, 0.0));
        assert_eq!(vertices[6], vertices[0]);
        assert_approx_eq!(vertices[1].x, 5.0);
        assert_approx_eq!(vertices[1].y, 8.660254037844386);
        assert_approx_eq!(hex.apothem(), 8.660254037844386);

        // Every corner is one side length from the center, and neighboring
        // corners are one side length from each other
        for k in 0..6 {
            assert_approx_eq!(hex.center().distance_to(vertices[k]), 10.0);
            assert_approx_eq!(vertices[k].distance_to(vertices[k + 1]), 10.0);
        }

        let pointy = hexagon(Orientation::PointyTop);
        assert_eq!(pointy.vertices()[1], Point2::new(0.0, 10.0));
        assert_eq!(pointy.vertices()[4], Point2::new(0.0, -10.0));
        assert_eq!(pointy.corners().len(), 6);
    }

    #[test]
    fn test_bounds() {
        let flat = hexagon(Orientation::FlatTop).bounds();
        assert_approx_eq!(flat.width, 20.0);
        assert_approx_eq!(flat.height, 17.320508075688775);

        let pointy = hexagon(Orientation::PointyTop).bounds();
        assert_approx_eq!(pointy.width, 17.320508075688775);
        assert_approx_eq!(pointy.height, 20.0);
    }

    #[test]
    fn test_axis_aligned_edges() {
        // Flat-top has horizontal top and bottom edges
        let flat = hexagon(Orientation::FlatTop);
        assert!(matches!(flat.edges()[1], EdgeFn::Horizontal { .. }));
        assert!(matches!(flat.edges()[4], EdgeFn::Horizontal { .. }));
        // Pointy-top has vertical left and right edges
        let pointy = hexagon(Orientation::PointyTop);
        assert!(matches!(pointy.edges()[2], EdgeFn::Vertical { .. }));
        assert!(matches!(pointy.edges()[5], EdgeFn::Vertical { .. }));
    }

    #[test]
    fn test_edge_fn() {
        let sloped =
            EdgeFn::between(Point2::new(0.0, 0.0), Point2::new(2.0, 4.0));
        assert_eq!(sloped.y_at(1.0).unwrap(), 2.0);
        assert_eq!(sloped.x_at(2.0).unwrap(), 1.0);

        let vertical =
            EdgeFn::between(Point2::new(3.0, 0.0), Point2::new(3.0, 5.0));
        assert_eq!(vertical.x_at(100.0).unwrap(), 3.0);
        let err = vertical.y_at(3.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GridError>(),
            Some(GridError::UndefinedValue { .. })
        ));

        let horizontal =
            EdgeFn::between(Point2::new(0.0, 7.0), Point2::new(5.0, 7.0));
        assert_eq!(horizontal.y_at(-20.0).unwrap(), 7.0);
        assert!(horizontal.x_at(7.0).is_err());
    }

    #[test]
    fn test_contains_flat_top() {
        let hex = hexagon(Orientation::FlatTop);
        assert!(hex.contains_point(Point2::ORIGIN));
        assert!(!hex.contains_point(Point2::new(100.0, 100.0)));

        // Middle band
        assert!(hex.contains_point(Point2::new(4.0, 8.5)));
        // Corner regions on the left, both inside and out. These are within
        // the bounding box, so only the slanted edges can reject them
        assert!(hex.contains_point(Point2::new(-8.0, 1.0)));
        assert!(hex.contains_point(Point2::new(-8.0, -3.0)));
        assert!(!hex.contains_point(Point2::new(-8.0, 4.0)));
        assert!(!hex.contains_point(Point2::new(-8.0, -4.0)));
        // Same on the right
        assert!(hex.contains_point(Point2::new(8.0, 3.0)));
        assert!(!hex.contains_point(Point2::new(8.0, 4.0)));
        assert!(!hex.contains_point(Point2::new(8.0, -4.0)));
    }

    #[test]
    fn test_contains_pointy_top() {
        let hex = hexagon(Orientation::PointyTop);
        assert!(hex.contains_point(Point2::ORIGIN));
        assert!(!hex.contains_point(Point2::new(100.0, 100.0)));

        // Middle band
        assert!(hex.contains_point(Point2::new(8.5, 4.0)));
        // Corner regions on top
        assert!(hex.contains_point(Point2::new(1.0, -8.0)));
        assert!(!hex.contains_point(Point2::new(6.0, -8.0)));
        assert!(!hex.contains_point(Point2::new(-6.0, -8.0)));
        // And on the bottom
        assert!(hex.contains_point(Point2::new(-1.0, 8.0)));
        assert!(!hex.contains_point(Point2::new(6.0, 8.0)));
        assert!(!hex.contains_point(Point2::new(-6.0, 8.0)));
    }

    #[test]
    fn test_translate() {
        let table = TrigTable::new();
        let mut hex = hexagon(Orientation::PointyTop);
        hex.translate(Vector2::new(50.0, 20.0));

        // Should be identical to a hexagon built at the new center
        let expected = Hexagon::new(
            &table,
            10.0,
            Point2::new(50.0, 20.0),
            Orientation::PointyTop,
        );
        assert_eq!(hex.center(), expected.center());
        for (actual, expected) in
            hex.vertices().iter().zip(expected.vertices().iter())
        {
            assert_approx_eq!(actual.x, expected.x);
            assert_approx_eq!(actual.y, expected.y);
        }
        assert!(hex.contains_point(Point2::new(51.0, 12.0)));
        assert!(!hex.contains_point(Point2::ORIGIN));
        assert!(matches!(hex.edges()[2], EdgeFn::Vertical { .. }));
    }
}
