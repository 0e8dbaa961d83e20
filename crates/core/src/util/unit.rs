use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D screen space. The origin is the top-left corner of the
/// viewport. Right is positive x, **down is positive y**. Every hexagon vertex,
/// tile center and pointer position lives in this space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        let offset = other - self;
        (offset.x * offset.x + offset.y * offset.y).sqrt()
    }
}

/// An offset in 2D screen space. See [Point2] for a description of the
/// coordinate space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::AddAssign<Vector2> for Point2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

// The derived Sub gives Point2 - Point2 = Point2, which isn't very useful.
// What we usually want is the offset between the two.
impl Point2 {
    pub fn offset_to(self, other: Point2) -> Vector2 {
        Vector2::new(other.x - self.x, other.y - self.y)
    }
}

/// An axis-aligned rectangle in screen space. Used as the bounding box of a
/// hexagon, which gives a cheap rejection test before the edge math.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[{}, {}; {}x{}]", left, top, width, height)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rectangle of the given size, centered on a point
    pub fn from_center(center: Point2, width: f64, height: f64) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Shift the rectangle in place
    pub fn translate(&mut self, offset: Vector2) {
        self.left += offset.x;
        self.top += offset.y;
    }

    /// Is the point inside the rectangle? Inclusive on **all** sides, so that
    /// points on the boundary of a hexagon's bounding box still get the
    /// precise edge test.
    pub fn contains(&self, point: Point2) -> bool {
        (self.left..=self.right()).contains(&point.x)
            && (self.top..=self.bottom()).contains(&point.y)
    }
}
