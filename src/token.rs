use crate::ast::{Color, Point, ShapeKind};

/// A classified, whitespace-free save file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `PaintSaveFileVersion1.0`.
    FileStart,
    /// `EndPaintSaveFile`.
    FileEnd,
    /// `Circle`, `Rectangle` or `Squiggle`.
    ShapeStart(ShapeKind),
    /// `EndCircle`, `EndRectangle` or `EndSquiggle`.
    ShapeEnd(ShapeKind),
    /// `color:R,G,B`.
    Color(Color),
    /// `filled:true` or `filled:false`.
    Filled(bool),
    /// `center:(x,y)`.
    Center(Point),
    /// `radius:n`.
    Radius(u32),
    /// `p1:(x,y)`.
    RectP1(Point),
    /// `p2:(x,y)`.
    RectP2(Point),
    /// `points`.
    PointsStart,
    /// `point:(x,y)`.
    Point(Point),
    /// `endpoints`.
    PointsEnd,
    /// Anything else, including empty lines and out-of-range numbers.
    Unrecognized,
}
