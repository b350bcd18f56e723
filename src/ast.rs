use std::fmt;

/// Integer coordinate on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// RGB color, one byte per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The three shape blocks a save file can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Squiggle,
}

impl ShapeKind {
    /// Keyword opening a block of this kind (`Circle`).
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Squiggle => "Squiggle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Circle given by its centre and radius.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Circle {
    color: Color,
    filled: bool,
    centre: Point,
    radius: u32,
}

impl Circle {
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    #[must_use]
    pub const fn centre(&self) -> Point {
        self.centre
    }

    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub const fn set_fill(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub const fn set_centre(&mut self, centre: Point) {
        self.centre = centre;
    }

    pub const fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }
}

/// Axis-aligned rectangle spanned by two opposite corners.
///
/// The corners keep the roles they were given: `p1` is whichever
/// corner was set first, with no normalisation to top-left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rectangle {
    color: Color,
    filled: bool,
    p1: Point,
    p2: Point,
}

impl Rectangle {
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    #[must_use]
    pub const fn p1(&self) -> Point {
        self.p1
    }

    #[must_use]
    pub const fn p2(&self) -> Point {
        self.p2
    }

    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub const fn set_fill(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub const fn set_p1(&mut self, p1: Point) {
        self.p1 = p1;
    }

    pub const fn set_p2(&mut self, p2: Point) {
        self.p2 = p2;
    }
}

/// Freehand line through an ordered list of points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Squiggle {
    color: Color,
    filled: bool,
    points: Vec<Point>,
}

impl Squiggle {
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub const fn set_fill(&mut self, filled: bool) {
        self.filled = filled;
    }

    /// Append a point to the end of the line.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

/// Finished circle, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleCommand(Circle);

impl CircleCommand {
    #[must_use]
    pub const fn new(circle: Circle) -> Self {
        Self(circle)
    }

    #[must_use]
    pub const fn circle(&self) -> &Circle {
        &self.0
    }
}

/// Finished rectangle, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleCommand(Rectangle);

impl RectangleCommand {
    #[must_use]
    pub const fn new(rectangle: Rectangle) -> Self {
        Self(rectangle)
    }

    #[must_use]
    pub const fn rectangle(&self) -> &Rectangle {
        &self.0
    }
}

/// Finished squiggle, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquiggleCommand(Squiggle);

impl SquiggleCommand {
    #[must_use]
    pub const fn new(squiggle: Squiggle) -> Self {
        Self(squiggle)
    }

    #[must_use]
    pub const fn squiggle(&self) -> &Squiggle {
        &self.0
    }
}

/// One drawable entry of a save file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintCommand {
    Circle(CircleCommand),
    Rectangle(RectangleCommand),
    Squiggle(SquiggleCommand),
}

impl PaintCommand {
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Squiggle(_) => ShapeKind::Squiggle,
        }
    }

    /// Color of the wrapped shape.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Circle(c) => c.circle().color(),
            Self::Rectangle(r) => r.rectangle().color(),
            Self::Squiggle(s) => s.squiggle().color(),
        }
    }

    /// Whether the wrapped shape is drawn filled.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        match self {
            Self::Circle(c) => c.circle().is_filled(),
            Self::Rectangle(r) => r.rectangle().is_filled(),
            Self::Squiggle(s) => s.squiggle().is_filled(),
        }
    }
}
