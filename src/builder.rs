use crate::ast::{
    Circle, CircleCommand, Color, PaintCommand, Point, Rectangle, RectangleCommand, Squiggle,
    SquiggleCommand,
};

impl Circle {
    /// Create an unfilled black circle.
    #[must_use]
    pub fn new(centre: Point, radius: u32) -> Self {
        let mut circle = Self::default();
        circle.set_centre(centre);
        circle.set_radius(radius);
        circle
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, filled: bool) -> Self {
        self.set_fill(filled);
        self
    }
}

impl Rectangle {
    /// Create an unfilled black rectangle from two corners.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        let mut rectangle = Self::default();
        rectangle.set_p1(p1);
        rectangle.set_p2(p2);
        rectangle
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, filled: bool) -> Self {
        self.set_fill(filled);
        self
    }
}

impl Squiggle {
    /// Create an unfilled black squiggle through `points`.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        points.into_iter().fold(Self::default(), Self::with_point)
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, filled: bool) -> Self {
        self.set_fill(filled);
        self
    }

    /// Append a point.
    #[must_use]
    pub fn with_point(mut self, point: Point) -> Self {
        self.add_point(point);
        self
    }
}

impl From<Circle> for PaintCommand {
    fn from(circle: Circle) -> Self {
        Self::Circle(CircleCommand::new(circle))
    }
}

impl From<Rectangle> for PaintCommand {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(RectangleCommand::new(rectangle))
    }
}

impl From<Squiggle> for PaintCommand {
    fn from(squiggle: Squiggle) -> Self {
        Self::Squiggle(SquiggleCommand::new(squiggle))
    }
}
