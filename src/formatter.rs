//! Serializes drawing commands back into save file text.
//!
//! Output uses the spaced, human-readable spelling of the keywords
//! (`Paint Save File Version 1.0`, `End Circle`) with tab-indented
//! attributes. The parser ignores whitespace, so the result reads back
//! to the same commands.

use std::fmt::Write;

use crate::ast::{Circle, Color, PaintCommand, Point, Rectangle, ShapeKind, Squiggle};

/// Format commands as a complete version 1.0 save file.
#[must_use]
pub fn format(commands: &[PaintCommand]) -> String {
    let mut out = String::from("Paint Save File Version 1.0\n");

    for command in commands {
        match command {
            PaintCommand::Circle(c) => format_circle(&mut out, c.circle()),
            PaintCommand::Rectangle(r) => format_rectangle(&mut out, r.rectangle()),
            PaintCommand::Squiggle(s) => format_squiggle(&mut out, s.squiggle()),
        }
    }

    out.push_str("End Paint Save File\n");
    out
}

fn format_circle(out: &mut String, circle: &Circle) {
    format_header(out, ShapeKind::Circle, circle.color(), circle.is_filled());
    format_point(out, 1, "center", circle.centre());
    let _ = writeln!(out, "\tradius:{}", circle.radius());
    format_end(out, ShapeKind::Circle);
}

fn format_rectangle(out: &mut String, rectangle: &Rectangle) {
    format_header(out, ShapeKind::Rectangle, rectangle.color(), rectangle.is_filled());
    format_point(out, 1, "p1", rectangle.p1());
    format_point(out, 1, "p2", rectangle.p2());
    format_end(out, ShapeKind::Rectangle);
}

fn format_squiggle(out: &mut String, squiggle: &Squiggle) {
    format_header(out, ShapeKind::Squiggle, squiggle.color(), squiggle.is_filled());
    out.push_str("\tpoints\n");
    for point in squiggle.points() {
        format_point(out, 2, "point", *point);
    }
    out.push_str("\tend points\n");
    format_end(out, ShapeKind::Squiggle);
}

fn format_header(out: &mut String, kind: ShapeKind, color: Color, filled: bool) {
    let Color { r, g, b } = color;
    let _ = writeln!(out, "{kind}");
    let _ = writeln!(out, "\tcolor:{r},{g},{b}");
    let _ = writeln!(out, "\tfilled:{filled}");
}

fn format_point(out: &mut String, depth: usize, label: &str, point: Point) {
    for _ in 0..depth {
        out.push('\t');
    }
    let _ = writeln!(out, "{label}:({},{})", point.x, point.y);
}

fn format_end(out: &mut String, kind: ShapeKind) {
    let _ = writeln!(out, "End {kind}");
}
