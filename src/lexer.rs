//! Line normalisation and token classification.
//!
//! Every save file line is stripped of all whitespace and then matched
//! against a fixed table of literals and `prefix:value` patterns. The
//! matchers never fail: a line that fits no pattern is
//! [`Token::Unrecognized`], and the parser decides whether that is an
//! error in its current state.

use std::str::FromStr;

use crate::ast::{Color, Point, ShapeKind};
use crate::token::Token;

/// Lines that must match exactly.
const LITERALS: &[(&str, Token)] = &[
    ("PaintSaveFileVersion1.0", Token::FileStart),
    ("EndPaintSaveFile", Token::FileEnd),
    ("Circle", Token::ShapeStart(ShapeKind::Circle)),
    ("EndCircle", Token::ShapeEnd(ShapeKind::Circle)),
    ("Rectangle", Token::ShapeStart(ShapeKind::Rectangle)),
    ("EndRectangle", Token::ShapeEnd(ShapeKind::Rectangle)),
    ("Squiggle", Token::ShapeStart(ShapeKind::Squiggle)),
    ("EndSquiggle", Token::ShapeEnd(ShapeKind::Squiggle)),
    ("points", Token::PointsStart),
    ("endpoints", Token::PointsEnd),
];

type ValueMatcher = fn(&str) -> Option<Token>;

/// Lines made of a fixed prefix and a value.
const PREFIXED: &[(&str, ValueMatcher)] = &[
    ("color:", match_color),
    ("filled:", match_filled),
    ("center:", match_center),
    ("radius:", match_radius),
    ("p1:", match_p1),
    ("p2:", match_p2),
    ("point:", match_point),
];

/// Remove every whitespace character from `line`.
#[must_use]
pub fn normalize(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Classify an already normalised line.
#[must_use]
pub fn classify(line: &str) -> Token {
    if let Some((_, token)) = LITERALS.iter().find(|(literal, _)| *literal == line) {
        return *token;
    }

    PREFIXED
        .iter()
        .find_map(|(prefix, matcher)| line.strip_prefix(prefix).and_then(*matcher))
        .unwrap_or(Token::Unrecognized)
}

/// Normalise a raw line and classify it.
#[must_use]
pub fn tokenize_line(line: &str) -> Token {
    classify(&normalize(line))
}

fn match_color(value: &str) -> Option<Token> {
    let mut parts = value.split(',');
    let r = parse_number(parts.next()?)?;
    let g = parse_number(parts.next()?)?;
    let b = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Token::Color(Color::new(r, g, b)))
}

fn match_filled(value: &str) -> Option<Token> {
    match value {
        "true" => Some(Token::Filled(true)),
        "false" => Some(Token::Filled(false)),
        _ => None,
    }
}

fn match_center(value: &str) -> Option<Token> {
    parse_point(value).map(Token::Center)
}

fn match_radius(value: &str) -> Option<Token> {
    parse_number(value).map(Token::Radius)
}

fn match_p1(value: &str) -> Option<Token> {
    parse_point(value).map(Token::RectP1)
}

fn match_p2(value: &str) -> Option<Token> {
    parse_point(value).map(Token::RectP2)
}

fn match_point(value: &str) -> Option<Token> {
    parse_point(value).map(Token::Point)
}

/// Parse `(x,y)`.
fn parse_point(value: &str) -> Option<Point> {
    let inner = value.strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    Some(Point::new(parse_number(x)?, parse_number(y)?))
}

/// Parse a run of ASCII digits. Signs are rejected here because
/// `FromStr` for integers would accept a leading `+`.
fn parse_number<T: FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_all_whitespace() {
        assert_eq!(normalize("  color : 1, 2,\t3 \r"), "color:1,2,3");
        assert_eq!(normalize("Paint Save File Version 1.0"), "PaintSaveFileVersion1.0");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn literals() {
        assert_eq!(classify("PaintSaveFileVersion1.0"), Token::FileStart);
        assert_eq!(classify("EndPaintSaveFile"), Token::FileEnd);
        assert_eq!(classify("Circle"), Token::ShapeStart(ShapeKind::Circle));
        assert_eq!(classify("EndSquiggle"), Token::ShapeEnd(ShapeKind::Squiggle));
        assert_eq!(classify("points"), Token::PointsStart);
        assert_eq!(classify("endpoints"), Token::PointsEnd);
    }

    #[test]
    fn literals_are_exact() {
        assert_eq!(classify("PaintSaveFileVersion1x0"), Token::Unrecognized);
        assert_eq!(classify("circle"), Token::Unrecognized);
        assert_eq!(classify("Circles"), Token::Unrecognized);
        assert_eq!(classify(""), Token::Unrecognized);
    }

    #[test]
    fn color_bounds() {
        assert_eq!(classify("color:0,0,0"), Token::Color(Color::new(0, 0, 0)));
        assert_eq!(
            classify("color:255,128,7"),
            Token::Color(Color::new(255, 128, 7))
        );
        assert_eq!(classify("color:256,0,0"), Token::Unrecognized);
        assert_eq!(classify("color:-1,0,0"), Token::Unrecognized);
        assert_eq!(classify("color:+1,0,0"), Token::Unrecognized);
    }

    #[test]
    fn color_needs_three_components() {
        assert_eq!(classify("color:1,2"), Token::Unrecognized);
        assert_eq!(classify("color:1,2,3,4"), Token::Unrecognized);
        assert_eq!(classify("color:1,,3"), Token::Unrecognized);
        assert_eq!(classify("color:"), Token::Unrecognized);
    }

    #[test]
    fn filled() {
        assert_eq!(classify("filled:true"), Token::Filled(true));
        assert_eq!(classify("filled:false"), Token::Filled(false));
        assert_eq!(classify("filled:yes"), Token::Unrecognized);
        assert_eq!(classify("filled:True"), Token::Unrecognized);
    }

    #[test]
    fn coordinates() {
        assert_eq!(classify("center:(5,6)"), Token::Center(Point::new(5, 6)));
        assert_eq!(classify("p1:(0,0)"), Token::RectP1(Point::new(0, 0)));
        assert_eq!(classify("p2:(10,20)"), Token::RectP2(Point::new(10, 20)));
        assert_eq!(classify("point:(3,4)"), Token::Point(Point::new(3, 4)));
    }

    #[test]
    fn coordinates_reject_malformed() {
        assert_eq!(classify("center:5,6"), Token::Unrecognized);
        assert_eq!(classify("center:(5,6"), Token::Unrecognized);
        assert_eq!(classify("center:(-5,6)"), Token::Unrecognized);
        assert_eq!(classify("center:(5.5,6)"), Token::Unrecognized);
        assert_eq!(classify("center:(5,6,7)"), Token::Unrecognized);
        assert_eq!(classify("p3:(1,1)"), Token::Unrecognized);
    }

    #[test]
    fn radius() {
        assert_eq!(classify("radius:3"), Token::Radius(3));
        assert_eq!(classify("radius:"), Token::Unrecognized);
        assert_eq!(classify("radius:3.0"), Token::Unrecognized);
    }

    #[test]
    fn overflow_is_unrecognized() {
        assert_eq!(classify("radius:99999999999"), Token::Unrecognized);
        assert_eq!(classify("point:(4294967296,0)"), Token::Unrecognized);
        assert_eq!(
            classify("point:(4294967295,0)"),
            Token::Point(Point::new(u32::MAX, 0))
        );
    }

    #[test]
    fn tokenize_line_normalizes_first() {
        assert_eq!(
            tokenize_line("\tcenter: ( 5 , 5 )"),
            Token::Center(Point::new(5, 5))
        );
        assert_eq!(tokenize_line("End Paint Save File"), Token::FileEnd);
    }
}
