use std::fmt;
use std::ops::ControlFlow;

use log::{debug, trace, warn};

use crate::ast::{
    Circle, CircleCommand, Color, PaintCommand, Rectangle, RectangleCommand, ShapeKind, Squiggle,
    SquiggleCommand,
};
use crate::lexer::{classify, normalize};
use crate::token::Token;

/// Classifies a parser error by what the parser expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected `Paint Save File Version 1.0`.
    ExpectedFileStart,
    /// Expected a shape keyword or `End Paint Save File`.
    ExpectedShapeOrFileEnd,
    /// Expected `color:R,G,B`.
    ExpectedColor,
    /// Expected `filled:true|false`.
    ExpectedFilled,
    /// Expected `center:(x,y)` in a circle.
    ExpectedCentre,
    /// Expected `radius:n` in a circle.
    ExpectedRadius,
    /// Expected `p1:(x,y)` in a rectangle.
    ExpectedPoint1,
    /// Expected `p2:(x,y)` in a rectangle.
    ExpectedPoint2,
    /// Expected `points` in a squiggle.
    ExpectedPointsStart,
    /// Expected `point:(x,y)` or `end points` in a squiggle.
    ExpectedPoint,
    /// Expected the end marker of the open shape.
    ExpectedShapeEnd(ShapeKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedFileStart => write!(f, "Expected Start of Paint Save File"),
            Self::ExpectedShapeOrFileEnd => write!(f, "Expected Shape Start or End of file"),
            Self::ExpectedColor => write!(f, "The Color String is expected"),
            Self::ExpectedFilled => write!(f, "The fill string is expected"),
            Self::ExpectedCentre => write!(f, "The centre string is expected"),
            Self::ExpectedRadius => write!(f, "The radius string is expected"),
            Self::ExpectedPoint1 => write!(f, "The point1 string is expected"),
            Self::ExpectedPoint2 => write!(f, "The point2 string is expected"),
            Self::ExpectedPointsStart => write!(f, "The point start string is expected"),
            Self::ExpectedPoint => write!(f, "The point string is expected"),
            Self::ExpectedShapeEnd(kind) => write!(f, "Expected {kind} End"),
        }
    }
}

/// Grammar violation, located by its 1-based line number.
///
/// `found` holds the offending line with whitespace removed, or `None`
/// when the input ended before the expected line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error in line {line}: {kind}{}", describe_found(.found.as_deref()))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub found: Option<String>,
}

fn describe_found(found: Option<&str>) -> String {
    match found {
        None => ", got end of input".to_string(),
        Some("") => ", got an empty line".to_string(),
        Some(text) => format!(", got '{text}'"),
    }
}

/// Parse the lines of a save file into drawing commands.
///
/// Lines after `End Paint Save File` are not read.
///
/// # Errors
///
/// Returns `ParseError` at the first line that does not fit the
/// grammar, or when the input ends before `End Paint Save File`.
pub fn parse<I, S>(lines: I) -> Result<Vec<PaintCommand>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = Vec::new();
    Driver::new(&mut commands).run(lines)?;
    Ok(commands)
}

/// Stateful parser keeping the commands and error of its last run.
///
/// On failure the commands completed before the bad line stay
/// available through [`commands`](Self::commands), but only the error
/// is meaningful.
#[derive(Debug, Default)]
pub struct PaintSaveFileParser {
    commands: Vec<PaintCommand>,
    error: Option<ParseError>,
}

impl PaintSaveFileParser {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            error: None,
        }
    }

    /// Parse `lines`, replacing the result of any earlier run.
    ///
    /// Returns whether the whole file was parsed successfully.
    pub fn parse<I, S>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.commands.clear();
        self.error = Driver::new(&mut self.commands).run(lines).err();
        self.error.is_none()
    }

    #[must_use]
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<PaintCommand> {
        self.commands
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Human-readable description of the last failure, naming its line.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Shape under construction. The variant is the open block's kind.
#[derive(Debug)]
enum Building {
    Circle(Circle),
    Rectangle(Rectangle),
    Squiggle(Squiggle),
}

impl Building {
    fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => Self::Circle(Circle::default()),
            ShapeKind::Rectangle => Self::Rectangle(Rectangle::default()),
            ShapeKind::Squiggle => Self::Squiggle(Squiggle::default()),
        }
    }

    const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Squiggle(_) => ShapeKind::Squiggle,
        }
    }

    const fn set_color(&mut self, color: Color) {
        match self {
            Self::Circle(c) => c.set_color(color),
            Self::Rectangle(r) => r.set_color(color),
            Self::Squiggle(s) => s.set_color(color),
        }
    }

    const fn set_fill(&mut self, filled: bool) {
        match self {
            Self::Circle(c) => c.set_fill(filled),
            Self::Rectangle(r) => r.set_fill(filled),
            Self::Squiggle(s) => s.set_fill(filled),
        }
    }

    fn finish(self) -> PaintCommand {
        match self {
            Self::Circle(c) => PaintCommand::Circle(CircleCommand::new(c)),
            Self::Rectangle(r) => PaintCommand::Rectangle(RectangleCommand::new(r)),
            Self::Squiggle(s) => PaintCommand::Squiggle(SquiggleCommand::new(s)),
        }
    }
}

/// Position in the grammar. Every state from `Color` on owns the
/// shape being built, so there is never a shape without a state that
/// expects its next attribute.
#[derive(Debug)]
enum State {
    Header,
    Shapes,
    Color(Building),
    Fill(Building),
    FirstGeometry(Building),
    SecondGeometry(Building),
    End(Building),
}

impl State {
    const fn expected(&self) -> ParseErrorKind {
        match self {
            Self::Header => ParseErrorKind::ExpectedFileStart,
            Self::Shapes => ParseErrorKind::ExpectedShapeOrFileEnd,
            Self::Color(_) => ParseErrorKind::ExpectedColor,
            Self::Fill(_) => ParseErrorKind::ExpectedFilled,
            Self::FirstGeometry(Building::Circle(_)) => ParseErrorKind::ExpectedCentre,
            Self::FirstGeometry(Building::Rectangle(_)) => ParseErrorKind::ExpectedPoint1,
            Self::FirstGeometry(Building::Squiggle(_)) => ParseErrorKind::ExpectedPointsStart,
            Self::SecondGeometry(Building::Circle(_)) => ParseErrorKind::ExpectedRadius,
            Self::SecondGeometry(Building::Rectangle(_)) => ParseErrorKind::ExpectedPoint2,
            Self::SecondGeometry(Building::Squiggle(_)) => ParseErrorKind::ExpectedPoint,
            Self::End(shape) => ParseErrorKind::ExpectedShapeEnd(shape.kind()),
        }
    }
}

struct Driver<'a> {
    commands: &'a mut Vec<PaintCommand>,
    line: usize,
}

impl<'a> Driver<'a> {
    const fn new(commands: &'a mut Vec<PaintCommand>) -> Self {
        Self { commands, line: 0 }
    }

    fn run<I, S>(mut self, lines: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = State::Header;

        for raw in lines {
            self.line += 1;
            let raw = raw.as_ref();
            let raw = if self.line == 1 {
                raw.trim_start_matches('\u{feff}')
            } else {
                raw
            };
            let text = normalize(raw);
            trace!("line {}: '{text}' in state {state:?}", self.line);

            let expected = state.expected();
            state = match self.step(state, classify(&text)) {
                Some(ControlFlow::Continue(next)) => next,
                Some(ControlFlow::Break(())) => {
                    debug!(
                        "end of paint save file at line {}, {} command(s)",
                        self.line,
                        self.commands.len()
                    );
                    return Ok(());
                }
                None => return Err(self.error(expected, Some(text))),
            };
        }

        // Input ran out before the file end marker.
        self.line += 1;
        Err(self.error(state.expected(), None))
    }

    /// Advance one token. `None` means the token is not valid in
    /// `state`; `Break` means the file end was reached.
    fn step(&mut self, state: State, token: Token) -> Option<ControlFlow<(), State>> {
        let next = match (state, token) {
            (State::Header, Token::FileStart) => State::Shapes,
            (State::Shapes, Token::FileEnd) => return Some(ControlFlow::Break(())),
            (State::Shapes, Token::ShapeStart(kind)) => State::Color(Building::new(kind)),
            (State::Color(mut shape), Token::Color(color)) => {
                shape.set_color(color);
                State::Fill(shape)
            }
            (State::Fill(mut shape), Token::Filled(filled)) => {
                shape.set_fill(filled);
                State::FirstGeometry(shape)
            }
            (State::FirstGeometry(Building::Circle(mut circle)), Token::Center(centre)) => {
                circle.set_centre(centre);
                State::SecondGeometry(Building::Circle(circle))
            }
            (State::FirstGeometry(Building::Rectangle(mut rect)), Token::RectP1(p1)) => {
                rect.set_p1(p1);
                State::SecondGeometry(Building::Rectangle(rect))
            }
            (State::FirstGeometry(shape @ Building::Squiggle(_)), Token::PointsStart) => {
                State::SecondGeometry(shape)
            }
            (State::SecondGeometry(Building::Circle(mut circle)), Token::Radius(radius)) => {
                circle.set_radius(radius);
                State::End(Building::Circle(circle))
            }
            (State::SecondGeometry(Building::Rectangle(mut rect)), Token::RectP2(p2)) => {
                rect.set_p2(p2);
                State::End(Building::Rectangle(rect))
            }
            (State::SecondGeometry(Building::Squiggle(mut squiggle)), Token::Point(point)) => {
                squiggle.add_point(point);
                State::SecondGeometry(Building::Squiggle(squiggle))
            }
            (State::SecondGeometry(shape @ Building::Squiggle(_)), Token::PointsEnd) => {
                State::End(shape)
            }
            (State::End(shape), Token::ShapeEnd(kind)) if kind == shape.kind() => {
                let command = shape.finish();
                debug!("line {}: completed {}", self.line, command.kind());
                self.commands.push(command);
                State::Shapes
            }
            _ => return None,
        };
        Some(ControlFlow::Continue(next))
    }

    fn error(&self, kind: ParseErrorKind, found: Option<String>) -> ParseError {
        let error = ParseError {
            kind,
            line: self.line,
            found,
        };
        warn!("{error}");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Point;

    const CIRCLE_FILE: &str = "PaintSaveFileVersion1.0\n\
                               Circle\n\
                               color:255,0,0\n\
                               filled:true\n\
                               center:(5,5)\n\
                               radius:3\n\
                               EndCircle\n\
                               EndPaintSaveFile\n";

    fn parse_input(input: &str) -> Result<Vec<PaintCommand>, ParseError> {
        parse(input.lines())
    }

    #[test]
    fn single_circle() {
        let commands = parse_input(CIRCLE_FILE).expect("parse failed");
        assert_eq!(commands.len(), 1);
        let PaintCommand::Circle(cmd) = &commands[0] else {
            panic!("expected a circle, got {:?}", commands[0]);
        };
        let circle = cmd.circle();
        assert_eq!(circle.color(), Color::new(255, 0, 0));
        assert!(circle.is_filled());
        assert_eq!(circle.centre(), Point::new(5, 5));
        assert_eq!(circle.radius(), 3);
    }

    #[test]
    fn empty_file_body() {
        let commands =
            parse_input("PaintSaveFileVersion1.0\nEndPaintSaveFile\n").expect("parse failed");
        assert!(commands.is_empty());
    }

    #[test]
    fn squiggle_points_in_order() {
        let commands = parse_input(
            "PaintSaveFileVersion1.0\nSquiggle\ncolor:0,0,0\nfilled:false\npoints\n\
             point:(1,2)\npoint:(3,4)\nendpoints\nEndSquiggle\nEndPaintSaveFile\n",
        )
        .expect("parse failed");
        let PaintCommand::Squiggle(cmd) = &commands[0] else {
            panic!("expected a squiggle");
        };
        assert_eq!(
            cmd.squiggle().points(),
            &[Point::new(1, 2), Point::new(3, 4)]
        );
    }

    #[test]
    fn wrong_header_reports_line_one() {
        let err = parse_input("PaintSaveFileVersion2.0\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedFileStart);
        assert_eq!(err.line, 1);
        assert_eq!(err.found.as_deref(), Some("PaintSaveFileVersion2.0"));
    }

    #[test]
    fn geometry_error_depends_on_kind() {
        let head = "PaintSaveFileVersion1.0\n";
        let cases = [
            ("Circle", ParseErrorKind::ExpectedCentre),
            ("Rectangle", ParseErrorKind::ExpectedPoint1),
            ("Squiggle", ParseErrorKind::ExpectedPointsStart),
        ];
        for (keyword, kind) in cases {
            let input = format!("{head}{keyword}\ncolor:1,2,3\nfilled:true\nradius:4\n");
            let err = parse_input(&input).unwrap_err();
            assert_eq!(err.kind, kind, "{keyword}");
            assert_eq!(err.line, 5, "{keyword}");
        }
    }

    #[test]
    fn mismatched_end_marker() {
        let err = parse_input(
            "PaintSaveFileVersion1.0\nCircle\ncolor:1,2,3\nfilled:true\n\
             center:(1,1)\nradius:1\nEndRectangle\n",
        )
        .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedShapeEnd(ShapeKind::Circle));
        assert_eq!(err.line, 7);
    }

    #[test]
    fn truncated_input_reports_next_line() {
        let err = parse_input("PaintSaveFileVersion1.0\nCircle\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedColor);
        assert_eq!(err.line, 3);
        assert_eq!(err.found, None);
    }

    #[test]
    fn empty_input_fails_at_line_one() {
        let err = parse_input("").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedFileStart);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn leading_bom_is_ignored() {
        let input = format!("\u{feff}{CIRCLE_FILE}");
        assert_eq!(parse_input(&input).expect("parse failed").len(), 1);
    }

    #[test]
    fn stops_reading_after_file_end() {
        let input = format!("{CIRCLE_FILE}this is not read\n");
        assert_eq!(parse_input(&input).expect("parse failed").len(), 1);
    }

    #[test]
    fn stateful_parser_keeps_partial_commands() {
        let mut parser = PaintSaveFileParser::new();
        let input = CIRCLE_FILE.replace("EndPaintSaveFile", "Garbage");
        assert!(!parser.parse(input.lines()));
        assert_eq!(parser.commands().len(), 1);
        let message = parser.error_message().expect("error message");
        assert!(message.contains("line 8"), "{message}");
        assert!(message.contains("Expected Shape Start or End of file"));
    }

    #[test]
    fn stateful_parser_resets_between_runs() {
        let mut parser = PaintSaveFileParser::new();
        assert!(!parser.parse(["nonsense"]));
        assert!(parser.error().is_some());

        assert!(parser.parse(CIRCLE_FILE.lines()));
        assert!(parser.error().is_none());
        assert!(parser.error_message().is_none());
        assert_eq!(parser.into_commands().len(), 1);
    }

    #[test]
    fn error_display() {
        let err = parse_input("PaintSaveFileVersion1.0\n\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error in line 2: Expected Shape Start or End of file, got an empty line"
        );

        let err = parse_input("PaintSaveFileVersion1.0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error in line 2: Expected Shape Start or End of file, got end of input"
        );
    }
}
