//! Parser, formatter, and builder for Paint Save File drawings.
//!
//! A save file lists circles, rectangles, and freehand squiggles, one
//! attribute per line. Whitespace is insignificant: every line is
//! stripped of it before being matched against the version 1.0 grammar.
//!
//! # Quick start
//!
//! ## Parse a save file
//!
//! ```
//! use paint_save_file::{PaintCommand, Point, parse_str};
//!
//! let input = "Paint Save File Version 1.0\n\
//!              Circle\n\
//!              \tcolor:255,0,0\n\
//!              \tfilled:true\n\
//!              \tcenter:(5,5)\n\
//!              \tradius:3\n\
//!              End Circle\n\
//!              End Paint Save File\n";
//! let commands = parse_str(input).unwrap();
//! let PaintCommand::Circle(circle) = &commands[0] else { unreachable!() };
//! assert_eq!(circle.circle().centre(), Point::new(5, 5));
//! ```
//!
//! ## Report where a file goes wrong
//!
//! ```
//! use paint_save_file::PaintSaveFileParser;
//!
//! let mut parser = PaintSaveFileParser::new();
//! let ok = parser.parse(["Paint Save File Version 1.0", "Triangle"]);
//! assert!(!ok);
//! assert!(parser.error_message().unwrap().contains("line 2"));
//! ```
//!
//! ## Build and format commands
//!
//! ```
//! use paint_save_file::{Color, PaintCommand, Point, Rectangle, format, parse_str};
//!
//! let commands: Vec<PaintCommand> = vec![
//!     Rectangle::new(Point::new(0, 0), Point::new(10, 10))
//!         .with_color(Color::new(0, 0, 255))
//!         .into(),
//! ];
//! let text = format(&commands);
//! assert_eq!(parse_str(&text).unwrap(), commands);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::io::BufRead;

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{
    Circle, CircleCommand, Color, PaintCommand, Point, Rectangle, RectangleCommand, ShapeKind,
    Squiggle, SquiggleCommand,
};
pub use formatter::format;
pub use lexer::{classify, normalize, tokenize_line};
pub use parser::{PaintSaveFileParser, ParseError, ParseErrorKind, parse};
pub use token::Token;

/// Unified error type covering line source failures and parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the next line failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Parse a save file held in memory.
pub fn parse_str(input: &str) -> Result<Vec<PaintCommand>, ParseError> {
    parse(input.lines())
}

/// Parse a save file from an open reader, one line at a time.
///
/// A read failure is returned as [`Error::Io`] even if the lines read
/// so far would have formed a valid file.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<PaintCommand>, Error> {
    let mut read_error = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    });
    let result = parse(lines);

    if let Some(e) = read_error {
        return Err(Error::Io(e));
    }
    Ok(result?)
}
