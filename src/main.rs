//! CLI tool to validate and format Paint Save Files.

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use paint_save_file::{PaintCommand, ShapeKind};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: paintsave <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  validate  Check if save file(s) are valid");
        eprintln!("  fmt       Format save file(s) and print to stdout");
        eprintln!("  check     Check if save file(s) are formatted");
        eprintln!();
        eprintln!("Set RUST_LOG=trace to follow the parser line by line.");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    if !matches!(command, "validate" | "fmt" | "check") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    let files = &args[2..];
    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let commands = match read_commands(path) {
            Ok(commands) => commands,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "validate" => {
                let count = |kind: ShapeKind| commands.iter().filter(|c| c.kind() == kind).count();
                eprintln!(
                    "{path}: valid ({} circle(s), {} rectangle(s), {} squiggle(s))",
                    count(ShapeKind::Circle),
                    count(ShapeKind::Rectangle),
                    count(ShapeKind::Squiggle),
                );
            }
            "fmt" => {
                print!("{}", paint_save_file::format(&commands));
            }
            _ => match std::fs::read_to_string(path) {
                Ok(content) if content == paint_save_file::format(&commands) => {
                    eprintln!("{path}: formatted");
                }
                Ok(_) => {
                    eprintln!("{path}: not formatted");
                    had_error = true;
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_commands(path: &str) -> Result<Vec<PaintCommand>, paint_save_file::Error> {
    let file = File::open(path)?;
    paint_save_file::parse_reader(BufReader::new(file))
}
