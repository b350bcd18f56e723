//! Demonstrate error reporting for invalid save files.

use paint_save_file::{Error, PaintSaveFileParser, parse_reader};

fn main() {
    // Rectangle corners in the wrong order
    let input = "Paint Save File Version 1.0\n\
                 Rectangle\n\
                 \tcolor:0,0,0\n\
                 \tfilled:false\n\
                 \tp2:(10,10)\n\
                 \tp1:(0,0)\n\
                 End Rectangle\n\
                 End Paint Save File\n";

    let mut parser = PaintSaveFileParser::new();
    if parser.parse(input.lines()) {
        println!("Parsed OK (unexpected)");
    } else if let Some(e) = parser.error() {
        println!("Parse error: {e}");
        println!("  Kind: {:?}", e.kind);
        println!("  Line: {}", e.line);
    }

    println!();

    // Truncated file read through a reader
    match parse_reader("Paint Save File Version 1.0\nCircle\n".as_bytes()) {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(Error::Io(e)) => println!("Read error: {e}"),
        Err(Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Line: {}", e.line);
        }
    }
}
