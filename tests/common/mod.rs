#![allow(dead_code)]

use paint_save_file::{PaintCommand, format, parse_str};

/// Wrap shape blocks in the file header and end marker.
pub fn save_file(body: &[&str]) -> String {
    let mut out = String::from("PaintSaveFileVersion1.0\n");
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("EndPaintSaveFile\n");
    out
}

/// Lines of a complete circle block.
pub const CIRCLE_BLOCK: &[&str] = &[
    "Circle",
    "color:255,0,0",
    "filled:true",
    "center:(5,5)",
    "radius:3",
    "EndCircle",
];

/// Lines of a complete rectangle block.
pub const RECTANGLE_BLOCK: &[&str] = &[
    "Rectangle",
    "color:0,255,0",
    "filled:false",
    "p1:(0,0)",
    "p2:(10,10)",
    "EndRectangle",
];

/// Lines of a complete squiggle block with two points.
pub const SQUIGGLE_BLOCK: &[&str] = &[
    "Squiggle",
    "color:0,0,255",
    "filled:false",
    "points",
    "point:(1,1)",
    "point:(2,3)",
    "endpoints",
    "EndSquiggle",
];

/// Helper: format commands, parse them back, assert equality.
pub fn assert_roundtrip(original: &[PaintCommand]) {
    let formatted = format(original);
    let parsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    assert_eq!(
        original, parsed,
        "commands mismatch\n--- formatted ---\n{formatted}"
    );
}
