//! Parse a compact save file and re-format it.

use paint_save_file::PaintCommand;

fn main() {
    let input = "\
PaintSaveFileVersion1.0
Circle
color:255,0,0
filled:true
center:(5,5)
radius:3
EndCircle
Squiggle
color:0,0,0
filled:false
points
point:(1,1)
point:(4,2)
endpoints
EndSquiggle
EndPaintSaveFile
";

    let commands = paint_save_file::parse_str(input).expect("parse failed");

    println!("Commands: {}", commands.len());
    for command in &commands {
        match command {
            PaintCommand::Circle(c) => {
                let circle = c.circle();
                println!("  Circle at {:?}, radius {}", circle.centre(), circle.radius());
            }
            PaintCommand::Rectangle(r) => {
                let rect = r.rectangle();
                println!("  Rectangle {:?} to {:?}", rect.p1(), rect.p2());
            }
            PaintCommand::Squiggle(s) => {
                println!("  Squiggle through {} point(s)", s.squiggle().points().len());
            }
        }
    }

    let output = paint_save_file::format(&commands);
    println!("\nFormatted output:\n{output}");
}
