//! Build drawing commands programmatically and write them as a save file.

use paint_save_file::{Circle, Color, PaintCommand, Point, Rectangle, Squiggle};

fn main() {
    let commands: Vec<PaintCommand> = vec![
        Rectangle::new(Point::new(0, 0), Point::new(200, 100))
            .with_color(Color::new(240, 240, 240))
            .with_fill(true)
            .into(),
        Circle::new(Point::new(100, 50), 30)
            .with_color(Color::new(255, 200, 0))
            .with_fill(true)
            .into(),
        Squiggle::new([Point::new(10, 90), Point::new(60, 70), Point::new(110, 95)])
            .with_color(Color::new(0, 100, 0))
            .into(),
    ];

    print!("{}", paint_save_file::format(&commands));
}
