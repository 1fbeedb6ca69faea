use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Widget,
    },
};

/// Renders an analog stick as a cursor inside a circle, labeled with the
/// raw axis values
#[derive(Debug)]
pub struct AxisGauge {
    text: String,
    x: i16,
    y: i16,
}

impl AxisGauge {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: 0,
            y: 0,
        }
    }

    pub fn set_value(&mut self, x: i16, y: i16) {
        self.x = x;
        self.y = y;
    }
}

impl Widget for &AxisGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The library reports stick up as negative, canvas up is positive
        let x = (self.x as f64 / i16::MAX as f64).clamp(-1.0, 1.0);
        let y = -(self.y as f64 / i16::MAX as f64).clamp(-1.0, 1.0);

        let canvas = Canvas::default()
            .block(Block::bordered().title(self.text.as_str()))
            .marker(ratatui::symbols::Marker::Braille)
            .x_bounds([-100.0, 100.0])
            .y_bounds([-100.0, 100.0])
            .paint(|ctx| {
                // Draw the edges
                let circle = Circle {
                    radius: 100.0,
                    ..Default::default()
                };
                ctx.draw(&circle);

                // Draw the current position
                for radius in 0..10 {
                    let cursor = Circle {
                        x: x * 100.0,
                        y: y * 100.0,
                        radius: radius as f64,
                        color: Color::LightRed,
                    };
                    ctx.draw(&cursor);
                }

                // Draw the raw axis values
                ctx.print(0.0, -100.0, format!("({:+}, {:+})", self.x, self.y));
            });
        canvas.render(area, buf);
    }
}
