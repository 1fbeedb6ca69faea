use ratatui::{
    prelude::*,
    style::Style,
    symbols::border,
    widgets::{Block, Gauge, Widget},
};

/// Renders an analog trigger as a horizontal pull gauge. Trigger values
/// arrive in the native signed range with rest at the minimum, so the
/// gauge is empty at rest and full at a complete pull.
#[derive(Debug)]
pub struct TriggerGauge {
    text: String,
    value: i16,
}

impl TriggerGauge {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            value: i16::MIN,
        }
    }

    pub fn set_value(&mut self, value: i16) {
        self.value = value;
    }

    /// Fraction of a full pull, between 0.0 and 1.0
    fn ratio(&self) -> f64 {
        (self.value as f64 - i16::MIN as f64) / u16::MAX as f64
    }
}

impl Widget for &TriggerGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Create a block
        let block = Block::bordered()
            .title(self.text.as_str())
            .border_set(border::ROUNDED)
            .border_style(Style::new());
        let inside_block = block.inner(area);
        block.render(area, buf);

        // Set the color based on the value
        let ratio = self.ratio();
        let color = {
            if ratio < 0.2 {
                Color::Indexed(53)
            } else if ratio < 0.4 {
                Color::Indexed(54)
            } else if ratio < 0.6 {
                Color::Indexed(55)
            } else if ratio < 0.8 {
                Color::Indexed(56)
            } else {
                Color::Indexed(57)
            }
        };

        // Create the gauge, labeled with the raw value
        let gauge = Gauge::default()
            .gauge_style(color)
            .ratio(ratio)
            .label(format!("{:+}", self.value));
        gauge.render(inside_block, buf);
    }
}
