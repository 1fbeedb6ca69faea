use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Constraint, Direction, Layout},
    prelude::*,
    symbols::border,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::joystick::Joystick;

use super::widgets::{axis_gauge::AxisGauge, button_gauge::ButtonGauge, trigger_gauge::TriggerGauge};
use super::InterfaceCommand;

/// Live view of a joystick, one panel per control group
pub struct Dashboard {
    joystick: Joystick,
    ui_face: Vec<ButtonGauge>,
    ui_dpad: Vec<ButtonGauge>,
    ui_bumpers: Vec<ButtonGauge>,
    ui_triggers: Vec<TriggerGauge>,
    ui_sticks: Vec<AxisGauge>,
    ui_clicks: Vec<ButtonGauge>,
    ui_grips: Vec<ButtonGauge>,
}

impl Dashboard {
    pub fn new(joystick: Joystick) -> Self {
        let mut dashboard = Self {
            joystick,
            ui_face: Default::default(),
            ui_dpad: Default::default(),
            ui_bumpers: Default::default(),
            ui_triggers: Default::default(),
            ui_sticks: Default::default(),
            ui_clicks: Default::default(),
            ui_grips: Default::default(),
        };
        dashboard.rebuild();
        dashboard
    }

    /// Drain the device event queue and rebuild the gauges from the new
    /// state
    pub fn update(&mut self) -> Vec<InterfaceCommand> {
        if !self.joystick.update() {
            return vec![InterfaceCommand::Quit];
        }
        self.rebuild();
        vec![]
    }

    /// Handle key input to the dashboard
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Vec<InterfaceCommand> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![InterfaceCommand::Quit],
            // The terminal is in raw mode, so Ctrl+C arrives as a key
            // event instead of a signal
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![InterfaceCommand::Quit]
            }
            _ => vec![],
        }
    }

    fn rebuild(&mut self) {
        let face = self.joystick.face_buttons();
        let dpad = self.joystick.dpad();
        let shoulders = self.joystick.shoulders();
        let sticks = self.joystick.sticks();
        let grips = self.joystick.back_grips();

        self.ui_face = build_buttons(&[
            ("A", face.a),
            ("B", face.b),
            ("X", face.x),
            ("Y", face.y),
        ]);
        self.ui_dpad = build_buttons(&[
            ("Up", dpad.up),
            ("Down", dpad.down),
            ("Left", dpad.left),
            ("Right", dpad.right),
        ]);
        self.ui_bumpers = build_buttons(&[("L1", shoulders.l1), ("R1", shoulders.r1)]);
        self.ui_triggers = build_triggers(&[("L2", shoulders.l2), ("R2", shoulders.r2)]);
        self.ui_clicks = build_buttons(&[("L3", sticks.l3), ("R3", sticks.r3)]);
        self.ui_grips = build_buttons(&[
            ("L4", grips.l4),
            ("R4", grips.r4),
            ("L5", grips.l5),
            ("R5", grips.r5),
        ]);

        let mut left = AxisGauge::new("Left Stick");
        left.set_value(sticks.left_x, sticks.left_y);
        let mut right = AxisGauge::new("Right Stick");
        right.set_value(sticks.right_x, sticks.right_y);
        self.ui_sticks = vec![left, right];
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut status = vec![
            format!("{} ", self.joystick.name()).bold(),
            format!(
                "(instance {}, {} layout)",
                self.joystick.instance_id(),
                self.joystick.layout().name
            )
            .into(),
        ];
        if !self.joystick.attached() {
            status.push(" [disconnected]".red().bold());
        }

        let instructions = Line::from(vec![" Quit ".into(), "<Q> ".blue().bold()]);
        let block = Block::bordered()
            .title(" joyscope ".bold())
            .title_bottom(instructions.right_aligned())
            .border_set(border::ROUNDED);
        Paragraph::new(Line::from(status).centered())
            .block(block)
            .render(area, buf);
    }

    /// Render the face buttons in the given area
    fn render_face_buttons(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Face Buttons")
            .border_set(border::ROUNDED)
            .border_style(Style::new().green());
        let inside_block = block.inner(area);
        block.render(area, buf);

        let cells = create_grid(inside_block, 2, 2);
        for (widget, area) in self.ui_face.iter().zip(cells.iter()) {
            widget.render(*area, buf);
        }
    }

    fn render_dpad(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("D-Pad")
            .border_set(border::ROUNDED)
            .border_style(Style::new().cyan());
        let inside_block = block.inner(area);
        block.render(area, buf);

        let cells = create_grid(inside_block, 2, 2);
        for (widget, area) in self.ui_dpad.iter().zip(cells.iter()) {
            widget.render(*area, buf);
        }
    }

    /// Render both sticks with their click buttons below them
    fn render_sticks(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Sticks")
            .border_set(border::ROUNDED)
            .border_style(Style::new().yellow());
        let inside_block = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(0), Constraint::Length(5)])
            .split(inside_block);

        let axis_cells = create_grid(rows[0], 1, 2);
        for (widget, area) in self.ui_sticks.iter().zip(axis_cells.iter()) {
            widget.render(*area, buf);
        }

        let click_cells = create_grid(rows[1], 1, 2);
        for (widget, area) in self.ui_clicks.iter().zip(click_cells.iter()) {
            widget.render(*area, buf);
        }
    }

    /// Render the bumpers on the top row and the triggers below them
    fn render_shoulders(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Shoulders")
            .border_set(border::ROUNDED)
            .border_style(Style::new().magenta());
        let inside_block = block.inner(area);
        block.render(area, buf);

        let cells = create_grid(inside_block, 2, 2);
        for (widget, area) in self.ui_bumpers.iter().zip([cells[0], cells[2]]) {
            widget.render(area, buf);
        }
        for (widget, area) in self.ui_triggers.iter().zip([cells[1], cells[3]]) {
            widget.render(area, buf);
        }
    }

    fn render_back_grips(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Back Grips")
            .border_set(border::ROUNDED)
            .border_style(Style::new().blue());
        let inside_block = block.inner(area);
        block.render(area, buf);

        let cells = create_grid(inside_block, 2, 2);
        for (widget, area) in self.ui_grips.iter().zip(cells.iter()) {
            widget.render(*area, buf);
        }
    }
}

impl Widget for &Dashboard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Header across the top, control panels below
        let outer_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        self.render_header(outer_layout[0], buf);

        // Split the body into three columns
        let body_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(outer_layout[1]);

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body_layout[0]);
        self.render_face_buttons(left_layout[0], buf);
        self.render_dpad(left_layout[1], buf);

        self.render_sticks(body_layout[1], buf);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body_layout[2]);
        self.render_shoulders(right_layout[0], buf);
        self.render_back_grips(right_layout[1], buf);
    }
}

fn build_buttons(states: &[(&str, bool)]) -> Vec<ButtonGauge> {
    states
        .iter()
        .map(|(label, pressed)| {
            let mut gauge = ButtonGauge::new(label);
            gauge.set_value(*pressed);
            gauge
        })
        .collect()
}

fn build_triggers(states: &[(&str, i16)]) -> Vec<TriggerGauge> {
    states
        .iter()
        .map(|(label, value)| {
            let mut gauge = TriggerGauge::new(label);
            gauge.set_value(*value);
            gauge
        })
        .collect()
}

/// Creates a grid with the given rows and columns for the given area
fn create_grid(area: Rect, rows: u16, columns: u16) -> Vec<Rect> {
    // Create the column areas
    let constraints: Vec<Constraint> = (0..columns).map(|_| Constraint::Fill(1)).collect();
    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    // Create the individual grid cell areas
    let mut cells = Vec::with_capacity((rows * columns) as usize);
    for column in column_areas.iter() {
        let constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Fill(1)).collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(*column);
        for cell in rows.iter() {
            cells.push(*cell);
        }
    }

    cells
}
