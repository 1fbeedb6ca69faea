pub mod dashboard;
pub mod widgets;

use dashboard::Dashboard;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{self, Event, KeyEvent, KeyEventKind},
    layout::Rect,
    widgets::Widget,
    Frame,
};
use std::{error::Error, io, time::Duration};

/// InterfaceCommands are used to allow the dashboard to communicate with
/// the user interface
pub enum InterfaceCommand {
    /// Exit the interface
    Quit,
}

/// The [TextUserInterface] runs the dashboard in the alternate screen,
/// redrawing it at a fixed refresh rate until the user quits.
pub struct TextUserInterface {
    exit: bool,
    frame_time: Duration,
    dashboard: Dashboard,
}

impl TextUserInterface {
    /// Create a new interface around the given dashboard, redrawn at the
    /// given rate in frames per second
    pub fn new(dashboard: Dashboard, refresh_rate: u32) -> Self {
        let frame_time = Duration::from_millis(1000 / refresh_rate.max(1) as u64);
        Self {
            exit: false,
            frame_time,
            dashboard,
        }
    }

    /// Run the text interface
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let mut terminal = ratatui::init();
        while !self.exit {
            self.handle_events()?;
            self.update();
            terminal.draw(|frame| self.draw(frame))?;
        }

        ratatui::restore();
        Ok(())
    }

    /// Update the dashboard from the device event queue
    fn update(&mut self) {
        let commands = self.dashboard.update();
        self.handle_commands(commands);
    }

    /// Draw a frame to the terminal
    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Handle dashboard commands
    fn handle_commands(&mut self, commands: Vec<InterfaceCommand>) {
        for cmd in commands {
            match cmd {
                InterfaceCommand::Quit => self.exit = true,
            }
        }
    }

    /// Updates the application's state based on user input. Waiting for
    /// terminal input doubles as the frame pacing.
    fn handle_events(&mut self) -> io::Result<()> {
        // Poll for events
        if !event::poll(self.frame_time)? {
            return Ok(());
        }
        match event::read()? {
            // it's important to check that the event is a key press event as
            // crossterm also emits key release and repeat events on Windows.
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    /// Handles key input to the terminal
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let commands = self.dashboard.handle_key_event(key_event);
        self.handle_commands(commands);
    }
}

impl Widget for &TextUserInterface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.dashboard.render(area, buf);
    }
}
