use std::error::Error;
use std::thread;
use std::time::Duration;

use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};

use crate::config::Layout;
use crate::joystick::event::JoystickEvent;
use crate::joystick::{self, Joystick};

/// Pause between polls when draining events outside the dashboard loop
const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Tabled)]
struct JoystickRow {
    #[tabled(rename = "Index")]
    index: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Axes")]
    axes: u32,
    #[tabled(rename = "Buttons")]
    buttons: u32,
    #[tabled(rename = "Hats")]
    hats: u32,
}

#[derive(Tabled)]
struct JoystickDetails {
    #[tabled(rename = "Index")]
    index: u32,
    #[tabled(rename = "Instance Id")]
    instance_id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Axes")]
    axes: u32,
    #[tabled(rename = "Buttons")]
    buttons: u32,
    #[tabled(rename = "Hats")]
    hats: u32,
    #[tabled(rename = "GUID")]
    guid: String,
    #[tabled(rename = "Power")]
    power: String,
}

pub fn handle_list() -> Result<(), Box<dyn Error>> {
    let devices = joystick::enumerate()?;
    let count = devices.len();

    let rows: Vec<JoystickRow> = devices
        .into_iter()
        .map(|info| JoystickRow {
            index: info.index,
            name: info.name,
            axes: info.num_axes,
            buttons: info.num_buttons,
            hats: info.num_hats,
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern_rounded())
        .with(Panel::header("Joysticks"));
    println!("{table}");
    println!("Found {count} joystick(s)");

    Ok(())
}

pub fn handle_info(index: u32) -> Result<(), Box<dyn Error>> {
    let devices = joystick::enumerate()?;
    let Some(info) = devices.into_iter().find(|info| info.index == index) else {
        return Err(format!("No joystick exists at index: {index}").into());
    };

    let entry = JoystickDetails {
        index: info.index,
        instance_id: info.instance_id,
        name: info.name,
        axes: info.num_axes,
        buttons: info.num_buttons,
        hats: info.num_hats,
        guid: info.guid,
        power: info.power_level,
    };
    let mut table = Table::new(vec![entry]);
    table
        .with(Style::modern_rounded())
        .with(Panel::header("Joystick"));
    println!("{table}");

    Ok(())
}

pub fn handle_dump(index: u32) -> Result<(), Box<dyn Error>> {
    let mut joystick = Joystick::open(index, Layout::default())?;
    let state = joystick.state();
    println!(
        "Reading events from '{}' ({} axes, {} buttons), Ctrl+C to stop",
        joystick.name(),
        state.num_axes(),
        state.num_buttons()
    );

    'reading: loop {
        for event in joystick.poll() {
            if event == JoystickEvent::Quit {
                break 'reading;
            }
            println!("{event}");
        }
        if !joystick.attached() {
            break;
        }
        thread::sleep(POLL_INTERVAL);
    }

    joystick.close();
    Ok(())
}
