pub mod event;
#[cfg(test)]
pub mod event_test;
pub mod state;
#[cfg(test)]
pub mod state_test;

use sdl2::joystick::Joystick as SdlJoystick;
use sdl2::EventPump;
use thiserror::Error;

use crate::config::Layout;

use event::JoystickEvent;
use state::{BackGrips, DPad, FaceButtons, InputState, Shoulders, Snapshot, Sticks};

/// Errors that can occur opening or enumerating joystick devices
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Failed to initialize SDL: {0}")]
    Init(String),
    #[error("No joystick devices found")]
    NoDeviceFound,
    #[error("Failed to open joystick {index}: {reason}")]
    OpenFailed { index: u32, reason: String },
}

/// Summary of an attached joystick device, as reported by the library
/// before any events have been read.
#[derive(Debug, Clone)]
pub struct JoystickInfo {
    pub index: u32,
    pub instance_id: u32,
    pub name: String,
    pub num_axes: u32,
    pub num_buttons: u32,
    pub num_hats: u32,
    pub guid: String,
    pub power_level: String,
}

/// Enumerate the joystick devices currently attached to the system.
/// Devices that cannot be opened for inspection are skipped.
pub fn enumerate() -> Result<Vec<JoystickInfo>, DeviceError> {
    let sdl = sdl2::init().map_err(DeviceError::Init)?;
    let subsystem = sdl.joystick().map_err(DeviceError::Init)?;
    let count = subsystem.num_joysticks().map_err(DeviceError::Init)?;

    let mut devices = Vec::with_capacity(count as usize);
    for index in 0..count {
        // Axis and button counts are only available from an opened device
        let device = match subsystem.open(index) {
            Ok(device) => device,
            Err(e) => {
                log::warn!("Unable to inspect joystick {index}: {e}");
                continue;
            }
        };
        let power_level = match device.power_level() {
            Ok(level) => format!("{level:?}"),
            Err(_) => "Unknown".to_string(),
        };
        devices.push(JoystickInfo {
            index,
            instance_id: device.instance_id(),
            name: device.name(),
            num_axes: device.num_axes(),
            num_buttons: device.num_buttons(),
            num_hats: device.num_hats(),
            guid: device.guid().string(),
            power_level,
        });
    }

    Ok(devices)
}

/// [Joystick] owns one opened device together with the state record built
/// from its event stream. All reads happen on the calling thread; no
/// events are processed between calls to [Joystick::poll].
pub struct Joystick {
    device: SdlJoystick,
    event_pump: EventPump,
    state: InputState,
    layout: Layout,
    attached: bool,
}

impl Joystick {
    /// Open the joystick at the given device index and start reading its
    /// events. Fails if no device is present or the device cannot be
    /// opened.
    pub fn open(index: u32, layout: Layout) -> Result<Self, DeviceError> {
        let sdl = sdl2::init().map_err(DeviceError::Init)?;
        let subsystem = sdl.joystick().map_err(DeviceError::Init)?;
        if subsystem.num_joysticks().map_err(DeviceError::Init)? == 0 {
            return Err(DeviceError::NoDeviceFound);
        }

        let device = subsystem
            .open(index)
            .map_err(|e| DeviceError::OpenFailed {
                index,
                reason: e.to_string(),
            })?;
        subsystem.set_event_state(true);
        let event_pump = sdl.event_pump().map_err(DeviceError::Init)?;
        log::info!(
            "Opened joystick '{}' with instance id {}",
            device.name(),
            device.instance_id()
        );

        // Size the record from the device, falling back to the layout
        // counts if the device reports nothing.
        let num_axes = match device.num_axes() {
            0 => layout.num_axes,
            n => n.min(u8::MAX as u32) as u8,
        };
        let num_buttons = match device.num_buttons() {
            0 => layout.num_buttons,
            n => n.min(u8::MAX as u32) as u8,
        };
        let state = InputState::new(num_axes, num_buttons);

        Ok(Self {
            device,
            event_pump,
            state,
            layout,
            attached: true,
        })
    }

    /// Drain all pending events, apply them to the state record in arrival
    /// order, and return them. Returns an empty list when no events were
    /// waiting.
    pub fn poll(&mut self) -> Vec<JoystickEvent> {
        let events: Vec<JoystickEvent> = self
            .event_pump
            .poll_iter()
            .filter_map(|event| JoystickEvent::from_sdl(&event))
            .collect();

        for event in &events {
            log::trace!("Received event: {event:?}");
            match event {
                JoystickEvent::DeviceRemoved { id } if *id == self.instance_id() => {
                    log::warn!("Joystick '{}' was disconnected", self.name());
                    self.attached = false;
                }
                JoystickEvent::DeviceAdded { index } => {
                    log::debug!("Device added at index {index}");
                }
                event => self.state.apply(event),
            }
        }

        events
    }

    /// Drain and apply all pending events. Returns `false` once a quit
    /// request was received and reading should stop.
    pub fn update(&mut self) -> bool {
        let events = self.poll();
        !events.contains(&JoystickEvent::Quit)
    }

    /// Device name as reported by the library.
    pub fn name(&self) -> String {
        self.device.name()
    }

    /// Instance id assigned to this device by the library.
    pub fn instance_id(&self) -> u32 {
        self.device.instance_id()
    }

    /// Whether the device is still attached. Flips to `false` when a
    /// removal event for this device is read; the state record keeps its
    /// last known values after that.
    pub fn attached(&self) -> bool {
        self.attached
    }

    /// The layout used to group controls for the named views.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The full state record.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// State of the primary face buttons.
    pub fn face_buttons(&self) -> FaceButtons {
        self.state.face_buttons(&self.layout)
    }

    /// State of the directional pad.
    pub fn dpad(&self) -> DPad {
        self.state.dpad(&self.layout)
    }

    /// State of the bumpers and analog triggers.
    pub fn shoulders(&self) -> Shoulders {
        self.state.shoulders(&self.layout)
    }

    /// State of both analog sticks and their click buttons.
    pub fn sticks(&self) -> Sticks {
        self.state.sticks(&self.layout)
    }

    /// State of the rear grip buttons.
    pub fn back_grips(&self) -> BackGrips {
        self.state.back_grips(&self.layout)
    }

    /// Detached copy of the full state record.
    #[allow(dead_code)]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Release the device handle. Dropping the value has the same effect;
    /// this exists so the release can be requested explicitly.
    pub fn close(self) {
        log::info!("Closed joystick '{}'", self.device.name());
    }
}
