use std::fmt;

use sdl2::event::Event;

/// Events translated from the library event queue into the subset a
/// joystick reader cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoystickEvent {
    /// An axis moved. Covers the sticks and the analog triggers.
    AxisMotion { axis: u8, value: i16 },
    /// A button changed state.
    Button { button: u8, pressed: bool },
    /// A device appeared at the given device index.
    DeviceAdded { index: u32 },
    /// The device with the given instance id went away.
    DeviceRemoved { id: u32 },
    /// The process was asked to shut down.
    Quit,
}

impl JoystickEvent {
    /// Translate a library event into a [JoystickEvent]. Returns `None`
    /// for event types the reader does not track, such as hat switches
    /// and window events.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match event {
            Event::JoyAxisMotion {
                axis_idx, value, ..
            } => Some(Self::AxisMotion {
                axis: *axis_idx,
                value: *value,
            }),
            Event::JoyButtonDown { button_idx, .. } => Some(Self::Button {
                button: *button_idx,
                pressed: true,
            }),
            Event::JoyButtonUp { button_idx, .. } => Some(Self::Button {
                button: *button_idx,
                pressed: false,
            }),
            Event::JoyDeviceAdded { which, .. } => Some(Self::DeviceAdded { index: *which }),
            Event::JoyDeviceRemoved { which, .. } => Some(Self::DeviceRemoved { id: *which }),
            Event::Quit { .. } => Some(Self::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for JoystickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisMotion { axis, value } => write!(f, "axis {axis:2} value {value:+6}"),
            Self::Button {
                button,
                pressed: true,
            } => write!(f, "button {button:2} pressed"),
            Self::Button {
                button,
                pressed: false,
            } => write!(f, "button {button:2} released"),
            Self::DeviceAdded { index } => write!(f, "device added at index {index}"),
            Self::DeviceRemoved { id } => write!(f, "device removed with instance id {id}"),
            Self::Quit => write!(f, "quit requested"),
        }
    }
}
