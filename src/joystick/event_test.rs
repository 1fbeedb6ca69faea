use std::error::Error;

use sdl2::event::Event;
use sdl2::joystick::HatState;

use crate::joystick::event::JoystickEvent;

#[test]
fn test_translate_axis_motion() -> Result<(), Box<dyn Error>> {
    let event = Event::JoyAxisMotion {
        timestamp: 0,
        which: 0,
        axis_idx: 4,
        value: i16::MIN,
    };
    assert_eq!(
        JoystickEvent::from_sdl(&event),
        Some(JoystickEvent::AxisMotion {
            axis: 4,
            value: i16::MIN
        })
    );

    Ok(())
}

#[test]
fn test_translate_button_transitions() -> Result<(), Box<dyn Error>> {
    let down = Event::JoyButtonDown {
        timestamp: 0,
        which: 0,
        button_idx: 9,
    };
    let up = Event::JoyButtonUp {
        timestamp: 16,
        which: 0,
        button_idx: 9,
    };

    assert_eq!(
        JoystickEvent::from_sdl(&down),
        Some(JoystickEvent::Button {
            button: 9,
            pressed: true
        })
    );
    assert_eq!(
        JoystickEvent::from_sdl(&up),
        Some(JoystickEvent::Button {
            button: 9,
            pressed: false
        })
    );

    Ok(())
}

#[test]
fn test_translate_device_and_quit() -> Result<(), Box<dyn Error>> {
    let added = Event::JoyDeviceAdded {
        timestamp: 0,
        which: 1,
    };
    let removed = Event::JoyDeviceRemoved {
        timestamp: 0,
        which: 3,
    };
    let quit = Event::Quit { timestamp: 0 };

    assert_eq!(
        JoystickEvent::from_sdl(&added),
        Some(JoystickEvent::DeviceAdded { index: 1 })
    );
    assert_eq!(
        JoystickEvent::from_sdl(&removed),
        Some(JoystickEvent::DeviceRemoved { id: 3 })
    );
    assert_eq!(JoystickEvent::from_sdl(&quit), Some(JoystickEvent::Quit));

    Ok(())
}

#[test]
fn test_untracked_events_dropped() -> Result<(), Box<dyn Error>> {
    let hat = Event::JoyHatMotion {
        timestamp: 0,
        which: 0,
        hat_idx: 0,
        state: HatState::Up,
    };
    assert_eq!(JoystickEvent::from_sdl(&hat), None);

    Ok(())
}

#[test]
fn test_display_format() -> Result<(), Box<dyn Error>> {
    let axis = JoystickEvent::AxisMotion {
        axis: 4,
        value: i16::MAX,
    };
    assert_eq!(format!("{axis}"), "axis  4 value +32767");

    let button = JoystickEvent::Button {
        button: 9,
        pressed: true,
    };
    assert_eq!(format!("{button}"), "button  9 pressed");

    let released = JoystickEvent::Button {
        button: 17,
        pressed: false,
    };
    assert_eq!(format!("{released}"), "button 17 released");

    Ok(())
}
