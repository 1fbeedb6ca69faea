use std::error::Error;

use crate::config::Layout;
use crate::joystick::event::JoystickEvent;
use crate::joystick::state::InputState;

#[test]
fn test_defaults() -> Result<(), Box<dyn Error>> {
    let state = InputState::new(6, 20);
    assert_eq!(state.num_axes(), 6);
    assert_eq!(state.num_buttons(), 20);
    for id in 0..6 {
        assert_eq!(state.axis(id), 0);
    }
    for id in 0..20 {
        assert!(!state.button(id));
    }

    Ok(())
}

#[test]
fn test_last_write_wins() -> Result<(), Box<dyn Error>> {
    let mut state = InputState::new(6, 20);

    // Apply a burst of events for the same identifiers
    let events = [
        JoystickEvent::Button {
            button: 2,
            pressed: true,
        },
        JoystickEvent::AxisMotion {
            axis: 0,
            value: -14000,
        },
        JoystickEvent::Button {
            button: 2,
            pressed: false,
        },
        JoystickEvent::AxisMotion { axis: 0, value: 312 },
        JoystickEvent::Button {
            button: 2,
            pressed: true,
        },
    ];
    for event in &events {
        state.apply(event);
    }

    assert!(state.button(2));
    assert_eq!(state.axis(0), 312);

    state.apply(&JoystickEvent::Button {
        button: 2,
        pressed: false,
    });
    assert!(!state.button(2));

    Ok(())
}

#[test]
fn test_axis_values_kept_verbatim() -> Result<(), Box<dyn Error>> {
    let mut state = InputState::new(6, 20);
    for value in [i16::MIN, -1, 0, 1, 21530, i16::MAX] {
        state.apply(&JoystickEvent::AxisMotion { axis: 4, value });
        assert_eq!(state.axis(4), value);
    }

    Ok(())
}

#[test]
fn test_untracked_identifiers_ignored() -> Result<(), Box<dyn Error>> {
    let mut state = InputState::new(2, 2);
    state.apply(&JoystickEvent::AxisMotion {
        axis: 5,
        value: 1000,
    });
    state.apply(&JoystickEvent::Button {
        button: 9,
        pressed: true,
    });

    // The record does not grow and reads of unknown ids return defaults
    assert_eq!(state.num_axes(), 2);
    assert_eq!(state.num_buttons(), 2);
    assert_eq!(state.axis(5), 0);
    assert!(!state.button(9));

    Ok(())
}

#[test]
fn test_grouped_views_match_record() -> Result<(), Box<dyn Error>> {
    let layout = Layout::steam_deck();
    let mut state = InputState::new(layout.num_axes, layout.num_buttons);

    state.apply(&JoystickEvent::Button {
        button: layout.buttons.a,
        pressed: true,
    });
    state.apply(&JoystickEvent::Button {
        button: layout.buttons.dpad_down,
        pressed: true,
    });
    state.apply(&JoystickEvent::Button {
        button: layout.buttons.r4,
        pressed: true,
    });
    state.apply(&JoystickEvent::AxisMotion {
        axis: layout.axes.left_trigger,
        value: i16::MIN,
    });
    state.apply(&JoystickEvent::AxisMotion {
        axis: layout.axes.right_x,
        value: 21530,
    });

    let face = state.face_buttons(&layout);
    assert!(face.a);
    assert!(!face.b && !face.x && !face.y);

    let dpad = state.dpad(&layout);
    assert!(dpad.down);
    assert!(!dpad.up && !dpad.left && !dpad.right);

    let shoulders = state.shoulders(&layout);
    assert_eq!(shoulders.l2, i16::MIN);
    assert_eq!(shoulders.r2, 0);

    let sticks = state.sticks(&layout);
    assert_eq!(sticks.right_x, 21530);
    assert_eq!(sticks.left_x, 0);

    let grips = state.back_grips(&layout);
    assert!(grips.r4);
    assert!(!grips.l4 && !grips.l5 && !grips.r5);

    // Every grouped value agrees with a direct read of the record
    assert_eq!(face.a, state.button(layout.buttons.a));
    assert_eq!(shoulders.l2, state.axis(layout.axes.left_trigger));
    assert_eq!(sticks.right_x, state.axis(layout.axes.right_x));

    Ok(())
}

#[test]
fn test_snapshot_is_detached() -> Result<(), Box<dyn Error>> {
    let mut state = InputState::new(6, 20);
    state.apply(&JoystickEvent::AxisMotion {
        axis: 2,
        value: 5000,
    });

    let snapshot = state.snapshot();
    assert_eq!(snapshot.axes.len(), state.num_axes());
    assert_eq!(snapshot.buttons.len(), state.num_buttons());
    assert_eq!(snapshot.axes.get(&2), Some(&5000));

    // Later writes must not show up in the copy
    state.apply(&JoystickEvent::AxisMotion {
        axis: 2,
        value: -5000,
    });
    assert_eq!(snapshot.axes.get(&2), Some(&5000));
    assert_eq!(state.axis(2), -5000);

    Ok(())
}
