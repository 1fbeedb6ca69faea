use std::collections::BTreeMap;

use crate::config::Layout;

use super::event::JoystickEvent;

/// [InputState] is the latest known value of every tracked control, keyed
/// by the integer identifiers the underlying library assigns to each axis
/// and button. Identifiers that have produced no event yet stay at their
/// defaults: centered for axes, released for buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputState {
    axes: BTreeMap<u8, i16>,
    buttons: BTreeMap<u8, bool>,
}

impl InputState {
    /// Create a state record tracking the given number of axis and button
    /// identifiers, numbered from zero.
    pub fn new(num_axes: u8, num_buttons: u8) -> Self {
        let axes = (0..num_axes).map(|id| (id, 0)).collect();
        let buttons = (0..num_buttons).map(|id| (id, false)).collect();
        Self { axes, buttons }
    }

    /// Apply a single event to the record. The newest write always wins for
    /// a given identifier. Events for identifiers outside the tracked range
    /// are ignored, as are events that carry no axis or button data.
    pub fn apply(&mut self, event: &JoystickEvent) {
        match event {
            JoystickEvent::AxisMotion { axis, value } => {
                if let Some(entry) = self.axes.get_mut(axis) {
                    *entry = *value;
                }
            }
            JoystickEvent::Button { button, pressed } => {
                if let Some(entry) = self.buttons.get_mut(button) {
                    *entry = *pressed;
                }
            }
            _ => (),
        }
    }

    /// Latest value of one axis identifier in the native signed range.
    pub fn axis(&self, id: u8) -> i16 {
        self.axes.get(&id).copied().unwrap_or(0)
    }

    /// Latest state of one button identifier.
    pub fn button(&self, id: u8) -> bool {
        self.buttons.get(&id).copied().unwrap_or(false)
    }

    /// Number of tracked axis identifiers.
    pub fn num_axes(&self) -> usize {
        self.axes.len()
    }

    /// Number of tracked button identifiers.
    pub fn num_buttons(&self) -> usize {
        self.buttons.len()
    }

    /// View of the primary face buttons under the given layout.
    pub fn face_buttons(&self, layout: &Layout) -> FaceButtons {
        FaceButtons {
            a: self.button(layout.buttons.a),
            b: self.button(layout.buttons.b),
            x: self.button(layout.buttons.x),
            y: self.button(layout.buttons.y),
        }
    }

    /// View of the directional pad under the given layout.
    pub fn dpad(&self, layout: &Layout) -> DPad {
        DPad {
            up: self.button(layout.buttons.dpad_up),
            down: self.button(layout.buttons.dpad_down),
            left: self.button(layout.buttons.dpad_left),
            right: self.button(layout.buttons.dpad_right),
        }
    }

    /// View of the bumpers and analog triggers under the given layout.
    pub fn shoulders(&self, layout: &Layout) -> Shoulders {
        Shoulders {
            l1: self.button(layout.buttons.l1),
            r1: self.button(layout.buttons.r1),
            l2: self.axis(layout.axes.left_trigger),
            r2: self.axis(layout.axes.right_trigger),
        }
    }

    /// View of both analog sticks and their click buttons under the
    /// given layout.
    pub fn sticks(&self, layout: &Layout) -> Sticks {
        Sticks {
            left_x: self.axis(layout.axes.left_x),
            left_y: self.axis(layout.axes.left_y),
            right_x: self.axis(layout.axes.right_x),
            right_y: self.axis(layout.axes.right_y),
            l3: self.button(layout.buttons.l3),
            r3: self.button(layout.buttons.r3),
        }
    }

    /// View of the rear grip buttons under the given layout.
    pub fn back_grips(&self, layout: &Layout) -> BackGrips {
        BackGrips {
            l4: self.button(layout.buttons.l4),
            r4: self.button(layout.buttons.r4),
            l5: self.button(layout.buttons.l5),
            r5: self.button(layout.buttons.r5),
        }
    }

    /// Owned copy of the complete record. The copy does not change when
    /// later events are applied to the record it was taken from.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            axes: self.axes.clone(),
            buttons: self.buttons.clone(),
        }
    }
}

/// State of the four primary face buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceButtons {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
}

/// State of the directional pad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DPad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// State of the bumpers and analog triggers. Trigger values are in the
/// native signed range with rest at the minimum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shoulders {
    pub l1: bool,
    pub r1: bool,
    pub l2: i16,
    pub r2: i16,
}

/// State of both analog sticks and their click buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sticks {
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
    pub l3: bool,
    pub r3: bool,
}

/// State of the rear grip buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackGrips {
    pub l4: bool,
    pub r4: bool,
    pub l5: bool,
    pub r5: bool,
}

/// Detached copy of an [InputState] at a single point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub axes: BTreeMap<u8, i16>,
    pub buttons: BTreeMap<u8, bool>,
}
