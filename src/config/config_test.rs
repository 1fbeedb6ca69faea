use std::error::Error;

use crate::config::{Layout, LoadError};

#[test]
fn test_steam_deck_assignment() -> Result<(), Box<dyn Error>> {
    let layout = Layout::steam_deck();
    assert_eq!(layout.num_axes, 6);
    assert_eq!(layout.num_buttons, 20);

    // Face buttons and sticks sit at the low identifiers
    assert_eq!(layout.buttons.a, 0);
    assert_eq!(layout.buttons.b, 1);
    assert_eq!(layout.buttons.x, 2);
    assert_eq!(layout.buttons.y, 3);
    assert_eq!(layout.buttons.l3, 7);
    assert_eq!(layout.buttons.r3, 8);
    assert_eq!(layout.buttons.l1, 9);
    assert_eq!(layout.buttons.r1, 10);
    assert_eq!(layout.buttons.dpad_up, 11);
    assert_eq!(layout.buttons.dpad_right, 14);
    assert_eq!(layout.buttons.r4, 16);
    assert_eq!(layout.buttons.l5, 19);

    assert_eq!(layout.axes.left_x, 0);
    assert_eq!(layout.axes.right_y, 3);
    assert_eq!(layout.axes.left_trigger, 4);
    assert_eq!(layout.axes.right_trigger, 5);

    Ok(())
}

#[test]
fn test_layout_from_yaml() -> Result<(), Box<dyn Error>> {
    let content = r#"
name: Test Pad
num_axes: 4
num_buttons: 12
buttons:
  a: 0
  b: 1
  x: 3
  y: 2
  l1: 4
  r1: 5
  l3: 10
  r3: 11
  dpad_up: 6
  dpad_down: 7
  dpad_left: 8
  dpad_right: 9
  l4: 0
  r4: 0
  l5: 0
  r5: 0
axes:
  left_x: 0
  left_y: 1
  right_x: 2
  right_y: 3
  left_trigger: 0
  right_trigger: 0
"#;

    let layout = Layout::from_yaml(content.to_string())?;
    assert_eq!(layout.name, "Test Pad");
    assert_eq!(layout.num_buttons, 12);
    assert_eq!(layout.buttons.x, 3);
    assert_eq!(layout.buttons.dpad_left, 8);
    assert_eq!(layout.axes.right_y, 3);

    Ok(())
}

#[test]
fn test_malformed_layout() -> Result<(), Box<dyn Error>> {
    // Valid YAML but missing every identifier table
    let result = Layout::from_yaml("name: Broken Pad".to_string());
    assert!(matches!(result, Err(LoadError::DeserializeError(_))));

    Ok(())
}

#[test]
fn test_missing_layout_file() -> Result<(), Box<dyn Error>> {
    let result = Layout::from_yaml_file("/does/not/exist/layout.yaml".to_string());
    assert!(matches!(result, Err(LoadError::IoError(_))));

    Ok(())
}

#[test]
fn test_resolve_builtin_name() -> Result<(), Box<dyn Error>> {
    let layout = Layout::resolve("steam-deck")?;
    assert_eq!(layout, Layout::steam_deck());

    Ok(())
}

#[test]
fn test_resolve_unknown_name() -> Result<(), Box<dyn Error>> {
    let result = Layout::resolve("no-such-layout");
    assert!(matches!(result, Err(LoadError::NotFound(_))));

    Ok(())
}
