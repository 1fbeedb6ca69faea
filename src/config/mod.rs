pub mod path;

#[cfg(test)]
pub mod config_test;

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents all possible errors loading a [Layout]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read: {0}")]
    IoError(#[from] io::Error),
    #[error("Unable to deserialize: {0}")]
    DeserializeError(#[from] serde_yaml::Error),
    #[error("No layout named '{0}' found in the search paths")]
    NotFound(String),
}

/// A [Layout] names the identifier the library assigns to each control of
/// a particular device, so the state record can be read in named groups.
/// The assignments differ per device model; the Steam Deck layout is
/// built in and used by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Layout {
    pub name: String,
    /// Identifier counts to track when the device reports none
    pub num_axes: u8,
    pub num_buttons: u8,
    pub buttons: ButtonIds,
    pub axes: AxisIds,
}

/// Button identifier assignments for a [Layout]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ButtonIds {
    pub a: u8,
    pub b: u8,
    pub x: u8,
    pub y: u8,
    pub l1: u8,
    pub r1: u8,
    pub l3: u8,
    pub r3: u8,
    pub dpad_up: u8,
    pub dpad_down: u8,
    pub dpad_left: u8,
    pub dpad_right: u8,
    pub l4: u8,
    pub r4: u8,
    pub l5: u8,
    pub r5: u8,
}

/// Axis identifier assignments for a [Layout]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct AxisIds {
    pub left_x: u8,
    pub left_y: u8,
    pub right_x: u8,
    pub right_y: u8,
    pub left_trigger: u8,
    pub right_trigger: u8,
}

impl Layout {
    /// The identifier assignment of the Steam Deck controls
    pub fn steam_deck() -> Layout {
        Layout {
            name: "Steam Deck".to_string(),
            num_axes: 6,
            num_buttons: 20,
            buttons: ButtonIds {
                a: 0,
                b: 1,
                x: 2,
                y: 3,
                l3: 7,
                r3: 8,
                l1: 9,
                r1: 10,
                dpad_up: 11,
                dpad_down: 12,
                dpad_left: 13,
                dpad_right: 14,
                r4: 16,
                l4: 17,
                r5: 18,
                l5: 19,
            },
            axes: AxisIds {
                left_x: 0,
                left_y: 1,
                right_x: 2,
                right_y: 3,
                left_trigger: 4,
                right_trigger: 5,
            },
        }
    }

    /// Load a [Layout] from the given YAML string
    pub fn from_yaml(content: String) -> Result<Layout, LoadError> {
        let layout: Layout = serde_yaml::from_str(content.as_str())?;
        Ok(layout)
    }

    /// Load a [Layout] from the given YAML file
    pub fn from_yaml_file(path: String) -> Result<Layout, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Layout::from_yaml(content)
    }

    /// Resolve a layout by name or file path. Paths that exist on disk are
    /// loaded directly. Otherwise the name is checked against the built-in
    /// layouts and then against "<name>.yaml" in each search directory.
    pub fn resolve(name_or_path: &str) -> Result<Layout, LoadError> {
        if Path::new(name_or_path).exists() {
            return Layout::from_yaml_file(name_or_path.to_string());
        }
        if name_or_path == "steam-deck" {
            return Ok(Layout::steam_deck());
        }

        for dir in path::get_layouts_paths() {
            let candidate = dir.join(format!("{name_or_path}.yaml"));
            log::trace!("Checking for layout: {}", candidate.display());
            if candidate.exists() {
                return Layout::from_yaml_file(candidate.display().to_string());
            }
        }

        Err(LoadError::NotFound(name_or_path.to_string()))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::steam_deck()
    }
}
