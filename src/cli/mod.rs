pub mod device;
pub mod ui;

use std::error::Error;

use clap::{Parser, Subcommand};
use device::{handle_dump, handle_info, handle_list};
use ui::dashboard::Dashboard;
use ui::TextUserInterface;

use crate::config::Layout;
use crate::joystick::Joystick;

/// Default dashboard refresh rate in frames per second
const DEFAULT_REFRESH_RATE: u32 = 60;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the joysticks attached to the system
    List,
    /// Display information about a joystick
    Info {
        /// Device index of the joystick (0 is the first one found)
        #[arg(default_value_t = 0)]
        index: u32,
    },
    /// Print raw axis and button events as they arrive
    Dump {
        /// Device index of the joystick (0 is the first one found)
        #[arg(default_value_t = 0)]
        index: u32,
    },
    /// Show a live dashboard of the joystick state (default)
    Watch {
        /// Device index of the joystick (0 is the first one found)
        #[arg(default_value_t = 0)]
        index: u32,
        /// Layout name or path to a layout YAML file
        #[arg(long, default_value = "steam-deck")]
        layout: String,
        /// Dashboard refresh rate in frames per second
        #[arg(long, default_value_t = DEFAULT_REFRESH_RATE)]
        rate: u32,
    },
}

pub fn main_cli(args: Args) -> Result<(), Box<dyn Error>> {
    // Watching the first joystick is the default when no subcommand
    // was given
    let cmd = args.cmd.unwrap_or(Commands::Watch {
        index: 0,
        layout: "steam-deck".to_string(),
        rate: DEFAULT_REFRESH_RATE,
    });

    match cmd {
        Commands::List => handle_list()?,
        Commands::Info { index } => handle_info(index)?,
        Commands::Dump { index } => handle_dump(index)?,
        Commands::Watch {
            index,
            layout,
            rate,
        } => {
            let layout = Layout::resolve(layout.as_str())?;
            let joystick = Joystick::open(index, layout)?;
            let dashboard = Dashboard::new(joystick);
            let mut tui = TextUserInterface::new(dashboard, rate);
            tui.run()?;
        }
    }

    Ok(())
}
