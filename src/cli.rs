use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ACCOUNTS_DIR_ENV, DEFAULT_ACCOUNTS_DIR};

#[derive(Debug, Parser)]
#[command(
    name = "echoland-profile",
    version,
    about = "Echoland multiplayer profile manager",
    after_help = "Profiles can also be auto-created when clients connect to the server.\nJust connect with a new profile name in the X-Profile header."
)]
pub struct Cli {
    #[arg(help = "Profile name to create (random if omitted)")]
    pub name: Option<String>,
    /// Anything after the name is accepted and ignored.
    #[arg(hide = true)]
    pub ignored: Vec<String>,
    #[arg(short = 'l', long, help = "List all existing profiles")]
    pub list: bool,
    #[arg(
        long,
        env = ACCOUNTS_DIR_ENV,
        default_value = DEFAULT_ACCOUNTS_DIR,
        help = "Directory holding profile account files"
    )]
    pub dir: PathBuf,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}
