use tracing::debug;

use crate::cli::Cli;
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output;

pub const BANNER: &str = "Echoland Multiplayer Profile Manager";

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        name,
        ignored,
        list,
        dir,
        verbose: _,
    } = cli;

    if !ignored.is_empty() {
        debug!(?ignored, "ignoring extra arguments");
    }

    let ctx = AppContext::bootstrap(dir)?;

    output::print_line("")?;
    output::print_line(BANNER)?;
    output::print_line("")?;

    if list {
        return commands::list::run(&ctx);
    }

    commands::create::run(&ctx, name.as_deref())
}
