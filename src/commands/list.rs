use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::{self, text::bullet};
use crate::profile::ProfileStore;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let listing = ctx.store.list();
    output::print_lines(listing_lines(listing.names()))
}

fn listing_lines(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec![
            "No profiles found. Create one with: echoland-profile [name]".to_string(),
            "Or just connect to the server - profiles are auto-created!".to_string(),
        ];
    }

    let mut lines = Vec::with_capacity(names.len() + 3);
    lines.push("Existing profiles:".to_string());
    lines.extend(names.iter().map(|name| bullet(name)));
    lines.push(String::new());
    lines.push(format!("Total: {} profile(s)", names.len()));
    lines
}
