pub mod text;

pub use text::{print_line, print_lines};
