pub mod name;
pub mod record;
pub mod store;

pub use name::{generate_screen_name, resolve_screen_name};
pub use record::{ProfileRecord, random_hex_id};
pub use store::{FileProfileStore, ProfileListing, ProfileStore};
