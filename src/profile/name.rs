use rand::Rng;

use crate::error::{AppError, AppResult};

const ADJECTIVES: &[&str] = &[
    "Swift", "Bright", "Shadow", "Mystic", "Cosmic", "Thunder", "Crystal", "Ember", "Frost",
    "Storm", "Golden", "Silver", "Azure", "Crimson", "Violet",
];

const NOUNS: &[&str] = &[
    "Wolf", "Phoenix", "Dragon", "Hawk", "Tiger", "Serpent", "Raven", "Fox", "Bear", "Lion",
    "Eagle", "Falcon", "Panther", "Lynx", "Owl",
];

/// Exclusive upper bound of the numeric suffix.
const SUFFIX_BOUND: u32 = 10_000;

/// Adjective + noun + number in `0..10000`, e.g. `FrostRaven42`. Not guaranteed unique.
pub fn generate_screen_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let number = rng.gen_range(0..SUFFIX_BOUND);
    format!("{adjective}{noun}{number}")
}

/// Normalizes a user-supplied name. Blank input means "generate one".
pub fn resolve_screen_name(requested: Option<&str>) -> AppResult<Option<String>> {
    let Some(trimmed) = requested.map(str::trim).filter(|name| !name.is_empty()) else {
        return Ok(None);
    };

    validate_screen_name(trimmed)?;
    Ok(Some(trimmed.to_string()))
}

/// The name doubles as a file name inside the account directory.
pub fn validate_screen_name(name: &str) -> AppResult<()> {
    if name == "." || name == ".." {
        return Err(AppError::InvalidName(format!("`{name}` is reserved")));
    }

    if name.contains(['/', '\\']) {
        return Err(AppError::InvalidName(format!(
            "`{name}` must not contain path separators"
        )));
    }

    if name.chars().any(char::is_control) {
        return Err(AppError::InvalidName(
            "name must not contain control characters".to_string(),
        ));
    }

    Ok(())
}
