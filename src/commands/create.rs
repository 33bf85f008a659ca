use std::path::PathBuf;

use rand::Rng;
use tracing::debug;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{self, text::bullet};
use crate::profile::{ProfileRecord, ProfileStore, generate_screen_name, resolve_screen_name};

/// Generated names are redrawn this many times before giving up on a collision.
pub const MAX_GENERATED_ATTEMPTS: usize = 8;

#[derive(Debug, Clone)]
pub struct CreatedProfile {
    pub record: ProfileRecord,
    pub path: PathBuf,
}

pub fn run(ctx: &AppContext, requested: Option<&str>) -> AppResult<()> {
    let created = match create_profile(&ctx.store, requested, &mut rand::thread_rng()) {
        Ok(created) => created,
        Err(AppError::ProfileExists(name)) => {
            output::print_lines(collision_lines(&name))?;
            return Err(AppError::ProfileExists(name));
        }
        Err(err) => return Err(err),
    };

    output::print_lines(created_lines(&created))?;

    let all = ctx.store.list().into_names();
    if all.len() > 1 {
        output::print_line("")?;
        output::print_line(&format!("All profiles ({}):", all.len()))?;
        output::print_lines(all.iter().map(|name| bullet(name)))?;
    }

    Ok(())
}

/// Creates a profile under `requested`, or under a generated name when none is given.
///
/// A supplied name that is taken fails immediately. A generated name that is taken is
/// redrawn up to [`MAX_GENERATED_ATTEMPTS`] times.
pub fn create_profile<S, R>(
    store: &S,
    requested: Option<&str>,
    rng: &mut R,
) -> AppResult<CreatedProfile>
where
    S: ProfileStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(screen_name) = resolve_screen_name(requested)? {
        let record = ProfileRecord::new(screen_name);
        let path = store.create(&record)?;
        return Ok(CreatedProfile { record, path });
    }

    let mut last_taken = String::new();
    for attempt in 1..=MAX_GENERATED_ATTEMPTS {
        let record = ProfileRecord::new(generate_screen_name(rng));
        match store.create(&record) {
            Ok(path) => return Ok(CreatedProfile { record, path }),
            Err(AppError::ProfileExists(name)) => {
                debug!(attempt, screen_name = %name, "generated name taken");
                last_taken = name;
            }
            Err(err) => return Err(err),
        }
    }

    Err(AppError::ProfileExists(last_taken))
}

fn created_lines(created: &CreatedProfile) -> Vec<String> {
    let name = &created.record.screen_name;
    vec![
        format!("Created new profile: {name}"),
        format!("   Person ID: {}", created.record.person_id),
        format!("   Home area ID: {}", created.record.home_area_id),
        format!("   Account file: {}", created.path.display()),
        String::new(),
        "How to use this profile:".to_string(),
        "   1. Start the game server".to_string(),
        format!("   2. Connect your client with header: X-Profile: {name}"),
        format!("   3. Or use query param: ?profile={name}"),
    ]
}

fn collision_lines(name: &str) -> Vec<String> {
    vec![
        format!("Profile \"{name}\" already exists!"),
        String::new(),
        format!("To use this profile, connect with: X-Profile: {name}"),
    ]
}
