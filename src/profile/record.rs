use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Length of `personId` and `homeAreaId`.
pub const HEX_ID_LEN: usize = 24;

/// A player profile as stored in `<screenName>.json`.
///
/// The game server reads the same files, so field names and shape are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub person_id: String,
    pub screen_name: String,
    pub home_area_id: String,
    #[serde(default)]
    pub attachments: Map<String, Value>,
}

impl ProfileRecord {
    /// Builds a fresh record with independently generated identifiers and no attachments.
    pub fn new(screen_name: impl Into<String>) -> Self {
        Self {
            person_id: random_hex_id(),
            screen_name: screen_name.into(),
            home_area_id: random_hex_id(),
            attachments: Map::new(),
        }
    }
}

/// 24 lowercase hex characters taken from a random v4 UUID.
pub fn random_hex_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(HEX_ID_LEN);
    id
}

pub fn is_hex_id(value: &str) -> bool {
    value.len() == HEX_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
