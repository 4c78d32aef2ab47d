//! Session identifier generation.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of base-36 characters in the random suffix.
const SUFFIX_LEN: usize = 7;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque correlation key sent with every chat request.
///
/// Generated once when the widget is created and never changed afterwards.
/// Nothing persists it, so a new widget always gets a new identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate `session-<unix-millis>-<7 base-36 chars>`.
    #[must_use]
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix = base36_suffix(Uuid::new_v4().as_u128());
        Self(format!("session-{millis}-{suffix}"))
    }

    /// Wrap an existing identifier.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn base36_suffix(mut value: u128) -> String {
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        out.push(char::from(BASE36[(value % 36) as usize]));
        value /= 36;
    }
    out
}
