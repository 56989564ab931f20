use core::fmt;

use serde::{Deserialize, Serialize};

use crate::VidashError;

/// Validated channel identifier.
///
/// Construction rejects empty/whitespace input so the orchestrator can assume
/// a usable id everywhere past the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Build a channel id, rejecting blank input.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the input is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, VidashError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VidashError::InvalidArg(
                "channel id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque bearer credential for the Analytics API.
///
/// Presence of a value implies non-emptiness; the unauthenticated state is
/// modelled as `Option<AccessToken>` at call sites, never as an empty string.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a bearer token, returning `None` for blank input.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// The raw token for the `Authorization: Bearer` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never leak credentials into logs.
        f.write_str("AccessToken(***)")
    }
}
