use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the vidash workspace.
///
/// This wraps capability mismatches, argument validation errors,
/// upstream-tagged failures, not-found conditions, and timeouts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VidashError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "comments").
        capability: String,
    },

    /// Invalid input argument, rejected before any upstream call is made.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data (missing fields, bad numbers).
    #[error("data issue: {0}")]
    Data(String),

    /// An upstream API call failed (non-2xx response or transport error).
    #[error("{connector} failed: {msg}")]
    Upstream {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource could not be found upstream.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "channel UC123".
        what: String,
    },

    /// An individual connector call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "channel-stats", "geo-views").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl VidashError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build an `Upstream` error with the connector name and message.
    pub fn upstream(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }
}
