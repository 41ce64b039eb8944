//! Tri-state resolution result for externally-sourced data.

use serde::{Deserialize, Serialize};

/// Outcome of resolving a value from an external source.
///
/// Filtering and scoring never treat a lookup failure as an error: a value
/// that could not be verified is carried explicitly as `Unknown` or
/// `Failed` so downstream policy can give it the benefit of the doubt.
///
/// `Unknown` means the source answered but had no value; `Failed` means the
/// lookup itself did not complete and carries a reason for logs/display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolved<T> {
    /// The source provided a value.
    Known(T),
    /// The source had no value for this key.
    Unknown,
    /// The lookup failed (timeout, network, malformed response).
    Failed(String),
}

impl<T> Resolved<T> {
    /// True when a value is present.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Borrow the value, if known.
    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown | Self::Failed(_) => None,
        }
    }

    /// Consume and return the value, if known.
    #[must_use]
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown | Self::Failed(_) => None,
        }
    }

    /// Map the known value, preserving `Unknown`/`Failed`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Self::Known(value) => Resolved::Known(f(value)),
            Self::Unknown => Resolved::Unknown,
            Self::Failed(reason) => Resolved::Failed(reason),
        }
    }

    /// Borrowed view of the resolution.
    #[must_use]
    pub fn as_ref(&self) -> Resolved<&T> {
        match self {
            Self::Known(value) => Resolved::Known(value),
            Self::Unknown => Resolved::Unknown,
            Self::Failed(reason) => Resolved::Failed(reason.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_accessors() {
        let resolved = Resolved::Known(7_u32);
        assert!(resolved.is_known());
        assert_eq!(resolved.known(), Some(&7));
        assert_eq!(resolved.into_known(), Some(7));
    }

    #[test]
    fn unknown_and_failed_have_no_value() {
        let unknown: Resolved<u32> = Resolved::Unknown;
        let failed: Resolved<u32> = Resolved::Failed("timeout".to_string());
        assert!(!unknown.is_known());
        assert!(!failed.is_known());
        assert_eq!(unknown.known(), None);
        assert_eq!(failed.into_known(), None);
    }

    #[test]
    fn map_preserves_failure_reason() {
        let failed: Resolved<u32> = Resolved::Failed("registry unreachable".to_string());
        let mapped = failed.map(|n| n * 2);
        assert_eq!(mapped, Resolved::Failed("registry unreachable".to_string()));
    }

    #[test]
    fn serde_representation() {
        let known = Resolved::Known(5_u32);
        assert_eq!(serde_json::to_string(&known).unwrap(), "{\"known\":5}");

        let unknown: Resolved<u32> = Resolved::Unknown;
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"unknown\"");
    }
}
