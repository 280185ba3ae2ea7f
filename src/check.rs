//! Comparing a freshly computed root digest against the stored baseline

use crate::store::IntegrityStore;
use crate::Result;
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Outcome of an integrity check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Stored digest matches; the store is left untouched
    Approved,
    /// Stored digest differs; the new digest became the baseline
    Tampered,
    /// No stored digest existed; the new digest became the baseline
    FirstRun,
}

impl Status {
    /// Whether the data matched (or had nothing to match against)
    pub fn is_intact(&self) -> bool {
        !matches!(self, Status::Tampered)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Approved => "Approved",
            Status::Tampered => "Tampered",
            Status::FirstRun => "FirstRun",
        })
    }
}

/// Result of [`check`], with both digests for reporting
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub computed: String,
    pub previous: Option<String>,
}

/// Compare `root_digest` with the store and update the baseline if needed
///
/// A missing baseline is a first run. A mismatch is reported as
/// [`Status::Tampered`], not as an error, and the store adopts the new
/// digest so later runs compare against the latest observed state.
pub fn check(root_digest: &str, store: &dyn IntegrityStore) -> Result<Verdict> {
    let previous = match store.load() {
        Ok(stored) => Some(stored),
        Err(e) if e.is_not_found() => None,
        Err(e) => return Err(e),
    };

    let status = match previous.as_deref() {
        None => {
            store.save(root_digest)?;
            info!(digest = root_digest, "no stored digest, baseline recorded");
            Status::FirstRun
        }
        Some(stored) if stored == root_digest => {
            info!(digest = root_digest, "integrity approved");
            Status::Approved
        }
        Some(stored) => {
            warn!(stored, computed = root_digest, "root digest mismatch");
            store.save(root_digest)?;
            Status::Tampered
        }
    };

    Ok(Verdict {
        status,
        computed: root_digest.to_string(),
        previous,
    })
}
