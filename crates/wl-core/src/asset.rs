//! Asset and check records handed to the orchestration host.
//!
//! These are plain data: the host's own graph layer is responsible for
//! topological concerns, and checks carry no executable behavior (the remote
//! service is the actual check executor).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// A data asset derived from one compiled relation.
///
/// Keys and dependency edges use the relation's bare name, mirroring the
/// remote service's own identity for intra-project references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSpec {
    /// Asset key (the relation's bare name)
    pub key: String,

    /// Names of the assets this one depends on
    pub deps: BTreeSet<String>,

    /// Asset group (the relation's schema)
    pub group: String,

    /// Tags, each mapped to an empty value (presence-only semantics)
    pub tags: BTreeMap<String, String>,

    /// Display metadata: database, schema, docs link, rendered SQL, and
    /// (lazy-load path only) the originating compilation handle
    pub metadata: BTreeMap<String, String>,

    /// Maximum acceptable staleness before the host flags the asset
    pub freshness_lag: Duration,
}

impl AssetSpec {
    /// Freshness lag expressed in whole minutes.
    pub fn freshness_lag_minutes(&self) -> u64 {
        self.freshness_lag.as_secs() / 60
    }
}

/// A declarative check bound to its owning asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Key of the asset the check is attached to
    pub asset: String,

    /// Check name (the assertion's bare name)
    pub name: String,
}
