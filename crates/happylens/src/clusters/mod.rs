mod parser;

use crate::dataset::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Identifier of a pre-computed country group.
///
/// Cluster labels are produced by an offline process and consumed here as an
/// opaque lookup key; the observed set is {0, 1, 2, 3}.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClusterId(pub u8);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the externally produced country-to-cluster table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterAssignment {
    pub country: String,
    /// 3-letter country code used for map placement.
    pub iso_alpha: String,
    pub cluster: ClusterId,
}

/// Static description card for one cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterDescription {
    pub id: ClusterId,
    pub emoji: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub examples: &'static str,
    pub avg_score: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("no description configured for cluster {0}")]
    UnknownCluster(ClusterId),
}

const DESCRIPTIONS: [ClusterDescription; 4] = [
    ClusterDescription {
        id: ClusterId(0),
        emoji: "🟡",
        title: "Cluster 0 — Moderately Happy",
        summary: "Balanced countries with decent GDP, support, and health. \
                  Often upper-middle-income with improving quality of life.",
        examples: "Poland, Czechia, Brazil, Taiwan",
        avg_score: 6.07,
    },
    ClusterDescription {
        id: ClusterId(1),
        emoji: "🟠",
        title: "Cluster 1 — Under Pressure",
        summary: "Lower income and health, but notable civic freedom and \
                  generosity. Often politically or economically strained.",
        examples: "Ukraine, India, Iran, Nigeria",
        avg_score: 4.93,
    },
    ClusterDescription {
        id: ClusterId(2),
        emoji: "🟢",
        title: "Cluster 2 — Most Prosperous",
        summary: "High scores across GDP, health, and freedom. Strong \
                  institutions and high trust levels.",
        examples: "Finland, Netherlands, Australia, Canada",
        avg_score: 6.81,
    },
    ClusterDescription {
        id: ClusterId(3),
        emoji: "🔴",
        title: "Cluster 3 — Struggling Nations",
        summary: "Low across all indicators. Includes fragile or \
                  conflict-affected countries with systemic issues.",
        examples: "Afghanistan, Lebanon, DR Congo, Ethiopia",
        avg_score: 4.09,
    },
];

/// Every configured description card, in cluster-id order.
pub fn descriptions() -> &'static [ClusterDescription] {
    &DESCRIPTIONS
}

/// Look up the description card for one cluster.
///
/// Failing here means the assignment table references a cluster nobody
/// described, which is a configuration fault rather than user error.
pub fn describe(id: ClusterId) -> Result<&'static ClusterDescription, ClusterError> {
    DESCRIPTIONS
        .iter()
        .find(|description| description.id == id)
        .ok_or(ClusterError::UnknownCluster(id))
}

/// Fixed choropleth fill color for one cluster.
pub fn color_of(id: ClusterId) -> Result<&'static str, ClusterError> {
    match id.0 {
        0 => Ok("#66c2a5"),
        1 => Ok("#fc8d62"),
        2 => Ok("#8da0cb"),
        3 => Ok("#e78ac3"),
        _ => Err(ClusterError::UnknownCluster(id)),
    }
}

/// Pre-computed country-to-cluster assignments, loaded once per session.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterTable {
    assignments: Vec<ClusterAssignment>,
}

impl ClusterTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let assignments = parser::parse_assignments(reader)?;
        Ok(Self { assignments })
    }

    pub fn assignments(&self) -> &[ClusterAssignment] {
        &self.assignments
    }

    /// Countries assigned to `id`, in table order. Pure filtering.
    pub fn clusters_of(&self, id: ClusterId) -> Vec<&ClusterAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.cluster == id)
            .collect()
    }

    /// Sorted distinct cluster ids present in the table.
    pub fn observed_ids(&self) -> Vec<ClusterId> {
        let ids: BTreeSet<ClusterId> = self
            .assignments
            .iter()
            .map(|assignment| assignment.cluster)
            .collect();
        ids.into_iter().collect()
    }
}
