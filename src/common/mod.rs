use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

pub mod config;
pub mod dynamo;
pub mod emr;
pub mod errors;
pub mod utils;

pub const TABLE_NAME_DEFAULT: &str = "cluster-status";

/// Partition key of the status table.
pub const CLUSTER_ID: &str = "clusterID";
pub const CLUSTER_STATUS: &str = "status";
pub const CLUSTER_UPDATED_AT: &str = "updatedAt";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterRequest {
    #[serde(rename = "clusterID", default)]
    pub cluster_id: String,
}

/// What the cluster-management service reports for a single cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub id: String,
    /// Lifecycle state such as `RUNNING` or `TERMINATED`. `None` when the
    /// service returned a cluster without a status.
    pub state: Option<String>,
}

/// Latest observed status of a cluster, one per `clusterID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterStatusRecord {
    pub cluster_id: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl ClusterStatusRecord {
    pub fn new(cluster_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            status: status.into(),
            updated_at: Utc::now(),
        }
    }

    /// ISO 8601 timestamp as stored in the `updatedAt` attribute.
    pub fn updated_at_rfc3339(&self) -> String {
        self.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
