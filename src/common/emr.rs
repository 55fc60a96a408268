use async_trait::async_trait;
use lambda_runtime::Error as LambdaError;

use crate::common::errors::upstream_error;
use crate::common::ClusterSummary;

/// Looks up a cluster by id on the cluster-management service.
#[async_trait]
pub trait ClusterDescriber: Send + Sync {
    /// `Ok(None)` when the service answered but returned no cluster.
    async fn describe_cluster(&self, cluster_id: &str)
        -> Result<Option<ClusterSummary>, LambdaError>;
}

#[async_trait]
impl ClusterDescriber for aws_sdk_emr::Client {
    async fn describe_cluster(
        &self,
        cluster_id: &str,
    ) -> Result<Option<ClusterSummary>, LambdaError> {
        let output = self
            .describe_cluster()
            .cluster_id(cluster_id)
            .send()
            .await
            .map_err(upstream_error)?;

        let Some(cluster) = output.cluster() else {
            return Ok(None);
        };

        let state = cluster
            .status()
            .and_then(|status| status.state())
            .map(|state| state.as_str().to_string());

        Ok(Some(ClusterSummary {
            id: cluster.id().unwrap_or(cluster_id).to_string(),
            state,
        }))
    }
}
