use tracing::{error, info};

use crate::common::dynamo::StatusStore;
use crate::common::emr::ClusterDescriber;
use crate::common::errors::Error;
use crate::common::ClusterStatusRecord;

pub const SUCCESS_MESSAGE: &str = "Updated cluster status successfully";

const EMPTY_CLUSTER_ID_ERROR: &str = "clusterID is empty";
const CLUSTER_NOT_FOUND_ERROR: &str = "clusterID does not exist";
const UNDEFINED_STATUS_ERROR: &str = "cluster status is undefined";

/// Current state of the cluster, e.g. `RUNNING`. Does not write anything.
pub async fn fetch_status<D>(describer: &D, cluster_id: &str) -> Result<String, Error>
where
    D: ClusterDescriber + ?Sized,
{
    if cluster_id.is_empty() {
        return Err(Error::InvalidInput(EMPTY_CLUSTER_ID_ERROR.into()));
    }

    let cluster = match describer.describe_cluster(cluster_id).await {
        Ok(Some(cluster)) => cluster,
        Ok(None) => {
            error!("{}: {}", CLUSTER_NOT_FOUND_ERROR, cluster_id);
            return Err(Error::NotFound(CLUSTER_NOT_FOUND_ERROR.into()));
        }
        Err(err) => {
            error!("DescribeCluster error - {}", err);
            return Err(Error::UpstreamFailure(err));
        }
    };

    info!("Cluster {} is {:?}", cluster.id, cluster.state);
    cluster.state.ok_or_else(|| {
        error!("{}: {}", UNDEFINED_STATUS_ERROR, cluster_id);
        Error::NotFound(UNDEFINED_STATUS_ERROR.into())
    })
}

/// Reads a cluster's lifecycle state and records it in the status table.
pub struct ClusterStatusUpdater<D, S> {
    describer: D,
    store: S,
}

impl<D: ClusterDescriber, S: StatusStore> ClusterStatusUpdater<D, S> {
    pub fn new(describer: D, store: S) -> Self {
        Self { describer, store }
    }

    /// Looks the cluster up and upserts `status`/`updatedAt` under its id.
    /// Nothing is written unless the lookup produced a state.
    pub async fn update_status(&self, cluster_id: &str) -> Result<String, Error> {
        let status = fetch_status(&self.describer, cluster_id).await?;
        let record = ClusterStatusRecord::new(cluster_id, status);

        info!("Updating {} to {}", record.cluster_id, record.status);
        self.store.update_status(&record).await.map_err(|err| {
            error!("UpdateItem error - {}", err);
            Error::UpstreamFailure(err)
        })?;

        Ok(SUCCESS_MESSAGE.into())
    }
}
