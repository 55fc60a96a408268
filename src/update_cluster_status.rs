use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use tracing::info;

use emr_cluster_status::common::config::Config;
use emr_cluster_status::common::dynamo::{DynamoDbStatusStore, StatusStore};
use emr_cluster_status::common::emr::ClusterDescriber;
use emr_cluster_status::common::errors::Error;
use emr_cluster_status::common::utils::init_tracing;
use emr_cluster_status::common::ClusterRequest;
use emr_cluster_status::ClusterStatusUpdater;

#[tracing::instrument(skip(updater))]
async fn process_request<D: ClusterDescriber, S: StatusStore>(
    request: ClusterRequest,
    updater: &ClusterStatusUpdater<D, S>,
) -> Result<String, Error> {
    let message = updater.update_status(&request.cluster_id).await?;
    info!("{}", message);

    Ok(message)
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    init_tracing();

    let config = Config::from_env();
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let emr_client = aws_sdk_emr::Client::new(&aws_config);
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);

    let store = DynamoDbStatusStore::new(dynamo_client, config.table_name);
    info!("Writing cluster status to table {}", store.table_name());
    let updater = ClusterStatusUpdater::new(emr_client, store);

    run(service_fn(|event: LambdaEvent<ClusterRequest>| {
        process_request(event.payload, &updater)
    }))
    .await
}
