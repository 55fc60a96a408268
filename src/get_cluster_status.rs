use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use tracing::info;

use emr_cluster_status::common::emr::ClusterDescriber;
use emr_cluster_status::common::errors::Error;
use emr_cluster_status::common::utils::init_tracing;
use emr_cluster_status::common::ClusterRequest;
use emr_cluster_status::fetch_status;

#[tracing::instrument(skip(emr_client))]
async fn process_request(
    request: ClusterRequest,
    emr_client: &dyn ClusterDescriber,
) -> Result<String, Error> {
    let status = fetch_status(emr_client, &request.cluster_id).await?;
    info!("Cluster {} is {}", request.cluster_id, status);

    Ok(status)
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    init_tracing();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let emr_client = aws_sdk_emr::Client::new(&aws_config);

    run(service_fn(|event: LambdaEvent<ClusterRequest>| {
        process_request(event.payload, &emr_client)
    }))
    .await
}
