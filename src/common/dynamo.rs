use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use lambda_runtime::Error as LambdaError;
use tracing::info;

use crate::common::errors::upstream_error;
use crate::common::{ClusterStatusRecord, CLUSTER_ID, CLUSTER_STATUS, CLUSTER_UPDATED_AT};

const UPDATE_EXPRESSION: &str = "SET #S = :s, #U = :u";

/// Durable store for the latest status of each cluster.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Creates the record or overwrites `status` and `updatedAt`. Last write wins.
    async fn update_status(&self, record: &ClusterStatusRecord) -> Result<(), LambdaError>;
}

pub struct DynamoDbStatusStore {
    dynamo_client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbStatusStore {
    pub fn new(dynamo_client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            dynamo_client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl StatusStore for DynamoDbStatusStore {
    async fn update_status(&self, record: &ClusterStatusRecord) -> Result<(), LambdaError> {
        let response = self
            .dynamo_client
            .update_item()
            .table_name(&self.table_name)
            .key(CLUSTER_ID, AttributeValue::S(record.cluster_id.clone()))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#S", CLUSTER_STATUS)
            .expression_attribute_names("#U", CLUSTER_UPDATED_AT)
            .expression_attribute_values(":s", AttributeValue::S(record.status.clone()))
            .expression_attribute_values(":u", AttributeValue::S(record.updated_at_rfc3339()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(upstream_error)?;

        info!("Updated: {:?}", response.attributes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::update_item::{UpdateItemError, UpdateItemOutput};
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
    use aws_smithy_mocks::{mock, mock_client};

    const TABLE: &str = "test";

    #[tokio::test]
    async fn sends_update_expression() {
        let record = ClusterStatusRecord::new("j-3HF05G4MQF2LM", "TERMINATED");
        let updated_at = record.updated_at_rfc3339();

        let rule = mock!(aws_sdk_dynamodb::Client::update_item)
            .match_requests(move |req| {
                let key = req.key().and_then(|key| key.get(CLUSTER_ID));
                let names = req.expression_attribute_names();
                let values = req.expression_attribute_values();

                req.table_name() == Some(TABLE)
                    && key == Some(&AttributeValue::S("j-3HF05G4MQF2LM".into()))
                    && req.update_expression() == Some(UPDATE_EXPRESSION)
                    && names.and_then(|n| n.get("#S")).map(String::as_str) == Some(CLUSTER_STATUS)
                    && names.and_then(|n| n.get("#U")).map(String::as_str)
                        == Some(CLUSTER_UPDATED_AT)
                    && values.and_then(|v| v.get(":s"))
                        == Some(&AttributeValue::S("TERMINATED".into()))
                    && values.and_then(|v| v.get(":u")) == Some(&AttributeValue::S(updated_at.clone()))
                    && req.return_values() == Some(&ReturnValue::UpdatedNew)
            })
            .then_output(|| UpdateItemOutput::builder().build());
        let client: aws_sdk_dynamodb::Client = mock_client!(aws_sdk_dynamodb, [&rule]);

        let store = DynamoDbStatusStore::new(client, TABLE);
        store.update_status(&record).await.unwrap();

        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn service_error_is_returned() {
        let rule = mock!(aws_sdk_dynamodb::Client::update_item).then_error(|| {
            UpdateItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });
        let client: aws_sdk_dynamodb::Client = mock_client!(aws_sdk_dynamodb, [&rule]);

        let store = DynamoDbStatusStore::new(client, TABLE);
        let err = store
            .update_status(&ClusterStatusRecord::new("j-1", "RUNNING"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Requested resource not found"));
    }
}
