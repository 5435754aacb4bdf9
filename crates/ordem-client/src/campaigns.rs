//! Campaign facade. One REST call per function, no retries, no batching;
//! callers map the error to a user-facing message.

use ordem_types::{Campaign, CreateCampaignRequest, UpdateCampaignRequest};

use crate::client::ApiClient;
use crate::error::ApiError;

/// GET `/campaigns`, every campaign of the logged-in game master.
pub async fn get_all(client: &ApiClient) -> Result<Vec<Campaign>, ApiError> {
    client.get("/campaigns").await
}

/// GET `/campaigns/{id}`.
pub async fn get(client: &ApiClient, id: &str) -> Result<Campaign, ApiError> {
    client.get(&format!("/campaigns/{id}")).await
}

/// POST `/campaigns`. The backend issues the id, join-code and status.
pub async fn create(
    client: &ApiClient,
    campaign: &CreateCampaignRequest,
) -> Result<Campaign, ApiError> {
    client.post("/campaigns", campaign).await
}

/// PUT `/campaigns/{id}` with a partial body. Not reached from the current
/// pages, kept because the backend exposes it.
pub async fn update(
    client: &ApiClient,
    id: &str,
    changes: &UpdateCampaignRequest,
) -> Result<Campaign, ApiError> {
    client.put(&format!("/campaigns/{id}"), changes).await
}

/// DELETE `/campaigns/{id}`. Same situation as [`update`].
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/campaigns/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::testing::{client_with, FakeTransport};
    use ordem_types::CampaignStatus;

    const CAMPAIGN: &str = r#"{
        "id": "c1",
        "name": "Mesa de sexta",
        "code": "XK42QZ",
        "status": "ACTIVE",
        "createdAt": "2025-06-01T20:30:00"
    }"#;

    #[tokio::test]
    async fn get_all_hits_the_collection_with_the_token() {
        let transport = FakeTransport::replying(200, &format!("[{CAMPAIGN}]"));
        let (client, session, _) = client_with(transport.clone());
        session.set("tok");

        let campaigns = get_all(&client).await.unwrap();

        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].code, "XK42QZ");
        let sent = transport.last_request();
        assert!(sent.url.ends_with("/campaigns"));
        assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn get_by_id_builds_the_item_path() {
        let transport = FakeTransport::replying(200, CAMPAIGN);
        let (client, _, _) = client_with(transport.clone());

        let campaign = get(&client, "c1").await.unwrap();

        assert_eq!(campaign.status, CampaignStatus::Active);
        assert!(transport.last_request().url.ends_with("/campaigns/c1"));
    }

    #[tokio::test]
    async fn missing_campaign_surfaces_the_status() {
        let transport = FakeTransport::replying(404, "");
        let (client, _, _) = client_with(transport);

        let result = get(&client, "nope").await;

        assert_eq!(result, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn create_posts_the_name_only() {
        let transport = FakeTransport::replying(201, CAMPAIGN);
        let (client, _, _) = client_with(transport.clone());

        let request = CreateCampaignRequest {
            name: "Mesa de sexta".into(),
        };
        let created = create(&client, &request).await.unwrap();

        assert_eq!(created.id, "c1");
        assert_eq!(
            transport.last_request().body.as_deref(),
            Some(r#"{"name":"Mesa de sexta"}"#)
        );
    }

    #[tokio::test]
    async fn update_puts_only_the_changed_fields() {
        let transport = FakeTransport::replying(200, CAMPAIGN);
        let (client, _, _) = client_with(transport.clone());

        let changes = UpdateCampaignRequest {
            name: None,
            status: Some(CampaignStatus::Paused),
        };
        update(&client, "c1", &changes).await.unwrap();

        let sent = transport.last_request();
        assert!(sent.url.ends_with("/campaigns/c1"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"status":"PAUSED"}"#));
    }

    #[tokio::test]
    async fn delete_sends_no_body_and_ignores_the_reply() {
        let transport = FakeTransport::replying(204, "");
        let (client, _, _) = client_with(transport.clone());

        delete(&client, "c1").await.unwrap();

        let sent = transport.last_request();
        assert!(sent.url.ends_with("/campaigns/c1"));
        assert_eq!(sent.body, None);
        assert_eq!(transport.request_count(), 1);
    }
}
