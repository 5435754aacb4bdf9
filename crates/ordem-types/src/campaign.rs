use serde::{Deserialize, Serialize};

/// A campaign owned by the logged-in game master.
///
/// `code` is the join-code the backend issues; the client never generates
/// or validates it, only displays and copies it. `created_at` is the
/// backend's ISO-8601 timestamp, kept as a string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub code: String,
    pub status: CampaignStatus,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Active,
    Paused,
    Archived,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateCampaignRequest {
    pub name: String,
}

/// Partial update payload; only the fields that are present get sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

impl Default for CampaignStatus {
    fn default() -> Self {
        CampaignStatus::Active
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            code: String::new(),
            status: CampaignStatus::default(),
            created_at: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_parses_backend_wire_format() {
        let json = r#"{
            "id": "c1",
            "name": "Mesa de sexta",
            "code": "XK42QZ",
            "status": "ACTIVE",
            "createdAt": "2025-06-01T20:30:00"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.created_at, "2025-06-01T20:30:00");
    }

    #[test]
    fn status_variants_use_screaming_case() {
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Archived).unwrap(),
            "\"ARCHIVED\""
        );
        let paused: CampaignStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(paused, CampaignStatus::Paused);
    }

    #[test]
    fn partial_update_skips_absent_fields() {
        let update = UpdateCampaignRequest {
            name: Some("Nova mesa".into()),
            status: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"Nova mesa"}"#);
    }
}
