use serde::{Deserialize, Serialize};

/// A game master account as the backend reports it.
///
/// `password` is only ever filled on the way out (registration / login
/// submission); responses carry it as absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameMaster {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub game_master: GameMaster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_wire_names() {
        let json = r#"{"token":"abc","gameMaster":{"name":"Ana","email":"a@b.com"}}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "abc");
        assert_eq!(parsed.game_master.name, "Ana");
        assert_eq!(parsed.game_master.password, None);
    }

    #[test]
    fn absent_password_is_not_serialized() {
        let gm = GameMaster {
            name: "Ana".into(),
            email: "a@b.com".into(),
            password: None,
        };
        let json = serde_json::to_string(&gm).unwrap();
        assert!(!json.contains("password"));
    }
}
