//! Login and registration facade.

use ordem_types::{GameMaster, LoginRequest, LoginResponse};

use crate::client::ApiClient;
use crate::error::ApiError;

/// POST `/auth/login`. On success the returned token is persisted into the
/// session store, which is what flips the client into "authenticated".
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response: LoginResponse = client.post("/auth/login", credentials).await?;
    client.session().set(&response.token);
    Ok(response)
}

/// POST `/game-masters`. Registration does not log the new account in; the
/// caller goes through [`login`] afterwards.
pub async fn register(client: &ApiClient, game_master: &GameMaster) -> Result<GameMaster, ApiError> {
    client.post("/game-masters", game_master).await
}

/// Drops the stored token. Purely local, nothing is sent to the backend.
pub fn logout(client: &ApiClient) {
    client.session().clear();
}
