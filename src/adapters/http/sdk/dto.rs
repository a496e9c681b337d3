//! Response DTO for the client token endpoint.

use serde::{Deserialize, Serialize};

use crate::ports::ClientToken;

/// Body of `GET /api/client-token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientTokenResponse {
    pub client_token: String,
    pub expires_in: i64,
}

impl From<ClientToken> for ClientTokenResponse {
    fn from(token: ClientToken) -> Self {
        Self {
            client_token: token.token,
            expires_in: token.expires_in,
        }
    }
}
