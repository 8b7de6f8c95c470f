//! DTOs for sign-in routes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Principal;

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    /// OAuth provider name, `google` when absent.
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<Principal> for MeResponse {
    fn from(principal: Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email,
            name: principal.name,
            avatar_url: principal.avatar_url,
        }
    }
}
