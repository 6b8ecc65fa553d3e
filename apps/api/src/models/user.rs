use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::auth::session::Identity;

/// Row returned by the `verify_user_password` stored procedure.
#[derive(Debug, Clone, FromRow)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub user_email: String,
    pub user_full_name: String,
    pub user_role: String,
    pub user_company_id: Option<Uuid>,
}

impl From<AuthenticatedUser> for Identity {
    fn from(user: AuthenticatedUser) -> Self {
        Identity {
            user_id: user.user_id,
            email: user.user_email,
            full_name: user.user_full_name,
            role: user.user_role,
            company_id: user.user_company_id,
        }
    }
}

/// User payload echoed to the UI after login and on session checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub company_id: Option<Uuid>,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        UserResponse {
            id: identity.user_id,
            email: identity.email,
            full_name: identity.full_name,
            role: identity.role,
            company_id: identity.company_id,
        }
    }
}
