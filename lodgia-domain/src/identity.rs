use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_RECEPTIONIST: &str = "ROLE_RECEPTIONIST";
pub const ROLE_CUSTOMER: &str = "ROLE_CUSTOMER";

/// The identity carried by a live session. Roles are kept as the backend's
/// opaque strings; the client only ever compares them for equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    ROLE_CUSTOMER.to_string()
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
