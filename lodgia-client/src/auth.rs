use lodgia_domain::SessionUser;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Payload for account creation. Registration does not log the user in;
/// the backend replies with a confirmation message and the caller proceeds
/// to the login screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

impl ApiClient {
    /// Authenticates against the backend and establishes the session on
    /// success (token expiry is stamped by the session store).
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .fetch(
                self.http()
                    .post(self.url("/auth/login"))
                    .json(&LoginRequest { email, password }),
            )
            .await?;

        let user = SessionUser {
            email: response.email.clone(),
            first_name: response.first_name.clone(),
            role: response
                .role
                .clone()
                .unwrap_or_else(|| lodgia_domain::identity::ROLE_CUSTOMER.to_string()),
        };
        self.session().login(user, response.token.clone());
        Ok(response)
    }

    /// Creates an account. Unauthenticated; the session is left untouched.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.fetch(
            self.http()
                .post(self.url("/auth/register"))
                .json(request),
        )
        .await
    }
}
