//! Login, registration and logout

use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo};

use super::*;

impl PearlClient {
    /// Log in with email and password
    ///
    /// On success the client keeps the issued token (when there is one) for
    /// subsequent requests and returns the session; persisting it is the
    /// caller's decision via `SessionStore::save`.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.http.post("/api/auth/login", &request).await?;
        let session = Session::from_login(&response).ok_or_else(|| {
            ClientError::Auth(
                response
                    .message
                    .unwrap_or_else(|| "Login failed".to_string()),
            )
        })?;

        self.http.set_token(session.token.clone());
        tracing::debug!(email = %email, "Logged in");
        Ok(session)
    }

    /// Register a new user (admin-side user management)
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<UserInfo> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: RegisterResponse = self.http.post("/api/auth/register", &request).await?;
        response.user.ok_or_else(|| {
            ClientError::Auth(
                response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            )
        })
    }

    /// Forget the bearer token
    ///
    /// The backend keeps no server-side session to tear down; logging out
    /// is dropping the token here and clearing the persisted session via
    /// `SessionStore::clear`.
    pub fn logout(&mut self) {
        self.http.set_token(None);
        tracing::debug!("Logged out");
    }
}
