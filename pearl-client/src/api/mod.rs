//! Typed API surface over the store backend
//!
//! One `PearlClient` per backend; method groups live in sibling modules
//! (auth, items, orders, invoices).

mod auth;
mod invoices;
mod items;
mod orders;

use crate::{ClientConfig, ClientError, ClientResult, HttpClient, Session};

/// High-level client for the store backend
#[derive(Debug, Clone)]
pub struct PearlClient {
    http: HttpClient,
}

impl PearlClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client and seed it with a previously loaded session's token
    pub fn with_session(config: &ClientConfig, session: &Session) -> Result<Self, ClientError> {
        let mut client = Self::new(config)?;
        client.http.set_token(session.token.clone());
        Ok(client)
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }
}
