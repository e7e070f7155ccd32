//! Shared types for the Pearl client
//!
//! Wire-format types consumed by every client of the store backend:
//! catalog, order and invoice models, auth DTOs, response envelopes
//! and pagination types.

pub mod client;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Auth re-exports (for convenient access)
pub use client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
