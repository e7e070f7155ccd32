//! Pearl Client - HTTP client for the store backend
//!
//! A thin client over the inventory/order REST API of a small medical and
//! optical retailer: auth and session handling, catalog CRUD, order drafts
//! with live totals, order history, and invoice retrieval/rendering.

pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod http;
pub mod listing;
pub mod order_money;
pub mod render;
pub mod session;

pub use api::PearlClient;
pub use config::ClientConfig;
pub use draft::{DraftError, OrderDraft};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use order_money::{OrderTotals, compute_subtotal, compute_totals, recalc_line};
pub use session::{Session, SessionError, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
pub use shared::models::{Category, Invoice, Item, OrderCreate, OrderLine, OrderSummary};
