//! Invoice rendering

pub mod invoice;
pub mod text;

pub use invoice::{InvoiceRenderer, StoreInfo, email_body};
pub use text::TextBuilder;
