//! Message board REST API client.
//!
//! Provides endpoint resolution, wire models, and a trait-based gateway
//! for listing and creating messages.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod models;

pub use endpoint::BoardEndpoint;
pub use error::BoardError;
pub use gateway::{MessageGateway, ReqwestMessageGateway};
pub use models::{Message, MessageId, NewMessage, PostOutcome};
