//! Core shared types and logic for the BookMyBox dashboard
//! 
//! This crate contains:
//! - Data models shared between desktop and WASM
//! - The session container and its storage/authenticator seams
//! - Gamification rules, status mapping and chart shaping
//! - The payment processor boundary
//! - Error types
//! - Shared UI components (with `ui` feature)

pub mod models;
pub mod error;
pub mod storage;
pub mod auth;
pub mod session;
pub mod gamification;
pub mod status;
pub mod charts;
pub mod media;
pub mod payment;

#[cfg(feature = "ui")]
pub mod ui;

pub use models::*;
pub use error::*;
pub use storage::*;
pub use auth::*;
pub use session::*;
pub use gamification::*;
pub use status::*;
pub use charts::*;
pub use media::*;
pub use payment::*;

#[cfg(feature = "ui")]
pub use ui::*;
