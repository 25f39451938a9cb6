//! # Core Types
//!
//! Identifier types shared by the editing engine, the log sink and the host.
//!
//! ## Key Types
//!
//! - [`SessionId`]: Unique identifier for an editing session

pub mod ids;

pub use ids::SessionId;
