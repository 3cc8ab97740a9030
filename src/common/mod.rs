//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (PageRef, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_ref;

pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_ref::PageRef;
