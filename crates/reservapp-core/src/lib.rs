//! # ReservApp Core
//!
//! Foundational types shared by the ReservApp gate crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use reservapp_core::AppError;
//!
//! let error = AppError::unauthorized(anyhow::anyhow!("Missing session"));
//! ```

pub mod errors;

pub use errors::AppError;
