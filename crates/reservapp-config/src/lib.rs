//! # ReservApp Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`gate`]: Token lookup, signature policy, and listener settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use reservapp_config::{CorsConfig, GateConfig};
//!
//! dotenvy::dotenv().ok();
//! let gate_config = GateConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod gate;

pub use cors::CorsConfig;
pub use gate::{ConfigError, GateConfig};
