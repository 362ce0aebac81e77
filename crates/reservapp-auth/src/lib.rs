//! # ReservApp Auth
//!
//! Role model and bearer token decoding for the ReservApp route gate.
//!
//! This crate provides:
//!
//! - [`role`]: The closed [`Role`] set and its canonical parser
//! - [`claims`]: The [`TokenPayload`] carried in the middle token segment
//! - [`identity`]: The per-request [`Identity`] derived from a payload
//! - [`codec`]: [`TokenCodec`], which decodes payloads, checks expiry, and
//!   extracts identities
//! - [`permissions`]: The static role to permission grants
//!
//! # Trust boundary
//!
//! By default the codec does **not** verify token signatures. The session
//! cookie is issued by the ReservApp backend and the gate only reads it to
//! choose a redirect; the backend re-validates every API call. A deployment
//! that shares the backend's HS256 secret can opt into verification with
//! [`TokenCodec::verified`].
//!
//! # Example
//!
//! ```ignore
//! use reservapp_auth::{Role, TokenCodec};
//!
//! let codec = TokenCodec::unverified();
//! if let Some(identity) = codec.extract_identity(token) {
//!     assert_eq!(identity.role, Role::Admin);
//! }
//! ```

pub mod claims;
pub mod codec;
pub mod identity;
pub mod permissions;
pub mod role;

pub use claims::TokenPayload;
pub use codec::{SignaturePolicy, TokenCodec, encode_unsigned};
pub use identity::Identity;
pub use permissions::Permission;
pub use role::{ParseRoleError, Role};
