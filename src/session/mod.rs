//! Signed session tokens.
//!
//! Enable with the `jwt` feature. A token carries the account's id, email,
//! name and tier; [`SessionService::verify`] turns it back into a
//! [`SessionIdentity`](crate::actions::SessionIdentity) for
//! [`ResolvePrincipalAction`](crate::actions::ResolvePrincipalAction).
//!
//! # Example
//!
//! ```ignore
//! use tierwise::session::{SessionConfig, SessionService};
//!
//! let service = SessionService::new(SessionConfig::from_env()?);
//!
//! let token = service.issue(&account)?;
//! let identity = service.verify(&token)?;
//! let principal = ResolvePrincipalAction::new(accounts, roles)
//!     .execute(identity)
//!     .await?;
//! ```

mod claims;
mod config;
mod service;

pub use claims::SessionClaims;
pub use config::{SessionConfig, MIN_SECRET_LENGTH, SECRET_ENV_VAR};
pub use service::SessionService;
