//! Storage traits and records.
//!
//! | Trait | Backs |
//! |-------|-------|
//! | [`AccountRepository`] | `users` table: accounts, tiers, org role links |
//! | [`RoleRepository`] | `roles` table: stored org role names |
//!
//! Enable the `mocks` feature for in-memory implementations
//! ([`MockAccountRepository`], [`MockRoleRepository`]), or `sqlx_sqlite` for
//! the SQLite ones in [`crate::sqlite`].

mod account;
mod role;

#[cfg(any(test, feature = "mocks"))]
mod account_mock;
#[cfg(any(test, feature = "mocks"))]
mod role_mock;

pub use account::{Account, AccountRepository, CreateAccount};
pub use role::{OrgRole, RoleRepository};

#[cfg(any(test, feature = "mocks"))]
pub use account_mock::MockAccountRepository;
#[cfg(any(test, feature = "mocks"))]
pub use role_mock::MockRoleRepository;
