//! Permission tiers and how they are derived.

mod derive;
mod tier;

pub use derive::{derive_tier_from_role_name, resolve_signup_tier};
pub use tier::Tier;
