//! Account operations built on the repositories.
//!
//! Each action owns its repositories (clone a repository to share it) and
//! exposes a single async `execute`.

pub mod assign_org_role;
pub mod login;
pub mod resolve_principal;
pub mod role_availability;
pub mod signup;

pub use assign_org_role::{AssignOrgRoleAction, AssignOrgRoleInput};
pub use login::LoginAction;
pub use resolve_principal::{ResolvePrincipalAction, SessionIdentity};
pub use role_availability::{RoleAvailability, RoleAvailabilityAction};
pub use signup::{SignupAction, SignupInput};
