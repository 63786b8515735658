//! `nomen-identity` — user entities that own a validated full name.
//!
//! These entities are collaborators of the name domain, not its core: the only
//! contract they rely on is being constructed with an already-valid
//! [`FullName`].

pub mod claim;
pub mod user;

pub use claim::UserClaim;
pub use user::User;
