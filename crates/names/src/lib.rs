//! `nomen-names` — personal-name value objects.
//!
//! This crate contains the name domain proper: parsing free-text name segments
//! into validated, immutable value objects, plus the single error kind all
//! parse failures surface through. It is pure domain logic (no IO, no storage).

pub mod error;
pub mod full_name;
pub mod name;

pub use error::NameFormatError;
pub use full_name::FullName;
pub use name::{Name, Separator};
