//! `nomen-store` — persistence mapping for users and claims.
//!
//! This crate owns the flattened row shapes the name value objects are stored
//! as, the column constraints enforced on write, and the **trusted
//! reconstruction** path that rebuilds value objects from storage without
//! re-running parse validation. The in-memory store exists to exercise that
//! contract (including loading users eagerly through a claims filter); it is
//! glue, not a storage engine.

pub mod memory;
pub mod row;

pub use memory::InMemoryStore;
pub use row::{ClaimRow, StoreError, UserRow};
