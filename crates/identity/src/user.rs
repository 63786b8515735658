//! User entity.

use serde::{Deserialize, Serialize};

use nomen_core::{Entity, UserId};
use nomen_names::FullName;

/// A user identified by id, owning one validated [`FullName`].
///
/// The name is a value object the user owns; claims reference the user by id
/// and live as separate entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: FullName,
}

impl User {
    /// Construct a user from an already-validated name.
    pub fn new(id: UserId, name: FullName) -> Self {
        Self { id, name }
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
