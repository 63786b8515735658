//! In-memory store for tests/dev.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use nomen_core::{ClaimId, UserId};
use nomen_identity::{User, UserClaim};

use crate::row::{ClaimRow, StoreError, UserRow};

/// Stores users and claims as their flattened rows, the way a relational
/// backend would, so reads always travel the trusted reconstruction path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<UserId, UserRow>>,
    claims: RwLock<HashMap<ClaimId, ClaimRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let row = UserRow::from_entity(user)?;
        debug!(user_id = %row.id, "storing user row");
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(row.id, row);
        Ok(())
    }

    pub fn insert_claim(&self, claim: &UserClaim) -> Result<(), StoreError> {
        let row = ClaimRow::from_entity(claim);
        debug!(claim_id = %row.id, user_id = %row.user_id, "storing claim row");
        self.claims
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(row.id, row);
        Ok(())
    }

    /// Load a user by id through the trusted reconstruction path.
    pub fn user(&self, id: &UserId) -> Result<User, StoreError> {
        let row = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or(StoreError::UserNotFound(*id))?;
        row.into_entity()
    }

    /// All claims referencing the given user.
    pub fn claims_for(&self, user_id: &UserId) -> Result<Vec<UserClaim>, StoreError> {
        self.claims
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|row| row.user_id == *user_id)
            .cloned()
            .map(ClaimRow::into_entity)
            .collect()
    }

    /// Eager load: filter claims by type and value, then follow each matching
    /// claim to its user and reconstruct that user fully, nested name
    /// included. Each user appears once however many claims matched it.
    pub fn users_with_claim(
        &self,
        claim_type: &str,
        value: &str,
    ) -> Result<Vec<User>, StoreError> {
        let user_ids: Vec<UserId> = {
            let claims = self.claims.read().unwrap_or_else(PoisonError::into_inner);
            let mut seen = HashSet::new();
            claims
                .values()
                .filter(|row| row.claim_type == claim_type && row.value == value)
                .map(|row| row.user_id)
                .filter(|id| seen.insert(*id))
                .collect()
        };

        debug!(claim_type, value, matches = user_ids.len(), "claims-filtered user load");

        user_ids.iter().map(|id| self.user(id)).collect()
    }
}
