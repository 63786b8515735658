//! User claim entity.

use serde::{Deserialize, Serialize};

use nomen_core::{ClaimId, DomainError, DomainResult, Entity, UserId};

/// A typed claim attached to a user.
///
/// Claims reference their owning user by id; a user has many claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaim {
    id: ClaimId,
    claim_type: String,
    value: String,
    user_id: UserId,
}

impl UserClaim {
    pub fn new(
        id: ClaimId,
        claim_type: impl Into<String>,
        value: impl Into<String>,
        user_id: UserId,
    ) -> DomainResult<Self> {
        let claim_type = claim_type.into();
        if claim_type.trim().is_empty() {
            return Err(DomainError::validation("claim type cannot be empty"));
        }

        Ok(Self {
            id,
            claim_type,
            value: value.into(),
            user_id,
        })
    }

    pub fn claim_type(&self) -> &str {
        &self.claim_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Whether this claim has the given type and value.
    pub fn matches(&self, claim_type: &str, value: &str) -> bool {
        self.claim_type == claim_type && self.value == value
    }
}

impl Entity for UserClaim {
    type Id = ClaimId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
