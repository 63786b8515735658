//! Flattened row shapes and the entity <-> row mapping.
//!
//! Column names (including the historical `NameSeperator` spelling) are part
//! of the storage schema and must not change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use nomen_core::{ClaimId, DomainError, UserId};
use nomen_identity::{User, UserClaim};
use nomen_names::{FullName, Name, Separator};

/// Max length of a name-part column.
pub const NAME_PART_MAX: usize = 255;
/// Max length of a separator column.
pub const SEPARATOR_MAX: usize = 5;

/// Persistence mapping error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A value exceeds its column's length limit (write-side check).
    #[error("column {column} exceeds max length {max} (got {len})")]
    ColumnTooLong {
        column: &'static str,
        max: usize,
        len: usize,
    },

    /// A required column holds an empty value (write-side check).
    #[error("required column {column} is empty")]
    MissingRequired { column: &'static str },

    /// A stored separator token no valid write could have produced.
    #[error("stored separator token {token:?} is not a known separator")]
    CorruptSeparator { token: String },

    /// A row referenced a user that is not stored.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A user flattened to its storage columns: the id plus the six string
/// columns the owned [`FullName`] decomposes into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    #[serde(rename = "Id")]
    pub id: UserId,
    #[serde(rename = "FirstName_FirstPart")]
    pub first_name_first_part: String,
    #[serde(rename = "FirstName_NameSeperator")]
    pub first_name_seperator: String,
    #[serde(rename = "FirstName_LastPart")]
    pub first_name_last_part: String,
    #[serde(rename = "LastName_FirstPart")]
    pub last_name_first_part: String,
    #[serde(rename = "LastName_NameSeperator")]
    pub last_name_seperator: String,
    #[serde(rename = "LastName_LastPart")]
    pub last_name_last_part: String,
}

impl UserRow {
    /// Flatten a user for storage, enforcing the column constraints.
    pub fn from_entity(user: &User) -> Result<Self, StoreError> {
        use nomen_core::Entity as _;

        let first = user.name().first_name();
        let last = user.name().last_name();

        check_name_part("FirstName_FirstPart", first.first_part(), true)?;
        check_name_part("FirstName_LastPart", first.last_part(), false)?;
        check_separator("FirstName_NameSeperator", first.separator())?;
        check_name_part("LastName_FirstPart", last.first_part(), true)?;
        check_name_part("LastName_LastPart", last.last_part(), false)?;
        check_separator("LastName_NameSeperator", last.separator())?;

        Ok(Self {
            id: *user.id(),
            first_name_first_part: first.first_part().to_string(),
            first_name_seperator: first.separator().as_str().to_string(),
            first_name_last_part: first.last_part().to_string(),
            last_name_first_part: last.first_part().to_string(),
            last_name_seperator: last.separator().as_str().to_string(),
            last_name_last_part: last.last_part().to_string(),
        })
    }

    /// Trusted reconstruction of the stored user.
    ///
    /// The name parts were validated when the row was written, so they are
    /// rebuilt through [`Name::from_validated_parts`] without re-running the
    /// letter checks. Only the separator token lookup can fail, and no row a
    /// successful write produced can trigger that.
    pub fn into_entity(self) -> Result<User, StoreError> {
        let first = Name::from_validated_parts(
            self.first_name_first_part,
            decode_separator(self.first_name_seperator)?,
            self.first_name_last_part,
        );
        let last = Name::from_validated_parts(
            self.last_name_first_part,
            decode_separator(self.last_name_seperator)?,
            self.last_name_last_part,
        );

        Ok(User::new(
            self.id,
            FullName::from_validated_parts(first, last),
        ))
    }
}

/// A claim flattened to its storage columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRow {
    #[serde(rename = "Id")]
    pub id: ClaimId,
    #[serde(rename = "Type")]
    pub claim_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "UserId")]
    pub user_id: UserId,
}

impl ClaimRow {
    pub fn from_entity(claim: &UserClaim) -> Self {
        use nomen_core::Entity as _;

        Self {
            id: *claim.id(),
            claim_type: claim.claim_type().to_string(),
            value: claim.value().to_string(),
            user_id: claim.user_id(),
        }
    }

    pub fn into_entity(self) -> Result<UserClaim, StoreError> {
        Ok(UserClaim::new(
            self.id,
            self.claim_type,
            self.value,
            self.user_id,
        )?)
    }
}

fn check_name_part(
    column: &'static str,
    value: &str,
    required: bool,
) -> Result<(), StoreError> {
    if required && value.is_empty() {
        return Err(StoreError::MissingRequired { column });
    }
    let len = value.chars().count();
    if len > NAME_PART_MAX {
        return Err(StoreError::ColumnTooLong {
            column,
            max: NAME_PART_MAX,
            len,
        });
    }
    Ok(())
}

fn check_separator(column: &'static str, separator: Separator) -> Result<(), StoreError> {
    let len = separator.as_str().len();
    if len > SEPARATOR_MAX {
        return Err(StoreError::ColumnTooLong {
            column,
            max: SEPARATOR_MAX,
            len,
        });
    }
    Ok(())
}

fn decode_separator(token: String) -> Result<Separator, StoreError> {
    Separator::from_token(&token).ok_or(StoreError::CorruptSeparator { token })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            UserId::new(),
            FullName::parse("Lisa-Marie_Graf zu Falkenstein").unwrap(),
        )
    }

    #[test]
    fn row_round_trip_preserves_the_user() {
        let user = sample_user();
        let row = UserRow::from_entity(&user).unwrap();
        let restored = row.into_entity().unwrap();

        assert_eq!(restored, user);
        assert_eq!(restored.name().to_string(), "Lisa-Marie Graf zu Falkenstein");
    }

    #[test]
    fn serialized_row_carries_the_schema_column_names() {
        let row = UserRow::from_entity(&sample_user()).unwrap();
        let json = serde_json::to_value(&row).unwrap();
        let object = json.as_object().unwrap();

        for column in [
            "Id",
            "FirstName_FirstPart",
            "FirstName_NameSeperator",
            "FirstName_LastPart",
            "LastName_FirstPart",
            "LastName_NameSeperator",
            "LastName_LastPart",
        ] {
            assert!(object.contains_key(column), "missing column {column}");
        }

        assert_eq!(object["FirstName_NameSeperator"], "-");
        assert_eq!(object["LastName_NameSeperator"], "zu");
    }

    #[test]
    fn decode_does_not_rerun_letter_validation() {
        // A row written by an older parser revision may hold parts the current
        // parser would reject; the trusted path must still accept it.
        let id = UserId::new();
        let row = UserRow {
            id,
            first_name_first_part: "Max123".to_string(),
            first_name_seperator: String::new(),
            first_name_last_part: String::new(),
            last_name_first_part: "Mustermann".to_string(),
            last_name_seperator: String::new(),
            last_name_last_part: String::new(),
        };

        let user = row.into_entity().unwrap();
        assert_eq!(user.name().first_name().first_part(), "Max123");
    }

    #[test]
    fn decode_rejects_unknown_separator_token() {
        let row = UserRow {
            id: UserId::new(),
            first_name_first_part: "Max".to_string(),
            first_name_seperator: "van".to_string(),
            first_name_last_part: "Meier".to_string(),
            last_name_first_part: "Mustermann".to_string(),
            last_name_seperator: String::new(),
            last_name_last_part: String::new(),
        };

        let err = row.into_entity().unwrap_err();
        assert!(matches!(err, StoreError::CorruptSeparator { token } if token == "van"));
    }

    #[test]
    fn encode_rejects_oversized_name_part() {
        let long = "a".repeat(NAME_PART_MAX + 1);
        let user = User::new(
            UserId::new(),
            FullName::from_validated_parts(
                Name::from_validated_parts(long, Separator::None, ""),
                Name::from_validated_parts("Mustermann", Separator::None, ""),
            ),
        );

        let err = UserRow::from_entity(&user).unwrap_err();
        assert!(matches!(
            err,
            StoreError::ColumnTooLong {
                column: "FirstName_FirstPart",
                ..
            }
        ));
    }

    #[test]
    fn encode_rejects_empty_required_first_part() {
        let user = User::new(
            UserId::new(),
            FullName::from_validated_parts(
                Name::from_validated_parts("", Separator::None, ""),
                Name::from_validated_parts("Mustermann", Separator::None, ""),
            ),
        );

        let err = UserRow::from_entity(&user).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingRequired {
                column: "FirstName_FirstPart"
            }
        ));
    }

    #[test]
    fn claim_row_round_trips() {
        let claim = UserClaim::new(ClaimId::new(), "Type 0", "Value 0", UserId::new()).unwrap();
        let row = ClaimRow::from_entity(&claim);
        assert_eq!(row.into_entity().unwrap(), claim);
    }
}
