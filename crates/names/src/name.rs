//! One segment of a person's name.
//!
//! A [`Name`] can be a first, middle or last name. Accepted textual forms:
//! - single name: `Max`, `Julius`, `Mustermann`
//! - double name joined by a hyphen: `Lisa-Marie`, `Luca-Joshua`
//! - title of nobility: `Friedrich von Münchhausen`, `Graf zu Falkenstein`

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use nomen_core::{AtomicValue, ValueObject, value_equals, value_hash};

use crate::error::NameFormatError;

/// The token joining the two parts of a compound name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    /// Single name, no second part.
    #[serde(rename = "")]
    None,
    /// Double name: `Lisa-Marie`.
    #[serde(rename = "-")]
    Hyphen,
    /// Title of nobility: `Friedrich von Münchhausen`.
    #[serde(rename = "von")]
    Von,
    /// Title of nobility: `Graf zu Falkenstein`.
    #[serde(rename = "zu")]
    Zu,
}

impl Separator {
    /// The textual token this separator appears as in input and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Hyphen => "-",
            Separator::Von => "von",
            Separator::Zu => "zu",
        }
    }

    /// Exact-match lookup from a stored token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "" => Some(Separator::None),
            "-" => Some(Separator::Hyphen),
            "von" => Some(Separator::Von),
            "zu" => Some(Separator::Zu),
            _ => None,
        }
    }
}

impl core::fmt::Display for Separator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated name segment.
///
/// Immutable after construction. Equality and hash are computed from the
/// ordered triple `(first_part, separator, last_part)` through the
/// value-object contract in `nomen-core`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Name {
    first_part: String,
    separator: Separator,
    last_part: String,
}

impl Name {
    /// Parse and validate a raw name string.
    ///
    /// The three accepted forms are tried in priority order: hyphenated
    /// double name, space-separated title of nobility, plain single name.
    /// Any other shape fails with [`NameFormatError`].
    pub fn parse(raw: &str) -> Result<Self, NameFormatError> {
        let trimmed = raw.trim();

        if trimmed.contains('-') {
            let parts: Vec<&str> = trimmed.split('-').collect();
            if parts.len() != 2 || !parts.iter().all(|p| is_letters(p)) {
                return Err(NameFormatError::new(
                    "hyphenated name must have exactly two letter-only parts",
                ));
            }
            Ok(Self::from_validated_parts(
                parts[0],
                Separator::Hyphen,
                parts[1],
            ))
        } else if trimmed.contains(' ') {
            let parts: Vec<&str> = trimmed.split(' ').collect();
            if parts.len() != 3 {
                return Err(NameFormatError::new(
                    "a name with a title must have exactly three parts",
                ));
            }
            let separator = match parts[1] {
                "von" => Separator::Von,
                "zu" => Separator::Zu,
                _ => return Err(NameFormatError::new("separator must be 'von' or 'zu'")),
            };
            if !is_letters(parts[0]) || !is_letters(parts[2]) {
                return Err(NameFormatError::new("name parts must be letters only"));
            }
            Ok(Self::from_validated_parts(parts[0], separator, parts[2]))
        } else {
            if !is_letters(trimmed) {
                return Err(NameFormatError::new("single name must be letters only"));
            }
            Ok(Self::from_validated_parts(trimmed, Separator::None, ""))
        }
    }

    /// Trusted reconstruction from already-validated parts.
    ///
    /// Runs no validation. Reserved for rebuilding value objects from storage
    /// that only ever holds parts a successful [`parse`](Self::parse) produced;
    /// re-validating there could reject data that was valid when written.
    pub fn from_validated_parts(
        first_part: impl Into<String>,
        separator: Separator,
        last_part: impl Into<String>,
    ) -> Self {
        Self {
            first_part: first_part.into(),
            separator,
            last_part: last_part.into(),
        }
    }

    /// The first (or only) part of the name.
    pub fn first_part(&self) -> &str {
        &self.first_part
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The second part; empty for single names.
    pub fn last_part(&self) -> &str {
        &self.last_part
    }
}

/// Reconstructs the original textual form.
impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.separator {
            Separator::None => f.write_str(&self.first_part),
            Separator::Hyphen => write!(f, "{}-{}", self.first_part, self.last_part),
            Separator::Von | Separator::Zu => write!(
                f,
                "{} {} {}",
                self.first_part, self.separator, self.last_part
            ),
        }
    }
}

impl ValueObject for Name {
    fn atomic_values(&self) -> Vec<AtomicValue> {
        vec![
            AtomicValue::text(self.first_part.clone()),
            AtomicValue::text(self.separator.as_str()),
            AtomicValue::text(self.last_part.clone()),
        ]
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        value_equals(self, other)
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(value_hash(self));
    }
}

fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}
