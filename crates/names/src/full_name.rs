//! A person's full name, composed of two [`Name`] value objects.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use nomen_core::{AtomicValue, ValueObject, value_equals, value_hash};

use crate::error::NameFormatError;
use crate::name::Name;

/// First and last name of a person.
///
/// Parsed from `first_last` input where the two halves are joined by `_` and
/// each half is a valid [`Name`]. Equality and hash are computed from the
/// ordered pair `(first_name, last_name)`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct FullName {
    first_name: Name,
    last_name: Name,
}

impl FullName {
    /// Parse and validate a raw full-name string.
    ///
    /// The input must contain exactly one `_` joining two name segments;
    /// each segment is parsed with [`Name::parse`]. A failing segment parse
    /// is carried as the cause of the returned error.
    pub fn parse(raw: &str) -> Result<Self, NameFormatError> {
        if !raw.contains('_') {
            return Err(NameFormatError::new(
                "full name must join first and last name with '_'",
            ));
        }

        let segments: Vec<&str> = raw.split('_').collect();
        if segments.len() != 2 {
            return Err(NameFormatError::new(
                "full name must have exactly two '_'-separated segments",
            ));
        }

        let first_name = Name::parse(segments[0])
            .map_err(|e| NameFormatError::caused_by("first name segment is not a valid name", e))?;
        let last_name = Name::parse(segments[1])
            .map_err(|e| NameFormatError::caused_by("last name segment is not a valid name", e))?;

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// Trusted composition of two already-validated names.
    pub fn from_validated_parts(first_name: Name, last_name: Name) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    pub fn first_name(&self) -> &Name {
        &self.first_name
    }

    pub fn last_name(&self) -> &Name {
        &self.last_name
    }
}

/// Renders as `first last` with a single space, regardless of input form.
impl core::fmt::Display for FullName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl ValueObject for FullName {
    fn atomic_values(&self) -> Vec<AtomicValue> {
        vec![
            AtomicValue::Composite(self.first_name.atomic_values()),
            AtomicValue::Composite(self.last_name.atomic_values()),
        ]
    }
}

impl PartialEq for FullName {
    fn eq(&self, other: &Self) -> bool {
        value_equals(self, other)
    }
}

impl Hash for FullName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(value_hash(self));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Separator;

    #[test]
    fn simple_full_name_parses() {
        let full = FullName::parse("Max_Mustermann").unwrap();
        assert_eq!(full.first_name(), &Name::parse("Max").unwrap());
        assert_eq!(full.last_name(), &Name::parse("Mustermann").unwrap());
        assert_eq!(full.first_name().separator(), Separator::None);
        assert_eq!(full.to_string(), "Max Mustermann");
    }

    #[test]
    fn compound_segments_are_supported() {
        let full = FullName::parse("Lisa-Marie_Graf zu Falkenstein").unwrap();
        assert_eq!(full.first_name().to_string(), "Lisa-Marie");
        assert_eq!(full.last_name().to_string(), "Graf zu Falkenstein");
        assert_eq!(full.to_string(), "Lisa-Marie Graf zu Falkenstein");
    }

    #[test]
    fn missing_underscore_is_rejected() {
        let err = FullName::parse("MaxMustermann").unwrap_err();
        assert_eq!(
            err.reason(),
            "full name must join first and last name with '_'"
        );
        assert!(err.cause().is_none());
    }

    #[test]
    fn three_underscore_segments_are_rejected() {
        assert!(FullName::parse("Max_Peter_Mustermann").is_err());
    }

    #[test]
    fn invalid_segment_failure_carries_the_cause() {
        let err = FullName::parse("M4x_Mustermann").unwrap_err();
        assert_eq!(err.reason(), "first name segment is not a valid name");
        let cause = err.cause().expect("segment failure should be attached");
        assert_eq!(cause.reason(), "single name must be letters only");
    }

    #[test]
    fn equality_is_by_value_over_both_names() {
        let a = FullName::parse("Max_Mustermann").unwrap();
        let b = FullName::parse("Max_Mustermann").unwrap();
        let c = FullName::parse("Max_Meier").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn name_and_full_name_are_never_value_equal() {
        let name = Name::parse("Max").unwrap();
        let full = FullName::parse("Max_Mustermann").unwrap();
        assert!(!nomen_core::value_equals(&name, &full));
        assert!(!nomen_core::value_equals(&full, &name));
    }

    #[test]
    fn trusted_composition_skips_validation() {
        let full = FullName::from_validated_parts(
            Name::from_validated_parts("Max", Separator::None, ""),
            Name::from_validated_parts("Mustermann", Separator::None, ""),
        );
        assert_eq!(full, FullName::parse("Max_Mustermann").unwrap());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: two valid name segments joined by '_' render as
            /// `first last`.
            #[test]
            fn full_name_renders_with_space(f in "[A-Za-z]{1,12}", l in "[A-Za-z]{1,12}") {
                let full = FullName::parse(&format!("{f}_{l}")).unwrap();
                prop_assert_eq!(full.to_string(), format!("{f} {l}"));
            }

            /// Property: reparsing through the underscore form is idempotent.
            #[test]
            fn reparse_is_idempotent(f in "[A-Za-z]{1,12}", l in "[A-Za-z]{1,12}") {
                let full = FullName::parse(&format!("{f}_{l}")).unwrap();
                let reparsed = FullName::parse(&format!(
                    "{}_{}",
                    full.first_name(),
                    full.last_name()
                )).unwrap();
                prop_assert_eq!(full, reparsed);
            }
        }
    }
}
