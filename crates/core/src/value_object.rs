//! Value object contract: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their component values. Two value objects with the same values are
//! considered equal, and their hash is derived from those values alone.
//!
//! The contract works over an ordered sequence of [`AtomicValue`]s that each
//! value object exposes. Equality and hashing are implemented once, here, and
//! concrete types delegate their `PartialEq`/`Hash` impls to it.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One component of a value object, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomicValue {
    /// An atomic string component.
    Text(String),
    /// A nested value object, flattened to its own atomic sequence.
    Composite(Vec<AtomicValue>),
    /// A missing component. Hashes to 0 and is equal only to `Absent`.
    Absent,
}

impl AtomicValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Trait for value objects.
///
/// Value objects are **immutable**: once created, they don't change. To "modify"
/// one, construct a new instance. Implementors expose their components in a
/// fixed order through [`atomic_values`](ValueObject::atomic_values); the order
/// is part of the type's equality contract.
///
/// The `Any` supertrait lets [`value_equals`] reject comparisons across
/// different concrete types without the callers caring which types those are.
pub trait ValueObject: Any + core::fmt::Debug {
    /// The ordered component values of this value object.
    fn atomic_values(&self) -> Vec<AtomicValue>;
}

/// Structural equality over atomic-value sequences.
///
/// Returns false when the two instances are not the same concrete type.
/// Otherwise compares the ordered sequences pairwise: false on any mismatch
/// (including one side absent while the other is not), true only when the
/// sequences are equal in length and content. Never panics.
pub fn value_equals(a: &dyn ValueObject, b: &dyn ValueObject) -> bool {
    if a.type_id() != b.type_id() {
        return false;
    }

    let left = a.atomic_values();
    let right = b.atomic_values();
    if left.len() != right.len() {
        return false;
    }

    left.iter().zip(right.iter()).all(|(l, r)| l == r)
}

/// Combined hash of a value object's atomic sequence.
///
/// Each component's hash is folded in with XOR; an absent component
/// contributes 0, as does the empty sequence.
pub fn value_hash(v: &dyn ValueObject) -> u64 {
    v.atomic_values()
        .iter()
        .map(atom_hash)
        .fold(0, |acc, h| acc ^ h)
}

fn atom_hash(atom: &AtomicValue) -> u64 {
    match atom {
        AtomicValue::Absent => 0,
        AtomicValue::Text(s) => {
            let mut hasher = DefaultHasher::new();
            s.hash(&mut hasher);
            hasher.finish()
        }
        AtomicValue::Composite(parts) => parts.iter().map(atom_hash).fold(0, |acc, h| acc ^ h),
    }
}
