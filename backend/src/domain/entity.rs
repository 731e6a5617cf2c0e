//! Shared entity scaffolding: identifiers, timestamps and validation helpers.
//!
//! Every aggregate (user, amenity, place, review) carries a random UUID
//! identifier and a pair of timestamps. The identifier never changes after
//! construction; `updated_at` moves forward on each committed mutation.

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};

/// Behaviour shared by every stored aggregate.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type keying the entity in its repository.
    type Id: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static;

    /// Stable identifier assigned at construction.
    fn id(&self) -> &Self::Id;
}

/// Validation failure that can name the offending request field.
pub trait FieldValidationError: std::error::Error {
    /// Snake-case field name the failure relates to.
    fn field(&self) -> &'static str;
}

/// Creation and modification instants carried by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Stamp a freshly constructed entity; both instants start equal.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Instant the entity was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Instant of the last committed mutation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Outcome of checking a required, length-bounded text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextCheck {
    Ok,
    Blank,
    TooLong,
}

/// Check that `value` is non-blank and at most `max` characters long.
///
/// Length is measured in Unicode scalar values so multi-byte names are not
/// penalised.
pub(crate) fn check_text(value: &str, max: Option<usize>) -> TextCheck {
    if value.trim().is_empty() {
        return TextCheck::Blank;
    }
    match max {
        Some(max) if value.chars().count() > max => TextCheck::TooLong,
        _ => TextCheck::Ok,
    }
}

/// Declare a UUID-backed identifier newtype for an entity.
macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Parse an identifier from its hyphenated UUID form.
            pub fn parse(raw: &str) -> Result<Self, ::uuid::Error> {
                ::uuid::Uuid::parse_str(raw).map(Self)
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(value: ::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

pub(crate) use define_entity_id;
