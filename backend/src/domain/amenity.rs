//! Amenity aggregate: a facility or service a place can offer.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::entity::{Entity, FieldValidationError, TextCheck, Timestamps, check_text, define_entity_id};

/// Maximum length, in characters, of an amenity name.
pub const AMENITY_NAME_MAX: usize = 50;

define_entity_id! {
    /// Stable amenity identifier.
    AmenityId
}

/// Validation errors raised while constructing or updating an [`Amenity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmenityValidationError {
    #[error("Amenity name is required")]
    EmptyName,
    #[error("Amenity name must not exceed {max} characters")]
    NameTooLong { max: usize },
}

impl FieldValidationError for AmenityValidationError {
    fn field(&self) -> &'static str {
        "name"
    }
}

/// Input required to create an amenity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAmenity {
    pub name: String,
}

/// Fields a caller may change on an existing amenity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenityUpdate {
    pub name: Option<String>,
}

/// Named facility that places link to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    id: AmenityId,
    name: String,
    timestamps: Timestamps,
}

impl Amenity {
    /// Build and validate a new amenity stamped with `now`.
    pub fn try_new(input: NewAmenity, now: DateTime<Utc>) -> Result<Self, AmenityValidationError> {
        let amenity = Self {
            id: AmenityId::random(),
            name: input.name,
            timestamps: Timestamps::new(now),
        };
        amenity.validate()?;
        Ok(amenity)
    }

    /// Check the name against the amenity invariants.
    pub fn validate(&self) -> Result<(), AmenityValidationError> {
        match check_text(&self.name, Some(AMENITY_NAME_MAX)) {
            TextCheck::Ok => Ok(()),
            TextCheck::Blank => Err(AmenityValidationError::EmptyName),
            TextCheck::TooLong => Err(AmenityValidationError::NameTooLong {
                max: AMENITY_NAME_MAX,
            }),
        }
    }

    /// Apply `update` to a staged copy and validate it.
    ///
    /// An update with no fields set returns an identical copy, timestamps
    /// included.
    pub fn with_update(
        &self,
        update: &AmenityUpdate,
        now: DateTime<Utc>,
    ) -> Result<Self, AmenityValidationError> {
        if *update == AmenityUpdate::default() {
            return Ok(self.clone());
        }
        let mut staged = self.clone();
        if let Some(name) = &update.name {
            staged.name.clone_from(name);
        }
        staged.validate()?;
        staged.timestamps.touch(now);
        Ok(staged)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at()
    }
}

impl Entity for Amenity {
    type Id = AmenityId;

    fn id(&self) -> &AmenityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Wi-Fi")]
    #[case("  Pool  ")]
    #[case("Climatisation réversible")]
    fn valid_names_are_accepted(#[case] name: &str) {
        let amenity = Amenity::try_new(
            NewAmenity {
                name: name.to_owned(),
            },
            Utc::now(),
        )
        .expect("valid amenity");
        assert_eq!(amenity.name(), name);
    }

    #[rstest]
    #[case("", AmenityValidationError::EmptyName)]
    #[case("\t", AmenityValidationError::EmptyName)]
    #[case(
        "a name that is certainly longer than fifty characters",
        AmenityValidationError::NameTooLong { max: AMENITY_NAME_MAX }
    )]
    fn invalid_names_are_rejected(#[case] name: &str, #[case] expected: AmenityValidationError) {
        let err = Amenity::try_new(
            NewAmenity {
                name: name.to_owned(),
            },
            Utc::now(),
        )
        .expect_err("invalid amenity");
        assert_eq!(err, expected);
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn empty_update_changes_nothing() {
        let created = Utc::now();
        let amenity = Amenity::try_new(
            NewAmenity {
                name: "Sauna".to_owned(),
            },
            created,
        )
        .expect("valid amenity");
        let later = created + chrono::Duration::seconds(30);

        let updated = amenity
            .with_update(&AmenityUpdate::default(), later)
            .expect("no-op update");

        assert_eq!(updated, amenity);
        assert_eq!(updated.updated_at(), created);
    }
}
