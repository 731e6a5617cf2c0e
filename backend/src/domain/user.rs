//! User aggregate.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::entity::{Entity, FieldValidationError, TextCheck, Timestamps, check_text, define_entity_id};

/// Maximum length, in characters, of a first or last name.
pub const NAME_MAX: usize = 50;

define_entity_id! {
    /// Stable user identifier.
    UserId
}

/// Validation errors raised while constructing or updating a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("First name is required")]
    EmptyFirstName,
    #[error("First name must not exceed {max} characters")]
    FirstNameTooLong { max: usize },
    #[error("Last name is required")]
    EmptyLastName,
    #[error("Last name must not exceed {max} characters")]
    LastNameTooLong { max: usize },
    #[error("Email is required")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmail,
}

impl FieldValidationError for UserValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyFirstName | Self::FirstNameTooLong { .. } => "first_name",
            Self::EmptyLastName | Self::LastNameTooLong { .. } => "last_name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
        }
    }
}

/// Input required to register a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Fields a caller may change on an existing user. `None` leaves the field
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

/// Registered user. Owns places and authors reviews.
///
/// ## Invariants
/// - first and last names are non-blank and at most [`NAME_MAX`] characters.
/// - `email` contains `@` followed by a domain part containing `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
    timestamps: Timestamps,
}

impl User {
    /// Build and validate a new user stamped with `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use hbnb_backend::domain::{NewUser, User};
    ///
    /// let user = User::try_new(
    ///     NewUser {
    ///         first_name: "Ada".into(),
    ///         last_name: "Lovelace".into(),
    ///         email: "ada@example.com".into(),
    ///         is_admin: false,
    ///     },
    ///     Utc::now(),
    /// )
    /// .expect("valid user");
    /// assert_eq!(user.first_name(), "Ada");
    /// ```
    pub fn try_new(input: NewUser, now: DateTime<Utc>) -> Result<Self, UserValidationError> {
        let NewUser {
            first_name,
            last_name,
            email,
            is_admin,
        } = input;
        let user = Self {
            id: UserId::random(),
            first_name,
            last_name,
            email,
            is_admin,
            timestamps: Timestamps::new(now),
        };
        user.validate()?;
        Ok(user)
    }

    /// Check every field against the user invariants.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        match check_text(&self.first_name, Some(NAME_MAX)) {
            TextCheck::Blank => return Err(UserValidationError::EmptyFirstName),
            TextCheck::TooLong => {
                return Err(UserValidationError::FirstNameTooLong { max: NAME_MAX });
            }
            TextCheck::Ok => {}
        }
        match check_text(&self.last_name, Some(NAME_MAX)) {
            TextCheck::Blank => return Err(UserValidationError::EmptyLastName),
            TextCheck::TooLong => {
                return Err(UserValidationError::LastNameTooLong { max: NAME_MAX });
            }
            TextCheck::Ok => {}
        }
        if check_text(&self.email, None) == TextCheck::Blank {
            return Err(UserValidationError::EmptyEmail);
        }
        if !is_plausible_email(&self.email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Apply `update` to a staged copy and validate it.
    ///
    /// The receiver is left untouched; the caller commits the returned copy.
    pub fn with_update(
        &self,
        update: &UserUpdate,
        now: DateTime<Utc>,
    ) -> Result<Self, UserValidationError> {
        if *update == UserUpdate::default() {
            return Ok(self.clone());
        }
        let mut staged = self.clone();
        if let Some(first_name) = &update.first_name {
            staged.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &update.last_name {
            staged.last_name.clone_from(last_name);
        }
        if let Some(email) = &update.email {
            staged.email.clone_from(email);
        }
        if let Some(is_admin) = update.is_admin {
            staged.is_admin = is_admin;
        }
        staged.validate()?;
        staged.timestamps.touch(now);
        Ok(staged)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// `@` must be present and the part after the last `@` must contain a dot.
fn is_plausible_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}
