//! User operations.

use serde_json::json;
use tracing::info;

use super::{HbnbFacade, commit_staged, map_repository_error, validation_error};
use crate::domain::entity::Entity;
use crate::domain::{Error, NewUser, User, UserId, UserUpdate};

impl HbnbFacade {
    /// Register a user. Emails are unique across users.
    pub fn create_user(&self, input: NewUser) -> Result<User, Error> {
        let user = User::try_new(input, self.now()).map_err(|err| validation_error(&err))?;
        self.ensure_email_available(user.email(), None)?;
        self.users
            .add(user.clone())
            .map_err(map_repository_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    pub fn get_user(&self, id: &UserId) -> Option<User> {
        self.users.get(id)
    }

    /// Look a user up by exact email address.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.get_by_attribute(&|user: &User| user.email() == email)
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.users.get_all()
    }

    /// Apply `update` to the user with `id`.
    ///
    /// Returns `Ok(None)` when no such user exists.
    pub fn update_user(&self, id: &UserId, update: &UserUpdate) -> Result<Option<User>, Error> {
        if self.users.get(id).is_none() {
            return Ok(None);
        }
        if let Some(email) = &update.email {
            self.ensure_email_available(email, Some(id))?;
        }
        let now = self.now();
        let updated = commit_staged(self.users.as_ref(), id, |user| user.with_update(update, now))
            .map_err(|err| validation_error(&err))?;
        if let Some(user) = &updated {
            info!(user_id = %user.id(), "user updated");
        }
        Ok(updated)
    }

    fn ensure_email_available(&self, email: &str, owner: Option<&UserId>) -> Result<(), Error> {
        match self.get_user_by_email(email) {
            Some(existing) if Some(existing.id()) != owner => {
                Err(Error::invalid_request("Email already registered").with_details(json!({
                    "field": "email",
                    "code": "duplicate_email",
                })))
            }
            _ => Ok(()),
        }
    }
}
