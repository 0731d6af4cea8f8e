use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Change applied to a stored record while the store is locked.
pub type UserPatch = Box<dyn FnOnce(&mut User) + Send>;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the supplied password.
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve the user registered under an email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Retrieve every user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Apply a partial update.
    ///
    /// The password is rehashed only when the command carries one.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Password` - Hashing failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Storage operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a record, assigning it a previously unused id.
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve the first user with this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Apply `patch` to the stored record in one critical section and return the result.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn update_with(&self, id: &UserId, patch: UserPatch) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
