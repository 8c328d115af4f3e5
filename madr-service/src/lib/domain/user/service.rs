use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::guard::authorize_mutation;
use crate::domain::auth::models::Principal;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::ListUsersQuery;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        self.password_hasher
            .hash(password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Store constraints still catch a concurrent duplicate slipping past this check.
        if let Some(existing) = self
            .repository
            .find_by_username_or_email(&command.username, &command.email)
            .await?
        {
            if existing.username == command.username {
                return Err(UserError::UsernameAlreadyExists(
                    command.username.as_str().to_string(),
                ));
            }
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.hash_password(&command.password)?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(*id))
    }

    async fn list_users(&self, query: ListUsersQuery) -> Result<Vec<User>, UserError> {
        self.repository.list(query.skip, query.limit).await
    }

    async fn update_user(
        &self,
        principal: &Principal,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        authorize_mutation(principal, *id)?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(*id))?;

        user.username = command.username;
        user.email = command.email;
        user.password_hash = self.hash_password(&command.password)?;

        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, principal: &Principal, id: &UserId) -> Result<(), UserError> {
        authorize_mutation(principal, *id)?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
