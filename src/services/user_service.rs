//! User service
//!
//! Enforces email uniqueness on create. Every other operation is a direct
//! pass-through to the repository.

use std::sync::Arc;

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create a user unless another user already has the same email.
    ///
    /// The lookup and the insert are separate storage calls, so two
    /// concurrent creates with one email can both succeed.
    pub async fn create_user(&self, user: User) -> ServiceResult<User> {
        let existing = self.repo.get_by_email(&user.email).await?;
        if !existing.is_absent() {
            tracing::warn!("Rejected duplicate email: {}", user.email);
            return Err(ServiceError::conflict("user already exists"));
        }

        let created = self.repo.create(&user).await?;
        tracing::info!("Created user {}", created.id);
        Ok(created)
    }

    pub async fn get_user_by_id(&self, id: i64) -> ServiceResult<User> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn get_all_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn delete_user(&self, id: i64) -> ServiceResult<()> {
        Ok(self.repo.delete(id).await?)
    }
}
