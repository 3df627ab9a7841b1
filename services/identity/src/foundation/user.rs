use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user";

/// User record lifecycle: create, look up, update and delete.
pub struct UserService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn create_user(&self, user: &User) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "create_user", self.broker.create_user(user)).await
    }

    /// Create a user and set its initial password in one runtime call.
    pub async fn create_user_with_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("password", password)?;
        delegate(
            SERVICE,
            "create_user_with_password",
            self.broker.create_user_with_password(user, password),
        )
        .await
    }

    pub async fn update_user(&self, user: &User) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "update_user", self.broker.update_user(user)).await
    }

    pub async fn delete_user(&self, user: &User) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "delete_user", self.broker.delete_user(user)).await
    }

    pub async fn find_user_by_id(
        &self,
        user_id: &str,
    ) -> Result<Option<User>, IdentityServiceError> {
        require("user_id", user_id)?;
        delegate(
            SERVICE,
            "find_user_by_id",
            self.broker.find_user_by_id(user_id),
        )
        .await
    }

    pub async fn find_user_by_name(
        &self,
        user_name: &str,
    ) -> Result<Option<User>, IdentityServiceError> {
        require("user_name", user_name)?;
        delegate(
            SERVICE,
            "find_user_by_name",
            self.broker.find_user_by_name(user_name),
        )
        .await
    }

    pub async fn select_all_users(&self) -> Result<Vec<User>, IdentityServiceError> {
        delegate(SERVICE, "select_all_users", self.broker.select_all_users()).await
    }
}
