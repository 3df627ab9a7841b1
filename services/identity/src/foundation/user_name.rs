use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_name";

pub struct UserNameService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserNameService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_user_name(&self, user: &User) -> Result<Option<String>, IdentityServiceError> {
        delegate(SERVICE, "get_user_name", self.broker.get_user_name(user)).await
    }

    pub async fn set_user_name(
        &self,
        user: &User,
        user_name: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("user_name", user_name)?;
        delegate(
            SERVICE,
            "set_user_name",
            self.broker.set_user_name(user, user_name),
        )
        .await
    }

    pub async fn get_user_id(&self, user: &User) -> Result<String, IdentityServiceError> {
        delegate(SERVICE, "get_user_id", self.broker.get_user_id(user)).await
    }

    /// Normalize a user or role name with the runtime's lookup normalizer.
    pub async fn normalize_name(&self, name: &str) -> Result<String, IdentityServiceError> {
        require("name", name)?;
        delegate(SERVICE, "normalize_name", self.broker.normalize_name(name)).await
    }

    pub async fn update_normalized_user_name(
        &self,
        user: &User,
    ) -> Result<(), IdentityServiceError> {
        delegate(
            SERVICE,
            "update_normalized_user_name",
            self.broker.update_normalized_user_name(user),
        )
        .await
    }
}
