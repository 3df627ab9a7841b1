use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_password";

/// Password management. Hashing and policy checks happen inside the runtime.
pub struct UserPasswordService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserPasswordService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn has_password(&self, user: &User) -> Result<bool, IdentityServiceError> {
        delegate(SERVICE, "has_password", self.broker.has_password(user)).await
    }

    pub async fn add_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("password", password)?;
        delegate(
            SERVICE,
            "add_password",
            self.broker.add_password(user, password),
        )
        .await
    }

    pub async fn remove_password(
        &self,
        user: &User,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "remove_password",
            self.broker.remove_password(user),
        )
        .await
    }

    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("current_password", current_password)?;
        require("new_password", new_password)?;
        delegate(
            SERVICE,
            "change_password",
            self.broker
                .change_password(user, current_password, new_password),
        )
        .await
    }

    pub async fn check_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<bool, IdentityServiceError> {
        require("password", password)?;
        delegate(
            SERVICE,
            "check_password",
            self.broker.check_password(user, password),
        )
        .await
    }

    pub async fn generate_password_reset_token(
        &self,
        user: &User,
    ) -> Result<String, IdentityServiceError> {
        delegate(
            SERVICE,
            "generate_password_reset_token",
            self.broker.generate_password_reset_token(user),
        )
        .await
    }

    pub async fn reset_password(
        &self,
        user: &User,
        token: &str,
        new_password: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("token", token)?;
        require("new_password", new_password)?;
        delegate(
            SERVICE,
            "reset_password",
            self.broker.reset_password(user, token, new_password),
        )
        .await
    }
}
