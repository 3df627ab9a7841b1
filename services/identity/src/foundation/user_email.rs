use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_email";

/// Email address, confirmation and change-of-address flows.
pub struct UserEmailService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserEmailService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_email(&self, user: &User) -> Result<Option<String>, IdentityServiceError> {
        delegate(SERVICE, "get_email", self.broker.get_email(user)).await
    }

    pub async fn set_email(
        &self,
        user: &User,
        email: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("email", email)?;
        delegate(SERVICE, "set_email", self.broker.set_email(user, email)).await
    }

    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<User>, IdentityServiceError> {
        require("email", email)?;
        delegate(
            SERVICE,
            "find_user_by_email",
            self.broker.find_user_by_email(email),
        )
        .await
    }

    pub async fn is_email_confirmed(&self, user: &User) -> Result<bool, IdentityServiceError> {
        delegate(
            SERVICE,
            "is_email_confirmed",
            self.broker.is_email_confirmed(user),
        )
        .await
    }

    pub async fn generate_email_confirmation_token(
        &self,
        user: &User,
    ) -> Result<String, IdentityServiceError> {
        delegate(
            SERVICE,
            "generate_email_confirmation_token",
            self.broker.generate_email_confirmation_token(user),
        )
        .await
    }

    pub async fn confirm_email(
        &self,
        user: &User,
        token: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("token", token)?;
        delegate(
            SERVICE,
            "confirm_email",
            self.broker.confirm_email(user, token),
        )
        .await
    }

    pub async fn generate_change_email_token(
        &self,
        user: &User,
        new_email: &str,
    ) -> Result<String, IdentityServiceError> {
        require("new_email", new_email)?;
        delegate(
            SERVICE,
            "generate_change_email_token",
            self.broker.generate_change_email_token(user, new_email),
        )
        .await
    }

    /// Switch to `new_email` using a token from
    /// [`generate_change_email_token`](Self::generate_change_email_token).
    pub async fn change_email(
        &self,
        user: &User,
        new_email: &str,
        token: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("new_email", new_email)?;
        require("token", token)?;
        delegate(
            SERVICE,
            "change_email",
            self.broker.change_email(user, new_email, token),
        )
        .await
    }
}
