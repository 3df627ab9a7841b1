use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_auth_tokens";

/// Tokens stored against a user per login provider (e.g. an upstream refresh token),
/// plus the authenticator app key.
pub struct UserAuthTokensService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserAuthTokensService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<Option<String>, IdentityServiceError> {
        require("login_provider", login_provider)?;
        require("token_name", token_name)?;
        delegate(
            SERVICE,
            "get_authentication_token",
            self.broker
                .get_authentication_token(user, login_provider, token_name),
        )
        .await
    }

    pub async fn set_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
        token_value: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("login_provider", login_provider)?;
        require("token_name", token_name)?;
        require("token_value", token_value)?;
        delegate(
            SERVICE,
            "set_authentication_token",
            self.broker
                .set_authentication_token(user, login_provider, token_name, token_value),
        )
        .await
    }

    pub async fn remove_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("login_provider", login_provider)?;
        require("token_name", token_name)?;
        delegate(
            SERVICE,
            "remove_authentication_token",
            self.broker
                .remove_authentication_token(user, login_provider, token_name),
        )
        .await
    }

    pub async fn get_authenticator_key(
        &self,
        user: &User,
    ) -> Result<Option<String>, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_authenticator_key",
            self.broker.get_authenticator_key(user),
        )
        .await
    }

    pub async fn reset_authenticator_key(
        &self,
        user: &User,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "reset_authenticator_key",
            self.broker.reset_authenticator_key(user),
        )
        .await
    }
}
