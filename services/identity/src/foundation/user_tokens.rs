use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_tokens";

/// Purpose-bound and two-factor tokens from the runtime's registered token providers.
pub struct UserTokensService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserTokensService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn generate_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
    ) -> Result<String, IdentityServiceError> {
        require("token_provider", token_provider)?;
        require("purpose", purpose)?;
        delegate(
            SERVICE,
            "generate_user_token",
            self.broker
                .generate_user_token(user, token_provider, purpose),
        )
        .await
    }

    pub async fn verify_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
        token: &str,
    ) -> Result<bool, IdentityServiceError> {
        require("token_provider", token_provider)?;
        require("purpose", purpose)?;
        require("token", token)?;
        delegate(
            SERVICE,
            "verify_user_token",
            self.broker
                .verify_user_token(user, token_provider, purpose, token),
        )
        .await
    }

    pub async fn generate_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
    ) -> Result<String, IdentityServiceError> {
        require("token_provider", token_provider)?;
        delegate(
            SERVICE,
            "generate_two_factor_token",
            self.broker.generate_two_factor_token(user, token_provider),
        )
        .await
    }

    pub async fn verify_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
        token: &str,
    ) -> Result<bool, IdentityServiceError> {
        require("token_provider", token_provider)?;
        require("token", token)?;
        delegate(
            SERVICE,
            "verify_two_factor_token",
            self.broker
                .verify_two_factor_token(user, token_provider, token),
        )
        .await
    }

    pub async fn generate_concurrency_stamp(
        &self,
        user: &User,
    ) -> Result<String, IdentityServiceError> {
        delegate(
            SERVICE,
            "generate_concurrency_stamp",
            self.broker.generate_concurrency_stamp(user),
        )
        .await
    }
}
