use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_phone";

pub struct UserPhoneService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserPhoneService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_phone_number(
        &self,
        user: &User,
    ) -> Result<Option<String>, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_phone_number",
            self.broker.get_phone_number(user),
        )
        .await
    }

    pub async fn set_phone_number(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("phone_number", phone_number)?;
        delegate(
            SERVICE,
            "set_phone_number",
            self.broker.set_phone_number(user, phone_number),
        )
        .await
    }

    pub async fn is_phone_number_confirmed(
        &self,
        user: &User,
    ) -> Result<bool, IdentityServiceError> {
        delegate(
            SERVICE,
            "is_phone_number_confirmed",
            self.broker.is_phone_number_confirmed(user),
        )
        .await
    }

    pub async fn generate_change_phone_number_token(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<String, IdentityServiceError> {
        require("phone_number", phone_number)?;
        delegate(
            SERVICE,
            "generate_change_phone_number_token",
            self.broker
                .generate_change_phone_number_token(user, phone_number),
        )
        .await
    }

    pub async fn change_phone_number(
        &self,
        user: &User,
        phone_number: &str,
        token: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("phone_number", phone_number)?;
        require("token", token)?;
        delegate(
            SERVICE,
            "change_phone_number",
            self.broker.change_phone_number(user, phone_number, token),
        )
        .await
    }

    /// Check a change-of-number token without applying it.
    pub async fn verify_change_phone_number_token(
        &self,
        user: &User,
        token: &str,
        phone_number: &str,
    ) -> Result<bool, IdentityServiceError> {
        require("token", token)?;
        require("phone_number", phone_number)?;
        delegate(
            SERVICE,
            "verify_change_phone_number_token",
            self.broker
                .verify_change_phone_number_token(user, token, phone_number),
        )
        .await
    }
}
