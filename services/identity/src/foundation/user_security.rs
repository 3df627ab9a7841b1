use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::delegate;

const SERVICE: &str = "user_security";

/// Security stamp and two-factor switches.
pub struct UserSecurityService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserSecurityService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_security_stamp(&self, user: &User) -> Result<String, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_security_stamp",
            self.broker.get_security_stamp(user),
        )
        .await
    }

    /// Rotate the stamp, invalidating outstanding cookies and tokens.
    pub async fn update_security_stamp(
        &self,
        user: &User,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "update_security_stamp",
            self.broker.update_security_stamp(user),
        )
        .await
    }

    pub async fn get_two_factor_enabled(&self, user: &User) -> Result<bool, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_two_factor_enabled",
            self.broker.get_two_factor_enabled(user),
        )
        .await
    }

    pub async fn set_two_factor_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "set_two_factor_enabled",
            self.broker.set_two_factor_enabled(user, enabled),
        )
        .await
    }

    pub async fn get_valid_two_factor_providers(
        &self,
        user: &User,
    ) -> Result<Vec<String>, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_valid_two_factor_providers",
            self.broker.get_valid_two_factor_providers(user),
        )
        .await
    }
}
