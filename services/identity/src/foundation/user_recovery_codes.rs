use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_recovery_codes";

/// One-time two-factor recovery codes.
pub struct UserRecoveryCodesService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserRecoveryCodesService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    /// Replace the user's recovery codes with `number` fresh ones and return them.
    pub async fn generate_new_two_factor_recovery_codes(
        &self,
        user: &User,
        number: u32,
    ) -> Result<Vec<String>, IdentityServiceError> {
        delegate(
            SERVICE,
            "generate_new_two_factor_recovery_codes",
            self.broker
                .generate_new_two_factor_recovery_codes(user, number),
        )
        .await
    }

    pub async fn redeem_two_factor_recovery_code(
        &self,
        user: &User,
        code: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("code", code)?;
        delegate(
            SERVICE,
            "redeem_two_factor_recovery_code",
            self.broker.redeem_two_factor_recovery_code(user, code),
        )
        .await
    }

    pub async fn count_recovery_codes(&self, user: &User) -> Result<u32, IdentityServiceError> {
        delegate(
            SERVICE,
            "count_recovery_codes",
            self.broker.count_recovery_codes(user),
        )
        .await
    }
}
