use chrono::{DateTime, Utc};

use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::delegate;

const SERVICE: &str = "user_lockout";

/// Account lockout state and failed-attempt counting.
///
/// Lockout thresholds and durations are runtime policy; this service only forwards.
pub struct UserLockoutService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserLockoutService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn is_locked_out(&self, user: &User) -> Result<bool, IdentityServiceError> {
        delegate(SERVICE, "is_locked_out", self.broker.is_locked_out(user)).await
    }

    pub async fn get_lockout_enabled(&self, user: &User) -> Result<bool, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_lockout_enabled",
            self.broker.get_lockout_enabled(user),
        )
        .await
    }

    pub async fn set_lockout_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "set_lockout_enabled",
            self.broker.set_lockout_enabled(user, enabled),
        )
        .await
    }

    pub async fn get_lockout_end_date(
        &self,
        user: &User,
    ) -> Result<Option<DateTime<Utc>>, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_lockout_end_date",
            self.broker.get_lockout_end_date(user),
        )
        .await
    }

    /// `None` clears the lockout.
    pub async fn set_lockout_end_date(
        &self,
        user: &User,
        lockout_end: Option<DateTime<Utc>>,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "set_lockout_end_date",
            self.broker.set_lockout_end_date(user, lockout_end),
        )
        .await
    }

    /// Record a failed sign-in attempt.
    pub async fn access_failed(&self, user: &User) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "access_failed", self.broker.access_failed(user)).await
    }

    pub async fn get_access_failed_count(&self, user: &User) -> Result<i32, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_access_failed_count",
            self.broker.get_access_failed_count(user),
        )
        .await
    }

    pub async fn reset_access_failed_count(
        &self,
        user: &User,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "reset_access_failed_count",
            self.broker.reset_access_failed_count(user),
        )
        .await
    }
}
