use gatehouse_domain::login::UserLoginInfo;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_login";

/// External logins linked to a user.
pub struct UserLoginService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserLoginService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn add_login(
        &self,
        user: &User,
        login: &UserLoginInfo,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "add_login", self.broker.add_login(user, login)).await
    }

    pub async fn remove_login(
        &self,
        user: &User,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("login_provider", login_provider)?;
        require("provider_key", provider_key)?;
        delegate(
            SERVICE,
            "remove_login",
            self.broker.remove_login(user, login_provider, provider_key),
        )
        .await
    }

    pub async fn get_logins(
        &self,
        user: &User,
    ) -> Result<Vec<UserLoginInfo>, IdentityServiceError> {
        delegate(SERVICE, "get_logins", self.broker.get_logins(user)).await
    }

    pub async fn find_user_by_login(
        &self,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<Option<User>, IdentityServiceError> {
        require("login_provider", login_provider)?;
        require("provider_key", provider_key)?;
        delegate(
            SERVICE,
            "find_user_by_login",
            self.broker.find_user_by_login(login_provider, provider_key),
        )
        .await
    }
}
