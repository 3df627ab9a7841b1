use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_roles";

/// Role membership of users. Roles are addressed by name.
pub struct UserRolesService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserRolesService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn add_to_role(
        &self,
        user: &User,
        role: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("role", role)?;
        delegate(SERVICE, "add_to_role", self.broker.add_to_role(user, role)).await
    }

    pub async fn add_to_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "add_to_roles",
            self.broker.add_to_roles(user, roles),
        )
        .await
    }

    pub async fn remove_from_role(
        &self,
        user: &User,
        role: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("role", role)?;
        delegate(
            SERVICE,
            "remove_from_role",
            self.broker.remove_from_role(user, role),
        )
        .await
    }

    pub async fn remove_from_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "remove_from_roles",
            self.broker.remove_from_roles(user, roles),
        )
        .await
    }

    pub async fn get_roles(&self, user: &User) -> Result<Vec<String>, IdentityServiceError> {
        delegate(SERVICE, "get_roles", self.broker.get_roles(user)).await
    }

    pub async fn is_in_role(&self, user: &User, role: &str) -> Result<bool, IdentityServiceError> {
        require("role", role)?;
        delegate(SERVICE, "is_in_role", self.broker.is_in_role(user, role)).await
    }

    pub async fn get_users_in_role(&self, role: &str) -> Result<Vec<User>, IdentityServiceError> {
        require("role", role)?;
        delegate(
            SERVICE,
            "get_users_in_role",
            self.broker.get_users_in_role(role),
        )
        .await
    }
}
