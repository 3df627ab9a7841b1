use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::role::Role;

use crate::domain::broker::RoleManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "role";

/// Role record lifecycle.
pub struct RoleService<B: RoleManagerBroker> {
    broker: B,
}

impl<B: RoleManagerBroker> RoleService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn create_role(&self, role: &Role) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "create_role", self.broker.create_role(role)).await
    }

    pub async fn update_role(&self, role: &Role) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "update_role", self.broker.update_role(role)).await
    }

    pub async fn delete_role(&self, role: &Role) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "delete_role", self.broker.delete_role(role)).await
    }

    pub async fn find_role_by_id(
        &self,
        role_id: &str,
    ) -> Result<Option<Role>, IdentityServiceError> {
        require("role_id", role_id)?;
        delegate(
            SERVICE,
            "find_role_by_id",
            self.broker.find_role_by_id(role_id),
        )
        .await
    }

    pub async fn find_role_by_name(
        &self,
        role_name: &str,
    ) -> Result<Option<Role>, IdentityServiceError> {
        require("role_name", role_name)?;
        delegate(
            SERVICE,
            "find_role_by_name",
            self.broker.find_role_by_name(role_name),
        )
        .await
    }

    pub async fn role_exists(&self, role_name: &str) -> Result<bool, IdentityServiceError> {
        require("role_name", role_name)?;
        delegate(SERVICE, "role_exists", self.broker.role_exists(role_name)).await
    }

    pub async fn get_role_id(&self, role: &Role) -> Result<String, IdentityServiceError> {
        delegate(SERVICE, "get_role_id", self.broker.get_role_id(role)).await
    }

    pub async fn get_role_name(&self, role: &Role) -> Result<Option<String>, IdentityServiceError> {
        delegate(SERVICE, "get_role_name", self.broker.get_role_name(role)).await
    }

    pub async fn set_role_name(
        &self,
        role: &Role,
        role_name: &str,
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("role_name", role_name)?;
        delegate(
            SERVICE,
            "set_role_name",
            self.broker.set_role_name(role, role_name),
        )
        .await
    }

    pub async fn select_all_roles(&self) -> Result<Vec<Role>, IdentityServiceError> {
        delegate(SERVICE, "select_all_roles", self.broker.select_all_roles()).await
    }
}
