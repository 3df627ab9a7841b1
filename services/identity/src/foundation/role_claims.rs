use gatehouse_domain::claim::Claim;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::role::Role;

use crate::domain::broker::RoleManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::delegate;

const SERVICE: &str = "role_claims";

pub struct RoleClaimsService<B: RoleManagerBroker> {
    broker: B,
}

impl<B: RoleManagerBroker> RoleClaimsService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_role_claims(&self, role: &Role) -> Result<Vec<Claim>, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_role_claims",
            self.broker.get_role_claims(role),
        )
        .await
    }

    pub async fn add_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "add_role_claim",
            self.broker.add_role_claim(role, claim),
        )
        .await
    }

    pub async fn remove_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "remove_role_claim",
            self.broker.remove_role_claim(role, claim),
        )
        .await
    }
}
