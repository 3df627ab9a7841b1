use gatehouse_domain::claim::Claim;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::delegate;

const SERVICE: &str = "user_claims";

/// Claims attached to users.
pub struct UserClaimsService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserClaimsService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn get_claims(&self, user: &User) -> Result<Vec<Claim>, IdentityServiceError> {
        delegate(SERVICE, "get_claims", self.broker.get_claims(user)).await
    }

    pub async fn add_claim(
        &self,
        user: &User,
        claim: &Claim,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "add_claim", self.broker.add_claim(user, claim)).await
    }

    pub async fn add_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(SERVICE, "add_claims", self.broker.add_claims(user, claims)).await
    }

    /// Swap `claim` for `new_claim` on the user.
    pub async fn replace_claim(
        &self,
        user: &User,
        claim: &Claim,
        new_claim: &Claim,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "replace_claim",
            self.broker.replace_claim(user, claim, new_claim),
        )
        .await
    }

    pub async fn remove_claim(
        &self,
        user: &User,
        claim: &Claim,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "remove_claim",
            self.broker.remove_claim(user, claim),
        )
        .await
    }

    pub async fn remove_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "remove_claims",
            self.broker.remove_claims(user, claims),
        )
        .await
    }

    pub async fn get_users_for_claim(
        &self,
        claim: &Claim,
    ) -> Result<Vec<User>, IdentityServiceError> {
        delegate(
            SERVICE,
            "get_users_for_claim",
            self.broker.get_users_for_claim(claim),
        )
        .await
    }
}
