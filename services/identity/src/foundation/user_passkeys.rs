use gatehouse_domain::passkey::PasskeyCredential;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::user::User;

use crate::domain::broker::UserManagerBroker;
use crate::error::IdentityServiceError;
use crate::foundation::{delegate, require};

const SERVICE: &str = "user_passkeys";

/// Passkey credentials registered to a user.
///
/// Attestation and assertion verification happen inside the runtime; credentials are
/// stored and returned as opaque records.
pub struct UserPasskeysService<B: UserManagerBroker> {
    broker: B,
}

impl<B: UserManagerBroker> UserPasskeysService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }

    pub async fn add_or_update_passkey(
        &self,
        user: &User,
        passkey: &PasskeyCredential,
    ) -> Result<IdentityResult, IdentityServiceError> {
        delegate(
            SERVICE,
            "add_or_update_passkey",
            self.broker.add_or_update_passkey(user, passkey),
        )
        .await
    }

    pub async fn get_passkeys(
        &self,
        user: &User,
    ) -> Result<Vec<PasskeyCredential>, IdentityServiceError> {
        delegate(SERVICE, "get_passkeys", self.broker.get_passkeys(user)).await
    }

    pub async fn get_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<Option<PasskeyCredential>, IdentityServiceError> {
        require("credential_id", credential_id)?;
        delegate(
            SERVICE,
            "get_passkey",
            self.broker.get_passkey(user, credential_id),
        )
        .await
    }

    pub async fn remove_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<IdentityResult, IdentityServiceError> {
        require("credential_id", credential_id)?;
        delegate(
            SERVICE,
            "remove_passkey",
            self.broker.remove_passkey(user, credential_id),
        )
        .await
    }

    pub async fn find_user_by_passkey_id(
        &self,
        credential_id: &[u8],
    ) -> Result<Option<User>, IdentityServiceError> {
        require("credential_id", credential_id)?;
        delegate(
            SERVICE,
            "find_user_by_passkey_id",
            self.broker.find_user_by_passkey_id(credential_id),
        )
        .await
    }
}
