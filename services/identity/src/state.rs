use std::sync::Arc;

use crate::config::IdentityConfig;
use crate::error::BrokerError;
use crate::foundation::role::RoleService;
use crate::foundation::role_claims::RoleClaimsService;
use crate::foundation::user::UserService;
use crate::foundation::user_auth_tokens::UserAuthTokensService;
use crate::foundation::user_claims::UserClaimsService;
use crate::foundation::user_email::UserEmailService;
use crate::foundation::user_lockout::UserLockoutService;
use crate::foundation::user_login::UserLoginService;
use crate::foundation::user_name::UserNameService;
use crate::foundation::user_passkeys::UserPasskeysService;
use crate::foundation::user_password::UserPasswordService;
use crate::foundation::user_phone::UserPhoneService;
use crate::foundation::user_recovery_codes::UserRecoveryCodesService;
use crate::foundation::user_roles::UserRolesService;
use crate::foundation::user_security::UserSecurityService;
use crate::foundation::user_tokens::UserTokensService;
use crate::infra::navigation::InProcessNavigationBroker;
use crate::infra::remote::{IdentityClient, RemoteRoleManagerBroker, RemoteUserManagerBroker};
use crate::navigation::service::NavigationService;

/// Shared brokers. Services are cheap and built per request from here.
#[derive(Clone)]
pub struct IdentityState {
    pub client: IdentityClient,
    pub navigation: Arc<InProcessNavigationBroker>,
}

impl IdentityState {
    pub fn from_config(config: &IdentityConfig) -> Result<Self, BrokerError> {
        Ok(Self {
            client: IdentityClient::new(config)?,
            navigation: Arc::new(InProcessNavigationBroker::new(&config.navigation_base_uri)?),
        })
    }

    pub fn user_manager(&self) -> RemoteUserManagerBroker {
        RemoteUserManagerBroker::new(self.client.clone())
    }

    pub fn role_manager(&self) -> RemoteRoleManagerBroker {
        RemoteRoleManagerBroker::new(self.client.clone())
    }

    pub fn user_service(&self) -> UserService<RemoteUserManagerBroker> {
        UserService::new(self.user_manager())
    }

    pub fn user_name_service(&self) -> UserNameService<RemoteUserManagerBroker> {
        UserNameService::new(self.user_manager())
    }

    pub fn user_email_service(&self) -> UserEmailService<RemoteUserManagerBroker> {
        UserEmailService::new(self.user_manager())
    }

    pub fn user_password_service(&self) -> UserPasswordService<RemoteUserManagerBroker> {
        UserPasswordService::new(self.user_manager())
    }

    pub fn user_phone_service(&self) -> UserPhoneService<RemoteUserManagerBroker> {
        UserPhoneService::new(self.user_manager())
    }

    pub fn user_lockout_service(&self) -> UserLockoutService<RemoteUserManagerBroker> {
        UserLockoutService::new(self.user_manager())
    }

    pub fn user_login_service(&self) -> UserLoginService<RemoteUserManagerBroker> {
        UserLoginService::new(self.user_manager())
    }

    pub fn user_claims_service(&self) -> UserClaimsService<RemoteUserManagerBroker> {
        UserClaimsService::new(self.user_manager())
    }

    pub fn user_roles_service(&self) -> UserRolesService<RemoteUserManagerBroker> {
        UserRolesService::new(self.user_manager())
    }

    pub fn user_security_service(&self) -> UserSecurityService<RemoteUserManagerBroker> {
        UserSecurityService::new(self.user_manager())
    }

    pub fn user_auth_tokens_service(&self) -> UserAuthTokensService<RemoteUserManagerBroker> {
        UserAuthTokensService::new(self.user_manager())
    }

    pub fn user_tokens_service(&self) -> UserTokensService<RemoteUserManagerBroker> {
        UserTokensService::new(self.user_manager())
    }

    pub fn user_recovery_codes_service(&self) -> UserRecoveryCodesService<RemoteUserManagerBroker> {
        UserRecoveryCodesService::new(self.user_manager())
    }

    pub fn user_passkeys_service(&self) -> UserPasskeysService<RemoteUserManagerBroker> {
        UserPasskeysService::new(self.user_manager())
    }

    pub fn role_service(&self) -> RoleService<RemoteRoleManagerBroker> {
        RoleService::new(self.role_manager())
    }

    pub fn role_claims_service(&self) -> RoleClaimsService<RemoteRoleManagerBroker> {
        RoleClaimsService::new(self.role_manager())
    }

    pub fn navigation_service(&self) -> NavigationService<InProcessNavigationBroker> {
        NavigationService::new(Arc::clone(&self.navigation))
    }
}
