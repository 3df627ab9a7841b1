#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use gatehouse_domain::claim::Claim;
use gatehouse_domain::login::UserLoginInfo;
use gatehouse_domain::passkey::PasskeyCredential;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::role::Role;
use gatehouse_domain::user::User;

use crate::domain::types::{EventHandler, LocationChangedEvent, NotFoundEvent, SubscriptionId};
use crate::error::BrokerError;

/// Port to the identity runtime's user manager.
///
/// One method per runtime call. Implementations must not add calls of their own: the
/// foundation services rely on a one-to-one mapping.
pub trait UserManagerBroker: Send + Sync {
    // users
    async fn create_user(&self, user: &User) -> Result<IdentityResult, BrokerError>;
    async fn create_user_with_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn update_user(&self, user: &User) -> Result<IdentityResult, BrokerError>;
    async fn delete_user(&self, user: &User) -> Result<IdentityResult, BrokerError>;
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, BrokerError>;
    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<User>, BrokerError>;
    async fn select_all_users(&self) -> Result<Vec<User>, BrokerError>;

    // user name
    async fn get_user_name(&self, user: &User) -> Result<Option<String>, BrokerError>;
    async fn set_user_name(
        &self,
        user: &User,
        user_name: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_user_id(&self, user: &User) -> Result<String, BrokerError>;
    async fn normalize_name(&self, name: &str) -> Result<String, BrokerError>;
    async fn update_normalized_user_name(&self, user: &User) -> Result<(), BrokerError>;

    // email
    async fn get_email(&self, user: &User) -> Result<Option<String>, BrokerError>;
    async fn set_email(&self, user: &User, email: &str) -> Result<IdentityResult, BrokerError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, BrokerError>;
    async fn is_email_confirmed(&self, user: &User) -> Result<bool, BrokerError>;
    async fn generate_email_confirmation_token(&self, user: &User) -> Result<String, BrokerError>;
    async fn confirm_email(&self, user: &User, token: &str) -> Result<IdentityResult, BrokerError>;
    async fn generate_change_email_token(
        &self,
        user: &User,
        new_email: &str,
    ) -> Result<String, BrokerError>;
    async fn change_email(
        &self,
        user: &User,
        new_email: &str,
        token: &str,
    ) -> Result<IdentityResult, BrokerError>;

    // password
    async fn has_password(&self, user: &User) -> Result<bool, BrokerError>;
    async fn add_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_password(&self, user: &User) -> Result<IdentityResult, BrokerError>;
    async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn check_password(&self, user: &User, password: &str) -> Result<bool, BrokerError>;
    async fn generate_password_reset_token(&self, user: &User) -> Result<String, BrokerError>;
    async fn reset_password(
        &self,
        user: &User,
        token: &str,
        new_password: &str,
    ) -> Result<IdentityResult, BrokerError>;

    // phone
    async fn get_phone_number(&self, user: &User) -> Result<Option<String>, BrokerError>;
    async fn set_phone_number(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn is_phone_number_confirmed(&self, user: &User) -> Result<bool, BrokerError>;
    async fn generate_change_phone_number_token(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<String, BrokerError>;
    async fn change_phone_number(
        &self,
        user: &User,
        phone_number: &str,
        token: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn verify_change_phone_number_token(
        &self,
        user: &User,
        token: &str,
        phone_number: &str,
    ) -> Result<bool, BrokerError>;

    // lockout
    async fn is_locked_out(&self, user: &User) -> Result<bool, BrokerError>;
    async fn get_lockout_enabled(&self, user: &User) -> Result<bool, BrokerError>;
    async fn set_lockout_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_lockout_end_date(&self, user: &User) -> Result<Option<DateTime<Utc>>, BrokerError>;
    async fn set_lockout_end_date(
        &self,
        user: &User,
        lockout_end: Option<DateTime<Utc>>,
    ) -> Result<IdentityResult, BrokerError>;
    async fn access_failed(&self, user: &User) -> Result<IdentityResult, BrokerError>;
    async fn get_access_failed_count(&self, user: &User) -> Result<i32, BrokerError>;
    async fn reset_access_failed_count(&self, user: &User) -> Result<IdentityResult, BrokerError>;

    // external logins
    async fn add_login(
        &self,
        user: &User,
        login: &UserLoginInfo,
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_login(
        &self,
        user: &User,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_logins(&self, user: &User) -> Result<Vec<UserLoginInfo>, BrokerError>;
    async fn find_user_by_login(
        &self,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<Option<User>, BrokerError>;

    // claims
    async fn get_claims(&self, user: &User) -> Result<Vec<Claim>, BrokerError>;
    async fn add_claim(&self, user: &User, claim: &Claim) -> Result<IdentityResult, BrokerError>;
    async fn add_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, BrokerError>;
    async fn replace_claim(
        &self,
        user: &User,
        claim: &Claim,
        new_claim: &Claim,
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_claim(&self, user: &User, claim: &Claim) -> Result<IdentityResult, BrokerError>;
    async fn remove_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_users_for_claim(&self, claim: &Claim) -> Result<Vec<User>, BrokerError>;

    // role membership
    async fn add_to_role(&self, user: &User, role: &str) -> Result<IdentityResult, BrokerError>;
    async fn add_to_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_from_role(
        &self,
        user: &User,
        role: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_from_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_roles(&self, user: &User) -> Result<Vec<String>, BrokerError>;
    async fn is_in_role(&self, user: &User, role: &str) -> Result<bool, BrokerError>;
    async fn get_users_in_role(&self, role: &str) -> Result<Vec<User>, BrokerError>;

    // security stamp and two-factor
    async fn get_security_stamp(&self, user: &User) -> Result<String, BrokerError>;
    async fn update_security_stamp(&self, user: &User) -> Result<IdentityResult, BrokerError>;
    async fn get_two_factor_enabled(&self, user: &User) -> Result<bool, BrokerError>;
    async fn set_two_factor_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_valid_two_factor_providers(&self, user: &User) -> Result<Vec<String>, BrokerError>;

    // stored authentication tokens
    async fn get_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<Option<String>, BrokerError>;
    async fn set_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
        token_value: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_authenticator_key(&self, user: &User) -> Result<Option<String>, BrokerError>;
    async fn reset_authenticator_key(&self, user: &User) -> Result<IdentityResult, BrokerError>;

    // token providers
    async fn generate_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
    ) -> Result<String, BrokerError>;
    async fn verify_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
        token: &str,
    ) -> Result<bool, BrokerError>;
    async fn generate_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
    ) -> Result<String, BrokerError>;
    async fn verify_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
        token: &str,
    ) -> Result<bool, BrokerError>;
    async fn generate_concurrency_stamp(&self, user: &User) -> Result<String, BrokerError>;

    // recovery codes
    async fn generate_new_two_factor_recovery_codes(
        &self,
        user: &User,
        number: u32,
    ) -> Result<Vec<String>, BrokerError>;
    async fn redeem_two_factor_recovery_code(
        &self,
        user: &User,
        code: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn count_recovery_codes(&self, user: &User) -> Result<u32, BrokerError>;

    // passkeys
    async fn add_or_update_passkey(
        &self,
        user: &User,
        passkey: &PasskeyCredential,
    ) -> Result<IdentityResult, BrokerError>;
    async fn get_passkeys(&self, user: &User) -> Result<Vec<PasskeyCredential>, BrokerError>;
    async fn get_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<Option<PasskeyCredential>, BrokerError>;
    async fn remove_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<IdentityResult, BrokerError>;
    async fn find_user_by_passkey_id(
        &self,
        credential_id: &[u8],
    ) -> Result<Option<User>, BrokerError>;
}

/// Port to the identity runtime's role manager.
pub trait RoleManagerBroker: Send + Sync {
    async fn create_role(&self, role: &Role) -> Result<IdentityResult, BrokerError>;
    async fn update_role(&self, role: &Role) -> Result<IdentityResult, BrokerError>;
    async fn delete_role(&self, role: &Role) -> Result<IdentityResult, BrokerError>;
    async fn find_role_by_id(&self, role_id: &str) -> Result<Option<Role>, BrokerError>;
    async fn find_role_by_name(&self, role_name: &str) -> Result<Option<Role>, BrokerError>;
    async fn role_exists(&self, role_name: &str) -> Result<bool, BrokerError>;
    async fn get_role_id(&self, role: &Role) -> Result<String, BrokerError>;
    async fn get_role_name(&self, role: &Role) -> Result<Option<String>, BrokerError>;
    async fn set_role_name(
        &self,
        role: &Role,
        role_name: &str,
    ) -> Result<IdentityResult, BrokerError>;
    async fn select_all_roles(&self) -> Result<Vec<Role>, BrokerError>;

    async fn get_role_claims(&self, role: &Role) -> Result<Vec<Claim>, BrokerError>;
    async fn add_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError>;
    async fn remove_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError>;
}

/// Port to the client-side router.
///
/// Handlers run synchronously on the thread that raises the event.
pub trait NavigationBroker: Send + Sync {
    /// Absolute URI of the current location.
    fn location(&self) -> String;

    fn navigate_to(&self, uri: &str, force_load: bool) -> Result<(), BrokerError>;

    fn subscribe_location_changed(
        &self,
        handler: EventHandler<LocationChangedEvent>,
    ) -> SubscriptionId;

    fn subscribe_not_found(&self, handler: EventHandler<NotFoundEvent>) -> SubscriptionId;

    /// Returns `true` if a subscription with this id existed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
