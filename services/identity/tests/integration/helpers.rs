use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use gatehouse_domain::claim::Claim;
use gatehouse_domain::login::UserLoginInfo;
use gatehouse_domain::passkey::PasskeyCredential;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::role::Role;
use gatehouse_domain::user::User;
use gatehouse_identity::domain::broker::{NavigationBroker, RoleManagerBroker, UserManagerBroker};
use gatehouse_identity::domain::types::{
    EventHandler, LocationChangedEvent, NotFoundEvent, SubscriptionId,
};
use gatehouse_identity::error::BrokerError;
use gatehouse_identity::navigation::registry::EventHandlers;

// ── Recording broker ─────────────────────────────────────────────────────────

/// One call received by a mock broker: operation name plus arguments as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokerCall {
    pub operation: &'static str,
    pub args: Value,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<BrokerCall>,
    responses: HashMap<&'static str, Value>,
    failures: HashMap<&'static str, (String, String)>,
}

/// Records every call and answers from canned per-operation responses.
///
/// Clones share state, so a test keeps one handle and hands another to the service.
/// Operations without a canned response answer `null`.
#[derive(Clone, Default)]
pub struct MockBroker {
    recorder: Arc<Mutex<Recorder>>,
}

impl MockBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `operation` with `value`.
    pub fn returns<T: Serialize>(self, operation: &'static str, value: T) -> Self {
        let value = serde_json::to_value(value).unwrap();
        self.recorder
            .lock()
            .unwrap()
            .responses
            .insert(operation, value);
        self
    }

    /// Fail `operation` with `BrokerError::Rejected { kind, message }`.
    pub fn fails(self, operation: &'static str, kind: &str, message: &str) -> Self {
        self.recorder
            .lock()
            .unwrap()
            .failures
            .insert(operation, (kind.to_owned(), message.to_owned()));
        self
    }

    pub fn calls(&self) -> Vec<BrokerCall> {
        self.recorder.lock().unwrap().calls.clone()
    }

    /// Exactly one call was made, to `operation`, with `args`. No other broker calls.
    #[track_caller]
    pub fn assert_called_once(&self, operation: &'static str, args: Value) {
        assert_eq!(self.calls(), vec![BrokerCall { operation, args }]);
    }

    #[track_caller]
    pub fn assert_no_calls(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "expected no broker calls, got {calls:?}");
    }

    fn record<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        args: Value,
    ) -> Result<T, BrokerError> {
        let mut recorder = self.recorder.lock().unwrap();
        recorder.calls.push(BrokerCall { operation, args });
        if let Some((kind, message)) = recorder.failures.get(operation) {
            return Err(BrokerError::rejected(kind.clone(), message.clone()));
        }
        let response = recorder
            .responses
            .get(operation)
            .cloned()
            .unwrap_or(Value::Null);
        serde_json::from_value(response).map_err(|e| BrokerError::Internal(e.into()))
    }
}

impl UserManagerBroker for MockBroker {
    async fn create_user(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("create_user", json!({ "user": user }))
    }

    async fn create_user_with_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "create_user_with_password",
            json!({ "user": user, "password": password }),
        )
    }

    async fn update_user(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("update_user", json!({ "user": user }))
    }

    async fn delete_user(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("delete_user", json!({ "user": user }))
    }

    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, BrokerError> {
        self.record("find_user_by_id", json!({ "user_id": user_id }))
    }

    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<User>, BrokerError> {
        self.record("find_user_by_name", json!({ "user_name": user_name }))
    }

    async fn select_all_users(&self) -> Result<Vec<User>, BrokerError> {
        self.record("select_all_users", json!({}))
    }

    async fn get_user_name(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.record("get_user_name", json!({ "user": user }))
    }

    async fn set_user_name(
        &self,
        user: &User,
        user_name: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_user_name",
            json!({ "user": user, "user_name": user_name }),
        )
    }

    async fn get_user_id(&self, user: &User) -> Result<String, BrokerError> {
        self.record("get_user_id", json!({ "user": user }))
    }

    async fn normalize_name(&self, name: &str) -> Result<String, BrokerError> {
        self.record("normalize_name", json!({ "name": name }))
    }

    async fn update_normalized_user_name(&self, user: &User) -> Result<(), BrokerError> {
        self.record("update_normalized_user_name", json!({ "user": user }))
    }

    async fn get_email(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.record("get_email", json!({ "user": user }))
    }

    async fn set_email(&self, user: &User, email: &str) -> Result<IdentityResult, BrokerError> {
        self.record("set_email", json!({ "user": user, "email": email }))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, BrokerError> {
        self.record("find_user_by_email", json!({ "email": email }))
    }

    async fn is_email_confirmed(&self, user: &User) -> Result<bool, BrokerError> {
        self.record("is_email_confirmed", json!({ "user": user }))
    }

    async fn generate_email_confirmation_token(&self, user: &User) -> Result<String, BrokerError> {
        self.record("generate_email_confirmation_token", json!({ "user": user }))
    }

    async fn confirm_email(&self, user: &User, token: &str) -> Result<IdentityResult, BrokerError> {
        self.record("confirm_email", json!({ "user": user, "token": token }))
    }

    async fn generate_change_email_token(
        &self,
        user: &User,
        new_email: &str,
    ) -> Result<String, BrokerError> {
        self.record(
            "generate_change_email_token",
            json!({ "user": user, "new_email": new_email }),
        )
    }

    async fn change_email(
        &self,
        user: &User,
        new_email: &str,
        token: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "change_email",
            json!({ "user": user, "new_email": new_email, "token": token }),
        )
    }

    async fn has_password(&self, user: &User) -> Result<bool, BrokerError> {
        self.record("has_password", json!({ "user": user }))
    }

    async fn add_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "add_password",
            json!({ "user": user, "password": password }),
        )
    }

    async fn remove_password(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("remove_password", json!({ "user": user }))
    }

    async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "change_password",
            json!({
                "user": user,
                "current_password": current_password,
                "new_password": new_password,
            }),
        )
    }

    async fn check_password(&self, user: &User, password: &str) -> Result<bool, BrokerError> {
        self.record(
            "check_password",
            json!({ "user": user, "password": password }),
        )
    }

    async fn generate_password_reset_token(&self, user: &User) -> Result<String, BrokerError> {
        self.record("generate_password_reset_token", json!({ "user": user }))
    }

    async fn reset_password(
        &self,
        user: &User,
        token: &str,
        new_password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "reset_password",
            json!({ "user": user, "token": token, "new_password": new_password }),
        )
    }

    async fn get_phone_number(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.record("get_phone_number", json!({ "user": user }))
    }

    async fn set_phone_number(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_phone_number",
            json!({ "user": user, "phone_number": phone_number }),
        )
    }

    async fn is_phone_number_confirmed(&self, user: &User) -> Result<bool, BrokerError> {
        self.record("is_phone_number_confirmed", json!({ "user": user }))
    }

    async fn generate_change_phone_number_token(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<String, BrokerError> {
        self.record(
            "generate_change_phone_number_token",
            json!({ "user": user, "phone_number": phone_number }),
        )
    }

    async fn change_phone_number(
        &self,
        user: &User,
        phone_number: &str,
        token: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "change_phone_number",
            json!({ "user": user, "phone_number": phone_number, "token": token }),
        )
    }

    async fn verify_change_phone_number_token(
        &self,
        user: &User,
        token: &str,
        phone_number: &str,
    ) -> Result<bool, BrokerError> {
        self.record(
            "verify_change_phone_number_token",
            json!({ "user": user, "token": token, "phone_number": phone_number }),
        )
    }

    async fn is_locked_out(&self, user: &User) -> Result<bool, BrokerError> {
        self.record("is_locked_out", json!({ "user": user }))
    }

    async fn get_lockout_enabled(&self, user: &User) -> Result<bool, BrokerError> {
        self.record("get_lockout_enabled", json!({ "user": user }))
    }

    async fn set_lockout_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_lockout_enabled",
            json!({ "user": user, "enabled": enabled }),
        )
    }

    async fn get_lockout_end_date(
        &self,
        user: &User,
    ) -> Result<Option<DateTime<Utc>>, BrokerError> {
        self.record("get_lockout_end_date", json!({ "user": user }))
    }

    async fn set_lockout_end_date(
        &self,
        user: &User,
        lockout_end: Option<DateTime<Utc>>,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_lockout_end_date",
            json!({ "user": user, "lockout_end": lockout_end }),
        )
    }

    async fn access_failed(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("access_failed", json!({ "user": user }))
    }

    async fn get_access_failed_count(&self, user: &User) -> Result<i32, BrokerError> {
        self.record("get_access_failed_count", json!({ "user": user }))
    }

    async fn reset_access_failed_count(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("reset_access_failed_count", json!({ "user": user }))
    }

    async fn add_login(
        &self,
        user: &User,
        login: &UserLoginInfo,
    ) -> Result<IdentityResult, BrokerError> {
        self.record("add_login", json!({ "user": user, "login": login }))
    }

    async fn remove_login(
        &self,
        user: &User,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "remove_login",
            json!({
                "user": user,
                "login_provider": login_provider,
                "provider_key": provider_key,
            }),
        )
    }

    async fn get_logins(&self, user: &User) -> Result<Vec<UserLoginInfo>, BrokerError> {
        self.record("get_logins", json!({ "user": user }))
    }

    async fn find_user_by_login(
        &self,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<Option<User>, BrokerError> {
        self.record(
            "find_user_by_login",
            json!({ "login_provider": login_provider, "provider_key": provider_key }),
        )
    }

    async fn get_claims(&self, user: &User) -> Result<Vec<Claim>, BrokerError> {
        self.record("get_claims", json!({ "user": user }))
    }

    async fn add_claim(&self, user: &User, claim: &Claim) -> Result<IdentityResult, BrokerError> {
        self.record("add_claim", json!({ "user": user, "claim": claim }))
    }

    async fn add_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, BrokerError> {
        self.record("add_claims", json!({ "user": user, "claims": claims }))
    }

    async fn replace_claim(
        &self,
        user: &User,
        claim: &Claim,
        new_claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "replace_claim",
            json!({ "user": user, "claim": claim, "new_claim": new_claim }),
        )
    }

    async fn remove_claim(
        &self,
        user: &User,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.record("remove_claim", json!({ "user": user, "claim": claim }))
    }

    async fn remove_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, BrokerError> {
        self.record("remove_claims", json!({ "user": user, "claims": claims }))
    }

    async fn get_users_for_claim(&self, claim: &Claim) -> Result<Vec<User>, BrokerError> {
        self.record("get_users_for_claim", json!({ "claim": claim }))
    }

    async fn add_to_role(&self, user: &User, role: &str) -> Result<IdentityResult, BrokerError> {
        self.record("add_to_role", json!({ "user": user, "role": role }))
    }

    async fn add_to_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, BrokerError> {
        self.record("add_to_roles", json!({ "user": user, "roles": roles }))
    }

    async fn remove_from_role(
        &self,
        user: &User,
        role: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record("remove_from_role", json!({ "user": user, "role": role }))
    }

    async fn remove_from_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, BrokerError> {
        self.record("remove_from_roles", json!({ "user": user, "roles": roles }))
    }

    async fn get_roles(&self, user: &User) -> Result<Vec<String>, BrokerError> {
        self.record("get_roles", json!({ "user": user }))
    }

    async fn is_in_role(&self, user: &User, role: &str) -> Result<bool, BrokerError> {
        self.record("is_in_role", json!({ "user": user, "role": role }))
    }

    async fn get_users_in_role(&self, role: &str) -> Result<Vec<User>, BrokerError> {
        self.record("get_users_in_role", json!({ "role": role }))
    }

    async fn get_security_stamp(&self, user: &User) -> Result<String, BrokerError> {
        self.record("get_security_stamp", json!({ "user": user }))
    }

    async fn update_security_stamp(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("update_security_stamp", json!({ "user": user }))
    }

    async fn get_two_factor_enabled(&self, user: &User) -> Result<bool, BrokerError> {
        self.record("get_two_factor_enabled", json!({ "user": user }))
    }

    async fn set_two_factor_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_two_factor_enabled",
            json!({ "user": user, "enabled": enabled }),
        )
    }

    async fn get_valid_two_factor_providers(
        &self,
        user: &User,
    ) -> Result<Vec<String>, BrokerError> {
        self.record("get_valid_two_factor_providers", json!({ "user": user }))
    }

    async fn get_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<Option<String>, BrokerError> {
        self.record(
            "get_authentication_token",
            json!({
                "user": user,
                "login_provider": login_provider,
                "token_name": token_name,
            }),
        )
    }

    async fn set_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
        token_value: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_authentication_token",
            json!({
                "user": user,
                "login_provider": login_provider,
                "token_name": token_name,
                "token_value": token_value,
            }),
        )
    }

    async fn remove_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "remove_authentication_token",
            json!({
                "user": user,
                "login_provider": login_provider,
                "token_name": token_name,
            }),
        )
    }

    async fn get_authenticator_key(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.record("get_authenticator_key", json!({ "user": user }))
    }

    async fn reset_authenticator_key(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.record("reset_authenticator_key", json!({ "user": user }))
    }

    async fn generate_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
    ) -> Result<String, BrokerError> {
        self.record(
            "generate_user_token",
            json!({ "user": user, "token_provider": token_provider, "purpose": purpose }),
        )
    }

    async fn verify_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
        token: &str,
    ) -> Result<bool, BrokerError> {
        self.record(
            "verify_user_token",
            json!({
                "user": user,
                "token_provider": token_provider,
                "purpose": purpose,
                "token": token,
            }),
        )
    }

    async fn generate_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
    ) -> Result<String, BrokerError> {
        self.record(
            "generate_two_factor_token",
            json!({ "user": user, "token_provider": token_provider }),
        )
    }

    async fn verify_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
        token: &str,
    ) -> Result<bool, BrokerError> {
        self.record(
            "verify_two_factor_token",
            json!({ "user": user, "token_provider": token_provider, "token": token }),
        )
    }

    async fn generate_concurrency_stamp(&self, user: &User) -> Result<String, BrokerError> {
        self.record("generate_concurrency_stamp", json!({ "user": user }))
    }

    async fn generate_new_two_factor_recovery_codes(
        &self,
        user: &User,
        number: u32,
    ) -> Result<Vec<String>, BrokerError> {
        self.record(
            "generate_new_two_factor_recovery_codes",
            json!({ "user": user, "number": number }),
        )
    }

    async fn redeem_two_factor_recovery_code(
        &self,
        user: &User,
        code: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "redeem_two_factor_recovery_code",
            json!({ "user": user, "code": code }),
        )
    }

    async fn count_recovery_codes(&self, user: &User) -> Result<u32, BrokerError> {
        self.record("count_recovery_codes", json!({ "user": user }))
    }

    async fn add_or_update_passkey(
        &self,
        user: &User,
        passkey: &PasskeyCredential,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "add_or_update_passkey",
            json!({ "user": user, "passkey": passkey }),
        )
    }

    async fn get_passkeys(&self, user: &User) -> Result<Vec<PasskeyCredential>, BrokerError> {
        self.record("get_passkeys", json!({ "user": user }))
    }

    async fn get_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<Option<PasskeyCredential>, BrokerError> {
        self.record(
            "get_passkey",
            json!({ "user": user, "credential_id": credential_id }),
        )
    }

    async fn remove_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "remove_passkey",
            json!({ "user": user, "credential_id": credential_id }),
        )
    }

    async fn find_user_by_passkey_id(
        &self,
        credential_id: &[u8],
    ) -> Result<Option<User>, BrokerError> {
        self.record(
            "find_user_by_passkey_id",
            json!({ "credential_id": credential_id }),
        )
    }
}

impl RoleManagerBroker for MockBroker {
    async fn create_role(&self, role: &Role) -> Result<IdentityResult, BrokerError> {
        self.record("create_role", json!({ "role": role }))
    }

    async fn update_role(&self, role: &Role) -> Result<IdentityResult, BrokerError> {
        self.record("update_role", json!({ "role": role }))
    }

    async fn delete_role(&self, role: &Role) -> Result<IdentityResult, BrokerError> {
        self.record("delete_role", json!({ "role": role }))
    }

    async fn find_role_by_id(&self, role_id: &str) -> Result<Option<Role>, BrokerError> {
        self.record("find_role_by_id", json!({ "role_id": role_id }))
    }

    async fn find_role_by_name(&self, role_name: &str) -> Result<Option<Role>, BrokerError> {
        self.record("find_role_by_name", json!({ "role_name": role_name }))
    }

    async fn role_exists(&self, role_name: &str) -> Result<bool, BrokerError> {
        self.record("role_exists", json!({ "role_name": role_name }))
    }

    async fn get_role_id(&self, role: &Role) -> Result<String, BrokerError> {
        self.record("get_role_id", json!({ "role": role }))
    }

    async fn get_role_name(&self, role: &Role) -> Result<Option<String>, BrokerError> {
        self.record("get_role_name", json!({ "role": role }))
    }

    async fn set_role_name(
        &self,
        role: &Role,
        role_name: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.record(
            "set_role_name",
            json!({ "role": role, "role_name": role_name }),
        )
    }

    async fn select_all_roles(&self) -> Result<Vec<Role>, BrokerError> {
        self.record("select_all_roles", json!({}))
    }

    async fn get_role_claims(&self, role: &Role) -> Result<Vec<Claim>, BrokerError> {
        self.record("get_role_claims", json!({ "role": role }))
    }

    async fn add_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.record("add_role_claim", json!({ "role": role, "claim": claim }))
    }

    async fn remove_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.record("remove_role_claim", json!({ "role": role, "claim": claim }))
    }
}

// ── Navigation broker ────────────────────────────────────────────────────────

/// Navigation broker whose events are raised by the test.
#[derive(Default)]
pub struct MockNavigationBroker {
    pub location: Mutex<String>,
    pub navigations: Mutex<Vec<(String, bool)>>,
    pub location_changed: EventHandlers<LocationChangedEvent>,
    pub not_found: EventHandlers<NotFoundEvent>,
}

impl MockNavigationBroker {
    pub fn at(location: &str) -> Self {
        Self {
            location: Mutex::new(location.to_owned()),
            ..Self::default()
        }
    }

    pub fn raise_location_changed(&self, event: &LocationChangedEvent) -> usize {
        self.location_changed.raise(event)
    }

    pub fn raise_not_found(&self, event: &NotFoundEvent) -> usize {
        self.not_found.raise(event)
    }

    pub fn subscriber_count(&self) -> usize {
        self.location_changed.len() + self.not_found.len()
    }
}

impl NavigationBroker for MockNavigationBroker {
    fn location(&self) -> String {
        self.location.lock().unwrap().clone()
    }

    fn navigate_to(&self, uri: &str, force_load: bool) -> Result<(), BrokerError> {
        self.navigations
            .lock()
            .unwrap()
            .push((uri.to_owned(), force_load));
        Ok(())
    }

    fn subscribe_location_changed(
        &self,
        handler: EventHandler<LocationChangedEvent>,
    ) -> SubscriptionId {
        self.location_changed.subscribe(handler)
    }

    fn subscribe_not_found(&self, handler: EventHandler<NotFoundEvent>) -> SubscriptionId {
        self.not_found.subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.location_changed.unsubscribe(id) || self.not_found.unsubscribe(id)
    }
}
