//! Broker adapters over a remote identity runtime.
//!
//! Every broker method is one `POST {base_url}/{scope}/{operation}` whose JSON body holds
//! the call's arguments by name. A 2xx body is the JSON-encoded return value; an empty
//! body reads as `null`. Error responses carry `{"kind", "message"}`.

use std::time::Duration;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use gatehouse_domain::claim::Claim;
use gatehouse_domain::login::UserLoginInfo;
use gatehouse_domain::passkey::PasskeyCredential;
use gatehouse_domain::result::IdentityResult;
use gatehouse_domain::role::Role;
use gatehouse_domain::user::User;

use crate::config::IdentityConfig;
use crate::domain::broker::{RoleManagerBroker, UserManagerBroker};
use crate::error::BrokerError;

const USERS: &str = "users";
const ROLES: &str = "roles";

/// HTTP client for the identity runtime. Cheap to clone.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct RejectionBody {
    kind: String,
    message: String,
}

impl IdentityClient {
    pub fn new(config: &IdentityConfig) -> Result<Self, BrokerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.identity_timeout_secs))
            .build()
            .context("build identity http client")?;
        Ok(Self {
            http,
            base_url: config.identity_base_url.trim_end_matches('/').to_owned(),
            api_key: config.identity_api_key.clone(),
        })
    }

    pub async fn invoke<A, R>(
        &self,
        scope: &str,
        operation: &str,
        args: &A,
    ) -> Result<R, BrokerError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{scope}/{operation}", self.base_url);
        let mut request = self.http.post(&url).json(args);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("send {scope}/{operation}"))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("read {scope}/{operation} response"))?;
        tracing::debug!(
            scope,
            operation,
            status = status.as_u16(),
            "identity runtime responded"
        );

        if !status.is_success() {
            return Err(rejection(status, &body));
        }
        let value: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .with_context(|| format!("parse {scope}/{operation} response"))?
        };
        let decoded = serde_json::from_value(value)
            .with_context(|| format!("decode {scope}/{operation} response"))?;
        Ok(decoded)
    }
}

fn rejection(status: StatusCode, body: &[u8]) -> BrokerError {
    match serde_json::from_slice::<RejectionBody>(body) {
        Ok(RejectionBody { kind, message }) => BrokerError::Rejected { kind, message },
        Err(_) => BrokerError::rejected(
            status.as_u16().to_string(),
            String::from_utf8_lossy(body).into_owned(),
        ),
    }
}

// ── User manager ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RemoteUserManagerBroker {
    client: IdentityClient,
}

impl RemoteUserManagerBroker {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        operation: &str,
        args: Value,
    ) -> Result<R, BrokerError> {
        self.client.invoke(USERS, operation, &args).await
    }
}

impl UserManagerBroker for RemoteUserManagerBroker {
    async fn create_user(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("create_user", json!({ "user": user })).await
    }

    async fn create_user_with_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "create_user_with_password",
            json!({ "user": user, "password": password }),
        )
        .await
    }

    async fn update_user(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("update_user", json!({ "user": user })).await
    }

    async fn delete_user(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("delete_user", json!({ "user": user })).await
    }

    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, BrokerError> {
        self.call("find_user_by_id", json!({ "user_id": user_id }))
            .await
    }

    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<User>, BrokerError> {
        self.call("find_user_by_name", json!({ "user_name": user_name }))
            .await
    }

    async fn select_all_users(&self) -> Result<Vec<User>, BrokerError> {
        self.call("select_all_users", json!({})).await
    }

    async fn get_user_name(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.call("get_user_name", json!({ "user": user })).await
    }

    async fn set_user_name(
        &self,
        user: &User,
        user_name: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_user_name",
            json!({ "user": user, "user_name": user_name }),
        )
        .await
    }

    async fn get_user_id(&self, user: &User) -> Result<String, BrokerError> {
        self.call("get_user_id", json!({ "user": user })).await
    }

    async fn normalize_name(&self, name: &str) -> Result<String, BrokerError> {
        self.call("normalize_name", json!({ "name": name })).await
    }

    async fn update_normalized_user_name(&self, user: &User) -> Result<(), BrokerError> {
        self.call("update_normalized_user_name", json!({ "user": user }))
            .await
    }

    async fn get_email(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.call("get_email", json!({ "user": user })).await
    }

    async fn set_email(&self, user: &User, email: &str) -> Result<IdentityResult, BrokerError> {
        self.call("set_email", json!({ "user": user, "email": email }))
            .await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, BrokerError> {
        self.call("find_user_by_email", json!({ "email": email }))
            .await
    }

    async fn is_email_confirmed(&self, user: &User) -> Result<bool, BrokerError> {
        self.call("is_email_confirmed", json!({ "user": user }))
            .await
    }

    async fn generate_email_confirmation_token(&self, user: &User) -> Result<String, BrokerError> {
        self.call("generate_email_confirmation_token", json!({ "user": user }))
            .await
    }

    async fn confirm_email(&self, user: &User, token: &str) -> Result<IdentityResult, BrokerError> {
        self.call("confirm_email", json!({ "user": user, "token": token }))
            .await
    }

    async fn generate_change_email_token(
        &self,
        user: &User,
        new_email: &str,
    ) -> Result<String, BrokerError> {
        self.call(
            "generate_change_email_token",
            json!({ "user": user, "new_email": new_email }),
        )
        .await
    }

    async fn change_email(
        &self,
        user: &User,
        new_email: &str,
        token: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "change_email",
            json!({ "user": user, "new_email": new_email, "token": token }),
        )
        .await
    }

    async fn has_password(&self, user: &User) -> Result<bool, BrokerError> {
        self.call("has_password", json!({ "user": user })).await
    }

    async fn add_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "add_password",
            json!({ "user": user, "password": password }),
        )
        .await
    }

    async fn remove_password(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("remove_password", json!({ "user": user })).await
    }

    async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "change_password",
            json!({
                "user": user,
                "current_password": current_password,
                "new_password": new_password,
            }),
        )
        .await
    }

    async fn check_password(&self, user: &User, password: &str) -> Result<bool, BrokerError> {
        self.call(
            "check_password",
            json!({ "user": user, "password": password }),
        )
        .await
    }

    async fn generate_password_reset_token(&self, user: &User) -> Result<String, BrokerError> {
        self.call("generate_password_reset_token", json!({ "user": user }))
            .await
    }

    async fn reset_password(
        &self,
        user: &User,
        token: &str,
        new_password: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "reset_password",
            json!({ "user": user, "token": token, "new_password": new_password }),
        )
        .await
    }

    async fn get_phone_number(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.call("get_phone_number", json!({ "user": user })).await
    }

    async fn set_phone_number(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_phone_number",
            json!({ "user": user, "phone_number": phone_number }),
        )
        .await
    }

    async fn is_phone_number_confirmed(&self, user: &User) -> Result<bool, BrokerError> {
        self.call("is_phone_number_confirmed", json!({ "user": user }))
            .await
    }

    async fn generate_change_phone_number_token(
        &self,
        user: &User,
        phone_number: &str,
    ) -> Result<String, BrokerError> {
        self.call(
            "generate_change_phone_number_token",
            json!({ "user": user, "phone_number": phone_number }),
        )
        .await
    }

    async fn change_phone_number(
        &self,
        user: &User,
        phone_number: &str,
        token: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "change_phone_number",
            json!({ "user": user, "phone_number": phone_number, "token": token }),
        )
        .await
    }

    async fn verify_change_phone_number_token(
        &self,
        user: &User,
        token: &str,
        phone_number: &str,
    ) -> Result<bool, BrokerError> {
        self.call(
            "verify_change_phone_number_token",
            json!({ "user": user, "token": token, "phone_number": phone_number }),
        )
        .await
    }

    async fn is_locked_out(&self, user: &User) -> Result<bool, BrokerError> {
        self.call("is_locked_out", json!({ "user": user })).await
    }

    async fn get_lockout_enabled(&self, user: &User) -> Result<bool, BrokerError> {
        self.call("get_lockout_enabled", json!({ "user": user }))
            .await
    }

    async fn set_lockout_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_lockout_enabled",
            json!({ "user": user, "enabled": enabled }),
        )
        .await
    }

    async fn get_lockout_end_date(
        &self,
        user: &User,
    ) -> Result<Option<DateTime<Utc>>, BrokerError> {
        self.call("get_lockout_end_date", json!({ "user": user }))
            .await
    }

    async fn set_lockout_end_date(
        &self,
        user: &User,
        lockout_end: Option<DateTime<Utc>>,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_lockout_end_date",
            json!({ "user": user, "lockout_end": lockout_end }),
        )
        .await
    }

    async fn access_failed(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("access_failed", json!({ "user": user })).await
    }

    async fn get_access_failed_count(&self, user: &User) -> Result<i32, BrokerError> {
        self.call("get_access_failed_count", json!({ "user": user }))
            .await
    }

    async fn reset_access_failed_count(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("reset_access_failed_count", json!({ "user": user }))
            .await
    }

    async fn add_login(
        &self,
        user: &User,
        login: &UserLoginInfo,
    ) -> Result<IdentityResult, BrokerError> {
        self.call("add_login", json!({ "user": user, "login": login }))
            .await
    }

    async fn remove_login(
        &self,
        user: &User,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "remove_login",
            json!({
                "user": user,
                "login_provider": login_provider,
                "provider_key": provider_key,
            }),
        )
        .await
    }

    async fn get_logins(&self, user: &User) -> Result<Vec<UserLoginInfo>, BrokerError> {
        self.call("get_logins", json!({ "user": user })).await
    }

    async fn find_user_by_login(
        &self,
        login_provider: &str,
        provider_key: &str,
    ) -> Result<Option<User>, BrokerError> {
        self.call(
            "find_user_by_login",
            json!({ "login_provider": login_provider, "provider_key": provider_key }),
        )
        .await
    }

    async fn get_claims(&self, user: &User) -> Result<Vec<Claim>, BrokerError> {
        self.call("get_claims", json!({ "user": user })).await
    }

    async fn add_claim(&self, user: &User, claim: &Claim) -> Result<IdentityResult, BrokerError> {
        self.call("add_claim", json!({ "user": user, "claim": claim }))
            .await
    }

    async fn add_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, BrokerError> {
        self.call("add_claims", json!({ "user": user, "claims": claims }))
            .await
    }

    async fn replace_claim(
        &self,
        user: &User,
        claim: &Claim,
        new_claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "replace_claim",
            json!({ "user": user, "claim": claim, "new_claim": new_claim }),
        )
        .await
    }

    async fn remove_claim(
        &self,
        user: &User,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.call("remove_claim", json!({ "user": user, "claim": claim }))
            .await
    }

    async fn remove_claims(
        &self,
        user: &User,
        claims: &[Claim],
    ) -> Result<IdentityResult, BrokerError> {
        self.call("remove_claims", json!({ "user": user, "claims": claims }))
            .await
    }

    async fn get_users_for_claim(&self, claim: &Claim) -> Result<Vec<User>, BrokerError> {
        self.call("get_users_for_claim", json!({ "claim": claim }))
            .await
    }

    async fn add_to_role(&self, user: &User, role: &str) -> Result<IdentityResult, BrokerError> {
        self.call("add_to_role", json!({ "user": user, "role": role }))
            .await
    }

    async fn add_to_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, BrokerError> {
        self.call("add_to_roles", json!({ "user": user, "roles": roles }))
            .await
    }

    async fn remove_from_role(
        &self,
        user: &User,
        role: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call("remove_from_role", json!({ "user": user, "role": role }))
            .await
    }

    async fn remove_from_roles(
        &self,
        user: &User,
        roles: &[String],
    ) -> Result<IdentityResult, BrokerError> {
        self.call("remove_from_roles", json!({ "user": user, "roles": roles }))
            .await
    }

    async fn get_roles(&self, user: &User) -> Result<Vec<String>, BrokerError> {
        self.call("get_roles", json!({ "user": user })).await
    }

    async fn is_in_role(&self, user: &User, role: &str) -> Result<bool, BrokerError> {
        self.call("is_in_role", json!({ "user": user, "role": role }))
            .await
    }

    async fn get_users_in_role(&self, role: &str) -> Result<Vec<User>, BrokerError> {
        self.call("get_users_in_role", json!({ "role": role }))
            .await
    }

    async fn get_security_stamp(&self, user: &User) -> Result<String, BrokerError> {
        self.call("get_security_stamp", json!({ "user": user }))
            .await
    }

    async fn update_security_stamp(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("update_security_stamp", json!({ "user": user }))
            .await
    }

    async fn get_two_factor_enabled(&self, user: &User) -> Result<bool, BrokerError> {
        self.call("get_two_factor_enabled", json!({ "user": user }))
            .await
    }

    async fn set_two_factor_enabled(
        &self,
        user: &User,
        enabled: bool,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_two_factor_enabled",
            json!({ "user": user, "enabled": enabled }),
        )
        .await
    }

    async fn get_valid_two_factor_providers(
        &self,
        user: &User,
    ) -> Result<Vec<String>, BrokerError> {
        self.call("get_valid_two_factor_providers", json!({ "user": user }))
            .await
    }

    async fn get_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<Option<String>, BrokerError> {
        self.call(
            "get_authentication_token",
            json!({
                "user": user,
                "login_provider": login_provider,
                "token_name": token_name,
            }),
        )
        .await
    }

    async fn set_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
        token_value: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_authentication_token",
            json!({
                "user": user,
                "login_provider": login_provider,
                "token_name": token_name,
                "token_value": token_value,
            }),
        )
        .await
    }

    async fn remove_authentication_token(
        &self,
        user: &User,
        login_provider: &str,
        token_name: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "remove_authentication_token",
            json!({
                "user": user,
                "login_provider": login_provider,
                "token_name": token_name,
            }),
        )
        .await
    }

    async fn get_authenticator_key(&self, user: &User) -> Result<Option<String>, BrokerError> {
        self.call("get_authenticator_key", json!({ "user": user }))
            .await
    }

    async fn reset_authenticator_key(&self, user: &User) -> Result<IdentityResult, BrokerError> {
        self.call("reset_authenticator_key", json!({ "user": user }))
            .await
    }

    async fn generate_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
    ) -> Result<String, BrokerError> {
        self.call(
            "generate_user_token",
            json!({ "user": user, "token_provider": token_provider, "purpose": purpose }),
        )
        .await
    }

    async fn verify_user_token(
        &self,
        user: &User,
        token_provider: &str,
        purpose: &str,
        token: &str,
    ) -> Result<bool, BrokerError> {
        self.call(
            "verify_user_token",
            json!({
                "user": user,
                "token_provider": token_provider,
                "purpose": purpose,
                "token": token,
            }),
        )
        .await
    }

    async fn generate_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
    ) -> Result<String, BrokerError> {
        self.call(
            "generate_two_factor_token",
            json!({ "user": user, "token_provider": token_provider }),
        )
        .await
    }

    async fn verify_two_factor_token(
        &self,
        user: &User,
        token_provider: &str,
        token: &str,
    ) -> Result<bool, BrokerError> {
        self.call(
            "verify_two_factor_token",
            json!({ "user": user, "token_provider": token_provider, "token": token }),
        )
        .await
    }

    async fn generate_concurrency_stamp(&self, user: &User) -> Result<String, BrokerError> {
        self.call("generate_concurrency_stamp", json!({ "user": user }))
            .await
    }

    async fn generate_new_two_factor_recovery_codes(
        &self,
        user: &User,
        number: u32,
    ) -> Result<Vec<String>, BrokerError> {
        self.call(
            "generate_new_two_factor_recovery_codes",
            json!({ "user": user, "number": number }),
        )
        .await
    }

    async fn redeem_two_factor_recovery_code(
        &self,
        user: &User,
        code: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "redeem_two_factor_recovery_code",
            json!({ "user": user, "code": code }),
        )
        .await
    }

    async fn count_recovery_codes(&self, user: &User) -> Result<u32, BrokerError> {
        self.call("count_recovery_codes", json!({ "user": user }))
            .await
    }

    async fn add_or_update_passkey(
        &self,
        user: &User,
        passkey: &PasskeyCredential,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "add_or_update_passkey",
            json!({ "user": user, "passkey": passkey }),
        )
        .await
    }

    async fn get_passkeys(&self, user: &User) -> Result<Vec<PasskeyCredential>, BrokerError> {
        self.call("get_passkeys", json!({ "user": user })).await
    }

    async fn get_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<Option<PasskeyCredential>, BrokerError> {
        self.call(
            "get_passkey",
            json!({ "user": user, "credential_id": credential_id }),
        )
        .await
    }

    async fn remove_passkey(
        &self,
        user: &User,
        credential_id: &[u8],
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "remove_passkey",
            json!({ "user": user, "credential_id": credential_id }),
        )
        .await
    }

    async fn find_user_by_passkey_id(
        &self,
        credential_id: &[u8],
    ) -> Result<Option<User>, BrokerError> {
        self.call(
            "find_user_by_passkey_id",
            json!({ "credential_id": credential_id }),
        )
        .await
    }
}

// ── Role manager ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RemoteRoleManagerBroker {
    client: IdentityClient,
}

impl RemoteRoleManagerBroker {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        operation: &str,
        args: Value,
    ) -> Result<R, BrokerError> {
        self.client.invoke(ROLES, operation, &args).await
    }
}

impl RoleManagerBroker for RemoteRoleManagerBroker {
    async fn create_role(&self, role: &Role) -> Result<IdentityResult, BrokerError> {
        self.call("create_role", json!({ "role": role })).await
    }

    async fn update_role(&self, role: &Role) -> Result<IdentityResult, BrokerError> {
        self.call("update_role", json!({ "role": role })).await
    }

    async fn delete_role(&self, role: &Role) -> Result<IdentityResult, BrokerError> {
        self.call("delete_role", json!({ "role": role })).await
    }

    async fn find_role_by_id(&self, role_id: &str) -> Result<Option<Role>, BrokerError> {
        self.call("find_role_by_id", json!({ "role_id": role_id }))
            .await
    }

    async fn find_role_by_name(&self, role_name: &str) -> Result<Option<Role>, BrokerError> {
        self.call("find_role_by_name", json!({ "role_name": role_name }))
            .await
    }

    async fn role_exists(&self, role_name: &str) -> Result<bool, BrokerError> {
        self.call("role_exists", json!({ "role_name": role_name }))
            .await
    }

    async fn get_role_id(&self, role: &Role) -> Result<String, BrokerError> {
        self.call("get_role_id", json!({ "role": role })).await
    }

    async fn get_role_name(&self, role: &Role) -> Result<Option<String>, BrokerError> {
        self.call("get_role_name", json!({ "role": role })).await
    }

    async fn set_role_name(
        &self,
        role: &Role,
        role_name: &str,
    ) -> Result<IdentityResult, BrokerError> {
        self.call(
            "set_role_name",
            json!({ "role": role, "role_name": role_name }),
        )
        .await
    }

    async fn select_all_roles(&self) -> Result<Vec<Role>, BrokerError> {
        self.call("select_all_roles", json!({})).await
    }

    async fn get_role_claims(&self, role: &Role) -> Result<Vec<Claim>, BrokerError> {
        self.call("get_role_claims", json!({ "role": role })).await
    }

    async fn add_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.call("add_role_claim", json!({ "role": role, "claim": claim }))
            .await
    }

    async fn remove_role_claim(
        &self,
        role: &Role,
        claim: &Claim,
    ) -> Result<IdentityResult, BrokerError> {
        self.call("remove_role_claim", json!({ "role": role, "claim": claim }))
            .await
    }
}
