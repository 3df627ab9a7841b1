//! Identity record fixtures with stable values.

use chrono::{TimeZone, Utc};

use gatehouse_domain::claim::Claim;
use gatehouse_domain::login::UserLoginInfo;
use gatehouse_domain::passkey::PasskeyCredential;
use gatehouse_domain::result::{IdentityError, IdentityResult};
use gatehouse_domain::role::Role;
use gatehouse_domain::user::User;

pub const TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
pub const TEST_ROLE_ID: &str = "00000000-0000-0000-0000-0000000000a1";

pub fn test_user() -> User {
    User {
        id: TEST_USER_ID.to_owned(),
        user_name: Some("alice".to_owned()),
        normalized_user_name: Some("ALICE".to_owned()),
        email: Some("alice@example.com".to_owned()),
        normalized_email: Some("ALICE@EXAMPLE.COM".to_owned()),
        email_confirmed: true,
        password_hash: None,
        security_stamp: Some("STAMP-1".to_owned()),
        concurrency_stamp: Some("CONCURRENCY-1".to_owned()),
        phone_number: Some("+15555550100".to_owned()),
        phone_number_confirmed: false,
        two_factor_enabled: false,
        lockout_end: None,
        lockout_enabled: true,
        access_failed_count: 0,
    }
}

/// A second user distinct from [`test_user`].
pub fn other_user() -> User {
    User {
        id: "00000000-0000-0000-0000-000000000002".to_owned(),
        user_name: Some("bob".to_owned()),
        normalized_user_name: Some("BOB".to_owned()),
        email: Some("bob@example.com".to_owned()),
        normalized_email: Some("BOB@EXAMPLE.COM".to_owned()),
        ..test_user()
    }
}

pub fn test_role() -> Role {
    Role {
        id: TEST_ROLE_ID.to_owned(),
        name: Some("Admin".to_owned()),
        normalized_name: Some("ADMIN".to_owned()),
        concurrency_stamp: Some("ROLE-CONCURRENCY-1".to_owned()),
    }
}

pub fn test_claim() -> Claim {
    Claim::new("department", "engineering")
}

pub fn other_claim() -> Claim {
    Claim::new("department", "finance")
}

pub fn test_login() -> UserLoginInfo {
    UserLoginInfo::new("GitHub", "gh-1234", Some("GitHub".to_owned()))
}

pub fn test_passkey() -> PasskeyCredential {
    PasskeyCredential {
        credential_id: vec![1, 2, 3, 4],
        public_key: vec![9, 8, 7, 6],
        sign_count: 3,
        transports: vec!["internal".to_owned(), "hybrid".to_owned()],
        is_user_verified: true,
        is_backup_eligible: true,
        is_backed_up: false,
        attestation_object: vec![],
        client_data_json: vec![],
        name: Some("Laptop".to_owned()),
        created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
    }
}

/// A failed result as the runtime reports a rule violation.
pub fn failed_result() -> IdentityResult {
    IdentityResult::failed(vec![IdentityError {
        code: "DuplicateUserName".to_owned(),
        description: "Username 'alice' is already taken.".to_owned(),
    }])
}
