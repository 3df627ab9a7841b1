use serde_json::json;

use gatehouse_domain::result::IdentityResult;
use gatehouse_identity::foundation::user_security::UserSecurityService;
use gatehouse_testing::fixture::test_user;
use gatehouse_testing::log::LogCapture;

use crate::helpers::{BrokerCall, MockBroker};

#[tokio::test]
async fn should_read_and_rotate_security_stamp() {
    let broker = MockBroker::new()
        .returns("get_security_stamp", "STAMP-1")
        .returns("update_security_stamp", IdentityResult::success());
    let service = UserSecurityService::new(broker.clone());

    let stamp = service.get_security_stamp(&test_user()).await.unwrap();
    service.update_security_stamp(&test_user()).await.unwrap();

    assert_eq!(stamp, "STAMP-1");
    assert_eq!(
        broker.calls(),
        vec![
            BrokerCall {
                operation: "get_security_stamp",
                args: json!({ "user": test_user() }),
            },
            BrokerCall {
                operation: "update_security_stamp",
                args: json!({ "user": test_user() }),
            },
        ]
    );
}

#[tokio::test]
async fn should_toggle_two_factor() {
    let broker = MockBroker::new()
        .returns("get_two_factor_enabled", false)
        .returns("set_two_factor_enabled", IdentityResult::success());
    let service = UserSecurityService::new(broker.clone());

    assert!(!service.get_two_factor_enabled(&test_user()).await.unwrap());
    service
        .set_two_factor_enabled(&test_user(), true)
        .await
        .unwrap();

    assert_eq!(
        broker.calls(),
        vec![
            BrokerCall {
                operation: "get_two_factor_enabled",
                args: json!({ "user": test_user() }),
            },
            BrokerCall {
                operation: "set_two_factor_enabled",
                args: json!({ "user": test_user(), "enabled": true }),
            },
        ]
    );
}

#[tokio::test]
async fn should_list_two_factor_providers() {
    let expected = vec!["Authenticator", "Email"];
    let broker = MockBroker::new().returns("get_valid_two_factor_providers", expected.clone());
    let service = UserSecurityService::new(broker);

    let providers = service
        .get_valid_two_factor_providers(&test_user())
        .await
        .unwrap();

    assert_eq!(providers, expected);
}

#[tokio::test]
async fn should_log_under_security_service() {
    let logs = LogCapture::start();
    let broker = MockBroker::new().returns("get_security_stamp", "STAMP-1");
    let service = UserSecurityService::new(broker);

    service.get_security_stamp(&test_user()).await.unwrap();

    let events = logs.events_for("get_security_stamp");
    assert!(!events.is_empty());
    for event in &events {
        assert_eq!(event["fields"]["service"], "user_security");
    }
}
