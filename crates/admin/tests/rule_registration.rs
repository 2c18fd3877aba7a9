//! Constraint rule registration against a mock Admin API.

mod common;

use httpmock::prelude::*;

use common::{constraint_function, constraint_rule, graphql_data, mock_client};
use pinpoint_admin::error::AppError;
use pinpoint_admin::services::{Unregistration, registration};

#[tokio::test]
async fn register_creates_rule_when_none_exists() {
    let server = MockServer::start();
    let client = mock_client(&server);

    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("DeployedFunctions");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "shopifyFunctions": { "edges": [{ "node": constraint_function("fn-1") }] }
        })));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("query ConstraintRules");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "fulfillmentConstraintRules": []
        })));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("ConstraintRuleCreate")
            .body_contains("SHIPPING");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "fulfillmentConstraintRuleCreate": {
                "fulfillmentConstraintRule": constraint_rule("rule-1", "fn-1"),
                "userErrors": [],
            }
        })));
    });

    let registration = registration::register(&client).await.expect("register");

    assert!(registration.created);
    assert_eq!(registration.rule.id.as_str(), "rule-1");
    create_mock.assert();
}

#[tokio::test]
async fn register_is_idempotent_when_rule_exists() {
    let server = MockServer::start();
    let client = mock_client(&server);

    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("DeployedFunctions");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "shopifyFunctions": { "edges": [{ "node": constraint_function("fn-2") }] }
        })));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("query ConstraintRules");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "fulfillmentConstraintRules": [constraint_rule("rule-7", "fn-1")]
        })));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("ConstraintRuleCreate");
        then.status(200).json_body(graphql_data(serde_json::json!({})));
    });

    let registration = registration::register(&client).await.expect("register");

    // The existing rule is returned even though it points at a previous
    // deployment's function id; matching is by api type.
    assert!(!registration.created);
    assert_eq!(registration.rule.id.as_str(), "rule-7");
    assert_eq!(create_mock.hits(), 0);
}

#[tokio::test]
async fn register_fails_when_function_not_deployed() {
    let server = MockServer::start();
    let client = mock_client(&server);

    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("DeployedFunctions");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "shopifyFunctions": { "edges": [] }
        })));
    });

    let err = registration::register(&client).await.unwrap_err();

    match err {
        AppError::NotFound(message) => {
            assert!(message.contains("ensure the function is deployed"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unregister_reports_nothing_to_delete() {
    let server = MockServer::start();
    let client = mock_client(&server);

    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("query ConstraintRules");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "fulfillmentConstraintRules": []
        })));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("ConstraintRuleDelete");
        then.status(200).json_body(graphql_data(serde_json::json!({})));
    });

    let outcome = registration::unregister(&client).await.expect("unregister");

    assert!(matches!(outcome, Unregistration::NothingToDelete));
    assert_eq!(delete_mock.hits(), 0);
}

#[tokio::test]
async fn unregister_verifies_rule_is_gone_after_delete() {
    let server = MockServer::start();
    let client = mock_client(&server);

    // The registry keeps listing the rule after a delete that reported
    // success; the service must refuse to call that a removal.
    server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("query ConstraintRules");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "fulfillmentConstraintRules": [constraint_rule("rule-9", "fn-1")]
        })));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .body_contains("ConstraintRuleDelete")
            .body_contains("rule-9");
        then.status(200).json_body(graphql_data(serde_json::json!({
            "fulfillmentConstraintRuleDelete": { "success": true, "userErrors": [] }
        })));
    });

    let err = registration::unregister(&client).await.unwrap_err();

    delete_mock.assert();
    match err {
        AppError::Internal(message) => {
            assert!(message.contains("still registered"));
        }
        other => panic!("expected Internal, got {other:?}"),
    }
}
