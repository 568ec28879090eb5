//! Integration tests for the resource facades.
//!
//! Each test checks that a facade method hits the right verb and path,
//! forwards bodies and filters untouched, and returns the envelope as-is.

mod common;

use httpmock::prelude::*;
use httpmock::Method::PATCH;
use rw_api::endpoints::messages::{EmailAddress, SendMessageParams};
use rw_api::endpoints::usage::DailyUsageQuery;
use rw_api::ListParams;
use serde_json::json;

use common::{api_path, create_test_client};

// ---- Identity & projects ----

#[tokio::test]
async fn identity_me() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/me"));
            then.status(200).json_body(json!({"data": {"id": "user-1", "email": "a@example.com"}}));
        })
        .await;

    let client = create_test_client(&server);
    let me = client.identity().me().await.unwrap();
    assert_eq!(me["data"]["id"], "user-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn projects_crud() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/projects"))
                .query_param("page", "1")
                .query_param("per_page", "25");
            then.status(200).json_body(json!({
                "data": [{"id": "p-1"}],
                "meta": {"current_page": 1, "per_page": 25, "total": 1}
            }));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/projects"))
                .json_body(json!({"name": "Transactional"}));
            then.status(201).json_body(json!({"data": {"id": "p-2", "name": "Transactional"}}));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(api_path("/projects/p-2"))
                .json_body(json!({"name": "Receipts"}));
            then.status(200).json_body(json!({"data": {"id": "p-2", "name": "Receipts"}}));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path(api_path("/projects/p-2"));
            then.status(204);
        })
        .await;

    let client = create_test_client(&server);
    let projects = client.projects();

    let page = projects.list(&ListParams::page(1, 25)).await.unwrap();
    assert_eq!(page["meta"]["total"], 1);

    let created = projects.create(&json!({"name": "Transactional"})).await.unwrap();
    assert_eq!(created["data"]["id"], "p-2");

    let updated = projects.update("p-2", &json!({"name": "Receipts"})).await.unwrap();
    assert_eq!(updated["data"]["name"], "Receipts");

    projects.delete("p-2").await.unwrap();

    list.assert_async().await;
    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

// ---- Service accounts ----

#[tokio::test]
async fn service_account_tokens() {
    let server = MockServer::start_async().await;
    let create_token = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/service-accounts/sa-1/tokens"))
                .json_body(json!({"name": "ci"}));
            then.status(201).json_body(json!({"data": {"id": "tok-1", "token": "secret"}}));
        })
        .await;
    let delete_token = server
        .mock_async(|when, then| {
            when.method(DELETE).path(api_path("/tokens/tok-1"));
            then.status(204);
        })
        .await;

    let client = create_test_client(&server);
    let token = client
        .service_accounts()
        .create_token("sa-1", &json!({"name": "ci"}))
        .await
        .unwrap();
    assert_eq!(token["data"]["token"], "secret");
    client.service_accounts().delete_token("tok-1").await.unwrap();

    create_token.assert_async().await;
    delete_token.assert_async().await;
}

// ---- Domains & senders ----

#[tokio::test]
async fn domain_actions_post_empty_objects() {
    let server = MockServer::start_async().await;
    let mut mocks = Vec::new();
    for suffix in ["verify", "dkim/rotate", "enable-production"] {
        let path = api_path(&format!("/domains/d-1/{suffix}"));
        mocks.push(
            server
                .mock_async(|when, then| {
                    when.method(POST).path(path).json_body(json!({}));
                    then.status(200).json_body(json!({"data": {"id": "d-1"}}));
                })
                .await,
        );
    }

    let client = create_test_client(&server);
    let domains = client.domains();
    domains.verify("d-1").await.unwrap();
    domains.rotate_dkim("d-1").await.unwrap();
    domains.enable_production("d-1").await.unwrap();

    for mock in &mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn domain_dns_records_and_checks() {
    let server = MockServer::start_async().await;
    let records = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/domains/d-1/dns-records"));
            then.status(200).json_body(json!({"data": [{"type": "TXT"}]}));
        })
        .await;
    let checks = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/domains/d-1/checks"));
            then.status(200).json_body(json!({"data": {"spf": "pass"}}));
        })
        .await;

    let client = create_test_client(&server);
    let dns = client.domains().get_dns_records("d-1").await.unwrap();
    assert_eq!(dns["data"][0]["type"], "TXT");
    let result = client.domains().get_checks("d-1").await.unwrap();
    assert_eq!(result["data"]["spf"], "pass");

    records.assert_async().await;
    checks.assert_async().await;
}

#[tokio::test]
async fn sender_verify() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/senders/s-1/verify"));
            then.status(202).json_body(json!({"data": {"status": "pending"}}));
        })
        .await;

    let client = create_test_client(&server);
    let result = client.senders().verify("s-1").await.unwrap();
    assert_eq!(result["data"]["status"], "pending");
    mock.assert_async().await;
}

// ---- Templates ----

#[tokio::test]
async fn template_versions_and_render() {
    let server = MockServer::start_async().await;
    let versions = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/templates/t-1/versions"))
                .query_param("per_page", "10");
            then.status(200).json_body(json!({"data": [{"version": 3}]}));
        })
        .await;
    let render = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/templates/t-1/render"))
                .json_body(json!({"variables": {"name": "Ada"}}));
            then.status(200).json_body(json!({"data": {"html": "<p>Hi Ada</p>"}}));
        })
        .await;
    let test_send = server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/templates/t-1/test-send"));
            then.status(202).json_body(json!({"data": {"queued": true}}));
        })
        .await;

    let client = create_test_client(&server);
    let templates = client.templates();

    let listed = templates
        .list_versions("t-1", &[("per_page", "10")])
        .await
        .unwrap();
    assert_eq!(listed["data"][0]["version"], 3);

    let rendered = templates
        .render("t-1", &json!({"variables": {"name": "Ada"}}))
        .await
        .unwrap();
    assert_eq!(rendered["data"]["html"], "<p>Hi Ada</p>");

    templates
        .test_send("t-1", &json!({"to": "qa@example.com"}))
        .await
        .unwrap();

    versions.assert_async().await;
    render.assert_async().await;
    test_send.assert_async().await;
}

// ---- Messages ----

#[tokio::test]
async fn message_send_with_idempotency_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/messages"))
                .header("idempotency-key", "order-42")
                .header("x-project-id", "project-123")
                .json_body(json!({
                    "from": {"email": "noreply@example.com"},
                    "to": [{"email": "user@example.com"}],
                    "subject": "Test",
                    "html": "<h1>Test</h1>"
                }));
            then.status(202).json_body(json!({
                "data": {"message_id": "msg-123", "status": "accepted"},
                "meta": {"request_id": "req-123"}
            }));
        })
        .await;

    let mut client = create_test_client(&server);
    client.set_project_id(Some("project-123".into()));

    let params = SendMessageParams {
        from: Some(EmailAddress::new("noreply@example.com")),
        to: vec![EmailAddress::new("user@example.com")],
        subject: Some("Test".into()),
        html: Some("<h1>Test</h1>".into()),
        ..Default::default()
    };
    let result = client.messages().send(&params, Some("order-42")).await.unwrap();

    assert_eq!(result["data"]["message_id"], "msg-123");
    mock.assert_async().await;
}

#[tokio::test]
async fn message_lifecycle_endpoints() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/messages"))
                .query_param("status", "delivered");
            then.status(200).json_body(json!({
                "data": [{"id": "msg-1", "subject": "Test 1"}],
                "meta": {"current_page": 1, "per_page": 25, "total": 1}
            }));
        })
        .await;
    let timeline = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/messages/msg-1/timeline"));
            then.status(200).json_body(json!({"data": [{"event": "delivered"}]}));
        })
        .await;
    let cancel = server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/messages/msg-1/cancel"));
            then.status(200).json_body(json!({"data": {"status": "cancelled"}}));
        })
        .await;
    let resend = server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/messages/msg-1/resend"));
            then.status(202).json_body(json!({"data": {"message_id": "msg-2"}}));
        })
        .await;

    let client = create_test_client(&server);
    let messages = client.messages();

    let page = messages.list(&[("status", "delivered")]).await.unwrap();
    assert!(page["data"].is_array());
    let events = messages.get_timeline("msg-1").await.unwrap();
    assert_eq!(events["data"][0]["event"], "delivered");
    let cancelled = messages.cancel("msg-1").await.unwrap();
    assert_eq!(cancelled["data"]["status"], "cancelled");
    let resent = messages.resend("msg-1").await.unwrap();
    assert_eq!(resent["data"]["message_id"], "msg-2");

    list.assert_async().await;
    timeline.assert_async().await;
    cancel.assert_async().await;
    resend.assert_async().await;
}

// ---- Events, webhooks, audit logs ----

#[tokio::test]
async fn event_and_audit_log_lookup() {
    let server = MockServer::start_async().await;
    let event = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/events/evt-1"));
            then.status(200).json_body(json!({"data": {"id": "evt-1", "type": "bounce"}}));
        })
        .await;
    let audit = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/audit-logs"))
                .query_param("actor", "user-1");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let client = create_test_client(&server);
    let found = client.events().get("evt-1").await.unwrap();
    assert_eq!(found["data"]["type"], "bounce");
    client
        .audit_logs()
        .list(&json!({"actor": "user-1"}))
        .await
        .unwrap();

    event.assert_async().await;
    audit.assert_async().await;
}

#[tokio::test]
async fn webhook_endpoints_and_deliveries() {
    let server = MockServer::start_async().await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(api_path("/webhooks/endpoints/wh-1"))
                .json_body(json!({"enabled": false}));
            then.status(200).json_body(json!({"data": {"id": "wh-1", "enabled": false}}));
        })
        .await;
    let deliveries = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/webhooks/endpoints/wh-1/deliveries"));
            then.status(200).json_body(json!({"data": [{"id": "del-1"}]}));
        })
        .await;
    let test = server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/webhooks/endpoints/wh-1/test"));
            then.status(202).json_body(json!({"data": {"delivery_id": "del-2"}}));
        })
        .await;
    let replay = server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/webhooks/deliveries/del-1/replay"));
            then.status(202).json_body(json!({"data": {"delivery_id": "del-3"}}));
        })
        .await;

    let client = create_test_client(&server);
    let webhooks = client.webhooks();

    webhooks
        .update_endpoint("wh-1", &json!({"enabled": false}))
        .await
        .unwrap();
    let listed = webhooks.list_deliveries("wh-1", &()).await.unwrap();
    assert_eq!(listed["data"][0]["id"], "del-1");
    webhooks.test_endpoint("wh-1").await.unwrap();
    let replayed = webhooks.replay_delivery("del-1").await.unwrap();
    assert_eq!(replayed["data"]["delivery_id"], "del-3");

    update.assert_async().await;
    deliveries.assert_async().await;
    test.assert_async().await;
    replay.assert_async().await;
}

// ---- Suppressions ----

#[tokio::test]
async fn suppression_export_returns_raw_csv() {
    let csv = "email,reason,created_at\nbounce@example.com,hard_bounce,2026-10-01\n";

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/suppressions/export"))
                .header("accept", "text/csv");
            then.status(200).header("content-type", "text/csv").body(csv);
        })
        .await;

    let client = create_test_client(&server);
    let exported = client.suppressions().export().await.unwrap();

    assert_eq!(exported, csv);
    mock.assert_async().await;
}

#[tokio::test]
async fn suppression_import_and_delete() {
    let server = MockServer::start_async().await;
    let import = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/suppressions/import"))
                .json_body(json!({"emails": ["a@example.com", "b@example.com"], "reason": "manual"}));
            then.status(202).json_body(json!({"data": {"imported": 2}}));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path(api_path("/suppressions/sup-1"));
            then.status(204);
        })
        .await;

    let client = create_test_client(&server);
    let result = client
        .suppressions()
        .import(&json!({"emails": ["a@example.com", "b@example.com"], "reason": "manual"}))
        .await
        .unwrap();
    assert_eq!(result["data"]["imported"], 2);
    client.suppressions().delete("sup-1").await.unwrap();

    import.assert_async().await;
    delete.assert_async().await;
}

// ---- Usage & compliance ----

#[tokio::test]
async fn daily_usage_with_date_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/usage/daily"))
                .query_param("from", "2026-10-01")
                .query_param("to", "2026-10-18");
            then.status(200).json_body(json!({"data": [{"date": "2026-10-01", "sent": 10}]}));
        })
        .await;

    let client = create_test_client(&server);
    let query = DailyUsageQuery::between(
        chrono::NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
    );
    let usage = client.usage().get_daily(&query).await.unwrap();
    assert_eq!(usage["data"][0]["sent"], 10);
    mock.assert_async().await;
}

#[tokio::test]
async fn compliance_retention() {
    let server = MockServer::start_async().await;
    let get = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/compliance/retention"));
            then.status(200).json_body(json!({"data": {"message_days": 30}}));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(api_path("/compliance/retention"))
                .json_body(json!({"message_days": 90}));
            then.status(200).json_body(json!({"data": {"message_days": 90}}));
        })
        .await;
    let export_config = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/compliance/exports/config"));
            then.status(200).json_body(json!({"data": {"format": "jsonl"}}));
        })
        .await;

    let client = create_test_client(&server);
    let compliance = client.compliance();

    assert_eq!(compliance.get_retention().await.unwrap()["data"]["message_days"], 30);
    let updated = compliance
        .update_retention(&json!({"message_days": 90}))
        .await
        .unwrap();
    assert_eq!(updated["data"]["message_days"], 90);
    assert_eq!(compliance.get_export_config().await.unwrap()["data"]["format"], "jsonl");

    get.assert_async().await;
    update.assert_async().await;
    export_config.assert_async().await;
}

// ---- Config file ----

#[tokio::test]
async fn client_from_saved_config_file() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/limits"))
                .header("authorization", "Bearer file-token")
                .header("x-team-id", "team-9");
            then.status(200).json_body(json!({"data": {"daily": 1000}}));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = rw_core::ClientConfig::new(server.url(common::PREFIX), "file-token");
    config.team_id = Some("team-9".into());
    config.save_to_file(&path).unwrap();

    let loaded = rw_core::ClientConfig::load_from_file(&path).unwrap();
    let client = rw_api::ApiClient::from_config(&loaded).unwrap();
    let limits = client.usage().get_limits().await.unwrap();

    assert_eq!(limits["data"]["daily"], 1000);
    mock.assert_async().await;
}
