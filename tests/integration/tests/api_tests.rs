//! API Integration Tests
//!
//! Every test spawns a server on an ephemeral port over the in-memory store.
//! Tests prefixed `test_postgres_` additionally require a PostgreSQL instance
//! at `DATABASE_URL` and are skipped when it is unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{DateTime, Utc};
use integration_tests::{
    assert_json, assert_status, check_postgres_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
}

async fn create_member(server: &TestServer, request: &CreateMemberRequest) -> MemberResponse {
    let response = server.post("/members", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_reflects_store() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.memory_store().fail_with("connection refused");
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["checks"]["store"], "unhealthy");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_create_member_defaults() {
    let server = TestServer::start().await.unwrap();
    let request = CreateMemberRequest::unique();

    let member = create_member(&server, &request).await;

    assert_eq!(Some(member.nickname), request.nickname);
    assert_eq!(member.status, "active");
    assert_eq!(member.join_date, today());
    assert!(Uuid::parse_str(&member.id).is_ok());
}

#[tokio::test]
async fn test_create_member_requires_all_names() {
    let server = TestServer::start().await.unwrap();
    let request = CreateMemberRequest {
        roblox_username: None,
        ..CreateMemberRequest::unique()
    };

    let response = server.post("/members", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(
        error.error,
        "Missing required fields: nickname, discord_username, roblox_username"
    );
    assert_eq!(error.code, "MISSING_FIELDS");
    assert_eq!(server.memory_store().member_count(), 0);
}

#[tokio::test]
async fn test_list_members_newest_join_first() {
    let server = TestServer::start().await.unwrap();
    for date in ["2023-05-01", "2024-05-01", "2022-05-01"] {
        create_member(&server, &CreateMemberRequest::joined(date)).await;
    }

    let response = server.get("/api/members").await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let dates: Vec<&str> = members.iter().map(|m| m.join_date.as_str()).collect();
    assert_eq!(dates, vec!["2024-05-01", "2023-05-01", "2022-05-01"]);
}

#[tokio::test]
async fn test_update_member_keeps_blank_fields() {
    let server = TestServer::start().await.unwrap();
    let member = create_member(&server, &CreateMemberRequest::unique()).await;

    let update = UpdateMemberRequest {
        nickname: Some(String::new()),
        discord_username: Some("renamed#0002".to_string()),
        roblox_username: None,
        status: Some("inactive".to_string()),
    };
    let response = server.put(&format!("/members/{}", member.id), &update).await.unwrap();
    let updated: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.nickname, member.nickname);
    assert_eq!(updated.discord_username, "renamed#0002");
    assert_eq!(updated.roblox_username, member.roblox_username);
    assert_eq!(updated.status, "inactive");
    assert_eq!(updated.created_at, member.created_at);
    assert!(parse_timestamp(&updated.updated_at) >= parse_timestamp(&member.updated_at));
}

#[tokio::test]
async fn test_update_unknown_member_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let update = UpdateMemberRequest {
        status: Some("inactive".to_string()),
        ..UpdateMemberRequest::default()
    };

    let response = server
        .put(&format!("/members/{}", Uuid::new_v4()), &update)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Member not found");
}

#[tokio::test]
async fn test_delete_member_is_idempotent() {
    let server = TestServer::start().await.unwrap();
    let member = create_member(&server, &CreateMemberRequest::unique()).await;

    for _ in 0..2 {
        let response = server.delete(&format!("/members/{}", member.id)).await.unwrap();
        let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.message, "Member deleted successfully");
    }
    assert_eq!(server.memory_store().member_count(), 0);
}

#[tokio::test]
async fn test_member_stats() {
    let server = TestServer::start().await.unwrap();
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(create_member(&server, &CreateMemberRequest::unique()).await.id);
    }
    let update = UpdateMemberRequest {
        status: Some("inactive".to_string()),
        ..UpdateMemberRequest::default()
    };
    server.put(&format!("/members/{}", ids[0]), &update).await.unwrap();

    let response = server.get("/members/stats").await.unwrap();
    let stats: MemberStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        stats,
        MemberStatsResponse {
            total: 3,
            active: 2,
            inactive: 1,
            active_percent: 67,
        }
    );
}

// ============================================================================
// Violation Tests
// ============================================================================

#[tokio::test]
async fn test_violation_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let member = create_member(&server, &CreateMemberRequest::unique()).await;

    // A caller-supplied date is ignored
    let request = CreateViolationRequest {
        violation_date: Some("2000-01-01".to_string()),
        ..CreateViolationRequest::template(&member.id, "Cheating")
    };
    let response = server.post("/violations", &request).await.unwrap();
    let violation: ViolationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(violation.severity, "medium");
    assert_eq!(violation.violation_date, today());
    assert_eq!(violation.custom_violation_name, None);

    let response = server.get("/violations").await.unwrap();
    let all: Vec<ViolationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 1);

    let response = server.delete(&format!("/violations/{}", violation.id)).await.unwrap();
    let deleted: DeleteCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.message, "Violation deleted successfully");
    assert_eq!(deleted.count, 1);

    let response = server.delete(&format!("/violations/{}", violation.id)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "Violation record not found");
}

#[tokio::test]
async fn test_violation_unknown_template_rejected() {
    let server = TestServer::start().await.unwrap();
    let member_id = Uuid::new_v4().to_string();

    let response = server
        .post("/violations", &CreateViolationRequest::template(&member_id, "Jaywalking"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(server.memory_store().violation_count(), 0);
}

#[tokio::test]
async fn test_violation_feed_attaches_nicknames() {
    let server = TestServer::start().await.unwrap();
    let member = create_member(&server, &CreateMemberRequest::unique()).await;
    let orphan = Uuid::new_v4().to_string();

    for member_id in [member.id.as_str(), orphan.as_str()] {
        let response = server
            .post("/violations", &CreateViolationRequest::custom(member_id, "Griefing", "high"))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/violations/feed").await.unwrap();
    let feed: Vec<ViolationFeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 2);
    for item in &feed {
        let expected = if item.violation.member_id == member.id {
            member.nickname.as_str()
        } else {
            "Unknown"
        };
        assert_eq!(item.nickname, expected);
        assert_eq!(item.violation.severity, "high");
    }
}

#[tokio::test]
async fn test_violation_templates() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/violations/templates").await.unwrap();
    let templates: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        templates,
        vec!["Inactive", "Rule Breaking", "Toxic Behavior", "Spam", "Cheating"]
    );
}

// ============================================================================
// Departure Tests
// ============================================================================

#[tokio::test]
async fn test_departure_records_tenure() {
    let server = TestServer::start().await.unwrap();
    let member = create_member(&server, &CreateMemberRequest::joined("2024-01-01")).await;

    let response = server
        .post(
            "/departures",
            &CreateDepartureRequest::new(&member.id, "Moved on", Some("2024-03-01")),
        )
        .await
        .unwrap();
    let departure: DepartureResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(departure.tenure_days, 60);

    let response = server.get("/departures/feed").await.unwrap();
    let feed: Vec<DepartureFeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].nickname, member.nickname);
    assert_eq!(feed[0].join_date, "2024-01-01");
    assert_eq!(feed[0].tenure_label, "2 months");
}

#[tokio::test]
async fn test_departure_unknown_member() {
    let server = TestServer::start().await.unwrap();
    let orphan = Uuid::new_v4().to_string();

    let response = server
        .post("/departures", &CreateDepartureRequest::new(&orphan, "Vanished", None))
        .await
        .unwrap();
    let departure: DepartureResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(departure.tenure_days, 0);
    assert_eq!(departure.departed_at, today());

    let response = server.get("/departures/feed").await.unwrap();
    let feed: Vec<DepartureFeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed[0].nickname, "Unknown");
    assert_eq!(feed[0].tenure_label, "0 days");
}

#[tokio::test]
async fn test_departure_missing_fields() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/departures", &json!({"member_id": Uuid::new_v4().to_string()}))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Missing required fields: member_id, departure_reason");
    assert_eq!(server.memory_store().departure_count(), 0);
}

// ============================================================================
// Store Failure Tests
// ============================================================================

#[tokio::test]
async fn test_store_failure_is_relayed() {
    let server = TestServer::start().await.unwrap();
    server.memory_store().fail_with("duplicate key value violates unique constraint");

    let response = server.post("/members", &CreateMemberRequest::unique()).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "duplicate key value violates unique constraint");
    assert_eq!(error.code, "STORE_ERROR");

    server.memory_store().clear_failure();
    let response = server.get("/members").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_member_roundtrip() {
    if !check_postgres_env() {
        return;
    }

    let server = TestServer::start_postgres().await.expect("Failed to start server");
    let member = create_member(&server, &CreateMemberRequest::joined("2024-01-01")).await;

    let response = server
        .post(
            "/departures",
            &CreateDepartureRequest::new(&member.id, "Moved on", Some("2024-03-01")),
        )
        .await
        .unwrap();
    let departure: DepartureResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(departure.tenure_days, 60);

    let response = server.delete(&format!("/members/{}", member.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
