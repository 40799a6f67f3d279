mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

async fn seed_default_contact(pool: &PgPool) {
    common::seed_contact(
        pool,
        "test",
        "test",
        Some("test"),
        Some("test@example.com"),
        Some("0899999"),
    )
    .await;
}

#[sqlx::test]
async fn test_search_without_filters(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["paging"]["current_page"], 1);
    assert_eq!(body["paging"]["total_page"], 1);
    assert_eq!(body["paging"]["size"], 10);
}

#[sqlx::test]
async fn test_search_by_name_substring(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("name", "es")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_search_by_name_is_case_insensitive(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("name", "ES")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_search_by_name_matches_last_name(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    common::seed_contact(&pool, "test", "Jane", Some("Doe"), None, None).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("name", "do")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["first_name"], "Jane");
}

#[sqlx::test]
async fn test_search_by_email_substring(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("email", ".com")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_search_by_phone_substring(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("phone", "99")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_search_filters_are_anded(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    // Name matches, phone does not: no result.
    let response = server
        .get("/api/contacts")
        .add_query_param("name", "es")
        .add_query_param("phone", "12345")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_search_without_matches_has_zero_pages(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("name", "salah")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["paging"]["current_page"], 1);
    assert_eq!(body["paging"]["total_page"], 0);
    assert_eq!(body["paging"]["size"], 10);
}

#[sqlx::test]
async fn test_search_page_past_the_end(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("page", "2")
        .add_query_param("size", "1")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["paging"]["current_page"], 2);
    assert_eq!(body["paging"]["total_page"], 1);
    assert_eq!(body["paging"]["size"], 1);
}

#[sqlx::test]
async fn test_search_paginates_in_id_order(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;

    let mut ids = Vec::new();
    for i in 0..15 {
        ids.push(common::seed_contact(&pool, "test", &format!("contact{i}"), None, None, None).await);
    }

    let server = common::test_server(pool);

    let first_page = server
        .get("/api/contacts")
        .add_header("X-API-TOKEN", "test")
        .await;

    first_page.assert_status_ok();

    let body = first_page.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["paging"]["total_page"], 2);
    assert_eq!(body["data"][0]["id"], ids[0]);
    assert_eq!(body["data"][9]["id"], ids[9]);

    let second_page = server
        .get("/api/contacts")
        .add_query_param("page", "2")
        .add_header("X-API-TOKEN", "test")
        .await;

    let body = second_page.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["paging"]["current_page"], 2);
    assert_eq!(body["data"][0]["id"], ids[10]);
}

#[sqlx::test]
async fn test_search_only_sees_own_contacts(pool: PgPool) {
    common::seed_user(&pool, "alice", "rahasia", "alice-token").await;
    common::seed_user(&pool, "bob", "rahasia", "bob-token").await;
    common::seed_contact(&pool, "alice", "test", None, None, None).await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_header("X-API-TOKEN", "bob-token")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["paging"]["total_page"], 0);
}

#[sqlx::test]
async fn test_search_rejects_page_zero(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("page", "0")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_search_rejects_oversized_page(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    let server = common::test_server(pool);

    let response = server
        .get("/api/contacts")
        .add_query_param("size", "101")
        .add_header("X-API-TOKEN", "test")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert!(body["errors"].is_string());
}

#[sqlx::test]
async fn test_search_requires_token(pool: PgPool) {
    let server = common::test_server(pool);

    let response = server.get("/api/contacts").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_deleting_a_user_cascades_to_contacts(pool: PgPool) {
    common::seed_user(&pool, "test", "rahasia", "test").await;
    seed_default_contact(&pool).await;

    sqlx::query("DELETE FROM users WHERE username = $1")
        .bind("test")
        .execute(&pool)
        .await
        .unwrap();

    let remaining =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts WHERE username = $1")
            .bind("test")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(remaining, 0);
}
