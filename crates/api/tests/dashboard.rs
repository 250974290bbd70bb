//! HTTP-level integration tests for the HTML dashboard.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_text, build_test_app, get, get_with_cookie, post, post_form, set_cookie, TestApp};
use notifier_db::models::notification::CreateNotification;
use notifier_db::NotificationStore;

async fn seed(app: &TestApp, subject: &str) -> i64 {
    app.store
        .create(&CreateNotification::new("a@b.com", subject, "body"))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn list_page_renders_with_and_without_trailing_slash() {
    let app = build_test_app();
    seed(&app, "Dashboard subject").await;

    for uri in ["/dashboard", "/dashboard/"] {
        let response = get(app.router(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let html = body_text(response).await;
        assert!(html.contains("Dashboard subject"));
        assert!(html.contains("/dashboard/send/1"));
    }
}

#[tokio::test]
async fn list_page_is_paginated_by_ten() {
    let app = build_test_app();
    for i in 1..=12 {
        seed(&app, &format!("row-{i:02}")).await;
    }

    let first = body_text(get(app.router(), "/dashboard/").await).await;
    assert!(first.contains("row-12"));
    assert!(first.contains("row-03"));
    assert!(!first.contains("row-02"));
    assert!(first.contains("/dashboard/?page=2"));

    let second = body_text(get(app.router(), "/dashboard/?page=2").await).await;
    assert!(second.contains("row-02"));
    assert!(second.contains("row-01"));
    assert!(!second.contains("row-03"));
}

#[tokio::test]
async fn create_redirects_with_flash() {
    let app = build_test_app();
    let response = post_form(
        app.router(),
        "/dashboard/",
        &[("recipientEmail", "a%40b.com"), ("subject", "Hi"), ("body", "test")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/dashboard/");
    let cookie = set_cookie(&response, "flash").unwrap();
    assert_eq!(cookie, "flash=created");
    assert_eq!(app.stored_count().await, 1);

    let page = get_with_cookie(app.router(), "/dashboard/", &cookie).await;
    assert_eq!(set_cookie(&page, "flash").as_deref(), Some("flash="));
    let html = body_text(page).await;
    assert!(html.contains("Notification created successfully."));
    assert!(html.contains("a@b.com"));
}

#[tokio::test]
async fn create_with_empty_subject_redisplays_form() {
    let app = build_test_app();
    let response = post_form(
        app.router(),
        "/dashboard/",
        &[("recipientEmail", "a%40b.com"), ("subject", ""), ("body", "kept")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("This value should not be blank."));
    assert!(html.contains("value=\"a@b.com\""));
    assert!(html.contains("kept"));
    assert_eq!(app.stored_count().await, 0);
}

#[tokio::test]
async fn create_checks_presence_only() {
    let app = build_test_app();
    let response = post_form(
        app.router(),
        "/dashboard/",
        &[("recipientEmail", "not-an-email"), ("subject", "Hi")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.stored_count().await, 1);
}

#[tokio::test]
async fn create_escapes_user_content() {
    let app = build_test_app();
    post_form(
        app.router(),
        "/dashboard/",
        &[("recipientEmail", "a%40b.com"), ("subject", "%3Cscript%3Ex%3C%2Fscript%3E")],
    )
    .await;

    let html = body_text(get(app.router(), "/dashboard/").await).await;
    assert!(!html.contains("<script>x</script>"));
    assert!(html.contains("&#60;script&#62;x&#60;/script&#62;"));
}

#[tokio::test]
async fn send_then_resend_flashes_warning() {
    let app = build_test_app();
    let id = seed(&app, "Hi").await;
    let uri = format!("/dashboard/send/{id}");

    let first = post(app.router(), &uri).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(first.headers()[LOCATION], "/dashboard/");
    assert_eq!(set_cookie(&first, "flash").as_deref(), Some("flash=sent"));

    let second = get(app.router(), &uri).await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    let cookie = set_cookie(&second, "flash").unwrap();
    assert_eq!(cookie, "flash=already_sent");

    let html = body_text(get_with_cookie(app.router(), "/dashboard/", &cookie).await).await;
    assert!(html.contains("Notification was already sent."));
    assert!(html.contains("class=\"flash flash-warning\""));
    assert!(!html.contains(&format!("/dashboard/send/{id}")));
}

#[tokio::test]
async fn send_unknown_id_renders_404_page() {
    let app = build_test_app();
    let response = post(app.router(), "/dashboard/send/77").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Notification with id 77 not found"));
}

#[tokio::test]
async fn unknown_flash_code_is_ignored() {
    let app = build_test_app();
    let response = get_with_cookie(app.router(), "/dashboard/", "flash=bogus").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains("class=\"flash"));
}
