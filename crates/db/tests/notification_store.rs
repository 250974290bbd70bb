//! Integration tests for the Postgres notification store.
//!
//! These need a reachable database (`DATABASE_URL`) and are ignored by
//! default; run them with `cargo test -p notifier-db -- --ignored`.

use assert_matches::assert_matches;
use notifier_db::models::notification::CreateNotification;
use notifier_db::models::status::NotificationStatus;
use notifier_db::{NotificationRepo, NotificationStore, PgNotificationStore, SendOutcome, StoreError};
use sqlx::PgPool;

fn new_notification(subject: &str) -> CreateNotification {
    CreateNotification::new("a@b.com", subject, "body")
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn create_returns_pending_row(pool: PgPool) {
    let store = PgNotificationStore::new(pool);

    let created = store.create(&new_notification("Hi")).await.unwrap();

    assert_eq!(created.status, NotificationStatus::Pending);
    assert_eq!(created.recipient_email, "a@b.com");
    assert!(created.sent_at.is_none());
    assert_eq!(store.get(created.id).await.unwrap(), created);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_orders_newest_first(pool: PgPool) {
    let store = PgNotificationStore::new(pool);
    for i in 0..12 {
        store.create(&new_notification(&format!("s{i}"))).await.unwrap();
    }

    let page = store.list_page(5, 5).await.unwrap();
    let subjects: Vec<_> = page.iter().map(|n| n.subject.as_str()).collect();
    assert_eq!(subjects, ["s6", "s5", "s4", "s3", "s2"]);
    assert_eq!(store.count().await.unwrap(), 12);
    assert!(store.list_page(100, 5).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn mark_sent_is_compare_and_set(pool: PgPool) {
    let store = PgNotificationStore::new(pool.clone());
    let created = store.create(&new_notification("Hi")).await.unwrap();

    let first = store.mark_sent(created.id).await.unwrap();
    let sent_at = assert_matches!(&first, SendOutcome::Sent(n) => n.sent_at);
    assert!(sent_at.is_some());

    let second = store.mark_sent(created.id).await.unwrap();
    assert_matches!(&second, SendOutcome::AlreadySent(n) => assert_eq!(n.sent_at, sent_at));

    // The raw guarded update reports nothing once the row is sent.
    assert!(NotificationRepo::mark_sent(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn unknown_id_is_not_found(pool: PgPool) {
    let store = PgNotificationStore::new(pool);

    assert_matches!(store.get(999).await, Err(StoreError::NotFound { id: 999 }));
    assert_matches!(store.mark_sent(999).await, Err(StoreError::NotFound { id: 999 }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn check_constraint_rejects_sent_without_timestamp(pool: PgPool) {
    let store = PgNotificationStore::new(pool.clone());
    let created = store.create(&new_notification("Hi")).await.unwrap();

    let result = sqlx::query("UPDATE notifications SET status_id = 2 WHERE id = $1")
        .bind(created.id)
        .execute(&pool)
        .await;

    assert!(result.is_err(), "sent rows must carry sent_at");
}
