//! Schema bootstrap tests: connect, create tables, verify idempotency.

use sqlx::PgPool;

/// Full bootstrap: the five tables exist after `ensure_schema`.
#[sqlx::test]
async fn ensure_schema_creates_all_tables(pool: PgPool) {
    collabhive_db::health_check(&pool).await.unwrap();
    collabhive_db::ensure_schema(&pool).await.unwrap();

    let tables = [
        "projects",
        "members",
        "tasks",
        "documents",
        "chat_messages",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should exist and start empty");
    }
}

/// Running the bootstrap twice is a no-op, and existing data survives.
#[sqlx::test]
async fn ensure_schema_is_idempotent(pool: PgPool) {
    collabhive_db::ensure_schema(&pool).await.unwrap();

    sqlx::query("INSERT INTO members (name, email, role) VALUES ('A', 'a@example.com', 'dev')")
        .execute(&pool)
        .await
        .unwrap();

    collabhive_db::ensure_schema(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

/// The unique-violation classifier recognizes a duplicate email error
/// and nothing else.
#[sqlx::test]
async fn unique_violation_is_classified(pool: PgPool) {
    collabhive_db::ensure_schema(&pool).await.unwrap();

    sqlx::query("INSERT INTO members (name, email, role) VALUES ('A', 'dup@example.com', 'dev')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query(
        "INSERT INTO members (name, email, role) VALUES ('B', 'dup@example.com', 'dev')",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(collabhive_db::is_unique_violation(&err));

    let other = sqlx::query("SELECT * FROM no_such_table")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(!collabhive_db::is_unique_violation(&other));
}
