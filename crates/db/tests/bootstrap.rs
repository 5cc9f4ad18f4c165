use sqlx::PgPool;

/// Connect, migrate, verify the schema is in place.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    explorer_db::health_check(&pool).await.unwrap();

    let columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT column_name::text, data_type::text
         FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name = 'startups'
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(
        columns,
        vec![
            ("id".to_string(), "bigint".to_string()),
            ("name".to_string(), "text".to_string()),
            ("category".to_string(), "text".to_string()),
        ]
    );
}

/// Re-running migrations on an already provisioned database is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    explorer_db::run_migrations(&pool).await.unwrap();
    explorer_db::run_migrations(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM startups")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
