//! Database test utilities backed by a shared PostgreSQL container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

use crate::database;

const USER: &str = "influencers_test";
const PASSWORD: &str = "influencers_test_password";

/// Container started once and reused by every test in the binary.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases queued for dropping once their `TestDb` goes away.
static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("influencers_test")
        .with_tag("16-alpine")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            if let Err(err) = drop_database(&db_name).await {
                eprintln!("Failed to drop test database '{db_name}': {err}");
            }
        }
    });

    sender
}

async fn server_url(db_name: &str) -> String {
    let container = POSTGRES_CONTAINER
        .get_or_init(init_postgres_container)
        .await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{db_name}")
}

async fn drop_database(db_name: &str) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(&server_url("postgres").await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// An isolated, migrated database inside the shared container.
///
/// Every test gets a fresh database, so services commit normally and there is
/// no rollback to rely on. The database is dropped in the background on `Drop`.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        // Generated from hex digits only, so it is always a safe identifier.
        let name = format!("influencers_test_{}", Uuid::now_v7().simple());

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = database::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for test database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_is_reachable_and_migrated() {
        let test_db = TestDb::new().await;

        database::ping(test_db.pool())
            .await
            .expect("Failed to ping test database");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM influencers")
            .fetch_one(test_db.pool())
            .await
            .expect("influencers table should exist after migrations");

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        sqlx::query(
            "INSERT INTO influencers (uuid, name, last_name) VALUES ($1, 'Ada', 'Lovelace')",
        )
        .bind(Uuid::now_v7())
        .execute(first.pool())
        .await
        .expect("Failed to insert into first database");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM influencers")
            .fetch_one(second.pool())
            .await
            .expect("Failed to count rows in second database");

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_check_constraints_reject_out_of_bounds_names() {
        let test_db = TestDb::new().await;

        let result = sqlx::query(
            "INSERT INTO influencers (uuid, name, last_name) VALUES ($1, 'A', 'Lovelace')",
        )
        .bind(Uuid::now_v7())
        .execute(test_db.pool())
        .await;

        assert!(result.is_err(), "one character name should violate CHECK");
    }

    #[tokio::test]
    async fn test_updates_refresh_updated_at() {
        let test_db = TestDb::new().await;
        let uuid = Uuid::now_v7();

        sqlx::query("INSERT INTO influencers (uuid, name, last_name) VALUES ($1, 'Ada', 'Lovelace')")
            .bind(uuid)
            .execute(test_db.pool())
            .await
            .expect("Failed to insert influencer");

        let changed: bool = sqlx::query_scalar(
            "UPDATE influencers SET name = 'Augusta' WHERE uuid = $1 \
             RETURNING updated_at > created_at",
        )
        .bind(uuid)
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to update influencer");

        assert!(changed, "updated_at should move forward on update");
    }
}
