//! Storage bootstrap: connection URL resolution, pool setup, and table DDL.

use crate::error::AppError;
use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, ConnectOptions};
use std::str::FromStr;
use std::sync::Once;

/// Storage backend, decided by the connection URL scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Sqlite,
}

impl StorageBackend {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("postgres") {
            StorageBackend::Postgres
        } else {
            StorageBackend::Sqlite
        }
    }
}

/// Connection URL from `DATABASE_URL`, falling back to a file-backed SQLite
/// database next to the process (`mode=rwc` creates it on first run).
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://holocron.db?mode=rwc".into())
}

static DRIVERS: Once = Once::new();

/// Register the compiled-in `Any` drivers. Required once per process before
/// any connection is opened.
pub fn install_default_drivers() {
    DRIVERS.call_once(sqlx::any::install_default_drivers);
}

pub async fn connect_pool(url: &str) -> Result<AnyPool, AppError> {
    install_default_drivers();
    let pool = AnyPoolOptions::new().max_connections(5).connect(url).await?;
    Ok(pool)
}

/// Ensure the database named in a PostgreSQL URL exists; create it if not.
/// Connects to the default `postgres` database to run CREATE DATABASE. No-op
/// for SQLite. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if StorageBackend::from_url(database_url) != StorageBackend::Postgres {
        return Ok(());
    }
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Validation(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Validation("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Create the catalog tables if missing. UNIQUE constraints back the
/// write-time invariants: users.email, users.username, and the favorite
/// (user_id, favorite_type, favorite_id) triple.
pub async fn ensure_tables(pool: &AnyPool, backend: StorageBackend) -> Result<(), AppError> {
    let id_column = match backend {
        StorageBackend::Postgres => "BIGSERIAL PRIMARY KEY",
        StorageBackend::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
    };
    let ddl = [
        format!(
            "CREATE TABLE IF NOT EXISTS users (\
             id {}, \
             email TEXT NOT NULL UNIQUE, \
             password TEXT NOT NULL, \
             is_active BOOLEAN NOT NULL DEFAULT TRUE, \
             username TEXT UNIQUE)",
            id_column
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS planets (\
             id {}, \
             name TEXT NOT NULL, \
             climate TEXT NOT NULL, \
             terrain TEXT NOT NULL, \
             gravity TEXT NOT NULL, \
             population TEXT NOT NULL)",
            id_column
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS characters (\
             id {}, \
             name TEXT NOT NULL, \
             skin_color TEXT NOT NULL, \
             mass TEXT NOT NULL, \
             height TEXT NOT NULL)",
            id_column
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS starships (\
             id {}, \
             name TEXT NOT NULL, \
             model TEXT NOT NULL, \
             crew TEXT NOT NULL, \
             length TEXT NOT NULL, \
             starship_class TEXT NOT NULL)",
            id_column
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS favorites (\
             id {}, \
             user_id BIGINT NOT NULL, \
             favorite_type TEXT NOT NULL, \
             favorite_id BIGINT NOT NULL, \
             created_at TEXT NOT NULL, \
             UNIQUE (user_id, favorite_type, favorite_id))",
            id_column
        ),
    ];
    for sql in &ddl {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(
            StorageBackend::from_url("postgres://localhost/holocron"),
            StorageBackend::Postgres
        );
        assert_eq!(
            StorageBackend::from_url("postgresql://localhost/holocron"),
            StorageBackend::Postgres
        );
        assert_eq!(
            StorageBackend::from_url("sqlite://holocron.db?mode=rwc"),
            StorageBackend::Sqlite
        );
    }

    #[test]
    fn admin_url_points_at_postgres_database() {
        let (admin, name) =
            parse_db_name_from_url("postgres://app:secret@db:5432/holocron?sslmode=disable")
                .unwrap();
        assert_eq!(admin, "postgres://app:secret@db:5432/postgres");
        assert_eq!(name, "holocron");
    }
}
