//! PostgreSQL storage backend.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::domain::entities::{BatchInput, BatchOutput, Link, User};
use crate::domain::errors::{BatchError, StorageError};
use crate::domain::repositories::Storage;

/// PostgreSQL storage for links, users and their associations.
///
/// No application-level lock is taken: concurrent writers are resolved by the
/// unique constraints on `links.long_url`, `links.short_url` and
/// `user_links (user_id, link_id)`.
pub struct PgStorage {
    pool: Arc<PgPool>,
}

impl PgStorage {
    /// Creates a new storage with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to `dsn` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the pool cannot be established
    /// and [`StorageError::Migration`] if the schema cannot be applied.
    pub async fn connect(dsn: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(dsn)
            .await?;
        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(Arc::new(pool)))
    }

    /// Returns the id of the row holding `link`'s code.
    ///
    /// A row that holds the code for another URL is a hash collision.
    async fn find_link_id(&self, link: &Link) -> Result<Option<i32>, StorageError> {
        let row = sqlx::query_as::<_, (i32, String)>(
            "SELECT id, long_url FROM links WHERE short_url = $1",
        )
        .bind(&link.short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some((_, stored)) if stored != link.long_url => {
                Err(StorageError::hash_collision(link.short_code.as_str()))
            }
            Some((id, _)) => Ok(Some(id)),
            None => Ok(None),
        }
    }

    /// Inserts `link` unless its long URL is already stored.
    ///
    /// Returns `false` when the insert was a no-op.
    async fn insert_link(&self, link: &Link) -> Result<bool, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (short_url, long_url, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (long_url) DO NOTHING
            "#,
        )
        .bind(&link.short_code)
        .bind(&link.long_url)
        .bind(link.created_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| insert_error(e, link))?;

        Ok(result.rows_affected() > 0)
    }

    /// Saves `link` and associates it with `user_id`.
    ///
    /// An existing row still gets linked to the user, so a second user saving
    /// the same URL sees it in their list.
    async fn insert_link_for_user(&self, link: &Link, user_id: &str) -> Result<bool, StorageError> {
        let (link_id, existed) = match self.find_link_id(link).await? {
            Some(id) => (id, true),
            None => {
                let inserted = sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO links (short_url, long_url, created_at)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (long_url) DO NOTHING
                    RETURNING id
                    "#,
                )
                .bind(&link.short_code)
                .bind(&link.long_url)
                .bind(link.created_at)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| insert_error(e, link))?;

                match inserted {
                    Some(id) => (id, false),
                    // Lost a race with a concurrent insert of the same URL.
                    None => match self.find_link_id(link).await? {
                        Some(id) => (id, true),
                        None => return Err(StorageError::Database(sqlx::Error::RowNotFound)),
                    },
                }
            }
        };

        sqlx::query("INSERT INTO users (uuid) VALUES ($1) ON CONFLICT (uuid) DO NOTHING")
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        sqlx::query(
            r#"
            INSERT INTO user_links (user_id, link_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, link_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(link_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(!existed)
    }
}

/// The only unique index an insert into `links` can still violate after
/// `ON CONFLICT (long_url)` is the one on `short_url`.
fn insert_error(err: sqlx::Error, link: &Link) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::hash_collision(link.short_code.as_str())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn save_long_url(
        &self,
        long_url: &str,
        user_id: Option<String>,
    ) -> Result<String, StorageError> {
        let link = Link::new(long_url);

        let created = match user_id.as_deref() {
            Some(user_id) => self.insert_link_for_user(&link, user_id).await?,
            None => self.insert_link(&link).await?,
        };

        if created {
            tracing::debug!(short_code = %link.short_code, "Saved link to database");
            Ok(link.short_code)
        } else {
            Err(StorageError::link_exists(link.short_code))
        }
    }

    async fn get_long_url(&self, short_code: &str) -> Result<Option<String>, StorageError> {
        let long_url =
            sqlx::query_scalar::<_, String>("SELECT long_url FROM links WHERE short_url = $1")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url)
    }

    async fn create_user(&self) -> Result<String, StorageError> {
        let user = User::generate();

        sqlx::query("INSERT INTO users (uuid) VALUES ($1) ON CONFLICT (uuid) DO NOTHING")
            .bind(&user.id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(user.id)
    }

    async fn get_user_links(&self, user_id: &str) -> Result<Option<Vec<String>>, StorageError> {
        let codes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT l.short_url
            FROM user_links ul
            JOIN links l ON l.id = ul.link_id
            WHERE ul.user_id = $1
            ORDER BY ul.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok((!codes.is_empty()).then_some(codes))
    }

    /// Inserts every record in a single statement.
    ///
    /// Records whose long URL already exists are skipped by
    /// `ON CONFLICT DO NOTHING`. No user association is recorded on this path.
    async fn save_batch(&self, records: &[BatchInput]) -> Result<Vec<BatchOutput>, BatchError> {
        let links: Vec<Link> = records
            .iter()
            .map(|record| Link::new(record.original_url.as_str()))
            .collect();

        let short_codes: Vec<String> = links.iter().map(|l| l.short_code.clone()).collect();
        let long_urls: Vec<String> = links.iter().map(|l| l.long_url.clone()).collect();

        sqlx::query(
            r#"
            INSERT INTO links (short_url, long_url)
            SELECT * FROM UNNEST($1::varchar[], $2::varchar[])
            ON CONFLICT (long_url) DO NOTHING
            "#,
        )
        .bind(short_codes)
        .bind(long_urls)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| BatchError::new(e.into(), Vec::new()))?;

        Ok(records
            .iter()
            .zip(links)
            .map(|(record, link)| BatchOutput {
                correlation_id: record.correlation_id.clone(),
                short_url: link.short_code,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn delete_link(&self, long_url: &str) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let link_id = sqlx::query_scalar::<_, i32>("SELECT id FROM links WHERE long_url = $1")
            .bind(long_url)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(link_id) = link_id {
            sqlx::query("DELETE FROM user_links WHERE link_id = $1")
                .bind(link_id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM links WHERE id = $1")
                .bind(link_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
