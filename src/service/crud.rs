//! Coffee record persistence against PostgreSQL.

use crate::error::ApiError;
use crate::model::{Coffee, CoffeeUpdate, NewCoffee};
use sqlx::PgPool;

/// Column list shared by every query that returns full rows. `type` is quoted
/// because it is a reserved word.
const COFFEE_COLUMNS: &str = r#"id, name, "type", origin, grind_size, weight_in_grams"#;

pub struct CoffeeRepo;

impl CoffeeRepo {
    /// Fetch one record by primary key. Absence is not an error.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Coffee>, ApiError> {
        let sql = format!(
            "SELECT {} FROM espresso_stats WHERE id = $1",
            COFFEE_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Coffee>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Fetch one record by exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Coffee>, ApiError> {
        let sql = format!(
            "SELECT {} FROM espresso_stats WHERE name = $1",
            COFFEE_COLUMNS
        );
        tracing::debug!(sql = %sql, name, "query");
        let row = sqlx::query_as::<_, Coffee>(&sql)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List records with offset/limit pagination, in id order.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Coffee>, ApiError> {
        let sql = format!(
            "SELECT {} FROM espresso_stats ORDER BY id OFFSET $1 LIMIT $2",
            COFFEE_COLUMNS
        );
        tracing::debug!(sql = %sql, skip, limit, "query");
        let rows = sqlx::query_as::<_, Coffee>(&sql)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on name. `%` and `_` in the fragment
    /// act as wildcards.
    pub async fn search_by_name(pool: &PgPool, fragment: &str) -> Result<Vec<Coffee>, ApiError> {
        let sql = format!(
            "SELECT {} FROM espresso_stats WHERE name ILIKE '%' || $1 || '%' ORDER BY id",
            COFFEE_COLUMNS
        );
        tracing::debug!(sql = %sql, fragment, "query");
        let rows = sqlx::query_as::<_, Coffee>(&sql)
            .bind(fragment)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn exists_by_name(pool: &PgPool, name: &str) -> Result<bool, ApiError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM espresso_stats WHERE name = $1)")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// Insert one record and return it with the assigned id. A name collision
    /// surfaces as DuplicateName whether the pre-check catches it or the
    /// unique constraint does.
    pub async fn create(pool: &PgPool, payload: &NewCoffee) -> Result<Coffee, ApiError> {
        if Self::exists_by_name(pool, &payload.name).await? {
            return Err(ApiError::DuplicateName(payload.name.clone()));
        }
        let sql = format!(
            r#"INSERT INTO espresso_stats (name, "type", origin, grind_size, weight_in_grams)
               VALUES ($1, $2, $3, $4, $5) RETURNING {}"#,
            COFFEE_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %payload.name, "query");
        let created = sqlx::query_as::<_, Coffee>(&sql)
            .bind(&payload.name)
            .bind(&payload.kind)
            .bind(&payload.origin)
            .bind(payload.grind_size)
            .bind(payload.weight_in_grams)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::DuplicateName(payload.name.clone())
                } else {
                    ApiError::Db(e)
                }
            })?;
        Ok(created)
    }

    /// Overlay the provided fields onto the stored row and persist the result.
    /// Returns None when the id is unknown (or the row vanished mid-update).
    pub async fn update(
        pool: &PgPool,
        id: i32,
        changes: &CoffeeUpdate,
    ) -> Result<Option<Coffee>, ApiError> {
        let mut record = match Self::find_by_id(pool, id).await? {
            Some(record) => record,
            None => return Ok(None),
        };
        changes.apply_to(&mut record);
        let sql = format!(
            r#"UPDATE espresso_stats
               SET name = $1, "type" = $2, origin = $3, grind_size = $4, weight_in_grams = $5
               WHERE id = $6 RETURNING {}"#,
            COFFEE_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let updated = sqlx::query_as::<_, Coffee>(&sql)
            .bind(&record.name)
            .bind(&record.kind)
            .bind(&record.origin)
            .bind(record.grind_size)
            .bind(record.weight_in_grams)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(updated)
    }

    /// Delete one record. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let sql = "DELETE FROM espresso_stats WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() == 1)
    }
}

/// SQLSTATE 23505 is PostgreSQL's unique-constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        return db_err.code().map(|code| code == "23505").unwrap_or(false);
    }
    false
}
