//! Item repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info};
use uuid::Uuid;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::SortBy;
use explorer_entity::item::{CreateItem, Item, ItemChanges};

use crate::schema;
use crate::store::ItemStore;

/// Repository for item CRUD and tree queries.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Return a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Translate constraint violations into domain errors.
fn map_write_error(e: sqlx::Error, context: &str, path: Option<&str>) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        match db_err.constraint() {
            Some(schema::PATH_UNIQUE_CONSTRAINT) => {
                return AppError::conflict(format!(
                    "An item at path '{}' already exists",
                    path.unwrap_or_default()
                ));
            }
            Some(schema::PARENT_FOREIGN_KEY) => {
                return AppError::not_found("Parent folder not found");
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, format!("{context}: {e}"), e)
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn initialize(&self, root_name: &str, system_identity: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(schema::TABLE_EXISTS)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to inspect schema", e)
            })?;

        if exists {
            debug!("Item table already exists; skipping bootstrap");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(schema::CREATE_TABLE)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create table", e))?;

        for ddl in schema::CREATE_INDEXES {
            sqlx::query(ddl).execute(&mut *tx).await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create index", e)
            })?;
        }

        sqlx::query(schema::INSERT_ROOT)
            .bind(format!("{root_name}/"))
            .bind(root_name)
            .bind(system_identity)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert root folder", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit bootstrap", e)
        })?;

        info!(table = schema::ITEMS_TABLE, "Item table created");
        Ok(true)
    }

    async fn list_children(&self, parent: Option<Uuid>, sort: SortBy) -> AppResult<Vec<Item>> {
        let filter = if parent.is_some() {
            "parent_folder_id = $1"
        } else {
            "parent_folder_id IS NULL"
        };
        let sql = format!(
            "SELECT * FROM file_system_items WHERE {filter} ORDER BY {}",
            sort.order_by_sql()
        );

        let mut query = sqlx::query_as::<_, Item>(&sql);
        if let Some(parent_id) = parent {
            query = query.bind(parent_id);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM file_system_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    async fn find_ancestor_ids(&self, id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT parent_folder_id AS id, 1 AS depth FROM file_system_items WHERE id = $1 \
                UNION ALL \
                SELECT i.parent_folder_id, a.depth + 1 FROM file_system_items i \
                INNER JOIN ancestors a ON i.id = a.id \
             ) SELECT id FROM ancestors WHERE id IS NOT NULL ORDER BY depth ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    async fn insert(&self, data: &CreateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO file_system_items \
             (path, is_folder, file_key, parent_folder_id, name, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING *",
        )
        .bind(&data.path)
        .bind(data.is_folder)
        .bind(&data.file_key)
        .bind(data.parent_folder_id)
        .bind(&data.name)
        .bind(&data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create item", Some(&data.path)))
    }

    async fn update(&self, id: Uuid, changes: &ItemChanges) -> AppResult<Option<Item>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE file_system_items SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(name) = &changes.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(parent_id) = changes.parent_folder_id {
                set.push("parent_folder_id = ")
                    .push_bind_unseparated(parent_id);
            }
            if let Some(path) = &changes.path {
                set.push("path = ").push_bind_unseparated(path);
            }
            set.push("updated_by = ")
                .push_bind_unseparated(&changes.updated_by);
            set.push("updated_at = NOW()");
        }
        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        let updated = builder
            .build_query_as::<Item>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, "Failed to update item", changes.path.as_deref()))?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(rewrite) = &changes.descendants {
            let result = sqlx::query(
                "WITH RECURSIVE subtree AS ( \
                     SELECT id FROM file_system_items WHERE parent_folder_id = $3 \
                     UNION ALL \
                     SELECT child.id FROM file_system_items child \
                     JOIN subtree ON child.parent_folder_id = subtree.id \
                 ) \
                 UPDATE file_system_items \
                 SET path = $2 || substr(path, char_length($1) + 1) \
                 WHERE id IN (SELECT id FROM subtree) \
                   AND left(path, char_length($1)) = $1 AND path <> $1",
            )
            .bind(&rewrite.from)
            .bind(&rewrite.to)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, "Failed to rewrite descendant paths", None))?;

            debug!(
                item_id = %id,
                from = %rewrite.from,
                to = %rewrite.to,
                rows = result.rows_affected(),
                "Descendant paths rewritten"
            );
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit update", e)
        })?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM file_system_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;
        Ok(result.rows_affected() > 0)
    }
}
