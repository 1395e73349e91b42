//! `SQLite` implementation of [`MenuRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use quickbite_app::ports::MenuRepository;
use quickbite_domain::error::{NotFoundError, QuickBiteError};
use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::{MenuItem, MenuItemPatch, NewMenuItem};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`MenuItem`].
struct Wrapper(MenuItem);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<MenuItem> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(MenuItem {
            id: MenuItemId::new(id),
            title: row.try_get("title")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            img: row.try_get("img")?,
            desc: row.try_get("description")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO menu_items (title, price, category, img, description) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM menu_items WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM menu_items ORDER BY id ASC";
// Omitted fields bind as NULL and keep the stored value. One statement, so
// no other write can land between the read and the write.
const UPDATE: &str = r"
    UPDATE menu_items
    SET title = COALESCE(?, title),
        price = COALESCE(?, price),
        category = COALESCE(?, category),
        img = COALESCE(?, img),
        description = COALESCE(?, description)
    WHERE id = ?
    RETURNING *
";
const DELETE_BY_ID: &str = "DELETE FROM menu_items WHERE id = ?";

/// `SQLite`-backed menu repository.
///
/// Ids come from the table's `AUTOINCREMENT` primary key.
pub struct SqliteMenuRepository {
    pool: SqlitePool,
}

impl SqliteMenuRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for SqliteMenuRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, QuickBiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, QuickBiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn create(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&item.title)
                .bind(item.price)
                .bind(&item.category)
                .bind(&item.img)
                .bind(&item.desc)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(MenuItem::from_new(
                MenuItemId::new(result.last_insert_rowid()),
                item,
            ))
        }
    }

    fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> impl Future<Output = Result<MenuItem, QuickBiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let changes = patch.check()?;
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(changes.title)
                .bind(changes.price)
                .bind(changes.category)
                .bind(changes.img)
                .bind(changes.desc)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Wrapper::maybe(row).ok_or_else(|| QuickBiteError::from(NotFoundError::item(id)))
        }
    }

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), QuickBiteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::item(id).into());
            }
            Ok(())
        }
    }
}
