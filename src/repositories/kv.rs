//! Key-value repository for database operations.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::kv_entry;

/// Repository for key-value database operations.
pub struct KvRepository;

impl KvRepository {
    /// Get the entry stored under a key.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<kv_entry::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(kv_entry::Entity::find()
            .filter(kv_entry::Column::Key.eq(key))
            .one(conn)
            .await?)
    }

    /// Get just the value stored under a key.
    pub async fn get_value<C>(conn: &C, key: &str) -> Result<Option<String>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::get(conn, key).await?.map(|entry| entry.value))
    }

    /// Insert or overwrite the value under a key.
    pub async fn put<C>(conn: &C, key: &str, value: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let model = kv_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now().to_rfc3339()),
        };

        kv_entry::Entity::insert(model)
            .on_conflict(
                OnConflict::column(kv_entry::Column::Key)
                    .update_columns([kv_entry::Column::Value, kv_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(conn)
            .await?;

        Ok(())
    }

    /// Remove the entry under a key, if any.
    pub async fn delete<C>(conn: &C, key: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        kv_entry::Entity::delete_many()
            .filter(kv_entry::Column::Key.eq(key))
            .exec(conn)
            .await?;
        Ok(())
    }
}
