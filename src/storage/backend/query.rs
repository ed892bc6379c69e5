//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use super::SeaOrmStorage;
use super::converters::decode_model_id;
use crate::errors::Result;
use crate::storage::models::ModelId;

use migration::entities::link;

impl SeaOrmStorage {
    /// Resolve a link token to the identifier stored under it.
    ///
    /// Only the model_id column is fetched. The primary key keeps
    /// tokens unique, so at most one row can match.
    pub async fn resolve(&self, token: &str) -> Result<Option<ModelId>> {
        let raw = link::Entity::find()
            .select_only()
            .column(link::Column::ModelId)
            .filter(link::Column::Link.eq(token))
            .into_tuple::<String>()
            .one(&self.db)
            .await?;

        Ok(raw.as_deref().map(decode_model_id))
    }

    /// Total number of stored links. Used by the health probe.
    pub async fn count(&self) -> Result<u64> {
        Ok(link::Entity::find().count(&self.db).await?)
    }
}
