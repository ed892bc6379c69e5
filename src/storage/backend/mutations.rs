//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::{EntityTrait, SqlErr};
use tracing::{info, warn};

use super::SeaOrmStorage;
use super::converters::record_to_active_model;
use crate::errors::{ModelinkError, Result};
use crate::storage::models::{LinkRecord, ModelId};
use crate::utils::generate_link_token;

use migration::entities::link;

/// Upper bound on token regeneration when an insert hits a primary key
/// collision.
const MAX_TOKEN_ATTEMPTS: u32 = 5;

impl SeaOrmStorage {
    /// Store an identifier under a freshly generated link token.
    ///
    /// The token is regenerated on collision, up to MAX_TOKEN_ATTEMPTS
    /// times. Any other database failure is returned as-is.
    pub async fn insert(&self, model_id: &ModelId) -> Result<LinkRecord> {
        let config = crate::config::get_config();
        let length = config.features.link_token_length.clamp(6, 12);

        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let record = LinkRecord {
                link: generate_link_token(length),
                model_id: model_id.clone(),
                created_at: Utc::now(),
            };
            let active = record_to_active_model(&record)?;

            match link::Entity::insert(active).exec(&self.db).await {
                Ok(_) => {
                    info!("Link created: {}", record.link);
                    return Ok(record);
                }
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        warn!(
                            "Link token collision, regenerating (attempt {}/{})",
                            attempt, MAX_TOKEN_ATTEMPTS
                        );
                    }
                    _ => return Err(e.into()),
                },
            }
        }

        Err(ModelinkError::database_operation(format!(
            "Could not find a free link token after {} attempts",
            MAX_TOKEN_ATTEMPTS
        )))
    }
}
