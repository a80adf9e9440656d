use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::MemberId;

/// Member account - owned by the account service, referenced by clans
#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct Member {
    pub id: MemberId,
    pub handle: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Insert a member record (seeding, tests)
    pub async fn create(handle: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO members (id, handle)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(MemberId::new())
        .bind(handle)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
