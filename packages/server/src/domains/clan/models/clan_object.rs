use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::{ClanId, ClanObjectId, MemberId};
use crate::kernel::gate;

/// ClanObject - an arbitrary JSON value stored per (clan, key)
///
/// The clan is never chosen by the writer: it is always the clan in which
/// the writer holds an admin membership. `member_id` records the admin who
/// last wrote the value.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClanObject {
    pub id: ClanObjectId,
    pub clan_id: ClanId,
    pub member_id: MemberId,
    pub key: String,
    pub value: Json<Value>,
    pub updated_at: DateTime<Utc>,
}

impl ClanObject {
    /// Find the stored row for `key` in `clan_id`, bypassing membership
    pub async fn find_by_key(
        clan_id: ClanId,
        key: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM clan_objects WHERE clan_id = $1 AND key = $2")
            .bind(clan_id)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Create or overwrite `key` in the clan where `actor` is an admin.
    ///
    /// A single `INSERT ... SELECT ... ON CONFLICT DO UPDATE`: the source row
    /// is the actor's admin membership, so a non-admin selects nothing and
    /// nothing is written. Returns whether a row was written.
    pub async fn upsert_as_admin(
        actor: MemberId,
        key: &str,
        value: &Value,
        pool: &PgPool,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "INSERT INTO clan_objects (id, clan_id, member_id, key, value)
             SELECT $1, source.clan_id, source.member_id, $2, $3
             FROM clan_members source
             WHERE {}
             ON CONFLICT (clan_id, key) DO UPDATE
             SET value = EXCLUDED.value,
                 member_id = EXCLUDED.member_id,
                 updated_at = NOW()
             RETURNING id",
            gate::admin_membership("source", 4)
        );

        let written = sqlx::query_scalar::<_, ClanObjectId>(&sql)
            .bind(ClanObjectId::new())
            .bind(key)
            .bind(Json(value))
            .bind(actor)
            .fetch_optional(pool)
            .await?;

        Ok(written.is_some())
    }

    /// Read `key` from the reader's own clan
    pub async fn find_for_reader(
        reader: MemberId,
        key: &str,
        pool: &PgPool,
    ) -> Result<Option<Value>, sqlx::Error> {
        let value = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT obj.value
             FROM clan_objects obj
             INNER JOIN clan_members reader ON reader.clan_id = obj.clan_id
             WHERE reader.member_id = $1 AND obj.key = $2",
        )
        .bind(reader)
        .bind(key)
        .fetch_optional(pool)
        .await?;

        Ok(value.map(|Json(v)| v))
    }
}
