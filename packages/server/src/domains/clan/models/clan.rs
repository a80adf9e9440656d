use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};

use crate::common::ClanId;

/// Clan - a named group members can join
///
/// Names are not unique; they only order listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Clan {
    pub id: ClanId,
    pub name: String,
    #[serde(rename = "type")]
    pub clan_type: String,
}

impl Clan {
    /// Insert a new clan. Callers pair this with the founder membership
    /// inside one transaction.
    pub async fn insert(
        name: &str,
        clan_type: &str,
        conn: &mut PgConnection,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO clans (id, name, clan_type)
             VALUES ($1, $2, $3)
             RETURNING id, name, clan_type",
        )
        .bind(ClanId::new())
        .bind(name)
        .bind(clan_type)
        .fetch_one(conn)
        .await
    }

    /// All clans ordered by name
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, clan_type
             FROM clans
             ORDER BY name ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(id: ClanId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, name, clan_type FROM clans WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
