use serde::Serialize;
use sqlx::PgPool;

use crate::common::{ClanId, MemberId};

use super::MembershipType;

/// A clan with its full member list
#[derive(Debug, Clone, Serialize)]
pub struct ClanRoster {
    pub id: ClanId,
    pub name: String,
    #[serde(rename = "type")]
    pub clan_type: String,
    pub members: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub member_id: MemberId,
    pub handle: String,
    #[serde(rename = "type")]
    pub membership_type: MembershipType,
    pub admin: bool,
}

#[derive(sqlx::FromRow)]
struct RosterRow {
    clan_id: ClanId,
    clan_name: String,
    clan_type: String,
    member_id: MemberId,
    handle: String,
    membership_type: MembershipType,
    admin: bool,
}

impl ClanRoster {
    /// Roster of the clan `member_id` belongs to, or `None` without a clan.
    ///
    /// One statement, so clan and members come from the same snapshot.
    pub async fn for_member(member_id: MemberId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RosterRow>(
            "SELECT c.id AS clan_id, c.name AS clan_name, c.clan_type,
                    cm.member_id, m.handle, cm.membership_type, cm.admin
             FROM clans c
             INNER JOIN clan_members cm ON cm.clan_id = c.id
             INNER JOIN members m ON m.id = cm.member_id
             WHERE c.id = (SELECT clan_id FROM clan_members WHERE member_id = $1)
             ORDER BY cm.joined_at, m.handle",
        )
        .bind(member_id)
        .fetch_all(pool)
        .await?;

        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: Vec<RosterRow>) -> Option<Self> {
        let first = rows.first()?;
        let mut roster = ClanRoster {
            id: first.clan_id,
            name: first.clan_name.clone(),
            clan_type: first.clan_type.clone(),
            members: Vec::with_capacity(rows.len()),
        };

        roster.members.extend(rows.into_iter().map(|row| RosterEntry {
            member_id: row.member_id,
            handle: row.handle,
            membership_type: row.membership_type,
            admin: row.admin,
        }));

        Some(roster)
    }
}
