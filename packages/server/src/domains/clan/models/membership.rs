use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use crate::common::{ClanId, MemberId, MembershipId};
use crate::domains::clan::errors::ClanError;
use crate::kernel::gate;

use super::MembershipType;

/// ClanMembership - links one member to one clan
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ClanMembership {
    pub id: MembershipId,
    pub clan_id: ClanId,
    pub member_id: MemberId,
    pub membership_type: MembershipType,
    pub admin: bool,
    pub joined_at: DateTime<Utc>,
}

impl ClanMembership {
    /// Find the membership row of a member, if any
    pub async fn find_by_member(
        member_id: MemberId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM clan_members WHERE member_id = $1")
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// Founder row for a freshly inserted clan (same transaction as the clan)
    pub async fn insert_founder(
        clan_id: ClanId,
        member_id: MemberId,
        conn: &mut PgConnection,
    ) -> Result<Self, ClanError> {
        Self::insert(clan_id, member_id, MembershipType::Founder, true, conn).await
    }

    /// Pending join request, waiting for an admin approval
    pub async fn request_join(
        clan_id: ClanId,
        member_id: MemberId,
        pool: &PgPool,
    ) -> Result<Self, ClanError> {
        let mut conn = pool.acquire().await?;
        Self::insert(clan_id, member_id, MembershipType::Pending, false, &mut conn).await
    }

    async fn insert(
        clan_id: ClanId,
        member_id: MemberId,
        membership_type: MembershipType,
        admin: bool,
        conn: &mut PgConnection,
    ) -> Result<Self, ClanError> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO clan_members (id, clan_id, member_id, membership_type, admin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(MembershipId::new())
        .bind(clan_id)
        .bind(member_id)
        .bind(membership_type)
        .bind(admin)
        .fetch_one(conn)
        .await
        .map_err(ClanError::from_membership_insert)
    }

    /// Delete every membership row of a member. Returns rows removed.
    pub async fn remove_member(member_id: MemberId, pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clan_members WHERE member_id = $1")
            .bind(member_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Set the admin flag on `target`'s row, gated on `actor` being an admin
    /// of the same clan and the target not being pending or banned.
    ///
    /// Returns whether the row was updated.
    pub async fn set_admin_gated(
        actor: MemberId,
        target: MemberId,
        admin: bool,
        conn: &mut PgConnection,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "UPDATE clan_members AS target
             SET admin = $1
             WHERE target.member_id = $2
               AND target.membership_type <> ALL($4)
               AND {}
             RETURNING target.id",
            gate::caller_is_admin_of("target", 3)
        );

        let query = sqlx::query(&sql)
            .bind(admin)
            .bind(target)
            .bind(actor)
            .bind(MembershipType::ADMIN_LOCKED.to_vec());
        gate::apply(query, conn).await
    }

    /// Move a pending row to `new_type`, gated on `actor` being an admin of
    /// the same clan.
    ///
    /// Returns whether the row was updated.
    pub async fn approve_gated(
        actor: MemberId,
        target: MemberId,
        new_type: MembershipType,
        conn: &mut PgConnection,
    ) -> Result<bool, ClanError> {
        if !new_type.approval_target() {
            return Err(ClanError::InvalidTransition(new_type));
        }

        let sql = format!(
            "UPDATE clan_members AS target
             SET membership_type = $1
             WHERE target.member_id = $2
               AND target.membership_type = 'pending'
               AND {}
             RETURNING target.id",
            gate::caller_is_admin_of("target", 3)
        );

        let query = sqlx::query(&sql).bind(new_type).bind(target).bind(actor);
        Ok(gate::apply(query, conn).await?)
    }
}
