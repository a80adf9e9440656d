//! Membership operations: create, join, leave, setadmin, setmembertype

use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::common::{AuthError, Caller, ClanId, MemberId};
use crate::domains::clan::errors::ClanError;
use crate::domains::clan::models::{Clan, ClanMembership, MembershipType};
use crate::kernel::transaction::in_transaction;

/// Create a clan with the caller as its founding admin.
///
/// Clan and founder rows are written in one transaction; on any failure
/// neither persists and the result is `false`.
pub async fn create(
    caller: &Caller,
    name: &str,
    clan_type: &str,
    pool: &PgPool,
) -> Result<bool, AuthError> {
    let member_id = caller.require_auth()?.member_id;
    let name = name.to_owned();
    let clan_type = clan_type.to_owned();

    let result = in_transaction(pool, move |conn| {
        Box::pin(async move {
            let clan = Clan::insert(&name, &clan_type, &mut *conn).await?;
            ClanMembership::insert_founder(clan.id, member_id, &mut *conn).await?;
            Ok::<_, ClanError>(clan)
        })
    })
    .await;

    match result {
        Ok(clan) => {
            info!(clan_id = %clan.id, %member_id, name = %clan.name, "Clan created");
            Ok(true)
        }
        Err(e) => {
            warn!(%member_id, error = %e, "Clan creation rolled back");
            Ok(false)
        }
    }
}

/// Ask to join a clan. The membership stays `Pending` until a clan admin
/// approves it with [`set_member_type`].
pub async fn join(caller: &Caller, clan_id: ClanId, pool: &PgPool) -> Result<bool, AuthError> {
    let member_id = caller.require_auth()?.member_id;

    match ClanMembership::request_join(clan_id, member_id, pool).await {
        Ok(membership) => {
            info!(%clan_id, %member_id, membership_id = %membership.id, "Join requested");
            Ok(true)
        }
        Err(ClanError::AlreadyInClan) => {
            debug!(%clan_id, %member_id, "Join refused: member already in a clan");
            Ok(false)
        }
        Err(e) => {
            warn!(%clan_id, %member_id, error = %e, "Join failed");
            Ok(false)
        }
    }
}

/// Leave the current clan. Succeeds whether or not a membership existed.
pub async fn leave(caller: &Caller, pool: &PgPool) -> Result<bool, AuthError> {
    let member_id = caller.require_auth()?.member_id;

    match ClanMembership::remove_member(member_id, pool).await {
        Ok(removed) => {
            info!(%member_id, removed, "Member left clan");
            Ok(true)
        }
        Err(e) => {
            warn!(%member_id, error = %e, "Leave failed");
            Ok(false)
        }
    }
}

/// Grant or revoke admin rights on `target`.
///
/// Applies only when the caller is an admin of the target's clan and the
/// target is neither pending nor banned. `false` covers both "not allowed"
/// and "no such member".
pub async fn set_admin(
    caller: &Caller,
    target: MemberId,
    admin: bool,
    pool: &PgPool,
) -> Result<bool, AuthError> {
    let actor = caller.require_auth()?.member_id;

    let result = in_transaction(pool, move |conn| {
        Box::pin(async move { ClanMembership::set_admin_gated(actor, target, admin, conn).await })
    })
    .await;

    Ok(report_gated("setadmin", actor, target, result.map_err(ClanError::from)))
}

/// Approve a pending membership into `new_type`.
///
/// Applies only when the target is `Pending` and the caller is an admin of
/// the same clan.
pub async fn set_member_type(
    caller: &Caller,
    target: MemberId,
    new_type: MembershipType,
    pool: &PgPool,
) -> Result<bool, AuthError> {
    let actor = caller.require_auth()?.member_id;

    let result = in_transaction(pool, move |conn| {
        Box::pin(async move { ClanMembership::approve_gated(actor, target, new_type, conn).await })
    })
    .await;

    Ok(report_gated("setmembertype", actor, target, result))
}

fn report_gated(
    operation: &'static str,
    actor: MemberId,
    target: MemberId,
    result: Result<bool, ClanError>,
) -> bool {
    match result {
        Ok(true) => {
            info!(operation, %actor, %target, "Membership updated");
            true
        }
        Ok(false) => {
            debug!(operation, %actor, %target, "Membership update not applied");
            false
        }
        Err(e) => {
            warn!(operation, %actor, %target, error = %e, "Membership update rolled back");
            false
        }
    }
}
