//! Read-only listings

use sqlx::PgPool;
use tracing::warn;

use crate::common::{AuthError, Caller};
use crate::domains::clan::models::{Clan, ClanRoster};

/// The caller's clan and everyone in it
pub async fn members(caller: &Caller, pool: &PgPool) -> Result<Option<ClanRoster>, AuthError> {
    let member_id = caller.require_auth()?.member_id;

    match ClanRoster::for_member(member_id, pool).await {
        Ok(roster) => Ok(roster),
        Err(e) => {
            warn!(%member_id, error = %e, "Failed to load clan roster");
            Ok(None)
        }
    }
}

/// Every clan, ordered by name
pub async fn list(caller: &Caller, pool: &PgPool) -> Result<Vec<Clan>, AuthError> {
    caller.require_auth()?;

    match Clan::list(pool).await {
        Ok(clans) => Ok(clans),
        Err(e) => {
            warn!(error = %e, "Failed to list clans");
            Ok(Vec::new())
        }
    }
}
