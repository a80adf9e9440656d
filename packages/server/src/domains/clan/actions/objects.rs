//! Clan object store: admin-only writes, member reads

use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::common::{AuthError, Caller};
use crate::domains::clan::models::ClanObject;

/// Store `value` under `key` in the clan the caller administers.
///
/// Returns `false` when the caller is not an admin of any clan.
pub async fn set_object(
    caller: &Caller,
    key: &str,
    value: &Value,
    pool: &PgPool,
) -> Result<bool, AuthError> {
    let member_id = caller.require_auth()?.member_id;

    match ClanObject::upsert_as_admin(member_id, key, value, pool).await {
        Ok(true) => {
            info!(%member_id, key, "Clan object stored");
            Ok(true)
        }
        Ok(false) => {
            debug!(%member_id, key, "Clan object not stored: caller is not a clan admin");
            Ok(false)
        }
        Err(e) => {
            warn!(%member_id, key, error = %e, "Failed to store clan object");
            Ok(false)
        }
    }
}

/// Read `key` from the caller's clan, `None` when absent or not a member.
pub async fn get_object(
    caller: &Caller,
    key: &str,
    pool: &PgPool,
) -> Result<Option<Value>, AuthError> {
    let member_id = caller.require_auth()?.member_id;

    match ClanObject::find_for_reader(member_id, key, pool).await {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(%member_id, key, error = %e, "Failed to read clan object");
            Ok(None)
        }
    }
}
