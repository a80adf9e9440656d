//! Test fixtures built on the clan operations themselves.

use clan_core::common::{Caller, ClanId, MemberId};
use clan_core::domains::clan::actions;
use clan_core::domains::clan::{ClanMembership, MembershipType};
use sqlx::PgPool;
use uuid::Uuid;

/// A clan name no other test will use
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

pub fn member_id(caller: &Caller) -> MemberId {
    caller.member_id().expect("fixture caller is authenticated")
}

/// Membership row of a caller, if any
pub async fn membership_of(caller: &Caller, pool: &PgPool) -> Option<ClanMembership> {
    ClanMembership::find_by_member(member_id(caller), pool)
        .await
        .expect("Failed to load membership")
}

/// Create a clan founded by `founder`, returning its id
pub async fn found_clan(founder: &Caller, name: &str, pool: &PgPool) -> ClanId {
    assert!(
        actions::create(founder, name, "guild", pool).await.unwrap(),
        "Founder should be able to create clan {}",
        name
    );

    membership_of(founder, pool)
        .await
        .expect("Founder should have a membership")
        .clan_id
}

/// Join `clan_id` and get approved as a regular member by `admin`
pub async fn enlist(member: &Caller, clan_id: ClanId, admin: &Caller, pool: &PgPool) {
    assert!(actions::join(member, clan_id, pool).await.unwrap());
    assert!(actions::set_member_type(admin, member_id(member), MembershipType::Member, pool)
        .await
        .unwrap());
}

/// Number of clans carrying `name`
pub async fn clans_named(name: &str, pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clans WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to count clans")
}
