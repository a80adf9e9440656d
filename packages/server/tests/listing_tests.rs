//! Integration tests for the read-only listings: list and members.

mod common;

use crate::common::*;
use clan_core::domains::clan::actions;
use clan_core::domains::clan::MembershipType;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestHarness)]
#[tokio::test]
async fn list_orders_clans_by_name(ctx: &TestHarness) {
    // Shared database: only look at this test's clans
    let tag = Uuid::new_v4().simple().to_string();
    let names = [
        format!("{}-charlie", tag),
        format!("{}-alpha", tag),
        format!("{}-bravo", tag),
    ];
    for name in &names {
        let founder = ctx.member("founder").await;
        assert!(actions::create(&founder, name, "guild", &ctx.db_pool)
            .await
            .unwrap());
    }

    let viewer = ctx.member("viewer").await;
    let listed: Vec<String> = actions::list(&viewer, &ctx.db_pool)
        .await
        .unwrap()
        .into_iter()
        .map(|clan| clan.name)
        .filter(|name| name.starts_with(&tag))
        .collect();

    assert_eq!(
        listed,
        vec![
            format!("{}-alpha", tag),
            format!("{}-bravo", tag),
            format!("{}-charlie", tag),
        ]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn list_includes_clans_caller_is_not_in(ctx: &TestHarness) {
    let rook = ctx.member("rook").await;
    let name = unique_name("ravens");
    let clan_id = found_clan(&rook, &name, &ctx.db_pool).await;

    let outsider = ctx.member("outsider").await;
    let clans = actions::list(&outsider, &ctx.db_pool).await.unwrap();

    let clan = clans
        .iter()
        .find(|c| c.id == clan_id)
        .expect("Clan should be listed");
    assert_eq!(clan.name, name);
    assert_eq!(clan.clan_type, "guild");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn members_returns_clan_and_roster(ctx: &TestHarness) {
    let rook = ctx.member("rook").await;
    let bishop = ctx.member("bishop").await;
    let pawn = ctx.member("pawn").await;
    let name = unique_name("ravens");
    let clan_id = found_clan(&rook, &name, &ctx.db_pool).await;
    enlist(&bishop, clan_id, &rook, &ctx.db_pool).await;
    assert!(actions::join(&pawn, clan_id, &ctx.db_pool).await.unwrap());

    let roster = actions::members(&bishop, &ctx.db_pool)
        .await
        .unwrap()
        .expect("Bishop is in a clan");

    assert_eq!(roster.id, clan_id);
    assert_eq!(roster.name, name);
    assert_eq!(roster.clan_type, "guild");
    assert_eq!(roster.members.len(), 3);

    let entry = |handle: &str| {
        roster
            .members
            .iter()
            .find(|m| m.handle == handle)
            .cloned()
            .unwrap_or_else(|| panic!("{} missing from roster", handle))
    };

    let founder = entry("rook");
    assert_eq!(founder.member_id, member_id(&rook));
    assert_eq!(founder.membership_type, MembershipType::Founder);
    assert!(founder.admin);

    let regular = entry("bishop");
    assert_eq!(regular.membership_type, MembershipType::Member);
    assert!(!regular.admin);

    let pending = entry("pawn");
    assert_eq!(pending.membership_type, MembershipType::Pending);
    assert!(!pending.admin);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn members_is_none_without_clan(ctx: &TestHarness) {
    let loner = ctx.member("loner").await;

    assert!(actions::members(&loner, &ctx.db_pool).await.unwrap().is_none());
}
