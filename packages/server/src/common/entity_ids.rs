//! Typed id aliases for the entities this service stores or references.

pub use super::id::Id;

/// Marker for member accounts.
pub struct Member;

/// Marker for clans.
pub struct Clan;

/// Marker for clan membership rows.
pub struct ClanMembership;

/// Marker for per-clan stored objects.
pub struct ClanObject;

pub type MemberId = Id<Member>;
pub type ClanId = Id<Clan>;
pub type MembershipId = Id<ClanMembership>;
pub type ClanObjectId = Id<ClanObject>;
