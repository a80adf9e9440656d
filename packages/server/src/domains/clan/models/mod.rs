pub mod clan;
pub mod clan_object;
pub mod membership;
pub mod membership_type;
pub mod roster;

pub use clan::Clan;
pub use clan_object::ClanObject;
pub use membership::ClanMembership;
pub use membership_type::MembershipType;
pub use roster::{ClanRoster, RosterEntry};
