use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgHasArrayType, PgTypeInfo};

/// Membership type of a clan_members row
///
/// Rows start as `Founder` (clan creation) or `Pending` (join request).
/// `Pending` leaves only through an admin approval; `Pending` and `Banned`
/// rows never carry admin rights changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_type", rename_all = "snake_case", no_pg_array)]
pub enum MembershipType {
    Founder,
    Member,
    Pending,
    Banned,
}

impl MembershipType {
    /// Types whose admin flag is frozen; bound into the `setadmin` update
    pub const ADMIN_LOCKED: [MembershipType; 2] = [MembershipType::Pending, MembershipType::Banned];

    /// Whether a pending row may be approved into this type
    pub fn approval_target(self) -> bool {
        self != MembershipType::Pending
    }
}

impl PgHasArrayType for MembershipType {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("_membership_type")
    }
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipType::Founder => write!(f, "founder"),
            MembershipType::Member => write!(f, "member"),
            MembershipType::Pending => write!(f, "pending"),
            MembershipType::Banned => write!(f, "banned"),
        }
    }
}

impl std::str::FromStr for MembershipType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "founder" => Ok(MembershipType::Founder),
            "member" => Ok(MembershipType::Member),
            "pending" => Ok(MembershipType::Pending),
            "banned" => Ok(MembershipType::Banned),
            _ => Err(anyhow::anyhow!("Invalid membership type: {}", s)),
        }
    }
}
