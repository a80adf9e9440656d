use thiserror::Error;

use super::models::MembershipType;

/// Store-level outcomes of clan writes.
///
/// These never cross the operation boundary; actions log them and report
/// `false`/`None`.
#[derive(Error, Debug)]
pub enum ClanError {
    #[error("Member already belongs to a clan")]
    AlreadyInClan,

    #[error("Referenced clan or member does not exist")]
    MissingReference,

    #[error("Pending members cannot be approved into {0}")]
    InvalidTransition(MembershipType),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ClanError {
    /// Classify a failed membership insert.
    ///
    /// `clan_members.member_id` is UNIQUE, so a unique violation there means
    /// the member already has a membership row somewhere.
    pub fn from_membership_insert(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db) if db.is_unique_violation() => ClanError::AlreadyInClan,
            Some(db) if db.is_foreign_key_violation() => ClanError::MissingReference,
            _ => ClanError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = ClanError::from_membership_insert(sqlx::Error::RowNotFound);
        assert!(matches!(err, ClanError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_invalid_transition_names_the_type() {
        let err = ClanError::InvalidTransition(MembershipType::Pending);
        assert_eq!(err.to_string(), "Pending members cannot be approved into pending");
    }
}
