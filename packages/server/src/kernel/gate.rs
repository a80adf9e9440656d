//! Authorization-gated conditional mutations.
//!
//! A gated mutation is a single `UPDATE`/`INSERT ... SELECT` whose condition
//! contains both the target selection and the "caller is an admin of this
//! row's clan" predicate, with a `RETURNING` clause. The store evaluates the
//! predicate and applies the write against one snapshot, so there is no
//! window between checking admin status and writing. Whether the mutation
//! applied is read from the returned row, never from a prior `SELECT`.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use sqlx::Executor;

/// The `clan_members` row aliased `membership_alias` is an admin membership
/// of the member bound at `$caller_param`.
///
/// Aliases and parameter numbers are compile-time constants at every call
/// site; caller supplied values are always bound, never rendered.
pub fn admin_membership(membership_alias: &str, caller_param: usize) -> String {
    format!("{membership_alias}.admin AND {membership_alias}.member_id = ${caller_param}")
}

/// Correlated predicate: the member bound at `$caller_param` holds an admin
/// membership in the same clan as the row aliased `row_alias`.
pub fn caller_is_admin_of(row_alias: &str, caller_param: usize) -> String {
    format!(
        "EXISTS (SELECT 1 FROM clan_members gate \
         WHERE {} AND gate.clan_id = {row_alias}.clan_id)",
        admin_membership("gate", caller_param)
    )
}

/// Run a gated statement and report whether it touched a row.
///
/// The statement must end in `RETURNING ...`.
pub async fn apply<'q, 'e, E>(
    query: Query<'q, Postgres, PgArguments>,
    executor: E,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    Ok(query.fetch_optional(executor).await?.is_some())
}
