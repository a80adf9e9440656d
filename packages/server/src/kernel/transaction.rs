//! Scoped transactions.
//!
//! ```rust,ignore
//! let clan = in_transaction(pool, move |conn| {
//!     Box::pin(async move {
//!         let clan = insert_clan(&mut *conn).await?;
//!         insert_founder(&mut *conn, clan.id).await?;
//!         Ok::<_, ClanError>(clan)
//!     })
//! })
//! .await?;
//! ```
//!
//! The unit of work commits when it returns `Ok` and rolls back when it
//! returns `Err`. If the calling future is dropped mid-flight the sqlx
//! `Transaction` is dropped with it, which also rolls back. Partial writes
//! are never left visible.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};
use tracing::warn;

pub async fn in_transaction<T, E, F>(pool: &PgPool, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<sqlx::Error>,
{
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                // Connection is discarded by the pool; the server aborts the transaction.
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
