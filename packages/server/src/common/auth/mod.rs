/// Authentication surface for clan operations
///
/// Every operation starts with:
///
/// ```rust,ignore
/// let user = caller.require_auth()?;
/// ```
///
/// Authorization (admin-of-clan) is not checked here. It lives in the
/// predicate of each mutating statement, see `kernel::gate`.

mod caller;
mod errors;

pub use caller::{AuthUser, Caller};
pub use errors::AuthError;
