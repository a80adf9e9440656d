//! The calling session as seen by clan operations.

use crate::common::MemberId;

use super::AuthError;

/// Authenticated member resolved from the request token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub member_id: MemberId,
    pub handle: String,
}

/// Caller context handed to every operation.
///
/// Built by the transport from request extensions. An anonymous caller is a
/// valid value; operations reject it through [`Caller::require_auth`] before
/// touching the store.
#[derive(Clone, Debug, Default)]
pub struct Caller {
    user: Option<AuthUser>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    /// Session data for an authenticated caller, or `AuthenticationRequired`
    pub fn require_auth(&self) -> Result<&AuthUser, AuthError> {
        self.user.as_ref().ok_or(AuthError::AuthenticationRequired)
    }

    pub fn member_id(&self) -> Option<MemberId> {
        self.user.as_ref().map(|u| u.member_id)
    }
}
