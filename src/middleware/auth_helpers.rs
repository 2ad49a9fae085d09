//! Authorization helper functions.
//!
//! Handlers call these after the AuthMiddleware has run:
//! - `require_auth` to get the caller's claims
//! - `require_permission` to check a permission scope

use actix_web::HttpRequest;
use log::warn;

use crate::constants::{
    CODE_AUTH_HEADER_MISSING, CODE_PERMISSION_DENIED, ERR_AUTH_HEADER_MISSING,
    ERR_PERMISSION_DENIED,
};
use crate::errors::ApiError;
use crate::models::Claims;

use super::RequestExt;

/// Extract claims from request or return Unauthorized error.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// ```
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Request to {} without a bearer token", req.path());
        ApiError::unauthorized(CODE_AUTH_HEADER_MISSING, ERR_AUTH_HEADER_MISSING)
    })
}

/// Require a permission scope or return Forbidden error.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// require_permission(&claims, PERM_POST_DRINKS)?;
/// ```
pub fn require_permission(claims: &Claims, permission: &str) -> Result<(), ApiError> {
    if !claims.has_permission(permission) {
        warn!(
            "Subject {} lacks permission {} (has {:?})",
            claims.sub, permission, claims.permissions
        );
        return Err(ApiError::forbidden(
            CODE_PERMISSION_DENIED,
            ERR_PERMISSION_DENIED,
        ));
    }
    Ok(())
}

/// `require_auth` followed by `require_permission`.
pub fn authorize(req: &HttpRequest, permission: &str) -> Result<Claims, ApiError> {
    let claims = require_auth(req)?;
    require_permission(&claims, permission)?;
    Ok(claims)
}
