//! JWT Authentication middleware for the drink catalog.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, DecodingKey, Validation};
use log::{debug, warn};
use std::rc::Rc;

use crate::config::{Config, CONFIG};
use crate::constants::{
    CODE_INVALID_HEADER, CODE_INVALID_TOKEN, CODE_TOKEN_EXPIRED, ERR_INVALID_HEADER,
    ERR_INVALID_TOKEN, ERR_TOKEN_EXPIRED,
};
use crate::errors::ApiError;
use crate::models::Claims;
use crate::utils::{mask_authorization, mask_token};

use super::RequestExt;

/// JWT Authentication middleware.
///
/// Requests without an Authorization header pass through untouched so that
/// public routes can share a scope with protected ones; handlers decide with
/// `require_auth`. A header that is present must be a valid HS256 bearer
/// token, otherwise the request is rejected here. Decoded claims are added
/// to the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let auth_header = match req.headers().get(AUTHORIZATION) {
                None => return service.call(req).await,
                Some(value) => value.to_str().unwrap_or_default().to_string(),
            };

            let token = bearer_token(&auth_header).ok_or_else(|| {
                warn!(
                    "Rejecting malformed Authorization header: {}",
                    mask_authorization(&auth_header)
                );
                ApiError::unauthorized(CODE_INVALID_HEADER, ERR_INVALID_HEADER)
            })?;

            let claims = verify_token(token, &CONFIG)?;
            debug!(
                "Authenticated {} with token {}",
                claims.sub,
                mask_token(token)
            );

            req.attach_claims(claims);

            service.call(req).await
        })
    }
}

/// The credentials of a `Bearer <token>` header; the scheme is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}

/// Verification rules derived from the configuration.
///
/// A configured audience or issuer makes the matching claim mandatory;
/// jsonwebtoken only compares `aud` and `iss` when they are listed as
/// required or present in the token.
pub fn token_validation(config: &Config) -> Validation {
    let mut validation = Validation::default();
    let mut required = vec!["exp"];

    match &config.jwt_audience {
        Some(audience) => {
            validation.set_audience(&[audience]);
            required.push("aud");
        }
        None => validation.validate_aud = false,
    }
    if let Some(issuer) = &config.jwt_issuer {
        validation.set_issuer(&[issuer]);
        required.push("iss");
    }

    validation.set_required_spec_claims(&required);
    validation
}

/// Verify the signature and standard claims of a bearer token.
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &token_validation(config),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => {
            ApiError::unauthorized(CODE_TOKEN_EXPIRED, ERR_TOKEN_EXPIRED)
        }
        _ => {
            warn!("Token verification failed: {}", e);
            ApiError::unauthorized(CODE_INVALID_TOKEN, ERR_INVALID_TOKEN)
        }
    })
}
