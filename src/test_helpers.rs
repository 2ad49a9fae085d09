//! Shared fixtures for unit and handler tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::config::CONFIG;
use crate::models::Claims;
use crate::repositories::Repositories;
use crate::services::seed_service::seed_collections;

pub const TEST_SUBJECT: &str = "auth0|barista";

/// In-memory repositories holding the default categories and drink.
pub async fn seeded_repositories() -> Repositories {
    let repositories = Repositories::in_memory();
    seed_collections(&repositories)
        .await
        .expect("seeding in-memory repositories");
    repositories
}

/// Claims for the test subject valid for one hour, with no audience or issuer.
pub fn claims_with(permissions: &[&str]) -> Claims {
    let now = Utc::now();
    Claims {
        sub: TEST_SUBJECT.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        exp: (now + Duration::hours(1)).timestamp() as usize,
        iat: now.timestamp() as usize,
        aud: Vec::new(),
        iss: None,
    }
}

/// Sign `claims` with the configured secret.
pub fn sign_claims(claims: &Claims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )
    .expect("signing test token")
}

/// A token valid for one hour carrying `permissions`.
pub fn token_with(permissions: &[&str]) -> String {
    sign_claims(&claims_with(permissions))
}

/// A token that expired well past the default leeway.
pub fn expired_token() -> String {
    let mut claims = claims_with(&[]);
    claims.exp = (Utc::now() - Duration::hours(2)).timestamp() as usize;
    sign_claims(&claims)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Build the full application over `$repositories` for `test::call_service`.
macro_rules! init_app {
    ($repositories:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    $crate::services::TriviaService::new(&$repositories),
                ))
                .app_data(actix_web::web::Data::new(
                    $crate::services::DrinkService::new(&$repositories),
                ))
                .configure($crate::routes::configure_routes),
        )
        .await
    };
}

pub(crate) use init_app;
