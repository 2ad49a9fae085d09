//! Startup seeding of the default trivia categories and drink catalog.

use log::{info, warn};

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{default_drink, DEFAULT_CATEGORIES};
use crate::repositories::Repositories;

/// Seed empty collections when `SEED_DATA` is enabled.
///
/// Collections that already hold records are left untouched.
pub async fn seed_defaults(repositories: &Repositories) -> Result<(), ApiError> {
    if !CONFIG.seed_data {
        info!("Data seeding is disabled (SEED_DATA=false)");
        return Ok(());
    }
    seed_collections(repositories).await
}

pub(crate) async fn seed_collections(repositories: &Repositories) -> Result<(), ApiError> {
    if repositories.categories.count().await? == 0 {
        for kind in DEFAULT_CATEGORIES {
            repositories.categories.insert(kind).await?;
        }
        info!("Seeded {} trivia categories", DEFAULT_CATEGORIES.len());
    } else {
        info!("Categories already present, skipping seed");
    }

    if repositories.drinks.count().await? == 0 {
        let drink = repositories.drinks.insert(default_drink()).await?;
        info!("Seeded drink catalog with '{}'", drink.title);
    } else {
        warn!("Drink catalog not empty, skipping seed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repositories = Repositories::in_memory();
        seed_collections(&repositories).await.unwrap();
        seed_collections(&repositories).await.unwrap();

        let categories = repositories.categories.find_all().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[4].id, 5);
        assert_eq!(repositories.drinks.count().await.unwrap(), 1);
    }
}
