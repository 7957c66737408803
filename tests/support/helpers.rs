// tests/support/helpers.rs
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use sluggable::application::ports::time::Clock;
use sluggable::application::services::ApplicationServices;
use sluggable::config::SlugConfig;
use sluggable::domain::document::{Document, DocumentReadRepository, DocumentWriteRepository};
use sluggable::domain::slug::{SlugGenerators, SlugOptionsProvider, SlugRepository, SlugService};
use sluggable::infrastructure::database;
use sluggable::infrastructure::repositories::SqliteDocumentRepository;

use super::mocks::{FixedClock, InMemorySlugRepo};

pub fn slug_service(repo: Arc<InMemorySlugRepo>) -> SlugService {
    SlugService::new(repo, SlugGenerators::standard())
}

pub fn config_with(vars: &[(&str, &str)]) -> SlugConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    SlugConfig::from_lookup(|key: &str| vars.get(key).cloned()).expect("valid test config")
}

/// Services wired to a fresh in-memory SQLite store.
pub async fn sqlite_services(vars: &[(&str, &str)]) -> ApplicationServices {
    let config = config_with(vars);

    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("run migrations");

    let store = Arc::new(SqliteDocumentRepository::new(Arc::new(pool)));
    let write_repo: Arc<dyn DocumentWriteRepository> = store.clone();
    let read_repo: Arc<dyn DocumentReadRepository> = store.clone();
    let slug_repo: Arc<dyn SlugRepository> = store;
    let slug_options: Arc<dyn SlugOptionsProvider<Document>> = Arc::new(config.clone());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    ApplicationServices::new(
        write_repo,
        read_repo,
        slug_repo,
        SlugGenerators::standard(),
        slug_options,
        config.slug_field(),
        clock,
    )
}

pub fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
