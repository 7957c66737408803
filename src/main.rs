use anyhow::{Context, Result};
use serde_json::{Map, Value};
use sluggable::{
    application::{
        commands::documents::CreateDocumentCommand, ports::ClockPort,
        services::ApplicationServices,
    },
    config::SlugConfig,
    domain::{
        document::{Document, DocumentReadRepository, DocumentWriteRepository},
        slug::{SlugGenerators, SlugOptionsProvider, SlugRepository},
    },
    infrastructure::{database, repositories::SqliteDocumentRepository, time::SystemClock},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

/// Stores one document per title given on the command line and prints the
/// slug each one received.
async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = SlugConfig::from_env()?;
    let titles: Vec<String> = std::env::args().skip(1).collect();
    if titles.is_empty() {
        eprintln!("usage: sluggable <title>...");
        return Ok(());
    }

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .with_context(|| format!("opening {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let store = Arc::new(SqliteDocumentRepository::new(Arc::clone(&pool)));
    let write_repo: Arc<dyn DocumentWriteRepository> = store.clone();
    let read_repo: Arc<dyn DocumentReadRepository> = store.clone();
    let slug_repo: Arc<dyn SlugRepository> = store;
    let slug_options: Arc<dyn SlugOptionsProvider<Document>> = Arc::new(config.clone());
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        write_repo,
        read_repo,
        slug_repo,
        SlugGenerators::standard(),
        slug_options,
        config.slug_field(),
        clock,
    );

    tracing::info!(
        collection = config.collection(),
        transliteration = ?config.transliteration(),
        "storing {} document(s)",
        titles.len()
    );

    let title_field = config
        .source_fields()
        .first()
        .cloned()
        .unwrap_or_else(|| "title".to_string());

    for title in titles {
        let mut fields = Map::new();
        fields.insert(title_field.clone(), Value::String(title.clone()));
        let command = CreateDocumentCommand {
            collection: config.collection().to_string(),
            fields,
            slug: None,
        };

        let created = services.document_commands.create_document(command).await?;
        println!(
            "{}\t{}\t{}",
            created.id,
            created.slug.as_deref().unwrap_or(""),
            title
        );
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
