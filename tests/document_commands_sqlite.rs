mod support;

use serde_json::json;
use sluggable::application::commands::documents::{
    CreateDocumentCommand, DeleteDocumentCommand, RegenerateSlugCommand, UpdateDocumentCommand,
};
use sluggable::application::error::ApplicationError;
use sluggable::application::queries::documents::{GetDocumentByIdQuery, GetDocumentBySlugQuery};
use sluggable::domain::errors::{DomainError, InvalidOption};
use support::{fields, fixed_now, sqlite_services};

fn post(title: &str) -> CreateDocumentCommand {
    CreateDocumentCommand::builder()
        .collection("posts")
        .field("title", title)
        .build()
        .unwrap()
}

#[tokio::test]
async fn duplicate_titles_get_numbered_slugs() {
    let services = sqlite_services(&[]).await;

    let first = services.document_commands.create_document(post("Hello World")).await.unwrap();
    let second = services.document_commands.create_document(post("Hello World")).await.unwrap();

    assert_eq!(first.slug.as_deref(), Some("hello-world"));
    assert_eq!(second.slug.as_deref(), Some("hello-world-1"));
    assert_eq!(first.created_at, fixed_now());
}

#[tokio::test]
async fn collections_do_not_share_slugs() {
    let services = sqlite_services(&[]).await;
    services.document_commands.create_document(post("Hello")).await.unwrap();

    let page = CreateDocumentCommand::builder()
        .collection("pages")
        .field("title", "Hello")
        .build()
        .unwrap();
    let page = services.document_commands.create_document(page).await.unwrap();

    assert_eq!(page.slug.as_deref(), Some("hello"));
}

#[tokio::test]
async fn update_follows_the_title() {
    let services = sqlite_services(&[]).await;
    let created = services.document_commands.create_document(post("Draft")).await.unwrap();

    let untouched = services
        .document_commands
        .update_document(UpdateDocumentCommand {
            id: created.id,
            fields: fields(json!({ "body": "text" })),
            slug: None,
        })
        .await
        .unwrap();
    assert_eq!(untouched.slug.as_deref(), Some("draft"));

    let renamed = services
        .document_commands
        .update_document(UpdateDocumentCommand {
            id: created.id,
            fields: fields(json!({ "title": "Final Cut" })),
            slug: None,
        })
        .await
        .unwrap();
    assert_eq!(renamed.slug.as_deref(), Some("final-cut"));
    assert_eq!(renamed.fields["body"], json!("text"));
}

#[tokio::test]
async fn deleted_documents_keep_their_slug_reserved() {
    let services = sqlite_services(&[]).await;
    let created = services.document_commands.create_document(post("Gone")).await.unwrap();

    services
        .document_commands
        .delete_document(DeleteDocumentCommand { id: created.id })
        .await
        .unwrap();

    let lookup = services
        .document_queries
        .get_document_by_slug(GetDocumentBySlugQuery {
            collection: "posts".into(),
            slug: "gone".into(),
        })
        .await;
    assert!(matches!(lookup, Err(ApplicationError::NotFound(_))));

    let replacement = services.document_commands.create_document(post("Gone")).await.unwrap();
    assert_eq!(replacement.slug.as_deref(), Some("gone-1"));

    let again = services
        .document_commands
        .delete_document(DeleteDocumentCommand { id: created.id })
        .await;
    assert!(matches!(again, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn caller_supplied_slug_is_normalized() {
    let services = sqlite_services(&[]).await;
    let command = CreateDocumentCommand::builder()
        .collection("posts")
        .field("title", "Ignored")
        .slug("Custom Choice")
        .build()
        .unwrap();

    let created = services.document_commands.create_document(command).await.unwrap();
    assert_eq!(created.slug.as_deref(), Some("custom-choice"));

    let found = services
        .document_queries
        .get_document_by_slug(GetDocumentBySlugQuery {
            collection: "posts".into(),
            slug: "custom-choice".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn scope_fields_partition_uniqueness() {
    let services = sqlite_services(&[("SLUG_SCOPE_FIELDS", "team_id")]).await;
    let in_team = |team: i64| {
        CreateDocumentCommand::builder()
            .collection("posts")
            .field("title", "Hello World")
            .field("team_id", team)
            .build()
            .unwrap()
    };

    let first = services.document_commands.create_document(in_team(1)).await.unwrap();
    let second = services.document_commands.create_document(in_team(2)).await.unwrap();
    let third = services.document_commands.create_document(in_team(1)).await.unwrap();

    assert_eq!(first.slug.as_deref(), Some("hello-world"));
    assert_eq!(second.slug.as_deref(), Some("hello-world"));
    assert_eq!(third.slug.as_deref(), Some("hello-world-1"));
}

#[tokio::test]
async fn arabic_slugs_round_trip_through_storage() {
    let services = sqlite_services(&[("SLUG_TRANSLITERATION", "arabic")]).await;

    let created = services
        .document_commands
        .create_document(post("Ahlan وسهلا!"))
        .await
        .unwrap();
    assert_eq!(created.slug.as_deref(), Some("ahlan-وسهلا"));

    let found = services
        .document_queries
        .get_document_by_slug(GetDocumentBySlugQuery {
            collection: "posts".into(),
            slug: "ahlan-وسهلا".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn invalid_options_abort_before_insert() {
    let services = sqlite_services(&[("SLUG_MAX_LENGTH", "0")]).await;

    let result = services.document_commands.create_document(post("Hello")).await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidOption(
            InvalidOption::InvalidMaximumLength
        )))
    ));
    let missing = services
        .document_queries
        .get_document_by_id(GetDocumentByIdQuery { id: 1 })
        .await;
    assert!(matches!(missing, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn regenerate_ignores_disabled_update_hook() {
    let services = sqlite_services(&[("SLUG_ON_UPDATE", "false")]).await;
    let created = services.document_commands.create_document(post("Original")).await.unwrap();

    let updated = services
        .document_commands
        .update_document(UpdateDocumentCommand {
            id: created.id,
            fields: fields(json!({ "title": "Renamed" })),
            slug: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.slug.as_deref(), Some("original"));

    let regenerated = services
        .document_commands
        .regenerate_slug(RegenerateSlugCommand { id: created.id })
        .await
        .unwrap();
    assert_eq!(regenerated.slug.as_deref(), Some("renamed"));
}

#[tokio::test]
async fn nested_slug_field_is_supported() {
    let services = sqlite_services(&[("SLUG_FIELD", "meta.slug")]).await;

    let first = services.document_commands.create_document(post("Nested")).await.unwrap();
    let second = services.document_commands.create_document(post("Nested")).await.unwrap();

    assert_eq!(first.slug.as_deref(), Some("nested"));
    assert_eq!(second.slug.as_deref(), Some("nested-1"));
    assert_eq!(first.fields["meta"]["slug"], json!("nested"));

    let found = services
        .document_queries
        .get_document_by_slug(GetDocumentBySlugQuery {
            collection: "posts".into(),
            slug: "nested-1".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, second.id);
}

#[tokio::test]
async fn configured_language_folds_umlauts() {
    let services = sqlite_services(&[("SLUG_LANGUAGE", "de")]).await;

    let created = services.document_commands.create_document(post("Schöne Grüße")).await.unwrap();

    assert_eq!(created.slug.as_deref(), Some("schoene-gruesse"));
}
