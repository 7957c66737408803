// src/application/commands/documents/create.rs
use super::DocumentCommandService;
use crate::{
    application::{dto::DocumentDto, error::ApplicationResult},
    domain::document::{CollectionName, Document},
};
use serde_json::{Map, Value};

pub struct CreateDocumentCommand {
    pub collection: String,
    pub fields: Map<String, Value>,
    /// Slug chosen by the caller instead of deriving one.
    pub slug: Option<String>,
}

impl CreateDocumentCommand {
    pub fn builder() -> CreateDocumentCommandBuilder {
        CreateDocumentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateDocumentCommandBuilder {
    collection: Option<String>,
    fields: Map<String, Value>,
    slug: Option<String>,
}

impl CreateDocumentCommandBuilder {
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn build(self) -> Result<CreateDocumentCommand, &'static str> {
        Ok(CreateDocumentCommand {
            collection: self.collection.ok_or("collection is required")?,
            fields: self.fields,
            slug: self.slug,
        })
    }
}

impl DocumentCommandService {
    pub async fn create_document(
        &self,
        command: CreateDocumentCommand,
    ) -> ApplicationResult<DocumentDto> {
        let collection = CollectionName::new(command.collection)?;
        let now = self.clock.now();
        let mut document = Document::new(collection, command.fields, now);

        if let Some(slug) = command.slug {
            let field = self.slug_hooks.options_for(&document).slug_field;
            document.set(&field, Value::String(slug));
        }

        if let Some(slug) = self.slug_hooks.before_create(&mut document).await? {
            tracing::info!(collection = %document.collection, slug = %slug, "assigned slug");
        }

        let created = self.write_repo.insert(&document).await?;
        Ok(self.to_dto(created))
    }
}
