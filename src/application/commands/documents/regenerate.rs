// src/application/commands/documents/regenerate.rs
use super::DocumentCommandService;
use crate::application::{dto::DocumentDto, error::ApplicationResult};

pub struct RegenerateSlugCommand {
    pub id: i64,
}

impl DocumentCommandService {
    /// Derives a fresh slug even when lifecycle generation is switched off.
    pub async fn regenerate_slug(
        &self,
        command: RegenerateSlugCommand,
    ) -> ApplicationResult<DocumentDto> {
        let mut document = self.load_live(command.id).await?;

        let slug = self.slug_hooks.regenerate(&mut document).await?;
        document.touch(self.clock.now());
        tracing::info!(collection = %document.collection, id = command.id, slug = %slug, "regenerated slug");

        let updated = self.write_repo.update(&document).await?;
        Ok(self.to_dto(updated))
    }
}
