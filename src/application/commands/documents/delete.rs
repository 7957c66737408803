// src/application/commands/documents/delete.rs
use super::DocumentCommandService;
use crate::application::error::ApplicationResult;

pub struct DeleteDocumentCommand {
    pub id: i64,
}

impl DocumentCommandService {
    /// Soft delete; the slug stays reserved for the collection.
    pub async fn delete_document(&self, command: DeleteDocumentCommand) -> ApplicationResult<()> {
        let document = self.load_live(command.id).await?;
        if let Some(id) = document.id {
            self.write_repo.soft_delete(id, self.clock.now()).await?;
        }
        Ok(())
    }
}
