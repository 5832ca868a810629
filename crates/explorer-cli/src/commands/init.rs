//! Bootstrap the item store.

use explorer_core::error::AppError;
use explorer_service::ItemService;

use crate::output;

/// Execute the init command
pub async fn execute(service: &ItemService) -> Result<(), AppError> {
    let outcome = service.initialize().await?;
    if outcome.created {
        output::print_success(&outcome.message);
    } else {
        output::print_success("Already initialized");
    }
    let root = service.root().await?;
    output::print_kv("Root", &root.path);
    output::print_kv("Root ID", &root.id.to_string());
    Ok(())
}
