//! Item browsing and editing commands.

use clap::Args;

use explorer_core::error::AppError;
use explorer_core::types::SortBy;
use explorer_entity::item::path::child_path;
use explorer_service::{CreateItemRequest, ItemService, UpdateItemRequest};

use super::parse_id;
use crate::output::{self, OutputFormat};

/// Arguments for `ls`
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Folder ID (omit for the root)
    #[arg(long)]
    pub folder: Option<String>,
    /// created_asc, created_desc, name_asc or name_desc
    #[arg(long, default_value = "name_asc")]
    pub sort: SortBy,
}

/// Arguments for `mkdir`
#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Folder name
    pub name: String,
    /// Acting user
    #[arg(long)]
    pub by: String,
    /// Parent folder ID (omit for the root)
    #[arg(long)]
    pub parent: Option<String>,
}

/// Arguments for `touch`
#[derive(Debug, Args)]
pub struct TouchArgs {
    /// File name
    pub name: String,
    /// File type key
    #[arg(long)]
    pub key: String,
    /// Acting user
    #[arg(long)]
    pub by: String,
    /// Parent folder ID (omit for the root)
    #[arg(long)]
    pub parent: Option<String>,
}

/// Arguments for `mv`
#[derive(Debug, Args)]
pub struct MvArgs {
    /// Item ID
    pub id: String,
    /// Acting user; must be the creator
    #[arg(long)]
    pub by: String,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// Destination folder ID
    #[arg(long)]
    pub parent: Option<String>,
}

/// Arguments for `rm`
#[derive(Debug, Args)]
pub struct RmArgs {
    /// Item ID
    pub id: String,
    /// Acting user; must be the creator
    #[arg(long)]
    pub by: String,
}

pub async fn ls(service: &ItemService, args: &LsArgs, format: OutputFormat) -> Result<(), AppError> {
    let folder = args.folder.as_deref().map(parse_id).transpose()?;
    let items = service.list_children(folder, args.sort).await?;
    output::print_items(&items, format);
    Ok(())
}

pub async fn mkdir(
    service: &ItemService,
    args: &MkdirArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let item = service
        .create_item(CreateItemRequest {
            name: args.name.clone(),
            is_folder: true,
            parent_folder_id: args.parent.as_deref().map(parse_id).transpose()?,
            created_by: args.by.clone(),
            ..Default::default()
        })
        .await?;
    output::print_item(&item, format);
    Ok(())
}

pub async fn touch(
    service: &ItemService,
    args: &TouchArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let item = service
        .create_item(CreateItemRequest {
            name: args.name.clone(),
            is_folder: false,
            file_key: Some(args.key.clone()),
            parent_folder_id: args.parent.as_deref().map(parse_id).transpose()?,
            created_by: args.by.clone(),
            path: None,
        })
        .await?;
    output::print_item(&item, format);
    Ok(())
}

/// Rename and/or move. The destination path is derived from the target
/// folder and the (possibly new) name.
pub async fn mv(service: &ItemService, args: &MvArgs, format: OutputFormat) -> Result<(), AppError> {
    let id = parse_id(&args.id)?;

    let (new_parent_folder_id, new_path) = match args.parent.as_deref() {
        Some(raw) => {
            let target = service.get_item(parse_id(raw)?).await?;
            let item = service.get_item(id).await?;
            let name = args.name.as_deref().map(str::trim).unwrap_or(&item.name);
            (Some(target.id), Some(child_path(&target.path, name, item.is_folder)))
        }
        None => (None, None),
    };

    let item = service
        .update_item(
            id,
            UpdateItemRequest {
                name: args.name.clone(),
                updated_by: args.by.clone(),
                new_parent_folder_id,
                new_path,
            },
        )
        .await?;
    output::print_item(&item, format);
    Ok(())
}

pub async fn rm(service: &ItemService, args: &RmArgs) -> Result<(), AppError> {
    let id = parse_id(&args.id)?;
    service.delete_item(id, Some(&args.by)).await?;
    output::print_success(&format!("Deleted {id}"));
    Ok(())
}
