//! Command-line front end. Parses arguments, validates form input, calls the
//! use-cases and renders their results.

pub mod document_types;
pub mod documents;
pub mod form;
pub mod render;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::application::services::filtering::{PAGE_SIZES, SortDirection, SortField, SortOrder};
use crate::bootstrap::app_context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "docvault", version, about = "Keep small PDF and image files with metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a new document
    Add(AddArgs),
    /// Edit the metadata or replace the file of a document
    Update(UpdateArgs),
    /// Mark a document as deleted (it can be reactivated)
    Delete { id: Uuid },
    /// Bring a deleted document back
    Reactivate { id: Uuid },
    /// Print one document
    Show {
        id: Uuid,
        #[arg(long)]
        json: bool,
    },
    /// Write a document's file to disk
    Download {
        id: Uuid,
        /// Target path; defaults to the stored file name in the current directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Replace the target if it exists
        #[arg(long)]
        force: bool,
    },
    /// List documents with optional filters
    List(ListArgs),
    /// Manage document types
    #[command(subcommand)]
    Types(TypesCommand),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type-id")]
    pub type_id: Uuid,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub file: PathBuf,
    /// Creation date (YYYY-MM-DD); today when omitted
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: Uuid,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type-id")]
    pub type_id: Option<Uuid>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Name contains (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,
    /// Exact document type id
    #[arg(long = "type-id", conflicts_with = "type_name")]
    pub type_id: Option<Uuid>,
    /// Type name contains (case-insensitive)
    #[arg(long = "type")]
    pub type_name: Option<String>,
    /// Creation date shown as DD/MM/YYYY
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub date: Option<String>,
    /// Created on or after (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Created on or before (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Status contains, e.g. `active` or `deleted`
    #[arg(long)]
    pub status: Option<String>,
    /// Free text matched against every column
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
    #[arg(long)]
    pub desc: bool,
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    #[arg(long = "page-size", value_parser = parse_page_size)]
    pub page_size: Option<usize>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum TypesCommand {
    List,
    Add { name: String },
    Rename { id: Uuid, name: String },
    Remove { id: Uuid },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    Name,
    Type,
    Date,
    Status,
}

impl ListArgs {
    pub fn sort_order(&self) -> Option<SortOrder> {
        let field = match self.sort? {
            SortArg::Name => SortField::Name,
            SortArg::Type => SortField::Type,
            SortArg::Date => SortField::CreationDate,
            SortArg::Status => SortField::Status,
        };
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Some(SortOrder { field, direction })
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw.parse().map_err(|_| format!("{raw:?} is not a number"))?;
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {PAGE_SIZES:?}"))
    }
}

pub async fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add(args) => documents::add(ctx, args).await,
        Command::Update(args) => documents::update(ctx, args).await,
        Command::Delete { id } => documents::delete(ctx, id).await,
        Command::Reactivate { id } => documents::reactivate(ctx, id).await,
        Command::Show { id, json } => documents::show(ctx, id, json).await,
        Command::Download { id, out, force } => documents::download(ctx, id, out, force).await,
        Command::List(args) => documents::list(ctx, args).await,
        Command::Types(cmd) => document_types::run(ctx, cmd).await,
    }
}
