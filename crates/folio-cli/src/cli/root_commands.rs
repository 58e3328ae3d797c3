use clap::{Args, Subcommand};
use folio_core::enums::ContentKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the home page content.
    Home,
    /// Print the about page content.
    About,
    /// List the records of a listed content kind.
    List(ListArgs),
    /// Print one blog post by slug.
    Post(PostArgs),
    /// Describe every content kind and its fields.
    Kinds,
    /// Print the JSON Schema of a kind's canonical record.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Content kind (`project`, `blog_post`, `experience`, `education`,
    /// `skill_experience`, or a collection name).
    #[arg(value_parser = parse_kind)]
    pub kind: ContentKind,

    /// Field to order by.
    #[arg(long, default_value = "createdAt")]
    pub order_by: String,

    /// Oldest first instead of newest first.
    #[arg(long)]
    pub ascending: bool,

    /// Show sample rows when nothing could be loaded.
    #[arg(long)]
    pub samples: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PostArgs {
    /// URL slug of the post.
    pub slug: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Content kind.
    #[arg(value_parser = parse_kind)]
    pub kind: ContentKind,
}

fn parse_kind(value: &str) -> Result<ContentKind, String> {
    value.parse().map_err(|error| format!("{error}"))
}
