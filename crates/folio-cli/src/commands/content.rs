use anyhow::{Context, bail};
use serde::Serialize;
use serde_json::Value;

use folio_core::entities::{
    AboutContent, BlogPost, EducationItem, ExperienceItem, HomeContent, ListedRecord, Project,
    SkillExperience,
};
use folio_core::enums::{ContentKind, SortDirection};
use folio_store::{DocumentStore, ListOutcome};

use crate::cli::root_commands::{ListArgs, PostArgs};
use crate::context::AppContext;

fn to_value<T: Serialize>(value: &T) -> anyhow::Result<Value> {
    serde_json::to_value(value).context("failed to serialize response")
}

/// Handle `folio home`.
pub async fn home<S: DocumentStore>(ctx: &AppContext<S>) -> anyhow::Result<Value> {
    let home: HomeContent = ctx.repo.fetch_singleton().await;
    to_value(&home)
}

/// Handle `folio about`.
pub async fn about<S: DocumentStore>(ctx: &AppContext<S>) -> anyhow::Result<Value> {
    let about: AboutContent = ctx.repo.fetch_singleton().await;
    to_value(&about)
}

/// Handle `folio list`.
pub async fn list<S: DocumentStore>(args: &ListArgs, ctx: &AppContext<S>) -> anyhow::Result<Value> {
    match args.kind {
        ContentKind::Home | ContentKind::About => bail!(
            "'{}' is a single document; use `folio {}` instead",
            args.kind,
            args.kind
        ),
        ContentKind::Experience => list_kind::<S, ExperienceItem>(args, ctx).await,
        ContentKind::Education => list_kind::<S, EducationItem>(args, ctx).await,
        ContentKind::SkillExperience => list_kind::<S, SkillExperience>(args, ctx).await,
        ContentKind::BlogPost => list_kind::<S, BlogPost>(args, ctx).await,
        ContentKind::Project => list_kind::<S, Project>(args, ctx).await,
    }
}

async fn list_kind<S: DocumentStore, T: ListedRecord>(
    args: &ListArgs,
    ctx: &AppContext<S>,
) -> anyhow::Result<Value> {
    let direction = if args.ascending {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };
    let outcome = ctx.repo.fetch_list::<T>(&args.order_by, direction).await;
    let records = match outcome {
        outcome if args.samples => outcome.or_samples(),
        ListOutcome::Failed(error) => {
            return Err(error).with_context(|| format!("failed to list {}", args.kind));
        }
        outcome => outcome.into_records(),
    };
    to_value(&records)
}

/// Handle `folio post`.
pub async fn post<S: DocumentStore>(args: &PostArgs, ctx: &AppContext<S>) -> anyhow::Result<Value> {
    match ctx.repo.fetch_by_slug(&args.slug).await {
        Some(post) => to_value(&post),
        None => bail!("no blog post found for slug '{}'", args.slug),
    }
}
