use folio_store::DocumentStore;

use crate::cli::root_commands::Commands;
use crate::commands::content;
use crate::context::AppContext;
use crate::output::output;

/// Dispatch a parsed content command to its handler and print the result.
pub async fn dispatch<S: DocumentStore>(command: Commands, ctx: &AppContext<S>) -> anyhow::Result<()> {
    let response = match command {
        Commands::Home => content::home(ctx).await?,
        Commands::About => content::about(ctx).await?,
        Commands::List(args) => content::list(&args, ctx).await?,
        Commands::Post(args) => content::post(&args, ctx).await?,
        Commands::Kinds | Commands::Schema(_) => {
            unreachable!("kinds/schema are pre-dispatched in main")
        }
    };
    output(&response, ctx.format)
}
