use clap::{Args, Subcommand};
use influencers_app::domain::influencers::{
    InfluencersServiceError,
    data::{Accounts, InfluencerDraft},
    filter::NameFilter,
    records::{InfluencerRecord, InfluencerUuid},
};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct InfluencerCommand {
    #[command(subcommand)]
    command: InfluencerSubcommand,
}

#[derive(Debug, Subcommand)]
enum InfluencerSubcommand {
    /// List influencers, optionally filtered by name
    List(ListArgs),
    /// Create an influencer
    Create(CreateArgs),
    /// Delete an influencer by UUID
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Case-insensitive fragment of the first or last name
    #[arg(long)]
    name: Option<String>,
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// First name
    #[arg(long)]
    name: String,

    /// Last name
    #[arg(long)]
    last_name: String,

    /// TikTok handle; repeat for several
    #[arg(long)]
    tiktok: Vec<String>,

    /// Instagram handle; repeat for several
    #[arg(long)]
    instagram: Vec<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Influencer UUID
    uuid: InfluencerUuid,
}

pub(crate) async fn run(command: InfluencerCommand) -> Result<(), String> {
    match command.command {
        InfluencerSubcommand::List(args) => list(args).await,
        InfluencerSubcommand::Create(args) => create(args).await,
        InfluencerSubcommand::Delete(args) => delete(args).await,
    }
}

async fn list(args: ListArgs) -> Result<(), String> {
    let app = args.database.context().await?;

    let influencers = app
        .influencers
        .list_influencers(NameFilter::parse(args.name.as_deref()))
        .await
        .map_err(|error| format!("failed to list influencers: {error}"))?;

    if influencers.is_empty() {
        println!("no influencers found");
    }

    for influencer in &influencers {
        print_influencer(influencer);
    }

    Ok(())
}

async fn create(args: CreateArgs) -> Result<(), String> {
    let app = args.database.context().await?;

    let draft = InfluencerDraft {
        name: Some(args.name),
        last_name: Some(args.last_name),
        accounts: Accounts {
            tiktok: args.tiktok,
            instagram: args.instagram,
        },
    };

    let influencer = match app.influencers.create_influencer(draft).await {
        Ok(influencer) => influencer,
        Err(InfluencersServiceError::Validation(errors)) => {
            return Err(errors.messages().join("\n"));
        }
        Err(error) => return Err(format!("failed to create influencer: {error}")),
    };

    print_influencer(&influencer);

    Ok(())
}

async fn delete(args: DeleteArgs) -> Result<(), String> {
    let app = args.database.context().await?;

    let influencer = app
        .influencers
        .delete_influencer(args.uuid)
        .await
        .map_err(|error| format!("failed to delete influencer: {error}"))?;

    println!("deleted {} {} ({})", influencer.name, influencer.last_name, influencer.uuid);

    Ok(())
}

fn print_influencer(influencer: &InfluencerRecord) {
    println!(
        "{}\t{} {}\ttiktok: {}\tinstagram: {}\tcreated: {}",
        influencer.uuid,
        influencer.name,
        influencer.last_name,
        influencer.accounts.tiktok.join(", "),
        influencer.accounts.instagram.join(", "),
        influencer.created_at,
    );
}
