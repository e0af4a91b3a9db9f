use clap::{Args, Parser, Subcommand};
use influencers_app::{
    context::{AppContext, AppInitOptions},
    database,
};

mod db;
mod influencer;

#[derive(Debug, Parser)]
#[command(name = "influencers-app", about = "Influencers CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Influencer(influencer::InfluencerCommand),
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    async fn pool(&self) -> Result<sqlx::PgPool, String> {
        database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    async fn context(&self) -> Result<AppContext, String> {
        AppContext::from_database_url(&self.database_url, AppInitOptions::default())
            .await
            .map_err(|error| format!("failed to initialise app context: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Influencer(command) => influencer::run(command).await,
        }
    }
}
