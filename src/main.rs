use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use usuarios::commands::{add_user, delete_user, init_project, list_users, run_console};
use usuarios::models::Usuario;

/// usuarios - list, edit and delete users on a REST backend
#[derive(Parser)]
#[command(name = "usuarios")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the backend collection URL
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default usuarios.toml
    Init {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Print the users table
    List,

    /// Register a new user
    Add {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        sobrenome: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        cpf: String,
    },

    /// Delete a user after confirmation
    Delete {
        /// User id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive list/edit console
    Console,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let project_root = std::env::current_dir().context("resolve working directory")?;
    let url = cli.url;

    match cli.command {
        Commands::Init { path } => {
            let root = path.unwrap_or(project_root);
            init_project(&root, url)?;
        }

        Commands::List => list_users(&project_root, url).await?,

        Commands::Add {
            nome,
            sobrenome,
            email,
            cpf,
        } => {
            let usuario = Usuario::new(nome, sobrenome, email, cpf);
            add_user(&project_root, url, usuario).await?;
        }

        Commands::Delete { id, yes } => delete_user(&project_root, url, &id, yes).await?,

        Commands::Console => run_console(&project_root, url).await?,
    }

    Ok(())
}
