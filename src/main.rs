use std::path::PathBuf;

use anyhow::bail;
use catalog::NewVlog;
use chrono::Utc;
use clap::{Parser, Subcommand};
use reqwest::Client;
use tracing_subscriber::{EnvFilter, fmt};

use vlogsphere::{
    api::{CatalogClient, DEFAULT_API_URL},
    error::ClientError,
    interactions::InteractionStore,
    page::{ALL_CATEGORIES, Page},
    reaction::Action,
    render::{render_card, render_list},
    storage::FileStorage,
    sync::SyncClient,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "VLOGSPHERE_API", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where this installation keeps its likes and dislikes.
    #[arg(long, env = "VLOGSPHERE_STATE", default_value = ".vlogsphere.json")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show vlogs, optionally filtered by title and category.
    List {
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    Like {
        id: String,
    },

    Dislike {
        id: String,
    },

    /// Submit a new vlog.
    Add {
        #[arg(long)]
        creator: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        video_url: String,

        #[arg(long)]
        category: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let http = Client::new();
    let catalog = CatalogClient::new(http.clone(), &args.api_url);
    let interactions = InteractionStore::load(FileStorage::new(&args.state_file));
    let mut page = Page::new(interactions, SyncClient::new(http, &args.api_url));

    match args.command {
        Command::List { search, category } => {
            page.load(catalog.fetch_vlogs().await?);
            page.set_search(search);
            page.set_category(category);

            let cards = page.visible().map(|vlog| (vlog, page.reaction(&vlog.id)));
            println!("{}", render_list(cards, Utc::now()));
        }
        Command::Like { id } => press(&mut page, &catalog, &id, Action::PressLike).await?,
        Command::Dislike { id } => press(&mut page, &catalog, &id, Action::PressDislike).await?,
        Command::Add {
            creator,
            title,
            description,
            video_url,
            category,
        } => {
            let form = NewVlog {
                creator_name: creator,
                title,
                description,
                video_url,
                category,
                upload_date: Some(Utc::now()),
            };

            match catalog.create_vlog(form).await {
                Ok(vlog) => {
                    println!("Vlog submitted!\n");
                    println!("{}", render_card(&vlog, Default::default(), Utc::now()));
                }
                Err(ClientError::Invalid(errors)) => {
                    for error in &errors {
                        eprintln!("  {:?}: {error}", error.field);
                    }
                    bail!(ClientError::Invalid(errors));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

async fn press(
    page: &mut Page<FileStorage, SyncClient>,
    catalog: &CatalogClient,
    id: &str,
    action: Action,
) -> anyhow::Result<()> {
    page.load(catalog.fetch_vlogs().await?);

    let outcome = page.press(id, action).await?;
    println!(
        "{}",
        render_card(&outcome.vlog, outcome.transition.next, Utc::now())
    );

    if !outcome.synced {
        eprintln!("Server not updated; your choice is saved locally.");
    }

    Ok(())
}
