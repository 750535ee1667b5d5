//! quoteit - quote fetch and enrichment CLI
//!
//! Fetches a random quote (optionally filtered by category), enriches it
//! with an author portrait and biography link, and manages the persisted
//! favorites collection.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use quoteit_common::Config;
use quoteit_engine::{Category, Enricher, FavoritesStore, Quote, QuoteSession, QuoteSourceClient};

#[derive(Parser)]
#[command(name = "quoteit", version, about = "Fetch, enrich, and favorite quotes")]
struct Args {
    /// Category filter: motivational, wisdom, success, inspirational, famous-quotes
    #[arg(long)]
    category: Option<String>,

    /// Toggle the fetched quote in the favorites collection
    #[arg(long)]
    save: bool,

    /// Show a random favorite instead of fetching a new quote
    #[arg(long, conflicts_with_all = ["category", "save"])]
    random_favorite: bool,

    /// List the favorites collection in insertion order
    #[arg(long, conflicts_with_all = ["category", "save", "random_favorite"])]
    list_favorites: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the quote itself stays pipeable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = Config::load()?;
    let mut favorites = FavoritesStore::load(&config.favorites_path);

    if args.list_favorites {
        if favorites.is_empty() {
            println!("No favorites yet.");
            return Ok(());
        }
        for (index, quote) in favorites.iter().enumerate() {
            println!("{}. \"{}\" - {}", index + 1, quote.text, quote.author);
        }
        return Ok(());
    }

    if args.random_favorite {
        match favorites.random_pick() {
            Some(quote) => print_quote(quote, true),
            None => println!("No favorites yet."),
        }
        return Ok(());
    }

    let category = match args.category.as_deref() {
        Some("") | None => None,
        Some(tag) => Some(tag.parse::<Category>()?),
    };

    let source = QuoteSourceClient::new(config.quote_timeout)?;
    let enricher = Enricher::new(&config)?;
    let session = QuoteSession::new(source, enricher);

    let quote = session.next_quote(category).await?;

    let favorited = if args.save {
        favorites.toggle(&quote)?
    } else {
        favorites.contains(&quote)
    };

    print_quote(&quote, favorited);

    if args.save {
        if favorited {
            println!("Added to favorites ({} total).", favorites.len());
        } else {
            println!("Removed from favorites ({} total).", favorites.len());
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote, favorited: bool) {
    println!("\"{}\"", quote.text);
    println!("    - {}{}", quote.author, if favorited { "  [favorite]" } else { "" });
    if !quote.tags.is_empty() {
        println!("    tags: {}", quote.tags.join(", "));
    }
    println!("    portrait:  {}", quote.portrait_url);
    println!(
        "    biography: {}{}",
        quote.biography.url,
        if quote.biography.exists { "" } else { " (unverified)" }
    );
    if let Some(extract) = &quote.biography.extract {
        println!("    about: {}", extract);
    }
}
