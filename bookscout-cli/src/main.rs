//! Bookscout CLI - Command-line front-end for book discovery

mod commands;

use anyhow::Result;
use bookscout_core::{SearchField, SortDirection, SortKey};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookscout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for favorites and cached results
    #[arg(long, global = true, default_value = ".bookscout")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search Open Library for books
    Search {
        /// Search term
        term: String,

        /// Record field the term is scoped to
        #[arg(short, long, default_value = "title")]
        field: FieldArg,

        /// Language code filter (e.g. en, fre)
        #[arg(short, long)]
        language: Option<String>,

        /// First publish year filter
        #[arg(short, long)]
        year: Option<String>,

        /// Subject filter
        #[arg(long)]
        subject: Option<String>,

        /// Sort order for the results
        #[arg(short, long, default_value = "relevance")]
        sort: SortArg,

        /// Sort direction
        #[arg(short, long, default_value = "descending")]
        direction: DirectionArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage favorite books
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },

    /// Print candidate cover image URLs for a book
    Covers {
        /// Book key, e.g. /works/OL893415W
        key: String,
    },
}

#[derive(Subcommand)]
enum FavCommands {
    /// List saved favorites
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or remove a book from favorites by key
    Toggle {
        /// Book key from a previous search, e.g. /works/OL893415W
        key: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Title,
    Author,
    Subject,
    Any,
}

impl From<FieldArg> for SearchField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Title => SearchField::Title,
            FieldArg::Author => SearchField::Author,
            FieldArg::Subject => SearchField::Subject,
            FieldArg::Any => SearchField::Any,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Relevance,
    Title,
    Author,
    Year,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortKey::Relevance,
            SortArg::Title => SortKey::Title,
            SortArg::Author => SortKey::Author,
            SortArg::Year => SortKey::Year,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Ascending,
    Descending,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Ascending => SortDirection::Ascending,
            DirectionArg::Descending => SortDirection::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookscout_cli=debug,bookscout_core=debug"
    } else {
        "bookscout_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Search {
            term,
            field,
            language,
            year,
            subject,
            sort,
            direction,
            json,
        } => {
            let options = commands::SearchOptions {
                term,
                field: field.into(),
                language,
                year,
                subject,
                sort: sort.into(),
                direction: direction.into(),
                json,
            };
            commands::search(&cli.data_dir, options).await
        }

        Commands::Fav { command } => match command {
            FavCommands::List { json } => commands::fav_list(&cli.data_dir, json).await,
            FavCommands::Toggle { key } => commands::fav_toggle(&cli.data_dir, &key).await,
        },

        Commands::Covers { key } => commands::covers(&cli.data_dir, &key).await,
    }
}
