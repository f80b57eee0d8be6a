use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Select;
use serde::Serialize;
use std::path::PathBuf;

use treedex::assets::ImageResolver;
use treedex::database::{self, repositories, Database, DatabaseError};
use treedex::screen::render::{self, ListItem};
use treedex::screen::{Navigator, Screen};

#[derive(Parser, Debug)]
#[command(name = "treedex", version, about = "Field guide for identifying tree diseases")]
struct Cli {
    /// Path to the tree database (defaults to the bundled copy in the user
    /// data directory)
    #[arg(long, value_name = "FILE", global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactively drill down from tree type to disease
    Browse,

    /// List all tree types
    Types {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the species of a tree type
    Species {
        /// Tree type id (from `types`)
        #[arg(short, long, value_name = "ID")]
        r#type: i64,
        #[arg(long)]
        json: bool,
    },

    /// List symptoms (location + damage) recorded for a species
    Symptoms {
        /// Species id (from `species`)
        #[arg(short, long, value_name = "ID")]
        tree: i64,
        #[arg(long)]
        json: bool,
    },

    /// Show candidate diseases for a species, location and damage
    Diseases {
        /// Species id (from `species`)
        #[arg(short, long, value_name = "ID")]
        tree: i64,
        /// Location id (from `symptoms`)
        #[arg(short, long, value_name = "ID")]
        location: i64,
        /// Damage id (from `symptoms`)
        #[arg(short, long, value_name = "ID")]
        damage: i64,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let db_path = match cli.database {
        Some(path) => path,
        None => database::default_database_path()?,
    };
    let db = Database::open(&db_path)
        .with_context(|| format!("no usable tree database at {}", db_path.display()))?;
    let resolver = ImageResolver::new(&db_path);

    match cli.command {
        Commands::Browse => browse(&db, &resolver),

        Commands::Types { json } => {
            let rows = repositories::list_tree_types(&db)?;
            if json {
                return print_json(&rows);
            }
            if rows.is_empty() {
                println!("No tree types found.");
            }
            for tree_type in &rows {
                println!(" ▶ [{}] {}", tree_type.id, tree_type.label);
            }
            Ok(())
        }

        Commands::Species { r#type, json } => {
            let rows = repositories::list_species(&db, r#type)?;
            if json {
                return print_json(&rows);
            }
            if rows.is_empty() {
                println!("No species found for tree type {}.", r#type);
            }
            for species in &rows {
                println!(" ▶ [{}] {}", species.id, species.label);
            }
            Ok(())
        }

        Commands::Symptoms { tree, json } => {
            let rows = repositories::list_symptoms(&db, tree)?;
            if json {
                return print_json(&rows);
            }
            if rows.is_empty() {
                println!("No symptoms recorded for species {tree}.");
            }
            for item in render::symptom_list(&rows) {
                match item {
                    ListItem::Header(location) => println!("{location}"),
                    ListItem::Entry { label, index } => {
                        let row = &rows[index];
                        println!(
                            "   ▶ {} (location {} / damage {})",
                            label, row.location_id, row.damage_id
                        );
                    }
                }
            }
            Ok(())
        }

        Commands::Diseases {
            tree,
            location,
            damage,
            json,
        } => {
            let cards = repositories::list_diseases(&db, tree, location, damage)?;
            if json {
                return print_json(&cards);
            }
            if cards.is_empty() {
                println!("No diseases match this selection.");
            }
            for card in &cards {
                for line in render::disease_card_lines(card, &resolver) {
                    println!("{line}");
                }
                println!();
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(rows: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// What the user chose on a screen.
enum Nav {
    Push(Screen),
    Back,
    Retry,
}

/// Interactive drill-down. Each loop turn activates the screen on top of the
/// stack, runs its one query and prompts for a selection; query failures
/// become a visible retry/back state rather than an empty list.
fn browse(db: &Database, resolver: &ImageResolver) -> Result<()> {
    let mut nav = Navigator::new();
    loop {
        match run_screen(db, resolver, nav.current())? {
            Nav::Push(screen) => nav.push(screen),
            Nav::Back => {
                if !nav.pop() {
                    return Ok(());
                }
            }
            Nav::Retry => {}
        }
    }
}

fn run_screen(db: &Database, resolver: &ImageResolver, screen: Screen) -> Result<Nav> {
    match screen {
        Screen::TreeTypes => {
            let types = match repositories::list_tree_types(db) {
                Ok(rows) => rows,
                Err(error) => return failed_screen("the tree types", &error),
            };
            if types.is_empty() {
                return empty_screen("tree types");
            }

            let mut labels: Vec<String> = types.iter().map(|t| t.label.clone()).collect();
            labels.push("✕ Quit".to_string());
            let choice = Select::new()
                .with_prompt("Tree type")
                .items(&labels)
                .default(0)
                .interact()?;
            if choice == types.len() {
                return Ok(Nav::Back);
            }
            Ok(Nav::Push(Screen::Species {
                type_id: types[choice].id,
            }))
        }

        Screen::Species { type_id } => {
            let species = match repositories::list_species(db, type_id) {
                Ok(rows) => rows,
                Err(error) => return failed_screen("this tree type's species", &error),
            };
            if species.is_empty() {
                return empty_screen("species");
            }

            let mut labels: Vec<String> = species.iter().map(|s| s.label.clone()).collect();
            labels.push("← Back".to_string());
            let choice = Select::new()
                .with_prompt("Species")
                .items(&labels)
                .default(0)
                .interact()?;
            if choice == species.len() {
                return Ok(Nav::Back);
            }
            Ok(Nav::Push(Screen::Symptoms {
                tree_id: species[choice].id,
            }))
        }

        Screen::Symptoms { tree_id } => {
            let rows = match repositories::list_symptoms(db, tree_id) {
                Ok(rows) => rows,
                Err(error) => return failed_screen("the symptoms for this species", &error),
            };
            if rows.is_empty() {
                return empty_screen("symptoms");
            }

            let mut labels: Vec<String> = rows
                .iter()
                .map(|row| format!("{} ▸ {}", row.location, row.damage))
                .collect();
            labels.push("← Back".to_string());
            let choice = Select::new()
                .with_prompt("Symptom")
                .items(&labels)
                .default(0)
                .interact()?;
            if choice == rows.len() {
                return Ok(Nav::Back);
            }
            let row = &rows[choice];
            Ok(Nav::Push(Screen::Diseases {
                tree_id: row.tree_id,
                location_id: row.location_id,
                damage_id: row.damage_id,
            }))
        }

        Screen::Diseases {
            tree_id,
            location_id,
            damage_id,
        } => {
            let cards = match repositories::list_diseases(db, tree_id, location_id, damage_id) {
                Ok(rows) => rows,
                Err(error) => return failed_screen("the matching diseases", &error),
            };
            if cards.is_empty() {
                return empty_screen("matching diseases");
            }

            for card in &cards {
                println!();
                for line in render::disease_card_lines(card, resolver) {
                    println!("{line}");
                }
            }
            println!();
            Select::new().items(&["← Back"]).default(0).interact()?;
            Ok(Nav::Back)
        }
    }
}

/// A failed query renders as its own state so the user can tell "nothing
/// matched" apart from "the lookup broke".
fn failed_screen(what: &str, error: &DatabaseError) -> Result<Nav> {
    tracing::error!(%error, "screen query failed");
    println!("✖ Couldn't load {what}: {error}");
    let choice = Select::new()
        .items(&["↻ Retry", "← Back"])
        .default(0)
        .interact()?;
    Ok(if choice == 0 { Nav::Retry } else { Nav::Back })
}

fn empty_screen(what: &str) -> Result<Nav> {
    println!("No {what} here.");
    Select::new().items(&["← Back"]).default(0).interact()?;
    Ok(Nav::Back)
}
