use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use entity::WordSource;
use letterboxed::{candidates, AdjacencyGraph, LetterBox, Solver, DEFAULT_MAX_WORDS};

/// Finds the shortest word chains that use every letter of a Letter Boxed puzzle.
#[derive(Parser)]
#[command(name = "letterboxed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Letters on each side of the box, e.g. `apl bec ndf ghi`.
    #[arg(required = true)]
    sides: Vec<String>,

    /// Most words a solution may use.
    #[arg(short, long, env = "LETTERBOXED_MAX_WORDS", default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Word list with one word per line. Takes precedence over the database.
    #[arg(short, long, env = "WORD_LIST")]
    words: Option<PathBuf>,

    /// Database holding the `word` table, used when no word list is given.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// How many solutions to print.
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,

    /// Show a progress bar while searching.
    #[arg(long)]
    progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let letter_box = LetterBox::new(&cli.sides).context("invalid letter box")?;
    let source = WordSource::resolve(cli.words, cli.database_url)?;
    let dictionary = entity::load(&source)
        .await
        .with_context(|| format!("could not load the dictionary from {:?}", source))?;

    let graph = AdjacencyGraph::build(letter_box.sides());
    let candidates = candidates(&dictionary, &graph);
    info!("{} playable words on {}", candidates.len(), letter_box);

    let solutions =
        Solver::new(&candidates, letter_box.all_letters(), cli.max_words).solve(cli.progress);

    if solutions.is_empty() {
        println!("No solution for {} within {} words", letter_box, cli.max_words);
        return Ok(());
    }

    println!("Found {} solutions", solutions.len());
    for solution in solutions.iter().take(cli.limit) {
        println!("{}", solution);
    }

    Ok(())
}
