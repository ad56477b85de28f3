use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use entity::WordSource;
use spellingbee::{LetterBank, SpellingBeeSolver};

/// Lists Spelling Bee answers, pangrams first.
#[derive(Parser)]
#[command(name = "spellingbee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The center letter followed by the outer letters, e.g. `aplebnt`.
    letters: String,

    /// Word list with one word per line. Takes precedence over the database.
    #[arg(short, long, env = "WORD_LIST")]
    words: Option<PathBuf>,

    /// Database holding the `word` table, used when no word list is given.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// How many words to print.
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let letters: LetterBank = cli.letters.parse().context("invalid letters")?;
    let mut outer: Vec<char> = letters.outer().iter().copied().collect();
    outer.sort_unstable();
    info!(
        "center letter {}, outer letters {}",
        letters.center(),
        outer.into_iter().collect::<String>()
    );
    let source = WordSource::resolve(cli.words, cli.database_url)?;
    let word_bank = entity::load(&source)
        .await
        .with_context(|| format!("could not load the dictionary from {:?}", source))?;

    let solver = SpellingBeeSolver::new(letters);
    let solution = solver.solve(&word_bank);

    println!("Found {} words", solution.len());
    for word in solution.iter().take(cli.limit) {
        println!("{}", word);
    }

    Ok(())
}
