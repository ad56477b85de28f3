use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use sea_orm::DbErr;
use thiserror::Error;

use crate::connection::{fetch_words, get_connection};

#[derive(Error, Debug)]
pub enum WordSourceError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not load words from the database")]
    Database(#[from] DbErr),
    #[error("no word list given and DATABASE_URL is not set")]
    Unconfigured,
}

/// Where a solver's dictionary comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Database(String),
}

impl WordSource {
    /// A word list file wins over a database url. With neither there is
    /// nothing to solve against.
    pub fn resolve(
        words: Option<PathBuf>,
        database_url: Option<String>,
    ) -> Result<Self, WordSourceError> {
        match (words, database_url) {
            (Some(path), _) => Ok(WordSource::File(path)),
            (None, Some(url)) => Ok(WordSource::Database(url)),
            (None, None) => Err(WordSourceError::Unconfigured),
        }
    }
}

/// Splits a word list into lowercase words, one per line, skipping blanks.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub fn read_word_list(path: &Path) -> Result<Vec<String>, WordSourceError> {
    let text = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_owned(),
        source,
    })?;

    Ok(parse_word_list(&text))
}

pub async fn load(source: &WordSource) -> Result<Vec<String>, WordSourceError> {
    let words = match source {
        WordSource::File(path) => read_word_list(path)?,
        WordSource::Database(url) => {
            let db = get_connection(url).await?;
            fetch_words(&db).await?
        }
    };
    info!("loaded {} words from {:?}", words.len(), source);

    Ok(words)
}
