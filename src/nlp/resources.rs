//! On-disk cache for the part-of-speech lexicon.
//!
//! The lexicon is fetched once per machine and reused from the cache
//! directory afterwards. The download is written through a temp file and
//! renamed into place, so a concurrent process never observes a partial
//! file and repeating the fetch is safe.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::lexicon::Lexicon;
use super::NlpError;

/// Moby Part-of-Speech II, hosted by Project Gutenberg.
const LEXICON_URL: &str = "https://www.gutenberg.org/files/3203/files/mpos/mobypos.txt";
const LEXICON_FILE: &str = "mobypos.txt";

/// Override with `QUIZGEN_DATA_DIR`; defaults to a subdirectory of the
/// system temp directory.
fn data_dir() -> PathBuf {
    std::env::var_os("QUIZGEN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("quizgen"))
}

fn unavailable(reason: impl ToString) -> NlpError {
    NlpError::ResourceUnavailable {
        resource: "part-of-speech lexicon",
        reason: reason.to_string(),
    }
}

/// Load the lexicon from the cache, downloading it first if absent.
pub fn ensure_lexicon() -> Result<Lexicon, NlpError> {
    let path = data_dir().join(LEXICON_FILE);
    if !path.exists() {
        download_lexicon(&path)?;
    }
    let raw = fs::read(&path).map_err(unavailable)?;
    let lexicon = Lexicon::parse_moby(&raw);
    if lexicon.is_empty() {
        return Err(unavailable(format!(
            "cached lexicon at {} contains no entries",
            path.display()
        )));
    }
    Ok(lexicon)
}

fn download_lexicon(path: &Path) -> Result<(), NlpError> {
    let dir = path
        .parent()
        .ok_or_else(|| unavailable("lexicon path has no parent directory"))?;
    fs::create_dir_all(dir).map_err(unavailable)?;

    log::info!("downloading part-of-speech lexicon from {}", LEXICON_URL);
    let body = reqwest::blocking::get(LEXICON_URL)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map_err(unavailable)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(unavailable)?;
    temp.write_all(&body).map_err(unavailable)?;
    temp.persist(path).map_err(unavailable)?;
    log::info!("cached lexicon at {}", path.display());
    Ok(())
}
