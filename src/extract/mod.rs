//! Best-effort plain-text extraction from documents.
//!
//! PDF parsing goes through the `pdf-extract` crate, which already skips
//! unreadable content streams and contributes whatever text it can recover;
//! only a document that cannot be parsed at all surfaces as an error here.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum ExtractError {
    Io(io::Error),
    Pdf(String),
    UnsupportedFormat(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Io(e) => write!(f, "failed to read document: {}", e),
            ExtractError::Pdf(reason) => write!(f, "failed to extract PDF text: {}", reason),
            ExtractError::UnsupportedFormat(ext) => {
                write!(f, "unsupported document format: .{}", ext)
            }
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExtractError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(err: io::Error) -> Self {
        ExtractError::Io(err)
    }
}

/// Extract plain text from a document on disk, dispatching on extension.
///
/// `.pdf` goes through the PDF backend; `.txt` and `.md` are read as-is.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => {
            let bytes = fs::read(path)?;
            extract_text_from_pdf(&bytes)
        }
        "txt" | "md" | "text" => Ok(fs::read_to_string(path)?),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

/// Extract all recoverable text from in-memory PDF bytes.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        log::warn!("PDF parsed but yielded no text (scanned or image-only document?)");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_plain_text_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("notes.txt");
        let mut file = fs::File::create(&path).expect("create file");
        writeln!(file, "The cat sat on the mat.").expect("write file");

        let text = extract_text(&path).expect("extract text");
        assert!(text.contains("cat sat"));
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = extract_text(Path::new("slides.pptx")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ext) if ext == "pptx"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = extract_text(Path::new("does-not-exist.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn garbage_bytes_are_not_a_pdf() {
        let err = extract_text_from_pdf(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
