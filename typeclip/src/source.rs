use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}: {error}", path.display())]
    ReadFile {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to read from stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Nothing to type. Pass a text with `--text`, a file with `--file`, or pipe it in")]
    Empty,
}

/// Read everything piped into `stdin`
pub fn read_piped(mut stdin: impl Read) -> Result<String, SourceError> {
    let mut text = String::new();
    stdin.read_to_string(&mut text).map_err(SourceError::Stdin)?;
    Ok(text)
}

/// Gather the texts to type, in order
///
/// Piped input takes precedence over files, and files over literal texts. Surrounding whitespace
/// is trimmed and texts left empty are skipped.
pub fn collect_texts(
    literals: Vec<String>,
    files: &[PathBuf],
    piped: Option<String>,
) -> Result<Vec<String>, SourceError> {
    let texts = if let Some(piped) = piped {
        vec![piped]
    } else if !files.is_empty() {
        files
            .iter()
            .map(|path| read_file(path))
            .collect::<Result<_, _>>()?
    } else {
        literals
    };

    let texts: Vec<String> = texts
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if texts.is_empty() {
        return Err(SourceError::Empty);
    }

    tracing::info!(count = texts.len(), "collected texts");

    Ok(texts)
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|error| SourceError::ReadFile {
        path: path.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        let texts = collect_texts(
            vec!["  hello world \n".to_string(), "   ".to_string(), "second".to_string()],
            &[],
            None,
        )
        .unwrap();
        assert_eq!(texts, vec!["hello world", "second"]);
    }

    #[test]
    fn test_files_win_over_literals() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "fn main() {}\n").unwrap();
        std::fs::write(&second, "\nlet x = 1;\n").unwrap();

        let texts = collect_texts(vec!["ignored".to_string()], &[first, second], None).unwrap();
        assert_eq!(texts, vec!["fn main() {}", "let x = 1;"]);
    }

    #[test]
    fn test_piped_wins() {
        let piped = read_piped("from a pipe\n".as_bytes()).unwrap();
        let texts = collect_texts(
            vec!["ignored".to_string()],
            &[PathBuf::from("missing.txt")],
            Some(piped),
        )
        .unwrap();
        assert_eq!(texts, vec!["from a pipe"]);
    }

    #[test]
    fn test_missing_file() {
        let error = collect_texts(vec![], &[PathBuf::from("/does/not/exist.txt")], None)
            .unwrap_err();
        assert!(matches!(error, SourceError::ReadFile { .. }));
        assert!(error.to_string().contains("/does/not/exist.txt"));
    }

    #[test]
    fn test_nothing_to_type() {
        assert!(matches!(
            collect_texts(vec![], &[], None),
            Err(SourceError::Empty)
        ));
        assert!(matches!(
            collect_texts(vec![], &[], Some(" \n ".to_string())),
            Err(SourceError::Empty)
        ));
    }
}
