use crate::{error::*, tools::clean::clean, types::*};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for the file written next to the original.
pub const CLEANED_PREFIX: &str = "cleaned_";

/// What a file run produced.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub raw: String,
    pub outcome: CleanOutcome,
    pub output: PathBuf,
}

/// Sibling path `cleaned_<name>` for `path`.
pub fn cleaned_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| CleanError::InvalidPath(path.to_path_buf()))?;
    let mut cleaned = std::ffi::OsString::from(CLEANED_PREFIX);
    cleaned.push(name);
    Ok(path.with_file_name(cleaned))
}

/// Clean a UTF-8 text file into `cleaned_<name>`. The original is never modified.
pub fn clean_file(path: &Path, opts: &Options) -> Result<FileOutcome> {
    if !path.is_file() {
        if path.exists() {
            return Err(CleanError::InvalidPath(path.to_path_buf()));
        }
        return Err(CleanError::FileNotFound(path.to_path_buf()));
    }
    let output = cleaned_path(path)?;

    let raw = fs::read_to_string(path)?;
    let outcome = clean(&raw, opts);
    fs::write(&output, &outcome.text)?;

    info!(input = %path.display(), output = %output.display(), "file cleaned");
    Ok(FileOutcome {
        raw,
        outcome,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaned_path() {
        assert_eq!(
            cleaned_path(Path::new("notes/today.txt")).unwrap(),
            PathBuf::from("notes/cleaned_today.txt")
        );
        assert_eq!(
            cleaned_path(Path::new("plain")).unwrap(),
            PathBuf::from("cleaned_plain")
        );
        assert!(matches!(
            cleaned_path(Path::new("..")),
            Err(CleanError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_clean_file_writes_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paste.txt");
        let original = "Hello   \u{2018}world\u{2019}\n\n\n\nhttps://x.com/?utm_source=a&k=v\n";
        fs::write(&input, original).unwrap();

        let result = clean_file(&input, &Options::new().with_summary(true)).unwrap();

        assert_eq!(result.output, dir.path().join("cleaned_paste.txt"));
        assert_eq!(
            fs::read_to_string(&result.output).unwrap(),
            "Hello 'world'\n\nhttps://x.com/?k=v"
        );
        assert_eq!(result.raw, original);
        assert_eq!(result.outcome.summary.count(ChangeKind::UtmParams), 1);
        // original untouched
        assert_eq!(fs::read_to_string(&input).unwrap(), original);
    }

    #[test]
    fn test_clean_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = clean_file(&missing, &Options::default()).unwrap_err();
        assert!(matches!(err, CleanError::FileNotFound(p) if p == missing));
        assert!(!dir.path().join("cleaned_nope.txt").exists());
    }

    #[test]
    fn test_clean_file_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = clean_file(dir.path(), &Options::default()).unwrap_err();
        assert!(matches!(err, CleanError::InvalidPath(_)));
    }

    #[test]
    fn test_clean_file_not_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bin.dat");
        fs::write(&input, [0xff, 0xfe, 0x00]).unwrap();
        let err = clean_file(&input, &Options::default()).unwrap_err();
        assert!(matches!(err, CleanError::Io(_)));
    }
}
