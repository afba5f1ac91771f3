//! Writes confirmed records to disk.

use std::path::Path;

use crate::domain::ConfirmedRecord;
use crate::error::{Error, Result};

/// Renders records one `<masked>|<MM/YY>` line each, newline terminated.
#[must_use]
pub fn render(records: &[ConfirmedRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    out
}

/// Overwrites `path` with `records`.
///
/// Nothing is written when `records` is empty; returns whether the file was
/// written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_records(path: &Path, records: &[ConfirmedRecord]) -> Result<bool> {
    if records.is_empty() {
        tracing::info!(path = %path.display(), "no records confirmed, skipping write");
        return Ok(false);
    }
    std::fs::write(path, render(records)).map_err(|source| Error::Io {
        action: "failed to write",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "records written");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candidate, ExpiryTag};

    fn record(id: &str, month: u8, year: u16) -> ConfirmedRecord {
        ConfirmedRecord::from_candidate(
            &Candidate::new(id.into()),
            ExpiryTag::new(month, year).unwrap(),
        )
    }

    #[test]
    fn renders_one_line_per_record() {
        let text = render(&[
            record("4111111111111111", 1, 2026),
            record("4111112222222228", 11, 2030),
        ]);
        assert_eq!(text, "411111111111xxxx|01/26\n411111222222xxxx|11/30\n");
    }

    #[test]
    fn skips_write_when_empty() {
        let dir = std::env::temp_dir().join("luhngen_persist_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");
        std::fs::write(&path, "previous\n").unwrap();

        assert!(!write_records(&path, &[]).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrites_previous_contents() {
        let dir = std::env::temp_dir().join("luhngen_persist_overwrite");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");
        std::fs::write(&path, "stale line\nanother\nand more\n").unwrap();

        assert!(write_records(&path, &[record("4111111111111111", 6, 2027)]).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "411111111111xxxx|06/27\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn reports_unwritable_path() {
        let path = Path::new("/definitely/not/a/dir/out.txt");
        let err = write_records(path, &[record("4111111111111111", 6, 2027)]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
