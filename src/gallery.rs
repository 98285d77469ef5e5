use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::model::Entry;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("parse: {0}")]
    Parse(serde_json::Error),

    #[error("serialize: {0}")]
    Serialize(serde_json::Error),

    #[error("write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub fn load(path: &Path) -> Result<Vec<Entry>, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let buf = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<Entry> = serde_json::from_str(&buf).map_err(Error::Parse)?;

    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());

    Ok(entries)
}

/// Whole-file rewrite. 4-space indent, non-ASCII kept verbatim, so the
/// output diffs cleanly against the hand-maintained file.
pub fn save(path: &Path, entries: &[Entry]) -> Result<(), Error> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

    entries.serialize(&mut ser).map_err(Error::Serialize)?;

    fs::write(path, &buf).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("wrote {} entries to {}", entries.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entry(id: u32, title: &str) -> Entry {
        Entry {
            id,
            category: "Cinematic".to_owned(),
            title: title.to_owned(),
            url: format!("https://example.com/{id}"),
            prompt: format!("prompt {id}"),
            date_added: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        }
    }

    #[test]
    fn round_trips_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");

        let entries = vec![entry(2, "Neon Samurai Night"), entry(1, "Luxury Cloud Loft")];

        save(&path, &entries).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn keeps_non_ascii_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");

        // titles in the hand-maintained file are partly Korean
        save(&path, &[entry(1, "네온 사무라이")]).unwrap();

        let buf = fs::read_to_string(&path).unwrap();

        assert!(buf.contains("네온 사무라이"));
        assert!(!buf.contains("\\u"));
    }

    #[test]
    fn writes_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");

        save(&path, &[entry(1, "a")]).unwrap();

        let buf = fs::read_to_string(&path).unwrap();

        assert!(buf.starts_with("[\n    {\n        \"id\": 1,"));
    }

    #[test]
    fn missing_file_is_reported_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");

        let err = load(&path).unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        assert!(!path.exists());
    }

    #[test]
    fn malformed_contents_are_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");

        fs::write(&path, "{ definitely not a gallery").unwrap();

        assert!(matches!(load(&path).unwrap_err(), Error::Parse(_)));
    }

    #[test]
    fn non_array_top_level_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");

        fs::write(&path, "{}").unwrap();

        assert!(matches!(load(&path).unwrap_err(), Error::Parse(_)));
    }
}
