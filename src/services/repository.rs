//! Read-only access to the simulated breach dataset.
//!
//! The dataset is loaded once at startup and never mutated, so it is safe
//! to share behind an `Arc` without synchronization.

use crate::models::BreachRecord;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// One dataset entry. The breach source name is the entry's key in the
/// backing file.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetEntry {
    pub date: String,
    pub risk_level: String,
    pub description: String,
    #[serde(default)]
    pub leaked_details: Vec<String>,
}

/// In-memory breach dataset.
pub struct BreachRepository {
    entries: Vec<(String, DatasetEntry)>,
}

impl BreachRepository {
    /// Load the dataset from a JSON file.
    ///
    /// A missing file is a valid empty state: the service degrades to
    /// "no breaches ever found". An unreadable or malformed file is an
    /// error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Breach dataset file not found, starting with an empty dataset"
                );
                return Ok(Self {
                    entries: Vec::new(),
                });
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("failed to read breach dataset {}", path.display())));
            }
        };

        // serde_json is built with `preserve_order`, so lookup results keep
        // the file's entry order.
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid breach dataset {}", path.display()))?;

        let mut entries = Vec::with_capacity(map.len());
        for (source, value) in map {
            let entry: DatasetEntry = serde_json::from_value(value)
                .with_context(|| format!("invalid dataset entry '{}'", source))?;
            entries.push((source, entry));
        }

        tracing::info!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded breach dataset"
        );

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-match scan of every entry's leaked details.
    ///
    /// A detail can appear in more than one breach, so the scan always
    /// covers the whole dataset. Matches come back in dataset order.
    pub fn find_breaches(&self, detail: &str) -> Vec<BreachRecord> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.leaked_details.iter().any(|leaked| leaked == detail))
            .map(|(source, entry)| BreachRecord {
                source: source.clone(),
                date: entry.date.clone(),
                risk_level: entry.risk_level.clone(),
                description: entry.description.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(value: serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(value.to_string().as_bytes())
            .expect("failed to write dataset");
        file
    }

    #[test]
    fn missing_file_yields_empty_dataset() {
        let repo = BreachRepository::load("/definitely/not/there/breaches.json")
            .expect("missing file should not be an error");
        assert!(repo.is_empty());
        assert!(repo.find_breaches("ACC123456").is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(b"not json").expect("failed to write");
        assert!(BreachRepository::load(file.path()).is_err());
    }

    #[test]
    fn lookup_requires_exact_equality() {
        let file = write_dataset(json!({
            "LeakCo": {
                "date": "2023-01-01",
                "risk_level": "high",
                "description": "x",
                "leaked_details": ["ACC123456"]
            }
        }));
        let repo = BreachRepository::load(file.path()).expect("load");

        assert_eq!(repo.find_breaches("ACC123456").len(), 1);
        // No partial or fuzzy matching.
        assert!(repo.find_breaches("ACC123").is_empty());
        assert!(repo.find_breaches("ACC1234567").is_empty());
        assert!(repo.find_breaches("acc123456").is_empty());
    }

    #[test]
    fn detail_in_multiple_breaches_returns_all_in_dataset_order() {
        let file = write_dataset(json!({
            "LeakCo": {
                "date": "2023-01-01",
                "risk_level": "high",
                "description": "x",
                "leaked_details": ["ACC123456", "CARD998877"]
            },
            "DarkWeb Dump": {
                "date": "2024-06-30",
                "risk_level": "medium",
                "description": "y",
                "leaked_details": ["ACC123456"]
            }
        }));
        let repo = BreachRepository::load(file.path()).expect("load");

        let matches = repo.find_breaches("ACC123456");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].source, "LeakCo");
        assert_eq!(matches[1].source, "DarkWeb Dump");

        // Only one record per entry even when other details also leak.
        let matches = repo.find_breaches("CARD998877");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].source, "LeakCo");
    }

    #[test]
    fn entry_without_leaked_details_never_matches() {
        let file = write_dataset(json!({
            "EmptyCo": {
                "date": "2022-05-05",
                "risk_level": "low",
                "description": "no details recorded"
            }
        }));
        let repo = BreachRepository::load(file.path()).expect("load");
        assert_eq!(repo.len(), 1);
        assert!(repo.find_breaches("ACC123456").is_empty());
    }
}
