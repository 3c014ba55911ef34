//! CSV record writer
//!
//! Writes one row per record with columns Title, Category, Journalist,
//! Time, Content, in sequence order, into a fixed output directory that is
//! created on demand.

use crate::crawler::SequencedRecord;
use crate::output::traits::{OutputResult, RecordWriter};
use std::path::{Path, PathBuf};

/// Writes crawl records as a CSV file
#[derive(Debug, Clone)]
pub struct CsvWriter {
    directory: PathBuf,
}

impl CsvWriter {
    /// Creates a writer targeting the given output directory
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl RecordWriter for CsvWriter {
    fn save(&self, records: &[SequencedRecord], file_name: &str) -> OutputResult<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(file_name);
        let mut writer = csv::Writer::from_path(&path)?;

        for record in records {
            writer.serialize(&record.article)?;
        }
        writer.flush()?;

        tracing::info!(records = records.len(), path = %path.display(), "records saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::Article;
    use tempfile::tempdir;

    fn record(seq: u64, title: &str) -> SequencedRecord {
        SequencedRecord {
            seq,
            article: Article {
                title: title.to_string(),
                category: "要聞".to_string(),
                journalist: "王記者".to_string(),
                published_at: "2020-08-20 14:30".to_string(),
                content: "內文段落。".to_string(),
            },
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let writer = CsvWriter::new(dir.path());

        let path = writer
            .save(&[record(1, "第一篇"), record(2, "第二篇")], "news.csv")
            .unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Title,Category,Journalist,Time,Content"
        );
        assert!(lines.next().unwrap().starts_with("第一篇,"));
        assert!(lines.next().unwrap().starts_with("第二篇,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("news");
        let writer = CsvWriter::new(&nested);

        let path = writer.save(&[record(1, "標題")], "news.csv").unwrap();
        assert!(path.exists());
        assert_eq!(path, nested.join("news.csv"));
    }

    #[test]
    fn test_empty_run_writes_header_only() {
        let dir = tempdir().unwrap();
        let writer = CsvWriter::new(dir.path());

        let path = writer.save(&[], "news.csv").unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        // serde-based writers emit no header without at least one row
        assert!(content.is_empty() || content.lines().count() <= 1);
    }
}
