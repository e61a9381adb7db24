//! CSV-file [`BaselineBackend`].
//!
//! The baseline is a one-row CSV file with a header:
//!
//! ```text
//! sentence_count,word_count,average_word_length,unique_word_count,character_count,noun_count,adjective_count,verb_count
//! 412,9870,5.2,2301,51324,3410,1202,1488
//! ```
//!
//! Writes never touch the target path directly. The row is first written to
//! a uniquely named sibling temp file, then published:
//!
//! - [`create`](BaselineBackend::create) hard-links the temp file to the
//!   target, which fails atomically when the target already exists;
//! - [`replace`](BaselineBackend::replace) renames it over the target.
//!
//! Readers therefore only ever see a complete file, and two concurrent
//! creators cannot interleave their writes.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use healthstats_core::stats::AggregateRecord;
use healthstats_core::store::BaselineBackend;
use uuid::Uuid;

pub struct CsvFileBackend {
    path: PathBuf,
}

impl CsvFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `record` to a fresh temp file next to the target and returns
    /// its path. The caller publishes or removes it.
    fn write_temp(&self, record: &AggregateRecord) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "baseline.csv".to_string());
        let tmp = parent.join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        let file = File::create(&tmp)
            .with_context(|| format!("Failed to create temp file {}", tmp.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        let written = writer
            .serialize(record)
            .map_err(anyhow::Error::from)
            .and_then(|_| writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e.error())))
            .and_then(|file| file.sync_all().map_err(anyhow::Error::from));

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.context(format!("Failed to write baseline to {}", tmp.display())));
        }

        Ok(tmp)
    }
}

fn read_record(path: &Path) -> Result<Option<AggregateRecord>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open baseline {}", path.display()))
        }
    };

    let mut reader = csv::Reader::from_reader(file);
    match reader.deserialize::<AggregateRecord>().next() {
        Some(row) => {
            let record =
                row.with_context(|| format!("Malformed baseline file {}", path.display()))?;
            Ok(Some(record))
        }
        None => bail!("Baseline file {} has no data row", path.display()),
    }
}

#[async_trait]
impl BaselineBackend for CsvFileBackend {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.path.is_file())
    }

    async fn read(&self) -> Result<Option<AggregateRecord>> {
        read_record(&self.path)
    }

    async fn create(&self, record: &AggregateRecord) -> Result<bool> {
        let tmp = self.write_temp(record)?;
        let linked = fs::hard_link(&tmp, &self.path);
        let _ = fs::remove_file(&tmp);

        match linked {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to publish baseline to {}", self.path.display())),
        }
    }

    async fn replace(&self, record: &AggregateRecord) -> Result<()> {
        let tmp = self.write_temp(record)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e)
                .with_context(|| format!("Failed to replace baseline at {}", self.path.display()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(words: usize) -> AggregateRecord {
        AggregateRecord {
            sentence_count: 3,
            word_count: words,
            average_word_length: 4.5,
            unique_word_count: 7,
            character_count: 45,
            noun_count: 4,
            adjective_count: 1,
            verb_count: 2,
        }
    }

    fn leftover_temp_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count()
    }

    #[tokio::test]
    async fn test_absent_file_reads_none() {
        let tmp = TempDir::new().unwrap();
        let backend = CsvFileBackend::new(tmp.path().join("baseline.csv"));
        assert!(!backend.exists().await.unwrap());
        assert_eq!(backend.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("baseline.csv");
        let backend = CsvFileBackend::new(&path);

        assert!(backend.create(&record(10)).await.unwrap());
        assert!(backend.exists().await.unwrap());
        assert_eq!(backend.read().await.unwrap(), Some(record(10)));

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "sentence_count,word_count,average_word_length,unique_word_count,character_count,noun_count,adjective_count,verb_count"
        );
        assert_eq!(lines.next().unwrap(), "3,10,4.5,7,45,4,1,2");
        assert_eq!(leftover_temp_files(path.parent().unwrap()), 0);
    }

    #[tokio::test]
    async fn test_create_does_not_overwrite() {
        let tmp = TempDir::new().unwrap();
        let backend = CsvFileBackend::new(tmp.path().join("baseline.csv"));

        assert!(backend.create(&record(10)).await.unwrap());
        assert!(!backend.create(&record(99)).await.unwrap());
        assert_eq!(backend.read().await.unwrap(), Some(record(10)));
        assert_eq!(leftover_temp_files(tmp.path()), 0);
    }

    #[tokio::test]
    async fn test_replace_overwrites() {
        let tmp = TempDir::new().unwrap();
        let backend = CsvFileBackend::new(tmp.path().join("baseline.csv"));

        backend.create(&record(10)).await.unwrap();
        backend.replace(&record(20)).await.unwrap();
        assert_eq!(backend.read().await.unwrap(), Some(record(20)));
    }

    #[tokio::test]
    async fn test_reads_file_written_by_hand() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.csv");
        fs::write(
            &path,
            "sentence_count,word_count,average_word_length,unique_word_count,character_count,noun_count,adjective_count,verb_count\n\
             412,9870,5.2,2301,51324,3410,1202,1488\n",
        )
        .unwrap();

        let record = CsvFileBackend::new(&path).read().await.unwrap().unwrap();
        assert_eq!(record.sentence_count, 412);
        assert_eq!(record.verb_count, 1488);
        assert!((record.average_word_length - 5.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_header_only_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.csv");
        fs::write(&path, "sentence_count,word_count\n").unwrap();

        let err = CsvFileBackend::new(&path).read().await.unwrap_err();
        assert!(err.to_string().contains("no data row"));
    }

    #[tokio::test]
    async fn test_concurrent_creates_have_one_winner() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.csv");

        let mut handles = Vec::new();
        for i in 0..8 {
            let path = path.clone();
            handles.push(tokio::spawn(async move {
                CsvFileBackend::new(path).create(&record(100 + i)).await.unwrap()
            }));
        }

        let mut winners = 0;
        for h in handles {
            if h.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);

        let persisted = CsvFileBackend::new(&path).read().await.unwrap().unwrap();
        assert!((100..108).contains(&persisted.word_count));
        assert_eq!(leftover_temp_files(tmp.path()), 0);
    }
}
