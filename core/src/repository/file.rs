use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};

use crate::model::file_type::CsvFileType;
use crate::repository::traits::RosterRepository;

const DEFAULT_DIR_NAME: &str = ".rosterview";
const DATA_DIR_NAME: &str = "data";

/// Reads `{base_dir}/{country}/{FileType}_{Month}.csv`.
#[derive(Clone, Debug)]
pub struct FileRosterRepository {
    base_dir: PathBuf,
}

impl FileRosterRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        if !path.is_dir() {
            return Err(anyhow!("Roster data directory not found: {}", path.display()));
        }
        Ok(FileRosterRepository { base_dir: path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_path(&self, country: &str, file_type: CsvFileType, month: &str) -> PathBuf {
        self.base_dir.join(country).join(file_type.file_name(month))
    }

    /// Country folders under the data directory.
    pub fn countries(&self) -> Result<Vec<String>> {
        let mut countries = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    countries.push(name.to_string());
                }
            }
        }
        countries.sort();
        Ok(countries)
    }
}

/// `~/.rosterview/data`
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME).join(DATA_DIR_NAME))
}

impl RosterRepository for FileRosterRepository {
    fn load(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<Option<String>> {
        let path = self.file_path(country, file_type, month);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "loaded roster file");
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "roster file not found");
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn exists(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<bool> {
        Ok(self.file_path(country, file_type, month).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, country: &str, file_type: CsvFileType, month: &str, body: &str) {
        let country_dir = dir.join(country);
        fs::create_dir_all(&country_dir).unwrap();
        fs::write(country_dir.join(file_type.file_name(month)), body).unwrap();
    }

    #[test]
    fn test_load_and_missing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Malta", CsvFileType::DealerShift, "October", "a,b\n");
        let repo = FileRosterRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let text = repo.load("Malta", CsvFileType::DealerShift, "October").unwrap();
        assert_eq!(text.as_deref(), Some("a,b\n"));
        assert_eq!(repo.load("Malta", CsvFileType::SMShift, "October").unwrap(), None);
        assert!(repo.exists("Malta", CsvFileType::DealerShift, "October").unwrap());
    }

    #[test]
    fn test_available_months_need_required_files() {
        let dir = tempdir().unwrap();
        for file_type in CsvFileType::REQUIRED {
            touch(dir.path(), "Malta", file_type, "September", "");
        }
        touch(dir.path(), "Malta", CsvFileType::DailyStats, "October", "");
        touch(dir.path(), "Malta", CsvFileType::DealerShift, "October", "");
        touch(dir.path(), "Cyprus", CsvFileType::SMWH, "May", "");
        let repo = FileRosterRepository::new(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(repo.available_months("Malta").unwrap(), vec!["September"]);
        assert_eq!(
            repo.available_files("Malta", "October").unwrap(),
            vec![CsvFileType::DailyStats, CsvFileType::DealerShift]
        );
        assert_eq!(repo.countries().unwrap(), vec!["Cyprus", "Malta"]);
    }

    #[test]
    fn test_missing_base_dir() {
        let dir = tempdir().unwrap();
        assert!(FileRosterRepository::new(Some(dir.path().join("missing"))).is_err());
    }
}
