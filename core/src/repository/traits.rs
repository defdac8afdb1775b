use anyhow::Result;

use crate::model::file_type::CsvFileType;
use crate::time::MONTH_NAMES;

/// Source of raw roster CSV text, addressed by country, file type and
/// English month name.
pub trait RosterRepository {
    /// `Ok(None)` when the file does not exist.
    fn load(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<Option<String>>;
    fn exists(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<bool>;

    /// Months, in calendar order, for which every required file is present.
    fn available_months(&self, country: &str) -> Result<Vec<String>> {
        let mut months = Vec::new();
        for month in MONTH_NAMES {
            let mut complete = true;
            for file_type in CsvFileType::REQUIRED {
                if !self.exists(country, file_type, month)? {
                    complete = false;
                    break;
                }
            }
            if complete {
                months.push(month.to_string());
            }
        }
        Ok(months)
    }

    fn available_files(&self, country: &str, month: &str) -> Result<Vec<CsvFileType>> {
        let mut files = Vec::new();
        for file_type in CsvFileType::ALL {
            if self.exists(country, file_type, month)? {
                files.push(file_type);
            }
        }
        Ok(files)
    }
}
