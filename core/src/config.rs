use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::file_type::Section;
use crate::repository::RosterRepository;

pub const DEFAULT_DISPLAY_COUNT: usize = 3;
const CONFIG_FILE_NAME: &str = "visible_months.json";

fn default_display_count() -> usize {
    DEFAULT_DISPLAY_COUNT
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SectionConfig {
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default = "default_display_count")]
    pub display_count: usize,
}

impl Default for SectionConfig {
    fn default() -> Self {
        SectionConfig {
            months: Vec::new(),
            display_count: DEFAULT_DISPLAY_COUNT,
        }
    }
}

/// Which months each portal section shows, per country.
///
/// ```json
/// { "Malta": { "schedule": { "months": ["September", "October"], "display_count": 2 } } }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct VisibleMonthsConfig {
    pub countries: BTreeMap<String, BTreeMap<Section, SectionConfig>>,
}

impl VisibleMonthsConfig {
    /// `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no visible months config");
                return Ok(None);
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
        };
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid visible months config {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn section(&self, country: &str, section: Section) -> Option<&SectionConfig> {
        self.countries.get(country)?.get(&section)
    }

    /// Configured months, most recent `display_count` of them. `None` when the
    /// country or section has no entry.
    pub fn months_for(&self, country: &str, section: Section) -> Option<Vec<String>> {
        let config = self.section(country, section)?;
        let skip = config.months.len().saturating_sub(config.display_count);
        Some(config.months[skip..].to_vec())
    }

    pub fn set_months(&mut self, country: &str, section: Section, months: Vec<String>) {
        self.countries
            .entry(country.to_string())
            .or_default()
            .entry(section)
            .or_default()
            .months = months;
    }
}

/// `~/.rosterview/visible_months.json`
pub fn default_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".rosterview").join(CONFIG_FILE_NAME))
}

/// Months to offer for a section: the configured list when there is one,
/// otherwise every month whose required files are present.
pub fn visible_months<R: RosterRepository>(
    config: Option<&VisibleMonthsConfig>,
    repo: &R,
    country: &str,
    section: Section,
) -> Result<Vec<String>> {
    if let Some(months) = config.and_then(|c| c.months_for(country, section)) {
        return Ok(months);
    }
    repo.available_months(country)
}
