use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use crate::model::file_type::CsvFileType;
use crate::repository::traits::RosterRepository;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    country: String,
    file_type: CsvFileType,
    month: String,
}

impl CacheKey {
    fn new(country: &str, file_type: CsvFileType, month: &str) -> Self {
        CacheKey {
            country: country.to_string(),
            file_type,
            month: month.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    loaded_at: Instant,
    text: Option<String>,
}

/// Memoizes `load` results of an inner repository for `ttl`.
///
/// Missing files are cached too, so a month that has not been published yet
/// is not re-read on every request. Entries are dropped when they expire or
/// through [`invalidate`](Self::invalidate) / [`invalidate_all`](Self::invalidate_all).
pub struct CachedRosterRepository<R: RosterRepository> {
    inner: R,
    ttl: Duration,
    entries: RefCell<HashMap<CacheKey, CacheEntry>>,
}

impl<R: RosterRepository> CachedRosterRepository<R> {
    pub fn new(inner: R) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    pub fn with_ttl(inner: R, ttl: Duration) -> Self {
        CachedRosterRepository {
            inner,
            ttl,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn invalidate(&self, country: &str, file_type: CsvFileType, month: &str) {
        self.entries
            .borrow_mut()
            .remove(&CacheKey::new(country, file_type, month));
    }

    pub fn invalidate_all(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<R: RosterRepository> RosterRepository for CachedRosterRepository<R> {
    fn load(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<Option<String>> {
        let key = CacheKey::new(country, file_type, month);
        if let Some(entry) = self.entries.borrow().get(&key) {
            if entry.loaded_at.elapsed() < self.ttl {
                debug!(%country, %file_type, %month, "cache hit");
                return Ok(entry.text.clone());
            }
        }

        let text = self.inner.load(country, file_type, month)?;
        self.entries.borrow_mut().insert(
            key,
            CacheEntry {
                loaded_at: Instant::now(),
                text: text.clone(),
            },
        );
        Ok(text)
    }

    fn exists(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<bool> {
        self.inner.exists(country, file_type, month)
    }
}
