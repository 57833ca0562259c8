//! Company table loading and the table cache.

use std::collections::BTreeSet;
use std::hash::Hasher;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use fnv::{FnvHashMap, FnvHasher};
use rand::Rng;
use tracing::{debug, info};

use crate::error::{LeadError, Result};
use crate::tech_stack;
use crate::types::{CompanyRecord, Lead};

/// The scored, immutable lead table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadTable {
    leads: Vec<Lead>,
}

impl LeadTable {
    /// Score every record and draw its tech stack from `rng`.
    pub fn from_records<R: Rng>(records: Vec<CompanyRecord>, rng: &mut R) -> Self {
        let leads = records
            .into_iter()
            .map(|record| {
                let stack = tech_stack::assign(&mut *rng);
                Lead::from_record(record, stack)
            })
            .collect();
        Self { leads }
    }

    /// Parse CSV with a `name,website,industry,location` header. Extra
    /// columns are ignored; missing columns and empty names are errors.
    pub fn from_reader<Rd: Read, R: Rng>(reader: Rd, rng: &mut R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<CompanyRecord>().enumerate() {
            let record = row?;
            if record.name.trim().is_empty() {
                return Err(LeadError::EmptyName { row: i + 1 });
            }
            records.push(record);
        }
        Ok(Self::from_records(records, rng))
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Distinct industries, sorted.
    pub fn industries(&self) -> Vec<String> {
        distinct(self.leads.iter().map(|l| l.industry.as_str()))
    }

    /// Distinct locations, sorted.
    pub fn locations(&self) -> Vec<String> {
        distinct(self.leads.iter().map(|l| l.location.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

fn read_table(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| LeadError::ReadTable {
        path: path.to_path_buf(),
        source,
    })
}

fn content_hash(bytes: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Memoized tables keyed by the hash of their source bytes.
///
/// Loading identical content twice returns the first table, tech stacks
/// included. Changed content is a new key and is scored afresh.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: FnvHashMap<u64, Arc<LeadTable>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for the current content of `path`, loading
    /// and scoring it on a miss.
    pub fn get_or_load<R: Rng>(
        &mut self,
        path: &Path,
        rng: &mut R,
    ) -> Result<Arc<LeadTable>> {
        let bytes = read_table(path)?;
        let key = content_hash(&bytes);

        if let Some(table) = self.tables.get(&key) {
            debug!("table cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(LeadTable::from_reader(bytes.as_slice(), rng)?);
        info!("loaded {} companies from {}", table.len(), path.display());
        self.tables.insert(key, Arc::clone(&table));
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every cached table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}
