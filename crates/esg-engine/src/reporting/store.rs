use super::query::{run_query, ReportPage, ReportQuery};
use super::record::CompanyEsgRecord;
use std::io::Read;
use std::path::Path;

use super::import::{parse_records, ImportError};

/// In-memory time series of per-period company snapshots, kept in the order
/// they were appended.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    records: Vec<CompanyEsgRecord>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CompanyEsgRecord>) -> Self {
        Self { records }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        Ok(Self::from_records(parse_records(reader)?))
    }

    pub fn append(&mut self, record: CompanyEsgRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CompanyEsgRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CompanyEsgRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self, query: &ReportQuery) -> ReportPage {
        run_query(&self.records, query)
    }
}

impl Extend<CompanyEsgRecord> for ReportStore {
    fn extend<T: IntoIterator<Item = CompanyEsgRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<CompanyEsgRecord> for ReportStore {
    fn from_iter<T: IntoIterator<Item = CompanyEsgRecord>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
