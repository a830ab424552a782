use ahash::AHashMap;
use dbcheck_io_rs::fasta::Record;

/// FASTA records keyed by ID. Only the first record is kept for every ID and the insertion order
/// is preserved.
#[derive(Debug, Clone, Default)]
pub struct RecordDb {
    records: Vec<Record>,
    index: AHashMap<String, usize>,
}

impl RecordDb {
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Inserts the record unless its ID is already present. Returns `false` (and drops the
    /// record) in the latter case.
    pub fn insert(&mut self, record: Record) -> bool {
        if self.index.contains_key(record.id()) {
            return false;
        }
        self.index.insert(record.id().clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordDb {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
