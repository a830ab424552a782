use derive_getters::Getters;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// A structural problem found in a database file. Defects are reported but do not stop the
/// processing of the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Defect {
    /// Blank lines were found and removed.
    BlankLines { count: usize },
    /// The ID doesn't split into the expected number of fields. The record is kept.
    HeaderShape {
        entry: usize,
        id: String,
        expected: usize,
        fields: Vec<String>,
    },
    /// The ID was already seen in the file. The later record is dropped.
    DuplicateId { id: String, entry: usize },
}

impl Defect {
    /// Contribution of the defect to the file error count.
    pub fn weight(&self) -> usize {
        match self {
            Defect::BlankLines { count } => *count,
            Defect::HeaderShape { .. } | Defect::DuplicateId { .. } => 1,
        }
    }

    /// Whether the defect is reported on the error stream rather than the regular output.
    pub fn is_alert(&self) -> bool {
        matches!(self, Defect::DuplicateId { .. })
    }
}

impl Display for Defect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Defect::BlankLines { count } => {
                write!(f, "{count} of empty lines are present, removing them")
            }
            Defect::HeaderShape {
                entry,
                id,
                expected,
                fields,
            } => write!(
                f,
                "Entry number {entry}, id:{id}, expected {expected} items got {} items: [{}]",
                fields.len(),
                fields.iter().join(",")
            ),
            Defect::DuplicateId { id, entry } => {
                write!(f, "Duplicate header {id} at entry {entry}")
            }
        }
    }
}

/// Ordered defects of a single file together with the running error count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Defects {
    items: Vec<Defect>,
    count: usize,
}

impl Defects {
    pub fn push(&mut self, defect: Defect) {
        self.count += defect.weight();
        self.items.push(defect);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Defect> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
