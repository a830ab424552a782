use crate::defect::Defects;
use derive_getters::{Dissolve, Getters};
use std::path::PathBuf;

/// How the processing of a single database file ended.
#[derive(Debug)]
pub enum FileOutcome {
    /// The cleaned copy was written.
    Written { output: PathBuf, records: usize },
    /// The file couldn't be read as text.
    ReadFailed(eyre::Report),
    /// The file is not valid FASTA.
    ParseFailed(eyre::Report),
    /// The cleaned copy couldn't be created or written.
    WriteFailed(eyre::Report),
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FileOutcome::Written { .. })
    }
}

#[derive(Debug, Getters, Dissolve)]
pub struct FileSummary {
    /// File name, shared by the input and the output file.
    name: String,
    defects: Defects,
    outcome: FileOutcome,
}

impl FileSummary {
    pub fn new(name: impl Into<String>, defects: Defects, outcome: FileOutcome) -> Self {
        Self {
            name: name.into(),
            defects,
            outcome,
        }
    }

    /// Defect count plus one for a read, parse or write failure of the file itself.
    pub fn error_count(&self) -> usize {
        let failed = usize::from(!self.outcome.is_written());
        *self.defects.count() + failed
    }
}

/// Per-file results of a database check, in processing order.
#[derive(Debug, Default, Getters)]
pub struct RunSummary {
    files: Vec<FileSummary>,
}

impl RunSummary {
    pub fn push(&mut self, file: FileSummary) {
        self.files.push(file);
    }

    pub fn get(&self, name: &str) -> Option<&FileSummary> {
        self.files.iter().find(|x| x.name() == name)
    }

    pub fn written(&self) -> usize {
        self.files.iter().filter(|x| x.outcome().is_written()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.written()
    }

    pub fn total_errors(&self) -> usize {
        self.files.iter().map(FileSummary::error_count).sum()
    }
}
