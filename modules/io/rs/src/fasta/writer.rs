use super::record::Record;
use crate::traits::WriteRecord;
use derive_getters::Dissolve;
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::Path;

/// FASTA writer. Each record is written as a single header line followed by the sequence, which is
/// either kept on one line (`line_width = None`) or wrapped every `line_width` bytes.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Writer<W> {
    writer: W,
    line_width: Option<NonZeroUsize>,
}

impl<W> Writer<W> {
    pub fn new(writer: W, line_width: Option<NonZeroUsize>) -> Self {
        Self { writer, line_width }
    }
}

impl Writer<()> {
    /// Create (or truncate) the file at the given path and wrap it into a buffered FASTA writer.
    pub fn from_path(
        path: impl AsRef<Path>,
        line_width: Option<NonZeroUsize>,
    ) -> Result<Writer<BufWriter<File>>> {
        let path = path.as_ref();
        let file = File::create(path)
            .wrap_err_with(|| format!("Failed to create FASTA file {}", path.display()))?;
        Ok(Writer::new(BufWriter::new(file), line_width))
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Record;

    fn write_record(&mut self, record: &Self::Record) -> Result<()> {
        self.writer.write_all(b">")?;
        self.writer.write_all(record.id().as_bytes())?;
        self.writer.write_all(b"\n")?;

        let width = self
            .line_width
            .map(NonZeroUsize::get)
            .unwrap_or(record.seq().len());
        record.seq().chunks(width).try_for_each(|c| -> Result<()> {
            self.writer.write_all(c)?;
            self.writer.write_all(b"\n")?;
            Ok(())
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
