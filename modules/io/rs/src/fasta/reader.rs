use super::{record::Record, validate};
use crate::traits::ReadRecord;
use derive_getters::Dissolve;
use eyre::{ensure, Result, WrapErr};
use std::io::BufRead;

/// A strict FASTA reader that can read a single record at a time. Ignores:
/// - Whitespace before the first record
/// - Empty and whitespace-only lines inside and between records
/// - Whitespace at the start and end of sequence lines, including the carriage return of
///   Windows line endings
///
/// Returns an error if there are:
/// - Errors while reading from the underlying reader
/// - Extra characters before the first record
/// - Characters other than letters and `-*.` inside sequence lines
/// - Empty ID or sequence fields in any record
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl<R: BufRead> Reader<R> {
    pub fn new(mut reader: R) -> Result<Self> {
        // Skip whitespace before the first record
        loop {
            let buffer = reader.fill_buf()?;
            let skip = buffer.iter().take_while(|x| x.is_ascii_whitespace()).count();
            if skip == 0 {
                break;
            }
            reader.consume(skip);
        }

        // Check that there are no extra characters before the first record
        let buffer = reader.fill_buf()?;
        ensure!(
            buffer.first().map(|x| *x == b'>').unwrap_or(true),
            "Expected '>' at the start of the FASTA file"
        );
        Ok(Self { reader })
    }

    #[inline(always)]
    fn read_parts(&mut self, record: &mut Record) -> Result<bool> {
        // Ensure that the next symbol is '>' and consume it
        let buffer = self.reader.fill_buf()?;
        if buffer.is_empty() {
            return Ok(false);
        }
        ensure!(
            buffer.first().map(|x| *x == b'>').unwrap_or(false),
            "Expected '>' at the start of the FASTA record"
        );
        self.reader.consume(1);

        // SAFETY: The ID and sequence are validated before the function returns `Ok(true)`
        let (id, seq) = unsafe { record.fields() };

        // Read and validate the ID line
        id.clear();
        let read = self.reader.read_line(id)?;
        ensure!(read > 0, "Unexpected EOF after '>'");
        ensure!(
            id.ends_with('\n'),
            "FASTA ID line is not terminated with a newline: {id}"
        );
        id.pop();
        if id.ends_with('\r') {
            id.pop();
        }
        validate::id(id)?;

        // Read the sequence lines. A line can be split between several buffers, so a '>' is
        // treated as the start of the next record only at the beginning of a line.
        seq.clear();
        let mut line_start = true;
        let mut line_begin = 0;
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            if line_start {
                if buffer[0] == b'>' {
                    break;
                }
                line_begin = seq.len();
            }

            let (consume, complete) = match memchr::memchr(b'\n', buffer) {
                Some(pos) => {
                    seq.extend_from_slice(&buffer[..pos]);
                    (pos + 1, true)
                }
                None => {
                    seq.extend_from_slice(buffer);
                    (buffer.len(), false)
                }
            };
            self.reader.consume(consume);

            if complete {
                trim_line(seq, line_begin);
            }
            line_start = complete;
        }
        // The last line of the file may lack a newline
        if !line_start {
            trim_line(seq, line_begin);
        }
        validate::seq(seq).wrap_err_with(|| format!("Invalid sequence for the FASTA ID {id}"))?;

        Ok(true)
    }
}

/// Strips ASCII whitespace around the sequence line that starts at `begin`.
fn trim_line(seq: &mut Vec<u8>, begin: usize) {
    while seq.len() > begin && seq.last().is_some_and(|x| x.is_ascii_whitespace()) {
        seq.pop();
    }
    let leading = seq[begin..]
        .iter()
        .take_while(|x| x.is_ascii_whitespace())
        .count();
    seq.drain(begin..begin + leading);
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Parse the next FASTA record into the given [Record] buffer.
    /// Returns `false` if there are no more records to read.
    ///
    /// On error, the buffer is left in an unspecified state, but can be reused for the next read.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        self.read_parts(buf)
    }

    fn read_records(&mut self, bufs: &mut [Self::Record]) -> Result<usize> {
        let mut n = 0;
        for buf in bufs {
            if self.read_parts(buf)? {
                n += 1;
            } else {
                break;
            }
        }
        Ok(n)
    }

    /// Read the remaining records in the file and place them into the given vector.
    /// Returns the number of records read.
    ///
    /// Records already in the vector are overwritten first, then new ones are appended.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize> {
        let mut total = 0;

        // Read into the existing buffer
        for record in into.iter_mut() {
            if !self.read_record(record)? {
                return Ok(total);
            }
            total += 1;
        }

        // Append to the buffer
        loop {
            let mut record = Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}
