use super::validate;
use derive_getters::{Dissolve, Getters};
use derive_more::Into;
use eyre::Result;
use std::error::Error;

/// A single FASTA record with the following guarantees:
/// - The ID is non-empty and is represented by an arbitrary UTF-8 string.
/// - The ID can't contain any newline characters (CR or LF).
/// - The sequence is non-empty and contains only ASCII letters or one of the `-*.` symbols.
///
/// There are no guarantees on the biological meaningfulness of the stored sequence. For example,
/// protein sequences could be mixed with DNA sequences and that would be a valid record.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Dissolve, Getters, Into)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            id: "Default ID".to_string(),
            seq: b"ACGT".to_vec(),
        }
    }
}

impl<ID, SEQ> TryFrom<(ID, SEQ)> for Record
where
    ID: TryInto<String, Error: Error + Send + Sync + 'static>,
    SEQ: TryInto<Vec<u8>, Error: Error + Send + Sync + 'static>,
{
    type Error = eyre::Report;

    fn try_from(value: (ID, SEQ)) -> Result<Self> {
        Self::new(value.0.try_into()?, value.1.try_into()?)
    }
}

impl Record {
    /// Creates a new FASTA record with the given ID and sequence.
    pub fn new(id: String, seq: Vec<u8>) -> Result<Self> {
        validate::id(&id)?;
        validate::seq(&seq)?;
        Ok(Self { id, seq })
    }

    /// Returns true if the sequence has no lowercase letters.
    pub fn is_uppercase(&self) -> bool {
        !self.seq.iter().any(u8::is_ascii_lowercase)
    }

    /// Uppercases the sequence in place. The ID is left untouched.
    pub fn make_uppercase(&mut self) {
        self.seq.make_ascii_uppercase();
    }

    /// Splits the header into the identifier, i.e. everything up to the first whitespace, and the
    /// free-text description that follows it. Both parts are trimmed, so the identifier is empty
    /// only for a whitespace-only header.
    pub fn split_id(&self) -> (&str, &str) {
        let header = self.id.trim();
        match header.split_once(char::is_whitespace) {
            Some((id, description)) => (id, description.trim_start()),
            None => (header, ""),
        }
    }

    /// # Safety
    /// The caller must ensure that all fields remain valid after modification.
    pub(crate) unsafe fn fields(&mut self) -> (&mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() -> Result<()> {
        for (id, seq) in [
            ("Normal-header", "ACGTACGT"),
            ("blaTEM-1_1_AY458016", "atgagtattcaacatttccgtgtcgcccttattccc"),
            ("id ", "a"),
            (" id ", "O"),
            ("gap-id", "AC-GT"),
            ("internal 💉 spaces and emoji here", "ACGT"),
        ] {
            let record: Record = (id, seq).try_into()?;
            assert_eq!(record.id(), id);
            assert_eq!(record.seq(), seq.as_bytes());
        }

        Ok(())
    }

    #[test]
    fn test_invalid_records() {
        for (id, seq) in [
            // Invalid ID
            ("", "ACGT"),
            ("id\n", "ACGT"),
            ("id\r", "ACGT"),
            ("id\r\n", "ACGT"),
            // Invalid sequence
            ("id", ""),
            ("id", "ACGT1"),
            ("id", " ACGT"),
            ("id", "ACG T"),
            ("id", "ACGT "),
        ] {
            let record: Result<Record> = (id, seq).try_into();
            assert!(record.is_err(), "Record: {:?}", record);
        }
    }

    #[test]
    fn test_uppercase() -> Result<()> {
        let mut record: Record = ("gene_1 lowercase id", "acgTn-*").try_into()?;
        assert!(!record.is_uppercase());

        record.make_uppercase();
        assert_eq!(record.id(), "gene_1 lowercase id");
        assert_eq!(record.seq(), b"ACGTN-*");
        assert!(record.is_uppercase());
        Ok(())
    }

    #[test]
    fn test_split_id() -> Result<()> {
        for (header, id, description) in [
            ("blaTEM-1_1", "blaTEM-1_1", ""),
            ("aph(3')-Ia_1 kanamycin resistance", "aph(3')-Ia_1", "kanamycin resistance"),
            ("  gene_1 \t  some  text ", "gene_1", "some  text"),
            ("gene_1\tdesc", "gene_1", "desc"),
            ("gene_1 ", "gene_1", ""),
            ("   ", "", ""),
        ] {
            let record: Record = (header, "ACGT").try_into()?;
            assert_eq!(record.split_id(), (id, description), "Header: {:?}", header);
        }
        Ok(())
    }
}
