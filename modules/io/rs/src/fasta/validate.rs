use eyre::{ensure, Result};

/// Symbols allowed in a sequence besides ASCII letters: gap, stop and the alternative gap.
pub const EXTRA_SEQ_SYMBOLS: &[u8] = b"-*.";

pub fn id(id: &str) -> Result<()> {
    ensure!(!id.is_empty(), "FASTA ID cannot be empty");
    ensure!(
        !id.contains(&['\n', '\r'] as &[char]),
        "Newline characters are not allowed in the FASTA ID: {id}"
    );
    Ok(())
}

pub fn seq(seq: &[u8]) -> Result<()> {
    ensure!(!seq.is_empty(), "FASTA sequence cannot be empty");
    for (i, &x) in seq.iter().enumerate() {
        ensure!(
            x.is_ascii_alphabetic() || EXTRA_SEQ_SYMBOLS.contains(&x),
            "Unexpected character at index {i} = {:?}",
            x as char
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_symbols() {
        assert!(seq(b"ACGT").is_ok());
        assert!(seq(b"acgtn-").is_ok());
        assert!(seq(b"MKV*").is_ok());
        assert!(seq(b"AC.GT").is_ok());

        for invalid in [&b""[..], b"AC GT", b"ACGT1", b"AC>GT", b"\tACGT"] {
            assert!(seq(invalid).is_err(), "Sequence: {:?}", invalid);
        }
    }

    #[test]
    fn test_id() {
        assert!(id("blaTEM-1_1").is_ok());
        assert!(id(" spaced id ").is_ok());
        assert!(id("").is_err());
        assert!(id("id\r").is_err());
        assert!(id("id\nmore").is_err());
    }
}
