use crate::defect::Defect;
use derive_getters::Dissolve;
use derive_more::Constructor;
use eyre::Result;
use std::fmt::Display;
use std::io::{Stderr, Stdout, Write};

/// Human-readable report sink: progress and warnings go to `out`, errors go to `err`.
#[derive(Debug, Constructor, Dissolve)]
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn report(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub fn alert(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.err, "{line}")?;
        Ok(())
    }

    pub fn defect(&mut self, defect: &Defect) -> Result<()> {
        if defect.is_alert() {
            self.alert(defect)
        } else {
            self.report(defect)
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }
}
