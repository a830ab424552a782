use crate::cleanup;
use crate::config::CheckConfig;
use crate::console::Console;
use crate::defect::{Defect, Defects};
use crate::record_db::RecordDb;
use crate::scan;
use crate::summary::{FileOutcome, FileSummary, RunSummary};
use dbcheck_io_rs::fasta::{Reader, Record, Writer};
use dbcheck_io_rs::{ReadRecord, WriteRecord};
use eyre::{ensure, Result, WrapErr};
use std::io::{Cursor, Write};
use std::num::NonZeroUsize;
use std::path::Path;

/// Cleans and validates the content of a single database file.
///
/// Line endings are normalized to LF, blank lines are counted and collapsed, then records are
/// read in order. The ID of a record is its header up to the first whitespace; the description
/// after it is dropped. IDs are checked against the configured delimiter and number of fields.
/// Records with a malformed ID are kept, records with an already seen ID are dropped. Sequences
/// of the kept records are uppercased.
///
/// Defects are pushed into `defects` as they are found, so they are available even if the text
/// turns out to be invalid FASTA and an error is returned.
pub fn check_text(text: &str, config: &CheckConfig, defects: &mut Defects) -> Result<RecordDb> {
    let text = cleanup::normalize_line_endings(text);
    let blank_lines = cleanup::count_blank_lines(&text);
    if blank_lines > 0 {
        defects.push(Defect::BlankLines { count: blank_lines });
    }
    let cleaned = cleanup::collapse_blank_lines(&text);

    let mut reader = Reader::new(Cursor::new(cleaned.as_bytes()))?;
    let mut db = RecordDb::default();
    let mut record = Record::default();
    let mut entry = 0;
    while reader.read_record(&mut record)? {
        entry += 1;

        let (id, description) = record.split_id();
        ensure!(!id.is_empty(), "Empty FASTA ID for the entry number {entry}");
        if !description.is_empty() {
            log::trace!("Dropping the description of {id}: {description}");
        }

        let fields = config.delimiter().split(id);
        if fields.len() != *config.expected_values() {
            defects.push(Defect::HeaderShape {
                entry,
                id: id.to_string(),
                expected: *config.expected_values(),
                fields: fields.into_iter().map(str::to_string).collect(),
            });
        }

        if db.contains(id) {
            defects.push(Defect::DuplicateId {
                id: id.to_string(),
                entry,
            });
        } else {
            let mut kept = Record::new(id.to_string(), record.seq().clone())?;
            kept.make_uppercase();
            db.insert(kept);
        }
    }

    log::debug!("Read {entry} records, {} unique", db.len());
    Ok(db)
}

fn write_db(path: &Path, db: &RecordDb, line_width: Option<NonZeroUsize>) -> Result<()> {
    let mut writer = Writer::from_path(path, line_width)?;
    writer
        .write_records(db)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    writer.flush()
}

/// Checks the `name` file from the input database and writes its cleaned copy to the output
/// database. Failures of the file itself are reported and returned as a [`FileOutcome`]; only
/// errors writing to the console are propagated.
pub fn check_file<O: Write, E: Write>(
    name: &str,
    config: &CheckConfig,
    console: &mut Console<O, E>,
) -> Result<FileSummary> {
    let input = config.input_database().join(name);
    let output = config.out_database().join(name);
    let mut defects = Defects::default();

    console.report(format_args!("Starting check on {name}"))?;
    let text = match std::fs::read_to_string(&input) {
        Ok(text) => text,
        Err(err) => {
            let err = eyre::Report::new(err)
                .wrap_err(format!("Failed to read {}", input.display()));
            console.alert(format_args!("Error reading file {name}: {err:#}"))?;
            return Ok(FileSummary::new(name, defects, FileOutcome::ReadFailed(err)));
        }
    };

    let parsed = check_text(&text, config, &mut defects);
    for defect in defects.iter() {
        console.defect(defect)?;
    }

    let db = match parsed {
        Ok(db) => db,
        Err(err) => {
            console.alert(format_args!(
                "Error with file, likely not fasta file. Error {err:#}"
            ))?;
            return Ok(FileSummary::new(name, defects, FileOutcome::ParseFailed(err)));
        }
    };

    if let Err(err) = write_db(&output, &db, *config.line_width()) {
        console.alert(format_args!("File creation error {err:#}"))?;
        return Ok(FileSummary::new(name, defects, FileOutcome::WriteFailed(err)));
    }

    console.report(format_args!(
        "Done creating output {} with {} errors. Formatting was ensured.\n",
        output.display(),
        defects.count()
    ))?;
    let outcome = FileOutcome::Written {
        output,
        records: db.len(),
    };
    Ok(FileSummary::new(name, defects, outcome))
}

/// Checks every file of the input database that ends with the configured extension, in
/// lexicographic order, writing cleaned copies to the output database.
///
/// Returns an error only if the output directory can't be created or the input directory can't
/// be listed. Problems with individual files are reported and recorded in the [`RunSummary`].
pub fn check_database<O: Write, E: Write>(
    config: &CheckConfig,
    console: &mut Console<O, E>,
) -> Result<RunSummary> {
    console.report(format_args!(
        "Check {} database location",
        config.input_database().display()
    ))?;

    if let Err(err) = scan::ensure_output_dir(config.out_database()) {
        console.alert("Error making output directory")?;
        return Err(err);
    }

    let names = match scan::candidate_files(config.input_database(), config.file_extension()) {
        Ok(names) => names,
        Err(err) => {
            console.alert(format_args!("Error reading input directory {err:#}"))?;
            return Err(err);
        }
    };
    log::info!(
        "Found {} files ending with {:?} in {}",
        names.len(),
        config.file_extension(),
        config.input_database().display()
    );

    let mut summary = RunSummary::default();
    for name in names {
        let file = check_file(&name, config, console)?;
        log::debug!("{name}: {} errors", file.error_count());
        summary.push(file);
    }
    console.flush()?;

    log::info!(
        "Checked {} files: {} written, {} failed, {} errors in total",
        summary.files().len(),
        summary.written(),
        summary.failed(),
        summary.total_errors()
    );
    Ok(summary)
}
