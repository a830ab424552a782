use eyre::{Result, WrapErr};
use itertools::Itertools;
use std::fs;
use std::path::Path;

/// Creates the output directory, including missing parents, unless it already exists.
pub fn ensure_output_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .wrap_err_with(|| format!("Failed to create output directory {}", path.display()))?;
    log::debug!("Created output directory {}", path.display());
    Ok(())
}

/// Names of the regular files inside `dir` that end with `extension`, in lexicographic order.
pub fn candidate_files(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to list input directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::warn!("Skipping a file with a non UTF-8 name: {:?}", name);
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }
        // Follows symlinks, unlike DirEntry::file_type
        if !entry.path().is_file() {
            log::debug!("Skipping {name}: not a regular file");
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names.into_iter().sorted().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_files_are_filtered_and_sorted() -> Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["c.txt", "b.fsa", "a.fsa", "notes.fsa.bak", "Upper.fsa"] {
            fs::write(dir.path().join(name), ">id\nACGT\n")?;
        }
        fs::create_dir(dir.path().join("nested.fsa"))?;

        let names = candidate_files(dir.path(), ".fsa")?;
        assert_eq!(names, vec!["Upper.fsa", "a.fsa", "b.fsa"]);

        let names = candidate_files(dir.path(), ".txt")?;
        assert_eq!(names, vec!["c.txt"]);

        // Everything matches the empty suffix
        let names = candidate_files(dir.path(), "")?;
        assert_eq!(names.len(), 5);
        Ok(())
    }

    #[test]
    fn test_candidate_files_missing_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(candidate_files(dir.path().join("missing"), ".fsa").is_err());
        Ok(())
    }

    #[test]
    fn test_ensure_output_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("modified").join("resfinder");

        ensure_output_dir(&nested)?;
        assert!(nested.is_dir());

        // Existing directories are fine
        ensure_output_dir(&nested)?;

        // A regular file can't become a directory
        let file = dir.path().join("occupied");
        fs::write(&file, "")?;
        assert!(ensure_output_dir(&file).is_err());
        assert!(ensure_output_dir(file.join("child")).is_err());
        Ok(())
    }
}
