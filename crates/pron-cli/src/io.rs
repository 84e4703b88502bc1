use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use pron_core::dict::{parse_records, ComponentSet, DictRecord};
use pron_core::unicode::to_output;

use crate::CliError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(io_error(path))
}

/// Read a dictionary file. Malformed lines are skipped.
pub fn read_records(path: &Path) -> Result<Vec<DictRecord>, CliError> {
    let text = read_text(path)?;
    let (records, errors) = parse_records(&text);
    if !errors.is_empty() {
        warn!(file = %path.display(), skipped = errors.len(), "malformed lines skipped");
    }
    Ok(records)
}

pub fn read_components(path: &Path) -> Result<ComponentSet, CliError> {
    Ok(ComponentSet::from_lines(&read_text(path)?))
}

pub fn create_output_dir(dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(io_error(dir))
}

/// Write one line per item, recomposed (NFC).
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(io_error(path))?;
    let mut w = BufWriter::new(file);
    for line in lines {
        writeln!(w, "{}", to_output(line.as_ref())).map_err(io_error(path))?;
    }
    w.flush().map_err(io_error(path))
}

pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
