//! One-shot, fail-fast loading of delimited text tables.
//!
//! The input files are small static datasets read once at the start of a run,
//! so there is no streaming and no retry: a missing file or a row whose width
//! disagrees with the header aborts the analysis. Column types are inferred
//! from content — a column where every non-empty cell parses as a float
//! becomes numeric, anything else stays text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::{Column, Frame};
use crate::error::DataError;

/// Field delimiter of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Runs of spaces and/or tabs (collapsed).
    Whitespace,
    Tab,
    Comma,
}

impl Delimiter {
    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Tab => line.split('\t').map(str::trim).collect(),
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
        }
    }
}

/// Cells treated as missing when inferring and parsing numeric columns.
fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == "NA" || cell == "-"
}

/// Read a delimited table with a header row into an immutable [`Frame`].
pub fn load_table(path: &Path, delim: Delimiter) -> Result<Frame, DataError> {
    let file = File::open(path).map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| DataError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        // Skip fully blank lines (trailing newline at EOF etc.)
        if line.trim().is_empty() {
            continue;
        }
        lines.push((i + 1, line));
    }

    let Some((_, header_line)) = lines.first() else {
        return Err(DataError::EmptyFile {
            path: path.to_path_buf(),
        });
    };

    let header: Vec<String> = delim.split(header_line).iter().map(|s| s.to_string()).collect();
    let width = header.len();

    // Collect raw cells column-wise, enforcing the header width per row.
    let mut raw: Vec<Vec<String>> = vec![Vec::with_capacity(lines.len() - 1); width];
    for (line_no, line) in &lines[1..] {
        let cells = delim.split(line);
        if cells.len() != width {
            return Err(DataError::RowWidth {
                path: path.to_path_buf(),
                line: *line_no,
                expected: width,
                found: cells.len(),
            });
        }
        for (col, cell) in raw.iter_mut().zip(cells) {
            col.push(cell.to_string());
        }
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let columns = header
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| {
            let col = infer_column(&cells);
            (name, col)
        })
        .collect();

    let frame = Frame::from_columns(name, columns);
    debug!(
        "Loaded {}: {} rows x {} columns",
        frame.name(),
        frame.len(),
        frame.column_names().count()
    );
    Ok(frame)
}

/// A column is numeric when every non-missing cell parses as `f64`.
/// Missing cells become NaN in a numeric column.
fn infer_column(cells: &[String]) -> Column {
    let numeric = cells
        .iter()
        .all(|c| is_missing(c) || c.parse::<f64>().is_ok());
    if numeric && cells.iter().any(|c| !is_missing(c)) {
        Column::Number(
            cells
                .iter()
                .map(|c| {
                    if is_missing(c) {
                        f64::NAN
                    } else {
                        // Checked above
                        c.parse().unwrap_or(f64::NAN)
                    }
                })
                .collect(),
        )
    } else {
        Column::Text(cells.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_whitespace_delimited_with_inference() {
        let f = write_file("x y outcome\n1.5 2.5 made\n3.0 4.0 missed\n");
        let frame = load_table(f.path(), Delimiter::Whitespace).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.numbers("x").unwrap(), &[1.5, 3.0]);
        assert_eq!(frame.texts("outcome").unwrap()[1], "missed");
    }

    #[test]
    fn loads_tab_delimited_names_with_spaces() {
        let f = write_file("player\tftm\tfta\nStephen Curry\t20\t47\n");
        let frame = load_table(f.path(), Delimiter::Tab).unwrap();
        assert_eq!(frame.texts("player").unwrap()[0], "Stephen Curry");
        assert_eq!(frame.numbers("fta").unwrap(), &[47.0]);
    }

    #[test]
    fn row_width_mismatch_names_the_line() {
        let f = write_file("a b\n1 2\n1 2 3\n");
        let err = load_table(f.path(), Delimiter::Whitespace).unwrap_err();
        match err {
            DataError::RowWidth {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = load_table(Path::new("/no/such/file.txt"), Delimiter::Tab).unwrap_err();
        assert!(matches!(err, DataError::FileAccess { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let f = write_file("");
        let err = load_table(f.path(), Delimiter::Whitespace).unwrap_err();
        assert!(matches!(err, DataError::EmptyFile { .. }));
    }

    #[test]
    fn na_becomes_nan_in_numeric_column() {
        let f = write_file("id note\n1 fine\nNA fine\n");
        let frame = load_table(f.path(), Delimiter::Whitespace).unwrap();
        let ids = frame.numbers("id").unwrap();
        assert_eq!(ids[0], 1.0);
        assert!(ids[1].is_nan());
        assert!(frame.texts("note").is_ok());
    }
}
