//! Input, output and timing helpers used by the demos and the `tour` binary.
//!
//! Integer files are plain text: base-10 signed integers separated by any
//! whitespace, spread over any number of lines. A single malformed token
//! fails the whole read with [`DsError::InvalidInteger`].
//!
//! ```
//! use dsakit::io::{format_slice, parse_ints};
//!
//! let values = parse_ints("3 -1  4\t1").unwrap();
//! assert_eq!(values, vec![3, -1, 4, 1]);
//! assert_eq!(format_slice("input", &values), "input: [3, -1, 4, 1]");
//! assert!(parse_ints("3 x 4").is_err());
//! ```

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::error::{ConfigError, DsError, Result};

/// Parses every whitespace-separated token of `line`. An empty or blank
/// line yields an empty vector.
pub fn parse_ints(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| DsError::InvalidInteger {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Reads one line from `reader` and parses it.
///
/// End of input before any line is read yields an empty vector.
pub fn read_ints<R: BufRead>(mut reader: R) -> Result<Vec<i64>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_ints(&line)
}

/// Reads one line from `reader` and parses its first token as an integer.
///
/// A blank line or end of input fails with an empty
/// [`DsError::InvalidInteger`] token; tokens after the first are ignored.
pub fn read_int<R: BufRead>(reader: R) -> Result<i64> {
    let line = read_line(reader)?;
    let token = line.split_whitespace().next().unwrap_or_default();
    token.parse().map_err(|_| DsError::InvalidInteger {
        token: token.to_owned(),
    })
}

/// Reads one line from `reader` with surrounding whitespace trimmed.
///
/// End of input yields an empty string.
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Reads all integers from the file at `path`, skipping blank lines.
pub fn read_ints_from_file(path: impl AsRef<Path>) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut values = Vec::new();
    for line in reader.lines() {
        values.extend(parse_ints(&line?)?);
    }
    debug!(path = %path.display(), count = values.len(), "read integers");
    Ok(values)
}

/// Writes `values` to `path` on one line, space separated, followed by a
/// newline. An existing file is truncated.
pub fn write_ints_to_file(path: impl AsRef<Path>, values: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{value}")?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(path = %path.display(), count = values.len(), "wrote integers");
    Ok(())
}

/// Renders `label: [a, b, c]`; an empty label drops the prefix.
pub fn format_slice<T: fmt::Display>(label: &str, items: &[T]) -> String {
    let mut out = String::new();
    if !label.is_empty() {
        out.push_str(label);
        out.push_str(": ");
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

/// Renders one bracketed row per line with every value right-aligned to
/// width 3, preceded by `label:` on its own line when the label is non-empty.
pub fn format_matrix<T: fmt::Display>(label: &str, rows: &[Vec<T>]) -> String {
    let mut out = String::new();
    if !label.is_empty() {
        out.push_str(label);
        out.push_str(":\n");
    }
    for row in rows {
        out.push('[');
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{value:>3}");
        }
        out.push_str("]\n");
    }
    out
}

fn check_range(min: i64, max: i64) -> std::result::Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::new(format!(
            "random range is empty: min {min} > max {max}"
        )));
    }
    Ok(())
}

/// `size` values drawn uniformly from `min..=max`.
pub fn random_vec<R: Rng>(size: usize, min: i64, max: i64, rng: &mut R) -> Result<Vec<i64>> {
    check_range(min, max)?;
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// `size` sorted values from `min..=max`.
///
/// Without duplicates the range must hold at least `size` distinct values,
/// otherwise a [`ConfigError`] is returned.
pub fn random_sorted_vec<R: Rng>(
    size: usize,
    min: i64,
    max: i64,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<Vec<i64>> {
    check_range(min, max)?;
    let mut values = if allow_duplicates {
        random_vec(size, min, max, rng)?
    } else {
        let span = (i128::from(max) - i128::from(min) + 1) as u128;
        if size as u128 > span {
            return Err(ConfigError::new(format!(
                "cannot draw {size} distinct values from [{min}, {max}]"
            ))
            .into());
        }
        let mut seen = FxHashSet::default();
        seen.reserve(size);
        while seen.len() < size {
            seen.insert(rng.gen_range(min..=max));
        }
        seen.into_iter().collect()
    };
    values.sort_unstable();
    Ok(values)
}

/// Runs `f` once, logs the elapsed time under `name`, and returns it.
pub fn time_it<F: FnOnce()>(name: &str, f: F) -> Duration {
    info!(name, "running");
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();
    info!(name, ?elapsed, "completed");
    elapsed
}
