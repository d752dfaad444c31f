//! Trace input sources.
//!
//! Inputs are read in argument order as one logical stream. Lines are
//! decoded lossily: the traced program's own output is interleaved with
//! the tracer's and may contain arbitrary bytes.

use crate::utils::config::STDIN_PATH;
use crate::utils::error::InputError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where a trace is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSource {
    Stdin,
    File(PathBuf),
}

impl TraceSource {
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_PATH {
            TraceSource::Stdin
        } else {
            TraceSource::File(path.to_path_buf())
        }
    }

    /// Open the source for buffered line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            TraceSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            TraceSource::File(path) => {
                let file = File::open(path).map_err(|source| InputError::OpenFailed {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TraceSource::Stdin => "<stdin>".to_string(),
            TraceSource::File(path) => path.display().to_string(),
        }
    }
}

/// Map CLI input arguments to sources; no arguments means stdin
pub fn sources_from_args(inputs: &[PathBuf]) -> Vec<TraceSource> {
    if inputs.is_empty() {
        return vec![TraceSource::Stdin];
    }
    inputs.iter().map(|p| TraceSource::from_arg(p)).collect()
}

/// Call `f` with every line of `reader`, terminators stripped
///
/// Returns the number of lines visited.
pub fn for_each_line<R: BufRead>(
    mut reader: R,
    mut f: impl FnMut(&str),
) -> Result<usize, InputError> {
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut end = buf.len();
        if end > 0 && buf[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && buf[end - 1] == b'\r' {
            end -= 1;
        }

        f(&String::from_utf8_lossy(&buf[..end]));
        count += 1;
    }

    debug!("Read {} trace lines", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_without_terminators() {
        let mut seen = Vec::new();
        let count = for_each_line("a\r\nb\n\nc".as_bytes(), |l| seen.push(l.to_string())).unwrap();
        assert_eq!(count, 4);
        assert_eq!(seen, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let input: &[u8] = b"\xff\xfe BEGIN BLOCK SCAN\n";
        let mut seen = Vec::new();
        for_each_line(input, |l| seen.push(l.to_string())).unwrap();
        assert!(seen[0].ends_with("BEGIN BLOCK SCAN"));
    }

    #[test]
    fn test_sources_default_to_stdin() {
        assert_eq!(sources_from_args(&[]), vec![TraceSource::Stdin]);
        assert_eq!(
            sources_from_args(&[PathBuf::from("-"), PathBuf::from("t.log")]),
            vec![TraceSource::Stdin, TraceSource::File(PathBuf::from("t.log"))]
        );
    }

    #[test]
    fn test_open_missing_file() {
        let source = TraceSource::File(PathBuf::from("/nonexistent/trace.log"));
        assert!(matches!(source.open(), Err(InputError::OpenFailed { .. })));
    }
}
