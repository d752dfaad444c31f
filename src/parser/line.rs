//! Trace line classification.
//!
//! Each line of an `strace -r -T` style log is run through an ordered set
//! of independent matchers. A single line may carry several facts at once
//! (a relative timestamp and a call, a call and its duration), so every
//! matcher is attempted and everything found is reported together.
//!
//! Nothing here fails: a line no matcher recognizes yields an inert
//! [`LineRecord`].

use super::marker::{detect_marker, PhaseMarker};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::OnceLock;

const TIMING_RE: &str = r"^\s+0\.(\d+)";
const LSEEK_RE: &str = r"^\s+0\.\d+ lseek\(\d+, (\d+), SEEK_SET\)";
const READ_RE: &str = r"^\s+0\.\d+ read\(.+ (\d+)\) = \d+";
const PREAD_RE: &str = r"^\s+0\.\d+ pread\(.+ (\d+), (\d+)\) = \d+";
const CALL_DURATION_RE: &str = r"<([0-9.]+)>$";

/// A file-positioning system call recognized on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syscall {
    /// `lseek(fd, offset, SEEK_SET)`
    Seek { offset: i64 },
    /// `read(fd, buf, length)`; the declared length, not the return value
    Read { length: i64 },
    /// `pread(fd, buf, length, offset)`: a seek followed by a read
    PositionedRead { offset: i64, length: i64 },
}

/// Everything the classifier recognized on one line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineRecord {
    /// Clock increment from the leading relative timestamp
    pub time_delta: Option<u64>,

    /// Trailing `<seconds>` call duration
    pub call_duration: Option<f64>,

    /// Calls in matcher order (lseek, read, pread)
    pub calls: Vec<Syscall>,

    pub marker: Option<PhaseMarker>,
}

impl LineRecord {
    /// True when the line carries nothing the timeline cares about
    pub fn is_inert(&self) -> bool {
        self.time_delta.is_none()
            && self.call_duration.is_none()
            && self.calls.is_empty()
            && self.marker.is_none()
    }
}

struct LinePatterns {
    timing: Regex,
    lseek: Regex,
    read: Regex,
    pread: Regex,
    call_duration: Regex,
}

static PATTERNS: OnceLock<LinePatterns> = OnceLock::new();

fn patterns() -> &'static LinePatterns {
    PATTERNS.get_or_init(|| LinePatterns {
        timing: compile(TIMING_RE),
        lseek: compile(LSEEK_RE),
        read: compile(READ_RE),
        pread: compile(PREAD_RE),
        call_duration: compile(CALL_DURATION_RE),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in trace pattern")
}

/// Classify one trace line
///
/// **Public** - main entry point for the line classifier
///
/// # Arguments
/// * `line` - A single trace line without its line terminator
///
/// # Returns
/// Every timing update, call, duration and phase marker found on the line
///
/// # Example
/// ```ignore
/// let record = classify_line("     0.000010 lseek(3, 4096, SEEK_SET) = 4096");
/// assert_eq!(record.time_delta, Some(10));
/// assert_eq!(record.calls, vec![Syscall::Seek { offset: 4096 }]);
/// ```
pub fn classify_line(line: &str) -> LineRecord {
    let patterns = patterns();

    let time_delta = patterns
        .timing
        .captures(line)
        .and_then(|caps| capture_number::<u64>(&caps, 1));

    let call_duration = patterns
        .call_duration
        .captures(line)
        .and_then(|caps| capture_number::<f64>(&caps, 1));

    let mut calls = Vec::new();

    if let Some(offset) = patterns
        .lseek
        .captures(line)
        .and_then(|caps| capture_number::<i64>(&caps, 1))
    {
        calls.push(Syscall::Seek { offset });
    }

    if let Some(length) = patterns
        .read
        .captures(line)
        .and_then(|caps| capture_number::<i64>(&caps, 1))
    {
        calls.push(Syscall::Read { length });
    }

    if let Some(caps) = patterns.pread.captures(line) {
        if let (Some(length), Some(offset)) = (
            capture_number::<i64>(&caps, 1),
            capture_number::<i64>(&caps, 2),
        ) {
            calls.push(Syscall::PositionedRead { offset, length });
        }
    }

    LineRecord {
        time_delta,
        call_duration,
        calls,
        marker: detect_marker(line),
    }
}

/// Parse a capture group, treating an unparseable value as no match
///
/// **Private** - digit runs too long for the target type are inert
fn capture_number<T: FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_digits_are_whole_units() {
        let record = classify_line("     0.000123 close(3) = 0");
        assert_eq!(record.time_delta, Some(123));
        assert!(record.calls.is_empty());
    }

    #[test]
    fn test_timing_requires_leading_whitespace() {
        assert_eq!(classify_line("0.000123 close(3) = 0").time_delta, None);
    }

    #[test]
    fn test_timing_overflow_is_inert() {
        let record = classify_line(" 0.99999999999999999999999 close(3) = 0");
        assert_eq!(record.time_delta, None);
    }

    #[test]
    fn test_lseek_other_whence_ignored() {
        let record = classify_line(" 0.000010 lseek(3, 4096, SEEK_CUR) = 8192");
        assert_eq!(record.time_delta, Some(10));
        assert!(record.calls.is_empty());
    }

    #[test]
    fn test_pread_is_not_a_read() {
        let record = classify_line(" 0.000002 pread(3, \"...\", 4096, 65536) = 4096");
        assert_eq!(
            record.calls,
            vec![Syscall::PositionedRead {
                offset: 65536,
                length: 4096
            }]
        );
    }

    #[test]
    fn test_call_duration_suffix() {
        let record = classify_line(" 0.000005 read(3, \"\"..., 8192) = 8192 <0.000031>");
        assert_eq!(record.call_duration, Some(0.000031));
        assert_eq!(record.calls, vec![Syscall::Read { length: 8192 }]);
    }

    #[test]
    fn test_free_text_is_inert() {
        assert!(classify_line("scanning directory / ...").is_inert());
        assert!(classify_line("").is_inert());
    }
}
