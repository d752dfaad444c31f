//! Seek Trace
//!
//! Reconstructs the seek/read activity of a traced program from an
//! `strace -r -T` log and renders it as a gnuplot script, with the
//! program's own BEGIN/END phase markers drawn as shaded bands.
//!
//! This crate provides the core implementation for the
//! `seek-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! strace -r -T -e trace=lseek,read,pread,write ./dj_cmd -direct -cat /dev/loop0 / 2>&1 \
//!     | seek-trace plot > accesses.gp
//! gnuplot -p accesses.gp
//! ```

pub mod commands;
pub mod gnuplot;
pub mod output;
pub mod parser;
pub mod timeline;
pub mod utils;
