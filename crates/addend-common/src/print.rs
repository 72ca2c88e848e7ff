//! Rendering of sequences, one line per sequence.
//!
//! Every element is followed by a single space, the last one included, and
//! the line ends with `\n`. An empty sequence renders as a bare `\n`.

use std::fmt::Display;
use std::io::{self, Write};

/// Write `seq` to `out` as a single line.
pub fn write_sequence<W, T>(out: &mut W, seq: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for elem in seq {
        write!(out, "{} ", elem)?;
    }
    writeln!(out)
}

/// Render `seq` the way [`write_sequence`] writes it.
pub fn format_sequence<T: Display>(seq: &[T]) -> String {
    let mut line: String = seq.iter().map(|elem| format!("{} ", elem)).collect();
    line.push('\n');
    line
}
