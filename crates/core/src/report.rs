//! Line-synchronized report output to the console and a results file.
//!
//! Numbers use `.6e` with a signed, at least two-digit exponent and
//! durations use `.6f` seconds.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::time::Duration;

use num_complex::Complex64;

use crate::analysis::ErrorStats;

/// Writes every line to two sinks with identical content.
///
/// The file sink is owned here, so it is flushed by [`finish`](Self::finish)
/// and closed on drop on every exit path.
pub struct Reporter<C: Write, F: Write> {
    console: C,
    file: F,
}

impl Reporter<Stdout, BufWriter<File>> {
    /// Report to stdout and a freshly truncated file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(io::stdout(), BufWriter::new(file)))
    }
}

impl<C: Write, F: Write> Reporter<C, F> {
    pub fn new(console: C, file: F) -> Self {
        Self { console, file }
    }

    /// Emit `message` followed by a newline. Embedded newlines are kept, so a
    /// leading `\n` produces a blank separator line in both sinks.
    pub fn line(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        let message = message.as_ref();
        writeln!(self.console, "{message}")?;
        writeln!(self.file, "{message}")?;
        Ok(())
    }

    pub fn errors(&mut self, stats: &ErrorStats) -> io::Result<()> {
        self.line(format_errors(stats))
    }

    pub fn finish(mut self) -> io::Result<(C, F)> {
        self.console.flush()?;
        self.file.flush()?;
        Ok((self.console, self.file))
    }
}

/// Four-line error block plus a trailing blank line.
pub fn format_errors(stats: &ErrorStats) -> String {
    format!(
        "Mean absolute error: {}\n\
         Median absolute error: {}\n\
         Mean relative error: {} (calculated over {} non-zero values)\n\
         Median relative error: {}\n",
        sci(stats.mean_abs),
        sci(stats.median_abs),
        sci(stats.mean_rel),
        stats.count,
        sci(stats.median_rel),
    )
}

/// Scientific notation with six fractional digits and an exponent of at
/// least two digits carrying an explicit sign: `1.234568e+00`.
pub fn sci(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let raw = format!("{value:.6e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

/// Complex number as `<re><+|-><im>j`, both parts formatted by [`sci`].
pub fn sci_complex(value: Complex64) -> String {
    let im = sci(value.im);
    if im.starts_with('-') {
        format!("{}{}j", sci(value.re), im)
    } else {
        format!("{}+{}j", sci(value.re), im)
    }
}

pub fn seconds(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}
