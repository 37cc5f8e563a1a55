//! Plain-text matrix dumps.
//!
//! One matrix row per line, every entry followed by a single space. Real
//! entries use [`sci`]; complex entries are written as `<re> + i<im>`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::field::{RealField, SpectralField};
use crate::report::sci;

/// Destination directory for a run's dumps.
#[derive(Debug, Clone)]
pub struct MatrixDumper {
    dir: PathBuf,
}

impl MatrixDumper {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn real(&self, name: &str, field: &RealField) -> io::Result<PathBuf> {
        let path = self.dir.join(format!("{name}.txt"));
        write_real_matrix(&path, field)?;
        log::debug!("dumped {} {} to {}", name, field.shape(), path.display());
        Ok(path)
    }

    pub fn complex(&self, name: &str, field: &SpectralField) -> io::Result<PathBuf> {
        let path = self.dir.join(format!("{name}.txt"));
        write_complex_matrix(&path, field)?;
        log::debug!("dumped {} {} to {}", name, field.shape(), path.display());
        Ok(path)
    }
}

pub fn write_real_matrix(path: &Path, field: &RealField) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in 0..field.shape().rows {
        for value in field.row(row) {
            write!(writer, "{} ", sci(*value))?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

pub fn write_complex_matrix(path: &Path, field: &SpectralField) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in 0..field.shape().rows {
        for value in field.row(row) {
            write!(writer, "{} + i{} ", sci(value.re), sci(value.im))?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}
