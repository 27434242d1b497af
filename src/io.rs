//! Reading and writing [`Figures`] from and to the text geometry format.
//!
//! A geometry file is a sequence of lines. A line holding a single field names a new ring, and
//! every following `x,y` line adds a point to it, in order. A trailing third field (the id of
//! the point) is accepted and ignored. Blank lines are skipped.
//!
//! Writing emits `x,y` lines only, so point ids do not survive a read and write cycle. Ring
//! names must be non-empty, free of separators and line breaks, and carry no surrounding
//! whitespace, otherwise they could not be read back.
//!
//! ```text
//! foo
//! 0,0
//! 1,0
//! 1,1
//! ```

use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use num_traits::Float;

use crate::{Figures, Ring, RingError, point::Point};

/// The field separator of the geometry format.
const SEPARATOR: char = ',';

/// The reasons reading or writing geometry data can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file to write into exists already.
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
    /// The file to read from does not exist.
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    /// A point was found before any ring name.
    #[error("line {line}: point does not belong to any ring")]
    MissingName { line: usize },
    /// A ring name would not be read back as written.
    #[error("invalid ring name {name:?}")]
    InvalidName { name: String },
    /// A ring could not be built or written.
    #[error("ring {name}: {source}")]
    Ring {
        name: String,
        #[source]
        source: RingError,
    },
}

/// Returns the figures described by the given geometry data.
///
/// Every ring is closed once all its points have been added.
pub fn read<T, R>(reader: R) -> Result<Figures<T>, Error>
where
    T: Float + Default + FromStr,
    T::Err: Display,
    R: BufRead,
{
    let mut figures = Figures::default();
    let mut current: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let number = index + 1;
        let fields = line.split(SEPARATOR).map(str::trim).collect::<Vec<_>>();
        match fields.as_slice() {
            [name] => {
                figures.insert(*name, Ring::new());
                current = Some(name.to_string());
            }
            [x, y] | [x, y, _] => {
                let point = Point {
                    x: parse(x, number)?,
                    y: parse(y, number)?,
                };

                let name = current
                    .as_deref()
                    .ok_or(Error::MissingName { line: number })?;

                figures
                    .get_mut(name)
                    .ok_or(Error::MissingName { line: number })?
                    .add_point(point)
                    .map_err(|source| Error::Ring {
                        name: name.to_string(),
                        source,
                    })?;
            }
            _ => {
                return Err(Error::Parse {
                    line: number,
                    reason: format!("expected 1 to 3 fields, got {}", fields.len()),
                });
            }
        }
    }

    for figure in figures.iter_mut() {
        figure.ring.close().map_err(|source| Error::Ring {
            name: figure.name.clone(),
            source,
        })?;
    }

    tracing::debug!(rings = figures.len(), "geometry data read");
    Ok(figures)
}

/// Writes the given figures as geometry data.
///
/// Every ring must be closed.
pub fn write<T, W>(mut writer: W, figures: &Figures<T>) -> Result<(), Error>
where
    T: Display,
    W: Write,
{
    if let Some(open) = figures.iter().find(|figure| !figure.ring.is_closed()) {
        return Err(Error::Ring {
            name: open.name.clone(),
            source: RingError::NotClosed,
        });
    }

    if let Some(invalid) = figures.iter().find(|figure| !is_valid_name(&figure.name)) {
        return Err(Error::InvalidName {
            name: invalid.name.clone(),
        });
    }

    for figure in figures {
        writeln!(writer, "{}", figure.name)?;
        for point in &figure.ring {
            writeln!(writer, "{}{SEPARATOR}{}", point.x, point.y)?;
        }
    }

    writer.flush()?;
    tracing::debug!(rings = figures.len(), "geometry data written");
    Ok(())
}

/// Returns the figures described in the given geometry file.
pub fn read_file<T>(path: impl AsRef<Path>) -> Result<Figures<T>, Error>
where
    T: Float + Default + FromStr,
    T::Err: Display,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "reading geometry file");
    read(BufReader::new(File::open(path)?))
}

/// Writes the given figures into a new geometry file, never overwriting an existing one.
pub fn write_file<T>(path: impl AsRef<Path>, figures: &Figures<T>) -> Result<(), Error>
where
    T: Display,
{
    let path = path.as_ref();
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        Err(error) => return Err(error.into()),
    };

    tracing::debug!(path = %path.display(), "writing geometry file");
    write(BufWriter::new(file), figures)
}

/// Returns true if, and only if, the given name would be read back as a name line holding
/// exactly the same text.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.trim() == name
        && !name.contains([SEPARATOR, '\n', '\r'])
}

fn parse<T>(field: &str, line: usize) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    field.parse().map_err(|error| Error::Parse {
        line,
        reason: format!("invalid coordinate {field:?}: {error}"),
    })
}
