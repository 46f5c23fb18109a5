//! Persistent storage for precomputed root-of-unity tables.
//!
//! The store is an explicit interface so tests can stub it in memory and
//! multi-process users can point instances at disjoint directories. The
//! on-disk format is one decimal element per line, newline-terminated,
//! exactly `n` lines, in a file named `W<w>.cache`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::AlgebraError;
use crate::primitive::Primitive;

/// Storage backend for omega tables, keyed by the root `w`.
///
/// Not safe under concurrent writers to the same key; callers serialize
/// or disambiguate directories.
pub trait OmegaStore<T: Primitive> {
    /// Loads the table cached under `w`, validated to hold `n` elements.
    ///
    /// # Errors
    ///
    /// Storage faults, or [`AlgebraError::Cache`] for a malformed or
    /// truncated entry.
    fn load(&self, w: T, n: usize) -> Result<Option<Vec<T>>, AlgebraError>;

    /// Persists `omegas` under the key `w`.
    ///
    /// # Errors
    ///
    /// Storage faults.
    fn save(&self, w: T, omegas: &[T]) -> Result<(), AlgebraError>;
}

/// The file-backed store: `W<w>.cache` files in one directory.
#[derive(Debug, Clone)]
pub struct FileOmegaStore {
    dir: PathBuf,
}

impl FileOmegaStore {
    /// A store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileOmegaStore { dir: dir.into() }
    }

    /// A store over the process's current directory, the historical
    /// default location.
    pub fn current_dir() -> Self {
        FileOmegaStore {
            dir: PathBuf::from("."),
        }
    }

    fn path<T: Primitive>(&self, w: T) -> PathBuf {
        self.dir.join(format!("W{w}.cache"))
    }
}

impl<T: Primitive> OmegaStore<T> for FileOmegaStore {
    fn load(&self, w: T, n: usize) -> Result<Option<Vec<T>>, AlgebraError> {
        let path = self.path(w);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let mut omegas = Vec::with_capacity(n);
        for line in content.lines() {
            let value = line
                .trim()
                .parse::<T>()
                .map_err(|_| AlgebraError::Cache(format!("bad element {line:?} in {path:?}")))?;
            omegas.push(value);
        }
        if omegas.len() != n {
            return Err(AlgebraError::Cache(format!(
                "{path:?} holds {} elements, expected {n}",
                omegas.len()
            )));
        }
        Ok(Some(omegas))
    }

    fn save(&self, w: T, omegas: &[T]) -> Result<(), AlgebraError> {
        let mut file = fs::File::create(self.path(w))?;
        for omega in omegas {
            writeln!(file, "{omega}")?;
        }
        Ok(())
    }
}
