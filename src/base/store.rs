use crate::base;

/// Loads and saves the ledger of one kind.
pub struct Store<'a> {
    fs: &'a base::Fs,
    kind: base::Kind,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The snapshot exists but is not a valid ledger.
    #[error("failed to read '{}'", .path.display())]
    Corrupt {
        path: std::path::PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to read '{}'", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{}'", .path.display())]
    Seed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("failed to write '{}'", .path.display())]
pub struct SaveError {
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl<'a> Store<'a> {
    pub fn new(fs: &'a base::Fs, kind: base::Kind) -> Self {
        Self { fs, kind }
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.fs.path(self.kind.key())
    }

    /// Reads the snapshot. A missing snapshot is replaced by the kind's seed
    /// data, which is written back before returning.
    pub fn load(&self) -> Result<base::Ledger, LoadError> {
        let key = self.kind.key();
        match self.fs.read::<base::Ledger>(key) {
            Ok(Some(ledger)) => {
                log::info!(
                    "loaded {} {} from '{}'",
                    ledger.len(),
                    key,
                    self.path().display()
                );
                Ok(ledger)
            }
            Ok(None) => {
                let ledger = self.seed();
                log::info!(
                    "seeding '{}' with {} transactions",
                    self.path().display(),
                    ledger.len()
                );
                self.save(&ledger).map_err(|e| LoadError::Seed {
                    path: e.path,
                    source: e.source,
                })?;
                Ok(ledger)
            }
            Err(base::fs::ReadError::Io(source)) => Err(LoadError::Io {
                path: self.path(),
                source,
            }),
            Err(base::fs::ReadError::Serde(source)) => Err(LoadError::Corrupt {
                path: self.path(),
                source,
            }),
        }
    }

    /// Like `load`, but a corrupt snapshot yields an empty ledger together
    /// with the error that caused it. The snapshot itself is left untouched.
    pub fn load_or_empty(&self) -> Result<(base::Ledger, Option<LoadError>), LoadError> {
        match self.load() {
            Ok(ledger) => Ok((ledger, None)),
            Err(LoadError::Corrupt { path, source }) => {
                log::warn!(
                    "'{}' is unreadable: {}; falling back to an empty ledger",
                    path.display(),
                    source
                );
                Ok((base::Ledger::new(), Some(LoadError::Corrupt { path, source })))
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrites the snapshot with the whole of `ledger`.
    pub fn save(&self, ledger: &base::Ledger) -> Result<(), SaveError> {
        self.fs
            .write(self.kind.key(), ledger)
            .map_err(|source| SaveError {
                path: self.path(),
                source,
            })?;
        log::info!(
            "saved {} {} to '{}'",
            ledger.len(),
            self.kind.key(),
            self.path().display()
        );
        Ok(())
    }

    fn seed(&self) -> base::Ledger {
        let mut ledger = base::Ledger::new();
        for draft in self.kind.seed() {
            match draft.validate() {
                Ok(fields) => {
                    ledger.push(fields);
                }
                Err(e) => log::error!("skipping invalid seed transaction {:?}: {}", draft.name, e),
            }
        }
        ledger
    }
}
