/// Application filesystem. Each storage key maps to one file in `dir`.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Keys of the blobs kept in the repository directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum Key {
    #[strum(serialize = "config")]
    Config,
    #[strum(serialize = "expenses")]
    Expenses,
    #[strum(serialize = "incomes")]
    Incomes,
    #[strum(serialize = "personalDetails")]
    PersonalDetails,
}

impl Key {
    pub fn filename(self) -> String {
        match self {
            Key::Config => ".cashbook.json".to_string(),
            _ => format!("{}.json", self),
        }
    }
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Serde: ToString + std::str::FromStr {}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path(Key::Config).is_file()
    }

    /// Returns the path which `key`'s blob is written to and read from.
    pub fn path(&self, key: Key) -> std::path::PathBuf {
        self.dir.join(key.filename())
    }

    /// Deserializes `T` from `key`'s file, or returns `None` if the file does
    /// not exist.
    pub fn read<T>(&self, key: Key) -> Result<Option<T>, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path(key)) {
            Ok(s) => s
                .parse()
                .map(Some)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(None),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    /// Overwrites `key`'s file with the serialization of `obj`.
    pub fn write<T>(&self, key: Key, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        std::fs::write(self.path(key), obj.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}
