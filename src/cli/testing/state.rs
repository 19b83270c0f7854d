use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    expenses: Option<base::Ledger>,
    incomes: Option<base::Ledger>,
    personal: Option<base::PersonalDetails>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's expense [`base::Ledger`].
    pub fn with_expenses<T>(mut self, ledger: T) -> Self
    where
        T: TryInto<base::Ledger> + std::fmt::Debug,
        <T as TryInto<base::Ledger>>::Error: std::fmt::Debug,
    {
        self.expenses = Some(ledger.try_into().unwrap());
        self
    }

    /// Sets repo's income [`base::Ledger`].
    pub fn with_incomes<T>(mut self, ledger: T) -> Self
    where
        T: TryInto<base::Ledger> + std::fmt::Debug,
        <T as TryInto<base::Ledger>>::Error: std::fmt::Debug,
    {
        self.incomes = Some(ledger.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::PersonalDetails`].
    pub fn with_personal<T>(mut self, personal: T) -> Self
    where
        T: TryInto<base::PersonalDetails> + std::fmt::Debug,
        <T as TryInto<base::PersonalDetails>>::Error: std::fmt::Debug,
    {
        self.personal = Some(personal.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        use base::fs::Key;
        Self {
            config: fs.read(Key::Config).unwrap(),
            expenses: fs.read(Key::Expenses).unwrap(),
            incomes: fs.read(Key::Incomes).unwrap(),
            personal: fs.read(Key::PersonalDetails).unwrap(),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    expenses: Option<&'a str>,
    incomes: Option<&'a str>,
    personal: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's expense [`base::Ledger`] file contents.
    pub fn with_expenses(mut self, s: &'a str) -> Self {
        self.expenses = Some(s);
        self
    }

    /// Sets repo's income [`base::Ledger`] file contents.
    pub fn with_incomes(mut self, s: &'a str) -> Self {
        self.incomes = Some(s);
        self
    }

    /// Sets repo's [`base::PersonalDetails`] file contents.
    pub fn with_personal(mut self, s: &'a str) -> Self {
        self.personal = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, key: base::fs::Key, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Serde,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path(key), s).unwrap()
            }
        }

        use base::fs::Key;
        write::<base::Config>(fs, Key::Config, self.config);
        write::<base::Ledger>(fs, Key::Expenses, self.expenses);
        write::<base::Ledger>(fs, Key::Incomes, self.incomes);
        write::<base::PersonalDetails>(fs, Key::PersonalDetails, self.personal);
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.expenses {
            os = os.with_expenses(s);
        }
        if let Some(s) = self.incomes {
            os = os.with_incomes(s);
        }
        if let Some(s) = self.personal {
            os = os.with_personal(s);
        }
        os
    }
}
