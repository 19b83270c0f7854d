use crate::base;

/// Transactions of one kind, in insertion order. Ids are unique within a
/// ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(Vec<base::Transaction>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `inner`, giving a fresh id to every transaction whose id is
    /// unassigned or already taken by an earlier transaction.
    fn from_vec(mut inner: Vec<base::Transaction>) -> Self {
        let mut next = inner.iter().map(|t| t.id().0).max().unwrap_or_default() + 1;
        let mut seen = std::collections::HashSet::with_capacity(inner.len());
        for t in inner.iter_mut() {
            if !t.id().is_assigned() || !seen.insert(t.id()) {
                t.set_id(base::Id(next));
                seen.insert(base::Id(next));
                next += 1;
            }
        }
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[base::Transaction] {
        &self.0
    }

    /// One past the highest id in use.
    pub fn next_id(&self) -> base::Id {
        base::Id(self.0.iter().map(|t| t.id().0).max().unwrap_or_default() + 1)
    }

    fn index_of(&self, id: base::Id) -> Option<usize> {
        self.0.iter().position(|t| t.id() == id)
    }

    /// Appends a transaction and returns its newly assigned id.
    pub fn push(&mut self, fields: base::Fields) -> base::Id {
        let id = self.next_id();
        self.push_as(id, fields);
        id
    }

    /// Appends a transaction under `id`, which must not be in use.
    pub fn push_as(&mut self, id: base::Id, fields: base::Fields) {
        debug_assert!(self.get(id).is_none(), "id {} is already in use", id);
        self.0.push(base::Transaction::new(id, fields));
    }

    pub fn get(&self, id: base::Id) -> Option<&base::Transaction> {
        self.index_of(id).map(|i| &self.0[i])
    }

    /// Removes and returns the transaction with the given id. If there is no
    /// such transaction, returns `None` and leaves the ledger unmodified.
    pub fn remove(&mut self, id: base::Id) -> Option<base::Transaction> {
        let i = self.index_of(id)?;
        Some(self.0.remove(i))
    }

    /// Overwrites the fields of the transaction with the given id, keeping
    /// its id and position. Returns the previous value.
    pub fn replace(&mut self, id: base::Id, fields: base::Fields) -> Option<base::Transaction> {
        let i = self.index_of(id)?;
        Some(std::mem::replace(
            &mut self.0[i],
            base::Transaction::new(id, fields),
        ))
    }

    /// Returns unique categories in order of first occurrence.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.iter()
            .map(base::Transaction::category)
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

impl IntoIterator for Ledger {
    type Item = base::Transaction;
    type IntoIter = std::vec::IntoIter<base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a base::Transaction;
    type IntoIter = std::slice::Iter<'a, base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<base::Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = &'a base::Transaction>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl base::fs::Serde for Ledger {}

impl std::fmt::Display for Ledger {
    /// Writes a JSON array with a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid snapshot at line {}", .source.line())]
pub struct ParseError {
    #[from]
    source: serde_json::Error,
}

impl std::str::FromStr for Ledger {
    type Err = ParseError;

    /// Parses a JSON array of transactions. Transactions written without an
    /// id are given one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = serde_json::from_str::<Vec<base::Transaction>>(s)?;
        Ok(Self::from_vec(inner))
    }
}

impl TryFrom<&str> for Ledger {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
