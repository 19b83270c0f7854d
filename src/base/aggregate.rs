use crate::base;

/// Per-key totals plus a grand total. Keys iterate in the order they were
/// first added.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    entries: Vec<(K, V)>,
    index: std::collections::HashMap<K, usize>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            entries: Default::default(),
            index: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Clone + Eq + std::hash::Hash,
        V: Copy + std::ops::AddAssign,
    {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
        self.sum += value;
    }

    #[cfg(test)]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Eq + std::hash::Hash + std::borrow::Borrow<Q>,
        Q: Eq + std::hash::Hash + ?Sized,
        V: Copy,
    {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, V)> + '_
    where
        V: Copy,
    {
        self.entries.iter().map(|(k, v)| (k, *v))
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Clone + Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Self::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}

/// Category totals in first-seen order.
pub type Totals = Aggregate<String, base::Cents>;

/// Groups `txs` by exact (case-sensitive) category and sums their amounts.
pub fn by_category<'a, I>(txs: I) -> Totals
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    txs.into_iter()
        .map(|t| (t.category().to_string(), t.amount()))
        .collect()
}

impl<K> Aggregate<K, base::Cents> {
    /// Each key's fraction of the grand total. All zero if the total is zero.
    pub fn proportions(&self) -> Vec<(&K, f64)> {
        self.iter().map(|(k, v)| (k, v.ratio(self.sum))).collect()
    }

    /// Each key's absolute total.
    pub fn magnitudes(&self) -> Vec<(&K, base::Cents)> {
        self.iter().collect()
    }
}
