use crate::base;

/// Everything that narrows or orders the visible transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub interval: base::Interval,
    /// Wildcard patterns. A transaction is kept if its category matches any.
    pub categories: Vec<String>,
    /// Wildcard patterns. A transaction is dropped if its category matches
    /// any. Takes precedence over `categories`.
    pub not_categories: Vec<String>,
    pub search: String,
    pub sort: Option<(base::Column, base::Direction)>,
}

impl Default for Query {
    /// Matches every transaction, in stored order.
    fn default() -> Self {
        Self {
            interval: base::Interval::MAX,
            categories: vec!["*".to_string()],
            not_categories: Vec::new(),
            search: String::new(),
            sort: None,
        }
    }
}

/// Visible rows of a ledger and the category totals of exactly those rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<base::table::Row>,
    pub totals: base::Totals,
}

/// Keeps transactions whose date lies in `interval`, both ends inclusive.
pub fn date_filter<'a, I>(txs: I, interval: base::Interval) -> Vec<&'a base::Transaction>
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    if interval.is_empty() {
        return Vec::new();
    }
    txs.into_iter()
        .filter(|t| interval.contains(t.date()))
        .collect()
}

/// Keeps transactions whose category matches any pattern in `categories` and
/// none in `not_categories`.
pub fn category_filter<'a, T, U>(
    txs: Vec<&'a base::Transaction>,
    categories: &[T],
    not_categories: &[U],
) -> Vec<&'a base::Transaction>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = categories
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_categories
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    txs.into_iter()
        .filter(|t| {
            incl.iter().any(|p| p.matches(t.category()))
                && !excl.iter().any(|p| p.matches(t.category()))
        })
        .collect()
}

/// Applies `query` to `ledger`. Rows are filtered, sorted and searched in
/// that order. Totals cover the same transactions as the rows.
pub fn frame(ledger: &base::Ledger, query: &Query) -> Frame {
    let mut txs = category_filter(
        date_filter(ledger, query.interval),
        &query.categories,
        &query.not_categories,
    );
    if let Some((column, direction)) = query.sort {
        base::sort::sort(&mut txs, column, direction);
    }
    let rows = base::table::search(base::table::render(txs.iter().copied()), &query.search);
    let visible = rows
        .iter()
        .map(|r| r.id)
        .collect::<std::collections::HashSet<_>>();
    let totals = base::aggregate::by_category(txs.into_iter().filter(|t| visible.contains(&t.id())));
    Frame { rows, totals }
}
