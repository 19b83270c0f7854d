use crate::base;

/// Sortable table columns, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Column {
    Date,
    Name,
    Category,
    Amount,
}

impl Column {
    pub const ALL: [Self; 4] = [Self::Date, Self::Name, Self::Category, Self::Amount];

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Parses a column name or a zero-based column index.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().parse::<usize>() {
            Ok(i) => Self::from_index(i),
            Err(_) => s.trim().parse::<Self>().ok(),
        }
    }

    /// Amounts compare numerically and dates chronologically. Text columns
    /// compare case-sensitively.
    pub fn compare(self, a: &base::Transaction, b: &base::Transaction) -> std::cmp::Ordering {
        match self {
            Column::Date => a.date().cmp(&b.date()),
            Column::Name => a.name().cmp(b.name()),
            Column::Category => a.category().cmp(b.category()),
            Column::Amount => a.amount().cmp(&b.amount()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Stable sort of `txs` by `column`. Transactions with equal keys keep their
/// relative order in both directions.
pub fn sort(txs: &mut [&base::Transaction], column: Column, direction: Direction) {
    match direction {
        Direction::Ascending => txs.sort_by(|a, b| column.compare(a, b)),
        Direction::Descending => txs.sort_by(|a, b| column.compare(b, a)),
    }
}

/// Remembered direction of every column that has been sorted on, plus the
/// column sorted on most recently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    directions: std::collections::HashMap<Column, Direction>,
    active: Option<Column>,
}

impl SortState {
    /// Makes `column` the active column and returns its new direction. A
    /// column starts ascending and flips on every subsequent toggle, even if
    /// other columns were toggled in between.
    pub fn toggle(&mut self, column: Column) -> Direction {
        let direction = match self.directions.get(&column) {
            Some(d) => d.flip(),
            None => Direction::Ascending,
        };
        self.directions.insert(column, direction);
        self.active = Some(column);
        direction
    }

    pub fn active(&self) -> Option<(Column, Direction)> {
        let column = self.active?;
        Some((column, self.directions[&column]))
    }
}

/// Header glyph for `column` while sorted by `active`. Only the active column
/// shows its direction.
pub fn glyph(
    active: Option<(Column, Direction)>,
    column: Column,
    charset: &base::Charset,
) -> char {
    match active {
        Some((c, Direction::Ascending)) if c == column => charset.sort_asc,
        Some((c, Direction::Descending)) if c == column => charset.sort_desc,
        _ => charset.sort_none,
    }
}
