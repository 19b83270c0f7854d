use crate::base;

/// Which ledger a transaction belongs to. Both kinds share every operation;
/// they differ only in storage key, seed data and labels.
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
pub enum Kind {
    Expense,
    Income,
}

impl Kind {
    /// Storage key of this kind's snapshot.
    pub fn key(self) -> base::fs::Key {
        match self {
            Kind::Expense => base::fs::Key::Expenses,
            Kind::Income => base::fs::Key::Incomes,
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Kind::Expense => "Expenses",
            Kind::Income => "Incomes",
        }
    }

    /// Sample transactions written when a kind's snapshot does not exist yet.
    pub fn seed(self) -> Vec<base::Draft> {
        match self {
            Kind::Expense => vec![
                base::Draft::new("Lunch", "Food", "12.99", "2024-10-20"),
                base::Draft::new("Uber", "Transportation", "8.50", "2024-10-21"),
                base::Draft::new("Movie Ticket", "Entertainment", "15.00", "2024-10-22"),
            ],
            Kind::Income => Vec::new(),
        }
    }
}
