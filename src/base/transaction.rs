use crate::base;

/// Stable identifier of a transaction within its ledger. Zero means "not yet
/// assigned" and only appears in snapshots written before ids existed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Id(pub u64);

impl Id {
    pub const UNASSIGNED: Self = Self(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    #[serde(default)]
    id: Id,
    name: String,
    category: String,
    amount: base::Cents,
    date: base::Date,
}

impl Transaction {
    pub fn new(id: Id, fields: Fields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            amount: fields.amount,
            date: fields.date,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    /// Returns the unvalidated form of this transaction, e.g. to prefill an
    /// edit.
    pub fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            category: self.category.clone(),
            amount: self.amount.to_string(),
            date: self.date.to_string(),
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Category,
    Amount,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing {0}")]
    Missing(Field),
    #[error("invalid amount")]
    Amount(#[source] base::cents::ParseError),
    #[error("invalid date")]
    Date(#[source] base::date::ParseError),
}

/// Raw field values of a submitted transaction, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub amount: String,
    pub date: String,
}

/// Validated field values of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub category: String,
    pub amount: base::Cents,
    pub date: base::Date,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }

    /// Checks every field is present before checking that amount and date
    /// parse.
    pub fn validate(&self) -> Result<Fields, ValidationError> {
        let name = self.name.trim();
        let category = self.category.trim();
        let amount = self.amount.trim();
        let date = self.date.trim();
        for (value, field) in [
            (name, Field::Name),
            (category, Field::Category),
            (amount, Field::Amount),
            (date, Field::Date),
        ] {
            if value.is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }
        Ok(Fields {
            name: name.to_string(),
            category: category.to_string(),
            amount: amount.parse().map_err(ValidationError::Amount)?,
            date: date.parse().map_err(ValidationError::Date)?,
        })
    }
}

/// Replacement values for an edit. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.amount.is_none() && self.date.is_none()
    }

    /// Overlays this patch onto `draft`.
    pub fn apply(&self, mut draft: Draft) -> Draft {
        if let Some(s) = &self.name {
            draft.name = s.clone();
        }
        if let Some(s) = &self.category {
            draft.category = s.clone();
        }
        if let Some(s) = &self.amount {
            draft.amount = s.clone();
        }
        if let Some(s) = &self.date {
            draft.date = s.clone();
        }
        draft
    }
}
