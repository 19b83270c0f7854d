use crate::base;

/// Display strings for one transaction, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: base::Id,
    pub date: String,
    pub name: String,
    pub category: String,
    pub amount: String,
}

impl From<&base::Transaction> for Row {
    fn from(t: &base::Transaction) -> Self {
        Self {
            id: t.id(),
            date: t.date().to_string(),
            name: t.name().to_string(),
            category: t.category().to_string(),
            amount: t.amount().to_string(),
        }
    }
}

impl Row {
    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.name, &self.category, &self.amount]
    }

    /// True if any cell contains `query`, ignoring case. An empty query
    /// matches every row.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self
                .cells()
                .iter()
                .any(|c| c.to_lowercase().contains(&query))
    }
}

/// One row per transaction, same order.
pub fn render<'a, I>(txs: I) -> Vec<Row>
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    txs.into_iter().map(Row::from).collect()
}

/// Keeps only the rows matching `query`.
pub fn search(mut rows: Vec<Row>, query: &str) -> Vec<Row> {
    rows.retain(|r| r.matches(query));
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub rows: Vec<Row>,
    pub sorted: Option<(base::Column, base::Direction)>,
}

impl Config {
    pub fn to_table(&self) -> Table<'_> {
        let id_header = "ID".to_string();
        let headers = base::Column::ALL.map(|c| {
            format!(
                "{} {}",
                header_label(c),
                base::sort::glyph(self.sorted, c, &self.charset)
            )
        });
        let mut widths = [0usize; 5];
        widths[0] = base::util::width(&id_header);
        for (i, h) in headers.iter().enumerate() {
            widths[i + 1] = base::util::width(h);
        }
        for r in &self.rows {
            widths[0] = widths[0].max(base::util::count_digits(r.id.0));
            for (i, c) in r.cells().iter().enumerate() {
                widths[i + 1] = widths[i + 1].max(base::util::width(c));
            }
        }
        Table {
            charset: &self.charset,
            headers: [
                id_header,
                headers[0].clone(),
                headers[1].clone(),
                headers[2].clone(),
                headers[3].clone(),
            ],
            widths,
            rows: &self.rows,
        }
    }
}

fn header_label(column: base::Column) -> &'static str {
    match column {
        base::Column::Date => "Date",
        base::Column::Name => "Name",
        base::Column::Category => "Category",
        base::Column::Amount => "Amount",
    }
}

pub struct Table<'a> {
    charset: &'a base::Charset,
    headers: [String; 5],
    widths: [usize; 5],
    rows: &'a [Row],
}

impl Table<'_> {
    const GAP: &'static str = "  ";

    /// ID and amount columns are right-aligned.
    fn right_aligned(col: usize) -> bool {
        col == 0 || col == 4
    }

    fn line(&self, cells: [&str; 5]) -> String {
        let mut s = String::new();
        for (i, c) in cells.iter().enumerate() {
            if i > 0 {
                s.push_str(Self::GAP);
            }
            base::util::push_padded(&mut s, c, self.widths[i], Self::right_aligned(i));
        }
        s
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No transactions.");
        }
        let headers = self.headers.each_ref().map(String::as_str);
        writeln!(f, "{}", self.line(headers))?;
        let rules = self.widths.map(|w| self.charset.dash.to_string().repeat(w));
        writeln!(f, "{}", self.line(rules.each_ref().map(String::as_str)))?;
        for r in self.rows {
            let id = r.id.to_string();
            let [date, name, category, amount] = r.cells();
            writeln!(f, "{}", self.line([id.as_str(), date, name, category, amount]))?;
        }
        Ok(())
    }
}
