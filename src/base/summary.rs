use crate::base;

/// Per-category totals with their shares, followed by the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub totals: base::Totals,
}

impl Config {
    const TOTAL: &str = "Total";
    const SHARE_CHARLEN: usize = 6; // 100.0%

    fn lines(&self) -> Vec<(&str, base::Cents)> {
        self.totals
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .chain(std::iter::once((Self::TOTAL, self.totals.sum())))
            .collect()
    }

    fn line(&self, label: &str, amount: base::Cents, alignment_charlen: usize) -> String {
        let dash_count = alignment_charlen
            - base::util::width(label)
            - base::util::BOUNDING_SPACES_COUNT
            - amount.charlen();
        let mut s = String::with_capacity(alignment_charlen + Self::SHARE_CHARLEN + 1);
        s.push_str(label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        s.push_str(&amount.to_string());
        s.push(' ');
        let share = format!("{:.1}%", amount.ratio(self.totals.sum()) * 100.0);
        base::util::push_padded(&mut s, &share, Self::SHARE_CHARLEN, true);
        s
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self.lines();
        let alignment_charlen = lines
            .iter()
            .map(|(label, amount)| {
                base::util::width(label)
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + amount.charlen()
            })
            .max()
            .unwrap_or_default();
        for (label, amount) in lines {
            writeln!(f, "{}", self.line(label, amount, alignment_charlen))?;
        }
        Ok(())
    }
}
