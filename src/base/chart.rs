use crate::base;

/// How category totals are drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum Projection {
    /// Each category's share of the grand total.
    #[strum(serialize = "pie")]
    Proportion,
    /// Each category's total amount.
    #[strum(serialize = "bar")]
    Magnitude,
}

impl Projection {
    pub const ALL: [Self; 2] = [Self::Proportion, Self::Magnitude];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub kind: base::Kind,
    pub currency: String,
    pub projection: Projection,
    pub totals: base::Totals,
}

pub struct Chart<'a> {
    charset: &'a base::Charset,
    title: String,
    entries: Vec<Entry<'a>>,
    label_charlen: usize,
    max_barlen: usize,
}

struct Entry<'a> {
    label: &'a str,
    value: String,
    /// Bar length as a fraction of the longest possible bar.
    fill: f64,
    negative: bool,
}

impl Config {
    pub fn title(&self) -> String {
        match self.projection {
            Projection::Proportion => format!("Share of {} by Category", self.kind.plural()),
            Projection::Magnitude => format!(
                "Total {} by Category ({})",
                self.kind.plural(),
                self.currency
            ),
        }
    }

    pub fn to_chart(&self) -> Chart<'_> {
        let entries = match self.projection {
            Projection::Proportion => self
                .totals
                .proportions()
                .into_iter()
                .map(|(label, share)| Entry {
                    label,
                    value: format!("{:.1}%", share * 100.0),
                    fill: share.abs().min(1.0),
                    negative: share < 0.0,
                })
                .collect::<Vec<_>>(),
            Projection::Magnitude => {
                let max_abs_val = self
                    .totals
                    .iter()
                    .map(|(_, v)| v.abs())
                    .max()
                    .unwrap_or_default();
                self.totals
                    .magnitudes()
                    .into_iter()
                    .map(|(label, v)| Entry {
                        label,
                        value: v.to_string(),
                        fill: v.abs().ratio(max_abs_val),
                        negative: v.0 < 0,
                    })
                    .collect::<Vec<_>>()
            }
        };

        let label_charlen = entries
            .iter()
            .map(|e| base::util::width(e.label))
            .max()
            .unwrap_or_default();
        let value_charlen = entries
            .iter()
            .map(|e| base::util::width(&e.value))
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(
                label_charlen
                    + base::util::BOUNDING_SPACES_COUNT
                    + 1 // vertical divider just before bar
                    + value_charlen,
            );

        Chart {
            charset: &self.charset,
            title: self.title(),
            entries,
            label_charlen,
            max_barlen,
        }
    }
}

impl Chart<'_> {
    fn barlen(&self, fill: f64) -> usize {
        let x = fill * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, entry: &Entry) -> std::fmt::Result {
        let mut label = String::new();
        base::util::push_padded(&mut label, entry.label, self.label_charlen, false);
        write!(w, "{} {}", label, self.charset.chart_axis)?;
        let barlen = self.barlen(entry.fill);
        if barlen > 0 {
            let c = if entry.negative {
                self.charset.chart_bar_neg
            } else {
                self.charset.chart_bar_pos
            };
            let mut bars = c.to_string().repeat(barlen);
            if self.charset.color {
                bars = if entry.negative {
                    colored::Colorize::red(bars.as_str()).to_string()
                } else {
                    colored::Colorize::green(bars.as_str()).to_string()
                };
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", entry.value)
    }
}

impl std::fmt::Display for Chart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.entries.is_empty() {
            return writeln!(f, "No transactions.");
        }
        for entry in &self.entries {
            self.draw(f, entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rstest::rstest;

    fn config(projection: Projection, totals: base::Totals) -> Config {
        Config {
            charset: base::Charset::default(),
            term_width: 60,
            kind: base::Kind::Expense,
            currency: "\u{20aa}".to_string(),
            projection,
            totals,
        }
    }

    fn totals(entries: &[(&str, i64)]) -> base::Totals {
        entries
            .iter()
            .map(|&(k, v)| (k.to_string(), base::Cents(v)))
            .collect()
    }

    #[test]
    fn test_magnitude() {
        let config = config(
            Projection::Magnitude,
            totals(&[("Food", 2000), ("Rent", -1000), ("Fun", 0)]),
        );
        let got = config.to_chart().to_string();
        let want = indoc!(
            "
            Total Expenses by Category (\u{20aa})
            Food |+++++++++++++++++++++++++++++++++++++++++++++++ 20.00
            Rent |------------------------ -10.00
            Fun  |0.00
            "
        );
        assert_eq!(got, want)
    }

    #[test]
    fn test_proportion() {
        let config = config(
            Projection::Proportion,
            totals(&[("Food", 3000), ("Rent", 1000)]),
        );
        let got = config.to_chart().to_string();
        let want = indoc!(
            "
            Share of Expenses by Category
            Food |++++++++++++++++++++++++++++++++++++ 75.0%
            Rent |++++++++++++ 25.0%
            "
        );
        assert_eq!(got, want)
    }

    #[test]
    fn test_proportion_zero_total() {
        let config = config(
            Projection::Proportion,
            totals(&[("Food", 1000), ("Refund", -1000)]),
        );
        let got = config.to_chart().to_string();
        let want = indoc!(
            "
            Share of Expenses by Category
            Food   |0.0%
            Refund |0.0%
            "
        );
        assert_eq!(got, want)
    }

    #[test]
    fn test_empty() {
        let got = config(Projection::Magnitude, base::Totals::default())
            .to_chart()
            .to_string();
        assert_eq!(got, "Total Expenses by Category (\u{20aa})\nNo transactions.\n")
    }

    #[rstest]
    #[case("pie", Projection::Proportion)]
    #[case("BAR", Projection::Magnitude)]
    fn test_projection_fromstr(#[case] s: &str, #[case] want: Projection) {
        assert_eq!(s.parse::<Projection>().unwrap(), want)
    }
}
