use clap::builder::TypedValueParser;

use crate::base;
use crate::cli;

/// Parses a ledger kind, listing the possible values in help and errors.
pub fn kind_parser()
-> impl TypedValueParser<Value = base::Kind> + Clone + Send + Sync + 'static {
    clap::builder::PossibleValuesParser::new(<base::Kind as strum::VariantNames>::VARIANTS)
        .map(|s| s.parse::<base::Kind>().expect("possible values should parse"))
}

pub const INTERVAL_HELP: &str = "Date range of interest [default: all dates]";
pub const INTERVAL_HELP_LONG: &str = "Date range of interest [default: all dates]

Must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively. Both ends are inclusive.

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
mn: first day of the nth month from today
Mn: last day of the nth month from today
yn: first day of the nth year from today
Yn: last day of the nth year from today

The following shorthands are also available:
dn = dn:dn
mn = mn:Mn
yn = yn:Yn";

pub const FULLMATCH_HELP: &str = "Match category patterns against whole category names";
pub const FULLMATCH_HELP_LONG: &str = "Match category patterns against whole category names

By default, a pattern without a leading or trailing '*' is treated as if it had one, so 'food' matches 'Fast food'. Matching is case-sensitive either way.";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    /// Wildcard patterns to match categories of interest
    ///
    /// Use commas to separate multiple patterns. A transaction is included if
    /// its category matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,

    /// Wildcard patterns to match categories to exclude
    ///
    /// Use commas to separate multiple patterns. A transaction is excluded if
    /// its category matches any pattern. Takes precedence over '--categories'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_categories: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}

/// Options narrowing the transactions that a command looks at.
#[derive(clap::Args)]
pub struct FilterOpts {
    #[arg(
        default_value = ":",
        hide_default_value = true,
        help = INTERVAL_HELP,
        long_help = INTERVAL_HELP_LONG,
    )]
    pub interval: base::Interval,

    /// Show only transactions with a date, name, category or amount
    /// containing QUERY, ignoring case
    #[arg(short, long, value_name = "QUERY", default_value_t, hide_default_value = true)]
    pub search: String,

    #[command(flatten)]
    pub categories_opts: CategoriesOpts,
}

impl FilterOpts {
    /// Applies these options to the session's active ledger.
    pub fn apply(&self, session: &mut base::Session) {
        let categories = cli::util::preprocess_categories(
            &self.categories_opts.categories,
            self.categories_opts.fullmatch,
        );
        let not_categories = cli::util::preprocess_categories(
            &self.categories_opts.not_categories,
            self.categories_opts.fullmatch,
        );
        session.filter(self.interval, &categories, &not_categories);
        session.search(&self.search);
    }
}
