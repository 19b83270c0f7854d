use crate::base;
use crate::cli;

/// View unique categories
#[derive(clap::Parser)]
pub struct Cats {
    #[arg(long, help = cli::sharedopts::FULLMATCH_HELP, long_help = cli::sharedopts::FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,

    /// Wildcard pattern to match categories of interest
    ///
    /// If multiple patterns are provided, include categories that match any
    /// pattern.
    #[arg(default_value = "*")]
    pub category: Vec<String>,
}

impl Cats {
    /// Categories are listed in order of first appearance.
    pub fn run(&self, session: &base::Session) -> anyhow::Result<cli::Output> {
        let patterns = cli::util::preprocess_categories(&self.category, self.fullmatch)
            .iter()
            .map(|s| wildmatch::WildMatch::new(s))
            .collect::<Vec<_>>();
        let cats = session
            .book()
            .ledger()
            .categories()
            .into_iter()
            .filter(|c| patterns.iter().any(|p| p.matches(c)))
            .collect::<Vec<_>>();
        let output = if cats.is_empty() {
            cli::Output::Str("No categories.".to_string())
        } else {
            cli::Output::Str(cats.join("\n"))
        };
        Ok(cli::util::with_damage_notice(session, output))
    }
}
