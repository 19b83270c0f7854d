use crate::base;
use crate::cli;

/// View transactions
#[derive(clap::Parser)]
pub struct View {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    /// Sort by COLUMN, ascending
    ///
    /// COLUMN is a column name (date, name, category, amount) or its
    /// zero-based index. Ties keep their stored order.
    #[arg(long, value_name = "COLUMN", value_parser = cli::util::parse_column)]
    sort: Option<base::Column>,

    /// Sort descending instead
    #[arg(long, requires = "sort")]
    desc: bool,
}

impl View {
    pub fn run(
        &self,
        session: &mut base::Session,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        self.filter_opts.apply(session);
        if let Some(column) = self.sort {
            session.sort(column);
            if self.desc {
                session.sort(column);
            }
        }
        let table = cli::util::table(session, config);
        Ok(cli::util::with_damage_notice(session, cli::Output::Table(table)))
    }
}
