use crate::base;
use crate::cli;

/// Chart transaction totals by category
#[derive(clap::Parser)]
pub struct Plot {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    #[command(flatten)]
    projections: Projections,
}

/// Which charts to draw. Both if neither is given.
#[derive(clap::Args)]
pub struct Projections {
    /// Draw each category's share of the total
    #[arg(long)]
    pie: bool,

    /// Draw each category's total
    #[arg(long)]
    bar: bool,
}

impl Projections {
    pub fn selected(&self) -> Vec<base::chart::Projection> {
        base::chart::Projection::ALL
            .into_iter()
            .filter(|p| match p {
                base::chart::Projection::Proportion => self.pie || !self.bar,
                base::chart::Projection::Magnitude => self.bar || !self.pie,
            })
            .collect()
    }
}

impl Plot {
    pub fn run(
        &self,
        session: &mut base::Session,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        self.filter_opts.apply(session);
        Ok(charts(
            session,
            config,
            &self.projections.selected(),
            cli::util::term_width(),
        ))
    }
}

/// Charts of the session's visible transactions.
pub fn charts(
    session: &base::Session,
    config: &base::Config,
    projections: &[base::chart::Projection],
    term_width: usize,
) -> cli::Output {
    let totals = session.book().frame().totals;
    let configs = projections
        .iter()
        .map(|&projection| base::chart::Config {
            charset: cli::util::charset_from_config(config),
            term_width,
            kind: session.kind(),
            currency: config.currency_symbol.clone(),
            projection,
            totals: totals.clone(),
        })
        .collect();
    cli::util::with_damage_notice(session, cli::Output::Charts(configs))
}
