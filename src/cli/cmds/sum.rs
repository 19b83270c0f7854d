use crate::base;
use crate::cli;

/// View transaction totals by category
#[derive(clap::Parser)]
pub struct Sum {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Sum {
    pub fn run(
        &self,
        session: &mut base::Session,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        self.filter_opts.apply(session);
        Ok(summary(session, config))
    }
}

/// Category totals of the session's visible transactions.
pub fn summary(session: &base::Session, config: &base::Config) -> cli::Output {
    let output = cli::Output::Summary(base::summary::Config {
        charset: cli::util::charset_from_config(config),
        totals: session.book().frame().totals,
    });
    cli::util::with_damage_notice(session, output)
}
