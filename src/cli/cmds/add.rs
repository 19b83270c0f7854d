use anyhow::Context;

use crate::base;
use crate::cli;

/// Add a transaction
#[derive(clap::Parser)]
pub struct Add {
    /// What the transaction was for
    name: String,

    /// Transaction category, case-sensitive
    category: String,

    /// Transaction amount, with at most two decimal places
    #[arg(allow_negative_numbers = true)]
    amount: String,

    /// Transaction date
    #[arg(default_value = "d")]
    date: String,
}

impl Add {
    pub fn run(
        &self,
        session: &mut base::Session,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let draft = base::Draft::new(&self.name, &self.category, &self.amount, &self.date);
        let id = session.submit(&draft)?;
        let tx = session
            .book()
            .ledger()
            .get(id)
            .with_context(|| format!("{} {} vanished after being added", session.kind(), id))?;
        Ok(cli::Output::Table(cli::util::single_row_table(tx, config)))
    }
}
