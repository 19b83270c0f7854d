use crate::base;
use crate::cli;

/// Change fields of a transaction, keeping its id and position
#[derive(clap::Parser)]
pub struct Edit {
    /// Transaction id, as shown by 'view'
    id: base::Id,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New category
    #[arg(long)]
    category: Option<String>,

    /// New amount
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<String>,

    /// New date
    #[arg(long)]
    date: Option<String>,
}

impl Edit {
    fn patch(&self) -> base::Patch {
        base::Patch {
            name: self.name.clone(),
            category: self.category.clone(),
            amount: self.amount.clone(),
            date: self.date.clone(),
        }
    }

    pub fn run(
        &self,
        session: &mut base::Session,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let patch = self.patch();
        if patch.is_empty() {
            anyhow::bail!("nothing to edit")
        }
        Ok(match session.edit(self.id, &patch)? {
            Some(tx) => cli::Output::Table(cli::util::single_row_table(&tx, config)),
            None => cli::util::not_found(session.kind(), self.id),
        })
    }
}
