use crate::base;
use crate::cli;

/// Remove a transaction
#[derive(clap::Parser)]
pub struct Rm {
    /// Transaction id, as shown by 'view'
    id: base::Id,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        &self,
        session: &mut base::Session,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let tx = if self.confirm {
            session.delete(self.id)?
        } else {
            session.book().ledger().get(self.id).cloned()
        };
        Ok(match tx {
            Some(tx) => cli::Output::Removal {
                table: cli::util::single_row_table(&tx, config),
                confirmed: self.confirm,
            },
            None => cli::util::not_found(session.kind(), self.id),
        })
    }
}
