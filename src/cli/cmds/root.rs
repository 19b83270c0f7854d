use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal expense and income tracker
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Ledger to operate on
    #[arg(
        short,
        long,
        global = true,
        ignore_case = true,
        default_value = "expense",
        value_parser = cli::sharedopts::kind_parser(),
    )]
    kind: base::Kind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Add(cli::cmds::add::Add),
    Edit(cli::cmds::edit::Edit),
    Rm(cli::cmds::rm::Rm),
    View(cli::cmds::view::View),
    Sum(cli::cmds::sum::Sum),
    Plot(cli::cmds::plot::Plot),
    Cats(cli::cmds::cats::Cats),
    Profile(cli::cmds::profile::Profile),
    Shell(cli::cmds::shell::Shell),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>(base::fs::Key::Config)
            .with_context(|| {
                format!(
                    "failed to read '{}'",
                    fs.path(base::fs::Key::Config).display()
                )
            })?
            .unwrap_or_default();
        if let Commands::Profile(cmd) = self.command {
            return cmd.run(fs);
        }

        let mut session = base::Session::open(fs, self.kind)?;
        match self.command {
            Commands::Init(_) | Commands::Profile(_) => unreachable!(),
            Commands::Add(cmd) => cmd.run(&mut session, &config),
            Commands::Edit(cmd) => cmd.run(&mut session, &config),
            Commands::Rm(cmd) => cmd.run(&mut session, &config),
            Commands::View(cmd) => cmd.run(&mut session, &config),
            Commands::Sum(cmd) => cmd.run(&mut session, &config),
            Commands::Plot(cmd) => cmd.run(&mut session, &config),
            Commands::Cats(cmd) => cmd.run(&session),
            Commands::Shell(cmd) => cmd.run(session, &config),
        }
    }
}
