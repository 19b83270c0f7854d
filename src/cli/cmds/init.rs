use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing repository's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let key = base::fs::Key::Config;
        let path = fs.path(key);
        let existing = if self.reset_config {
            None
        } else {
            fs.read::<base::Config>(key)
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        let config = existing.unwrap_or_else(initial_config);
        fs.write(key, &config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        log::info!("wrote config to '{}'", path.display());

        Ok(cli::Output::Str(if !already_repo {
            format!("Repository initialized in '{}'", fs.dir().display())
        } else if self.reset_config {
            "Repository configuration reset to defaults.".to_string()
        } else {
            format!("Repository reinitialized in '{}'", fs.dir().display())
        }))
    }
}
