use anyhow::Context;

use crate::base;
use crate::cli;

/// Show or set personal details
#[derive(clap::Parser)]
pub struct Profile {
    /// Set the owner's name
    #[arg(long)]
    name: Option<String>,

    /// Set the owner's email address
    #[arg(long)]
    email: Option<String>,
}

impl Profile {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let key = base::fs::Key::PersonalDetails;
        let path = fs.path(key);
        let mut details = fs
            .read::<base::PersonalDetails>(key)
            .with_context(|| format!("failed to read '{}'", path.display()))?
            .unwrap_or_default();

        if self.name.is_some() || self.email.is_some() {
            if let Some(name) = &self.name {
                details.name = name.clone();
            }
            if let Some(email) = &self.email {
                details.email = email.clone();
            }
            fs.write(key, &details)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
        }

        Ok(cli::Output::Str(format!(
            "Name: {}\nEmail: {}",
            details.name, details.email
        )))
    }
}
