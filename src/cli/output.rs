use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Table(base::table::Config),
    Summary(base::summary::Config),
    Charts(Vec<base::chart::Config>),
    /// Transaction that was, or with `confirmed` unset would be, removed.
    Removal {
        table: base::table::Config,
        confirmed: bool,
    },
    /// `output` preceded by a notice.
    Noticed {
        notice: String,
        output: Box<Output>,
    },
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.is_empty() || s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => write!(f, "{}", config.to_table()),
            Output::Summary(config) => write!(f, "{}", config),
            Output::Charts(configs) => {
                for (i, config) in configs.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", config.to_chart())?;
                }
                Ok(())
            }
            Output::Removal { table, confirmed } => {
                write!(f, "{}", table.to_table())?;
                let mut msg = if *confirmed {
                    "Removed.".to_string()
                } else {
                    "Would be removed. Rerun with '--confirm' to remove.".to_string()
                };
                if table.charset.color {
                    msg = if *confirmed {
                        colored::Colorize::red(msg.as_str()).to_string()
                    } else {
                        colored::Colorize::yellow(msg.as_str()).to_string()
                    };
                }
                writeln!(f, "{}", msg)
            }
            Output::Noticed { notice, output } => {
                writeln!(f, "note: {}", notice)?;
                write!(f, "{}", output)
            }
        }
    }
}
