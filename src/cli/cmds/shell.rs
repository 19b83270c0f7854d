use anyhow::Context;

use crate::base;
use crate::cli;

const HISTORY_FILE: &str = ".cashbook_history";

/// Start an interactive session
///
/// Sort, search and filter state lasts until the session ends, separately for
/// each kind. Type 'help' inside the session for its commands.
#[derive(clap::Parser)]
pub struct Shell {}

impl Shell {
    pub fn run(&self, session: base::Session, config: &base::Config) -> anyhow::Result<cli::Output> {
        let mut editor = rustyline::DefaultEditor::new().context("failed to start line editor")?;
        let history = session.fs().dir().join(HISTORY_FILE);
        if editor.load_history(&history).is_err() {
            log::debug!("no history at '{}'", history.display());
        }

        let mut repl = Repl::new(session, config, cli::util::term_width());
        print!("{}", repl.render());
        loop {
            match editor.readline(&repl.prompt()) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(e) = editor.add_history_entry(line.as_str()) {
                        log::debug!("failed to record history: {}", e);
                    }
                    match repl.exec(&line) {
                        Step::Print(s) => print!("{}", s),
                        Step::Quit => break,
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted)
                | Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => return Err(e).context("failed to read line"),
            }
        }

        if let Err(e) = editor.save_history(&history) {
            log::warn!("failed to save history to '{}': {}", history.display(), e);
        }
        Ok(cli::Output::Str(String::new()))
    }
}

/// One line typed into the shell.
#[derive(clap::Parser)]
#[command(
    no_binary_name = true,
    color = clap::ColorChoice::Never,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(clap::Subcommand)]
enum LineCommand {
    Add(cli::cmds::add::Add),
    Edit(cli::cmds::edit::Edit),
    /// Remove a transaction
    Rm {
        /// Transaction id
        id: base::Id,
    },
    /// Sort by a column; repeat to flip direction
    Sort {
        /// Column name (date, name, category, amount) or zero-based index
        #[arg(value_parser = cli::util::parse_column)]
        column: base::Column,
    },
    /// Show only rows containing QUERY, ignoring case; no QUERY shows all
    Search { query: Vec<String> },
    /// Narrow the list to a date range and categories
    Filter {
        #[arg(
            help = cli::sharedopts::INTERVAL_HELP,
            long_help = cli::sharedopts::INTERVAL_HELP_LONG,
        )]
        interval: base::Interval,

        #[command(flatten)]
        categories_opts: cli::sharedopts::CategoriesOpts,
    },
    /// Drop the filter and search query
    Clear,
    /// Switch to the other ledger
    Kind {
        #[arg(ignore_case = true, value_parser = cli::sharedopts::kind_parser())]
        kind: base::Kind,
    },
    /// Show the list
    #[command(alias = "ls")]
    View,
    /// Show totals by category
    Sum,
    /// Chart totals by category
    Plot(cli::cmds::plot::Projections),
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Print(String),
    Quit,
}

struct Repl<'a> {
    session: base::Session<'a>,
    config: &'a base::Config,
    term_width: usize,
}

impl<'a> Repl<'a> {
    fn new(session: base::Session<'a>, config: &'a base::Config, term_width: usize) -> Self {
        Self {
            session,
            config,
            term_width,
        }
    }

    fn prompt(&self) -> String {
        format!("{}> ", self.session.kind())
    }

    fn render(&self) -> cli::Output {
        let table = cli::util::table(&self.session, self.config);
        cli::util::with_damage_notice(&self.session, cli::Output::Table(table))
    }

    fn exec(&mut self, line: &str) -> Step {
        let words = match split(line) {
            Ok(words) => words,
            Err(e) => return Step::Print(format!("error: {}\n", e)),
        };
        let line = match <Line as clap::Parser>::try_parse_from(words) {
            Ok(line) => line,
            Err(e) => return Step::Print(e.render().to_string()),
        };
        match self.dispatch(line.command) {
            Ok(Some(output)) => Step::Print(output.to_string()),
            Ok(None) => Step::Quit,
            Err(e) => Step::Print(format!("error: {:#}\n", e)),
        }
    }

    /// Runs one command. Returns `None` if the shell should exit.
    fn dispatch(&mut self, command: LineCommand) -> anyhow::Result<Option<cli::Output>> {
        let output = match command {
            LineCommand::Add(cmd) => {
                cmd.run(&mut self.session, self.config)?;
                self.render()
            }
            LineCommand::Edit(cmd) => match cmd.run(&mut self.session, self.config)? {
                cli::Output::Table(_) => self.render(),
                notice => notice,
            },
            LineCommand::Rm { id } => match self.session.delete(id)? {
                Some(_) => self.render(),
                None => cli::util::not_found(self.session.kind(), id),
            },
            LineCommand::Sort { column } => {
                self.session.sort(column);
                self.render()
            }
            LineCommand::Search { query } => {
                self.session.search(&query.join(" "));
                self.render()
            }
            LineCommand::Filter {
                interval,
                categories_opts,
            } => {
                let categories = cli::util::preprocess_categories(
                    &categories_opts.categories,
                    categories_opts.fullmatch,
                );
                let not_categories = cli::util::preprocess_categories(
                    &categories_opts.not_categories,
                    categories_opts.fullmatch,
                );
                self.session.filter(interval, &categories, &not_categories);
                self.render()
            }
            LineCommand::Clear => {
                self.session.clear();
                self.render()
            }
            LineCommand::Kind { kind } => {
                self.session.switch(kind)?;
                self.render()
            }
            LineCommand::View => self.render(),
            LineCommand::Sum => cli::cmds::sum::summary(&self.session, self.config),
            LineCommand::Plot(projections) => cli::cmds::plot::charts(
                &self.session,
                self.config,
                &projections.selected(),
                self.term_width,
            ),
            LineCommand::Quit => return Ok(None),
        };
        Ok(Some(output))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unterminated {0} quote")]
struct SplitError(char);

/// Splits `line` into words on whitespace. Single or double quotes group
/// words, and a backslash escapes the next character outside single quotes.
fn split(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = None;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => word.push(c),
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    word.push(next);
                }
                in_word = true;
            }
            (Some(_), c) => word.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            (None, c) => {
                word.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        return Err(SplitError(q));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("view", &["view"])]
    #[case("  add  Lunch Food 12.99 ", &["add", "Lunch", "Food", "12.99"])]
    #[case(r#"add "Big Lunch" 'Fast food' -3"#, &["add", "Big Lunch", "Fast food", "-3"])]
    #[case(r#"search """#, &["search", ""])]
    #[case(r#"add Joe\'s\ Diner"#, &["add", "Joe's Diner"])]
    #[case(r#"add "say \"hi\"""#, &["add", r#"say "hi""#])]
    #[case(r#"add 'a\b'"#, &["add", r"a\b"])]
    fn test_split(#[case] line: &str, #[case] want: &[&str]) {
        assert_eq!(split(line).unwrap(), want)
    }

    #[rstest]
    #[case(r#"add "Lunch"#, '"')]
    #[case("add 'Lunch", '\'')]
    fn test_split_unterminated(#[case] line: &str, #[case] want: char) {
        assert_eq!(split(line), Err(SplitError(want)))
    }

    fn with_repl(f: impl FnOnce(&mut Repl)) {
        let (fs, _td) = cli::testing::tempfs();
        let config = base::Config::default();
        let session = base::Session::open(&fs, base::Kind::Expense).unwrap();
        let mut repl = Repl::new(session, &config, 60);
        f(&mut repl)
    }

    fn print(repl: &mut Repl, line: &str) -> String {
        match repl.exec(line) {
            Step::Print(s) => s,
            Step::Quit => panic!("unexpected quit on {:?}", line),
        }
    }

    #[test]
    fn test_add_rerenders() {
        with_repl(|repl| {
            let out = print(repl, r#"add "Big Lunch" Food 20 2024-10-25"#);
            assert!(out.contains(" 4  2024-10-25  Big Lunch"), "{}", out);
            assert!(out.contains("Movie Ticket"), "{}", out);
            assert_eq!(repl.session.book().ledger().len(), 4);
        })
    }

    #[test]
    fn test_add_invalid() {
        with_repl(|repl| {
            let out = print(repl, r#"add "" Food 20 2024-10-25"#);
            assert_eq!(out, "error: missing name\n");
            let out = print(repl, "add Lunch Food 1.2.3 2024-10-25");
            assert!(out.starts_with("error: invalid amount"), "{}", out);
            assert_eq!(repl.session.book().ledger().len(), 3);
        })
    }

    #[test]
    fn test_sort_toggles() {
        with_repl(|repl| {
            let out = print(repl, "sort amount");
            assert!(out.contains("Amount ^"), "{}", out);
            let first = out.lines().nth(2).unwrap();
            assert!(first.contains("Uber"), "{}", out);

            let out = print(repl, "sort 3");
            assert!(out.contains("Amount v"), "{}", out);
            let first = out.lines().nth(2).unwrap();
            assert!(first.contains("Movie Ticket"), "{}", out);

            let out = print(repl, "sort name");
            assert!(out.contains("Name ^"), "{}", out);
            assert!(out.contains("Amount ~"), "{}", out);
        })
    }

    #[test]
    fn test_search_filter_clear() {
        with_repl(|repl| {
            let out = print(repl, "search FOOD");
            assert!(out.contains("Lunch") && !out.contains("Uber"), "{}", out);

            let out = print(repl, "search");
            assert!(out.contains("Lunch") && out.contains("Uber"), "{}", out);

            let out = print(repl, "filter 2024-10-21: -x Enter");
            assert!(!out.contains("Lunch") && out.contains("Uber"), "{}", out);
            assert!(!out.contains("Movie"), "{}", out);

            let out = print(repl, "sum");
            assert!(out.contains("Transportation") && out.contains("100.0%"), "{}", out);
            assert!(!out.contains("Food"), "{}", out);

            let out = print(repl, "clear");
            assert!(out.contains("Lunch") && out.contains("Movie"), "{}", out);
        })
    }

    #[test]
    fn test_rm() {
        with_repl(|repl| {
            assert_eq!(print(repl, "rm 99"), "No expense with id 99.\n");
            let out = print(repl, "rm 1");
            assert!(!out.contains("Lunch"), "{}", out);
            assert_eq!(repl.session.book().ledger().len(), 2);
        })
    }

    #[test]
    fn test_edit() {
        with_repl(|repl| {
            let out = print(repl, "edit 2 --amount 9");
            let uber = out.lines().find(|l| l.contains("Uber")).unwrap();
            assert!(uber.ends_with("9.00"), "{}", out);
            assert_eq!(print(repl, "edit 9 --amount 9"), "No expense with id 9.\n");
        })
    }

    #[test]
    fn test_kind() {
        with_repl(|repl| {
            print(repl, "search lunch");
            assert_eq!(repl.prompt(), "expense> ");
            assert_eq!(print(repl, "kind income"), "No transactions.\n");
            assert_eq!(repl.prompt(), "income> ");
            let out = print(repl, "plot --bar");
            assert_eq!(out, "Total Incomes by Category (\u{20aa})\nNo transactions.\n");
            let out = print(repl, "kind expense");
            assert!(out.contains("Lunch") && !out.contains("Uber"), "{}", out);
        })
    }

    #[test]
    fn test_help_and_errors() {
        with_repl(|repl| {
            let out = print(repl, "help");
            assert!(out.contains("search"), "{}", out);
            assert!(out.contains("quit"), "{}", out);
            let out = print(repl, "frobnicate");
            assert!(out.starts_with("error:"), "{}", out);
            let out = print(repl, "sort id");
            assert!(out.starts_with("error:"), "{}", out);
            let out = print(repl, "add 'Lunch");
            assert_eq!(out, "error: unterminated ' quote\n");
        })
    }

    #[rstest]
    #[case("quit")]
    #[case("exit")]
    fn test_quit(#[case] line: &str) {
        with_repl(|repl| assert_eq!(repl.exec(line), Step::Quit))
    }
}
