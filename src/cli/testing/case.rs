use crate::cli;

/// One command line and what it should produce.
pub struct Invocation<'a> {
    /// Command line arguments, starting with an ignored binary name.
    pub args: &'a [&'a str],
    /// Matched against the command's result. Argument parsing failures are
    /// reported as errors too.
    pub res: cli::testing::ResultMatcher<'a>,
}

impl Invocation<'_> {
    fn run(&self, fs: &crate::base::Fs) {
        let res = <cli::Root as clap::Parser>::try_parse_from(self.args)
            .map_err(anyhow::Error::from)
            .and_then(|root| root.run(fs));
        self.res.assert_matches(res);
    }
}

/// Invocations run in order against one repo, which they may change.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Repo files before the first invocation.
    pub initial_state: cli::testing::StrState<'a>,

    /// Repo files after the last invocation.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);
        for inv in self.invocations {
            inv.run(&fs);
        }

        let got = cli::testing::State::from_fs(&fs);
        if got != self.final_state {
            text_diff::print_diff(
                format!("{:#?}", self.final_state).as_str(),
                format!("{:#?}", got).as_str(),
                "\n",
            );
            panic!("repo state differs between want (red) and got (green), see above");
        }
    }
}

/// Invocations run in order against one repo, which must end up unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Expands `(name, case)` pairs into `#[test]` functions, inside a `cmd_cases`
/// submodule of the caller.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_cases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
