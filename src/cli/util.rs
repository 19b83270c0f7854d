use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// If `fullmatch` is false, ensures all categories starts with and ends with
/// `*`, except for empty categories which are left alone. If `fullmatch` is
/// true, does not modify categories.
pub fn preprocess_categories<'a>(
    categories: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return categories.into();
    }
    categories
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Parses a column name or zero-based column index.
pub fn parse_column(s: &str) -> Result<base::Column, String> {
    base::Column::parse(s).ok_or_else(|| {
        format!(
            "expected one of {} or an index from 0 to {}",
            <base::Column as strum::VariantNames>::VARIANTS.join(", "),
            base::Column::ALL.len() - 1
        )
    })
}

/// Width of the attached terminal, or zero if there is none.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Table of the session's visible transactions.
pub fn table(session: &base::Session, config: &base::Config) -> base::table::Config {
    let book = session.book();
    base::table::Config {
        charset: charset_from_config(config),
        rows: book.frame().rows,
        sorted: book.sort_state().active(),
    }
}

/// Table holding just the given transaction.
pub fn single_row_table(tx: &base::Transaction, config: &base::Config) -> base::table::Config {
    base::table::Config {
        charset: charset_from_config(config),
        rows: vec![tx.into()],
        sorted: None,
    }
}

/// Prefixes `output` with a notice if the active ledger could not be read.
pub fn with_damage_notice(session: &base::Session, output: cli::Output) -> cli::Output {
    match session.book().damaged() {
        Some(err) => cli::Output::Noticed {
            notice: format!(
                "{}; showing no {}",
                anyhow::Chain::new(err)
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(": "),
                session.kind().plural().to_lowercase()
            ),
            output: Box::new(output),
        },
        None => output,
    }
}

/// Notice for an edit or removal that named an unknown id.
pub fn not_found(kind: base::Kind, id: base::Id) -> cli::Output {
    cli::Output::Str(format!("No {} with id {}.", kind, id))
}
