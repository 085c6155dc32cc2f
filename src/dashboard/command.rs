use crate::Result;
use crate::catalog::{Region, TitleKind};
use crate::views::ViewKind;
use core::ops::RangeInclusive;
use core::str::FromStr;
use ohno::{IntoAppError, app_err, bail};
use std::collections::BTreeSet;

/// Choice made for a multi-select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// Every available option.
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord + Clone> Selection<T> {
    /// Resolve the selection against the available options.
    #[must_use]
    pub fn resolve(self, options: &BTreeSet<T>) -> BTreeSet<T> {
        match self {
            Self::All => options.clone(),
            Self::Only(chosen) => chosen,
        }
    }
}

/// One line of input to a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Help,
    Controls,
    Summary,
    Sample(Option<usize>),
    Show,
    View(ViewKind),
    Years(RangeInclusive<i32>),
    Types(Selection<TitleKind>),
    Regions(Selection<Region>),
    Reset,
    Quit,
}

/// Help text listing every session command.
pub const SESSION_HELP: &str = "\
Commands:
  help                      Show this help
  controls                  Show the current control values and their options
  summary                   Show the overview metrics
  sample [n]                Show the first n filtered titles
  show                      Show every view
  view <id|name>            Show one view, e.g. `view 5` or `view top_10_countries`
  years <lo> <hi>           Select an inclusive year range
  types <all|none|a,b,..>   Select content types
  regions <all|none|a,b,..> Select regions
  reset                     Restore the default controls
  quit                      End the session";

impl FromStr for SessionCommand {
    type Err = ohno::AppError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "controls" => Self::Controls,
            "summary" => Self::Summary,
            "sample" if rest.is_empty() => Self::Sample(None),
            "sample" => Self::Sample(Some(
                rest.parse::<usize>().into_app_err_with(|| format!("invalid sample size '{rest}'"))?,
            )),
            "show" => Self::Show,
            "view" => Self::View(ViewKind::find(rest).ok_or_else(|| app_err!("unknown view '{rest}'"))?),
            "years" => {
                let bounds: Vec<&str> = rest.split_whitespace().collect();
                match bounds.as_slice() {
                    [single] => Self::Years(parse_year_range(single)?),
                    [lo, hi] => Self::Years(parse_year(lo)?..=parse_year(hi)?),
                    _ => bail!("usage: years <lo> <hi>"),
                }
            }
            "types" => Self::Types(parse_selection(rest, |name| Ok(TitleKind::from(name)))?),
            "regions" => Self::Regions(parse_selection(rest, parse_region)?),
            "reset" => Self::Reset,
            "quit" | "exit" => Self::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command '{other}', type `help` for a list of commands"),
        };

        Ok(command)
    }
}

/// Parse a year range written as `lo-hi`, or a single year.
pub fn parse_year_range(text: &str) -> Result<RangeInclusive<i32>> {
    let text = text.trim();
    match text.split_once('-') {
        Some((lo, hi)) => Ok(parse_year(lo)?..=parse_year(hi)?),
        None => {
            let year = parse_year(text)?;
            Ok(year..=year)
        }
    }
}

fn parse_year(text: &str) -> Result<i32> {
    let text = text.trim();
    text.parse::<i32>().into_app_err_with(|| format!("invalid year '{text}'"))
}

/// Parse a region by its display name, such as `North America`.
pub fn parse_region(name: &str) -> Result<Region> {
    Region::from_str(name.trim()).into_app_err_with(|| format!("unknown region '{name}'"))
}

/// Parse `all`, `none`, or a comma-separated list of names.
pub fn parse_selection<T: Ord>(text: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Selection<T>> {
    match text.trim() {
        "" => bail!("expected `all`, `none`, or a comma-separated list"),
        "all" => Ok(Selection::All),
        "none" => Ok(Selection::Only(BTreeSet::new())),
        list => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(parse)
            .collect::<Result<BTreeSet<T>>>()
            .map(Selection::Only),
    }
}
