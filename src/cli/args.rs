use std::path::PathBuf;

use chrono::NaiveDate;
use strsim::levenshtein;

use crate::errors::CashflowError;

pub(crate) const USAGE: &str = "Usage: cashflow_cli <command>\n\
     Commands:\n  \
     project [file] [--today YYYY-MM-DD] [--json]\n  \
     summary [file] [--today YYYY-MM-DD]\n  \
     validate <file>\n  \
     template [--months N]\n  \
     version\n  \
     help";

const COMMAND_NAMES: &[&str] = &["project", "summary", "validate", "template", "version", "help"];
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Project {
        file: Option<PathBuf>,
        today: Option<NaiveDate>,
        json: bool,
    },
    Summary {
        file: Option<PathBuf>,
        today: Option<NaiveDate>,
    },
    Validate {
        file: PathBuf,
    },
    Template {
        months: Option<u32>,
    },
    Version,
    Help,
}

pub fn parse(tokens: &[String]) -> Result<Command, CashflowError> {
    let Some((name, rest)) = tokens.split_first() else {
        return Err(usage(USAGE));
    };

    let command = name.to_lowercase();
    let mut flags = Flags::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut iter = rest.iter();
    while let Some(token) = iter.next() {
        match token.as_str() {
            "--json" => flags.json = true,
            "--today" => {
                let value = iter.next().ok_or_else(|| usage("`--today` needs a date"))?;
                flags.today = Some(parse_date(value)?);
            }
            "--months" => {
                let value = iter.next().ok_or_else(|| usage("`--months` needs a number"))?;
                let months = value
                    .parse::<u32>()
                    .map_err(|_| usage(format!("`{value}` is not a month count")))?;
                flags.months = Some(months);
            }
            flag if flag.starts_with("--") => {
                return Err(usage(format!("Unknown option `{flag}` for `{command}`")));
            }
            value => positional.push(value),
        }
    }

    let parsed = match command.as_str() {
        "project" => Command::Project {
            file: single_path(&command, &positional)?,
            today: flags.today.take(),
            json: std::mem::take(&mut flags.json),
        },
        "summary" => Command::Summary {
            file: single_path(&command, &positional)?,
            today: flags.today.take(),
        },
        "validate" => Command::Validate {
            file: single_path(&command, &positional)?
                .ok_or_else(|| usage("Usage: cashflow_cli validate <file>"))?,
        },
        "template" => {
            reject_positional(&command, &positional)?;
            Command::Template {
                months: flags.months.take(),
            }
        }
        "version" => {
            reject_positional(&command, &positional)?;
            Command::Version
        }
        "help" => Command::Help,
        _ => return Err(unknown_command(name)),
    };

    if let Some(flag) = flags.leftover() {
        return Err(usage(format!("`{flag}` does not apply to `{command}`")));
    }
    Ok(parsed)
}

/// Closest known command within a small edit distance.
pub fn suggest(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    COMMAND_NAMES
        .iter()
        .map(|name| (levenshtein(name, &input), *name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, name)| name)
}

#[derive(Default)]
struct Flags {
    json: bool,
    today: Option<NaiveDate>,
    months: Option<u32>,
}

impl Flags {
    fn leftover(&self) -> Option<&'static str> {
        if self.json {
            Some("--json")
        } else if self.today.is_some() {
            Some("--today")
        } else if self.months.is_some() {
            Some("--months")
        } else {
            None
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, CashflowError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| usage(format!("`{value}` is not a date in YYYY-MM-DD form")))
}

fn single_path(command: &str, positional: &[&str]) -> Result<Option<PathBuf>, CashflowError> {
    match positional {
        [] => Ok(None),
        [path] => Ok(Some(PathBuf::from(path))),
        [_, extra, ..] => Err(usage(format!("Unexpected argument `{extra}` for `{command}`"))),
    }
}

fn reject_positional(command: &str, positional: &[&str]) -> Result<(), CashflowError> {
    match positional.first() {
        Some(extra) => Err(usage(format!("Unexpected argument `{extra}` for `{command}`"))),
        None => Ok(()),
    }
}

fn unknown_command(input: &str) -> CashflowError {
    let mut message = format!("Unknown command `{input}`. Type `help` to see available commands.");
    if let Some(best) = suggest(input) {
        message.push_str(&format!(" Suggestion: `{best}`?"));
    }
    usage(message)
}

fn usage(message: impl Into<String>) -> CashflowError {
    CashflowError::Usage(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn project_accepts_file_date_and_json() {
        let command = parse(&tokens("project budget.json --today 2025-09-01 --json")).unwrap();
        assert_eq!(
            command,
            Command::Project {
                file: Some(PathBuf::from("budget.json")),
                today: NaiveDate::from_ymd_opt(2025, 9, 1),
                json: true,
            }
        );
    }

    #[test]
    fn file_is_optional_for_project_and_summary() {
        assert_eq!(
            parse(&tokens("summary")).unwrap(),
            Command::Summary {
                file: None,
                today: None
            }
        );
    }

    #[test]
    fn validate_requires_a_file() {
        assert!(matches!(
            parse(&tokens("validate")),
            Err(CashflowError::Usage(_))
        ));
    }

    #[test]
    fn flags_are_checked_per_command() {
        assert!(parse(&tokens("template --json")).is_err());
        assert!(parse(&tokens("project --months 3")).is_err());
        assert!(parse(&tokens("project --today 2025-13-01")).is_err());
        assert!(parse(&tokens("template --months six")).is_err());
        assert_eq!(
            parse(&tokens("template --months 3")).unwrap(),
            Command::Template { months: Some(3) }
        );
    }

    #[test]
    fn unknown_command_carries_suggestion() {
        match parse(&tokens("projct")) {
            Err(CashflowError::Usage(message)) => {
                assert!(message.contains("Unknown command `projct`"));
                assert!(message.contains("Suggestion: `project`?"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(suggest("SUMMRY"), Some("summary"));
        assert_eq!(suggest("xyzzyplugh"), None);
    }

    #[test]
    fn empty_command_line_returns_usage() {
        match parse(&[]) {
            Err(CashflowError::Usage(message)) => assert!(message.starts_with("Usage:")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
