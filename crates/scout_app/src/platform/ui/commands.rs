use scout_core::{LevelFilter, SourceFilter};

pub const HELP: &str = "\
Commands:
  search <query>        search projects, papers and datasets
  source <filter>       all | github | paper | dataset
  level <filter>        all | easy | intermediate | advanced
  fav <n>               toggle favorite on search result n
  recommend             recommendations for your profile email
  rfav <n>              toggle favorite on recommendation n
  saved                 list saved favorites
  unsave <id>           remove a saved favorite by id
  clear                 remove every saved favorite
  stats                 analytics over saved favorites
  email <address>       set the profile email
  help                  show this help
  quit                  leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Source(SourceFilter),
    Level(LevelFilter),
    Favorite(usize),
    Recommend,
    FavoriteRecommendation(usize),
    Saved,
    Unsave(String),
    Clear,
    Stats,
    Email(String),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line. `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            // An empty query is passed on; the state machine owns that rejection.
            "search" | "s" => ShellCommand::Search(rest.to_string()),
            "source" => ShellCommand::Source(
                SourceFilter::parse(rest).ok_or_else(|| format!("unknown source {rest:?}"))?,
            ),
            "level" => ShellCommand::Level(
                LevelFilter::parse(rest).ok_or_else(|| format!("unknown level {rest:?}"))?,
            ),
            "fav" => ShellCommand::Favorite(parse_row(rest)?),
            "recommend" | "rec" => ShellCommand::Recommend,
            "rfav" => ShellCommand::FavoriteRecommendation(parse_row(rest)?),
            "saved" => ShellCommand::Saved,
            "unsave" => {
                if rest.is_empty() {
                    return Err("usage: unsave <id>".to_string());
                }
                ShellCommand::Unsave(rest.to_string())
            }
            "clear" => ShellCommand::Clear,
            "stats" => ShellCommand::Stats,
            "email" => ShellCommand::Email(rest.to_string()),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("unknown command {other:?}; type help")),
        };
        Ok(Some(command))
    }
}

/// Rows are numbered from 1 on screen.
fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(format!("expected a row number, got {raw:?}")),
    }
}
