//! Command parsing for the line-based session: short and long forms.

use trislide::Direction;

/// Action from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Slide { row: usize, direction: Direction },
    Hint,
    Show,
    Help,
    Quit,
    None,
    Invalid(String),
}

pub const HELP: &str = "\
commands:
  l <row> | left <row>     slide a row left
  r <row> | right <row>    slide a row right
  hint                     suggest a slide that makes a match
  show                     print the board again
  help                     this text
  q | quit                 leave";

/// Map one line of input to an action. Blank lines map to [`Action::None`].
pub fn parse_command(line: &str) -> Action {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Action::None;
    };
    let head = head.to_ascii_lowercase();
    match head.as_str() {
        "q" | "quit" | "exit" => Action::Quit,
        "h" | "help" | "?" => Action::Help,
        "hint" => Action::Hint,
        "s" | "show" => Action::Show,
        _ => match head.parse::<Direction>() {
            Ok(direction) => match words.next().map(str::parse::<usize>) {
                Some(Ok(row)) => Action::Slide { row, direction },
                Some(Err(_)) | None => Action::Invalid(format!("'{head}' needs a row number")),
            },
            Err(_) => Action::Invalid(format!("unknown command '{head}' (try 'help')")),
        },
    }
}
