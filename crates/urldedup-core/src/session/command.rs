//! Line-oriented command language for interactive sessions.

use crate::render::ViewMode;

use super::SessionError;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  <text>            add a line of pasted text (same as `add <text>`)
  add <text>        append text to the input
  paste             append clipboard text to the input
  clear             discard the input
  submit            normalize the input into a fresh list
  toggle <n>        flip the used mark of row n
  view table|text   switch the view
  show              print the list in the current view
  copy              copy the list to the clipboard
  status            print session state
  help              print this help
  quit              leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Paste,
    Clear,
    Submit,
    /// 1-based row number, as shown in the table view.
    Toggle(usize),
    View(ViewMode),
    Show,
    Copy,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines give `Ok(None)`.
    ///
    /// A line whose first word is not a command keyword is taken as pasted
    /// text, so URLs can be entered directly. Keywords without arguments only
    /// count when they stand alone: `show https://a.com` is pasted text.
    pub fn parse(line: &str) -> Result<Option<Command>, SessionError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };

        let cmd = match (keyword, rest.is_empty()) {
            ("add", true) => return Err(bad("add needs some text")),
            ("add", false) => Command::Add(rest.to_string()),
            ("toggle", _) => Command::Toggle(parse_row(rest)?),
            ("view", _) => {
                Command::View(rest.parse::<ViewMode>().map_err(SessionError::BadCommand)?)
            }
            ("paste", true) => Command::Paste,
            ("clear", true) => Command::Clear,
            ("submit", true) => Command::Submit,
            ("show", true) => Command::Show,
            ("copy", true) => Command::Copy,
            ("status", true) => Command::Status,
            ("help" | "?", true) => Command::Help,
            ("quit" | "exit", true) => Command::Quit,
            _ => Command::Add(line.to_string()),
        };
        Ok(Some(cmd))
    }
}

fn parse_row(arg: &str) -> Result<usize, SessionError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(bad(&format!("toggle expects a row number >= 1, got '{arg}'"))),
    }
}

fn bad(msg: &str) -> SessionError {
    SessionError::BadCommand(msg.to_string())
}
