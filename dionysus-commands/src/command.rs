/// Bot commands, independent of how the message arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CharacterInfo(Option<String>), // !acd <name>
    RandomVideo(Option<String>),   // !rv <channel>
    Help,                          // !commands
    Tarot,                         // !tarot
    Unknown(String),
}

pub const CHARACTER_INFO: &[&str] = &["acd", "animecrossoverdefense", "character-info"];
pub const RANDOM_VIDEO: &[&str] = &["rv", "randomvideo", "randomvid", "rvid", "random-video"];
pub const HELP: &[&str] = &["commands", "cmds", "cmd", "help"];
pub const TAROT: &[&str] = &["tarot", "tarot-draw"];

/// Parse `input` (`<prefix><verb> [argument]`). Verbs are matched
/// case-sensitively, like the chat framework does.
///
/// ```
/// use dionysus_commands::{parse_command, Command};
///
/// assert_eq!(
///     parse_command("!rv  Some Channel ", "!"),
///     Command::RandomVideo(Some("Some Channel".into()))
/// );
/// assert_eq!(parse_command("!tarot", "!"), Command::Tarot);
/// ```
pub fn parse_command(input: &str, prefix: &str) -> Command {
    let trimmed = input.trim();
    let Some(body) = trimmed.strip_prefix(prefix) else {
        return Command::Unknown(trimmed.to_string());
    };
    let mut parts = body.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or_default();
    let rest = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if CHARACTER_INFO.contains(&verb) {
        Command::CharacterInfo(rest)
    } else if RANDOM_VIDEO.contains(&verb) {
        Command::RandomVideo(rest)
    } else if HELP.contains(&verb) {
        Command::Help
    } else if TAROT.contains(&verb) {
        Command::Tarot
    } else {
        Command::Unknown(trimmed.to_string())
    }
}
