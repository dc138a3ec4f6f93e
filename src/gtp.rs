//! Line-oriented text front end modelled on the Go Text Protocol (GTP v2).
//!
//! This is the presentation side of the game: it turns text commands into
//! calls on [`Game`] and prints the resulting state. Any GTP-speaking board
//! GUI can drive two human players through it.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a `size`x`size` board
//! - `clear_board` - Start a new game on the current board
//! - `play <color> <vertex|pass>` - Play for the color on turn
//! - `showboard` - Print the board and prisoner counts
//! - `captures <color>` - Prisoners taken by `color`
//! - `winner` - `black`, `white` or `none`
//!
//! ## Example
//!
//! ```ignore
//! use atari_go::gtp::GtpEngine;
//! let mut engine = GtpEngine::new(Default::default())?;
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Color, parse_vertex};
use crate::config::GameConfig;
use crate::constants::{MAX_VERTEX_SIZE, MIN_SIZE};
use crate::error::GameError;
use crate::game::{Game, MoveStatus};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
    "winner",
];

pub struct GtpEngine {
    game: Game,
}

impl GtpEngine {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        if config.size > MAX_VERTEX_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "text protocol supports boards up to {MAX_VERTEX_SIZE} (got {})",
                config.size
            )));
        }
        Ok(Self {
            game: Game::new(config)?,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!(command = %command, ?args, "command");

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(command = %command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (MIN_SIZE..=MAX_VERTEX_SIZE).contains(&size) => {
                        match self.game.resize(size) {
                            Ok(()) => (true, String::new()),
                            Err(e) => (false, e.to_string()),
                        }
                    }
                    Ok(size) => (
                        false,
                        format!("size must be {MIN_SIZE} to {MAX_VERTEX_SIZE} (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game.new_game();
                (true, String::new())
            }

            "play" => self.play(args),

            "showboard" => {
                let prisoners = self.game.prisoners();
                let status = match self.game.winner() {
                    Some(winner) => format!("{winner} wins"),
                    None => match self.game.to_move() {
                        Some(c) => format!("{c} to play"),
                        None => String::new(),
                    },
                };
                (
                    true,
                    format!(
                        "\n{}\nblack captures: {}\nwhite captures: {}\n{status}",
                        self.game.board().render_labelled(),
                        prisoners.get(Color::Black),
                        prisoners.get(Color::White),
                    ),
                )
            }

            "captures" => {
                let Some(color) = args.first().and_then(|s| Color::parse(s)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.game.prisoners().get(color).to_string())
            }

            "winner" => match self.game.winner() {
                Some(c) => (true, c.to_string()),
                None => (true, "none".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn play(&mut self, args: &[&str]) -> (bool, String) {
        if args.len() < 2 {
            return (false, "missing arguments".to_string());
        }
        let Some(color) = Color::parse(args[0]) else {
            return (false, "invalid color".to_string());
        };
        let Some(to_move) = self.game.to_move() else {
            return (false, GameError::AlreadyOver.to_string());
        };
        if color != to_move {
            return (false, format!("it is {to_move}'s turn"));
        }

        if args[1].eq_ignore_ascii_case("pass") {
            return match self.game.pass_turn() {
                Ok(_) => (true, String::new()),
                Err(e) => (false, e.to_string()),
            };
        }

        let Some(p) = parse_vertex(args[1], self.game.board().size()) else {
            return (false, format!("invalid vertex: {}", args[1]));
        };
        match self.game.apply_move(p) {
            Ok(report) => match report.status {
                MoveStatus::Winner(winner) => (true, format!("{winner} wins")),
                MoveStatus::Continue(_) => (true, String::new()),
            },
            Err(e) => (false, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: usize) -> GtpEngine {
        GtpEngine::new(GameConfig::default().with_size(size)).unwrap()
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_protocol_version() {
        let mut engine = engine(9);
        let (success, response) = engine.execute("protocol_version", &[]);
        assert!(success);
        assert_eq!(response, "2");
    }

    #[test]
    fn test_known_command() {
        let mut engine = engine(9);

        let (success, response) = engine.execute("known_command", &["showboard"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut engine = engine(9);

        let (success, _) = engine.execute("boardsize", &["13"]);
        assert!(success);
        assert_eq!(engine.game().board().size(), 13);

        let (success, _) = engine.execute("boardsize", &["1"]);
        assert!(!success);
        let (success, _) = engine.execute("boardsize", &["26"]);
        assert!(!success);
        assert_eq!(engine.game().board().size(), 13);
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(GtpEngine::new(GameConfig::default().with_size(26)).is_err());
    }

    #[test]
    fn test_play_enforces_turn() {
        let mut engine = engine(9);
        let (success, _) = engine.execute("play", &["white", "D4"]);
        assert!(!success);
        let (success, _) = engine.execute("play", &["black", "D4"]);
        assert!(success);
        let (success, response) = engine.execute("play", &["white", "D4"]);
        assert!(!success);
        assert!(response.contains("occupied"), "got '{response}'");
    }

    #[test]
    fn test_play_pass_and_clear() {
        let mut engine = engine(9);
        let (success, _) = engine.execute("play", &["b", "pass"]);
        assert!(success);
        assert_eq!(engine.game().to_move(), Some(Color::White));

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.game().move_number(), 0);
    }

    #[test]
    fn test_capture_reports_winner() {
        let mut engine = engine(5);
        for (color, vertex) in [("b", "A5"), ("w", "B5"), ("b", "E1"), ("w", "A4")] {
            engine.execute("play", &[color, vertex]);
        }
        assert_eq!(engine.execute("captures", &["white"]), (true, "1".to_string()));
        assert_eq!(engine.execute("winner", &[]), (true, "white".to_string()));
        let (success, response) = engine.execute("play", &["b", "C3"]);
        assert!(!success);
        assert_eq!(response, "game is over");
    }

    #[test]
    fn test_serve_echoes_ids() {
        let mut engine = engine(9);
        let input = b"1 name\n# comment\n\n2 play black J9\n3 quit\n4 name\n";
        let mut output = Vec::new();
        engine.serve(&input[..], &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "=1 atari-go\n\n=2 \n\n=3 \n\n");
    }
}
