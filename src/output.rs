//! # Human-Readable Output
//!
//! Helpers for the status lines printed by `config-pack validate` and
//! `config-pack tree`. Packed documents themselves are never decorated.
//!
//! Colour and emoji markers follow the usual conventions:
//! - `--color=never|always|auto` on the command line
//! - `NO_COLOR` disables colour when set (see https://no-color.org/)
//! - `CLICOLOR=0` disables colour, `CLICOLOR_FORCE=1` forces it
//! - `TERM=dumb` disables colour

use std::env;

use console::style;

/// Whether status output may use colour and emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

/// The kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scan,
    Ok,
    Info,
    Error,
}

impl OutputConfig {
    /// Resolve the `--color` flag against the environment.
    ///
    /// `always` and `never` win outright; anything else means auto-detect.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// The leading marker for a status line.
    pub fn marker(&self, status: Status) -> &'static str {
        match (self.use_color, status) {
            (true, Status::Scan) => "🔍",
            (true, Status::Ok) => "✅",
            (true, Status::Info) => "📊",
            (true, Status::Error) => "❌",
            (false, Status::Scan) => "[SCAN]",
            (false, Status::Ok) => "[OK]",
            (false, Status::Info) => "[INFO]",
            (false, Status::Error) => "[ERR]",
        }
    }

    /// Format a complete status line.
    pub fn line(&self, status: Status, message: &str) -> String {
        let marker = self.marker(status);
        if !self.use_color {
            return format!("{} {}", marker, message);
        }
        let message = match status {
            Status::Ok => style(message).green().to_string(),
            Status::Error => style(message).red().to_string(),
            Status::Scan | Status::Info => message.to_string(),
        };
        format!("{} {}", marker, message)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
