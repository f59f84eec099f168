//! Console logging with colored module prefixes.
//!
//! ```ignore
//! log!("rewrite"; "{}", relative_path);
//! debug!("config"; "loaded {} pages", count);
//! ```

use owo_colors::OwoColorize;
use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message only when --verbose is enabled
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write one prefixed line to stdout
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix
            .if_supports_color(owo_colors::Stream::Stdout, |p| p.bright_red().bold().to_string())
            .to_string(),
        "skip" | "warning" => prefix
            .if_supports_color(owo_colors::Stream::Stdout, |p| p.bright_yellow().bold().to_string())
            .to_string(),
        "rewrite" | "normalize" => prefix
            .if_supports_color(owo_colors::Stream::Stdout, |p| p.bright_green().bold().to_string())
            .to_string(),
        _ => prefix
            .if_supports_color(owo_colors::Stream::Stdout, |p| p.bright_blue().bold().to_string())
            .to_string(),
    }
}
