use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    quiet: bool,
}

impl Logger {
    fn new(prefix: Option<String>, quiet: bool) -> Self {
        Self { prefix, quiet }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.quiet {
            return;
        }
        // stdout belongs to the terminal renderer
        eprintln!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, false));
}

/// Installs a logger that drops every message. Test modules call this so
/// engine logging stays out of test output.
pub fn init_quiet_logger() {
    LOGGER.get_or_init(|| Logger::new(None, true));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None, false);
        let line = logger.format_line("src/games/snake/game_state.rs", 42, "ate food");
        assert!(line.ends_with("[game_state.rs:42] ate food"));
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("Arcade".to_string()), false);
        let line = logger.format_line("C:\\src\\main.rs", 7, "started");
        assert!(line.contains("[Arcade][main.rs:7] started"));
    }

    #[test]
    fn test_quiet_logger_installed() {
        init_quiet_logger();
        let logger = LOGGER.get().expect("logger installed");
        assert!(logger.quiet);
        crate::log!("dropped");
    }
}
