use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

use better_term::{flush_styles, Color};
use chrono::Local;

static THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Success = 6,
}

impl LogLevel {
    /// Unknown names fall back to INFO.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "TRACE" => LogLevel::Trace,
            "DEBUG" => LogLevel::Debug,
            "WARN" => LogLevel::Warn,
            "ERROR" => LogLevel::Error,
            "FATAL" => LogLevel::Fatal,
            "SUCCESS" => LogLevel::Success,
            _ => LogLevel::Info,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            6 => LogLevel::Success,
            _ => LogLevel::Info,
        }
    }

    // success messages are as important as info messages
    fn severity(self) -> u8 {
        match self {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info | LogLevel::Success => 2,
            LogLevel::Warn => 3,
            LogLevel::Error => 4,
            LogLevel::Fatal => 5,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "📑 TRACE  ",
            LogLevel::Debug => "🔹 DEBUG  ",
            LogLevel::Info => "🆗 INFO   ",
            LogLevel::Warn => "⚠️  WARN   ",
            LogLevel::Error => "💢 ERROR  ",
            LogLevel::Fatal => "💀 FATAL  ",
            LogLevel::Success => "✅ SUCCESS",
        }
    }

    fn color(self) -> Color {
        match self {
            LogLevel::Trace => Color::BrightBlack,
            LogLevel::Debug => Color::Cyan,
            LogLevel::Info => Color::Blue,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
            LogLevel::Fatal => Color::Purple,
            LogLevel::Success => Color::Green,
        }
    }

    pub fn passes(self, threshold: LogLevel) -> bool {
        self.severity() >= threshold.severity()
    }
}

pub fn set_level(level: LogLevel) {
    THRESHOLD.store(level as u8, Ordering::Relaxed);
}

pub fn level() -> LogLevel {
    LogLevel::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// The instance tag printed for a module path, e.g. `wichtel_bot::environment` -> `ENVIRONMENT`.
pub fn instance_name(module_path: &str) -> String {
    match module_path.rsplit_once("::") {
        Some((_, last)) => last.to_uppercase(),
        None => "MAIN".to_string(),
    }
}

pub fn emit(level: LogLevel, module_path: &str, args: Arguments<'_>) {
    if !level.passes(self::level()) {
        return;
    }
    let timestamp = Local::now().format("[%Y-%m-%d %H:%M:%S]");
    print!("{} {}{}", timestamp, level.color(), level.label());
    flush_styles();
    println!(" : [{}] {}", instance_name(module_path), args);
}

#[macro_export]
macro_rules! peek {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Trace, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! psst {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Debug, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Warn, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Error, module_path!(), format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Success, module_path!(), format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(LogLevel::parse("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::parse("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse(" WARN "), LogLevel::Warn);
        assert_eq!(LogLevel::parse("success"), LogLevel::Success);
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(LogLevel::parse("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::parse(""), LogLevel::Info);
    }

    #[test]
    fn threshold_drops_lower_levels() {
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
        assert!(LogLevel::Warn.passes(LogLevel::Info));
        assert!(LogLevel::Success.passes(LogLevel::Info));
        assert!(!LogLevel::Success.passes(LogLevel::Warn));
        assert!(LogLevel::Trace.passes(LogLevel::Trace));
    }

    #[test]
    fn instance_is_last_module_segment() {
        assert_eq!(instance_name("wichtel_bot"), "MAIN");
        assert_eq!(instance_name("wichtel_bot::environment"), "ENVIRONMENT");
        assert_eq!(
            instance_name("wichtel_bot::discord_helpers::multipage_embed::navigation"),
            "NAVIGATION"
        );
    }
}
