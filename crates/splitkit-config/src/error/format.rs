//! Error formatting with colors and context

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Format error with colors and context
pub struct ErrorFormatter<'a> {
    error: &'a ConfigError,
    use_colors: bool,
}

impl<'a> ErrorFormatter<'a> {
    /// Create a new error formatter, colouring only when stderr is a terminal
    pub fn new(error: &'a ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    /// Create a formatter that never emits escape codes
    pub fn plain(error: &'a ConfigError) -> Self {
        Self {
            error,
            use_colors: false,
        }
    }

    /// Format the error with colors and context
    pub fn format(&self) -> String {
        if self.use_colors {
            self.format_colored()
        } else {
            self.format_plain()
        }
    }

    fn format_colored(&self) -> String {
        let mark = "✗".red().bold();
        match self.error {
            ConfigError::InvalidEnum {
                field,
                value,
                options,
                hint,
            } => {
                let value_str = format!("'{}'", value);
                format!(
                    "{} Invalid value {} for {}\n  {}: {}\n  {}: {}",
                    mark,
                    value_str.yellow(),
                    field.cyan(),
                    "Valid options".bold(),
                    options,
                    "Hint".bold(),
                    hint.green()
                )
            }
            ConfigError::InvalidInteger { field, value, min } => {
                let value_str = value.to_string();
                format!(
                    "{} {} must be > {}, got {}",
                    mark,
                    field.cyan(),
                    min.green(),
                    value_str.red()
                )
            }
            ConfigError::ValidationError { field, message } => {
                format!("{} {}: {}", mark, field.cyan(), message)
            }
            ConfigError::FileNotFound { path } => {
                let path_str = path.display().to_string();
                format!(
                    "{} Configuration file not found: {}",
                    mark,
                    path_str.yellow()
                )
            }
            _ => self.format_plain(),
        }
    }

    fn format_plain(&self) -> String {
        self.error.to_string()
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
