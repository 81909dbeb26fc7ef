use std::fmt;

use clap::{builder::PossibleValue, ArgMatches, ValueEnum};

/// LogLevel
///
/// Minimum level of messages that will be logged; `None` turns logging off
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

const LEVEL_NAMES: [&str; 6] = ["error", "warn", "info", "debug", "trace", "none"];

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(LEVEL_NAMES[*self as usize]))
    }
}

impl LogLevel {
    /// Verbosity as understood by stderrlog, or None if logging is off
    pub fn verbosity(&self) -> Option<usize> {
        match self {
            Self::None => None,
            l => Some(*l as usize),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", LEVEL_NAMES[*self as usize])
    }
}

/// Initialize logging from command line arguments
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .expect("Missing default log level");
    let ts = if m.get_flag("timestamp") {
        stderrlog::Timestamp::Second
    } else {
        stderrlog::Timestamp::Off
    };

    stderrlog::new()
        .quiet(level.verbosity().is_none())
        .verbosity(level.verbosity().unwrap_or(0))
        .timestamp(ts)
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogLevel::Error.verbosity(), Some(0));
        assert_eq!(LogLevel::Trace.verbosity(), Some(4));
        assert_eq!(LogLevel::None.verbosity(), None);
        assert_eq!(LogLevel::from_str("DEBUG", true), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }
}
