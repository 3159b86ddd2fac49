// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

/// How tick values are turned into labels.
#[derive(Clone, Default)]
pub enum TickFormat {
    /// The shortest decimal representation (`1000`, `0.5`, `72.5`).
    #[default]
    Plain,
    /// Thousands with a `k` suffix and optional prefix (`$1k`, `$0.5k`, `$100k`).
    Thousands {
        /// Text placed before the number, e.g. a currency sign.
        prefix: String,
    },
    /// Caller-provided formatter.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl TickFormat {
    /// Thousands format with the given prefix.
    pub fn thousands(prefix: impl Into<String>) -> Self {
        Self::Thousands {
            prefix: prefix.into(),
        }
    }

    /// Wraps a formatter callback.
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Formats a tick value.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Plain => format_number(value),
            Self::Thousands { prefix } => format!("{prefix}{}k", format_number(value / 1000.0)),
            Self::Custom(f) => f(value),
        }
    }
}

impl core::fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Plain => write!(f, "TickFormat::Plain"),
            Self::Thousands { prefix } => write!(f, "TickFormat::Thousands({prefix:?})"),
            Self::Custom(_) => write!(f, "TickFormat::Custom(..)"),
        }
    }
}

/// Formats `value` using the shortest representation that round-trips.
///
/// Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn plain_format_is_shortest_decimal() {
        let f = TickFormat::Plain;
        assert_eq!(f.format(1000.0), "1000");
        assert_eq!(f.format(72.5), "72.5");
        assert_eq!(f.format(0.1), "0.1");
        assert_eq!(f.format(-0.0), "0");
    }

    #[test]
    fn thousands_format_divides_and_prefixes() {
        let f = TickFormat::thousands("$");
        assert_eq!(f.format(1000.0), "$1k");
        assert_eq!(f.format(500.0), "$0.5k");
        assert_eq!(f.format(100_000.0), "$100k");
    }

    #[test]
    fn custom_format_is_called() {
        let f = TickFormat::custom(|v| {
            if v == 1918.0 {
                "End of World War I".to_string()
            } else {
                format_number(v)
            }
        });
        assert_eq!(f.format(1918.0), "End of World War I");
        assert_eq!(f.format(2000.0), "2000");
    }
}
