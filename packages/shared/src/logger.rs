//! Logging setup utilities for the Touchline binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose log output is enabled by the default filter.
const LOGGED_CRATES: [&str; 2] = ["touchline_server", "touchline_shared"];

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// Binary names may contain `-`, which is not valid in a tracing target, so
/// they are normalized the same way cargo normalizes crate names.
pub fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    let mut directives: Vec<String> = LOGGED_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, default_log_level))
        .collect();
    directives.push(format!(
        "{}={}",
        binary_name.replace('-', "_"),
        default_log_level
    ));
    directives.push(format!("tower_http={}", default_log_level));
    directives.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "touchline-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use touchline_shared::logger::setup_logger;
///
/// setup_logger("touchline-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_normalizes_binary_name() {
        // テスト項目: バイナリ名の `-` が `_` に変換されたフィルタが生成される
        // given (前提条件):
        let binary_name = "touchline-server";

        // when (操作):
        let directive = default_directive(binary_name, "debug");

        // then (期待する結果):
        assert!(directive.contains("touchline_server=debug"));
        assert!(directive.contains("touchline_shared=debug"));
        assert!(directive.contains("tower_http=debug"));
        assert!(!directive.contains("touchline-server"));
    }
}
