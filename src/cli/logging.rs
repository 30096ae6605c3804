//! Log filter selection

/// Level used when neither `RUST_LOG` nor `--verbose` is given
const DEFAULT_LEVEL: &str = "warn";

/// Level used with `--verbose`
const VERBOSE_LEVEL: &str = "debug";

/// Filter directives for the subscriber
///
/// A non-empty `RUST_LOG` is used as-is; otherwise `--verbose` picks the level.
pub fn log_directives(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => directives.to_string(),
        None if verbose => VERBOSE_LEVEL.to_string(),
        None => DEFAULT_LEVEL.to_string(),
    }
}
