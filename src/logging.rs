//! Logging setup on top of tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Crates that log too much at `info`.
const NOISY_TARGETS: &[(&str, &str)] = &[
    ("actix_server", "warn"),
    ("actix_web", "warn"),
    ("hyper", "warn"),
    ("hyper_util", "warn"),
    ("reqwest", "warn"),
];

/// Build the filter from a base level (or full directive string) plus noisy-crate overrides.
pub fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in NOISY_TARGETS {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::trace!("Logging initialized: level={}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter() {
        assert!(build_env_filter("info").is_ok());
        assert!(build_env_filter("debug,drive_audio=trace").is_ok());
    }

    #[test]
    fn test_invalid_filter() {
        assert!(build_env_filter("info,drive_audio=notalevel").is_err());
    }
}
