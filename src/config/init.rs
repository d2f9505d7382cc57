use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::PathBuf;

/// Starter config written by `socialscore init`. Matches the built-in
/// defaults so a fresh run behaves identically with or without the file.
const STARTER_CONFIG: &str = "\
# socialscore configuration
#
# Command-line flags override these values.

# Number of users generated per batch.
users: 100

# Uncomment for reproducible batches.
# seed: 42

# Where the results artifact is written.
output: social_score_analysis.csv

# Category weights for the composite score. Must be non-negative and
# sum to 1.0. Fields within a category are always weighted equally.
scoring:
  engagement: 0.25
  content: 0.2
  trust: 0.2
  impact: 0.15
  monetization: 0.1
  governance: 0.1
";

/// Write a starter config file and return its path.
///
/// Uses the default config path unless `path` is given. Refuses to
/// overwrite an existing file unless `force` is set.
pub fn write_starter_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => {
            super::ensure_config_dir()?;
            super::get_config_path()
        }
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(STARTER_CONFIG.as_bytes())
        .context("Failed to write starter config")?;
    file.commit().context("Failed to save starter config")?;

    Ok(config_path)
}
