//! Init command - write a default castgraph.toml

use anyhow::{Context, Result};
use castgraph::config::CONFIG_FILE_NAME;
use console::style;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# castgraph configuration

[input]
# First line of the cast table is a header
skip_header = true
delimiter = ","

[fame]
# A row is a lead when its character type contains this
lead_marker = "Lead"
# A lead is female when its gender contains this
female_marker = "F"
# Share of female leads needed to pass (inclusive)
threshold = 0.5

[output]
report_file = "BechdelTesting.txt"
# tgf_name = "castGender"
"#;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
