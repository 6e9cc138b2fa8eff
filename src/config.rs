use std::path::PathBuf;

use clap::Parser;

use crate::analysis;

/// NBA shooting analysis report generator
#[derive(Parser, Debug, Clone)]
#[command(name = "hoopstats", version, about)]
pub struct Config {
    /// Directory containing the input data files
    #[arg(long, env = "HOOPSTATS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory for rendered charts and JSON summaries
    #[arg(long, env = "HOOPSTATS_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Run only the named analysis (default: all five)
    #[arg(long, env = "HOOPSTATS_ONLY")]
    pub only: Option<String>,

    /// Minimum free-throw attempts for a player to count in the league
    /// free-throw analysis
    #[arg(long, env = "MIN_FT_ATTEMPTS", default_value = "20")]
    pub min_ft_attempts: f64,

    /// Minimum three-point attempts for a player to count in the league
    /// three-point accuracy analysis
    #[arg(long, env = "MIN_THREE_PT_ATTEMPTS", default_value = "50")]
    pub min_three_pt_attempts: f64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "data directory '{}' does not exist",
                self.data_dir.display()
            );
        }
        if self.min_ft_attempts < 0.0 {
            anyhow::bail!("min_ft_attempts must be non-negative");
        }
        if self.min_three_pt_attempts < 0.0 {
            anyhow::bail!("min_three_pt_attempts must be non-negative");
        }
        if let Some(only) = &self.only {
            let names = analysis::names();
            if !names.contains(&only.as_str()) {
                anyhow::bail!(
                    "unknown analysis '{}'. Available: {}",
                    only,
                    names.join(", ")
                );
            }
        }
        Ok(())
    }
}
