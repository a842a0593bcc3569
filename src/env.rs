use anyhow::{Context, Result};
use std::{env, path::PathBuf};

pub struct Env {}

impl Env {
    pub const SYS_NAME: &'static str = "bench-plot";

    /// Benchmark runs write their measurements here, relative to the
    /// directory the tool is invoked from.
    pub const DATA_FILE_NAME: &'static str = "data.csv";

    pub fn proj_root() -> Result<PathBuf> {
        env::current_dir().context("failed to get current directory")
    }

    pub fn report_root() -> Result<PathBuf> {
        let mut path = Self::proj_root()?;
        path.push("report");
        Ok(path)
    }

    pub fn default_data_file() -> Result<PathBuf> {
        let mut path = Self::report_root()?;
        path.push(Self::DATA_FILE_NAME);
        Ok(path)
    }

    pub fn default_plots_dir() -> Result<PathBuf> {
        let mut path = Self::report_root()?;
        path.push("plots");
        Ok(path)
    }
}
