#![allow(dead_code)]

use anyhow::Result;
use bench_plot::tasks::measurements::{Measurement, write_csv};
use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub fn scenario_rows() -> Vec<Measurement> {
    vec![
        Measurement::new("+", "10000", 8, 120),
        Measurement::new("+", "100000", 8, 300),
        Measurement::new("*", "10000", 8, 90),
    ]
}

pub fn write_data_file(dir: &Path, rows: &[Measurement]) -> Result<PathBuf> {
    let path = dir.join("data.csv");
    write_csv(&path, rows)?;
    Ok(path)
}

pub fn has_system_fonts() -> bool {
    ["/usr/share/fonts", "/usr/local/share/fonts", "/System/Library/Fonts"]
        .iter()
        .any(|dir| Path::new(dir).is_dir())
}

pub fn run_bench_plot(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_bench-plot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}
