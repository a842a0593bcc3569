use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs::File, io, path::Path};

/// One row of the benchmark report: the operation symbol, the number of
/// experiments the timing was averaged over, the operand size in bits, and
/// the average time in nanoseconds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Measurement {
    pub op: String,
    pub num_experiments: String,
    pub bit_length: u64,
    pub time_ns: u64,
}

impl Measurement {
    pub fn new(op: &str, num_experiments: &str, bit_length: u64, time_ns: u64) -> Self {
        Self {
            op: op.to_string(),
            num_experiments: num_experiments.to_string(),
            bit_length,
            time_ns,
        }
    }
}

/// All measurements in a report, in file order.
#[derive(Debug, Default)]
pub struct Measurements {
    rows: Vec<Measurement>,
}

impl From<Vec<Measurement>> for Measurements {
    fn from(rows: Vec<Measurement>) -> Self {
        Self { rows }
    }
}

impl Measurements {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            let reason = format!(
                "error opening data file (path={}, error={e:?})",
                path.display()
            );
            error!("{reason}");
            anyhow::anyhow!(reason)
        })?;

        let measurements = Self::from_reader(file)
            .with_context(|| format!("failed to read measurements from {}", path.display()))?;
        debug!(
            "read {} measurements from {}",
            measurements.len(),
            path.display()
        );

        Ok(measurements)
    }

    /// Parse header-less, comma-separated rows. Any row with a missing field
    /// or a non-numeric bit length or time aborts the read.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let record: Measurement = result.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                let reason = format!("error parsing measurement (line={line}, error={e})");
                error!("{reason}");
                anyhow::anyhow!(reason)
            })?;
            rows.push(record);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct operation symbols (first column).
    pub fn operations(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|row| row.op.as_str()).collect()
    }

    /// Distinct experiment-length tags (second column), in lexicographic
    /// order. Tags are compared as strings, so "10000" < "100000" < "2000".
    pub fn experiment_lengths(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .map(|row| row.num_experiments.as_str())
            .collect()
    }

    pub fn bit_lengths(&self) -> BTreeSet<u64> {
        self.rows.iter().map(|row| row.bit_length).collect()
    }

    /// (bit length, time) points for one (operation, experiment-length)
    /// group, in file order. Empty if the group has no rows.
    pub fn series(&self, op: &str, num_experiments: &str) -> Vec<(u64, u64)> {
        self.rows
            .iter()
            .filter(|row| row.op == op && row.num_experiments == num_experiments)
            .map(|row| (row.bit_length, row.time_ns))
            .collect()
    }
}

/// Write measurements in the same header-less layout `Measurements` reads.
pub fn write_csv(path: &Path, rows: &[Measurement]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
