use crate::{env::Env, tasks::measurements::Measurements};
use log::info;

#[derive(Debug, PartialEq)]
pub struct GroupSummary {
    pub op: String,
    pub num_experiments: String,
    pub num_points: usize,
    pub mean_time_ns: f64,
}

/// Per (operation, experiment-length) statistics, in the same order the
/// groups are plotted. Groups with no measurements are left out.
pub fn summarize(measurements: &Measurements) -> Vec<GroupSummary> {
    let experiment_lengths = measurements.experiment_lengths();

    let mut summaries = Vec::new();
    for op in measurements.operations() {
        for tag in &experiment_lengths {
            let series = measurements.series(op, tag);
            if series.is_empty() {
                continue;
            }

            let total_time: u128 = series.iter().map(|(_, time_ns)| *time_ns as u128).sum();
            summaries.push(GroupSummary {
                op: op.to_string(),
                num_experiments: tag.to_string(),
                num_points: series.len(),
                mean_time_ns: total_time as f64 / series.len() as f64,
            });
        }
    }

    summaries
}

pub fn log_summary(measurements: &Measurements) {
    let join = |items: Vec<String>| items.join(", ");

    info!(
        "{}: read {} measurements",
        Env::SYS_NAME,
        measurements.len()
    );
    info!(
        "operations: [{}]",
        join(measurements.operations().iter().map(|s| s.to_string()).collect())
    );
    info!(
        "experiment lengths: [{}]",
        join(
            measurements
                .experiment_lengths()
                .iter()
                .map(|s| s.to_string())
                .collect()
        )
    );
    info!(
        "bit lengths: [{}]",
        join(measurements.bit_lengths().iter().map(|b| b.to_string()).collect())
    );

    for summary in summarize(measurements) {
        info!(
            "op={} num_experiments={} points={} mean={:.1}ns",
            summary.op, summary.num_experiments, summary.num_points, summary.mean_time_ns
        );
    }
}
