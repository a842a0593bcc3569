use bench_plot::{
    env::Env,
    init_logging,
    tasks::{
        measurements::Measurements,
        plot::{self, PlotArgs},
        summary,
    },
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
struct Cli {
    // The name of the task to execute
    #[clap(subcommand)]
    task: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plot benchmark measurements, one chart per operation
    Plot(PlotArgs),
    /// Log the operations, experiment lengths, and per-group statistics
    /// found in a measurements file
    Summary {
        /// CSV file with the benchmark measurements [default: ./report/data.csv]
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging(false);

    let cli = Cli::parse();
    match &cli.task {
        Command::Plot(plot_args) => {
            plot::plot(plot_args)?;
        }
        Command::Summary { data_file } => {
            let data_file = match data_file {
                Some(path) => path.clone(),
                None => Env::default_data_file()?,
            };
            let measurements = Measurements::from_path(&data_file)?;
            summary::log_summary(&measurements);
        }
    }

    Ok(())
}
