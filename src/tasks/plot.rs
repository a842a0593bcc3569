use crate::{
    env::Env,
    tasks::{
        color::{
            CHART_HEIGHT_PX, CHART_WIDTH_PX, FONT_SIZE, LABEL_FONT_SIZE, POINT_SIZE,
            get_color_for_experiment_length,
        },
        measurements::Measurements,
        operation::Operation,
    },
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use log::{debug, error, info, warn};
use plotters::prelude::*;
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// How output images are named.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NamingScheme {
    /// One file per operation: `add.png`, `mul.png`, ...
    Operation,
    /// Prefix with the last experiment-length tag in sorted order, matching
    /// older reports: `100000add.png`, `100000mul.png`, ...
    Legacy,
}

#[derive(Debug, Args)]
pub struct PlotArgs {
    /// CSV file with the benchmark measurements [default: ./report/data.csv]
    #[arg(long)]
    pub data_file: Option<PathBuf>,
    /// Directory to store the plots in [default: ./report/plots]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = NamingScheme::Operation)]
    pub naming: NamingScheme,
    /// Open every plot in the system image viewer after it is saved
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

pub fn get_plot_file_name(
    op: &Operation,
    naming: &NamingScheme,
    experiment_lengths: &BTreeSet<&str>,
) -> Result<String> {
    match naming {
        NamingScheme::Operation => Ok(format!("{}.png", op.file_fragment())),
        NamingScheme::Legacy => match experiment_lengths.last() {
            Some(last) => Ok(format!("{last}{}.png", op.file_fragment())),
            None => {
                let reason = format!("no experiment lengths to name plot after (op={op})");
                error!("{reason}");
                anyhow::bail!(reason);
            }
        },
    }
}

/// Upper bound for an axis so that the largest point is not drawn on the
/// chart's edge.
fn axis_max(max_value: u64) -> u64 {
    max_value.saturating_add(max_value / 10).saturating_add(1)
}

/// Series drawn on an operation's chart: one per experiment-length tag the
/// operation was measured with, in tag order, each with its color and
/// (bit length, time) points.
pub fn select_series<'a>(
    measurements: &Measurements,
    op: &Operation,
    experiment_lengths: &BTreeSet<&'a str>,
) -> Vec<(&'a str, RGBColor, Vec<(u64, u64)>)> {
    let symbol = op.symbol();

    experiment_lengths
        .iter()
        .filter_map(|tag| {
            let points = measurements.series(symbol, tag);
            if points.is_empty() {
                debug!("no measurements for group (op={symbol}, num_experiments={tag})");
                return None;
            }

            Some((*tag, get_color_for_experiment_length(tag), points))
        })
        .collect()
}

fn plot_operation(
    measurements: &Measurements,
    op: &Operation,
    experiment_lengths: &BTreeSet<&str>,
    plot_path: &Path,
) -> Result<()> {
    let symbol = op.symbol();
    let series = select_series(measurements, op, experiment_lengths);

    let x_max = axis_max(
        series
            .iter()
            .flat_map(|(_, _, points)| points.iter().map(|(x, _)| *x))
            .max()
            .unwrap_or_default(),
    );
    let y_max = axis_max(
        series
            .iter()
            .flat_map(|(_, _, points)| points.iter().map(|(_, y)| *y))
            .max()
            .unwrap_or_default(),
    );

    let root = BitMapBackend::new(plot_path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Operation: {symbol}"),
            ("sans-serif", FONT_SIZE).into_font(),
        )
        .x_label_area_size(50)
        .y_label_area_size(80)
        .margin(20)
        .build_cartesian_2d(0u64..x_max, 0u64..y_max)?;

    // Light lines between the bold ones act as minor ticks
    chart
        .configure_mesh()
        .x_max_light_lines(4)
        .y_max_light_lines(4)
        .x_desc("bit")
        .y_desc("ns")
        .axis_desc_style(("sans-serif", LABEL_FONT_SIZE).into_font())
        .label_style(("sans-serif", LABEL_FONT_SIZE).into_font())
        .draw()?;

    for (tag, color, points) in series {
        chart
            .draw_series(
                points
                    .into_iter()
                    .map(|(x, y)| Circle::new((x, y), POINT_SIZE, color.filled())),
            )?
            .label(tag)
            .legend(move |(x, y)| Circle::new((x, y), POINT_SIZE, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", LABEL_FONT_SIZE).into_font())
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Open a plot in the platform's image viewer and wait for it to return.
pub fn show_plot(plot_path: &Path) -> Result<()> {
    let viewer = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    debug!("{}(plot): opening {} with {viewer}", Env::SYS_NAME, plot_path.display());

    let status = Command::new(viewer).arg(plot_path).status().map_err(|e| {
        let reason = format!("error running image viewer (viewer={viewer}, error={e:?})");
        error!("{reason}");
        anyhow::anyhow!(reason)
    })?;

    if !status.success() {
        let reason = format!(
            "image viewer exited with error (viewer={viewer}, path={}, status={status})",
            plot_path.display()
        );
        error!("{reason}");
        anyhow::bail!(reason);
    }

    Ok(())
}

/// Draw one chart per operation found in `measurements` and store it in
/// `out_dir`. Returns the paths of the images written, in operation order.
///
/// Every operation symbol is validated before anything is drawn, so an
/// unknown symbol leaves no images behind.
pub fn plot_measurements(
    measurements: &Measurements,
    out_dir: &Path,
    naming: &NamingScheme,
) -> Result<Vec<PathBuf>> {
    if measurements.is_empty() {
        warn!("{}(plot): no measurements to plot", Env::SYS_NAME);
        return Ok(Vec::new());
    }

    let operations = measurements
        .operations()
        .into_iter()
        .map(|symbol| symbol.parse::<Operation>())
        .collect::<Result<Vec<Operation>>>()?;
    let experiment_lengths = measurements.experiment_lengths();

    fs::create_dir_all(out_dir).map_err(|e| {
        let reason = format!(
            "error creating plots directory (path={}, error={e:?})",
            out_dir.display()
        );
        error!("{reason}");
        anyhow::anyhow!(reason)
    })?;

    let mut plot_paths = Vec::with_capacity(operations.len());
    for op in &operations {
        let plot_path = out_dir.join(get_plot_file_name(op, naming, &experiment_lengths)?);

        plot_operation(measurements, op, &experiment_lengths, &plot_path)?;
        info!("generated plot for op={op} at: {}", plot_path.display());

        plot_paths.push(plot_path);
    }

    Ok(plot_paths)
}

pub fn plot(args: &PlotArgs) -> Result<Vec<PathBuf>> {
    let data_file = match &args.data_file {
        Some(path) => path.clone(),
        None => Env::default_data_file()?,
    };
    let out_dir = match &args.out_dir {
        Some(path) => path.clone(),
        None => Env::default_plots_dir()?,
    };

    let measurements = Measurements::from_path(&data_file)?;
    let plot_paths = plot_measurements(&measurements, &out_dir, &args.naming)?;

    if args.show {
        for plot_path in &plot_paths {
            show_plot(plot_path)?;
        }
    }

    Ok(plot_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::measurements::Measurement;

    fn scenario() -> Measurements {
        Measurements::from(vec![
            Measurement::new("+", "10000", 8, 120),
            Measurement::new("+", "100000", 8, 300),
            Measurement::new("*", "10000", 8, 90),
        ])
    }

    #[test]
    fn test_operation_naming() {
        let measurements = scenario();
        let tags = measurements.experiment_lengths();

        assert_eq!(
            get_plot_file_name(&Operation::Add, &NamingScheme::Operation, &tags).unwrap(),
            "add.png"
        );
        assert_eq!(
            get_plot_file_name(&Operation::Sub, &NamingScheme::Operation, &tags).unwrap(),
            "sub.png"
        );
    }

    #[test]
    fn test_legacy_naming_uses_last_sorted_tag() {
        let measurements = scenario();
        let tags = measurements.experiment_lengths();

        // "*" was only measured with 10000 experiments, but the prefix comes
        // from the global tag set
        assert_eq!(
            get_plot_file_name(&Operation::Add, &NamingScheme::Legacy, &tags).unwrap(),
            "100000add.png"
        );
        assert_eq!(
            get_plot_file_name(&Operation::Mul, &NamingScheme::Legacy, &tags).unwrap(),
            "100000mul.png"
        );
    }

    #[test]
    fn test_legacy_naming_without_tags() {
        assert!(get_plot_file_name(&Operation::Add, &NamingScheme::Legacy, &BTreeSet::new()).is_err());
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(0), 1);
        assert_eq!(axis_max(100), 111);
        assert_eq!(axis_max(u64::MAX), u64::MAX);
        assert_eq!(axis_max(u64::MAX - 5), u64::MAX);
    }

    #[test]
    fn test_select_series_per_operation() {
        let measurements = scenario();
        let tags = measurements.experiment_lengths();

        assert_eq!(
            select_series(&measurements, &Operation::Add, &tags),
            vec![
                ("10000", BLUE, vec![(8, 120)]),
                ("100000", GREEN, vec![(8, 300)]),
            ]
        );
        assert_eq!(
            select_series(&measurements, &Operation::Mul, &tags),
            vec![("10000", BLUE, vec![(8, 90)])]
        );
    }

    #[test]
    fn test_select_series_skips_empty_groups() {
        let measurements = Measurements::from(vec![
            Measurement::new("+", "10000", 1024, 35),
            Measurement::new("+", "100000", 1024, 33),
            Measurement::new("-", "1000", 2048, 52),
            Measurement::new("-", "10000", 1024, 40),
            Measurement::new("-", "10000", 2048, 61),
        ]);
        let tags = measurements.experiment_lengths();

        // "-" was never measured with 100000 experiments
        assert_eq!(
            select_series(&measurements, &Operation::Sub, &tags),
            vec![
                ("1000", RED, vec![(2048, 52)]),
                ("10000", BLUE, vec![(1024, 40), (2048, 61)]),
            ]
        );
        assert!(select_series(&measurements, &Operation::Mul, &tags).is_empty());
    }

    #[test]
    fn test_unknown_operation_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out_dir = temp_dir.path().join("plots");
        let measurements = Measurements::from(vec![
            Measurement::new("+", "10000", 8, 120),
            Measurement::new("/", "10000", 8, 400),
        ]);

        let result = plot_measurements(&measurements, &out_dir, &NamingScheme::Operation);

        assert!(result.is_err());
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_empty_measurements() {
        let temp_dir = tempfile::tempdir().unwrap();
        let plot_paths = plot_measurements(
            &Measurements::default(),
            temp_dir.path(),
            &NamingScheme::Operation,
        )
        .unwrap();
        assert!(plot_paths.is_empty());
    }
}
