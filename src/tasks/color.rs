use plotters::prelude::{BLUE, GREEN, RED, RGBColor};

pub static FONT_SIZE: i32 = 28;
pub static LABEL_FONT_SIZE: i32 = 20;
pub static POINT_SIZE: u32 = 5;
pub static CHART_WIDTH_PX: u32 = 1024;
pub static CHART_HEIGHT_PX: u32 = 768;

/// Series color for an experiment-length tag. Only the two well-known run
/// sizes get their own color, everything else is drawn in red.
pub fn get_color_for_experiment_length(num_experiments: &str) -> RGBColor {
    match num_experiments {
        "10000" => BLUE,
        "100000" => GREEN,
        _ => RED,
    }
}
