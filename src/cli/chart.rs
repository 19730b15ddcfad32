//! Plain-text line chart for the trend section

use super::ui::format_rate;

const POINT: char = '●';
const FLAT: char = '─';
const RISE_FALL: char = '│';

/// Picks at most `max_points` evenly spaced values, always keeping the first
/// and the last.
fn downsample(values: &[f64], max_points: usize) -> Vec<f64> {
    let max_points = max_points.max(2);
    if values.len() <= max_points {
        return values.to_vec();
    }
    let last = values.len() - 1;
    (0..max_points)
        .map(|i| values[i * last / (max_points - 1)])
        .collect()
}

/// Renders `values` as `height` rows of text, top row first, no wider than
/// `max_width` columns. Each plotted value takes one column with a connector
/// column between neighbours; long series are downsampled to fit. The top and
/// bottom rows carry the max and min labels of the full series.
pub fn render_line_chart(values: &[f64], height: usize, max_width: usize) -> Vec<String> {
    if values.is_empty() || height == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let max_label = format_rate(max);
    let min_label = format_rate(min);
    let label_width = max_label.len().max(min_label.len());

    // label, space, axis, space
    let plot_width = max_width.saturating_sub(label_width + 3);
    let plotted = downsample(values, plot_width.div_ceil(2));

    let levels: Vec<usize> = plotted
        .iter()
        .map(|v| {
            if span > 0.0 {
                (((v - min) / span) * (height - 1) as f64).round() as usize
            } else {
                (height - 1) / 2
            }
        })
        .collect();

    let width = plotted.len() * 2 - 1;
    let mut grid = vec![vec![' '; width]; height];
    for (i, &level) in levels.iter().enumerate() {
        grid[height - 1 - level][i * 2] = POINT;

        let Some(&next) = levels.get(i + 1) else {
            continue;
        };
        let column = i * 2 + 1;
        if next == level {
            grid[height - 1 - level][column] = FLAT;
        } else {
            for between in level.min(next) + 1..level.max(next) {
                grid[height - 1 - between][column] = RISE_FALL;
            }
        }
    }

    grid.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let plot: String = cells.into_iter().collect();
            let label = if row == 0 {
                max_label.as_str()
            } else if row == height - 1 {
                min_label.as_str()
            } else {
                ""
            };
            let axis = if label.is_empty() { '│' } else { '┤' };
            format!("{label:>label_width$} {axis} {}", plot.trim_end())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: usize = 200;

    fn plot_part(line: &str) -> String {
        line.chars().skip_while(|c| *c != '┤' && *c != '│').skip(2).collect()
    }

    #[test]
    fn test_empty_series() {
        assert!(render_line_chart(&[], 8, WIDE).is_empty());
        assert!(render_line_chart(&[4.7], 0, WIDE).is_empty());
    }

    #[test]
    fn test_rising_series() {
        let lines = render_line_chart(&[4.70, 4.71, 4.72], 3, WIDE);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("4.7200 ┤"));
        assert!(lines[2].starts_with("4.7000 ┤"));
        assert_eq!(plot_part(&lines[0]), "    ●");
        assert_eq!(plot_part(&lines[1]), "  ●");
        assert_eq!(plot_part(&lines[2]), "●");
    }

    #[test]
    fn test_jump_draws_connector() {
        let lines = render_line_chart(&[1.0, 2.0], 4, WIDE);
        assert_eq!(plot_part(&lines[0]), "  ●");
        assert_eq!(plot_part(&lines[1]), " │");
        assert_eq!(plot_part(&lines[2]), " │");
        assert_eq!(plot_part(&lines[3]), "●");
    }

    #[test]
    fn test_flat_series_sits_in_middle() {
        let lines = render_line_chart(&[3.5, 3.5, 3.5], 5, WIDE);
        assert_eq!(lines.len(), 5);
        assert_eq!(plot_part(&lines[2]), "●─●─●");
        assert!(lines.iter().enumerate().all(|(i, l)| i == 2 || !l.contains(POINT)));
    }

    #[test]
    fn test_long_series_fits_width() {
        // Roughly a year of daily bars
        let values: Vec<f64> = (0..260).map(|i| 4.5 + (i as f64) * 0.001).collect();
        let lines = render_line_chart(&values, 10, 80);

        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 80));
        assert!(lines[0].starts_with("4.7590 ┤"));
        assert!(lines[9].starts_with("4.5000 ┤"));
        // First and last samples are kept
        assert!(plot_part(&lines[9]).starts_with('●'));
        assert!(plot_part(&lines[0]).ends_with('●'));
    }

    #[test]
    fn test_downsample_keeps_endpoints() {
        let values: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(downsample(&values, 4), vec![0.0, 3.0, 6.0, 9.0]);
        assert_eq!(downsample(&values, 20), values);
        assert_eq!(downsample(&values, 0), vec![0.0, 9.0]);
    }
}
