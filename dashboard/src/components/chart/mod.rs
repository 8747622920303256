// Dual-axis text chart: close on the left scale, IFR (0..100) on the right
pub mod price;
pub mod indicators;

use shared::models::ChartSeries;
use shared::utils::brazilian_format::format_decimal;

pub const CHART_HEIGHT: usize = 12;

/// Character grid the price and IFR layers draw into.
pub struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }

    pub fn row_string(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }
}

/// Grid row for `value` on a `min..max` scale, row 0 at the top.
pub fn row_for(value: f64, min: f64, max: f64, height: usize) -> usize {
    if height <= 1 || max <= min {
        return height / 2;
    }
    let ratio = ((max - value) / (max - min)).clamp(0.0, 1.0);
    (ratio * (height - 1) as f64).round() as usize
}

pub fn render_chart(series: &ChartSeries, oversold: f64) -> String {
    if series.points.is_empty() {
        return format!("{}: sem dados para o gráfico\n", series.ticker);
    }

    let mut canvas = Canvas::new(series.points.len(), CHART_HEIGHT);
    let oversold_row = indicators::draw_ifr(&mut canvas, &series.points, oversold);
    let (min, max) = price::draw_closes(&mut canvas, &series.points);

    let mut out = format!(
        "{} - Preço (●, esquerda) e IFR 14 (*, direita)\n",
        series.ticker
    );
    let last = canvas.height() - 1;
    for row in 0..canvas.height() {
        let left = match row {
            0 => format_decimal(max, 2),
            r if r == last => format_decimal(min, 2),
            _ => String::new(),
        };
        let right = match row {
            0 => "100".to_string(),
            r if r == last => "0".to_string(),
            r if r == oversold_row => format_decimal(oversold, 0),
            _ => String::new(),
        };
        out.push_str(&format!("{:>10} │{}│ {}\n", left, canvas.row_string(row), right));
    }

    let first_date = series.points[0].timestamp.format("%d/%m");
    let last_date = series.points[series.points.len() - 1].timestamp.format("%d/%m");
    out.push_str(&format!("{:>10}  {} .. {}\n", "", first_date, last_date));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use shared::models::ChartPoint;

    fn series(closes: &[(f64, f64)]) -> ChartSeries {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        ChartSeries {
            ticker: "PETR4.SA".to_string(),
            points: closes
                .iter()
                .enumerate()
                .map(|(i, &(close, rsi))| ChartPoint {
                    timestamp: start + Duration::days(i as i64),
                    close,
                    rsi,
                })
                .collect(),
        }
    }

    #[test]
    fn row_for_maps_extremes() {
        assert_eq!(row_for(100.0, 0.0, 100.0, 12), 0);
        assert_eq!(row_for(0.0, 0.0, 100.0, 12), 11);
        assert_eq!(row_for(5.0, 5.0, 5.0, 12), 6);
        assert_eq!(row_for(150.0, 0.0, 100.0, 12), 0);
    }

    #[test]
    fn renders_axes_and_dates() {
        let chart = render_chart(&series(&[(12.0, 50.0), (10.0, 35.0), (11.0, 28.0)]), 30.0);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), CHART_HEIGHT + 2);
        assert!(lines[1].trim_start().starts_with("12,00 │●"));
        assert!(lines[1].ends_with("│ 100"));
        assert!(lines[CHART_HEIGHT].trim_start().starts_with("10,00 │ ●"));
        assert!(chart.contains("03/06 .. 05/06"));
        assert!(chart.contains("│ 30\n"));
    }

    #[test]
    fn empty_series_has_placeholder() {
        let chart = render_chart(&series(&[]), 30.0);
        assert_eq!(chart, "PETR4.SA: sem dados para o gráfico\n");
    }
}
