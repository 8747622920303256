// Close-price layer of the chart, scaled to the window's own range
use super::{row_for, Canvas};
use shared::models::ChartPoint;

/// Plots closes over whatever is already drawn. Returns the price scale.
pub fn draw_closes(canvas: &mut Canvas, points: &[ChartPoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);
    let height = canvas.height();
    for (col, point) in points.iter().enumerate() {
        canvas.set(row_for(point.close, min, max, height), col, '●');
    }
    (min, max)
}
