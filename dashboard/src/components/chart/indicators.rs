// IFR layer of the chart, drawn against a fixed 0..100 scale
use super::{row_for, Canvas};
use shared::models::ChartPoint;

/// Draws the oversold guide line and the IFR points. Returns the guide row.
pub fn draw_ifr(canvas: &mut Canvas, points: &[ChartPoint], oversold: f64) -> usize {
    let height = canvas.height();
    let oversold_row = row_for(oversold, 0.0, 100.0, height);
    for col in 0..points.len() {
        canvas.set(oversold_row, col, '-');
    }
    for (col, point) in points.iter().enumerate() {
        canvas.set(row_for(point.rsi, 0.0, 100.0, height), col, '*');
    }
    oversold_row
}
