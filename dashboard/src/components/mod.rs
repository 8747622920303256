// Terminal renderings of a monitor report
pub mod alerts;
pub mod chart;
pub mod results_table;

pub use alerts::render_alerts;
pub use chart::render_chart;
pub use results_table::render_results_table;
