// One dashboard refresh: run the monitor, render it, send alerts
use anyhow::Result;
use engine::notify::notify_alerts;
use engine::services::MonitorReport;

use crate::components::{render_alerts, render_chart, render_results_table};
use crate::config::AppConfig;
use crate::services::engine_client::{build_notifier, build_service};

pub fn render_report(report: &MonitorReport, show_chart: bool, oversold: f64) -> String {
    let mut out = render_results_table(report);
    out.push('\n');
    out.push_str(&render_alerts(report));
    if show_chart {
        for chart in &report.charts {
            out.push('\n');
            out.push_str(&render_chart(chart, oversold));
        }
    }
    out
}

pub fn notification_status(delivered: Option<bool>) -> Option<&'static str> {
    delivered.map(|ok| if ok { "E-mail enviado" } else { "Falha ao enviar e-mail" })
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let service = build_service(config)?;
    let notifier = build_notifier(config.notification.as_ref())?;

    let report = service.run_configured().await;
    let monitor = service.settings();
    print!("{}", render_report(&report, monitor.show_chart, monitor.indicators.oversold));

    if let Some(status) = notification_status(notify_alerts(notifier.as_ref(), &report).await) {
        println!("\n{}", status);
    }
    Ok(())
}
