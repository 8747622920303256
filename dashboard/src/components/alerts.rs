use engine::services::MonitorReport;

pub fn render_alerts(report: &MonitorReport) -> String {
    let alerts = report.alerts();
    if alerts.is_empty() {
        return "Nenhum alerta detectado com os critérios atuais.\n".to_string();
    }
    let mut out = String::from("Alertas de possível compra encontrados:\n");
    for alert in alerts {
        out.push_str("  ");
        out.push_str(&alert);
        out.push('\n');
    }
    out
}
