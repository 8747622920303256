// Results table: one line per ticker
use engine::services::{MonitorReport, SkipReason};
use shared::models::SignalOutcome;
use shared::utils::brazilian_format::{format_brl, format_decimal};

const HEADERS: [&str; 7] = ["Ação", "Preço", "IFR 14", "MME21", "Volume OK", "Reversão?", "Alerta?"];
const CHECK: &str = "✔";

fn mark(flag: bool) -> String {
    if flag { CHECK.to_string() } else { String::new() }
}

fn cells(outcome: &SignalOutcome) -> Vec<String> {
    match outcome {
        SignalOutcome::Evaluated(r) => vec![
            r.ticker.clone(),
            format_brl(r.close),
            format_decimal(r.rsi, 2),
            format_decimal(r.ema, 2),
            mark(r.volume_ok),
            mark(r.reversal),
            mark(r.alert),
        ],
        SignalOutcome::InsufficientData { ticker, bars } => {
            let mut row = vec![ticker.clone(), format!("dados insuficientes ({} barras)", bars)];
            row.resize(HEADERS.len(), String::new());
            row
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn render_results_table(report: &MonitorReport) -> String {
    let rows: Vec<Vec<String>> = report.outcomes.iter().map(cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        // Insufficient-data rows spill their message across the empty columns.
        if row[2..].iter().all(String::is_empty) {
            widths[0] = widths[0].max(row[0].chars().count());
            continue;
        }
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |row: &[String]| {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(cell, w))
            .collect::<Vec<_>>()
            .join(" | ");
        line.trim_end().to_string()
    };

    let mut out = String::from("Resultados:\n");
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    out.push_str(&format_row(&header[..]));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(&row[..]));
        out.push('\n');
    }

    for skipped in &report.skipped {
        let reason = match &skipped.reason {
            SkipReason::MissingData => "sem dados".to_string(),
            SkipReason::ProviderFailure(msg) => format!("falha na consulta: {}", msg),
        };
        out.push_str(&format!("{} ignorada ({})\n", skipped.ticker, reason));
    }
    out
}
