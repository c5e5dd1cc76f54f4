//! Stats report command implementations

use anyhow::Result;
use tally_core::models::{ForecastReport, MonthlyChangeReport, TopDaysReport};
use tally_core::{Database, ObservationSource, StatsConfig, StatsEngine};

use crate::cli::StatsReportType;

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

pub async fn cmd_stats(
    db: Database,
    config: StatsConfig,
    report: &StatsReportType,
    format: OutputFormat,
) -> Result<()> {
    let engine = StatsEngine::with_config(db, config);
    let output = render_stats(&engine, report, format).await?;
    print!("{}", output);
    Ok(())
}

/// Compute the requested report and render it as text
pub async fn render_stats<S: ObservationSource>(
    engine: &StatsEngine<S>,
    report: &StatsReportType,
    format: OutputFormat,
) -> Result<String> {
    let limit = engine.config().top_days_limit;
    let window = engine.config().forecast_window;

    let text = match (report, format) {
        (StatsReportType::TopDays, OutputFormat::Json) => {
            to_json(&engine.top_days().await?)?
        }
        (StatsReportType::TopDays, OutputFormat::Table) => {
            format_top_days(&engine.top_days().await?, limit)
        }
        (StatsReportType::MonthlyChange, OutputFormat::Json) => {
            to_json(&engine.monthly_change().await?)?
        }
        (StatsReportType::MonthlyChange, OutputFormat::Table) => {
            format_monthly_change(&engine.monthly_change().await?)
        }
        (StatsReportType::Forecast, OutputFormat::Json) => {
            to_json(&engine.forecast_next_month().await?)?
        }
        (StatsReportType::Forecast, OutputFormat::Table) => {
            format_forecast(&engine.forecast_next_month().await?, window)
        }
        (StatsReportType::All, OutputFormat::Json) => to_json(&engine.report().await?)?,
        (StatsReportType::All, OutputFormat::Table) => {
            let all = engine.report().await?;
            let mut text = format_top_days(&all.top_days, limit);
            text.push_str(&format_monthly_change(&all.monthly_change));
            text.push_str(&format_forecast(&all.forecast, window));
            text
        }
    };

    Ok(text)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

pub fn format_top_days(report: &TopDaysReport, limit: usize) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("📅 Top {} Spending Days\n", limit));

    if report.is_empty() {
        out.push_str("   No expenses recorded.\n");
        return out;
    }

    out.push_str(&format!("   {:>4} │ {:10} │ {:>12}\n", "User", "Date", "Total"));
    out.push_str("   ─────┼────────────┼─────────────\n");
    for (user_id, days) in report {
        for day in days {
            out.push_str(&format!(
                "   {:>4} │ {:10} │ {:>12.2}\n",
                user_id, day.date, day.total
            ));
        }
    }
    out
}

pub fn format_monthly_change(report: &MonthlyChangeReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("📈 Change From Previous Month\n");

    if report.is_empty() {
        out.push_str("   No expenses recorded.\n");
        return out;
    }

    for (user_id, change) in report {
        let value = match change {
            Some(pct) => format!("{:+.1}%", pct),
            None => "n/a (needs two months)".to_string(),
        };
        out.push_str(&format!("   User {:>4}: {}\n", user_id, value));
    }
    out
}

pub fn format_forecast(report: &ForecastReport, window: usize) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "🔮 Next Month Forecast (average of last {} months)\n",
        window
    ));

    if report.is_empty() {
        out.push_str("   No expenses recorded.\n");
        return out;
    }

    for (user_id, prediction) in report {
        let value = match prediction {
            Some(amount) => format!("${:.2}", amount),
            None => "n/a".to_string(),
        };
        out.push_str(&format!("   User {:>4}: {}\n", user_id, value));
    }
    out
}
