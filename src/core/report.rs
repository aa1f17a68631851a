use crate::domain::model::{ClassificationReport, OutputFormat};
use crate::utils::error::Result;
use std::io::Write;

pub fn write_report<W: Write>(
    report: &ClassificationReport,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(report, writer),
        OutputFormat::Json => write_json(report, writer),
        OutputFormat::Csv => write_csv(report, writer),
    }
}

fn write_text<W: Write>(report: &ClassificationReport, mut writer: W) -> Result<()> {
    for record in &report.records {
        let marker = if record.is_baidu_search { "MATCH" } else { "-" };
        writeln!(writer, "{}\t{}", marker, record.url)?;
    }
    writeln!(
        writer,
        "# total={} matched={} skipped_blank={}",
        report.summary.total, report.summary.matched, report.summary.skipped_blank
    )?;
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(report: &ClassificationReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// CSV 只輸出紀錄，不含統計
fn write_csv<W: Write>(report: &ClassificationReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["line", "url", "is_baidu_search", "matched", "host"])?;

    for record in &report.records {
        csv_writer.write_record([
            record.line.to_string(),
            record.url.clone(),
            record.is_baidu_search.to_string(),
            record.matched.clone().unwrap_or_default(),
            record.host.clone().unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
