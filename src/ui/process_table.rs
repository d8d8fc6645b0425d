//! Plain-terminal rendering of an ordered process view.

use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::formatters::{format_bytes, format_disk_usage, format_percent, format_uptime};
use crate::core::process_view::{PinSet, ProcessRecord, ProcessStatus};

const NAME_WIDTH: usize = 24;

pub fn print_process_table(records: &[&ProcessRecord], pinned: &PinSet) {
    println!(
        "{}",
        format!(
            "  {:>7}  {:<width$}  {:<8}  {:>7}  {:>10}  {:>8}  {}",
            "PID",
            "NAME",
            "STATUS",
            "CPU",
            "MEMORY",
            "TIME",
            "DISK",
            width = NAME_WIDTH
        )
        .as_str()
        .bold()
    );

    for record in records {
        println!("{}", format_row(record, pinned.is_pinned(record)));
    }

    println!();
    println!("{}", format!("{} processes", records.len()).as_str().dimmed());
}

pub fn format_row(record: &ProcessRecord, is_pinned: bool) -> String {
    let marker = if is_pinned { "*".yellow().bold() } else { " ".normal() };
    let name = pad_to_width(&truncate_to_width(&record.name, NAME_WIDTH), NAME_WIDTH);

    format!(
        "{} {:>7}  {}  {}  {:>7}  {:>10}  {:>8}  {}",
        marker,
        record.pid,
        name,
        status_label(record.status),
        format_percent(record.cpu_usage),
        format_bytes(record.memory_usage),
        format_uptime(record.run_time),
        format_disk_usage(&record.disk_usage).as_str().dimmed()
    )
}

fn status_label(status: ProcessStatus) -> ColoredString {
    let label = format!("{:<8}", status.as_str());
    let label = label.as_str();
    match status {
        ProcessStatus::Running => label.green(),
        ProcessStatus::Sleeping => label.normal(),
        ProcessStatus::Stopped => label.yellow(),
        ProcessStatus::Zombie => label.red(),
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
