//! Record rendering
//!
//! Two line formats:
//! - `Json`: one object per line, `level` and `time` first, then context
//!   fields, event fields, `caller` and `message`. A field never shadows one
//!   of the record's own keys.
//! - `Console`: `<time> <LVL> <caller> > <message> key=value ...` for humans,
//!   optionally colored

use chrono::{DateTime, Local, SecondsFormat};
use herald_common::LogLevel;
use nu_ansi_term::{Color, Style};
use serde_json::{Map, Value};
use std::fmt::Write as _;

/// Line format of a logger's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Console,
}

/// A finalized record, borrowed from the logger and the event
#[derive(Debug)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub time: Option<DateTime<Local>>,
    pub context: &'a Map<String, Value>,
    pub fields: &'a Map<String, Value>,
    pub caller: Option<String>,
    pub message: Option<&'a str>,
}

impl Format {
    /// Render a record as one newline-terminated line
    pub fn render(&self, record: &Record<'_>, ansi: bool) -> serde_json::Result<Vec<u8>> {
        match self {
            Format::Json => render_json(record),
            Format::Console => Ok(render_console(record, ansi).into_bytes()),
        }
    }
}

fn timestamp(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn render_json(record: &Record<'_>) -> serde_json::Result<Vec<u8>> {
    let mut line = Map::new();
    line.insert("level".to_string(), Value::from(record.level.as_str()));
    if let Some(time) = &record.time {
        line.insert("time".to_string(), Value::String(timestamp(time)));
    }
    for (key, value) in record.context.iter().chain(record.fields.iter()) {
        if !owns_key(record, key) {
            line.insert(key.clone(), value.clone());
        }
    }
    if let Some(caller) = &record.caller {
        line.insert("caller".to_string(), Value::String(caller.clone()));
    }
    if let Some(message) = record.message {
        line.insert("message".to_string(), Value::from(message));
    }

    let mut out = serde_json::to_vec(&line)?;
    out.push(b'\n');
    Ok(out)
}

/// Keys the record writes itself
fn owns_key(record: &Record<'_>, key: &str) -> bool {
    match key {
        "level" => true,
        "time" => record.time.is_some(),
        "caller" => record.caller.is_some(),
        "message" => record.message.is_some(),
        _ => false,
    }
}

fn level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Color::Magenta.normal(),
        LogLevel::Debug => Color::Yellow.normal(),
        LogLevel::Info => Color::Green.normal(),
        LogLevel::Warn => Color::Red.normal(),
        LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => Color::Red.bold(),
    }
}

fn paint(ansi: bool, style: Style, text: &str) -> String {
    if ansi {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn console_value(value: &Value) -> String {
    match value {
        Value::String(s) if !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '"' || c == '=') => {
            s.clone()
        }
        other => other.to_string(),
    }
}

fn render_console(record: &Record<'_>, ansi: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(time) = &record.time {
        parts.push(paint(ansi, Color::DarkGray.normal(), &timestamp(time)));
    }
    parts.push(paint(ansi, level_style(record.level), record.level.abbrev()));
    if let Some(caller) = &record.caller {
        let arrow = paint(ansi, Color::Cyan.normal(), ">");
        parts.push(format!("{} {}", paint(ansi, Style::new().bold(), caller), arrow));
    }
    if let Some(message) = record.message {
        if !message.is_empty() {
            parts.push(message.to_string());
        }
    }

    // Event fields override context fields of the same name
    let mut merged: Vec<(&String, &Value)> = Vec::new();
    for (key, value) in record.context.iter().chain(record.fields.iter()) {
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => merged.push((key, value)),
        }
    }
    merged.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in merged {
        let key_style = if key == "error" {
            Color::Red.normal()
        } else {
            Color::Cyan.normal()
        };
        let mut field = paint(ansi, key_style, key);
        field.push_str(&paint(ansi, Color::DarkGray.normal(), "="));
        let _ = write!(field, "{}", console_value(value));
        parts.push(field);
    }

    let mut line = parts.join(" ");
    line.push('\n');
    line
}
