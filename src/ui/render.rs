//! Human-readable and JSON rendering of a refresh tick for the CLI host.

use crate::errors::AppResult;
use crate::models::rendered::RefreshOutput;
use crate::ui::messages;
use ansi_term::{Colour, Style};

pub fn print_output(out: &RefreshOutput, json: bool, color: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string(out)?);
    } else {
        for line in text_lines(out, color) {
            println!("{}", line);
        }
    }

    for diag in &out.diagnostics {
        messages::warning(format!("skipped {}: {}", diag.id, diag.message));
    }

    Ok(())
}

pub fn text_lines(out: &RefreshOutput, color: bool) -> Vec<String> {
    let paint = |style: Style, s: &str| {
        if color {
            style.paint(s).to_string()
        } else {
            s.to_string()
        }
    };

    let id_w = out
        .entries
        .iter()
        .map(|e| e.id.len())
        .chain(out.summaries.keys().map(|k| k.len()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();

    for e in &out.entries {
        let mut line = format!(
            "{:<id_w$}  total {}",
            e.id,
            paint(Colour::Green.bold(), &e.total),
            id_w = id_w
        );
        if let Some(elapsed) = &e.elapsed {
            line.push_str(&format!("  elapsed {}", paint(Colour::Cyan.normal(), elapsed)));
        }
        if let Some(ts) = &e.timestamp {
            line.push_str(&format!("  at {}", ts));
        }
        lines.push(line);
    }

    for (id, s) in &out.summaries {
        lines.push(format!(
            "{:<id_w$}  day {}  remaining {}  quit {}",
            id,
            paint(Colour::Green.bold(), &s.total),
            paint(Colour::Yellow.normal(), &s.remaining),
            paint(Style::new().bold(), &s.quitting),
            id_w = id_w
        ));
    }

    lines
}
