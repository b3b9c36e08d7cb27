//! CSV transcript, one row per command.

use super::{format_recorded, NO_OUTPUT};
use crate::session::Session;

/// Column names, always the first row.
pub const CSV_HEADER: &str =
    "shell,width,height,recorded,working_dir,command,start_time,duration,exit_code,output";

/// Shown in the `working_dir` column when the directory is unknown.
const UNKNOWN_DIR: &str = "(unknown)";

/// Quote a field if it holds a comma, newline, or double quote.
pub fn csv_escape(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '\n' | '"')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn render_csv(session: &Session) -> String {
    let header = &session.header;
    let shell = csv_escape(session.shell_name());
    let width = csv_escape(&header.width.to_string());
    let height = csv_escape(&header.height.to_string());
    let recorded = csv_escape(&format_recorded(header.timestamp));
    let working_dir = csv_escape(session.working_dir.as_deref().unwrap_or(UNKNOWN_DIR));

    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for cmd in &session.commands {
        let output = if cmd.has_output() {
            cmd.output.as_str()
        } else {
            NO_OUTPUT
        };

        let row = [
            shell.clone(),
            width.clone(),
            height.clone(),
            recorded.clone(),
            working_dir.clone(),
            csv_escape(&cmd.command),
            csv_escape(&format!("{:.3}", cmd.start_time)),
            csv_escape(&format!("{:.3}", cmd.duration())),
            csv_escape(&cmd.exit_code.to_string()),
            csv_escape(output),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}
