//! Plain-text transcript for reading (by people or by an LLM).

use super::{format_recorded, NO_OUTPUT};
use crate::session::Session;

/// ```text
/// Terminal Session (fish shell, 80x24)
/// Recorded: 2023-11-14 22:13:20
/// Working Directory: /home/alice
///
/// COMMAND: ls -la
/// START TIME: 0.100s
/// DURATION: 0.400s
/// EXIT CODE: 0
/// OUTPUT: total 0
/// ```
pub fn render_structured(session: &Session) -> String {
    let header = &session.header;
    let mut out = String::new();

    out.push_str(&format!(
        "Terminal Session ({} shell, {}x{})\n",
        session.shell_name(),
        header.width,
        header.height
    ));
    out.push_str(&format!("Recorded: {}\n", format_recorded(header.timestamp)));
    if let Some(dir) = &session.working_dir {
        out.push_str(&format!("Working Directory: {}\n", dir));
    }
    out.push('\n');

    for cmd in &session.commands {
        out.push_str(&format!("COMMAND: {}\n", cmd.command));
        out.push_str(&format!("START TIME: {:.3}s\n", cmd.start_time));
        out.push_str(&format!("DURATION: {:.3}s\n", cmd.duration()));
        out.push_str(&format!("EXIT CODE: {}\n", cmd.exit_code));
        if cmd.has_output() {
            out.push_str(&format!("OUTPUT: {}\n", cmd.output));
        } else {
            out.push_str(&format!("OUTPUT: {}\n", NO_OUTPUT));
        }
        out.push('\n');
    }

    out
}
