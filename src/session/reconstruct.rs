//! Streaming reconstruction of commands from output events.
//!
//! A single pass over the events drives a two-state machine:
//!
//! - `Idle`: no command is accepting output (before the first boundary, or
//!   after a boundary whose payload was empty)
//! - `Open`: one command is accumulating output
//!
//! Every boundary closes the open command. A non-empty payload opens the
//! next one. End of stream closes whatever is still open.

use tracing::debug;

use super::classify::{
    extract_command, extract_exit_code, extract_working_dir, is_command_boundary,
    is_only_control, Classifier,
};
use super::clean::clean_terminal_output;
use super::types::Command;
use crate::asciicast::Event;

/// A command still receiving output.
#[derive(Debug)]
struct OpenCommand {
    command: Command,
    buffer: String,
    /// Set once real output shows up; before that, echo and prompt
    /// redraws are discarded.
    output_started: bool,
}

impl OpenCommand {
    fn new(text: String, time: f64) -> Self {
        Self {
            command: Command::new(text, time),
            buffer: String::new(),
            output_started: false,
        }
    }

    fn append(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Open(OpenCommand),
}

/// Assembles [`Command`]s from a recording's events.
pub struct Reconstructor {
    classifier: Classifier,
    state: State,
    commands: Vec<Command>,
    working_dir: Option<String>,
}

impl Reconstructor {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            state: State::Idle,
            commands: Vec::new(),
            working_dir: None,
        }
    }

    /// Feed one event. Only output events are considered.
    pub fn push(&mut self, event: &Event) {
        if !event.is_output() {
            return;
        }

        let raw = event.data.as_str();
        let cleaned = clean_terminal_output(raw);

        if let Some(dir) = extract_working_dir(raw) {
            self.working_dir = Some(dir);
        }

        if let (Some(code), State::Open(open)) = (extract_exit_code(raw), &mut self.state) {
            debug!(command = %open.command.command, code, "exit status");
            open.command.exit_code = code;
        }

        if is_command_boundary(raw) {
            self.close(event.time);
            if let Some(text) = extract_command(raw) {
                debug!(command = %text, time = event.time, "command started");
                self.state = State::Open(OpenCommand::new(text, event.time));
            }
            return;
        }

        if let State::Open(open) = &mut self.state {
            let likely_output = self.classifier.is_likely_output(&cleaned);
            if likely_output {
                open.output_started = true;
            }

            if !cleaned.is_empty()
                && !is_only_control(&cleaned)
                && !self.classifier.is_prompt_chrome(&cleaned)
                && ((open.output_started && !self.classifier.is_junk(&cleaned)) || likely_output)
            {
                open.append(&cleaned);
            }

            open.command.end_time = event.time.max(open.command.start_time);
        }
    }

    /// Close the open command, if any, and return every command seen.
    pub fn finish(mut self) -> (Vec<Command>, Option<String>) {
        if let State::Open(open) = &self.state {
            let end_time = open.command.end_time;
            self.close(end_time);
        }
        (self.commands, self.working_dir)
    }

    fn close(&mut self, time: f64) {
        let State::Open(open) = std::mem::replace(&mut self.state, State::Idle) else {
            return;
        };

        let mut command = open.command;
        command.end_time = time.max(command.start_time);
        command.output = self.finalize_output(&open.buffer);
        command.is_complete = true;

        debug!(
            command = %command.command,
            exit_code = command.exit_code,
            lines = command.output.lines().count(),
            "command closed"
        );
        self.commands.push(command);
    }

    fn finalize_output(&self, buffer: &str) -> String {
        buffer
            .trim()
            .split('\n')
            .map(str::trim)
            .filter(|line| !self.classifier.is_residual_noise(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Run the whole event list through a fresh [`Reconstructor`].
pub fn reconstruct<'a, I>(events: I, classifier: Classifier) -> (Vec<Command>, Option<String>)
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut reconstructor = Reconstructor::new(classifier);
    for event in events {
        reconstructor.push(event);
    }
    reconstructor.finish()
}
