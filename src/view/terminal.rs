// src/view/terminal.rs
use std::io::Write;

use crossterm::{
    cursor::MoveToColumn,
    queue,
    terminal::{Clear, ClearType},
};
use tracing::warn;

use super::ChatView;
use crate::message::Message;

const PROMPT: &str = "> ";

/// Line-oriented view. The transcript is whatever `W` writes to; the input
/// field is the line most recently handed over by the read loop.
pub struct TerminalView<W: Write> {
    out: W,
    pending: String,
    loading_text: String,
    input_enabled: bool,
    busy: bool,
    indicator_visible: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, loading_text: impl Into<String>) -> Self {
        Self {
            out,
            pending: String::new(),
            loading_text: loading_text.into(),
            input_enabled: true,
            busy: false,
            indicator_visible: false,
        }
    }

    /// Hand a line typed by the user to the input field. Ignored while the
    /// send control is disabled.
    pub fn set_input(&mut self, line: impl Into<String>) {
        if self.input_enabled {
            self.pending = line.into();
        }
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write to terminal");
        }
    }

    fn hide_indicator(&mut self) {
        if !self.indicator_visible {
            return;
        }
        self.indicator_visible = false;
        let erased = queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine)).map(|_| ());
        let result = erased.and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to clear busy indicator");
        }
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn input_value(&self) -> String {
        self.pending.clone()
    }

    fn clear_input(&mut self) {
        self.pending.clear();
    }

    fn render(&mut self, message: &Message) {
        self.hide_indicator();
        let line = format!("{}: {}\n", message.origin.label(), message.content);
        self.write(&line);
    }

    fn set_busy(&mut self, busy: bool) {
        if busy == self.busy {
            return;
        }
        self.busy = busy;
        if busy {
            let text = self.loading_text.clone();
            self.write(&text);
            self.indicator_visible = true;
        } else {
            self.hide_indicator();
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn focus_input(&mut self) {
        self.write(PROMPT);
    }
}
