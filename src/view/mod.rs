// src/view/mod.rs
pub mod terminal;

use crate::message::Message;

pub use terminal::TerminalView;

/// The page surface the widget drives: a transcript, a text input with its
/// send control, and a busy indicator.
pub trait ChatView {
    /// Current contents of the text input.
    fn input_value(&self) -> String;

    fn clear_input(&mut self);

    /// Append a bubble to the transcript and keep it scrolled to the bottom.
    fn render(&mut self, message: &Message);

    fn set_busy(&mut self, busy: bool);

    fn set_input_enabled(&mut self, enabled: bool);

    fn focus_input(&mut self);
}
