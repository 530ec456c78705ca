// src/shell.rs
use std::{io::Write, ops::ControlFlow};

use crate::{
    services::{transport::ChatTransport, widget::ChatWidget},
    view::{ChatView, TerminalView},
};

pub const CLEAR_COMMAND: &str = "/clear";
pub const QUIT_COMMAND: &str = "/quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Clear,
    Say(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        QUIT_COMMAND => Command::Quit,
        CLEAR_COMMAND => Command::Clear,
        _ => Command::Say(line),
    }
}

/// Feed one line read from the terminal to the widget. Breaks when the user
/// asks to quit.
pub async fn handle_line<T, W>(
    widget: &mut ChatWidget<T, TerminalView<W>>,
    line: &str,
) -> ControlFlow<()>
where
    T: ChatTransport,
    W: Write,
{
    match parse_command(line) {
        Command::Quit => return ControlFlow::Break(()),
        Command::Clear => {
            widget.clear_session().await;
            widget.view_mut().focus_input();
        }
        Command::Say(text) => {
            widget.view_mut().set_input(text);
            if !widget.submit().await {
                widget.view_mut().focus_input();
            }
        }
    }
    ControlFlow::Continue(())
}
