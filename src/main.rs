use std::io::{self, Write};
use std::ops::ControlFlow;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use chat_widget::shell::{self, CLEAR_COMMAND, QUIT_COMMAND};
use chat_widget::{ChatView, ChatWidget, HttpTransport, TerminalView, WidgetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging()?;

    let config = WidgetConfig::from_env().context("failed to load configuration")?;
    let transport =
        HttpTransport::from_config(&config).context("failed to build HTTP client")?;
    info!(server = %config.server_url, "chat widget starting");

    {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", config.title)?;
        writeln!(stdout, "Type a message and press Enter.")?;
        writeln!(stdout, "{CLEAR_COMMAND} ends the session, {QUIT_COMMAND} exits.")?;
    }

    let view = TerminalView::new(io::stdout(), config.loading_text.clone());
    let mut widget = ChatWidget::new(transport, view)
        .with_greeting(config.greeting.clone())
        .with_clear_session_on_exit(config.clear_session_on_exit);

    widget.greet();
    widget.view_mut().focus_input();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let ControlFlow::Break(()) = shell::handle_line(&mut widget, &line).await {
            break;
        }
    }

    widget.shutdown().await;
    info!("chat widget stopped");
    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,chat_widget=info"))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
