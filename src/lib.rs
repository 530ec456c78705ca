pub mod config;
pub mod error;
pub mod message;
pub mod services;
pub mod shell;
pub mod state;
pub mod view;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use message::{Message, MessageRole};
pub use services::transport::{ChatTransport, HttpTransport};
pub use services::widget::ChatWidget;
pub use view::{ChatView, TerminalView};
