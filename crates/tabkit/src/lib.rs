//! **tabkit** -- tab navigation for [`ratatui`] applications.
//!
//! This is the umbrella crate that re-exports everything needed from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! tabkit = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`tabkit_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Mailbox`], etc.).
//! * The [`widgets`] module re-exports [`tabkit_widgets`]
//!   ([`Tabs`](widgets::tabs::Tabs), the selection controller, key bindings).
//! * [`ratatui`], [`crossterm`], [`tokio`] and [`tracing`] are re-exported so
//!   downstream crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use tabkit::widgets::tabs::{self, Tabs};
//! use tabkit::{Command, Component};
//!
//! let mut tabs = Tabs::new(vec!["Inbox".into(), "Sent".into(), "Drafts".into()]);
//! tabs.focus();
//! let cmd = tabs.update(tabs::Message::Click(2));
//! assert_eq!(cmd.into_message(), Some(tabs::Message::SelectionChanged(2)));
//! ```

pub use tabkit_core::*;
pub mod widgets {
    pub use tabkit_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
pub use tracing;
