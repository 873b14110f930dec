//! Component core for **tabkit**.
//!
//! `tabkit-core` provides the small Elm-style vocabulary every tabkit widget
//! speaks: state lives in a [`Component`] or [`Model`], input arrives as
//! messages, and anything a widget wants to tell its host comes back as a
//! [`Command`].  All updates are synchronous.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up messages returned from an update |
//! | [`Mailbox`] | Serializes updates to one component from many async tasks |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! Logging goes through [`tracing`]; see [`logging::init_file_logging`] for a
//! subscriber that keeps log output off the terminal.

pub mod command;
pub mod component;
pub mod logging;
pub mod mailbox;
pub mod model;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use logging::{init_file_logging, LoggingError};
pub use mailbox::{Mailbox, MailboxError};
pub use model::Model;
