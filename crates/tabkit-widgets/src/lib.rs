//! Tab navigation widgets for **tabkit**.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`selection`] | [`SelectionController`](selection::SelectionController): selection, disabled-item skipping and wraparound navigation |
//! | [`tabs`] | [`Tabs`](tabs::Tabs) component with wide and compact presentations |
//! | [`key`] | Key bindings and the [`KeyMap`](key::KeyMap) trait for help lines |

pub mod key;
pub mod selection;
pub mod tabs;
