//! Tab navigation component for switching between views.
//!
//! [`Tabs`] renders a horizontal tab bar when it has room and collapses into
//! a one-line dropdown trigger when drawn narrower than
//! [`TabsConfig::compact_breakpoint`].  Selection logic lives in the embedded
//! [`SelectionController`]; this module maps key presses and clicks onto it
//! and reports changes to the parent as [`Message::SelectionChanged`].

use crate::key::TabsKeyMap;
use crate::selection::{Direction, Item, SelectionController, SelectionMode};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs as RatatuiTabs};
use ratatui::Frame;
use std::cell::Cell;
use tabkit_core::command::Command;
use tabkit_core::component::Component;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Messages for the tabs component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press event forwarded to the tabs component.
    KeyPress(KeyEvent),
    /// A pointer activation on the tab at this index.
    Click(usize),
    /// Open or close the compact dropdown.
    ToggleDropdown,
    /// Host-controlled selection for this update cycle.
    External(Option<usize>),
    /// The width, in columns, the tabs will be drawn at.
    Resize(u16),
    /// Enable or disable the tab at an index.
    SetDisabled(usize, bool),
    /// Replace the tab list.  The selection is clamped into the new bounds
    /// and the last host-controlled selection is kept.
    SetItems(Vec<Item<String>>),
    /// Emitted when the selected tab changes, carrying the new index.
    SelectionChanged(usize),
}

/// How the tabs are currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// One row of tabs, navigated with left/right.
    Wide,
    /// A dropdown trigger showing the selected tab.
    Compact,
}

/// Behaviour settings for [`Tabs`].
#[derive(Debug, Clone)]
pub struct TabsConfig {
    /// Whether arrow keys also commit the selection in the wide layout.
    pub selection_mode: SelectionMode,
    /// Widths below this many columns use the compact presentation.
    pub compact_breakpoint: u16,
    /// Trigger text shown when there are no tabs.
    pub trigger_placeholder: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Automatic,
            compact_breakpoint: 42,
            trigger_placeholder: "No tabs".to_string(),
        }
    }
}

impl TabsConfig {
    /// Choose whether arrow keys commit the selection.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the width below which the compact dropdown is used.
    pub fn with_compact_breakpoint(mut self, columns: u16) -> Self {
        self.compact_breakpoint = columns;
        self
    }

    /// Set the trigger text shown when there are no tabs.
    pub fn with_trigger_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.trigger_placeholder = placeholder.into();
        self
    }
}

/// Visual style configuration for the [`Tabs`] component.
#[derive(Debug, Clone)]
pub struct TabsStyle {
    /// Style applied to enabled, unselected tab labels.
    pub normal: Style,
    /// Style applied to the currently selected tab label.
    pub selected: Style,
    /// Style applied to disabled tab labels.
    pub disabled: Style,
    /// Extra style patched onto the focused tab while it is not selected.
    pub focused: Style,
    /// Style applied to the tab bar border.
    pub border: Style,
    /// String used as a divider between tab labels.
    pub divider: String,
    /// Symbol drawn at the right edge of the compact trigger.
    pub chevron: String,
    /// Symbol drawn before the focused entry of the open dropdown.
    pub marker: String,
}

impl Default for TabsStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::Gray),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            focused: Style::default().add_modifier(Modifier::UNDERLINED),
            border: Style::default().fg(Color::DarkGray),
            divider: " | ".to_string(),
            chevron: "▾".to_string(),
            marker: "▸ ".to_string(),
        }
    }
}

/// A tab navigation component that tracks the selected and focused tabs.
///
/// # Example
///
/// ```ignore
/// use tabkit_widgets::selection::{Item, SelectionMode};
/// use tabkit_widgets::tabs::{Tabs, TabsConfig};
///
/// let tabs = Tabs::with_items(vec![
///     Item::new("Overview".to_string()),
///     Item::disabled("Billing".to_string()),
///     Item::new("Settings".to_string()),
/// ])
/// .with_selected(2)
/// .with_config(TabsConfig::default().with_selection_mode(SelectionMode::Manual));
/// ```
pub struct Tabs {
    controller: SelectionController<String>,
    focused_tab: usize,
    width: Cell<Option<u16>>,
    focus: bool,
    config: TabsConfig,
    style: TabsStyle,
    keys: TabsKeyMap,
}

impl Tabs {
    /// Create a tabs component with the given tab titles, all enabled.
    pub fn new(titles: Vec<String>) -> Self {
        Self::with_items(titles.into_iter().map(Item::new).collect())
    }

    /// Create a tabs component from items carrying their own disabled flags.
    pub fn with_items(items: Vec<Item<String>>) -> Self {
        Self {
            controller: SelectionController::new(items, None),
            focused_tab: 0,
            width: Cell::new(None),
            focus: false,
            config: TabsConfig::default(),
            style: TabsStyle::default(),
            keys: TabsKeyMap::default(),
        }
    }

    /// Seed the selection.  This value also counts as the first host-controlled
    /// selection, so passing it again through [`Message::External`] is a no-op.
    pub fn with_selected(mut self, index: usize) -> Self {
        let items = self.controller.items().to_vec();
        self.controller = SelectionController::new(items, Some(index));
        self.focused_tab = self.controller.selected();
        self
    }

    /// Set the behaviour settings for this tabs component.
    pub fn with_config(mut self, config: TabsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the visual style for this tabs component.
    pub fn with_style(mut self, style: TabsStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the key bindings.
    pub fn with_key_map(mut self, keys: TabsKeyMap) -> Self {
        self.keys = keys;
        self
    }

    /// Give this tabs component keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this tabs component.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Return the index of the currently selected tab.
    pub fn selected(&self) -> usize {
        self.controller.selected()
    }

    /// Return the index of the tab holding presentation focus.
    pub fn focused_tab(&self) -> usize {
        self.focused_tab
    }

    /// Whether the compact dropdown is open.
    pub fn dropdown_expanded(&self) -> bool {
        self.controller.dropdown_expanded()
    }

    /// Read-only access to the underlying selection state.
    pub fn controller(&self) -> &SelectionController<String> {
        &self.controller
    }

    /// The key bindings, for rendering help.
    pub fn key_map(&self) -> &TabsKeyMap {
        &self.keys
    }

    /// Map a column of the wide tab bar, relative to its left edge, to the
    /// tab drawn there.  Each label is padded by one column on both sides and
    /// followed by [`TabsStyle::divider`]; dividers hit nothing.
    pub fn tab_at_column(&self, column: u16) -> Option<usize> {
        let column = usize::from(column);
        let divider = self.style.divider.width();
        let mut x = 0;
        for (i, item) in self.controller.items().iter().enumerate() {
            let width = item.label.width() + 2;
            if (x..x + width).contains(&column) {
                return Some(i);
            }
            x += width + divider;
        }
        None
    }

    /// Record the width the tabs are drawn at.  [`view`](Component::view)
    /// does this on every render.
    pub fn set_width(&self, width: u16) {
        self.width.set(Some(width));
    }

    /// Compact below the breakpoint, wide otherwise or before the first render.
    pub fn presentation(&self) -> Presentation {
        match self.width.get() {
            Some(w) if w < self.config.compact_breakpoint => Presentation::Compact,
            _ => Presentation::Wide,
        }
    }

    /// Apply several messages as one update cycle.
    ///
    /// Host-controlled selections are reconciled before any other message in
    /// the batch, so an external override is never lost to a key press that
    /// arrived alongside it.
    pub fn update_batch(&mut self, msgs: impl IntoIterator<Item = Message>) -> Command<Message> {
        let (external, rest): (Vec<_>, Vec<_>) = msgs
            .into_iter()
            .partition(|m| matches!(m, Message::External(_)));
        let cmds: Vec<_> = external
            .into_iter()
            .chain(rest)
            .map(|m| self.update(m))
            .collect();
        Command::batch(cmds)
    }

    fn commit(&mut self, index: usize) -> Command<Message> {
        self.focused_tab = index;
        self.controller
            .activate(index)
            .map(Message::SelectionChanged)
            .into()
    }

    fn commit_focused(&mut self) -> Command<Message> {
        if self.controller.is_enabled(self.focused_tab) {
            self.commit(self.focused_tab)
        } else {
            tracing::trace!(index = self.focused_tab, "confirm on disabled tab ignored");
            Command::none()
        }
    }

    fn step(&mut self, direction: Direction, mode: SelectionMode) -> Command<Message> {
        match self
            .controller
            .on_directional_key(self.focused_tab, direction, mode)
        {
            Some(nav) => {
                self.focused_tab = nav.target;
                nav.selection_changed.map(Message::SelectionChanged).into()
            }
            None => Command::none(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (self.presentation(), self.controller.dropdown_expanded()) {
            (Presentation::Wide, _) => {
                if self.keys.prev.matches(&key) {
                    self.step(Direction::Prev, self.config.selection_mode)
                } else if self.keys.next.matches(&key) {
                    self.step(Direction::Next, self.config.selection_mode)
                } else if self.keys.confirm.matches(&key) {
                    self.commit_focused()
                } else {
                    Command::none()
                }
            }
            (Presentation::Compact, false) => {
                if self.keys.confirm.matches(&key) || self.keys.open.matches(&key) {
                    self.update(Message::ToggleDropdown)
                } else {
                    Command::none()
                }
            }
            // Arrow keys inside the open menu move focus only.
            (Presentation::Compact, true) => {
                if self.keys.close.matches(&key) {
                    self.controller.set_dropdown_expanded(false);
                    self.focused_tab = self.controller.selected();
                    Command::none()
                } else if self.keys.menu_prev.matches(&key) {
                    self.step(Direction::Prev, SelectionMode::Manual)
                } else if self.keys.menu_next.matches(&key) {
                    self.step(Direction::Next, SelectionMode::Manual)
                } else if self.keys.confirm.matches(&key) {
                    self.commit_focused()
                } else {
                    Command::none()
                }
            }
        }
    }

    fn view_wide(&self, frame: &mut Frame, area: Rect) {
        let selected = self.controller.selected();
        let titles: Vec<Line> = self
            .controller
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut style = if item.disabled {
                    self.style.disabled
                } else {
                    self.style.normal
                };
                if self.focus && i == self.focused_tab && i != selected {
                    style = style.patch(self.style.focused);
                }
                Line::styled(item.label.as_str(), style)
            })
            .collect();

        let tabs = RatatuiTabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.style.border),
            )
            .select(selected)
            .highlight_style(self.style.selected)
            .divider(self.style.divider.as_str());

        frame.render_widget(tabs, area);
    }

    fn view_compact(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let trigger_area = Rect { height: 1, ..area };
        let chevron_width = self.style.chevron.width();
        let label_budget = (area.width as usize).saturating_sub(chevron_width + 1);

        let (label, label_style) = match self.controller.selected_item() {
            Some(item) => (item.label.as_str(), self.style.selected),
            None => (self.config.trigger_placeholder.as_str(), self.style.disabled),
        };
        let label = truncate_to_width(label, label_budget);
        let padding = (area.width as usize).saturating_sub(label.width() + chevron_width);
        let trigger = Line::from(vec![
            Span::styled(label, label_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(self.style.chevron.as_str(), self.style.border),
        ]);
        frame.render_widget(Paragraph::new(trigger), trigger_area);

        if !self.controller.dropdown_expanded() || area.height < 2 {
            return;
        }

        let rows = (area.height - 1) as usize;
        let offset = self.focused_tab.saturating_sub(rows.saturating_sub(1));
        let marker_width = self.style.marker.width();
        let blank_marker = " ".repeat(marker_width);
        let item_budget = (area.width as usize).saturating_sub(marker_width);
        for (row, (i, item)) in self
            .controller
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let style = if item.disabled {
                self.style.disabled
            } else if i == self.controller.selected() {
                self.style.selected
            } else {
                self.style.normal
            };
            let marker = if i == self.focused_tab {
                self.style.marker.as_str()
            } else {
                blank_marker.as_str()
            };
            let row_area = Rect {
                y: area.y + 1 + row as u16,
                height: 1,
                ..area
            };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(truncate_to_width(&item.label, item_budget), style),
            ]);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }
}

impl Component for Tabs {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::KeyPress(_) => Command::none(),
            Message::Click(index) => {
                if self.controller.is_enabled(index) {
                    self.commit(index)
                } else {
                    tracing::trace!(index, "click on disabled or missing tab ignored");
                    Command::none()
                }
            }
            Message::ToggleDropdown => {
                self.controller.toggle_dropdown();
                // Browsed-to entries are dropped whichever way the menu goes.
                self.focused_tab = self.controller.selected();
                Command::none()
            }
            Message::External(value) => {
                if self.controller.reconcile_external(value) {
                    self.focused_tab = self.controller.selected();
                }
                Command::none()
            }
            Message::Resize(width) => {
                self.set_width(width);
                Command::none()
            }
            Message::SetDisabled(index, disabled) => {
                if let Err(err) = self.controller.set_disabled(index, disabled) {
                    tracing::warn!(%err, "set_disabled ignored");
                }
                Command::none()
            }
            Message::SetItems(items) => {
                self.controller.set_items(items);
                self.focused_tab = self
                    .focused_tab
                    .min(self.controller.len().saturating_sub(1));
                Command::none()
            }
            Message::SelectionChanged(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.set_width(area.width);
        match self.presentation() {
            Presentation::Wide => self.view_wide(frame, area),
            Presentation::Compact => self.view_compact(frame, area),
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Cut `s` to at most `max` display columns, ending in `…` when shortened.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
