//! # Tabs Example
//!
//! A tab bar over a content panel, demonstrating:
//! - Embedding the [`Tabs`] component in a [`Model`] and mapping its commands
//! - Reacting to `SelectionChanged` notifications
//! - Host-controlled selection through `Message::External`
//! - The compact dropdown presentation (resize the terminal below 42 columns)
//!
//! Keys: ←/→ move, enter selects, 1-4 force a selection from the "host",
//! d toggles the Reports tab, q quits.  Logs go to `tabs-demo.log`.
//!
//! Run with: `cargo run --example tabs`

use tabkit::crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use tabkit::ratatui::layout::{Constraint, Layout};
use tabkit::ratatui::style::{Color, Style};
use tabkit::ratatui::text::{Line, Span};
use tabkit::ratatui::widgets::{Block, Borders, Paragraph};
use tabkit::ratatui::Frame;
use tabkit::widgets::key::KeyMap;
use tabkit::widgets::selection::Item;
use tabkit::widgets::tabs::{self, Presentation, Tabs};
use tabkit::{Command, Component, Model};

const TITLES: [&str; 4] = ["Overview", "Activity", "Reports", "Settings"];

struct App {
    tabs: Tabs,
    reports_disabled: bool,
    status: String,
    quit: bool,
}

#[derive(Debug)]
enum Msg {
    Tabs(tabs::Message),
    ForceSelect(usize),
    ToggleReports,
    Quit,
}

impl Model for App {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let items = TITLES.iter().map(|t| Item::new(t.to_string())).collect();
        let mut tabs = Tabs::with_items(items);
        tabs.focus();
        (
            App {
                tabs,
                reports_disabled: false,
                status: "ready".to_string(),
                quit: false,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Tabs(tabs::Message::SelectionChanged(i)) => {
                self.status = format!("selected {}", TITLES[i]);
                tabkit::tracing::info!(index = i, "tab selected");
                Command::none()
            }
            Msg::Tabs(m) => self.tabs.update(m).map(Msg::Tabs),
            Msg::ForceSelect(i) => {
                self.status = format!("host forced {}", TITLES[i]);
                self.tabs
                    .update(tabs::Message::External(Some(i)))
                    .map(Msg::Tabs)
            }
            Msg::ToggleReports => {
                self.reports_disabled = !self.reports_disabled;
                self.tabs
                    .update(tabs::Message::SetDisabled(2, self.reports_disabled))
                    .map(Msg::Tabs)
            }
            Msg::Quit => {
                self.quit = true;
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [bar, body, help] = Layout::vertical([
            Constraint::Length(if self.tabs.dropdown_expanded() { 6 } else { 2 }),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let selected = self.tabs.selected();
        let content = Paragraph::new(vec![
            Line::raw(format!("This is the {} panel.", TITLES[selected])),
            Line::raw(""),
            Line::styled(self.status.clone(), Style::default().fg(Color::Yellow)),
        ])
        .block(Block::default().borders(Borders::ALL).title(TITLES[selected]));
        frame.render_widget(content, body);

        let mut hints: Vec<Span> = Vec::new();
        for b in self.tabs.key_map().short_help() {
            hints.push(Span::styled(b.help_key.clone(), Style::default().fg(Color::Cyan)));
            hints.push(Span::raw(format!(" {}  ", b.description)));
        }
        hints.push(Span::styled("1-4", Style::default().fg(Color::Cyan)));
        hints.push(Span::raw(" force  "));
        hints.push(Span::styled("q", Style::default().fg(Color::Cyan)));
        hints.push(Span::raw(" quit"));
        frame.render_widget(Paragraph::new(Line::from(hints)), help);

        self.tabs.view(frame, bar);
    }
}

fn event_to_msg(app: &App, event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Char('d') => Some(Msg::ToggleReports),
            KeyCode::Char(c @ '1'..='4') => Some(Msg::ForceSelect(c as usize - '1' as usize)),
            _ => Some(Msg::Tabs(tabs::Message::KeyPress(key))),
        },
        Event::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
            match app.tabs.presentation() {
                Presentation::Wide if m.row == 0 => app
                    .tabs
                    .tab_at_column(m.column)
                    .map(|i| Msg::Tabs(tabs::Message::Click(i))),
                Presentation::Compact if m.row == 0 => {
                    Some(Msg::Tabs(tabs::Message::ToggleDropdown))
                }
                Presentation::Compact if app.tabs.dropdown_expanded() => {
                    let index = usize::from(m.row - 1);
                    (index < TITLES.len()).then(|| Msg::Tabs(tabs::Message::Click(index)))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn dispatch(app: &mut App, msg: Msg) {
    let mut queue = vec![msg];
    while let Some(msg) = queue.pop() {
        let mut follow_up = app.update(msg).into_messages();
        follow_up.reverse();
        queue.extend(follow_up);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tabkit::init_file_logging("tabs-demo.log", "tabkit_widgets=debug,tabs=info")?;

    let (mut app, init) = App::init(());
    for msg in init.into_messages() {
        dispatch(&mut app, msg);
    }

    let mut terminal = tabkit::ratatui::init();
    tabkit::crossterm::execute!(std::io::stdout(), event::EnableMouseCapture)?;

    let result = (|| -> std::io::Result<()> {
        while !app.quit {
            terminal.draw(|frame| app.view(frame))?;
            if let Some(msg) = event_to_msg(&app, event::read()?) {
                dispatch(&mut app, msg);
            }
        }
        Ok(())
    })();

    tabkit::crossterm::execute!(std::io::stdout(), event::DisableMouseCapture)?;
    tabkit::ratatui::restore();
    result?;
    println!("Final tab: {}", TITLES[app.tabs.selected()]);
    Ok(())
}
