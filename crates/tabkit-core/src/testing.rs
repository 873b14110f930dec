use crate::command::Command;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Messages produced through [`Command::message`] are queued rather than
/// delivered, so a test can observe them before flushing with
/// [`drain_messages`](TestProgram::drain_messages).
///
/// # Example
///
/// ```rust,ignore
/// use tabkit_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(());
/// prog.send(AppMsg::Tabs(tabs::Message::Click(2)));
/// assert_eq!(prog.model().tabs.selected(), 2);
///
/// let output = prog.render_string(40, 3);
/// assert!(output.contains("Settings"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages returned by `init` are queued, not delivered.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Messages queued by commands and not yet delivered.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Deliver queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        self.pending_messages.extend(cmd.into_messages());
    }
}

/// Concatenate the symbols of a buffer row by row, separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Pager {
        page: usize,
        log: Vec<String>,
    }

    #[derive(Debug)]
    enum PagerMsg {
        Next,
        Jump(usize),
        Landed(usize),
    }

    impl Model for Pager {
        type Message = PagerMsg;
        type Flags = usize;

        fn init(page: usize) -> (Self, Command<PagerMsg>) {
            (
                Pager {
                    page,
                    log: Vec::new(),
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: PagerMsg) -> Command<PagerMsg> {
            match msg {
                PagerMsg::Next => {
                    self.page += 1;
                    Command::none()
                }
                PagerMsg::Jump(page) => {
                    self.page = page;
                    Command::message(PagerMsg::Landed(page))
                }
                PagerMsg::Landed(page) => {
                    self.log.push(format!("landed {page}"));
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(format!("Page {}", self.page)), frame.area());
        }
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Pager>::new(3);
        assert_eq!(prog.model().page, 3);
    }

    #[test]
    fn send_updates_model() {
        let mut prog = TestProgram::<Pager>::new(0);
        prog.send(PagerMsg::Next);
        prog.send(PagerMsg::Next);
        assert_eq!(prog.model().page, 2);
    }

    #[test]
    fn command_messages_are_queued_until_drained() {
        let mut prog = TestProgram::<Pager>::new(0);
        prog.send(PagerMsg::Jump(9));
        assert_eq!(prog.pending().len(), 1);
        assert!(prog.model().log.is_empty());

        prog.drain_messages();
        assert!(prog.pending().is_empty());
        assert_eq!(prog.model().log, vec!["landed 9"]);
    }

    #[test]
    fn render_string_shows_state() {
        let mut prog = TestProgram::<Pager>::new(0);
        prog.send(PagerMsg::Next);
        let content = prog.render_string(20, 2);
        assert!(content.starts_with("Page 1"));
        assert_eq!(content.lines().count(), 2);
    }
}
