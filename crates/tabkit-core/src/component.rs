use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that owns its state and renders into a given [`Rect`].
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) method receives an `area: Rect`, so a parent
/// decides *where* each child is drawn.  Input reaches a component as
/// messages; anything the component wants to tell its parent comes back as a
/// [`Command`].
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to lift the child's commands:
///
/// ```rust,ignore
/// use tabkit_core::{Command, Component, Model};
/// use tabkit_widgets::tabs::{self, Tabs};
///
/// struct App { tabs: Tabs }
///
/// enum AppMsg { Tabs(tabs::Message) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<AppMsg>) {
///         (App { tabs: Tabs::new(vec!["One".into(), "Two".into()]) }, Command::none())
///     }
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Tabs(m) => self.tabs.update(m).map(AppMsg::Tabs),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         let area = frame.area();
///         self.tabs.view(frame, area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying any
    /// notifications for the parent.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has keyboard focus.
    ///
    /// A parent can query this to decide which child receives key events.
    /// The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
