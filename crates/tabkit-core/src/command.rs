/// A follow-up returned from [`Component::update`](crate::Component::update) or
/// [`Model::update`](crate::Model::update).
///
/// Every tabkit update is synchronous, so a command is either nothing, a
/// single message to deliver to the parent, or a batch of those.  Outbound
/// notifications (such as a tab bar reporting a new selection) travel this
/// way rather than through callbacks.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Notify the parent:
/// let cmd = Command::message(Msg::SelectionChanged(2));
///
/// // Lift a child command into the parent's message type:
/// let cmd = tabs.update(msg).map(AppMsg::Tabs);
/// ```
pub struct Command<Msg> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
}

impl<Msg> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Deliver a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Combine several commands.  Messages are delivered in iteration order.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform the message type of this command.
    pub fn map<NewMsg>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter().map(|cmd| cmd.map_with(f)).collect(),
                ),
            },
        }
    }

    /// Check if this command is a no-op.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is a single message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// Flatten this command into the messages it carries, in delivery order.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(self, out: &mut Vec<Msg>) {
        match self.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => out.push(msg),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_into(out);
                }
            }
        }
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

impl<Msg> From<Option<Msg>> for Command<Msg> {
    fn from(msg: Option<Msg>) -> Self {
        msg.map_or_else(Command::none, Command::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn command_message_carries_value() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_drops_noops() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        match cmd.inner {
            CommandInner::Batch(ref cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected Batch"),
        }
        assert_eq!(cmd.into_messages(), vec![1, 2]);
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));
    }

    #[test]
    fn command_map_nested_batch_keeps_order() {
        let inner = Command::batch(vec![Command::message(2), Command::message(3)]);
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), inner]);
        let mapped = cmd.map(|n| n * 10);
        assert_eq!(mapped.into_messages(), vec![10, 20, 30]);
    }

    #[test]
    fn command_from_option() {
        assert!(Command::<u8>::from(None).is_none());
        assert_eq!(Command::from(Some(7u8)).into_message(), Some(7));
    }
}
