//! Single-owner mailbox for driving a [`Component`] from many tasks.
//!
//! A component's update cycle assumes one writer.  When several async tasks
//! need to feed the same component (a key reader, a remote control channel,
//! a timer), wrap it in a [`Mailbox`]: a tokio task takes ownership of the
//! component and applies messages strictly in arrival order.  Notifications
//! the component emits through [`Command::message`](crate::Command::message)
//! are forwarded to the receiver returned by [`Mailbox::spawn`].

use crate::component::Component;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Errors returned when talking to a [`Mailbox`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MailboxError {
    /// The task owning the component has stopped.
    #[error("mailbox closed: the owning task is no longer running")]
    Closed,
}

enum Envelope<C: Component> {
    Message(C::Message),
    Inspect(Box<dyn FnOnce(&C) + Send>),
}

/// Cloneable handle to a component owned by a background task.
///
/// Dropping every handle ends the task; its [`JoinHandle`] then yields the
/// component in its final state.
pub struct Mailbox<C: Component> {
    tx: mpsc::UnboundedSender<Envelope<C>>,
}

impl<C: Component> Clone for Mailbox<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C: Component> Mailbox<C> {
    /// Move `component` into a new tokio task.
    ///
    /// Returns the handle, the receiver for outbound notifications, and the
    /// task's join handle.  Must be called from within a tokio runtime.
    pub fn spawn(
        component: C,
    ) -> (
        Self,
        mpsc::UnboundedReceiver<C::Message>,
        JoinHandle<C>,
    ) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Envelope<C>>();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut component = component;
            while let Some(envelope) = rx.recv().await {
                match envelope {
                    Envelope::Message(msg) => {
                        for out in component.update(msg).into_messages() {
                            if out_tx.send(out).is_err() {
                                tracing::trace!("mailbox notification dropped, no subscriber");
                            }
                        }
                    }
                    Envelope::Inspect(f) => f(&component),
                }
            }
            tracing::debug!("mailbox closed, returning component");
            component
        });

        (Self { tx }, out_rx, task)
    }

    /// Queue a message for the component.
    pub fn send(&self, msg: C::Message) -> Result<(), MailboxError> {
        self.tx
            .send(Envelope::Message(msg))
            .map_err(|_| MailboxError::Closed)
    }

    /// Read from the component after every message queued before this call
    /// has been applied.
    pub async fn inspect<R>(
        &self,
        f: impl FnOnce(&C) -> R + Send + 'static,
    ) -> Result<R, MailboxError>
    where
        R: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope::Inspect(Box::new(move |component: &C| {
                let _ = reply_tx.send(f(component));
            })))
            .map_err(|_| MailboxError::Closed)?;
        reply_rx.await.map_err(|_| MailboxError::Closed)
    }
}
