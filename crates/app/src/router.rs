//! Event router: reacts to session events one at a time.
//!
//! The transport hands every [`ConnectionEvent`] to [`EventRouter::handle`]
//! in delivery order. The router tracks the session lifecycle, requests the
//! command subscription once connected, and applies recognised commands to
//! the output once that subscription is acknowledged.
//!
//! `handle` never blocks and never fails: each event's problems end with
//! that event and are reported through logs and the returned
//! [`RouterOutcome`].

use ledbridge_domain::command::{Action, IgnoreReason, interpret};
use ledbridge_domain::event::{ConnectionEvent, ErrorKind, MessageId};
use ledbridge_domain::output::{OutputLevel, PinId};
use ledbridge_domain::payload::Payload;
use ledbridge_domain::topic::{COMMAND_QOS, COMMAND_TOPIC, Topic};

use crate::ports::{OutputPin, SessionHandle};
use crate::session::SessionState;

/// What the router did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterOutcome {
    /// The command subscription was requested.
    Subscribing,
    /// The subscription request could not be queued.
    SubscribeFailed,
    /// The command subscription was acknowledged; commands are now applied.
    Ready,
    /// A command drove the output to this level.
    OutputSet(OutputLevel),
    /// A message was interpreted but did not change the output.
    Ignored(IgnoreReason),
    /// A message arrived before the command subscription was acknowledged.
    NotReady,
    /// The session was lost; the output keeps its level.
    SessionLost,
    /// A session error was logged.
    ErrorReported(ErrorKind),
    /// The event was only logged.
    Logged,
}

/// Single-writer owner of the output state.
pub struct EventRouter<P> {
    output: P,
    pin: PinId,
    level: OutputLevel,
    state: SessionState,
}

impl<P: OutputPin> EventRouter<P> {
    /// Create a router for `pin` and drive the pin to the initial (off) level.
    pub fn new(output: P, pin: PinId) -> Self {
        let level = OutputLevel::default();
        output.set_output(pin, level);
        tracing::info!(%pin, %level, "output initialised");
        Self {
            output,
            pin,
            level,
            state: SessionState::Disconnected,
        }
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Level of the output after the last recognised command.
    #[must_use]
    pub fn level(&self) -> OutputLevel {
        self.level
    }

    /// Pin driven by this router.
    #[must_use]
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// The output adapter.
    #[must_use]
    pub fn output(&self) -> &P {
        &self.output
    }

    /// React to one session event.
    pub fn handle(
        &mut self,
        event: ConnectionEvent,
        session: &impl SessionHandle,
    ) -> RouterOutcome {
        tracing::debug!(event = event.name(), state = %self.state, "dispatching session event");

        match event {
            ConnectionEvent::Connected => self.on_connected(session),
            ConnectionEvent::Disconnected => self.on_disconnected(),
            ConnectionEvent::Subscribed { message_id } => self.on_subscribed(message_id),
            ConnectionEvent::Unsubscribed { message_id } => {
                tracing::info!(message_id, "unsubscription acknowledged");
                RouterOutcome::Logged
            }
            ConnectionEvent::Published { message_id } => {
                tracing::info!(message_id, "publish acknowledged");
                RouterOutcome::Logged
            }
            ConnectionEvent::MessageReceived {
                topic,
                payload,
                message_id,
            } => self.on_message(&topic, &payload, message_id),
            ConnectionEvent::Error { kind, detail } => Self::on_error(kind, &detail),
            ConnectionEvent::Other { id } => {
                tracing::info!(id, "other session event");
                RouterOutcome::Logged
            }
        }
    }

    fn on_connected(&mut self, session: &impl SessionHandle) -> RouterOutcome {
        tracing::info!("connected to broker");
        match session.subscribe(COMMAND_TOPIC, COMMAND_QOS) {
            Ok(()) => {
                tracing::debug!(
                    topic = COMMAND_TOPIC,
                    qos = COMMAND_QOS.level(),
                    "subscription requested"
                );
                self.state = SessionState::AwaitingSubscription;
                RouterOutcome::Subscribing
            }
            Err(err) => {
                tracing::error!(
                    %err,
                    topic = COMMAND_TOPIC,
                    "failed to request command subscription"
                );
                self.state = SessionState::Disconnected;
                RouterOutcome::SubscribeFailed
            }
        }
    }

    fn on_disconnected(&mut self) -> RouterOutcome {
        tracing::info!(level = %self.level, "disconnected from broker, output left unchanged");
        self.state = SessionState::Disconnected;
        RouterOutcome::SessionLost
    }

    fn on_subscribed(&mut self, message_id: MessageId) -> RouterOutcome {
        match self.state {
            SessionState::AwaitingSubscription => {
                tracing::info!(message_id, topic = COMMAND_TOPIC, "subscription confirmed");
                tracing::info!("system ready, waiting for output commands");
                self.state = SessionState::Ready;
                RouterOutcome::Ready
            }
            SessionState::Ready => {
                tracing::debug!(message_id, "duplicate subscription acknowledgement");
                RouterOutcome::Logged
            }
            SessionState::Disconnected => {
                tracing::warn!(message_id, "subscription acknowledged without a session, ignoring");
                RouterOutcome::Logged
            }
        }
    }

    fn on_message(
        &mut self,
        topic: &Topic,
        payload: &Payload,
        message_id: MessageId,
    ) -> RouterOutcome {
        tracing::info!(
            message_id,
            %topic,
            %payload,
            payload_len = payload.len(),
            "message received"
        );

        if !self.state.accepts_commands() {
            tracing::warn!(
                state = %self.state,
                "message arrived before the command subscription, ignoring"
            );
            return RouterOutcome::NotReady;
        }

        match interpret(topic, payload) {
            Action::SetOutput(level) => {
                tracing::info!(pin = %self.pin, %level, "applying output command");
                self.output.set_output(self.pin, level);
                self.level = level;
                RouterOutcome::OutputSet(level)
            }
            Action::Ignore(reason @ IgnoreReason::WrongTopic) => {
                tracing::info!(%topic, "message on unexpected topic, ignoring");
                RouterOutcome::Ignored(reason)
            }
            Action::Ignore(reason @ IgnoreReason::UnrecognizedPayload) => {
                tracing::warn!(%payload, "unknown command, no action taken");
                RouterOutcome::Ignored(reason)
            }
        }
    }

    fn on_error(kind: ErrorKind, detail: &str) -> RouterOutcome {
        match kind {
            ErrorKind::Transport => {
                tracing::error!(%kind, detail, "transport error reported by session");
            }
            ErrorKind::ConnectionRefused => {
                tracing::error!(%kind, detail, "broker refused the connection");
            }
            ErrorKind::Unknown => {
                tracing::warn!(%kind, detail, "unknown session error");
            }
        }
        RouterOutcome::ErrorReported(kind)
    }
}
