//! # ledbridge-adapter-mqtt
//!
//! MQTT adapter — owns the broker session and feeds its events to the
//! [`EventRouter`].
//!
//! ## How it works
//!
//! [`MqttTransport::connect`] builds a rumqttc client from [`MqttConfig`].
//! No IO happens until [`MqttTransport::start`] polls the event loop. Each
//! polled packet is translated into a `ConnectionEvent` and handed to the
//! router on the polling task, one at a time and in arrival order.
//!
//! When the session fails, the router is told (`Error`, then `Disconnected`
//! if a session had been established), the loop waits
//! [`MqttConfig::reconnect_delay`], and polling resumes, which reconnects.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `ledbridge-app` and `ledbridge-domain`.

mod config;
mod error;
mod session;
mod translate;

pub use config::{BrokerEndpoint, DEFAULT_PORT, MqttConfig};
pub use error::MqttError;
pub use session::MqttSession;

use std::future::Future;
use std::time::Duration;

use ledbridge_app::ports::OutputPin;
use ledbridge_app::router::EventRouter;
use ledbridge_domain::event::ConnectionEvent;
use rumqttc::{AsyncClient, ConnectionError, Event, EventLoop, MqttOptions, Outgoing};

/// How long shutdown waits for the DISCONNECT to be written.
const DISCONNECT_FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// A configured MQTT session and its event loop.
pub struct MqttTransport {
    config: MqttConfig,
    session: MqttSession,
    eventloop: EventLoop,
}

impl MqttTransport {
    /// Build the client for the configured broker.
    ///
    /// # Errors
    ///
    /// Returns an error if the broker URL is invalid.
    pub fn connect(config: MqttConfig) -> Result<Self, MqttError> {
        let endpoint = config.broker_endpoint()?;
        tracing::info!(
            host = %endpoint.host,
            port = endpoint.port,
            client_id = %config.client_id,
            "configuring MQTT client"
        );

        let mut options = MqttOptions::new(config.client_id.clone(), endpoint.host, endpoint.port);
        options.set_keep_alive(config.keep_alive());
        options.set_clean_session(true);

        let (client, eventloop) = AsyncClient::new(options, config.request_capacity);

        Ok(Self {
            config,
            session: MqttSession::new(client),
            eventloop,
        })
    }

    /// Poll the session and dispatch its events until `shutdown` resolves.
    ///
    /// On shutdown a DISCONNECT is sent to the broker before returning.
    pub async fn start<P: OutputPin>(
        mut self,
        router: &mut EventRouter<P>,
        shutdown: impl Future<Output = ()>,
    ) {
        let mut shutdown = std::pin::pin!(shutdown);
        let mut linked = false;

        tracing::info!("starting MQTT session");
        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                polled = self.eventloop.poll() => match polled {
                    Ok(event) => self.dispatch(&event, router, &mut linked),
                    Err(err) => {
                        self.report_failure(&err, router, &mut linked);
                        tracing::info!(
                            delay_secs = self.config.reconnect_delay_secs,
                            "reconnecting after delay"
                        );
                        tokio::select! {
                            () = &mut shutdown => break,
                            () = tokio::time::sleep(self.config.reconnect_delay()) => {}
                        }
                    }
                },
            }
        }

        self.disconnect(linked).await;
    }

    fn dispatch<P: OutputPin>(
        &self,
        event: &Event,
        router: &mut EventRouter<P>,
        linked: &mut bool,
    ) {
        let Some(event) = translate::event(event) else {
            return;
        };
        match event {
            ConnectionEvent::Connected => *linked = true,
            ConnectionEvent::Disconnected => *linked = false,
            _ => {}
        }
        router.handle(event, &self.session);
    }

    fn report_failure<P: OutputPin>(
        &self,
        err: &ConnectionError,
        router: &mut EventRouter<P>,
        linked: &mut bool,
    ) {
        router.handle(translate::connection_error(err), &self.session);
        if std::mem::take(linked) {
            router.handle(ConnectionEvent::Disconnected, &self.session);
        }
    }

    async fn disconnect(mut self, linked: bool) {
        if !linked {
            tracing::info!("shutdown requested, no session to close");
            return;
        }

        tracing::info!("shutdown requested, disconnecting from broker");
        if let Err(err) = self.session.disconnect() {
            tracing::warn!(%err, "failed to queue disconnect");
            return;
        }

        let flush = async {
            loop {
                match self.eventloop.poll().await {
                    Ok(Event::Outgoing(Outgoing::Disconnect)) | Err(_) => break,
                    Ok(_) => {}
                }
            }
        };
        if tokio::time::timeout(DISCONNECT_FLUSH_TIMEOUT, flush).await.is_err() {
            tracing::warn!("timed out waiting for disconnect to be sent");
        }
    }
}
