//! Translation from rumqttc events and errors into [`ConnectionEvent`]s.

use ledbridge_domain::event::{ConnectionEvent, ErrorKind};
use ledbridge_domain::payload::Payload;
use ledbridge_domain::topic::{QoS, Topic};
use rumqttc::{ConnectReturnCode, ConnectionError, Event, Packet, SubscribeReasonCode};

/// Map a polled rumqttc event onto a session event.
///
/// Outgoing traffic is the client's own bookkeeping and yields `None`.
pub fn event(event: &Event) -> Option<ConnectionEvent> {
    match event {
        Event::Incoming(packet) => Some(incoming(packet)),
        Event::Outgoing(outgoing) => {
            tracing::trace!(?outgoing, "outgoing packet");
            None
        }
    }
}

fn incoming(packet: &Packet) -> ConnectionEvent {
    match packet {
        Packet::ConnAck(connack) if connack.code == ConnectReturnCode::Success => {
            ConnectionEvent::Connected
        }
        Packet::ConnAck(connack) => ConnectionEvent::Error {
            kind: ErrorKind::ConnectionRefused,
            detail: format!("{:?}", connack.code),
        },
        Packet::SubAck(suback)
            if suback
                .return_codes
                .iter()
                .any(|code| matches!(code, SubscribeReasonCode::Failure)) =>
        {
            ConnectionEvent::Error {
                kind: ErrorKind::Unknown,
                detail: format!("subscription {} rejected by broker", suback.pkid),
            }
        }
        Packet::SubAck(suback) => ConnectionEvent::Subscribed {
            message_id: suback.pkid,
        },
        Packet::UnsubAck(unsuback) => ConnectionEvent::Unsubscribed {
            message_id: unsuback.pkid,
        },
        Packet::PubAck(puback) => ConnectionEvent::Published {
            message_id: puback.pkid,
        },
        Packet::PubComp(pubcomp) => ConnectionEvent::Published {
            message_id: pubcomp.pkid,
        },
        Packet::Publish(publish) => ConnectionEvent::MessageReceived {
            topic: Topic::new(AsRef::<[u8]>::as_ref(&publish.topic).to_vec()),
            payload: Payload::new(publish.payload.to_vec()),
            message_id: publish.pkid,
        },
        Packet::Disconnect => ConnectionEvent::Disconnected,
        Packet::PingResp => ConnectionEvent::Other {
            id: "ping_response",
        },
        Packet::PubRec(_) => ConnectionEvent::Other { id: "publish_received" },
        Packet::PubRel(_) => ConnectionEvent::Other { id: "publish_released" },
        _ => ConnectionEvent::Other {
            id: "unexpected_packet",
        },
    }
}

/// Map a poll failure onto the error event reported to the router.
pub fn connection_error(err: &ConnectionError) -> ConnectionEvent {
    match err {
        ConnectionError::ConnectionRefused(code) => ConnectionEvent::Error {
            kind: ErrorKind::ConnectionRefused,
            detail: format!("{code:?}"),
        },
        ConnectionError::NotConnAck(packet) => ConnectionEvent::Error {
            kind: ErrorKind::Unknown,
            detail: format!("expected CONNACK, got {packet:?}"),
        },
        other => ConnectionEvent::Error {
            kind: ErrorKind::Transport,
            detail: other.to_string(),
        },
    }
}

/// Convert the domain QoS into rumqttc's.
#[must_use]
pub fn qos(qos: QoS) -> rumqttc::QoS {
    match qos {
        QoS::AtMostOnce => rumqttc::QoS::AtMostOnce,
        QoS::AtLeastOnce => rumqttc::QoS::AtLeastOnce,
        QoS::ExactlyOnce => rumqttc::QoS::ExactlyOnce,
    }
}
