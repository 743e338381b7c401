//! Command interpretation — turns a delivered message into a device action.
//!
//! [`interpret`] is a pure, total function. Messages that are not commands
//! produce [`Action::Ignore`] rather than an error.

use std::fmt;

use crate::output::OutputLevel;
use crate::payload::Payload;
use crate::topic::Topic;

/// Payload that switches the output on.
pub const ON_PAYLOAD: &[u8] = b"1";

/// Payload that switches the output off.
pub const OFF_PAYLOAD: &[u8] = b"0";

/// What the device should do in response to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Drive the output to the given level.
    SetOutput(OutputLevel),
    /// Leave the output untouched.
    Ignore(IgnoreReason),
}

/// Why a message did not produce a device action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The message was not published on the command topic.
    WrongTopic,
    /// The command topic carried something other than `"1"` or `"0"`.
    UnrecognizedPayload,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTopic => f.write_str("wrong_topic"),
            Self::UnrecognizedPayload => f.write_str("unrecognized_payload"),
        }
    }
}

/// Decide which action a `(topic, payload)` pair implies.
///
/// The first matching rule wins:
/// 1. topic is not exactly the command topic → [`IgnoreReason::WrongTopic`]
/// 2. payload is exactly `"1"` → [`OutputLevel::On`]
/// 3. payload is exactly `"0"` → [`OutputLevel::Off`]
/// 4. anything else → [`IgnoreReason::UnrecognizedPayload`]
#[must_use]
pub fn interpret(topic: &Topic, payload: &Payload) -> Action {
    if !topic.is_command() {
        return Action::Ignore(IgnoreReason::WrongTopic);
    }

    if payload.matches(ON_PAYLOAD) {
        Action::SetOutput(OutputLevel::On)
    } else if payload.matches(OFF_PAYLOAD) {
        Action::SetOutput(OutputLevel::Off)
    } else {
        Action::Ignore(IgnoreReason::UnrecognizedPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::COMMAND_TOPIC;

    fn on_command_topic(payload: &[u8]) -> Action {
        interpret(&Topic::command(), &Payload::from(payload))
    }

    #[test]
    fn should_turn_on_for_one() {
        assert_eq!(on_command_topic(b"1"), Action::SetOutput(OutputLevel::On));
    }

    #[test]
    fn should_turn_off_for_zero() {
        assert_eq!(on_command_topic(b"0"), Action::SetOutput(OutputLevel::Off));
    }

    #[test]
    fn should_ignore_multi_byte_payloads_starting_with_a_command() {
        let payloads: [&[u8]; 7] = [b"10", b"01", b"11", b"00", b"1 ", b"0\n", b"1\0"];
        for payload in payloads {
            assert_eq!(
                on_command_topic(payload),
                Action::Ignore(IgnoreReason::UnrecognizedPayload),
                "payload {payload:?}"
            );
        }
    }

    #[test]
    fn should_ignore_empty_payload() {
        assert_eq!(
            on_command_topic(b""),
            Action::Ignore(IgnoreReason::UnrecognizedPayload)
        );
    }

    #[test]
    fn should_ignore_every_other_single_byte() {
        for byte in (0..=u8::MAX).filter(|b| *b != b'0' && *b != b'1') {
            assert_eq!(
                on_command_topic(&[byte]),
                Action::Ignore(IgnoreReason::UnrecognizedPayload),
                "byte {byte:#04x}"
            );
        }
    }

    #[test]
    fn should_ignore_other_topics_regardless_of_payload() {
        let extended = format!("{COMMAND_TOPIC}/extra");
        let topics = [
            "/other/topic",
            "",
            "/ifpe/ads/embarcados/esp32/le",
            "/ifpe/ads/embarcados/esp32/led ",
            extended.as_str(),
        ];
        for topic in topics {
            for payload in ["1", "0", "garbage"] {
                assert_eq!(
                    interpret(&Topic::from(topic), &Payload::from(payload)),
                    Action::Ignore(IgnoreReason::WrongTopic),
                    "topic {topic:?} payload {payload:?}"
                );
            }
        }
    }

    #[test]
    fn should_check_topic_before_payload() {
        assert_eq!(
            interpret(&Topic::from("/other/topic"), &Payload::from("garbage")),
            Action::Ignore(IgnoreReason::WrongTopic)
        );
    }

    #[test]
    fn should_return_same_action_for_same_input() {
        let topic = Topic::command();
        let payload = Payload::from("1");
        assert_eq!(interpret(&topic, &payload), interpret(&topic, &payload));
    }
}
