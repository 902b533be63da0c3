use hui_library::constants::FADER_MAX;
use hui_library::parameter::{ChannelParameter, Transport};
use hui_library::transmit::{fader_level_messages, fader_touch_messages, switch_messages};
use hui_library::{HuiEvent, HuiMessage, Parameter, Parser, Side, Surface, ZoneAndPort};
use proptest::prelude::*;

fn sysex(payload: &[u8]) -> Vec<u8> {
    let mut raw = vec![0xF0, 0x00, 0x00, 0x66, 0x05, 0x00];
    raw.extend_from_slice(payload);
    raw.push(0xF7);
    raw
}

fn feed(parser: &mut Parser, messages: &[HuiMessage]) -> Vec<HuiEvent> {
    messages
        .iter()
        .filter_map(|m| parser.midi_in(&m.to_bytes()))
        .collect()
}

#[test]
fn decode_switch() {
    let mut parser = Parser::new();
    assert_eq!(parser.midi_in(&[0xB0, 0x0C, 0x05]), None);
    let event = parser.midi_in(&[0xB0, 0x2C, 0x44]).unwrap();
    assert_eq!(
        event,
        HuiEvent::Switch {
            zone: 0x05,
            port: 0x4,
            state: true
        }
    );
    assert_eq!(
        event.parameter(),
        Parameter::channel_strip(5, ChannelParameter::Auto)
    );
}

#[test]
fn decode_fader() {
    let mut parser = Parser::new();
    assert_eq!(parser.midi_in(&[0xB0, 0x03, 0x10]), None);
    assert_eq!(
        parser.midi_in(&[0xB0, 0x23, 0x00]),
        Some(HuiEvent::FaderLevel {
            channel: 3,
            level: 2048
        })
    );
}

#[test]
fn decode_level_meter() {
    let mut parser = Parser::new();
    assert_eq!(
        parser.midi_in(&[0xA0, 0x02, 0x11]),
        Some(HuiEvent::LevelMeter {
            channel: 2,
            side: Side::Right,
            level: 1
        })
    );
}

#[test]
fn ping_round_trip() {
    let mut surface = Surface::new();
    assert_eq!(surface.midi_in(&[0x90, 0x00, 0x00]), Some(HuiEvent::PingReceived));
    let replies: Vec<Vec<u8>> = surface
        .take_outbound()
        .iter()
        .map(HuiMessage::to_bytes)
        .collect();
    assert_eq!(replies, vec![vec![0x90, 0x00, 0x7F]]);
}

#[test]
fn interleaved_switches_lose_the_first_zone() {
    let first = switch_messages(Parameter::Transport(Transport::Play), true);
    let second = switch_messages(ZoneAndPort::new(0x02, 0x2), true);

    let mut parser = Parser::new();
    let events = feed(&mut parser, &[first[0], second[0], first[1], second[1]]);

    // The second zone select replaces the first; the play port lands in zone
    // 2 and the second port has nothing left to pair with.
    assert_eq!(
        events,
        vec![HuiEvent::Switch {
            zone: 0x02,
            port: 0x4,
            state: true
        }]
    );
}

#[test]
fn large_display_chunks_accumulate() {
    let mut payload = vec![0x12, 0x00];
    payload.extend_from_slice(b"Session   ");
    payload.push(0x05);
    payload.extend_from_slice(b"Mix 1     ");

    let mut surface = Surface::new();
    let event = surface.midi_in(&sysex(&payload)).unwrap();
    let HuiEvent::LargeDisplay { components } = event else {
        panic!("expected large display, got {event:?}");
    };
    assert_eq!(components[0], "Session   ");
    assert_eq!(components[5], "Mix 1     ");
    assert_eq!(components[1], "          ");

    let mut update = vec![0x12, 0x01];
    update.extend_from_slice(b"Edit      ");
    surface.midi_in(&sysex(&update)).unwrap();

    let display = &surface.state().large_display;
    assert_eq!(display.top(), format!("{:<40}", "Session   Edit"));
    assert_eq!(display.components()[5], "Mix 1     ");
}

#[test]
fn channel_names_are_four_characters() {
    let mut surface = Surface::new();
    let mut payload = vec![0x10, 0x03];
    payload.extend_from_slice(b"Kick");
    assert_eq!(
        surface.midi_in(&sysex(&payload)),
        Some(HuiEvent::ChannelName {
            channel: 3,
            text: "Kick".to_string()
        })
    );
    assert_eq!(surface.state().channel_strips[3].name(), "Kick");

    let mut short = vec![0x10, 0x03];
    short.extend_from_slice(b"Sn");
    assert_eq!(surface.midi_in(&sysex(&short)), None);
    assert_eq!(surface.state().channel_strips[3].name(), "Kick");
}

#[test]
fn malformed_messages_change_nothing() {
    let mut surface = Surface::new();
    surface.midi_in(&[0xB0, 0x0C, 0x0E]);
    surface.midi_in(&[0xB0, 0x2C, 0x44]);
    let before = surface.state().clone();

    for raw in [
        vec![0xA0, 0x09, 0x01],
        vec![0xA0, 0x01, 0x2F],
        vec![0xB0, 0x50, 0x01],
        vec![0xF0, 0x00, 0x00, 0x66, 0x05, 0x00, 0x12, 0x08, 0x41, 0xF7],
        vec![0xF0, 0x00, 0x00, 0x67, 0x05, 0x00, 0x10, 0x00, 0x41, 0x41, 0x41, 0x41, 0xF7],
        vec![0x80, 0x3C, 0x00],
    ] {
        assert_eq!(surface.midi_in(&raw), None, "{raw:02X?}");
    }
    assert_eq!(surface.state(), &before);
}

#[test]
fn encoded_switches_decode_to_the_same_parameter() {
    let mut parser = Parser::new();
    for &param in Parameter::all() {
        for state in [false, true] {
            let events = feed(&mut parser, &switch_messages(param, state));
            let address = param.zone_and_port();
            assert_eq!(
                events,
                vec![HuiEvent::Switch {
                    zone: address.zone,
                    port: address.port,
                    state
                }],
                "{param}"
            );
            assert_eq!(events[0].parameter(), Some(param));
        }
    }
}

#[test]
fn fader_touch_encoding() {
    let bytes: Vec<Vec<u8>> = fader_touch_messages(0, true)
        .unwrap()
        .iter()
        .map(HuiMessage::to_bytes)
        .collect();
    assert_eq!(bytes, vec![vec![0xB0, 0x0F, 0x00], vec![0xB0, 0x2F, 0x40]]);
}

proptest! {
    #[test]
    fn fader_levels_round_trip(channel in 0u8..8, level in 0u16..=FADER_MAX) {
        let mut parser = Parser::new();
        let messages = fader_level_messages(channel, level).unwrap();
        prop_assert_eq!(
            feed(&mut parser, &messages),
            vec![HuiEvent::FaderLevel { channel, level }]
        );
    }

    #[test]
    fn addresses_resolve_to_one_parameter(zone in 0u8..0x20, port in 0u8..0x10) {
        if let Some(param) = Parameter::from_zone_port(zone, port) {
            prop_assert_eq!(param.zone_and_port(), ZoneAndPort::new(zone, port));
        }
    }
}
