// Property tests for the hex parser and pixel decoders
use display_visualizer::visualizer::decoder::{Rgb565, decode_rgb565, invert_mono};
use display_visualizer::visualizer::parser::{HexStyle, format_hex_dump, parse_hex_dump};
use proptest::prelude::*;

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,3}"
}

fn prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("0x"), Just("0X")]
}

fn reference_scale(value: u8, max: f64) -> u8 {
    ((value as f64 / max) * 255.0) as u8
}

proptest! {
    #[test]
    fn parser_round_trips_with_injected_whitespace(
        tokens in proptest::collection::vec(
            (any::<u8>(), prefix(), whitespace(), whitespace(), whitespace()),
            1..128,
        )
    ) {
        let text = tokens
            .iter()
            .map(|(byte, prefix, lead, mid, tail)| {
                format!("{lead}{prefix}{mid}{byte:X}{tail}")
            })
            .collect::<Vec<_>>()
            .join(",");
        let expected: Vec<u8> = tokens.iter().map(|(byte, ..)| *byte).collect();

        prop_assert_eq!(parse_hex_dump(&text).ok(), Some(expected));
    }

    #[test]
    fn firmware_dump_format_parses_back(bytes in proptest::collection::vec(any::<u8>(), 1..256)) {
        for style in [HexStyle::Bare, HexStyle::Prefixed] {
            let text = format_hex_dump(&bytes, style);
            prop_assert_eq!(parse_hex_dump(&text).ok(), Some(bytes.clone()));
        }
    }

    #[test]
    fn inversion_is_self_inverse(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(invert_mono(&invert_mono(&bytes)), bytes);
    }

    #[test]
    fn rgb565_pairs_never_overlap(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let rgb = decode_rgb565(&bytes);
        prop_assert_eq!(rgb.len(), bytes.len() / 2);
        for (i, pixel) in rgb.iter().enumerate() {
            let expected = Rgb565::from_be_bytes(bytes[2 * i], bytes[2 * i + 1]).to_rgb888();
            prop_assert_eq!(*pixel, expected);
        }
    }
}

#[test]
fn rgb565_matches_float_reference_for_every_value() {
    for raw in 0..=u16::MAX {
        let pixel = Rgb565(raw);
        let expected = [
            reference_scale(pixel.red5(), 31.0),
            reference_scale(pixel.green6(), 63.0),
            reference_scale(pixel.blue5(), 31.0),
        ];
        assert_eq!(pixel.to_rgb888(), expected, "raw value {:#06x}", raw);
    }
}

#[test]
fn rgb565_channel_endpoints() {
    assert_eq!(Rgb565(0).to_rgb888(), [0, 0, 0]);
    assert_eq!(Rgb565(0b11111_000000_00000).to_rgb888()[0], 255);
    assert_eq!(Rgb565(0b00000_111111_00000).to_rgb888()[1], 255);
    assert_eq!(Rgb565(0b00000_000000_11111).to_rgb888()[2], 255);
}
