#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runeflip::{InvalidInputMode, ReverseOptions, Reverser};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    replace_invalid: bool,
    bytes: &'a [u8],
}

fn check(input: &Input<'_>) {
    let mode = if input.replace_invalid {
        InvalidInputMode::Replace
    } else {
        InvalidInputMode::Reject
    };
    let reverser = Reverser::new(ReverseOptions { invalid_input: mode });

    match (std::str::from_utf8(input.bytes), reverser.reverse(input.bytes)) {
        (Ok(text), Ok(once)) => {
            assert_eq!(once.len(), text.len());
            assert!(once.chars().eq(text.chars().rev()));
            let twice = reverser.reverse(&once).expect("reversed text is valid UTF-8");
            assert_eq!(twice, text);
        }
        (Err(_), Ok(once)) => {
            assert_eq!(mode, InvalidInputMode::Replace);
            let lossy = String::from_utf8_lossy(input.bytes);
            assert!(once.chars().eq(lossy.chars().rev()));
        }
        (Err(cause), Err(err)) => {
            assert_eq!(mode, InvalidInputMode::Reject);
            assert_eq!(err.input(), input.bytes);
            assert_eq!(err.valid_up_to(), cause.valid_up_to());
            assert_eq!(err.error_len(), cause.error_len());
        }
        (Ok(_), Err(err)) => panic!("valid UTF-8 rejected: {err}"),
    }
}

fuzz_target!(|input: Input<'_>| check(&input));
