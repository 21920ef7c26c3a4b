//! Fuzz target for key token parsing
//!
//! Arbitrary strings are parsed as key tokens and turned into events.
//!
//! # Invariants
//!
//! - NEVER panic on any token
//! - A parsed key re-encodes to a token that parses back to the same key
//! - Tokens that fail to parse become paste events carrying the token text

#![no_main]

use libfuzzer_sys::fuzz_target;
use searchform_app::{AppEvent, KeyInput};

fuzz_target!(|token: &str| {
    match token.parse::<KeyInput>() {
        Ok(key) => {
            assert_eq!(key.token().parse::<KeyInput>(), Ok(key));
            assert_eq!(AppEvent::from_token(token), AppEvent::Key(key));
        },
        Err(_) => {
            assert_eq!(AppEvent::from_token(token), AppEvent::Paste(token.to_string()));
        },
    }
});
