//! Fuzz target: `CommandDecoder::feed`
//!
//! Drives arbitrary byte sequences into the streaming host command
//! decoder, split at an arbitrary point, and asserts that splitting a
//! read never changes what comes out.
//!
//! cargo fuzz run fuzz_command_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use socialseat::host::{CommandDecoder, HostCommand, HostFrame};

fuzz_target!(|data: &[u8]| {
    let Some((&split, data)) = data.split_first() else {
        return;
    };

    let mut whole = Vec::<HostFrame>::new();
    CommandDecoder::new().feed(data, |f| whole.push(f));

    let cut = usize::from(split).min(data.len());
    let mut chunked = Vec::<HostFrame>::new();
    let mut decoder = CommandDecoder::new();
    decoder.feed(&data[..cut], |f| chunked.push(f));
    decoder.feed(&data[cut..], |f| chunked.push(f));

    assert_eq!(whole, chunked, "read boundaries must not matter");

    // Every frame maps to a command or is ignored; neither may panic.
    for f in &whole {
        let _ = HostCommand::from_frame(f);
    }
});
