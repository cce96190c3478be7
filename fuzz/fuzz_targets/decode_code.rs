#![no_main]

use codec::{decode_save, preview_code, CodecLimits};
use libfuzzer_sys::fuzz_target;
use registry::Registry;

fuzz_target!(|data: &[u8]| {
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };
    let registry = Registry::standard();
    let limits = CodecLimits::default();

    // Neither path may panic on arbitrary text.
    let _ = decode_save(&registry, &limits, code);
    let _ = preview_code(&registry, code);
});
