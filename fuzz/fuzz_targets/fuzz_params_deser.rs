#![no_main]

use libfuzzer_sys::fuzz_target;
use riffwav_cli::params::NoiseParams;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(params) = serde_json::from_str::<NoiseParams>(s) {
            // Descriptor validation must reject, never panic.
            let _ = params.descriptor();
        }
    }
});
