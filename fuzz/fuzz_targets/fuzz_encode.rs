#![no_main]

use libfuzzer_sys::fuzz_target;
use riffwav_encoder::{encode, AudioStreamDescriptor, HEADER_LEN};

// Layout: channels (2 bytes), sample rate (4), bits (2), then i32 samples.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let descriptor = AudioStreamDescriptor {
        channels: u16::from_le_bytes([data[0], data[1]]),
        sample_rate: u32::from_le_bytes([data[2], data[3], data[4], data[5]]),
        bits_per_sample: u16::from_le_bytes([data[6], data[7]]),
    };
    let samples: Vec<i32> = data[8..]
        .chunks_exact(4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    if let Ok(bytes) = encode(&descriptor, &samples) {
        let chunk_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let data_size = u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]) as usize;
        assert_eq!(chunk_size, bytes.len() - 8);
        assert_eq!(data_size, bytes.len() - HEADER_LEN);
    }
});
