#![no_main]

use coldpress::store::ObservationStore;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First 8 bytes become the submitted value, the rest the group label.
    // Validation must reject bad input without panicking.
    if data.len() < 8 {
        return;
    }
    let (value_bytes, label_bytes) = data.split_at(8);
    let value = f64::from_le_bytes(value_bytes.try_into().unwrap());

    if let Ok(label) = std::str::from_utf8(label_bytes) {
        let mut store = ObservationStore::new();
        let _ = store.append(label, value);
    }
});
