#![no_main]

use libfuzzer_sys::fuzz_target;

use epicurve::io::read_csv_from_bytes;

// The reader must never panic on arbitrary input; errors are fine.
fuzz_target!(|data: &[u8]| {
    if let Ok(series) = read_csv_from_bytes(data, "fuzz") {
        let _ = series.validate();
        let _ = series.actual_counts();
        let _ = series.labels();
    }
});
