#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = acvp_kda::process(data, &acvp_kda::HkdfBackend::new());
});
