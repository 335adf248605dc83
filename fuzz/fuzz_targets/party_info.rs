#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split = 1 + (data[0] as usize) % data.len();
    let id = String::from_utf8_lossy(&data[1..split]).into_owned();
    let extra = String::from_utf8_lossy(&data[split..]).into_owned();

    let party = acvp_kda::PartyInfo {
        id_hex: id,
        ephemeral_hex: Some(extra),
    };

    if let Ok(bytes) = party.encode() {
        let info = acvp_kda::assemble(&bytes, &bytes, 256);
        assert_eq!(info.len(), 2 * bytes.len() + 4);
    }
});
