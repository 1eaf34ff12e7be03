#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(desc) = magicsniff::find_executable(&data) {
        let _ = desc.to_string();
    }
});
