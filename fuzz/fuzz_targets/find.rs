#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = magicsniff::find(&data);
    let _ = magicsniff::archive(&data);
    let _ = magicsniff::document(&data);
});
