#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for name in ["a.zip", "a.exe", "a.png", "a.txt", "noext"] {
        let _ = magicsniff::match_ext(name, &data);
    }
});
