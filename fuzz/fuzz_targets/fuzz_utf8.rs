#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Differential check against std's validator. The structural validator
    // accepts a superset of std (surrogates and out-of-range scalars pass),
    // so agreement is one-sided in each direction.
    match dupfind::text::Utf8String::from_bytes(data.to_vec()) {
        Ok(s) => {
            if let Ok(std_str) = std::str::from_utf8(data) {
                assert_eq!(s.len(), std_str.chars().count());
            }
            let copy = s.substring(0, s.len()).unwrap();
            assert_eq!(copy.as_bytes(), data);
            assert_eq!(s.chars().count(), s.len());
        }
        Err(_) => {
            // Anything rejected structurally is rejected by std too
            assert!(std::str::from_utf8(data).is_err());
        }
    }
});
