#![no_main]
use libfuzzer_sys::fuzz_target;
use omitempty::{Options, SequenceCheck, try_prune};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = omitempty::json::from_str(s) {
            let opts = Options::new()
                .with_sequence_check(SequenceCheck::AfterPrune)
                .with_max_depth(64);
            if let Ok(once) = try_prune(&value, &opts) {
                let twice = try_prune(&once, &opts).expect("pruned tree is no deeper than its input");
                assert_eq!(once, twice);
            }
        }
    }
});
