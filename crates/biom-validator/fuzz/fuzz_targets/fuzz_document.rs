//! Fuzz target for document loading and validation.
//!
//! This fuzzer tests that the validator:
//! 1. Never panics on any input bytes
//! 2. Returns the same first failure in fail-fast and report modes

#![no_main]

use biom_validator::{BiomValidator, Document, valid_biom};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 100_000 {
        return;
    }

    if let Ok(doc) = Document::from_reader(data) {
        let fail_fast = valid_biom(&doc).err();
        let report = BiomValidator::new().report(&doc);
        assert_eq!(fail_fast.as_ref(), report.first_failure());

        let _ = BiomValidator::new().strict(true).validate(&doc);
    }
});
