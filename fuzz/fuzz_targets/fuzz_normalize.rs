// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fuzz target for lexical path normalization

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::{Component, Path};
use txtdir_core::path::{absolutize_from, normalize};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let once = normalize(input);

        // Normalizing twice changes nothing
        assert_eq!(normalize(&once), once);

        // No `.` survives, and `..` only ever leads a relative path
        let mut seen_normal = false;
        for comp in once.components() {
            match comp {
                Component::CurDir => assert_eq!(once, Path::new(".")),
                Component::ParentDir => assert!(!seen_normal && !once.is_absolute()),
                Component::Normal(_) => seen_normal = true,
                _ => {}
            }
        }

        let abs = absolutize_from(input, "/base/dir");
        assert!(abs.is_absolute());
    }
});
