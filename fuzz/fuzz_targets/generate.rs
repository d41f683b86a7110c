#![no_main]

use formgen::backend::{UnitConfig, assemble};
use formgen_core::{FieldKind, FormField};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // One field per line; the first byte of each line picks kind and required flag
    if let Ok(s) = std::str::from_utf8(data) {
        let fields: Vec<FormField> = s
            .lines()
            .map(|line| {
                let tag = line.bytes().next().unwrap_or(0);
                let kind = if tag % 2 == 0 { FieldKind::Text } else { FieldKind::Checkbox };
                FormField::new(line, tag % 3 != 0, kind)
            })
            .collect();
        let text = assemble(&fields, "Fuzz", &UnitConfig::default());
        assert!(text.ends_with("export default makeFuzz\n"));
    }
});
