#![no_main]
use curp::FieldKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for kind in [FieldKind::Name, FieldKind::Surname] {
        let result = curp::validate_field(data, kind);
        assert!(result.suggestions.len() <= 3);
        assert_eq!(result.valid, result.category.is_none());
    }
});
