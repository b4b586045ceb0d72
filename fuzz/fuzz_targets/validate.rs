#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = curp::validate_curp(data);
    assert_eq!(result.valid, result.errors.is_empty());
    if result.valid {
        assert_eq!(Some(result.curp.clone()), result.reassemble());
    }
});
