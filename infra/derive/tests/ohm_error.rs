#[test]
fn ohm_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ohm_error_pass.rs");
}
