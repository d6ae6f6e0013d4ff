/// Routes `log` output through the test harness so that failures show the diagnostics emitted by
/// the code under test.
pub fn init() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
