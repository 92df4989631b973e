mod evaluate;
mod util;

/// Route `log` output through the test harness. Set `RUST_LOG=trace`
/// to see scanned tokens and folds.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
