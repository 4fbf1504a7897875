use std::sync::Once;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Routes the crate's trace events into the test output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let subscriber =
            FmtSubscriber::builder().with_max_level(Level::TRACE).with_test_writer().finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    });
}
