use crate::logging;

#[test]
fn init_once() {
    assert!(logging::init(tracing_subscriber::fmt::layer().with_test_writer()).is_ok());
    assert!(logging::init(tracing_subscriber::fmt::layer().with_test_writer()).is_err());
}
