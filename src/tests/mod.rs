mod picker_tests;

static LOGGER: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logger() {
    LOGGER.call_once(|| {
        // another test harness may have installed a logger already
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}
