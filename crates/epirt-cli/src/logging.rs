use env_logger::Env;
use log::LevelFilter;

/// Installs the global logger.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `--verbose`.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if verbose && std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false);
    // a second init in the same process is harmless
    let _ = builder.try_init();
}
