use env_logger::Env;

/// Route `log` records to stderr; `RUST_LOG` overrides the default filter
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(verbose)
        .init();
}
