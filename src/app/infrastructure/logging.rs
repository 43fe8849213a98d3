use env_logger::Env;

/// Install the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let env = Env::default().default_filter_or("info");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Logger already initialised: {}", e);
    }
}
