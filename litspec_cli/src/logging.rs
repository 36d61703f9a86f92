use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Install the stderr subscriber. `RUST_LOG` overrides the default level,
/// which is `warn`, or `debug` with `--verbose`.
pub fn init(verbose: bool, use_color: bool) {
	let level = if verbose {
		LevelFilter::DEBUG
	} else {
		LevelFilter::WARN
	};

	let filter = EnvFilter::builder()
		.with_default_directive(level.into())
		.from_env_lossy();

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}
