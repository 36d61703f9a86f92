use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use litspec_cli::LitspecCli;
use litspec_core::LitspecError;
use litspec_core::LitspecResult;
use litspec_core::Settings;
use litspec_core::Warning;
use litspec_core::build;
use owo_colors::OwoColorize;

mod logging;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = match LitspecCli::try_parse() {
		Ok(args) => args,
		Err(e) => {
			if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
				e.exit();
			}

			// Usage errors exit with 1 rather than clap's default of 2.
			let _ = e.print();
			process::exit(1);
		}
	};

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	logging::init(args.verbose, use_color);

	match run(&args) {
		Ok(warnings) => {
			for warning in &warnings {
				print_warning(warning);
			}
		}
		Err(e) => {
			let report: miette::Report = e.into();
			eprintln!("{report:?}");
			process::exit(1);
		}
	}
}

fn resolve_root(args: &LitspecCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run(args: &LitspecCli) -> LitspecResult<Vec<Warning>> {
	let root = resolve_root(args);
	let settings = Settings::resolve(&root, args.format.into(), args.overrides())?;
	let output = build(&settings)?;

	let mut stdout = std::io::stdout().lock();
	stdout
		.write_all(output.text.as_bytes())
		.and_then(|()| stdout.flush())
		.map_err(LitspecError::Io)?;

	Ok(output.warnings)
}

fn print_warning(warning: &Warning) {
	eprintln!("{} {warning}", colored!("warning:", yellow));
}
