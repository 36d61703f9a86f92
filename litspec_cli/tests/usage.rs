mod common;

use std::path::PathBuf;

use clap::Parser;
use litspec_cli::Format;
use litspec_cli::LitspecCli;
use litspec_core::AnyEmptyResult;
use litspec_core::Target;
use rstest::rstest;

#[test]
fn missing_format_is_a_usage_error() {
	common::litspec_cmd()
		.assert()
		.code(1)
		.stdout("")
		.stderr(predicates::str::contains("Usage"));
}

#[test]
fn unknown_format_is_a_usage_error() {
	common::litspec_cmd()
		.arg("pdf")
		.assert()
		.code(1)
		.stdout("")
		.stderr(predicates::str::contains("invalid value 'pdf'"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
	common::litspec_cmd()
		.arg("html")
		.arg("markdown")
		.assert()
		.code(1)
		.stderr(predicates::str::contains("unexpected argument"));
}

#[test]
fn help_succeeds() {
	common::litspec_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicates::str::contains("markdown"))
		.stdout(predicates::str::contains("--renderer"));
}

#[rstest]
#[case::markdown("markdown", Format::Markdown, Target::Markdown)]
#[case::html("html", Format::Html, Target::Html)]
fn parses_format(
	#[case] arg: &str,
	#[case] format: Format,
	#[case] target: Target,
) -> AnyEmptyResult {
	let cli = LitspecCli::try_parse_from(["litspec", arg])?;
	assert_eq!(cli.format, format);
	assert_eq!(Target::from(cli.format), target);

	Ok(())
}

#[test]
fn flags_become_overrides() -> AnyEmptyResult {
	let cli = LitspecCli::try_parse_from([
		"litspec",
		"html",
		"--input",
		"docs/spec.md",
		"-t",
		"page.html",
		"--renderer",
		"pandoc -f commonmark",
	])?;
	let overrides = cli.overrides();

	assert_eq!(overrides.input, Some(PathBuf::from("docs/spec.md")));
	assert_eq!(overrides.template, Some(PathBuf::from("page.html")));
	assert_eq!(overrides.renderer.as_deref(), Some("pandoc -f commonmark"));

	Ok(())
}

#[test]
fn missing_input_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.assert()
		.code(1)
		.stdout("")
		.stderr(predicates::str::contains("input file not found"));

	Ok(())
}

#[test]
fn invalid_config_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("litspec.toml"), "renderer = [\n")?;

	common::litspec_cmd()
		.arg("markdown")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}
