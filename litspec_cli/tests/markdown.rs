mod common;

use litspec_core::AnyEmptyResult;
use litspec_core::extract_metadata;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn converts_fixture_to_markdown() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::copy_fixture("basic", tmp.path());

	let assert = common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.assert()
		.success()
		.stderr("");
	let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

	assert!(stdout.starts_with("---\ntitle: Example Spec\n"));
	assert!(stdout.contains(
		"# <a id=\"introduction\"></a><span class=\"number\">1</span> Introduction\n"
	));
	assert!(stdout.contains(
		"## <a id=\"paragraphs\"></a><span class=\"number\">2.1</span> Paragraphs\n"
	));
	assert!(stdout.contains("<span class=\"number\"></span> Appendix: history {-}\n"));
	assert!(stdout.contains("A\n[paragraph](@paragraph) is a sequence"));
	assert!(stdout.contains("<div class=\"example\" id=\"example-2\" data-section=\"Paragraphs\">"));
	assert!(stdout.contains("\u{2423}\u{2423}aaa\n\u{2423}bbb\n"));
	assert!(!stdout.contains("dingus"));
	assert!(stdout.ends_with(
		"[Introduction]: #introduction\n[What is this?]: #what-is-this-\n[paragraph]: \
		 #paragraph\n[Why write it down?]: #why-write-it-down-\n[Blocks]: #blocks\n[Paragraphs]: \
		 #paragraphs\n[Appendix: history]: #appendix-history\n"
	));

	let metadata = extract_metadata(&stdout);
	assert_eq!(metadata["title"], "Example Spec");
	assert_eq!(metadata["author"], "A. Writer");
	assert_eq!(metadata["version"], "0.1");

	Ok(())
}

#[test]
fn markdown_does_not_need_template_or_renderer() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("spec.txt"),
		"title: Demo\n...\n# Intro\n.\n*hi*\n.\n<em>hi</em>\n.\n",
	)?;

	common::litspec_cmd()
		.arg("markdown")
		.arg("--path")
		.arg(tmp.path())
		.arg("--renderer")
		.arg("litspec-no-such-renderer")
		.assert()
		.success()
		.stdout(predicates::str::contains("Example 1"))
		.stdout(predicates::str::contains("` markdown\n*hi*\n`"))
		.stdout(predicates::str::contains("` html\n<em>hi</em>\n`"));

	Ok(())
}

#[test]
fn custom_input_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("docs"))?;
	std::fs::write(tmp.path().join("docs/spec.md"), "...\n# Only\n")?;

	common::litspec_cmd()
		.arg("markdown")
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("docs/spec.md")
		.assert()
		.success()
		.stdout(predicates::str::contains("[Only]: #only\n"));

	Ok(())
}

#[test]
fn unterminated_example_warns_but_succeeds() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("spec.txt"), "...\n# A\n.\nsource\n")?;

	common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.assert()
		.success()
		.stderr(predicates::str::contains(
			"warning: example 1 is not closed before the end of input",
		));

	Ok(())
}

#[test]
fn duplicate_reference_labels_warn_in_markdown() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("spec.txt"),
		"...\n# Tabs\n\nA [tab](@tab) and a [TAB](@tab-char).\n",
	)?;

	common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.assert()
		.success()
		.stderr(predicates::str::contains("duplicate reference link '[TAB]'"))
		.stderr(predicates::str::contains("identifier").not());

	Ok(())
}

#[test]
fn missing_terminator_outputs_only_front_matter() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("spec.txt"), "title: Demo\n# Intro\n")?;

	common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.assert()
		.success()
		.stdout("title: Demo\n# Intro\n\n\n\n\n\n")
		.stderr(predicates::str::contains("no `...` terminator"));

	Ok(())
}

#[test]
fn verbose_logs_progress() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::copy_fixture("basic", tmp.path());

	common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.arg("--verbose")
		.assert()
		.success()
		.stderr(predicates::str::contains("conversion pass complete"));

	Ok(())
}

#[test]
fn crlf_input_produces_unix_line_endings() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("spec.txt"),
		"title: Demo\r\n...\r\n# Intro\r\n.\r\na b\r\n.\r\n<p>a b</p>\r\n.\r\n",
	)?;

	common::litspec_cmd()
		.current_dir(tmp.path())
		.arg("markdown")
		.assert()
		.success()
		.stdout(predicates::str::contains("\r").not())
		.stdout(predicates::str::contains("a\u{2423}b\n`"));

	Ok(())
}
