use crate::helpers::prelude::*;

#[test]
fn it_creates_the_whole_manifest_with_defaults() {
    let dir = tempdir().build();

    binary()
        .arg_new("foobar-project")
        .current_dir(dir.path())
        .write_stdin(DEFAULT_ANSWERS)
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert_eq!(dir.files("foobar-project"), manifest());
    let package = dir.read("foobar-project/package.json");
    assert!(package.contains(r#""name": "foobar-project""#));
    assert!(package.contains(r#""version": "1.0.0""#));
    assert!(package.contains(r#""license": "MIT""#));
    assert!(package.contains(r#""author": " <>""#));
    assert!(package.contains(r#""neon-cli": "^0.4.0""#));
    assert!(dir
        .read("foobar-project/native/Cargo.toml")
        .contains(r#"neon-build = "0.4.0""#));
}

#[test]
fn it_treats_new_as_the_default_command() {
    let dir = tempdir().build();

    binary()
        .arg("foobar-project")
        .current_dir(dir.path())
        .write_stdin(DEFAULT_ANSWERS)
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert_eq!(dir.files("foobar-project"), manifest());
}

#[test]
fn it_asks_the_questions_in_order() {
    let dir = tempdir().build();

    binary()
        .arg_new("foobar-project")
        .current_dir(dir.path())
        .write_stdin(DEFAULT_ANSWERS)
        .assert()
        .success()
        .stdout(
            predicates::str::contains(
                "Version (1.0.0): Description (): Author (): Email (): License (MIT): ",
            )
            .from_utf8(),
        );
}

#[test]
fn it_uses_the_name_verbatim() {
    let dir = tempdir().build();

    binary()
        .arg_new("Foobar_Project")
        .current_dir(dir.path())
        .write_stdin(DEFAULT_ANSWERS)
        .assert()
        .success()
        .stdout(
            predicates::str::contains("Done!")
                .from_utf8()
                .and(predicates::str::contains("not a valid npm package name").from_utf8()),
        );

    assert!(dir
        .read("Foobar_Project/package.json")
        .contains(r#""name": "Foobar_Project""#));
    assert!(dir
        .read("Foobar_Project/native/Cargo.toml")
        .contains(r#"name = "foobar_project""#));
}

#[test]
fn it_creates_a_project_named_help() {
    let dir = tempdir().build();

    binary()
        .arg("help")
        .current_dir(dir.path())
        .write_stdin(indoc! {"
            0.1.0
            Not the help text
            Jane
            jane@x.com
            ISC
        "})
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert_eq!(dir.files("help"), manifest());
    assert!(dir
        .read("help/package.json")
        .contains(r#""description": "Not the help text""#));
}

#[test]
fn it_rejects_options_it_does_not_have() {
    let dir = tempdir().build();

    for flag in ["--silent", "--destination", "--values-file"] {
        binary()
            .arg_new("foobar-project")
            .arg(flag)
            .current_dir(dir.path())
            .write_stdin(DEFAULT_ANSWERS)
            .assert()
            .failure()
            .stderr(predicates::str::contains("unexpected argument").from_utf8());
    }

    assert!(!dir.exists("foobar-project"));
}

#[test]
fn it_needs_a_name() {
    binary()
        .arg("new")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Usage").from_utf8());
}
