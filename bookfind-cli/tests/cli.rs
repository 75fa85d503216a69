use assert_cmd::prelude::*;
use assert_fs::{fixture::PathChild, TempDir};
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are set up incorrectly will cause clap to panic regardless of the
// arguments or options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfind")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

// The favorites and clear commands never touch the network so they can run in
// a temp directory end to end.
#[test]
fn favorites_command_creates_the_file_and_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.child("favorites.json");

    let mut cmd = Command::cargo_bin("bookfind")?;
    cmd.arg("--file").arg(file.path()).arg("favorites");
    cmd.assert().success();

    assert!(file.path().exists());
    Ok(())
}

#[test]
fn clear_command_persists_an_empty_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.child("favorites.json");
    std::fs::write(file.path(), r#"[{"title":"Dune","key":"/works/OL1W"}]"#)?;

    let mut cmd = Command::cargo_bin("bookfind")?;
    cmd.arg("--file").arg(file.path()).arg("clear");
    cmd.assert().success();

    let contents = std::fs::read_to_string(file.path())?;
    assert_eq!("[]", contents);
    Ok(())
}
