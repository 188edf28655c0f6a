//! Helpers for spawning the `todalu` binary on a script.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// Write `source` to a temporary `.tdl` file.
pub fn script(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".tdl")
        .tempfile()
        .expect("create temp script");
    file.write_all(source.as_bytes()).expect("write temp script");
    file
}

/// Run the binary with `args` followed by the script path.
pub fn run_script(source: &str, args: &[&str]) -> Output {
    let file = script(source);
    Command::new(env!("CARGO_BIN_EXE_todalu"))
        .args(args)
        .arg(file.path())
        .output()
        .expect("spawn todalu")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
