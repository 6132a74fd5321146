#![allow(dead_code)]

use basic::term::Shell;

/// Runs a session over `lines`. INPUT statements read from `typed`.
pub fn exec_with_input(lines: &str, typed: &str) -> String {
    let mut shell = Shell::default();
    exec_shell(&mut shell, lines, typed)
}

pub fn exec(lines: &str) -> String {
    exec_with_input(lines, "")
}

/// Enters each line in turn, so INPUT sees `typed` rather than the
/// rest of the session.
pub fn exec_shell(shell: &mut Shell, lines: &str, typed: &str) -> String {
    let mut out: Vec<u8> = vec![];
    let mut input = typed.as_bytes();
    for line in lines.lines() {
        shell.enter(line, &mut input, &mut out).unwrap();
    }
    String::from_utf8_lossy(&out).to_string()
}
