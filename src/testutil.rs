//! Shared helpers for unit tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable stub formatter honoring the fixed calling convention
/// `tool -d <input> [extra...] <output>`. `body` runs with `$input` and
/// `$output` already set.
pub(crate) fn write_stub_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let script = format!("#!/bin/sh\ninput=$2\nfor output; do :; done\n{}\n", body);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Stub that prefixes the input with `FMT:` so tests can tell formatted
/// output from raw concatenation.
pub(crate) fn write_prefixing_tool(dir: &Path, name: &str) -> PathBuf {
    write_stub_tool(
        dir,
        name,
        "{ printf 'FMT:'; cat \"$input\"; } > \"$output\"",
    )
}
