use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn seoinject_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seoinject").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write `files` (relative path, content) under `root`, creating directories
#[allow(dead_code)]
pub fn write_site(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
