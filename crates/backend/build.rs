//! Places the workspace `config.toml` beside the `backend` binary, where
//! `shared::config::load_config` looks for it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let config = workspace_root().join("config.toml");
    if !config.exists() {
        println!(
            "cargo:warning=no config.toml at {}; backend falls back to port 5000 and ./dist",
            config.display()
        );
        return;
    }

    let dest = binary_dir().join("config.toml");
    if let Err(e) = fs::copy(&config, &dest) {
        panic!("copy {} -> {}: {}", config.display(), dest.display(), e);
    }
}

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .expect("backend crate lives at <workspace>/crates/backend")
}

/// `target/<profile>`, found by walking up from OUT_DIR
fn binary_dir() -> PathBuf {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    out_dir
        .ancestors()
        .find(|dir| dir.ends_with(&profile))
        .map(Path::to_path_buf)
        .expect("OUT_DIR is inside target/<profile>")
}
