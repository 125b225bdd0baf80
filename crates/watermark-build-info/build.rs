use std::{
    env,
    path::{Path, PathBuf},
};

use vergen_gix::{Emitter, GixBuilder};

const SHA_OVERRIDE_VAR: &str = "WATERMARK_BUILD_SHA_SHORT";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={SHA_OVERRIDE_VAR}");

    let pinned = env::var(SHA_OVERRIDE_VAR)
        .ok()
        .and_then(|raw| normalize_sha_short(&raw));

    let sha = match pinned {
        Some(sha) => Some(sha),
        None => match emit_from_git() {
            Ok(()) => return,
            Err(reason) => {
                if let Some(reason) = reason {
                    println!("cargo:warning=watermark-build-info: {reason}");
                }
                None
            }
        },
    };

    emit_placeholders(sha.as_deref());
}

/// Let vergen-gix emit the SHA for the enclosing repository.
///
/// `Err(None)` means there is no repository; `Err(Some(_))` carries a
/// vergen-gix failure worth surfacing as a cargo warning.
fn emit_from_git() -> Result<(), Option<String>> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let repo_root = find_repo_root(Path::new(&manifest_dir)).ok_or(None)?;

    let git = GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .dirty(false)
        .build()
        .map_err(|e| Some(format!("git metadata unavailable: {e}")))?;

    Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit())
        .map_err(|e| Some(format!("git metadata not emitted: {e}")))
}

/// `lib.rs` reads these with `env!()`, so they are set on every path.
fn emit_placeholders(sha_short: Option<&str>) {
    let sha = sha_short.unwrap_or("unknown");
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
    println!("cargo:rustc-env=VERGEN_GIT_DIRTY=false");
}

fn normalize_sha_short(raw: &str) -> Option<String> {
    let candidate = raw.trim().get(..7)?;
    candidate
        .chars()
        .all(|c| c.is_ascii_hexdigit())
        .then(|| candidate.to_string())
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
