//! `civic version`: binary name, crate version and supported backends.

use anyhow::Result;
use serde::Serialize;

use super::print_json;
use crate::storage::BackendKind;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    profile: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    git_sha: Option<&'static str>,
    backends: Vec<BackendKind>,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            name: "civic",
            version: env!("CARGO_PKG_VERSION"),
            profile: if cfg!(debug_assertions) { "debug" } else { "release" },
            git_sha: option_env!("CIVIC_GIT_SHA").filter(|sha| !sha.trim().is_empty()),
            backends: BackendKind::ALL.to_vec(),
        }
    }
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let info = VersionInfo::current();
    if json {
        return print_json(&info);
    }

    let sha = info.git_sha.map(|sha| format!(", {sha}")).unwrap_or_default();
    println!("{} {} ({}{sha})", info.name, info.version, info.profile);
    Ok(())
}
