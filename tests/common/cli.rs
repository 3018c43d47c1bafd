use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory the binary runs in, isolated from the user's config.
pub struct CivicWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl CivicWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".civic").join("data")
    }

    pub fn write_config(&self, yaml: &str) {
        let dir = self.root.join(".civic");
        std::fs::create_dir_all(&dir).expect("create .civic");
        std::fs::write(dir.join("config.yaml"), yaml).expect("write config");
    }
}

pub struct CivicOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Base command with a clean environment rooted at `root`.
pub fn civic_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_civic"));
    cmd.current_dir(root)
        .env("HOME", root)
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("CIVIC_DATA_DIR")
        .env_remove("CIVIC_BACKEND")
        .env_remove("CIVIC_LOG")
        .env_remove("CIVIC_LOG_FORMAT");
    cmd
}

pub fn run_civic<I, S>(workspace: &CivicWorkspace, args: I, label: &str) -> CivicOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = civic_cmd(&workspace.root)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run civic: {e}"));
    CivicOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run `submit --json` and return the new issue's ID.
pub fn submit(
    workspace: &CivicWorkspace,
    title: &str,
    location: &str,
    category: &str,
) -> u64 {
    let output = run_civic(
        workspace,
        [
            "submit",
            "--json",
            "--title",
            title,
            "--description",
            "Reported from a test",
            "--location",
            location,
            "--category",
            category,
        ],
        "submit",
    );
    assert!(output.status.success(), "submit failed: {}", output.stderr);
    let issue: serde_json::Value = serde_json::from_str(&output.stdout).expect("submit json");
    issue["id"].as_u64().expect("numeric id")
}
