//! Shared integration-test harness: builds a content tree in a temporary
//! directory and runs the `specdex` binary against it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A temporary site with `specifications/` and `blog/` directories.
pub struct Site {
    dir: TempDir,
}

impl Site {
    /// An empty site.
    #[allow(clippy::missing_panics_doc)]
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("specifications")).expect("mkdir specifications");
        Self { dir }
    }

    /// A site with a small identity/token/schemas catalog and three posts.
    pub fn fixture() -> Self {
        let site = Self::empty();
        site.spec(
            "identity/overview.md",
            "# Identity\n\n**Status:** Active\n**Version:** 2.0.0\n**Specification Series:** GSPEC-ID-001\n\nBody.\n",
        );
        site.spec(
            "identity/claims/topics.md",
            "# Claim Topics\n\n**Status:** Draft\n",
        );
        site.spec(
            "schemas/dpp-core.schema.json",
            r#"{"$id": "https://schemas.example.org/dpp/v1.2.0/dpp-core.schema.json", "title": "DPP Core"}"#,
        );
        site.spec("schemas/broken.json", "{ not json");
        site.spec("token/transfer.md", "# Token Transfer\n");
        site.spec("contracts/Token.md", "# Hidden\n");

        site.post(
            "launch.mdx",
            "---\ntitle: Protocol Launch\ndate: 2025-01-05\ntags: [news]\n---\nWe are live.\n",
        );
        site.post(
            "roadmap.md",
            "---\ntitle: Roadmap\ndate: 2025-03-10\n---\nNext steps.\n",
        );
        site.post(
            "draft.md",
            "---\ntitle: Secret Draft\ndate: 2025-06-01\npublished: false\n---\nWIP\n",
        );
        site
    }

    #[allow(clippy::missing_panics_doc)]
    pub fn spec(&self, rel: &str, content: &str) {
        write(&self.specs_root().join(rel), content);
    }

    #[allow(clippy::missing_panics_doc)]
    pub fn post(&self, name: &str, content: &str) {
        write(&self.blog_dir().join(name), content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn specs_root(&self) -> PathBuf {
        self.dir.path().join("specifications")
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.dir.path().join("blog")
    }

    /// Runs `specdex` with `--root` and `--blog-dir` pointing at this site.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("failed to run specdex")
    }

    /// The command [`Self::run`] executes, for tests that add environment.
    #[allow(clippy::missing_panics_doc)]
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_specdex"));
        cmd.args(args)
            .arg("--root")
            .arg(self.specs_root())
            .arg("--blog-dir")
            .arg(self.blog_dir())
            .arg("--quiet")
            .env_remove("SPECDEX_ROOT")
            .env_remove("SPECDEX_BLOG_DIR")
            .env_remove("SPECDEX_CONFIG")
            .env_remove("SPECDEX_ENV")
            .env_remove("SPECDEX_LOG_LEVEL");
        cmd
    }
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().expect("path has parent")).expect("mkdir");
    std::fs::write(path, content).expect("write fixture");
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Stdout parsed as JSON.
#[allow(clippy::missing_panics_doc)]
pub fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
