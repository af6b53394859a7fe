use crate::error::{Result, TagitError};
use git2::Repository as Git2Repo;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;
use tracing::debug;
use wait_timeout::ChildExt;

/// Wrapper around git2::Repository with our trait interface
///
/// Local tag reads and writes go through libgit2. Fetch and push shell out
/// to `git` so the user's credential helpers and SSH setup apply, and each
/// invocation is killed if it outlives `timeout`.
pub struct GitRepository {
    repo: Git2Repo,
    workdir: PathBuf,
    timeout: Duration,
}

impl GitRepository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P, timeout: Duration) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        let workdir = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();

        Ok(GitRepository {
            repo,
            workdir,
            timeout,
        })
    }

    fn run_git(&self, args: &[&str], operation: &'static str) -> Result<()> {
        debug!(?args, operation, "running git");
        let (status, stderr) =
            run_git_with_timeout(args, &self.workdir, self.timeout, operation)?;

        if !status.success() {
            return Err(TagitError::remote(operation, stderr.trim().to_owned()));
        }

        Ok(())
    }
}

impl super::TagStore for GitRepository {
    fn refresh_remote_tags(&self, remote: &str) -> Result<()> {
        self.run_git(&["fetch", "--tags", "--quiet", remote], "refresh")
    }

    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("{}*", prefix);
        let tags = self.repo.tag_names(Some(&pattern))?;

        Ok(tags
            .iter()
            .flatten()
            .filter(|t| t.starts_with(prefix))
            .map(|s| s.to_string())
            .collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map_err(|e| TagitError::tag_creation(format!("Cannot resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| {
                TagitError::tag_creation(format!("Cannot create tag '{}': {}", name, e))
            })?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}", name);
        self.run_git(&["push", "--quiet", remote, &refspec], "push")
    }
}

/// Runs a git command with a timeout.
///
/// Returns the exit status and the lossily decoded stderr if the command
/// completes within the timeout. stderr is drained on a separate thread so a
/// chatty child cannot block on a full pipe; stdout is discarded.
fn run_git_with_timeout(
    args: &[&str],
    working_dir: &Path,
    timeout: Duration,
    operation: &'static str,
) -> Result<(ExitStatus, String)> {
    let mut child = Command::new("git")
        .args(args)
        .current_dir(working_dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    match child.wait_timeout(timeout)? {
        Some(status) => {
            let stderr = stderr_reader
                .and_then(|reader| reader.join().ok())
                .unwrap_or_default();
            Ok((status, String::from_utf8_lossy(&stderr).into_owned()))
        }
        None => {
            let _ = child.kill();
            let _ = child.wait();
            // Not joined: processes spawned by git (hooks) may still hold the pipe open
            drop(stderr_reader);
            Err(TagitError::Timeout {
                operation,
                secs: timeout.as_secs(),
            })
        }
    }
}
