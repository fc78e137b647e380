//! Build wrapper: configure and build the C++ project with CMake.
//!
//! The build directory is `<root>/build/<platform>/<compiler>`; the vcpkg checkout under
//! `<root>/build/3rdParty/vcpkg/` is appended to `PATH` for both steps.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::ValueEnum;
use thiserror::Error;

/// Platform key used when none is given.
pub const DEFAULT_PLATFORM: &str = "ubuntu-24.04";

/// Supported C++ compilers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Compiler {
    Gcc,
}

impl Compiler {
    /// Name used on the command line and in the build directory.
    pub fn name(self) -> &'static str {
        match self {
            Compiler::Gcc => "gcc",
        }
    }

    /// Executable passed to CMake as `CMAKE_CXX_COMPILER`.
    pub fn tool_path(self) -> &'static str {
        match self {
            Compiler::Gcc => "g++",
        }
    }
}

/// Errors from the build wrapper.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to launch {step}: {source}")]
    Spawn {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{step} failed with exit code {code}")]
    StepFailed { step: &'static str, code: i32 },
}

impl BuildError {
    /// Exit code to hand back to the shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::StepFailed { code, .. } => *code,
            BuildError::Spawn { .. } => 1,
        }
    }
}

/// Everything needed to run the configure and build steps.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub root: PathBuf,
    pub platform: String,
    pub compiler: Compiler,
}

impl BuildPlan {
    pub fn new(root: impl AsRef<Path>, platform: impl Into<String>, compiler: Compiler) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            platform: platform.into(),
            compiler,
        }
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build").join(&self.platform).join(self.compiler.name())
    }

    fn vcpkg_root(&self) -> PathBuf {
        self.root.join("build").join("3rdParty").join("vcpkg")
    }

    /// `PATH` with the vcpkg directory appended.
    fn search_path(&self) -> Option<OsString> {
        let current = env::var_os("PATH").unwrap_or_default();
        let mut paths: Vec<PathBuf> = env::split_paths(&current).collect();
        paths.push(self.vcpkg_root());
        match env::join_paths(paths) {
            Ok(joined) => Some(joined),
            Err(e) => {
                tracing::warn!("not adding vcpkg to PATH: {}", e);
                None
            }
        }
    }

    fn cmake(&self) -> Command {
        let mut cmd = Command::new("cmake");
        cmd.current_dir(&self.root);
        if let Some(path) = self.search_path() {
            cmd.env("PATH", path);
        }
        cmd
    }

    pub fn configure_command(&self) -> Command {
        let mut cmd = self.cmake();
        cmd.arg("--preset=default")
            .arg("-B")
            .arg(self.build_dir())
            .arg(format!("-DCMAKE_CXX_COMPILER={}", self.compiler.tool_path()));
        cmd
    }

    pub fn build_command(&self) -> Command {
        let mut cmd = self.cmake();
        cmd.arg("--build").arg(self.build_dir());
        cmd
    }
}

fn run_step(step: &'static str, mut cmd: Command) -> Result<(), BuildError> {
    tracing::info!(?cmd, "running {}", step);
    let status = cmd.status().map_err(|source| BuildError::Spawn { step, source })?;
    if status.success() {
        Ok(())
    } else {
        // Killed by a signal: no code to forward.
        Err(BuildError::StepFailed {
            step,
            code: status.code().unwrap_or(1),
        })
    }
}

/// Configure, then build. Stops at the first failing step.
pub fn run_build(plan: &BuildPlan) -> Result<(), BuildError> {
    run_step("cmake configure", plan.configure_command())?;
    println!("Building with {}", plan.compiler.name());
    run_step("cmake build", plan.build_command())
}
