//! Resolving how to start a tool server from its entry-point path.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Host platform, as far as interpreter selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LaunchError {
    #[error("server script must be a .js, .py or native executable, got {}", path.display())]
    UnsupportedExtension { path: PathBuf },
}

/// A resolved command line for a tool server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLaunch {
    pub program: String,
    pub args: Vec<String>,
}

impl ServerLaunch {
    /// Resolve the launch for a script path on the current platform.
    pub fn from_script(path: impl AsRef<Path>) -> Result<Self, LaunchError> {
        Self::from_script_for(path, Platform::current())
    }

    /// Resolve the launch for a script path on the given platform.
    ///
    /// `.js` runs under `node`, `.py` under `python` (Windows) or `python3`,
    /// and `.exe` or extension-less paths are executed directly.
    pub fn from_script_for(
        path: impl AsRef<Path>,
        platform: Platform,
    ) -> Result<Self, LaunchError> {
        let path = path.as_ref();
        let script = path.to_string_lossy().into_owned();
        let extension = path.extension().map(|e| e.to_string_lossy().to_lowercase());

        let interpreter = match extension.as_deref() {
            Some("js") => "node",
            Some("py") => match platform {
                Platform::Windows => "python",
                Platform::Unix => "python3",
            },
            Some("exe") | None => {
                return Ok(Self {
                    program: script,
                    args: Vec::new(),
                });
            }
            Some(_) => {
                return Err(LaunchError::UnsupportedExtension {
                    path: path.to_path_buf(),
                });
            }
        };

        Ok(Self {
            program: interpreter.to_string(),
            args: vec![script],
        })
    }
}

impl std::fmt::Display for ServerLaunch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_runs_under_node_everywhere() {
        for platform in [Platform::Unix, Platform::Windows] {
            let launch = ServerLaunch::from_script_for("servers/faker/build/index.js", platform)
                .unwrap();
            assert_eq!(launch.program, "node");
            assert_eq!(launch.args, vec!["servers/faker/build/index.js"]);
        }
    }

    #[test]
    fn python_interpreter_depends_on_platform() {
        let unix = ServerLaunch::from_script_for("server.py", Platform::Unix).unwrap();
        let windows = ServerLaunch::from_script_for("server.py", Platform::Windows).unwrap();
        assert_eq!(unix.program, "python3");
        assert_eq!(windows.program, "python");
        assert_eq!(unix.args, windows.args);
    }

    #[test]
    fn native_executables_run_directly() {
        let launch =
            ServerLaunch::from_script_for("target/release/faker-server", Platform::Unix).unwrap();
        assert_eq!(launch.program, "target/release/faker-server");
        assert!(launch.args.is_empty());

        let launch = ServerLaunch::from_script_for("faker-server.exe", Platform::Windows).unwrap();
        assert_eq!(launch.program, "faker-server.exe");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = ServerLaunch::from_script_for("server.rb", Platform::Unix).unwrap_err();
        assert!(matches!(err, LaunchError::UnsupportedExtension { .. }));
        assert!(err.to_string().contains("server.rb"));
    }

    #[test]
    fn display_joins_program_and_args() {
        let launch = ServerLaunch::from_script_for("a.js", Platform::Unix).unwrap();
        assert_eq!(launch.to_string(), "node a.js");
    }
}
