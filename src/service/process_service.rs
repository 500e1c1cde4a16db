use std::io;
use std::process::{Command, Stdio};
use log::debug;
use crate::models::error::RunError;
use crate::models::process::{ProcessInput, ProcessOutput};
use crate::service::traits::i_service::ProcessRunnerTrait;

/// 以 std::process::Command 同步執行外部程序，無逾時限制
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        CommandRunner
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunnerTrait for CommandRunner {
    fn run(&self, input: ProcessInput) -> Result<ProcessOutput, RunError> {
        debug!("執行：{} {:?}（工作目錄：{}）", input.program, input.args, input.current_dir.display());
        let output = Command::new(&input.program)
            .args(&input.args)
            .current_dir(&input.current_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| classify_spawn_error(&input, e))?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

// 工作目錄不存在時 spawn 同樣回報 NotFound，不可當成找不到工具
fn classify_spawn_error(input: &ProcessInput, e: io::Error) -> RunError {
    if e.kind() != io::ErrorKind::NotFound {
        return RunError::Io(e);
    }
    if !input.current_dir.is_dir() {
        return RunError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("working directory '{}' not found", input.current_dir.display()),
        ));
    }
    RunError::ToolMissing { program: input.program.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use crate::config::config::resolve_converter;

    fn input(program: &str, args: &[&str]) -> ProcessInput {
        ProcessInput {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            current_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn missing_program_is_tool_missing() {
        let err = CommandRunner::new()
            .run(input("ipynb-to-py-no-such-tool", &[]))
            .unwrap_err();
        assert!(matches!(err, RunError::ToolMissing { ref program } if program == "ipynb-to-py-no-such-tool"));
    }

    #[test]
    fn other_spawn_errors_are_io() {
        let err = classify_spawn_error(&input("x", &[]), io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, RunError::Io(_)));
    }

    #[test]
    fn missing_working_directory_is_not_tool_missing() {
        let dir = TempDir::new().unwrap();
        let mut gone = input("sh", &["-c", "true"]);
        gone.current_dir = dir.path().join("removed");
        let err = CommandRunner::new().run(gone).unwrap_err();
        assert!(matches!(err, RunError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn resolved_relative_converter_runs_from_another_directory() -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let base = TempDir::new()?;
        fs::create_dir(base.path().join("bin"))?;
        fs::create_dir(base.path().join("nb"))?;
        let script = base.path().join("bin").join("conv");
        fs::write(&script, "#!/bin/sh\nexit 0\n")?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

        let program = resolve_converter("./bin/conv", base.path())?;
        let output = CommandRunner::new()
            .run(ProcessInput {
                program,
                args: vec!["a.ipynb".to_string()],
                current_dir: base.path().join("nb"),
            })
            .unwrap();
        assert!(output.success);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn captures_exit_status_and_stderr() {
        let runner = CommandRunner::new();
        let ok = runner.run(input("sh", &["-c", "echo out"])).unwrap();
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));
        assert_eq!(ok.stdout.trim(), "out");

        let failed = runner.run(input("sh", &["-c", "echo boom >&2; exit 3"])).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(3));
        assert_eq!(failed.stderr.trim(), "boom");
    }
}
