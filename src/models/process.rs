use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ProcessInput {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct ProcessOutput {
    /// 被訊號終止時為 None
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}
