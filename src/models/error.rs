use std::io;
use thiserror::Error;

/// 外部轉換程序執行失敗的原因
#[derive(Debug, Error)]
pub enum RunError {
    /// 在搜尋路徑中找不到可執行檔
    #[error("'{program}' command not found")]
    ToolMissing { program: String },
    #[error("{0}")]
    Io(#[from] io::Error),
}
