use std::io;
use crate::models::error::RunError;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::process::{ProcessInput, ProcessOutput};

// File 服務接口，負責列舉目錄並挑出筆記本檔案
pub trait FileServiceTrait: Send + Sync {
    /// 收集目錄中（不含子目錄）需要轉換的檔案
    /// # 參數
    /// - input: 要掃描的目錄
    /// # 回傳
    /// - 成功時返回依列舉順序排列的轉換目標，目錄無法讀取時返回 IO 錯誤
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput>;
}

// 外部程序執行接口
pub trait ProcessRunnerTrait: Send + Sync {
    /// 同步執行外部程序並擷取 stdout 與 stderr
    /// # 回傳
    /// - 程序有結束（不論狀態碼）時返回輸出；找不到可執行檔時返回 RunError::ToolMissing
    fn run(&self, input: ProcessInput) -> Result<ProcessOutput, RunError>;
}

// 主控台訊息輸出接口
pub trait ReportServiceTrait: Send + Sync {
    fn report(&self, message: &str);
}
