use std::path::PathBuf;
use crate::models::conversion::ConversionTarget;

/// 目錄列舉時產生的候選檔案，過濾後即丟棄
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub is_regular_file: bool,
}

#[derive(Clone, Debug)]
pub struct FileCollectInput {
    pub directory: PathBuf,
}

#[derive(Debug, Default)]
pub struct FileCollectOutput {
    pub targets: Vec<ConversionTarget>,
    /// 列舉到的項目總數（含目錄與非筆記本檔案）
    pub total_entries: usize,
}
