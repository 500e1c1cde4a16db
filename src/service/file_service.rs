use std::fs;
use std::io;
use std::path::Path;
use log::{debug, warn};
use crate::models::conversion::ConversionTarget;
use crate::models::file::{CandidateFile, FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;

/// 以 std::fs::read_dir 列舉單層目錄
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput> {
        let candidates = list_candidates(&input.directory)?;
        let total_entries = candidates.len();
        let targets = select_targets(&candidates);
        debug!("列舉 {} 個項目，其中 {} 個為筆記本檔案", total_entries, targets.len());
        Ok(FileCollectOutput { targets, total_entries })
    }
}

/// 列舉目錄項目；任何一筆讀取失敗都視為整個目錄無法存取
pub fn list_candidates(directory: &Path) -> io::Result<Vec<CandidateFile>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("檔名不是有效的 UTF-8，跳過：{:?}", file_name);
            continue;
        };
        // 跟隨符號連結；失效的連結不算檔案
        let is_regular_file = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        candidates.push(CandidateFile {
            name: name.to_string(),
            is_regular_file,
        });
    }
    Ok(candidates)
}

pub fn select_targets(candidates: &[CandidateFile]) -> Vec<ConversionTarget> {
    candidates
        .iter()
        .filter(|c| c.is_regular_file)
        .filter_map(|c| ConversionTarget::from_name(&c.name))
        .collect()
}
