use std::io;
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};
use crate::models::conversion::{SOURCE_SUFFIX, TARGET_SUFFIX};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))?;
    Ok(())
}

/// 只替換結尾的 `.ipynb`，例如 `a.b.ipynb` -> `a.b.py`
pub fn derive_output_name(source: &str) -> Option<String> {
    source
        .strip_suffix(SOURCE_SUFFIX)
        .map(|stem| format!("{}{}", stem, TARGET_SUFFIX))
}

/// 訊息中用來描述掃描目錄的文字
pub fn directory_label(directory: &Path) -> String {
    if directory.as_os_str().is_empty() || directory == Path::new(".") {
        "current directory".to_string()
    } else {
        format!("directory '{}'", directory.display())
    }
}

pub struct ProgressManager {
    pb: ProgressBar,
    enabled: bool,
}

impl ProgressManager {
    pub fn new(total: u64, enabled: bool) -> Self {
        let pb = if !enabled {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            match ProgressStyle::default_spinner().template("{spinner} [{pos}/{len}] {msg}") {
                Ok(style) => pb.set_style(style),
                Err(e) => log::warn!("進度條樣式無效: {}，使用預設樣式", e),
            }
            pb
        };
        ProgressManager { pb, enabled }
    }

    pub fn start(&self, file_name: &str) {
        if !self.enabled {
            return;
        }
        self.pb.set_message(format!("轉換中：{}", file_name));
        self.pb.tick();
    }

    pub fn advance(&self) {
        if self.enabled {
            self.pb.inc(1);
        }
    }

    /// 暫停繪製進度條以輸出一般訊息
    pub fn suspend<F: FnOnce()>(&self, f: F) {
        self.pb.suspend(f);
    }

    pub fn finish(&self) {
        if self.enabled {
            self.pb.finish_and_clear();
        }
    }
}
