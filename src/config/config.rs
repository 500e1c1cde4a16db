use clap::Parser;
use std::io;
use std::path::{Path, MAIN_SEPARATOR};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "ipynb_to_py",
    about = "將目錄中的 .ipynb 筆記本轉換為 .py 腳本",
    long_about = "掃描目錄（不含子目錄）中的 .ipynb 檔案，逐一呼叫 `jupyter nbconvert --to script` 產生同名 .py 檔案。\n不帶任何參數時，掃描目前目錄並使用預設配置。"
)]
pub struct Cli {
    /// 要掃描的目錄
    #[arg(default_value = ".")]
    pub directory: String,
    #[arg(long, default_value = "jupyter")]
    pub converter: String,
    /// 任一檔案失敗時以狀態碼 1 結束
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    #[arg(long, default_value_t = false)]
    pub progress: bool,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn validate_directory(directory: &str) -> io::Result<&Path> {
    if directory.trim().is_empty() {
        log::error!("掃描目錄不可為空");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "掃描目錄不可為空"));
    }
    Ok(Path::new(directory))
}

pub fn validate_converter(converter: &str) -> io::Result<&str> {
    if converter.trim().is_empty() {
        log::error!("轉換工具名稱不可為空");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "轉換工具名稱不可為空"));
    }
    Ok(converter)
}

/// 含路徑分隔符的相對路徑以呼叫端的工作目錄為基準，
/// 因為轉換工具是在掃描目錄中執行的；單純的名稱仍交由 PATH 搜尋
pub fn resolve_converter(converter: &str, base: &Path) -> io::Result<String> {
    let path = Path::new(converter);
    let has_separator = converter.contains('/') || converter.contains(MAIN_SEPARATOR);
    if !has_separator || path.is_absolute() {
        return Ok(converter.to_string());
    }
    let resolved = base.join(path);
    resolved
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("轉換工具路徑不是有效的 UTF-8：{}", resolved.display()),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["ipynb_to_py"]).unwrap();
        assert_eq!(cli.directory, ".");
        assert_eq!(cli.converter, "jupyter");
        assert!(!cli.strict);
        assert!(!cli.progress);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn parses_explicit_options() {
        let cli = Cli::try_parse_from([
            "ipynb_to_py", "notebooks", "--converter", "jupyter-nbconvert", "--strict", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(cli.directory, "notebooks");
        assert_eq!(cli.converter, "jupyter-nbconvert");
        assert!(cli.strict);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["ipynb_to_py", "--log-level", "trace"]).is_err());
    }

    #[test]
    fn rejects_blank_values() {
        assert_eq!(validate_directory("  ").unwrap_err().kind(), io::ErrorKind::InvalidInput);
        assert_eq!(validate_converter("").unwrap_err().kind(), io::ErrorKind::InvalidInput);
        assert!(validate_directory("nb").is_ok());
    }

    #[test]
    fn bare_converter_name_is_left_for_path_lookup() {
        assert_eq!(resolve_converter("jupyter", Path::new("/work")).unwrap(), "jupyter");
    }

    #[cfg(unix)]
    #[test]
    fn relative_converter_path_is_anchored_to_base() {
        let resolved = resolve_converter("./bin/conv", Path::new("/work")).unwrap();
        assert!(Path::new(&resolved).is_absolute());
        assert!(Path::new(&resolved).ends_with("bin/conv"));
        assert!(resolved.starts_with("/work"));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_converter_path_is_unchanged() {
        assert_eq!(resolve_converter("/usr/bin/conv", Path::new("/work")).unwrap(), "/usr/bin/conv");
    }
}
