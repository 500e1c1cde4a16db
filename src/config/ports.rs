use std::io;
use std::path::PathBuf;
use crate::models::conversion::ConversionOutput;

pub const DEFAULT_CONVERTER: &str = "jupyter";
pub const DEFAULT_CONVERTER_ARGS: [&str; 3] = ["nbconvert", "--to", "script"];

// 外部轉換工具的呼叫方式，來源檔名附加在固定參數之後
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ConverterCommand {
    pub fn new(program: &str) -> Self {
        ConverterCommand {
            program: program.to_string(),
            args: DEFAULT_CONVERTER_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn args_for(&self, source: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(source.to_string());
        args
    }
}

impl Default for ConverterCommand {
    fn default() -> Self {
        ConverterCommand::new(DEFAULT_CONVERTER)
    }
}

// 應用配置結構體
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub converter: ConverterCommand,
    pub strict: bool,
    pub show_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> ConversionOutput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_nbconvert_to_script() {
        let cmd = ConverterCommand::default();
        assert_eq!(cmd.program, "jupyter");
        assert_eq!(
            cmd.args_for("report.ipynb"),
            vec!["nbconvert", "--to", "script", "report.ipynb"]
        );
    }

    #[test]
    fn args_for_leaves_base_args_untouched() {
        let cmd = ConverterCommand::new("conv");
        let _ = cmd.args_for("a.ipynb");
        assert_eq!(cmd.args.len(), 3);
    }
}
