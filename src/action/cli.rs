use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::config::config::{resolve_converter, validate_converter, validate_directory, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort, ConverterCommand};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

/// 回傳轉換結果與是否啟用嚴格模式
pub fn process_args(args: Vec<String>) -> io::Result<(ConversionOutput, bool)> {
    if args.len() == 1 {
        process_default_mode()
    } else {
        process_cli_mode(args)
    }
}

// 不帶參數：掃描目前目錄，行為與預設配置相同
pub fn process_default_mode() -> io::Result<(ConversionOutput, bool)> {
    setup_logging("warn")?;
    let config_service = ConfigService::new(Box::new(DefaultConfigAdapter::new()));
    let config = config_service.get_config()?;
    let strict = config.strict;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    Ok((conversion_port.execute(config), strict))
}

pub fn process_cli_mode(args: Vec<String>) -> io::Result<(ConversionOutput, bool)> {
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;
    execute_cli(cli)
}

// 日誌已初始化後執行 CLI 配置的轉換
pub fn execute_cli(cli: Cli) -> io::Result<(ConversionOutput, bool)> {
    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;
    let strict = config.strict;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config.clone());

    // 若啟用 --show-config，在轉換後顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok((output, strict))
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        // 目錄是否存在交由轉換流程回報
        let directory = validate_directory(&self.cli.directory)?;
        let converter = validate_converter(&self.cli.converter)?;
        let converter = resolve_converter(converter, &std::env::current_dir()?)?;

        if self.cli.strict {
            log::info!("啟用嚴格模式，任一檔案失敗將以狀態碼 1 結束");
        }

        Ok(AppConfig {
            directory: PathBuf::from(directory),
            converter: ConverterCommand::new(&converter),
            strict: self.cli.strict,
            show_progress: self.cli.progress,
        })
    }
}
