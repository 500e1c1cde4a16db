use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConfigPort, ConverterCommand};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：目前目錄、jupyter nbconvert、非嚴格模式
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl Default for DefaultConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            directory: PathBuf::from("."),
            converter: ConverterCommand::default(),
            strict: false,
            show_progress: false,
        })
    }
}
