use std::path::PathBuf;
use crate::config::ports::ConverterCommand;
use crate::utils::utils::derive_output_name;

pub const SOURCE_SUFFIX: &str = ".ipynb";
pub const TARGET_SUFFIX: &str = ".py";

#[derive(Clone, Debug, PartialEq)]
pub struct ConversionTarget {
    pub source: String,
    pub output: String,
}

impl ConversionTarget {
    /// 名稱不以 `.ipynb` 結尾時回傳 None
    pub fn from_name(name: &str) -> Option<Self> {
        derive_output_name(name).map(|output| ConversionTarget {
            source: name.to_string(),
            output,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success,
    ToolError,
    ToolMissing,
    UnexpectedError,
}

#[derive(Clone, Debug)]
pub struct ConversionOutcome {
    pub target: ConversionTarget,
    pub status: OutcomeStatus,
    pub diagnostic: String,
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

/// 使整批轉換提前停止的條件
#[derive(Clone, Debug, PartialEq)]
pub enum HaltReason {
    DirectoryAccess(String),
    ToolMissing(String),
}

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub directory: PathBuf,
    pub converter: ConverterCommand,
    pub show_progress: bool,
}

impl Default for ConversionInput {
    fn default() -> Self {
        ConversionInput {
            directory: PathBuf::from("."),
            converter: ConverterCommand::default(),
            show_progress: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct ConversionOutput {
    pub outcomes: Vec<ConversionOutcome>,
    pub halt: Option<HaltReason>,
}

impl ConversionOutput {
    pub fn processed_files(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// 任一目標未成功，或整批被中止
    pub fn has_failures(&self) -> bool {
        self.halt.is_some() || self.outcomes.iter().any(|o| !o.is_success())
    }
}
