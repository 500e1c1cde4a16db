use log::{debug, info, warn};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{
    ConversionInput, ConversionOutcome, ConversionOutput, ConversionTarget, HaltReason, OutcomeStatus,
};
use crate::models::error::RunError;
use crate::models::file::FileCollectInput;
use crate::models::process::ProcessInput;
use crate::service::file_service::FileService;
use crate::service::process_service::CommandRunner;
use crate::service::report_service::{self as msg, ConsoleReporter};
use crate::service::traits::i_service::{FileServiceTrait, ProcessRunnerTrait, ReportServiceTrait};
use crate::utils::utils::{directory_label, ProgressManager};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    process_runner: Box<dyn ProcessRunnerTrait>,
    reporter: Box<dyn ReportServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        process_runner: Box<dyn ProcessRunnerTrait>,
        reporter: Box<dyn ReportServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            process_runner,
            reporter,
        }
    }

    /// 使用實際的檔案系統、子程序與標準輸出
    pub fn with_system_services() -> Self {
        ConversionFacade::new(
            Box::new(FileService::new()),
            Box::new(CommandRunner::new()),
            Box::new(ConsoleReporter::new()),
        )
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> ConversionOutput {
        let label = directory_label(&input.directory);
        let file_output = match self.file_service.collect_files(FileCollectInput {
            directory: input.directory.clone(),
        }) {
            Ok(output) => output,
            Err(e) => {
                warn!("無法讀取目錄 {}：{}", input.directory.display(), e);
                self.reporter.report(&msg::directory_access_error(&label, &e.to_string()));
                return ConversionOutput {
                    outcomes: Vec::new(),
                    halt: Some(HaltReason::DirectoryAccess(e.to_string())),
                };
            }
        };

        if file_output.targets.is_empty() {
            info!("{} 個項目中沒有 .ipynb 檔案", file_output.total_entries);
            self.reporter.report(&msg::no_files_found(&label));
            return ConversionOutput::default();
        }

        info!("開始轉換 {} 個筆記本，目錄：{}", file_output.targets.len(), input.directory.display());
        let pm = ProgressManager::new(file_output.targets.len() as u64, input.show_progress);
        let mut output = ConversionOutput::default();

        for target in file_output.targets {
            pm.start(&target.source);
            let outcome = self.convert_one(&input, target, &pm);
            pm.advance();

            let halted = outcome.status == OutcomeStatus::ToolMissing;
            output.outcomes.push(outcome);
            if halted {
                warn!("找不到轉換工具 {}，中止其餘轉換", input.converter.program);
                output.halt = Some(HaltReason::ToolMissing(input.converter.program.clone()));
                break;
            }
        }
        pm.finish();

        debug!("轉換結束：{}/{} 成功", output.succeeded(), output.processed_files());
        output
    }
}

impl ConversionFacade {
    fn convert_one(&self, input: &ConversionInput, target: ConversionTarget, pm: &ProgressManager) -> ConversionOutcome {
        self.emit(pm, &msg::converting(&target.source, &target.output));

        let result = self.process_runner.run(ProcessInput {
            program: input.converter.program.clone(),
            args: input.converter.args_for(&target.source),
            current_dir: input.directory.clone(),
        });

        let (status, diagnostic) = match result {
            Ok(process) if process.success => {
                self.emit(pm, &msg::converted(&target.source, &target.output));
                (OutcomeStatus::Success, String::new())
            }
            Ok(process) => {
                debug!("{} 結束狀態碼：{:?}", target.source, process.exit_code);
                self.emit(pm, &msg::tool_error(&target.source, &process.stderr));
                (OutcomeStatus::ToolError, process.stderr)
            }
            Err(RunError::ToolMissing { program }) => {
                self.emit(pm, &msg::tool_missing(&program));
                (OutcomeStatus::ToolMissing, format!("'{}' command not found", program))
            }
            Err(e) => {
                let text = e.to_string();
                self.emit(pm, &msg::unexpected_error(&target.source, &text));
                (OutcomeStatus::UnexpectedError, text)
            }
        };

        ConversionOutcome { target, status, diagnostic }
    }

    fn emit(&self, pm: &ProgressManager, message: &str) {
        pm.suspend(|| self.reporter.report(message));
    }
}

// 轉換執行的實際適配器
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> ConversionOutput {
        ConversionFacade::with_system_services().execute_conversion(ConversionInput {
            directory: config.directory,
            converter: config.converter,
            show_progress: config.show_progress,
        })
    }
}

/// 以預設配置轉換目前目錄中的所有筆記本
pub fn run() -> ConversionOutput {
    ConversionFacade::with_system_services().execute_conversion(ConversionInput::default())
}
