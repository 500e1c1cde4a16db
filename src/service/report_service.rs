use crate::service::traits::i_service::ReportServiceTrait;

/// 將訊息逐行寫到標準輸出
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportServiceTrait for ConsoleReporter {
    fn report(&self, message: &str) {
        println!("{}", message);
    }
}

pub fn converting(source: &str, output: &str) -> String {
    format!("Converting {} to {}...", source, output)
}

pub fn converted(source: &str, output: &str) -> String {
    format!("Successfully converted {} to {}", source, output)
}

/// 兩行：檔名與擷取到的 stderr
pub fn tool_error(source: &str, stderr: &str) -> String {
    format!("Error converting {}:\nStderr: {}", source, stderr)
}

pub fn tool_missing(program: &str) -> String {
    format!(
        "Error: '{}' command not found. Make sure it is installed and in your PATH.",
        program
    )
}

pub fn unexpected_error(source: &str, error: &str) -> String {
    format!("An unexpected error occurred while converting {}: {}", source, error)
}

pub fn directory_access_error(label: &str, error: &str) -> String {
    format!("Error accessing {}: {}", label, error)
}

pub fn no_files_found(label: &str) -> String {
    format!("No .ipynb files found in the {}.", label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_file_messages() {
        assert_eq!(converting("report.ipynb", "report.py"), "Converting report.ipynb to report.py...");
        assert_eq!(converted("report.ipynb", "report.py"), "Successfully converted report.ipynb to report.py");
        assert_eq!(tool_error("report.ipynb", "bad json"), "Error converting report.ipynb:\nStderr: bad json");
    }

    #[test]
    fn formats_directory_messages() {
        assert_eq!(no_files_found("current directory"), "No .ipynb files found in the current directory.");
        assert_eq!(
            directory_access_error("current directory", "permission denied"),
            "Error accessing current directory: permission denied"
        );
    }

    #[test]
    fn names_missing_program() {
        assert!(tool_missing("jupyter").starts_with("Error: 'jupyter' command not found."));
    }
}
