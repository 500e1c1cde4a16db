use std::io;
use std::process;

use ipynb_to_py::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (output, strict) = process_args(args)?;
    log::info!("執行完成，處理檔案數：{}，成功：{}", output.processed_files(), output.succeeded());

    // 嚴格模式下，任一檔案失敗即以非零狀態結束
    if strict && output.has_failures() {
        process::exit(1);
    }
    Ok(())
}
