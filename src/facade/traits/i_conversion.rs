use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責協調整個目錄的轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 掃描目錄並逐一轉換筆記本檔案
    /// # 參數
    /// - input: 目錄與轉換工具設定
    /// # 回傳
    /// - 每個嘗試過的目標恰有一筆結果；所有錯誤都已轉為主控台訊息，不會向外傳遞
    fn execute_conversion(&self, input: ConversionInput) -> ConversionOutput;
}
