use crate::domain::model::StepOutput;
use crate::utils::error::Result;

/// 單一示範步驟的介面
pub trait Demo {
    /// 步驟名稱，用於日誌與執行摘要
    fn name(&self) -> &str;

    /// 執行示範並回傳要印出的行與中繼資料
    fn run(&self) -> Result<StepOutput>;
}

/// 輸出埠：示範結果的唯一對外介面
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}
