use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// 將示範輸出逐行寫到任意 `io::Write` 目標；正式執行時為標準輸出，
/// 測試時可改用記憶體緩衝區
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
