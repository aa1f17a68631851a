use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// 本機檔案或標準輸入輸出
#[derive(Debug, Clone, Default)]
pub struct LocalIo;

impl LocalIo {
    pub fn new() -> Self {
        Self
    }

    /// `-` 代表 stdin
    pub fn reader(&self, path: &str) -> Result<Box<dyn BufRead>> {
        if path == "-" {
            return Ok(Box::new(BufReader::new(io::stdin())));
        }
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    /// 沒有指定路徑時寫到 stdout，會自動建立上層目錄
    pub fn writer(&self, path: Option<&str>) -> Result<Box<dyn Write>> {
        match path {
            None | Some("-") => Ok(Box::new(io::stdout().lock())),
            Some(path) => {
                let full_path = Path::new(path);
                if let Some(parent) = full_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Ok(Box::new(BufWriter::new(File::create(full_path)?)))
            }
        }
    }
}
