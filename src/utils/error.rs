use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No URLs given and no input source configured")]
    MissingInputError,
}

impl ClassifyError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClassifyError::TomlError(_)
                | ClassifyError::ConfigError { .. }
                | ClassifyError::InvalidConfigValueError { .. }
                | ClassifyError::MissingInputError
        )
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClassifyError::IoError(e) => format!("無法讀寫檔案: {}", e),
            ClassifyError::CsvError(e) => format!("CSV 輸出失敗: {}", e),
            ClassifyError::SerializationError(e) => format!("JSON 輸出失敗: {}", e),
            ClassifyError::TomlError(e) => format!("設定檔格式錯誤: {}", e),
            ClassifyError::ConfigError { field, message } => {
                format!("設定錯誤 ({}): {}", field, message)
            }
            ClassifyError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("設定值無效 {} = '{}': {}", field, value, reason),
            ClassifyError::MissingInputError => "沒有可檢查的 URL".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClassifyError::IoError(_) => "Check that the file exists and is readable/writable",
            ClassifyError::CsvError(_) | ClassifyError::SerializationError(_) => {
                "Try a different --format or check the output destination"
            }
            ClassifyError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            ClassifyError::ConfigError { .. } | ClassifyError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
            ClassifyError::MissingInputError => {
                "Pass URLs as arguments, or use --input <FILE> (use '-' for stdin)"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
