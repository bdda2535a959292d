//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_smsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SMSystemError {
            $($variant(String),)*
        }

        impl SMSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SMSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SMSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SMSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SMSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SMSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_smsystem_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
}

impl SMSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SMSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SMSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SMSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        SMSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SMSystemError {
    fn from(err: std::io::Error) -> Self {
        SMSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SMSystemError {
    fn from(err: serde_json::Error) -> Self {
        SMSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SMSystemError {
    fn from(err: chrono::ParseError) -> Self {
        SMSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SMSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SMSystemError::cache_connection("test").code(), "E001");
        assert_eq!(SMSystemError::database_config("test").code(), "E003");
        assert_eq!(SMSystemError::validation("test").code(), "E007");
        assert_eq!(SMSystemError::date_parse("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SMSystemError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            SMSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SMSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SMSystemError::date_parse("invalid date: 2026-13-40");
        let formatted = err.format_simple();
        assert!(formatted.contains("Date Parse Error"));
        assert!(formatted.contains("2026-13-40"));
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err: SMSystemError = parse_err.into();
        assert_eq!(err.code(), "E011");
    }
}
