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
macro_rules! define_student_model_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum StudentModelError {
            $($variant(String),)*
        }

        impl StudentModelError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StudentModelError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StudentModelError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StudentModelError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl StudentModelError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StudentModelError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_student_model_errors! {
    Serialization("E001", "Serialization Error"),
    EmptyPayload("E002", "Empty Payload"),
    FileOperation("E003", "File Operation Error"),
    Configuration("E004", "Configuration Error"),
}

impl StudentModelError {
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

impl fmt::Display for StudentModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StudentModelError {}

impl From<serde_json::Error> for StudentModelError {
    fn from(err: serde_json::Error) -> Self {
        StudentModelError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StudentModelError {
    fn from(err: std::io::Error) -> Self {
        StudentModelError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for StudentModelError {
    fn from(err: config::ConfigError) -> Self {
        StudentModelError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudentModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StudentModelError::serialization("test").code(), "E001");
        assert_eq!(StudentModelError::empty_payload("test").code(), "E002");
        assert_eq!(StudentModelError::file_operation("test").code(), "E003");
        assert_eq!(StudentModelError::configuration("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            StudentModelError::serialization("test").error_type(),
            "Serialization Error"
        );
        assert_eq!(
            StudentModelError::empty_payload("test").error_type(),
            "Empty Payload"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = StudentModelError::serialization("expected value at line 1");
        let formatted = err.format_simple();
        assert!(formatted.contains("Serialization Error"));
        assert!(formatted.contains("expected value at line 1"));
        assert_eq!(err.to_string(), formatted);
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: StudentModelError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: StudentModelError = io.into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("missing.json"));
    }
}
