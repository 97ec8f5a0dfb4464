// ==========================================
// 餐厅点单系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/配置层错误为用户友好的错误消息
// 注意: 未知状态码在分类接口中就地回退，不产生错误
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::LifecycleError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("未识别的状态码: {0}")]
    UnrecognizedStatusCode(String),

    #[error("无效的状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::UnrecognizedStatusCode(code) => ApiError::UnrecognizedStatusCode(code),
            LifecycleError::InvalidTransition { from, to } => ApiError::InvalidStateTransition {
                from: from.to_string(),
                to: to.to_string(),
            },
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 错误响应（返回给前端）
// ==========================================

/// 错误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// 稳定的错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::UnrecognizedStatusCode(_) => "UNRECOGNIZED_STATUS_CODE",
            ApiError::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details: match self {
                ApiError::InvalidStateTransition { from, to } => Some(serde_json::json!({
                    "from": from,
                    "to": to,
                })),
                ApiError::UnrecognizedStatusCode(code) => Some(serde_json::json!({ "code": code })),
                _ => None,
            },
        }
    }
}

/// 将ApiError转换为JSON字符串
pub fn map_api_error(err: ApiError) -> String {
    serde_json::to_string(&err.to_response()).unwrap_or_else(|_| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::OrderItemStatus;

    #[test]
    fn test_lifecycle_error_conversion() {
        let api_err: ApiError = LifecycleError::InvalidTransition {
            from: OrderItemStatus::Served,
            to: OrderItemStatus::Pending,
        }
        .into();
        match api_err {
            ApiError::InvalidStateTransition { ref from, ref to } => {
                assert_eq!(from, "Served");
                assert_eq!(to, "Pending");
            }
            _ => panic!("Expected InvalidStateTransition"),
        }
        assert_eq!(api_err.code(), "INVALID_STATE_TRANSITION");

        let api_err: ApiError = LifecycleError::UnrecognizedStatusCode("Xyz".to_string()).into();
        assert_eq!(api_err.code(), "UNRECOGNIZED_STATUS_CODE");
    }

    #[test]
    fn test_config_error_conversion() {
        let api_err: ApiError = ConfigError::UnsupportedLocale("fr".to_string()).into();
        match api_err {
            ApiError::ConfigError(msg) => assert!(msg.contains("fr")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (ApiError::InvalidInput("domain".to_string()), "INVALID_INPUT"),
            (ApiError::UnrecognizedStatusCode("Xyz".to_string()), "UNRECOGNIZED_STATUS_CODE"),
            (
                ApiError::InvalidStateTransition {
                    from: "Served".to_string(),
                    to: "Pending".to_string(),
                },
                "INVALID_STATE_TRANSITION",
            ),
            (ApiError::ConfigError("locale".to_string()), "CONFIG_ERROR"),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.to_response().code, code);
        }
    }

    #[test]
    fn test_map_api_error() {
        let json = map_api_error(ApiError::InvalidStateTransition {
            from: "Ready".to_string(),
            to: "Pending".to_string(),
        });
        let response: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.code, "INVALID_STATE_TRANSITION");
        assert!(response.message.contains("from=Ready"));
        assert_eq!(response.details.unwrap()["to"], "Pending");

        let json = map_api_error(ApiError::InvalidInput("domain".to_string()));
        let response: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.code, "INVALID_INPUT");
        assert!(response.details.is_none());
    }
}
