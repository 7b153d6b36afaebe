//! 领域层统一错误定义
//!
//! 本核心只有两类真正的失败：构造集合时元素类型不符、以负值构造标识。
//! 查找未命中、更新/删除未命中都不是错误（见 `entity_set`），
//! 其余变体服务于原生值解析与 serde 集成。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    /// 集合构造时元素不是声明的实体类型
    #[error("invalid instantiation type: expected={expected}, found={found}")]
    InvalidInstantiationType { expected: String, found: String },

    /// 以负值构造实体标识
    #[error("invalid identifier value: {value}")]
    InvalidIdentifierValue { value: i64 },

    /// 原生值缺少必需的键或形状不符
    #[error("malformed native value: {reason}")]
    MalformedNative { reason: String },

    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
