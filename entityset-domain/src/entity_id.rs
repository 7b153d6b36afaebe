//! 实体标识（EntityId）
//!
//! 标识是单调递增的序列值，由集合在插入时分配，删除后不复用。
//! `SequentialId` 是提供的具体实现：显式"未设置"哨兵 + 构造期非负校验。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value::{Native, Value, native_type_name};

/// 实体标识抽象
///
/// 序列语义：`start()` 为起始哨兵；`next()` 是确定性的后继运算，
/// 无失败路径；`is_null()` 仅对哨兵为真。
pub trait EntityId: Value + Clone + fmt::Debug {
    /// 序列起点（未设置哨兵），纯工厂
    fn start() -> Self;

    /// 后继标识：哨兵的后继为 0，n 的后继为 n+1
    fn next(&self) -> Self;

    /// 是否为未设置哨兵
    fn is_null(&self) -> bool;
}

/// 序列标识（提供的默认实现）
///
/// 内部为 `Option<u64>`：`None` 表示"尚未发放任何标识"。
/// 原生形态是裸数字或 null，serde 派生即得到同一形态。
///
/// # 示例
///
/// ```
/// use entityset_domain::entity_id::{EntityId, SequentialId};
///
/// let start = SequentialId::start();
/// assert!(start.is_null());
///
/// let first = start.next();
/// assert_eq!(first.value(), Some(0));
/// assert_eq!(first.next().value(), Some(1));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequentialId(Option<u64>);

impl SequentialId {
    /// 从外部整数构造；负值以 `InvalidIdentifierValue` 拒绝
    ///
    /// # 示例
    ///
    /// ```
    /// use entityset_domain::entity_id::SequentialId;
    ///
    /// let id = SequentialId::from_value(7).unwrap();
    /// assert_eq!(id.value(), Some(7));
    /// assert!(SequentialId::from_value(-1).is_err());
    /// ```
    pub fn from_value(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::InvalidIdentifierValue { value });
        }
        Ok(Self(Some(value as u64)))
    }

    /// 底层值；哨兵为 `None`
    pub const fn value(&self) -> Option<u64> {
        self.0
    }
}

impl EntityId for SequentialId {
    fn start() -> Self {
        Self(None)
    }

    fn next(&self) -> Self {
        Self(Some(self.0.map_or(0, |value| value + 1)))
    }

    fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl Value for SequentialId {
    fn to_native(&self) -> Native {
        match self.0 {
            Some(value) => Native::from(value),
            None => Native::Null,
        }
    }

    fn from_native(native: &Native) -> DomainResult<Self> {
        match native {
            Native::Null => Ok(Self(None)),
            Native::Number(number) => {
                if let Some(value) = number.as_u64() {
                    Ok(Self(Some(value)))
                } else if let Some(value) = number.as_i64() {
                    Err(DomainError::InvalidIdentifierValue { value })
                } else {
                    Err(DomainError::MalformedNative {
                        reason: format!("identifier must be an integer, got {number}"),
                    })
                }
            }
            other => Err(DomainError::MalformedNative {
                reason: format!(
                    "identifier must be a number or null, got {}",
                    native_type_name(other)
                ),
            }),
        }
    }
}

impl fmt::Display for SequentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "unset"),
        }
    }
}

impl From<u64> for SequentialId {
    fn from(value: u64) -> Self {
        Self(Some(value))
    }
}
