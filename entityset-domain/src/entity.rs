//! 实体（Entity）基础抽象
//!
//! 实体是以标识寻址的值对象。标识只由所属集合在插入时分配，
//! 调用方不为插入自选标识。
//!
use std::fmt;

use crate::entity_id::EntityId;
use crate::value::Value;

/// 具备唯一标识的实体抽象
pub trait Entity: Value + Clone + fmt::Debug {
    /// 实体标识类型
    type Id: EntityId;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
