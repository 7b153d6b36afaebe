//! 原生值与值对象抽象
//!
//! "原生值"是跨越系统边界的唯一数据形态：由字段名到原始值
//! （字符串、数字、嵌套映射/序列、以及表示"未设置"的 null）组成的纯数据。
//! 值对象以原生值为准定义相等与无损往返转换。
//!
use crate::error::DomainResult;

/// 原生（纯数据）表示
pub type Native = serde_json::Value;

/// 值对象抽象
///
/// 每个具体类型显式实现本 trait，而不是依赖继承式的 mixin：
/// `to_native`/`from_native` 必须构成无损往返，`is_same` 以原生值为准。
pub trait Value: Sized {
    /// 转换为原生值（无失败路径）
    fn to_native(&self) -> Native;

    /// 从原生值重建；形状不符时返回错误，构造是原子的
    fn from_native(native: &Native) -> DomainResult<Self>;

    /// 结构化相等：原生值相等即视为同一值
    fn is_same(&self, other: &Self) -> bool {
        self.to_native() == other.to_native()
    }
}

/// 返回原生值的种类名（用于错误诊断中的 found 描述）
pub fn native_type_name(native: &Native) -> &'static str {
    match native {
        Native::Null => "null",
        Native::Bool(_) => "bool",
        Native::Number(_) => "number",
        Native::String(_) => "string",
        Native::Array(_) => "array",
        Native::Object(_) => "object",
    }
}
