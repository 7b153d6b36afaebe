//! entityset 过程宏
//!
//! 为具体标识类型提供一行式接入：`#[entity_id]` 把单字段 tuple struct
//! 变成完整的标识值对象（委托内部类型的序列与原生值语义）。
//!
mod entity_id;
mod utils;

use proc_macro::TokenStream;

/// 实体标识宏
/// 仅支持单字段 tuple struct（例如 `struct NoteId(SequentialId);`），
/// 内部类型须实现 `EntityId + Value`。为包装类型：
/// - 合并/追加派生：Default, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 委托实现 `EntityId`（start/next/is_null）与 `Value`（to_native/from_native）
/// - 提供 `new(inner)`、`Display`（要求内部类型实现 `Display`）与双向 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
