//! 演示：以不可变实体集合管理一组备注
//!
//! 运行：`cargo run -p entityset-domain --example note_set`
//!
use anyhow::Result as AnyResult;
use entityset_domain::entity::Entity;
use entityset_domain::entity_id::SequentialId;
use entityset_domain::entity_set::EntitySet;
use entityset_domain::error::{DomainError, DomainResult};
use entityset_domain::value::{Native, Value, native_type_name};
use entityset_macros::entity_id;
use serde_json::json;

#[entity_id]
pub struct NoteId(SequentialId);

#[derive(Clone, Debug)]
struct Note {
    id: NoteId,
    text: String,
}

impl Entity for Note {
    type Id = NoteId;

    fn id(&self) -> &NoteId {
        &self.id
    }
}

impl Value for Note {
    fn to_native(&self) -> Native {
        json!({ "id": self.id.to_native(), "text": self.text })
    }

    fn from_native(native: &Native) -> DomainResult<Self> {
        let map = native
            .as_object()
            .ok_or_else(|| DomainError::InvalidInstantiationType {
                expected: "Note".to_string(),
                found: native_type_name(native).to_string(),
            })?;

        Ok(Self {
            id: NoteId::from_native(map.get("id").unwrap_or(&Native::Null))?,
            text: map
                .get("text")
                .and_then(Native::as_str)
                .ok_or_else(|| DomainError::MalformedNative {
                    reason: "missing key 'text'".to_string(),
                })?
                .to_string(),
        })
    }
}

fn main() -> AnyResult<()> {
    // 空集合：last_id 为未设置哨兵，第一次追加得到标识 0
    let empty = EntitySet::<Note>::default();

    let set = empty
        .add_native(json!({ "text": "buy milk" }))?
        .add_native(json!({ "text": "water plants" }))?
        .add_native(json!({ "text": "file taxes" }))?;

    println!("after 3 adds: {}", set.to_native());

    // 每次操作产生新值，empty 始终可用
    println!("original is untouched: {}", empty.to_native());

    // 删除不回收标识：下一次追加得到 3
    let first = set.set()[0].clone();
    let set = set.remove(&first);
    let set = set.add_native(json!({ "text": "call dentist" }))?;

    println!("after remove + add: {}", set.to_native());

    // 原生值往返
    let rebuilt = EntitySet::<Note>::from_native(&set.to_native())?;
    assert!(rebuilt.is_same(&set));
    println!("round trip ok, last id = {}", set.last_id());

    Ok(())
}
