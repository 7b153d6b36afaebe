//! 实体集合全生命周期场景测试
//!
//! 以一个最小的 Note 实体走通：构造、按标识查找、追加、更新、删除、
//! 标识序列在删除后保持、原生值往返与 serde 嵌入。
//!
use anyhow::Result as AnyResult;
use entityset_domain::entity::Entity;
use entityset_domain::entity_id::{EntityId, SequentialId};
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
    value: String,
}

impl Note {
    fn new(id: u64, value: &str) -> Self {
        Self {
            id: NoteId::new(SequentialId::from(id)),
            value: value.to_string(),
        }
    }
}

impl Entity for Note {
    type Id = NoteId;

    fn id(&self) -> &NoteId {
        &self.id
    }
}

impl Value for Note {
    fn to_native(&self) -> Native {
        json!({ "id": self.id.to_native(), "value": self.value })
    }

    fn from_native(native: &Native) -> DomainResult<Self> {
        let map = native
            .as_object()
            .ok_or_else(|| DomainError::InvalidInstantiationType {
                expected: "Note".to_string(),
                found: native_type_name(native).to_string(),
            })?;

        let id = NoteId::from_native(map.get("id").unwrap_or(&Native::Null))?;
        let value = map
            .get("value")
            .and_then(Native::as_str)
            .ok_or_else(|| DomainError::MalformedNative {
                reason: "missing key 'value'".to_string(),
            })?
            .to_string();

        Ok(Self { id, value })
    }
}

fn seeded_set() -> EntitySet<Note> {
    EntitySet::new(
        vec![
            Note::new(0, "value1"),
            Note::new(1, "value2"),
            Note::new(2, "value3"),
        ],
        NoteId::new(SequentialId::from(2)),
    )
}

#[test]
fn empty_set_has_unset_last_id_and_first_add_gets_zero() -> AnyResult<()> {
    let set = EntitySet::<Note>::default();
    assert!(set.last_id().is_null());

    let set = set.add_native(json!({ "value": "value1" }))?;
    assert_eq!(set.last_id().to_native(), json!(0));
    assert_eq!(set.to_native()["set"][0]["id"], json!(0));
    Ok(())
}

#[test]
fn get_by_id_returns_the_entity_if_it_exists() {
    let set = seeded_set();
    let found = set.get_by_id(&NoteId::new(SequentialId::from(1))).unwrap();
    assert_eq!(found.value, "value2");
}

#[test]
fn get_by_id_returns_none_when_no_entity_has_the_id() {
    let set = seeded_set();
    assert!(set.get_by_id(&NoteId::new(SequentialId::from(3))).is_none());
}

#[test]
fn add_native_appends_with_the_next_id_in_the_sequence() -> AnyResult<()> {
    let set = EntitySet::new(vec![Note::new(0, "value1")], NoteId::new(SequentialId::from(0)));
    let set = set.add_native(json!({ "value": "value2" }))?;

    assert_eq!(set.to_native()["set"][1]["id"], json!(1));
    assert_eq!(set.last_id().to_native(), json!(1));
    Ok(())
}

#[test]
fn update_replaces_the_entity_which_matches_the_id() {
    let set = seeded_set();
    let set = set.update(Note::new(1, "UPDATED"));

    assert_eq!(set.len(), 3);
    assert_eq!(set.to_native()["set"][1]["value"], json!("UPDATED"));
}

#[test]
fn remove_drops_the_entity_which_matches_the_id() {
    let set = seeded_set();
    let set = set.remove(&Note::new(1, "UPDATED"));

    assert_eq!(set.len(), 2);
    assert_eq!(set.to_native()["set"][0]["id"], json!(0));
    assert_eq!(set.to_native()["set"][1]["id"], json!(2));
}

#[test]
fn update_and_remove_on_absent_id_leave_the_set_unchanged() {
    let set = seeded_set();
    let ghost = Note::new(42, "ghost");

    assert!(set.update(ghost.clone()).is_same(&set));
    assert!(set.remove(&ghost).is_same(&set));
}

// 标识序列在全部删除后仍然延续，绝不复用
#[test]
fn id_sequence_is_retained_even_after_deletes() -> AnyResult<()> {
    let mut set = EntitySet::<Note>::default();
    for value in ["value1", "value2", "value3"] {
        set = set.add_native(json!({ "value": value }))?;
    }

    for id in 0..3u64 {
        set = set.remove(&Note::new(id, ""));
    }
    assert!(set.is_empty());

    let set = set
        .add_native(json!({ "value": "value4" }))?
        .add_native(json!({ "value": "value5" }))?;

    let expected = json!([
        { "id": 3, "value": "value4" },
        { "id": 4, "value": "value5" },
    ]);
    assert_eq!(set.to_native()["set"], expected);
    Ok(())
}

// 两次追加后删除 id=0：幸存者保持原标识
#[test]
fn add_add_remove_scenario() -> AnyResult<()> {
    let set = EntitySet::<Note>::default()
        .add_native(json!({ "value": "value1" }))?
        .add_native(json!({ "value": "value2" }))?;
    let set = set.remove(&Note::new(0, ""));

    assert_eq!(
        set.to_native(),
        json!({
            "set": [{ "id": 1, "value": "value2" }],
            "lastId": 1,
        })
    );
    Ok(())
}

#[test]
fn native_round_trip_preserves_equality() -> AnyResult<()> {
    let set = seeded_set();
    let rebuilt = EntitySet::<Note>::from_native(&set.to_native())?;
    assert!(rebuilt.is_same(&set));

    // 空集合（哨兵 lastId）同样往返
    let empty = EntitySet::<Note>::default();
    let rebuilt = EntitySet::<Note>::from_native(&empty.to_native())?;
    assert!(rebuilt.is_same(&empty));
    Ok(())
}

#[test]
fn entity_set_embeds_in_json_documents() -> AnyResult<()> {
    let set = seeded_set();

    let json = serde_json::to_string(&set)?;
    let back: EntitySet<Note> = serde_json::from_str(&json)?;
    assert!(back.is_same(&set));
    Ok(())
}

#[test]
fn construction_from_heterogeneous_natives_fails_atomically() {
    let native = json!({
        "set": [
            { "id": 0, "value": "value1" },
            "test",
        ],
        "lastId": 1,
    });

    assert!(matches!(
        EntitySet::<Note>::from_native(&native),
        Err(DomainError::InvalidInstantiationType { .. })
    ));
}

#[test]
fn negative_identifier_is_rejected_wherever_it_appears() {
    assert!(matches!(
        SequentialId::from_value(-1),
        Err(DomainError::InvalidIdentifierValue { value: -1 })
    ));

    let native = json!({ "set": [], "lastId": -1 });
    assert!(matches!(
        EntitySet::<Note>::from_native(&native),
        Err(DomainError::InvalidIdentifierValue { value: -1 })
    ));
}
