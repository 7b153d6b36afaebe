//! 实体集合（EntitySet）
//!
//! 不可变的有序实体容器：插入顺序在更新/删除后保持不变，
//! `last_id` 记录本世系曾发放的最高标识，只增不减（删除不回收标识）。
//! 所有"修改"操作都返回新的集合值，原值保持有效，可被多线程同时读取。
//!
use std::any::type_name;
use std::slice;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entity::Entity;
use crate::entity_id::EntityId;
use crate::error::{DomainError, DomainResult};
use crate::value::{Native, Value, native_type_name};

/// 不可变实体集合
///
/// 元素类型由泛型参数静态声明，类型化构造路径的元素类型安全在编译期保证；
/// 非类型化路径（`from_native`）仍可能遇到异质数据，在运行时以
/// `InvalidInstantiationType` 拒绝。
///
/// # 示例
///
/// ```
/// use entityset_domain::entity_set::EntitySet;
/// use entityset_domain::value::Value;
/// # use entityset_domain::entity::Entity;
/// # use entityset_domain::entity_id::SequentialId;
/// # use entityset_domain::error::{DomainError, DomainResult};
/// # use entityset_domain::value::{Native, native_type_name};
/// # use serde_json::json;
/// # #[derive(Clone, Debug)]
/// # struct Note { id: SequentialId, text: String }
/// # impl Entity for Note { type Id = SequentialId; fn id(&self) -> &SequentialId { &self.id } }
/// # impl Value for Note {
/// #     fn to_native(&self) -> Native { json!({ "id": self.id.to_native(), "text": self.text }) }
/// #     fn from_native(native: &Native) -> DomainResult<Self> {
/// #         let map = native.as_object().ok_or_else(|| DomainError::InvalidInstantiationType {
/// #             expected: "Note".to_string(), found: native_type_name(native).to_string() })?;
/// #         Ok(Self {
/// #             id: SequentialId::from_native(map.get("id").unwrap_or(&Native::Null))?,
/// #             text: map.get("text").and_then(Native::as_str).unwrap_or_default().to_string(),
/// #         })
/// #     }
/// # }
///
/// let empty = EntitySet::<Note>::default();
/// let one = empty.add_native(json!({ "text": "first" })).unwrap();
/// assert_eq!(empty.len(), 0); // 原值未被改动
/// assert_eq!(one.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct EntitySet<E: Entity> {
    set: Vec<E>,
    last_id: E::Id,
}

impl<E: Entity> EntitySet<E> {
    /// 从既有序列与最后发放的标识构造
    pub fn new(set: Vec<E>, last_id: E::Id) -> Self {
        Self { set, last_id }
    }

    /// 按标识查找；未命中返回 `None`，不是错误。O(n) 线性扫描
    pub fn get_by_id(&self, id: &E::Id) -> Option<&E> {
        self.set.iter().find(|entity| entity.id().is_same(id))
    }

    /// 从原生字段映射追加一个实体，标识由集合分配
    ///
    /// 计算 `last_id.next()` 并写入（覆盖）`fields` 的 `"id"` 键，
    /// 调用方无须也不应自带标识。返回的新集合 `last_id` 即为新分配值。
    /// `fields` 不是对象时返回 `MalformedNative`。
    pub fn add_native(&self, fields: Native) -> DomainResult<Self> {
        let next_id = self.last_id.next();

        let mut fields = match fields {
            Native::Object(map) => map,
            other => {
                return Err(DomainError::MalformedNative {
                    reason: format!(
                        "entity fields must be an object, got {}",
                        native_type_name(&other)
                    ),
                });
            }
        };
        fields.insert("id".to_string(), next_id.to_native());

        let entity = E::from_native(&Native::Object(fields))?;

        let mut set = self.set.clone();
        set.push(entity);

        Ok(Self::new(set, next_id))
    }

    /// 以标识相同为准替换既有实体，位置与其余元素保持不变
    ///
    /// 未命中时静默返回等价集合（按约定不是错误）。
    pub fn update(&self, entity: E) -> Self {
        let set = self
            .set
            .iter()
            .map(|existing| {
                if existing.id().is_same(entity.id()) {
                    entity.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();

        Self::new(set, self.last_id.clone())
    }

    /// 剔除标识相同的实体；`last_id` 保持不变（标识不复用）
    ///
    /// 未命中时静默返回等价集合（按约定不是错误）。
    pub fn remove(&self, entity: &E) -> Self {
        let set = self
            .set
            .iter()
            .filter(|existing| !existing.id().is_same(entity.id()))
            .cloned()
            .collect();

        Self::new(set, self.last_id.clone())
    }

    /// 当前内容的只读快照
    pub fn set(&self) -> &[E] {
        &self.set
    }

    /// 最后发放的标识
    pub fn last_id(&self) -> &E::Id {
        &self.last_id
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// 是否为空集合
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// 按插入顺序迭代
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.set.iter()
    }
}

impl<E: Entity> Default for EntitySet<E> {
    /// 空集合，`last_id` 为序列起点哨兵
    fn default() -> Self {
        Self::new(Vec::new(), E::Id::start())
    }
}

impl<E: Entity> Value for EntitySet<E> {
    /// `{ "set": [...], "lastId": ... }` —— 键名是原生契约的一部分
    fn to_native(&self) -> Native {
        let set: Vec<Native> = self.set.iter().map(Value::to_native).collect();

        serde_json::json!({
            "set": set,
            "lastId": self.last_id.to_native(),
        })
    }

    fn from_native(native: &Native) -> DomainResult<Self> {
        let map = native.as_object().ok_or_else(|| DomainError::MalformedNative {
            reason: format!(
                "entity set must be an object, got {}",
                native_type_name(native)
            ),
        })?;

        let elements = map
            .get("set")
            .ok_or_else(|| DomainError::MalformedNative {
                reason: "missing key 'set'".to_string(),
            })?
            .as_array()
            .ok_or_else(|| DomainError::MalformedNative {
                reason: "'set' must be an array".to_string(),
            })?;

        // 元素类型断言：异质数据在这里被整体拒绝，不产生部分构造的集合
        let mut set = Vec::with_capacity(elements.len());
        for element in elements {
            if !element.is_object() {
                return Err(DomainError::InvalidInstantiationType {
                    expected: type_name::<E>().to_string(),
                    found: native_type_name(element).to_string(),
                });
            }
            set.push(E::from_native(element)?);
        }

        let last_id = map.get("lastId").ok_or_else(|| DomainError::MalformedNative {
            reason: "missing key 'lastId'".to_string(),
        })?;
        let last_id = E::Id::from_native(last_id)?;

        Ok(Self::new(set, last_id))
    }
}

impl<E: Entity> Serialize for EntitySet<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_native().serialize(serializer)
    }
}

impl<'de, E: Entity> Deserialize<'de> for EntitySet<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let native = Native::deserialize(deserializer)?;
        Self::from_native(&native).map_err(D::Error::custom)
    }
}
