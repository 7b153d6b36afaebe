//! 实体集合领域基础库（entityset-domain）
//!
//! 提供不可变、按序列号寻址的实体集合抽象，用于在应用中实现：
//! - 实体标识（`entity_id`）：单调递增的序列标识，带显式"未设置"哨兵状态
//! - 实体（`entity`）：以标识寻址、可与原生值互转的值对象
//! - 实体集合（`entity_set`）：增删改查全部为纯函数，每次操作返回新集合值
//! - 原生值（`value`）：纯数据（plain-data）表示与结构化相等语义
//!
//! 本 crate 只定义内存中的数据结构契约与最小必要的错误类型，不包含持久化、
//! 查询语言或网络协议；任何 I/O 与表现层都属于调用方。
//!
//! 典型用法：
//! 1. 为具体标识类型实现 `EntityId`（或用 `entityset-macros` 的
//!    `#[entity_id]` 包装 `SequentialId`）；
//! 2. 为具体实体实现 `Entity` 与 `Value`；
//! 3. 持有一个 `EntitySet<E>` 值，通过 `add_native`/`update`/`remove`
//!    派生新版本，原值始终保持有效。
//!
pub mod entity;
pub mod entity_id;
pub mod entity_set;
pub mod error;
pub mod value;

// 允许在本 crate 内部通过 ::entityset_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::entityset_domain 路径。
extern crate self as entityset_domain;
