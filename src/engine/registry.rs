// ==========================================
// 仓储货位优化系统 - 物品注册表
// ==========================================
// 职责: 物品记录的所有权 (arena) + 名称索引
// 说明: 物品与货架通过 ItemId/ShelfId 相互引用,不互相持有
// 遍历顺序: 注册顺序 (arena 下标升序)
// ==========================================

use crate::domain::{Item, ItemId, ShelfId};
use crate::engine::error::{EngineError, EngineResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    by_name: HashMap<String, ItemId>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 下一个注册物品将获得的 ID
    pub fn next_id(&self) -> ItemId {
        ItemId(self.items.len())
    }

    /// 注册物品
    ///
    /// 调用方负责保证名称未注册、货架已占用
    pub fn register(
        &mut self,
        name: impl Into<String>,
        frequency: u8,
        size: u32,
        shelf: ShelfId,
    ) -> ItemId {
        let name = name.into();
        let id = self.next_id();
        self.by_name.insert(name.clone(), id);
        self.items.push(Item {
            id,
            name,
            frequency,
            size,
            assigned_shelf: shelf,
        });
        id
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.id_of(name).and_then(|id| self.items.get(id.0))
    }

    pub fn get(&self, id: ItemId) -> EngineResult<&Item> {
        self.items.get(id.0).ok_or(EngineError::ItemNotFound(id))
    }

    pub fn get_mut(&mut self, id: ItemId) -> EngineResult<&mut Item> {
        self.items.get_mut(id.0).ok_or(EngineError::ItemNotFound(id))
    }

    /// 按注册顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
