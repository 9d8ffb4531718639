// ==========================================
// 仓储货位优化系统 - 位置领域模型
// ==========================================
// 用途: 入口点、拣货点、路径途经点的轻量值对象
// ==========================================

use serde::{Deserialize, Serialize};

/// 坐标转换为人类可读的货位编号
///
/// 规则: 列 = 'A' + x, 行 = y + 1
/// 例如 (0,0) -> A1, (1,1) -> B2, (13,9) -> N10
pub fn coordinate_label(x: i32, y: i32) -> String {
    let column = if (0..26).contains(&x) {
        char::from(b'A' + x as u8).to_string()
    } else {
        // 超出字母范围时退化为数字列号
        format!("C{}", x)
    };
    format!("{}{}", column, y + 1)
}

// ==========================================
// Location - 位置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,        // 横坐标
    pub y: i32,        // 纵坐标
    pub name: String,  // 显示名称 (物品名 / Entry Point / Waypoint)
    pub label: String, // 货位编号 (A1, B2 ...)
}

impl Location {
    /// 创建位置,货位编号由坐标推导
    pub fn new(x: i32, y: i32, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
            label: coordinate_label(x, y),
        }
    }

    /// 欧氏距离
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// 坐标是否相同 (忽略名称)
    pub fn same_point(&self, other: &Location) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_label() {
        assert_eq!(coordinate_label(0, 0), "A1");
        assert_eq!(coordinate_label(1, 1), "B2");
        assert_eq!(coordinate_label(13, 9), "N10");
    }

    #[test]
    fn test_distance_to() {
        let a = Location::new(0, 0, "Entry Point");
        let b = Location::new(3, 4, "Laptop");
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
