// ==========================================
// 仓储货位优化系统 - 文本渲染
// ==========================================
// 职责: 将查询结果与履约报告渲染为终端文本
// 红线: 只读消费 API 结果,不修改仓库状态
// ==========================================
// 矩阵坐标: 列 A..N (x=0..13), 行 11..1 自上而下 (y=10..0)
// ==========================================

use crate::api::{ApiResult, WarehouseApi};
use crate::domain::{
    FulfillmentReport, Location, ProcessOutcome, QueueStatus, RebalanceReport, Zone, ZoneSummary,
};
use crate::engine::{GRID_MAX_X, GRID_MAX_Y};

const EMPTY_CELL: &str = ".";

// ==========================================
// 矩阵绘制
// ==========================================

struct Matrix {
    cells: Vec<Vec<String>>,
}

impl Matrix {
    fn blank() -> Self {
        let width = (GRID_MAX_X + 1) as usize;
        let height = (GRID_MAX_Y + 1) as usize;
        Self {
            cells: vec![vec![EMPTY_CELL.to_string(); width]; height],
        }
    }

    /// 坐标超出网格时忽略
    fn mark(&mut self, x: i32, y: i32, value: impl Into<String>) {
        if (0..=GRID_MAX_X).contains(&x) && (0..=GRID_MAX_Y).contains(&y) {
            self.cells[y as usize][x as usize] = value.into();
        }
    }

    fn draw(&self) -> String {
        let mut out = String::from("     ");
        for x in 0..=GRID_MAX_X {
            out.push_str(&format!("{:>3}", column_letter(x)));
        }
        out.push('\n');

        for y in (0..=GRID_MAX_Y).rev() {
            out.push_str(&format!("{:>4} ", y + 1));
            for cell in &self.cells[y as usize] {
                out.push_str(&format!("{:>3}", cell));
            }
            out.push('\n');
        }
        out
    }
}

fn column_letter(x: i32) -> char {
    char::from(b'A' + x as u8)
}

fn section(title: &str) -> String {
    format!("\n=== {} ===\n", title)
}

// ==========================================
// 仓库布局
// ==========================================

/// 仓库布局矩阵 + 分区配置 + 货架物品表
pub fn render_layout(api: &WarehouseApi) -> ApiResult<String> {
    let mut out = section("Warehouse Layout Matrix");
    let mut matrix = Matrix::blank();

    let entry = api.entry_point();
    matrix.mark(entry.x, entry.y, "E");

    // 物品编码按货架枚举顺序分配
    let mut coded: Vec<(usize, String, String, Zone)> = Vec::new();
    for shelf in api.shelves() {
        if let Some(name) = api.occupant_name(shelf) {
            let code = coded.len() + 1;
            matrix.mark(shelf.x, shelf.y, code.to_string());
            coded.push((code, name.to_string(), shelf.label.clone(), shelf.zone));
        }
    }
    out.push_str(&matrix.draw());

    let threshold = api.config().hot_threshold;
    out.push_str(&section("Zone Configuration"));
    out.push_str(&format!("\nHot Zone Shelves (Frequency >= {}):\n  ", threshold));
    let hot_labels: Vec<&str> = api
        .shelves()
        .iter()
        .filter(|s| s.zone.is_hot())
        .map(|s| s.label.as_str())
        .collect();
    for (i, chunk) in hot_labels.chunks(10).enumerate() {
        if i > 0 {
            out.push_str(",\n  ");
        }
        out.push_str(&chunk.join(", "));
    }
    out.push_str(&format!(
        "\n\nAll other shelves are Cold Zone (Frequency < {})\n",
        threshold
    ));

    out.push_str(&section("Legend"));
    out.push_str(&format!("  E = Entry Point ({})\n", entry.label));
    out.push_str("  1-9 = Item code (see table below)\n");
    out.push_str("  . = Empty shelf or space\n");

    if !coded.is_empty() {
        out.push_str(&section("Items on Shelves"));
        out.push_str(&format!(
            "{:<5}{:<20}{:<12}{:<10}{:<10}{}\n",
            "Code", "Item", "Location", "Zone", "Freq", "Size"
        ));
        out.push_str(&format!("{}\n", "-".repeat(70)));
        for (code, name, label, zone) in &coded {
            let item = api.get_item(name)?;
            out.push_str(&format!(
                "{:<5}{:<20}{:<12}{:<10}{:<10}{}\n",
                code,
                name,
                label,
                zone.to_string(),
                item.frequency,
                item.size
            ));
        }
    }

    Ok(out)
}

// ==========================================
// 拣货路径
// ==========================================

/// 路径地图: S=起点, 数字=拣货顺序, E=终点
pub fn render_path_map(path: &[Location]) -> String {
    let mut out = section("Path Visualization on Map");
    let mut matrix = Matrix::blank();

    let last = path.len().saturating_sub(1);
    for (i, loc) in path.iter().enumerate() {
        let mark = if i == 0 {
            "S".to_string()
        } else if i == last {
            "E".to_string()
        } else {
            i.to_string()
        };
        matrix.mark(loc.x, loc.y, mark);
    }
    out.push_str(&matrix.draw());

    out.push_str("\nLegend:\n");
    out.push_str("  S = Start (Entry)\n");
    out.push_str("  1-9 = Pick sequence\n");
    out.push_str("  E = End/Return\n");
    out.push_str("  . = Empty\n");
    out
}

/// 分段明细 (途经点、距离、耗时) + 合计
pub fn render_detailed_path(report: &FulfillmentReport) -> String {
    let mut out = section("Detailed Picking Path");

    for (i, seg) in report.segments.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!(
                "\n{}. START: {} ({})",
                i + 1,
                seg.from.label,
                seg.from.name
            ));
        } else {
            out.push_str(&format!(
                "\n{}. PICK ITEM: {} at {}",
                i + 1,
                seg.from.name,
                seg.from.label
            ));
        }
        out.push_str(&format!("\n   -> Going to {} ({})", seg.to.label, seg.to.name));

        if seg.waypoints.is_empty() {
            out.push_str(&format!(
                "\n   Direct path: {} -> {}",
                seg.from.label, seg.to.label
            ));
        } else {
            let hops: Vec<&str> = seg.waypoints.iter().map(|w| w.label.as_str()).collect();
            out.push_str(&format!("\n   Path: {} -> {}", seg.from.label, hops.join(" -> ")));
        }
        out.push_str(&format!(
            "\n   Distance: {:.2} units | Time: {:.2} mins\n",
            seg.distance, seg.time_min
        ));
    }

    let rule = "=".repeat(50);
    out.push_str(&format!("\n{}\n", rule));
    out.push_str(&format!("TOTAL DISTANCE: {:.2} units\n", report.total_distance));
    out.push_str(&format!(
        "ESTIMATED TOTAL TIME: {:.2} minutes\n",
        report.total_time_min
    ));
    out.push_str(&format!("{}\n", rule));
    out
}

// ==========================================
// 订单处理结果
// ==========================================

/// 单个订单的完整处理输出
pub fn render_outcome(outcome: &ProcessOutcome) -> String {
    match outcome {
        ProcessOutcome::NoOrdersPending => "\nNo orders to process!\n".to_string(),
        ProcessOutcome::Unfulfillable {
            order_id,
            priority,
            missing_items,
        } => {
            let mut out = order_banner(*order_id, priority.is_prime());
            out.push_str("\nItems in this order:\n");
            for name in missing_items {
                out.push_str(&format!("  - {} - NOT FOUND!\n", name));
            }
            out.push_str("\nNo valid items. Order cannot be fulfilled.\n");
            out
        }
        ProcessOutcome::Fulfilled(report) => render_fulfillment(report),
    }
}

fn order_banner(order_id: u32, prime: bool) -> String {
    let rule = "=".repeat(60);
    let kind = if prime { "PRIME" } else { "Regular" };
    format!("\n{}\n  Processing {} Order #{}\n{}\n", rule, kind, order_id, rule)
}

fn render_fulfillment(report: &FulfillmentReport) -> String {
    let mut out = order_banner(report.order_id, report.priority.is_prime());

    out.push_str("\nItems in this order:\n");
    for pick in &report.picks {
        out.push_str(&format!(
            "  + {} (Qty: {}) at {} [{}]\n",
            pick.item_name, pick.quantity, pick.location.label, pick.zone
        ));
    }
    for name in &report.missing_items {
        out.push_str(&format!("  - {} - NOT FOUND!\n", name));
    }

    out.push_str(&render_detailed_path(report));
    out.push_str(&render_path_map(&report.path));
    out.push_str(&format!("\n[OK] Order #{} completed!\n", report.order_id));

    out.push_str(&section("Updating Item Frequencies"));
    for change in &report.frequency_changes {
        let arrow = if change.ordered { "↑" } else { "↓" };
        out.push_str(&format!(
            "  {} {}: {} -> {}\n",
            arrow, change.item_name, change.old_frequency, change.new_frequency
        ));
    }

    out.push_str(&render_rebalance(&report.rebalance));
    out
}

/// 再平衡结果
pub fn render_rebalance(report: &RebalanceReport) -> String {
    let mut out = section("Checking Zone Assignments");
    if report.is_balanced() {
        out.push_str("  ✓ All items are in correct zones\n");
        return out;
    }
    for name in &report.mismatched {
        out.push_str(&format!("  ⚠ {} is in the wrong zone\n", name));
    }

    out.push_str(&section("Rebalancing Zones"));
    for mv in &report.moves {
        out.push_str(&format!(
            "  ✓ Moved '{}' from {} ({}) to {} ({})\n",
            mv.item_name, mv.from_zone, mv.from_label, mv.to_zone, mv.to_label
        ));
    }
    for failure in &report.failures {
        out.push_str(&format!(
            "  ✗ No space to move '{}' into {} (stays at {})\n",
            failure.item_name, failure.target_zone, failure.label
        ));
    }
    out
}

// ==========================================
// 汇总查询
// ==========================================

/// 分区占用统计
pub fn render_zone_summary(summary: &ZoneSummary, hot_threshold: u8) -> String {
    let mut out = section("Warehouse Zones Summary");
    for (title, cmp, zone) in [
        ("Hot", ">=", &summary.hot),
        ("Cold", "<", &summary.cold),
    ] {
        out.push_str(&format!(
            "\n{} Zone (Frequency {} {}):\n",
            title, cmp, hot_threshold
        ));
        out.push_str(&format!("  Total Shelves: {}\n", zone.total));
        out.push_str(&format!("  Occupied: {}\n", zone.occupied));
        out.push_str(&format!("  Available: {}\n", zone.available));
    }
    out
}

/// 库存明细表
pub fn render_inventory(api: &WarehouseApi) -> ApiResult<String> {
    let mut out = section("Warehouse Inventory");
    out.push_str(&format!("Entry Point: {}\n\n", api.entry_point().label));
    out.push_str(&format!(
        "{:<20}{:<10}{:<8}{:<12}{:<10}\n",
        "Item", "Frequency", "Size", "Location", "Zone"
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));

    for row in api.inventory()? {
        out.push_str(&format!(
            "{:<20}{:<10}{:<8}{:<12}{:<10}\n",
            row.item_name,
            row.frequency,
            row.size,
            row.label,
            row.zone.to_string()
        ));
    }
    Ok(out)
}

/// 队列状态
pub fn render_queue_status(status: &QueueStatus) -> String {
    let mut out = section("Order Status");
    out.push_str(&format!("Prime Orders: {}\n", status.prime));
    out.push_str(&format!("Regular Orders: {}\n", status.regular));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Order;

    fn sample_api() -> WarehouseApi {
        let mut api = WarehouseApi::default();
        api.add_item("Laptop", 85, 150).unwrap();
        api.add_item("Printer", 25, 300).unwrap();
        api
    }

    #[test]
    fn test_layout_marks_entry_and_items() {
        let api = sample_api();
        let text = render_layout(&api).unwrap();

        // 第 1 行: 入口在 A1
        let row1 = text
            .lines()
            .find(|l| l.trim_start().starts_with("1 "))
            .unwrap();
        assert!(row1.contains('E'));
        // 第 2 行: Laptop 在 B2 (编码 1), Printer 在 E2 (编码 2)
        let row2 = text
            .lines()
            .find(|l| l.trim_start().starts_with("2 "))
            .unwrap();
        let cells: Vec<&str> = row2.split_whitespace().collect();
        assert_eq!(cells[2], "1");
        assert_eq!(cells[5], "2");
        assert!(text.contains("Laptop"));
        assert!(text.contains("B2, C2, D2, B3"));
    }

    #[test]
    fn test_path_map_marks_sequence() {
        let path = vec![
            Location::new(0, 0, "Entry Point"),
            Location::new(1, 1, "Laptop"),
            Location::new(0, 0, "Entry Point"),
        ];
        let text = render_path_map(&path);
        let row2 = text
            .lines()
            .find(|l| l.trim_start().starts_with("2 "))
            .unwrap();
        assert!(row2.contains('1'));
        // 终点覆盖起点
        let row1 = text
            .lines()
            .find(|l| l.trim_start().starts_with("1 "))
            .unwrap();
        assert!(row1.contains('E'));
        assert!(!row1.contains('S'));
    }

    #[test]
    fn test_outcome_rendering() {
        let mut api = sample_api();
        api.add_order(Order::regular(1).with_item("Laptop", 1).with_item("Ghost", 1));
        let outcome = api.process_next_order().unwrap();
        let text = render_outcome(&outcome);

        assert!(text.contains("Processing Regular Order #1"));
        assert!(text.contains("+ Laptop (Qty: 1) at B2 [HOT]"));
        assert!(text.contains("- Ghost - NOT FOUND!"));
        assert!(text.contains("TOTAL DISTANCE: 2.83 units"));
        assert!(text.contains("↑ Laptop: 85 -> 87"));
        assert!(text.contains("↓ Printer: 25 -> 24"));

        let empty = api.process_next_order().unwrap();
        assert_eq!(render_outcome(&empty), "\nNo orders to process!\n");
    }

    #[test]
    fn test_zone_summary_and_queue() {
        let api = sample_api();
        let text = render_zone_summary(&api.zone_summary(), 60);
        assert!(text.contains("Hot Zone (Frequency >= 60)"));
        assert!(text.contains("Total Shelves: 9"));
        assert!(text.contains("Total Shelves: 121"));

        let status = render_queue_status(&api.queue_status());
        assert!(status.contains("Prime Orders: 0"));
    }

    #[test]
    fn test_inventory_lists_in_registration_order() {
        let api = sample_api();
        let text = render_inventory(&api).unwrap();
        let laptop = text.find("Laptop").unwrap();
        let printer = text.find("Printer").unwrap();
        assert!(laptop < printer);
        assert!(text.contains("Entry Point: A1"));
    }
}
