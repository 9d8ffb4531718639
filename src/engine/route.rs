// ==========================================
// 仓储货位优化系统 - 拣货路径规划
// ==========================================
// 职责: 给定入口与拣货点集合,生成访问顺序与逐段路径
// 算法: 最近邻贪心 (O(n²),非全局最优)
// 说明: 访问顺序与距离均按欧氏距离;
//       途经点为正交行走展示用途 (先横向,后纵向),不参与决策
// ==========================================

use crate::domain::{Location, PathSegment};
use tracing::debug;

/// 途经点显示名称
pub const WAYPOINT_NAME: &str = "Waypoint";

/// 最近邻贪心路径
///
/// 从 `start` 出发,每次选择未访问拣货点中距离当前位置最近者
/// (距离相同取输入下标较小者),全部访问后返回 `start`。
///
/// # 返回
/// `[start, 拣货点..., start]`,每个拣货点恰好出现一次
pub fn find_optimal_path(start: &Location, destinations: &[Location]) -> Vec<Location> {
    let mut path = Vec::with_capacity(destinations.len() + 2);
    path.push(start.clone());

    let mut visited = vec![false; destinations.len()];
    let mut current = start;

    loop {
        let mut nearest: Option<(usize, f64)> = None;
        for (idx, dest) in destinations.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let dist = current.distance_to(dest);
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((idx, dist)),
            }
        }

        let Some((idx, _)) = nearest else {
            break;
        };
        visited[idx] = true;
        current = &destinations[idx];
        path.push(current.clone());
    }

    path.push(start.clone());
    path
}

/// 路径总长度 (相邻点欧氏距离之和)
pub fn calculate_path_distance(path: &[Location]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// 两点之间的正交途经点
///
/// 先沿 x 方向逐格移动,再沿 y 方向逐格移动;不含起点,含终点 (起终点不同时)
pub fn generate_waypoints(from: &Location, to: &Location) -> Vec<Location> {
    let mut waypoints = Vec::new();
    let (mut x, mut y) = (from.x, from.y);

    let step_x = (to.x - from.x).signum();
    while x != to.x {
        x += step_x;
        waypoints.push(Location::new(x, y, WAYPOINT_NAME));
    }

    let step_y = (to.y - from.y).signum();
    while y != to.y {
        y += step_y;
        waypoints.push(Location::new(x, y, WAYPOINT_NAME));
    }

    waypoints
}

// ==========================================
// RoutePlanner - 路径规划器
// ==========================================
// 持有行走速度,用于计算分段耗时
#[derive(Debug, Clone, Copy)]
pub struct RoutePlanner {
    walking_speed: f64,
}

impl RoutePlanner {
    /// # 参数
    /// - `walking_speed`: 行走速度 (单位/分钟),必须为正数
    pub fn new(walking_speed: f64) -> Self {
        Self { walking_speed }
    }

    pub fn walking_speed(&self) -> f64 {
        self.walking_speed
    }

    /// 生成访问顺序 (见 [`find_optimal_path`])
    pub fn plan(&self, start: &Location, destinations: &[Location]) -> Vec<Location> {
        let path = find_optimal_path(start, destinations);
        debug!(
            stops = destinations.len(),
            distance = calculate_path_distance(&path),
            "路径规划完成"
        );
        path
    }

    /// 行走耗时 (分钟)
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.walking_speed
    }

    /// 将路径拆分为分段 (距离、耗时、途经点)
    pub fn build_segments(&self, path: &[Location]) -> Vec<PathSegment> {
        path.windows(2)
            .map(|w| {
                let distance = w[0].distance_to(&w[1]);
                PathSegment {
                    from: w[0].clone(),
                    to: w[1].clone(),
                    distance,
                    time_min: self.travel_time(distance),
                    waypoints: generate_waypoints(&w[0], &w[1]),
                }
            })
            .collect()
    }
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(2.0)
    }
}
