use std::time::Instant;

/// 単調増加するフレーム時刻源
///
/// 生成時点を0秒とした経過秒数を返す。コア側はf64秒のタイムスタンプ
/// のみを受け取るので、テストではシミュレート時刻を直接渡せる。
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    /// 経過秒数
    pub fn seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
