/// 平滑化スコアが閾値を超え続けている時間を計測するタイマー
///
/// 閾値超え（厳密な `>`）の最初のティックで開始時刻を記録し、以降は
/// 最初の記録から経過時間を測る（ティックごとに張り直さない）。
/// 閾値以下に落ちた瞬間にリセットされ、部分的な持ち越しはない。
pub struct HoldTimer {
    start: Option<f64>,
}

impl HoldTimer {
    pub fn new() -> Self {
        Self { start: None }
    }

    /// 1ティック分更新し、現在の保持時間（秒）を返す
    ///
    /// 時計の逆行は前提違反だが、経過時間を0にクランプして吸収する。
    pub fn update(&mut self, score: f32, threshold: f32, now: f64) -> f64 {
        if score > threshold {
            let start = *self.start.get_or_insert(now);
            (now - start).max(0.0)
        } else {
            self.start = None;
            0.0
        }
    }

    pub fn is_holding(&self) -> bool {
        self.start.is_some()
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start
    }

    pub fn reset(&mut self) {
        self.start = None;
    }
}

impl Default for HoldTimer {
    fn default() -> Self {
        Self::new()
    }
}
