/// 生スコアのEMA平滑化フィルタ
///
/// `smoothed' = α × smoothed + (1−α) × raw`（αは履歴側の重み、既定0.8）。
/// 初期値は0.0で、セッション開始直後は必ず下から収束する。
/// 観測なし（手が未検出）のティックでは値を減衰させず凍結する。
/// 検出の一瞬の途切れでスコアが脈動するのを防ぐための仕様。
pub struct ScoreSmoother {
    alpha: f32,
    value: f32,
}

impl ScoreSmoother {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, value: 0.0 }
    }

    /// 初期値を指定して作る（セッション再開用）
    pub fn with_initial(alpha: f32, value: f32) -> Self {
        Self { alpha, value }
    }

    /// 1ティック分更新して平滑化スコアを返す
    ///
    /// `None` は観測なし: 値を変えずそのまま返す。
    pub fn update(&mut self, raw: Option<f32>) -> f32 {
        if let Some(raw) = raw {
            self.value = self.alpha * self.value + (1.0 - self.alpha) * raw;
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
