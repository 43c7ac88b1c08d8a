use crate::align::{AlignmentScorer, GateState, ScoreSmoother, TriggerGate};
use crate::config::Config;
use crate::hand::HandLandmarks;
use crate::target::TargetRegion;

/// 1ティック分の観測結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    pub smoothed_score: f32,
    pub state: GateState,
    pub hold_duration_seconds: f64,
    pub cooldown_remaining_seconds: f64,
    pub triggered: bool,
}

/// スキャンセッション: スコア計算→平滑化→ゲート判定のティック境界
///
/// 可変状態はすべてこの構造体が所有する。グローバル状態を持たないので
/// 複数セッションを独立に並行実行できる。ティックは厳密に逐次で、
/// `observe` の呼び出し中以外に状態が変わることはない。
/// 時計は単調非減少であることを前提とする（逆行は0クランプで吸収）。
pub struct ScanSession {
    scoring: crate::config::ScoringConfig,
    target_size: (u32, u32),
    scorer: AlignmentScorer,
    smoother: ScoreSmoother,
    gate: TriggerGate,
}

impl ScanSession {
    pub fn new(config: &Config) -> Self {
        let target = TargetRegion::centered(
            config.frame.width,
            config.frame.height,
            config.target.width,
            config.target.height,
        );
        Self {
            scoring: config.scoring.clone(),
            target_size: (config.target.width, config.target.height),
            scorer: AlignmentScorer::new(
                &config.scoring,
                target,
                config.frame.width,
                config.frame.height,
            ),
            smoother: ScoreSmoother::new(config.gate.smoothing_alpha),
            gate: TriggerGate::from_config(&config.gate),
        }
    }

    /// 1ティック消費する
    ///
    /// `landmarks` が `None`（手の未検出）の場合はスコアラーを呼ばず、
    /// スムーザーに観測なしを渡す。ゲート判定は毎ティック行う。
    pub fn observe(&mut self, landmarks: Option<&HandLandmarks>, now: f64) -> TickResult {
        let raw = landmarks.map(|hand| self.scorer.score(hand));
        let smoothed = self.smoother.update(raw);
        let tick = self.gate.update(smoothed, now);

        TickResult {
            smoothed_score: smoothed,
            state: tick.state,
            hold_duration_seconds: tick.hold_duration,
            cooldown_remaining_seconds: tick.cooldown_remaining,
            triggered: tick.triggered,
        }
    }

    /// 外部アクション（動画再生）の完了通知をゲートへ転送する
    pub fn action_finished(&mut self, now: f64) {
        self.gate.action_finished(now);
    }

    /// フレーム寸法の変更。ターゲット領域と対角線を再計算する
    pub fn set_frame_size(&mut self, width: u32, height: u32) {
        let target =
            TargetRegion::centered(width, height, self.target_size.0, self.target_size.1);
        self.scorer = AlignmentScorer::new(&self.scoring, target, width, height);
    }
}
