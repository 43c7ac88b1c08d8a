use crate::align::hold::HoldTimer;
use crate::config::GateConfig;

/// ゲートの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// 待機中（トリガー可能、保持なし）
    Idle,
    /// 閾値超えを保持中（タイマー進行中）
    Holding,
    /// このティックでトリガーが発火した
    Triggered,
    /// クールダウン中（再トリガー抑止）
    Cooldown,
}

/// 1ティック分のゲート判定結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateTick {
    pub state: GateState,
    pub triggered: bool,
    pub hold_duration: f64,
    pub cooldown_remaining: f64,
}

/// トリガー/クールダウンの状態機械
///
/// 平滑化スコアとタイムスタンプだけを入力に取る全域関数で、
/// 内部にはホールドタイマーとクールダウン期限のみを持つ。
/// 発火条件: `保持時間 ≥ required_hold_seconds` かつ `now ≥ cooldown_until`。
/// クールダウン中に条件が揃っても黙って抑止する（キューイングしない）。
/// 境界が一致した場合はトリガーを許可する（抑止は厳密な `<` 判定）。
/// 発火時にホールドタイマーを消すため、1回の保持につき発火は最大1回。
pub struct TriggerGate {
    threshold: f32,
    required_hold_seconds: f64,
    cooldown_seconds: f64,
    hold: HoldTimer,
    cooldown_until: f64,
}

impl TriggerGate {
    pub fn new(threshold: f32, required_hold_seconds: f64, cooldown_seconds: f64) -> Self {
        Self {
            threshold,
            required_hold_seconds,
            cooldown_seconds,
            hold: HoldTimer::new(),
            // 既定は「経過済み」: 最初のティックからトリガー可能
            cooldown_until: 0.0,
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(
            config.threshold,
            config.required_hold_seconds,
            config.cooldown_seconds,
        )
    }

    /// 1ティック分更新する
    pub fn update(&mut self, smoothed_score: f32, now: f64) -> GateTick {
        let mut hold_duration = self.hold.update(smoothed_score, self.threshold, now);

        let triggered =
            hold_duration >= self.required_hold_seconds && now >= self.cooldown_until;
        if triggered {
            self.hold.reset();
            self.cooldown_until = now + self.cooldown_seconds;
            hold_duration = 0.0;
        }

        let state = if triggered {
            GateState::Triggered
        } else if now < self.cooldown_until {
            // クールダウン表示はホールド表示に優先する
            GateState::Cooldown
        } else if self.hold.is_holding() {
            GateState::Holding
        } else {
            GateState::Idle
        };

        GateTick {
            state,
            triggered,
            hold_duration,
            cooldown_remaining: self.cooldown_remaining(now),
        }
    }

    /// 外部アクション（動画再生）の完了通知
    ///
    /// クールダウン期限を完了時点から張り直す。発火時に設定済みの
    /// 期限とは別に、再生終了時にも期限を設定し直す挙動を保つ。
    pub fn action_finished(&mut self, now: f64) {
        self.cooldown_until = now + self.cooldown_seconds;
    }

    pub fn in_cooldown(&self, now: f64) -> bool {
        now < self.cooldown_until
    }

    pub fn cooldown_remaining(&self, now: f64) -> f64 {
        (self.cooldown_until - now).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_gate() -> TriggerGate {
        TriggerGate::new(0.8, 5.0, 5.0)
    }

    #[test]
    fn test_below_threshold_stays_idle() {
        let mut gate = make_gate();
        for t in 0..100 {
            let tick = gate.update(0.79, t as f64);
            assert!(!tick.triggered);
            assert_eq!(tick.state, GateState::Idle);
            assert_eq!(tick.hold_duration, 0.0);
        }
    }

    #[test]
    fn test_at_threshold_stays_idle() {
        // 閾値ちょうどは保持扱いしない
        let mut gate = make_gate();
        let tick = gate.update(0.8, 0.0);
        assert_eq!(tick.state, GateState::Idle);
    }

    #[test]
    fn test_holding_before_required_duration() {
        let mut gate = make_gate();
        let tick = gate.update(0.95, 0.0);
        assert_eq!(tick.state, GateState::Holding);
        assert!(!tick.triggered);
        let tick = gate.update(0.95, 4.9);
        assert_eq!(tick.state, GateState::Holding);
        assert!(!tick.triggered);
        assert!((tick.hold_duration - 4.9).abs() < 1e-9);
    }

    #[test]
    fn test_triggers_once_at_required_duration() {
        let mut gate = make_gate();
        let mut fired_at = Vec::new();
        for t in 0..=10 {
            let now = t as f64;
            let tick = gate.update(0.95, now);
            if tick.triggered {
                fired_at.push(now);
                assert_eq!(tick.state, GateState::Triggered);
            }
        }
        // 保持開始t=0、5秒経過のt=5で一度だけ発火（≥判定）
        assert_eq!(fired_at, vec![5.0]);
    }

    #[test]
    fn test_trigger_clears_hold() {
        let mut gate = make_gate();
        gate.update(0.95, 0.0);
        let tick = gate.update(0.95, 5.0);
        assert!(tick.triggered);
        assert_eq!(tick.hold_duration, 0.0);
        assert!(!gate.hold.is_holding());
    }

    #[test]
    fn test_cooldown_suppresses_retrigger() {
        let mut gate = make_gate();
        gate.update(0.95, 0.0);
        assert!(gate.update(0.95, 5.0).triggered);
        // 発火後もスコアを保ち続ける: t=6で新しい保持が始まり、
        // t=11で保持5秒に達するが、その時点でクールダウン(t<10)は明けている
        // 次の発火まで最低でも保持5秒ぶんは空く
        for t in [6.0, 7.0, 8.0, 9.0, 9.9] {
            let tick = gate.update(0.95, t);
            assert!(!tick.triggered, "t={}: still within cooldown or hold", t);
            assert_eq!(tick.state, GateState::Cooldown, "t={}", t);
        }
        let tick = gate.update(0.95, 10.5);
        assert!(!tick.triggered);
        assert_eq!(tick.state, GateState::Holding);
        // 保持開始はt=6なのでt=11で再発火
        let tick = gate.update(0.95, 11.0);
        assert!(tick.triggered);
    }

    #[test]
    fn test_cooldown_boundary_allows_trigger() {
        // now == cooldown_until ちょうどは許可（抑止は厳密な < 判定）
        let mut gate = make_gate();
        gate.cooldown_until = 10.0;
        gate.update(0.95, 5.0);
        let tick = gate.update(0.95, 10.0);
        assert!(tick.triggered, "trigger at exact cooldown deadline must fire");
    }

    #[test]
    fn test_suppressed_trigger_is_not_queued() {
        let mut gate = make_gate();
        gate.cooldown_until = 100.0;
        // クールダウン中に保持5秒を満たしても発火しない
        gate.update(0.95, 0.0);
        let tick = gate.update(0.95, 6.0);
        assert!(!tick.triggered);
        assert_eq!(tick.state, GateState::Cooldown);
        // 抑止された発火はキューされない。保持が継続していれば
        // クールダウン明けのティックで改めて条件判定される
        let tick = gate.update(0.95, 100.0);
        assert!(tick.triggered, "hold kept through cooldown fires once armed");
    }

    #[test]
    fn test_hold_runs_during_cooldown() {
        let mut gate = make_gate();
        gate.cooldown_until = 3.0;
        let tick = gate.update(0.95, 0.0);
        // 表示はクールダウンだが保持時間は進む
        assert_eq!(tick.state, GateState::Cooldown);
        let tick = gate.update(0.95, 2.0);
        assert_eq!(tick.state, GateState::Cooldown);
        assert_eq!(tick.hold_duration, 2.0);
    }

    #[test]
    fn test_cooldown_expires_to_idle() {
        let mut gate = make_gate();
        gate.update(0.95, 0.0);
        gate.update(0.95, 5.0); // 発火、cooldown_until = 10
        let tick = gate.update(0.0, 10.0);
        assert_eq!(tick.state, GateState::Idle);
        assert_eq!(tick.cooldown_remaining, 0.0);
    }

    #[test]
    fn test_cooldown_remaining_reported() {
        let mut gate = make_gate();
        gate.update(0.95, 0.0);
        gate.update(0.95, 5.0); // cooldown_until = 10
        let tick = gate.update(0.0, 7.5);
        assert!((tick.cooldown_remaining - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_action_finished_extends_cooldown() {
        let mut gate = make_gate();
        gate.update(0.95, 0.0);
        gate.update(0.95, 5.0); // cooldown_until = 10
        // 動画再生が8秒かかった: 完了時に期限を張り直す
        gate.action_finished(13.0);
        assert!(gate.in_cooldown(17.9));
        assert!(!gate.in_cooldown(18.0));
    }

    #[test]
    fn test_dip_and_recross_restarts_hold() {
        let mut gate = make_gate();
        gate.update(0.95, 0.0);
        gate.update(0.95, 4.0);
        gate.update(0.5, 4.5); // 一瞬落ちる
        gate.update(0.95, 5.0); // 新しい保持
        let tick = gate.update(0.95, 9.9);
        assert!(!tick.triggered, "duration restarts from the recross");
        let tick = gate.update(0.95, 10.0);
        assert!(tick.triggered);
    }

    #[test]
    fn test_zero_required_hold_fires_on_crossing() {
        let mut gate = TriggerGate::new(0.8, 0.0, 5.0);
        let tick = gate.update(0.95, 1.0);
        assert!(tick.triggered);
    }
}
