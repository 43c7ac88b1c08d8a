//! シミュレート時刻でゲートの一連の挙動を再現するシナリオランナー
//!
//! 手を中央で構え続けた場合の収束→発火→クールダウン→再発火の
//! タイムラインを30fps相当のティックで表示する。

use anyhow::Result;

use hand_scan::align::GateState;
use hand_scan::config::Config;
use hand_scan::hand::{HandLandmarks, Landmark};
use hand_scan::session::ScanSession;

const CONFIG_PATH: &str = "config.toml";
const TICK_SECONDS: f64 = 1.0 / 30.0;
const SIMULATION_SECONDS: f64 = 40.0;

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("Simulate - hand held at target center, {} fps", 30);
    println!(
        "threshold={}, hold={}s, cooldown={}s, alpha={}",
        config.gate.threshold,
        config.gate.required_hold_seconds,
        config.gate.cooldown_seconds,
        config.gate.smoothing_alpha
    );
    println!();

    let cx = config.frame.width as f32 / 2.0;
    let cy = config.frame.height as f32 / 2.0;
    let tip = Landmark::new(cx, cy);
    let hand = HandLandmarks::from_tips(tip, tip, tip);

    let mut session = ScanSession::new(&config);
    let mut prev_state = GateState::Idle;
    let mut tick = 0u64;

    loop {
        let now = tick as f64 * TICK_SECONDS;
        if now > SIMULATION_SECONDS {
            break;
        }

        // 20〜22秒は手を外してスコア凍結とホールド継続を見る
        let observation = if (20.0..22.0).contains(&now) {
            None
        } else {
            Some(&hand)
        };
        let result = session.observe(observation, now);

        if result.triggered {
            println!(
                "[{:6.2}s] TRIGGERED  score={:.3}",
                now, result.smoothed_score
            );
        } else if result.state != prev_state {
            println!(
                "[{:6.2}s] {:?} -> {:?}  score={:.3} hold={:.1}s cooldown={:.1}s",
                now,
                prev_state,
                result.state,
                result.smoothed_score,
                result.hold_duration_seconds,
                result.cooldown_remaining_seconds
            );
        }
        prev_state = result.state;
        tick += 1;
    }

    println!();
    println!("simulation done ({} ticks)", tick);
    Ok(())
}
