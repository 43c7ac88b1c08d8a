use anyhow::Result;
use std::io::{self, Write};

use hand_scan::clock::FrameClock;
use hand_scan::config::Config;
use hand_scan::hand::{HandLandmarks, Landmark};
use hand_scan::notify::TriggerNotifier;
use hand_scan::session::ScanSession;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== Hand Scan - Gate Test ===");
    println!("フレーム: {}x{}", config.frame.width, config.frame.height);
    println!("ターゲット: {}x{} (中央配置)", config.target.width, config.target.height);
    println!(
        "ゲート: threshold={}, hold={}s, cooldown={}s, alpha={}",
        config.gate.threshold,
        config.gate.required_hold_seconds,
        config.gate.cooldown_seconds,
        config.gate.smoothing_alpha
    );
    println!("通知: {}", if config.notify.enabled { &config.notify.addr } else { "OFF" });
    println!();
    println!("コマンド:");
    println!("  h ix iy tx ty mx my  - 指先座標を入力 (人差し指・親指・中指)");
    println!("  n                    - 手なしティック");
    println!("  d                    - 再生完了通知");
    println!("  q                    - 終了");
    println!();

    let notifier = if config.notify.enabled {
        Some(TriggerNotifier::new(&config.notify.addr)?)
    } else {
        None
    };

    let mut session = ScanSession::new(&config);
    let clock = FrameClock::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let parts: Vec<&str> = input.trim().split_whitespace().collect();

        if parts.is_empty() {
            continue;
        }

        let now = clock.seconds();
        match parts[0] {
            "h" if parts.len() == 7 => {
                let coords: Vec<f32> = match parts[1..].iter().map(|s| s.parse()).collect() {
                    Ok(coords) => coords,
                    Err(_) => {
                        println!("座標を解析できません");
                        continue;
                    }
                };
                let hand = HandLandmarks::from_tips(
                    Landmark::new(coords[0], coords[1]),
                    Landmark::new(coords[2], coords[3]),
                    Landmark::new(coords[4], coords[5]),
                );
                let result = session.observe(Some(&hand), now);
                print_result(&result);
                if result.triggered {
                    println!("トリガー発火! 再生を開始してください");
                    if let Some(notifier) = &notifier {
                        notifier.send(result.smoothed_score, now)?;
                        println!("通知を送信しました");
                    }
                }
            }
            "n" => {
                let result = session.observe(None, now);
                print_result(&result);
            }
            "d" => {
                session.action_finished(now);
                println!("再生完了。クールダウンを再設定しました");
            }
            "q" => {
                println!("終了します");
                break;
            }
            _ => {
                println!("不明なコマンド: {}", parts[0]);
            }
        }
    }

    Ok(())
}

fn print_result(result: &hand_scan::session::TickResult) {
    println!(
        "  score={:.3} state={:?} hold={:.1}s cooldown={:.1}s",
        result.smoothed_score,
        result.state,
        result.hold_duration_seconds,
        result.cooldown_remaining_seconds
    );
}
