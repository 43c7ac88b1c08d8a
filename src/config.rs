use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrameConfig {
    /// フレーム幅（ピクセル）
    #[serde(default = "default_frame_width")]
    pub width: u32,
    /// フレーム高さ（ピクセル）
    #[serde(default = "default_frame_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    /// テンプレート幅（ピクセル）、フレーム中央に配置される
    #[serde(default = "default_target_width")]
    pub width: u32,
    /// テンプレート高さ（ピクセル）
    #[serde(default = "default_target_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// 距離正規化係数（フレーム対角線に対する比率）
    #[serde(default = "default_distance_norm_factor")]
    pub distance_norm_factor: f32,
    /// 人差し指先端の重み
    #[serde(default = "default_index_weight")]
    pub index_weight: f32,
    /// 親指先端の重み
    #[serde(default = "default_thumb_weight")]
    pub thumb_weight: f32,
    /// 中指先端の重み
    #[serde(default = "default_middle_weight")]
    pub middle_weight: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GateConfig {
    /// トリガー判定のアライメント閾値
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// 必要保持時間（秒）
    #[serde(default = "default_required_hold_seconds")]
    pub required_hold_seconds: f64,
    /// クールダウン時間（秒）
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: f64,
    /// EMA平滑化係数（履歴側の重み）
    #[serde(default = "default_smoothing_alpha")]
    pub smoothing_alpha: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotifyConfig {
    /// トリガー通知を送信するか
    #[serde(default)]
    pub enabled: bool,
    /// 通知先OSCアドレス
    #[serde(default = "default_notify_addr")]
    pub addr: String,
}

fn default_frame_width() -> u32 { 640 }
fn default_frame_height() -> u32 { 480 }
fn default_target_width() -> u32 { 256 }
fn default_target_height() -> u32 { 256 }
fn default_distance_norm_factor() -> f32 { 0.3 }
fn default_index_weight() -> f32 { 0.4 }
fn default_thumb_weight() -> f32 { 0.3 }
fn default_middle_weight() -> f32 { 0.3 }
fn default_threshold() -> f32 { 0.80 }
fn default_required_hold_seconds() -> f64 { 5.0 }
fn default_cooldown_seconds() -> f64 { 5.0 }
fn default_smoothing_alpha() -> f32 { 0.8 }
fn default_notify_addr() -> String { "127.0.0.1:39571".to_string() }

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: default_frame_width(),
            height: default_frame_height(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            width: default_target_width(),
            height: default_target_height(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            distance_norm_factor: default_distance_norm_factor(),
            index_weight: default_index_weight(),
            thumb_weight: default_thumb_weight(),
            middle_weight: default_middle_weight(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            required_hold_seconds: default_required_hold_seconds(),
            cooldown_seconds: default_cooldown_seconds(),
            smoothing_alpha: default_smoothing_alpha(),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            addr: default_notify_addr(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 読み込み失敗時はデフォルト設定を返す
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(_) => Config::default(),
        }
    }
}
