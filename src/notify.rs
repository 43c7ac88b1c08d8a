use anyhow::Result;
use rosc::{encoder, OscMessage, OscPacket, OscType};
use std::net::UdpSocket;

/// 通知先のデフォルトアドレス
pub const NOTIFY_DEFAULT_ADDR: &str = "127.0.0.1:39571";

/// トリガー通知のOSCアドレスパス
pub const TRIGGER_OSC_ADDR: &str = "/hand_scan/trigger";

/// トリガー発火を外部プレイヤーへ知らせるOSCメッセージを構築
/// 引数: 平滑化スコア, タイムスタンプ（秒）
pub fn build_trigger_message(score: f32, now: f64) -> OscMessage {
    OscMessage {
        addr: TRIGGER_OSC_ADDR.to_string(),
        args: vec![OscType::Float(score), OscType::Double(now)],
    }
}

/// OSCメッセージをバイト列にエンコード
pub fn encode_trigger_message(msg: &OscMessage) -> Result<Vec<u8>> {
    let packet = OscPacket::Message(msg.clone());
    let encoded = encoder::encode(&packet)?;
    Ok(encoded)
}

/// トリガー通知クライアント
///
/// コアはfire-and-forget: 送信後の再生状況は関知しない。
pub struct TriggerNotifier {
    socket: UdpSocket,
    target_addr: String,
}

impl TriggerNotifier {
    pub fn new(target_addr: &str) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        Ok(Self {
            socket,
            target_addr: target_addr.to_string(),
        })
    }

    /// デフォルトアドレス(127.0.0.1:39571)で作成
    pub fn default_addr() -> Result<Self> {
        Self::new(NOTIFY_DEFAULT_ADDR)
    }

    /// トリガー発火を送信
    pub fn send(&self, score: f32, now: f64) -> Result<()> {
        let msg = build_trigger_message(score, now);
        let data = encode_trigger_message(&msg)?;
        self.socket.send_to(&data, &self.target_addr)?;
        Ok(())
    }
}
