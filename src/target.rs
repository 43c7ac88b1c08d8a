/// ユーザーが手を合わせるターゲット領域（フレームピクセル座標）
///
/// セッション中は不変。フレーム寸法が変わったときのみ再計算する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TargetRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// フレーム中央に配置した領域を作る
    pub fn centered(frame_width: u32, frame_height: u32, width: u32, height: u32) -> Self {
        let x = (frame_width as f32 - width as f32) / 2.0;
        let y = (frame_height as f32 - height as f32) / 2.0;
        Self::new(x, y, width as f32, height as f32)
    }

    /// 領域の中心座標
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
