use crate::config::ScoringConfig;
use crate::hand::HandLandmarks;
use crate::target::TargetRegion;

/// 指先とターゲット領域中心の距離からアライメントスコアを計算する
///
/// 各指先の距離を `distance_norm_factor × フレーム対角線` で正規化し、
/// `1 − 正規化距離` を点ごとのスコアとする（中心で1.0、下限なし、
/// クランプしない）。3点を重み付き平均して1つのスカラーにまとめる。
pub struct AlignmentScorer {
    target_center: (f32, f32),
    norm_distance: f32,
    index_weight: f32,
    thumb_weight: f32,
    middle_weight: f32,
}

impl AlignmentScorer {
    pub fn new(
        config: &ScoringConfig,
        target: TargetRegion,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        let w = frame_width as f32;
        let h = frame_height as f32;
        let diagonal = (w * w + h * h).sqrt();
        Self {
            target_center: target.center(),
            norm_distance: diagonal * config.distance_norm_factor,
            index_weight: config.index_weight,
            thumb_weight: config.thumb_weight,
            middle_weight: config.middle_weight,
        }
    }

    /// 1フレーム分の生スコア
    ///
    /// 手が検出されなかったティックでは呼ばない（呼び出し側が
    /// スムーザーに「観測なし」を渡す）。
    pub fn score(&self, hand: &HandLandmarks) -> f32 {
        let (cx, cy) = self.target_center;

        let index_score = 1.0 - hand.index_tip().distance_to(cx, cy) / self.norm_distance;
        let thumb_score = 1.0 - hand.thumb_tip().distance_to(cx, cy) / self.norm_distance;
        let middle_score = 1.0 - hand.middle_tip().distance_to(cx, cy) / self.norm_distance;

        index_score * self.index_weight
            + thumb_score * self.thumb_weight
            + middle_score * self.middle_weight
    }
}
