/// MediaPipe Hands の 21 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmarkIndex {
    pub const COUNT: usize = 21;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wrist),
            1 => Some(Self::ThumbCmc),
            2 => Some(Self::ThumbMcp),
            3 => Some(Self::ThumbIp),
            4 => Some(Self::ThumbTip),
            5 => Some(Self::IndexFingerMcp),
            6 => Some(Self::IndexFingerPip),
            7 => Some(Self::IndexFingerDip),
            8 => Some(Self::IndexFingerTip),
            9 => Some(Self::MiddleFingerMcp),
            10 => Some(Self::MiddleFingerPip),
            11 => Some(Self::MiddleFingerDip),
            12 => Some(Self::MiddleFingerTip),
            13 => Some(Self::RingFingerMcp),
            14 => Some(Self::RingFingerPip),
            15 => Some(Self::RingFingerDip),
            16 => Some(Self::RingFingerTip),
            17 => Some(Self::PinkyMcp),
            18 => Some(Self::PinkyPip),
            19 => Some(Self::PinkyDip),
            20 => Some(Self::PinkyTip),
            _ => None,
        }
    }
}

/// 単一ランドマーク（フレームピクセル座標）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 別の点までのユークリッド距離
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 1フレームで検出された片手の21ランドマーク
///
/// 毎ティック外部のハンドトラッキングが新規生成する使い捨てデータ。
/// コア側は保持しない。
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    pub points: [Landmark; HandLandmarkIndex::COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; HandLandmarkIndex::COUNT]) -> Self {
        Self { points }
    }

    /// インデックスでランドマークを取得
    pub fn get(&self, index: HandLandmarkIndex) -> &Landmark {
        &self.points[index as usize]
    }

    pub fn index_tip(&self) -> &Landmark {
        self.get(HandLandmarkIndex::IndexFingerTip)
    }

    pub fn thumb_tip(&self) -> &Landmark {
        self.get(HandLandmarkIndex::ThumbTip)
    }

    pub fn middle_tip(&self) -> &Landmark {
        self.get(HandLandmarkIndex::MiddleFingerTip)
    }

    /// 3本の指先のみ指定して構築（残りは原点）
    pub fn from_tips(index: Landmark, thumb: Landmark, middle: Landmark) -> Self {
        let mut points = [Landmark::default(); HandLandmarkIndex::COUNT];
        points[HandLandmarkIndex::IndexFingerTip as usize] = index;
        points[HandLandmarkIndex::ThumbTip as usize] = thumb;
        points[HandLandmarkIndex::MiddleFingerTip as usize] = middle;
        Self { points }
    }
}

impl Default for HandLandmarks {
    fn default() -> Self {
        Self {
            points: [Landmark::default(); HandLandmarkIndex::COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_index_count() {
        assert_eq!(HandLandmarkIndex::COUNT, 21);
    }

    #[test]
    fn test_landmark_index_from_index() {
        assert_eq!(HandLandmarkIndex::from_index(0), Some(HandLandmarkIndex::Wrist));
        assert_eq!(HandLandmarkIndex::from_index(4), Some(HandLandmarkIndex::ThumbTip));
        assert_eq!(HandLandmarkIndex::from_index(8), Some(HandLandmarkIndex::IndexFingerTip));
        assert_eq!(HandLandmarkIndex::from_index(12), Some(HandLandmarkIndex::MiddleFingerTip));
        assert_eq!(HandLandmarkIndex::from_index(20), Some(HandLandmarkIndex::PinkyTip));
        assert_eq!(HandLandmarkIndex::from_index(21), None);
    }

    #[test]
    fn test_distance_to() {
        let lm = Landmark::new(3.0, 4.0);
        assert!((lm.distance_to(0.0, 0.0) - 5.0).abs() < 1e-6);
        assert_eq!(lm.distance_to(3.0, 4.0), 0.0);
    }

    #[test]
    fn test_from_tips() {
        let hand = HandLandmarks::from_tips(
            Landmark::new(1.0, 2.0),
            Landmark::new(3.0, 4.0),
            Landmark::new(5.0, 6.0),
        );
        assert_eq!(*hand.index_tip(), Landmark::new(1.0, 2.0));
        assert_eq!(*hand.thumb_tip(), Landmark::new(3.0, 4.0));
        assert_eq!(*hand.middle_tip(), Landmark::new(5.0, 6.0));
        // その他のランドマークは原点
        assert_eq!(*hand.get(HandLandmarkIndex::Wrist), Landmark::default());
    }
}
