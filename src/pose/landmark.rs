use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// 姿勢推定モデルの 33 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::LeftEyeInner),
            2 => Some(Self::LeftEye),
            3 => Some(Self::LeftEyeOuter),
            4 => Some(Self::RightEyeInner),
            5 => Some(Self::RightEye),
            6 => Some(Self::RightEyeOuter),
            7 => Some(Self::LeftEar),
            8 => Some(Self::RightEar),
            9 => Some(Self::MouthLeft),
            10 => Some(Self::MouthRight),
            11 => Some(Self::LeftShoulder),
            12 => Some(Self::RightShoulder),
            13 => Some(Self::LeftElbow),
            14 => Some(Self::RightElbow),
            15 => Some(Self::LeftWrist),
            16 => Some(Self::RightWrist),
            17 => Some(Self::LeftPinky),
            18 => Some(Self::RightPinky),
            19 => Some(Self::LeftIndex),
            20 => Some(Self::RightIndex),
            21 => Some(Self::LeftThumb),
            22 => Some(Self::RightThumb),
            23 => Some(Self::LeftHip),
            24 => Some(Self::RightHip),
            25 => Some(Self::LeftKnee),
            26 => Some(Self::RightKnee),
            27 => Some(Self::LeftAnkle),
            28 => Some(Self::RightAnkle),
            29 => Some(Self::LeftHeel),
            30 => Some(Self::RightHeel),
            31 => Some(Self::LeftFootIndex),
            32 => Some(Self::RightFootIndex),
            _ => None,
        }
    }
}

/// 単一ランドマーク座標
///
/// 正規化画像座標 (yは下向きに増加)。zはカメラからの相対深度。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Default for LandmarkPoint {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// 1フレーム分の全ランドマーク
///
/// 要素数は必ず LandmarkIndex::COUNT。構築時に検証されるため、
/// get() は範囲チェックなしでアクセスできる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LandmarkPoint>", into = "Vec<LandmarkPoint>")]
pub struct LandmarkFrame {
    points: Vec<LandmarkPoint>,
}

impl LandmarkFrame {
    /// インデックスでランドマークを取得
    pub fn get(&self, index: LandmarkIndex) -> LandmarkPoint {
        self.points[index as usize]
    }

    pub fn points(&self) -> &[LandmarkPoint] {
        &self.points
    }
}

impl TryFrom<Vec<LandmarkPoint>> for LandmarkFrame {
    type Error = AnalysisError;

    fn try_from(points: Vec<LandmarkPoint>) -> Result<Self, Self::Error> {
        if points.len() != LandmarkIndex::COUNT {
            return Err(AnalysisError::InvalidFrame {
                expected: LandmarkIndex::COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }
}

impl From<LandmarkFrame> for Vec<LandmarkPoint> {
    fn from(frame: LandmarkFrame) -> Self {
        frame.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_index_count() {
        assert_eq!(LandmarkIndex::COUNT, 33);
    }

    #[test]
    fn test_landmark_index_from_index() {
        assert_eq!(LandmarkIndex::from_index(0), Some(LandmarkIndex::Nose));
        assert_eq!(LandmarkIndex::from_index(29), Some(LandmarkIndex::LeftHeel));
        assert_eq!(
            LandmarkIndex::from_index(32),
            Some(LandmarkIndex::RightFootIndex)
        );
        assert_eq!(LandmarkIndex::from_index(33), None);
    }

    #[test]
    fn test_frame_arity_enforced() {
        let result = LandmarkFrame::try_from(vec![LandmarkPoint::default(); 17]);
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidFrame {
                expected: 33,
                actual: 17
            })
        ));
    }

    #[test]
    fn test_frame_get() {
        let mut points = vec![LandmarkPoint::default(); LandmarkIndex::COUNT];
        points[LandmarkIndex::LeftHip as usize] = LandmarkPoint::new(0.4, 0.5, 0.0);

        let frame = LandmarkFrame::try_from(points).unwrap();
        let hip = frame.get(LandmarkIndex::LeftHip);
        assert_eq!(hip.x, 0.4);
        assert_eq!(hip.y, 0.5);
    }

    #[test]
    fn test_frame_serde_rejects_wrong_arity() {
        let json = serde_json::to_string(&vec![LandmarkPoint::default(); 5]).unwrap();
        let result: Result<LandmarkFrame, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
