use crate::analysis::geometry;
use crate::pose::{LandmarkFrame, LandmarkIndex, LandmarkPoint};
use serde::{Deserialize, Serialize};

/// 体幹前傾の定性分類
///
/// 反射後角度の大きさのみで区分する。左右・前後の向きは区別しない
/// （下流が既存の数値挙動を前提にしているため、向き判定は導入しない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeanCategory {
    #[serde(rename = "No lean")]
    NoLean,
    #[serde(rename = "Forward Lean")]
    ForwardLean,
    #[serde(rename = "Backward Lean")]
    BackwardLean,
}

impl LeanCategory {
    /// 反射後角度（度）から分類。5度未満はNoLean、60度未満はForwardLean。
    pub fn from_angle(angle: f32) -> Self {
        if angle < 5.0 {
            Self::NoLean
        } else if angle < 60.0 {
            Self::ForwardLean
        } else {
            Self::BackwardLean
        }
    }
}

/// 1フレーム分の体幹前傾解析結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLeanRecord {
    pub text: LeanCategory,
    pub angle: f32,
}

/// 頭部中点（両耳平均）と腰中点から体幹の鉛直に対する角度を計算する
///
/// 鉛直基準点は腰中点の真上 (hip_mid.x, 0)。角度が180度を超える場合は
/// 補角に折り返す。
pub fn analyze_body_lean(frame: &LandmarkFrame) -> BodyLeanRecord {
    let left_ear = frame.get(LandmarkIndex::LeftEar);
    let right_ear = frame.get(LandmarkIndex::RightEar);
    let left_hip = frame.get(LandmarkIndex::LeftHip);
    let right_hip = frame.get(LandmarkIndex::RightHip);

    let head_mid = LandmarkPoint::new(
        (left_ear.x + right_ear.x) / 2.0,
        (left_ear.y + right_ear.y) / 2.0,
        0.0,
    );
    let hip_mid = LandmarkPoint::new(
        (left_hip.x + right_hip.x) / 2.0,
        (left_hip.y + right_hip.y) / 2.0,
        0.0,
    );
    let vertical = LandmarkPoint::new(hip_mid.x, 0.0, 0.0);

    let mut angle = geometry::angle(vertical, hip_mid, head_mid);
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    BodyLeanRecord {
        text: LeanCategory::from_angle(angle),
        angle,
    }
}
