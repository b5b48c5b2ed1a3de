use crate::pose::{LandmarkFrame, LandmarkIndex};
use serde::{Deserialize, Serialize};

/// 有意なヒップドロップとみなす左右差の閾値（正規化座標）
pub const HIP_DROP_THRESHOLD: f32 = 0.05;

/// 1フレーム分の骨盤傾斜解析結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HipDropRecord {
    pub hip_drop: f32,
    pub significant: bool,
}

/// 左右ヒップのy差から骨盤傾斜を計算する。フレーム間の状態は持たない。
pub fn analyze_hip_drop(frame: &LandmarkFrame) -> HipDropRecord {
    let left_hip_y = frame.get(LandmarkIndex::LeftHip).y;
    let right_hip_y = frame.get(LandmarkIndex::RightHip).y;
    let hip_drop = (left_hip_y - right_hip_y).abs();
    HipDropRecord {
        hip_drop,
        significant: hip_drop > HIP_DROP_THRESHOLD,
    }
}
