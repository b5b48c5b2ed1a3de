use crate::analysis::geometry;
use crate::pose::{LandmarkFrame, LandmarkIndex};

/// 上下動（バウンス）トラッカー
///
/// 接地フレームでのみ基準腰高さを更新し、各フレームの腰中点と
/// 基準との差分を上下動として返す。基準は1シーケンス内で保持される。
///
/// 接地判定は左足の踵・爪先のみを腰中点に対して照合する。下流が
/// この数値挙動を前提にしているため両足平均には変更しない（DESIGN.md参照）。
pub struct BounceTracker {
    reference_hip_y: Option<f32>,
}

impl BounceTracker {
    pub fn new() -> Self {
        Self {
            reference_hip_y: None,
        }
    }

    /// 今フレームの上下動距離を返す
    ///
    /// 基準未設定（先頭フレーム）では腰中点が基準となり、距離は0。
    pub fn update(&mut self, frame: &LandmarkFrame) -> f32 {
        let left_hip_y = frame.get(LandmarkIndex::LeftHip).y;
        let right_hip_y = frame.get(LandmarkIndex::RightHip).y;
        let hip_mid_y = (left_hip_y + right_hip_y) / 2.0;

        let left_heel_y = frame.get(LandmarkIndex::LeftHeel).y;
        let left_toe_y = frame.get(LandmarkIndex::LeftFootIndex).y;

        let grounded = geometry::is_ground_contact(
            left_heel_y,
            left_toe_y,
            hip_mid_y,
            geometry::GROUND_TOLERANCE,
        );
        if self.reference_hip_y.is_none() || grounded {
            self.reference_hip_y = Some(hip_mid_y);
        }

        // reference_hip_yはこの時点で必ずSome
        (hip_mid_y - self.reference_hip_y.unwrap_or(hip_mid_y)).abs()
    }

    pub fn reset(&mut self) {
        self.reference_hip_y = None;
    }
}

impl Default for BounceTracker {
    fn default() -> Self {
        Self::new()
    }
}
