use crate::pose::LandmarkPoint;

/// 接地判定の許容幅（正規化座標）
pub const GROUND_TOLERANCE: f32 = 0.02;

/// 頂点p2における p1→p3 の角度（度, [0, 360)）
///
/// 2つのatan2方位角の差。負なら360を足して正規化する。
/// 180度超の反射（補角への折り返し）は呼び出し側の責任。
pub fn angle(p1: LandmarkPoint, p2: LandmarkPoint, p3: LandmarkPoint) -> f32 {
    let bearing_a = f32::atan2(p3.y - p2.y, p3.x - p2.x);
    let bearing_b = f32::atan2(p1.y - p2.y, p1.x - p2.x);
    let degrees = (bearing_a - bearing_b).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// 踵か爪先のどちらかが地面レベルの許容幅内にあるか
///
/// 画像座標系のため地面はyが大きい側。
pub fn is_ground_contact(heel_y: f32, toe_y: f32, ground_level: f32, tolerance: f32) -> bool {
    (heel_y - ground_level).abs() < tolerance || (toe_y - ground_level).abs() < tolerance
}
