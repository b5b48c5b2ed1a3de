use serde::{Deserialize, Serialize};

/// 着地タイプ（片足・1フレームごとの排他的分類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingType {
    Frontfoot,
    Heelfoot,
    Midfoot,
    None,
}

/// 片足の着地タイプ判定
///
/// 判定順序が重要: 両方が地面レベル以深ならmidfoot。
/// この判定を先に行わないと踵・前足部に誤分類される。
pub fn classify_landing(heel_y: f32, toe_y: f32, ground_assump: f32) -> LandingType {
    if heel_y >= ground_assump && toe_y >= ground_assump {
        LandingType::Midfoot
    } else if heel_y >= ground_assump {
        LandingType::Heelfoot
    } else if toe_y >= ground_assump {
        LandingType::Frontfoot
    } else {
        LandingType::None
    }
}

/// 1フレーム分の着地解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingRecord {
    pub ground_assump: f32,
    pub left_toe_y: f32,
    pub left_heel_y: f32,
    pub left_landing_type: LandingType,
    pub right_toe_y: f32,
    pub right_heel_y: f32,
    pub right_landing_type: LandingType,
}

/// 着地タイプ別の出現数カウンタ
///
/// noneは集計対象外。most_frequent()は frontfoot → heelfoot → midfoot の
/// 固定順で最初に最大値へ達したタイプを返す（同数時も決定的）。
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingTally {
    frontfoot: u32,
    heelfoot: u32,
    midfoot: u32,
}

impl LandingTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, landing: LandingType) {
        match landing {
            LandingType::Frontfoot => self.frontfoot += 1,
            LandingType::Heelfoot => self.heelfoot += 1,
            LandingType::Midfoot => self.midfoot += 1,
            LandingType::None => {}
        }
    }

    /// 最頻着地タイプ。非none着地が1つもなければ None を返す
    pub fn most_frequent(&self) -> LandingType {
        let ordered = [
            (LandingType::Frontfoot, self.frontfoot),
            (LandingType::Heelfoot, self.heelfoot),
            (LandingType::Midfoot, self.midfoot),
        ];
        let mut best = LandingType::None;
        let mut best_count = 0;
        for (landing, count) in ordered {
            if count > best_count {
                best = landing;
                best_count = count;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_midfoot() {
        assert_eq!(classify_landing(0.9, 0.9, 0.5), LandingType::Midfoot);
    }

    #[test]
    fn test_classify_heelfoot() {
        assert_eq!(classify_landing(0.9, 0.1, 0.5), LandingType::Heelfoot);
    }

    #[test]
    fn test_classify_frontfoot() {
        assert_eq!(classify_landing(0.1, 0.9, 0.5), LandingType::Frontfoot);
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(classify_landing(0.1, 0.1, 0.5), LandingType::None);
    }

    #[test]
    fn test_classify_boundary_equal_is_contact() {
        // ground_assumpちょうどは >= で接地側
        assert_eq!(classify_landing(0.5, 0.5, 0.5), LandingType::Midfoot);
        assert_eq!(classify_landing(0.5, 0.4, 0.5), LandingType::Heelfoot);
    }

    #[test]
    fn test_tally_most_frequent() {
        let mut tally = LandingTally::new();
        for _ in 0..3 {
            tally.record(LandingType::Frontfoot);
        }
        for _ in 0..5 {
            tally.record(LandingType::Heelfoot);
        }
        for _ in 0..2 {
            tally.record(LandingType::Midfoot);
        }
        assert_eq!(tally.most_frequent(), LandingType::Heelfoot);
    }

    #[test]
    fn test_tally_ignores_none() {
        let mut tally = LandingTally::new();
        tally.record(LandingType::None);
        tally.record(LandingType::None);
        tally.record(LandingType::Midfoot);
        assert_eq!(tally.most_frequent(), LandingType::Midfoot);
    }

    #[test]
    fn test_tally_tie_break_is_declaration_order() {
        // 同数なら frontfoot → heelfoot → midfoot の先勝ち
        let mut tally = LandingTally::new();
        tally.record(LandingType::Heelfoot);
        tally.record(LandingType::Midfoot);
        assert_eq!(tally.most_frequent(), LandingType::Heelfoot);
    }

    #[test]
    fn test_tally_all_zero_returns_none_sentinel() {
        let tally = LandingTally::new();
        assert_eq!(tally.most_frequent(), LandingType::None);
    }

    #[test]
    fn test_landing_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&LandingType::Frontfoot).unwrap(),
            "\"frontfoot\""
        );
        assert_eq!(
            serde_json::to_string(&LandingType::None).unwrap(),
            "\"none\""
        );
    }
}
