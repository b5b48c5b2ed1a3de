use crate::analysis::body_lean::{self, BodyLeanRecord};
use crate::analysis::bounce::BounceTracker;
use crate::analysis::ground::GroundEstimator;
use crate::analysis::hip_drop::{self, HipDropRecord};
use crate::analysis::landing::{classify_landing, LandingRecord, LandingTally, LandingType};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::pose::{LandmarkFrame, LandmarkIndex};
use serde::Serialize;

/// シーケンス解析の最終結果
///
/// 5つの出力列はすべて同じ長さで、同一インデックスが同一フレームに対応する。
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub landmarks: Vec<LandmarkFrame>,
    pub landing_analysis: Vec<LandingRecord>,
    pub most_frequent_landing_type: LandingType,
    pub hip_drop_analysis: Vec<HipDropRecord>,
    pub body_lean_analysis: Vec<BodyLeanRecord>,
    pub vertical_bounces: Vec<f32>,
}

/// シーケンスオーケストレータ
///
/// 1シーケンス（1本の動画）分の解析状態を抱え、フレームを1枚ずつ消費する。
/// 地面推定バッファと基準腰高さはこのインスタンスに閉じており、
/// 別シーケンスの解析と状態を共有することはない。
///
/// finish()がselfを消費するため、完了後のアナライザにフレームを
/// 追加することは型レベルでできない。
pub struct SequenceAnalyzer {
    ground: GroundEstimator,
    bounce: BounceTracker,
    tally: LandingTally,
    landmarks: Vec<LandmarkFrame>,
    landing_analysis: Vec<LandingRecord>,
    hip_drop_analysis: Vec<HipDropRecord>,
    body_lean_analysis: Vec<BodyLeanRecord>,
    vertical_bounces: Vec<f32>,
}

impl SequenceAnalyzer {
    /// 設定を検証してアナライザを構築する
    ///
    /// buffer_sizeが0なら最初のフレームを待たずここで失敗する。
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            ground: GroundEstimator::new(config.buffer_size),
            bounce: BounceTracker::new(),
            tally: LandingTally::new(),
            landmarks: Vec::new(),
            landing_analysis: Vec::new(),
            hip_drop_analysis: Vec::new(),
            body_lean_analysis: Vec::new(),
            vertical_bounces: Vec::new(),
        })
    }

    /// 有効フレームを1枚処理し、各出力列に1レコードずつ追加する
    pub fn push(&mut self, frame: LandmarkFrame) {
        let left_heel_y = frame.get(LandmarkIndex::LeftHeel).y;
        let right_heel_y = frame.get(LandmarkIndex::RightHeel).y;
        let left_toe_y = frame.get(LandmarkIndex::LeftFootIndex).y;
        let right_toe_y = frame.get(LandmarkIndex::RightFootIndex).y;

        // 地面推定は着地分類より先（分類が推定値を消費する）
        let max_foot_y = left_heel_y
            .max(right_heel_y)
            .max(left_toe_y)
            .max(right_toe_y);
        let ground_assump = self.ground.update(max_foot_y);

        let left_landing_type = classify_landing(left_heel_y, left_toe_y, ground_assump);
        let right_landing_type = classify_landing(right_heel_y, right_toe_y, ground_assump);
        self.tally.record(left_landing_type);
        self.tally.record(right_landing_type);

        self.landing_analysis.push(LandingRecord {
            ground_assump,
            left_toe_y,
            left_heel_y,
            left_landing_type,
            right_toe_y,
            right_heel_y,
            right_landing_type,
        });

        self.hip_drop_analysis.push(hip_drop::analyze_hip_drop(&frame));
        self.body_lean_analysis
            .push(body_lean::analyze_body_lean(&frame));
        self.vertical_bounces.push(self.bounce.update(&frame));
        self.landmarks.push(frame);
    }

    /// 処理済みフレーム数
    pub fn frame_count(&self) -> usize {
        self.landmarks.len()
    }

    /// シーケンスを閉じて集計結果を返す
    ///
    /// 有効フレームが0枚ならEmptySequence。非none着地が1つもなかった
    /// 場合の最頻着地タイプは LandingType::None。
    pub fn finish(self) -> Result<SequenceReport, AnalysisError> {
        if self.landmarks.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }
        Ok(SequenceReport {
            most_frequent_landing_type: self.tally.most_frequent(),
            landmarks: self.landmarks,
            landing_analysis: self.landing_analysis,
            hip_drop_analysis: self.hip_drop_analysis,
            body_lean_analysis: self.body_lean_analysis,
            vertical_bounces: self.vertical_bounces,
        })
    }

    /// フレームソースを最後まで消費して1シーケンス分を解析する
    ///
    /// Noneは検出失敗フレーム: どの出力列にも追加せず読み飛ばすため、
    /// 出力列は生の動画フレーム数より短くなりうる。
    pub fn analyze<I>(config: &AnalysisConfig, frames: I) -> Result<SequenceReport, AnalysisError>
    where
        I: IntoIterator<Item = Option<LandmarkFrame>>,
    {
        let mut analyzer = Self::new(config)?;
        for frame in frames {
            if let Some(frame) = frame {
                analyzer.push(frame);
            }
        }
        analyzer.finish()
    }
}
