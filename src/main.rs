use anyhow::{Context, Result};
use gait_tracker::analysis::SequenceAnalyzer;
use gait_tracker::config::Config;
use gait_tracker::pose::LandmarkFrame;
use std::fs;

const CONFIG_PATH: &str = "config.toml";

/// ランドマークJSON（フレームごとのランドマーク配列、検出失敗はnull）を
/// 読み込んで解析し、結果JSONを標準出力へ書く。
/// 動画デコードと姿勢推定は上流ツールの仕事。
fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    let path = std::env::args()
        .nth(1)
        .context("使い方: gait-analyzer <landmarks.json>")?;

    eprintln!("Gait Analyzer ({})", env!("GIT_VERSION"));
    eprintln!("入力: {}", path);
    eprintln!("地面推定ウィンドウ: {}フレーム", config.analysis.buffer_size);

    let content = fs::read_to_string(&path)
        .with_context(|| format!("ランドマークファイルを読み込めません: {}", path))?;
    let frames: Vec<Option<LandmarkFrame>> =
        serde_json::from_str(&content).context("ランドマークJSONの形式が不正です")?;

    eprintln!("動画フレーム数: {}", frames.len());

    let report = SequenceAnalyzer::analyze(&config.analysis, frames)?;

    eprintln!("有効フレーム数: {}", report.landmarks.len());
    eprintln!("最頻着地タイプ: {:?}", report.most_frequent_landing_type);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
