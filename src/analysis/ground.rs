use std::collections::VecDeque;

/// 地面レベル推定器
///
/// 各フレームの足ランドマーク最大y（最も低い点）を固定長FIFOに溜め、
/// その算術平均を平滑化済み地面レベルとして返す。
pub struct GroundEstimator {
    buffer: VecDeque<f32>,
    buffer_size: usize,
}

impl GroundEstimator {
    /// buffer_sizeは正であること（設定検証済みの値を渡す）
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(buffer_size),
            buffer_size,
        }
    }

    /// 今フレームの最大足高さを投入し、現ウィンドウの平均を返す
    ///
    /// 初回フレームはその値自身が返る（要素1の平均）。
    pub fn update(&mut self, max_foot_y: f32) -> f32 {
        self.buffer.push_back(max_foot_y);
        if self.buffer.len() > self.buffer_size {
            self.buffer.pop_front();
        }
        let sum: f32 = self.buffer.iter().sum();
        sum / self.buffer.len() as f32
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_returns_own_value() {
        let mut g = GroundEstimator::new(10);
        assert_eq!(g.update(0.9), 0.9);
    }

    #[test]
    fn test_mean_of_window() {
        let mut g = GroundEstimator::new(10);
        g.update(0.8);
        let result = g.update(0.9);
        assert!((result - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut g = GroundEstimator::new(3);
        g.update(1.0);
        g.update(2.0);
        g.update(3.0);
        // 容量3を超えると最古(1.0)が追い出され、窓は[2,3,4]
        let result = g.update(4.0);
        assert_eq!(g.len(), 3);
        assert!((result - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let mut g = GroundEstimator::new(5);
        let mut last = 0.0;
        for i in 0..100 {
            last = g.update(i as f32);
            assert!(g.len() <= 5);
        }
        // 最後の5要素 95..=99 の平均
        let expected = (95.0 + 96.0 + 97.0 + 98.0 + 99.0) / 5.0;
        assert!((last - expected).abs() < 1e-4);
    }
}
