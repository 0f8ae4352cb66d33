/// Maps page progress to the top inset (percent) of a fixed panel sitting
/// beneath the scrolling content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurtainReveal {
    pub hidden: f64,
    pub revealed: f64,
}

impl Default for CurtainReveal {
    fn default() -> Self {
        Self {
            hidden: 100.0,
            revealed: 0.0,
        }
    }
}

impl CurtainReveal {
    pub fn new(hidden: f64, revealed: f64) -> Self {
        Self { hidden, revealed }
    }

    pub fn inset(&self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= 0.0 {
            self.hidden
        } else if progress >= 1.0 {
            self.revealed
        } else {
            self.hidden + (self.revealed - self.hidden) * progress
        }
    }

    pub fn clip_path(&self, progress: f64) -> String {
        format!("inset({}% 0 0 0)", self.inset(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        let curtain = CurtainReveal::new(100.0, 18.0);
        assert_eq!(curtain.inset(0.0), 100.0);
        assert_eq!(curtain.inset(1.0), 18.0);
        assert_eq!(curtain.inset(-0.5), 100.0);
        assert_eq!(curtain.inset(3.0), 18.0);
    }

    #[test]
    fn test_monotonic() {
        let curtain = CurtainReveal::default();
        let mut last = curtain.inset(0.0);
        for step in 1..=100 {
            let inset = curtain.inset(step as f64 / 100.0);
            assert!(inset <= last);
            last = inset;
        }
        assert_eq!(curtain.inset(0.5), 50.0);
    }

    #[test]
    fn test_clip_path() {
        let curtain = CurtainReveal::default();
        assert_eq!(curtain.clip_path(0.0), "inset(100% 0 0 0)");
        assert_eq!(curtain.clip_path(0.25), "inset(75% 0 0 0)");
        assert_eq!(curtain.clip_path(1.0), "inset(0% 0 0 0)");
    }
}
