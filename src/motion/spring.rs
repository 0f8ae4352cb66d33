#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Distance from the target below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Page-level scroll progress. Over-damped, no visible bounce.
    pub const PROGRESS: SpringConfig = SpringConfig {
        mass: 0.15,
        stiffness: 120.0,
        damping: 18.0,
        rest_delta: 0.0001,
        rest_speed: 0.001,
    };

    /// Pointer following, in pixels.
    pub const POINTER: SpringConfig = SpringConfig {
        mass: 0.2,
        stiffness: 240.0,
        damping: 20.0,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };

    /// Custom cursor ring, in pixels. Snappy with a slight overshoot.
    pub const CURSOR: SpringConfig = SpringConfig {
        mass: 1.0,
        stiffness: 700.0,
        damping: 25.0,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::PROGRESS
    }
}

/// Damped spring trailing a target value. Advanced with the closed-form
/// solution of the oscillator so any frame delta is stable.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Moves straight to `value` with no motion.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return false;
        }
        if dt > 0.0 {
            let (x, v) = self.displacement_after(dt);
            self.value = self.target + x;
            self.velocity = v;
        }
        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }

    fn displacement_after(&self, t: f64) -> (f64, f64) {
        let x0 = self.value - self.target;
        let v0 = self.velocity;
        let w0 = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            let decay = (-w0 * t).exp();
            let b = v0 + w0 * x0;
            let x = (x0 + b * t) * decay;
            let v = (v0 - w0 * b * t) * decay;
            (x, v)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            let b = (v0 + zeta * w0 * x0) / wd;
            let (sin, cos) = (wd * t).sin_cos();
            let x = decay * (x0 * cos + b * sin);
            let v = decay * (v0 * cos - (x0 * wd + zeta * w0 * b) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn frames_to_rest(spring: &mut Spring, limit: usize) -> Option<usize> {
        (1..=limit).find(|_| !spring.step(FRAME))
    }

    #[test]
    fn test_presets_are_overdamped() {
        assert!(SpringConfig::PROGRESS.damping_ratio() > 1.0);
        assert!(SpringConfig::POINTER.damping_ratio() > 1.0);
    }

    #[test]
    fn test_progress_converges() {
        let mut spring = Spring::new(SpringConfig::PROGRESS, 0.0);
        spring.set_target(1.0);
        let frames = frames_to_rest(&mut spring, 120).expect("spring should settle");
        assert!(frames > 1);
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_pointer_converges() {
        let mut spring = Spring::new(SpringConfig::POINTER, 640.0);
        spring.set_target(340.0);
        assert!(frames_to_rest(&mut spring, 120).is_some());
        assert_eq!(spring.value(), 340.0);
    }

    #[test]
    fn test_cursor_trails_then_settles() {
        assert!(SpringConfig::CURSOR.damping_ratio() < 1.0);
        let mut spring = Spring::new(SpringConfig::CURSOR, -100.0);
        spring.set_target(400.0);
        spring.step(FRAME);
        assert!(spring.value() > -100.0 && spring.value() < 400.0);
        assert!(frames_to_rest(&mut spring, 240).is_some());
        assert_eq!(spring.value(), 400.0);
    }

    #[test]
    fn test_no_overshoot_from_rest() {
        let mut spring = Spring::new(SpringConfig::PROGRESS, 0.2);
        spring.set_target(0.9);
        for _ in 0..200 {
            spring.step(FRAME);
            assert!(spring.value() <= 0.9);
        }
    }

    #[test]
    fn test_retarget_mid_flight_settles_on_last_target() {
        let mut spring = Spring::new(SpringConfig::PROGRESS, 0.0);
        let samples = [0.1, 0.15, 0.4, 0.38, 0.6, 0.55];
        for s in samples {
            spring.set_target(s);
            spring.step(FRAME);
        }
        assert!(frames_to_rest(&mut spring, 120).is_some());
        assert_eq!(spring.value(), 0.55);
    }

    #[test]
    fn test_large_step_is_stable() {
        let mut spring = Spring::new(SpringConfig::POINTER, 0.0);
        spring.set_target(100.0);
        spring.step(2.0);
        assert!((spring.value() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_underdamped_still_settles() {
        let config = SpringConfig {
            mass: 1.0,
            stiffness: 200.0,
            damping: 5.0,
            rest_delta: 0.001,
            rest_speed: 0.001,
        };
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);
        let mut peak: f64 = 0.0;
        for _ in 0..600 {
            spring.step(FRAME);
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_snap_stops_motion() {
        let mut spring = Spring::new(SpringConfig::PROGRESS, 0.0);
        spring.set_target(1.0);
        spring.step(FRAME);
        spring.snap(0.5);
        assert!(spring.is_at_rest());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 0.5);
    }
}
