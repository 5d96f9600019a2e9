// File: crates/pulsechart/src/transition.rs
// Summary: Time-parameterized tweens with cubic-in-out easing and re-targeting.

/// Cubic-in-out easing on `t` in [0, 1].
#[inline]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

/// One animated scalar. Evaluation is pure in `now` (milliseconds on the
/// caller's clock); nothing advances until the caller asks for a value.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    /// A tween already at rest on `v`.
    pub fn fixed(v: f64) -> Self {
        Self { from: v, to: v, start_ms: 0.0, duration_ms: 0.0 }
    }

    /// Start animating toward `to` over `duration_ms`, departing from the
    /// value currently displayed. Interrupting an in-flight tween therefore
    /// re-targets without a visual jump.
    pub fn retarget(&mut self, now: f64, to: f64, duration_ms: f64) {
        self.from = self.value(now);
        self.to = to;
        self.start_ms = now;
        self.duration_ms = duration_ms.max(0.0);
    }

    /// Displayed value at `now`.
    pub fn value(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let p = (now - self.start_ms) / self.duration_ms;
        if p >= 1.0 {
            self.to
        } else if p <= 0.0 {
            self.from
        } else {
            self.from + (self.to - self.from) * ease_cubic_in_out(p)
        }
    }

    /// True once the displayed value has settled on the target.
    pub fn done(&self, now: f64) -> bool {
        self.duration_ms <= 0.0 || now - self.start_ms >= self.duration_ms
    }
}

/// An animated `[min, max]` axis domain.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedDomain {
    pub min: Tween,
    pub max: Tween,
}

impl AnimatedDomain {
    pub fn fixed(min: f64, max: f64) -> Self {
        Self { min: Tween::fixed(min), max: Tween::fixed(max) }
    }

    pub fn retarget(&mut self, now: f64, min: f64, max: f64, duration_ms: f64) {
        self.min.retarget(now, min, duration_ms);
        self.max.retarget(now, max, duration_ms);
    }

    /// Displayed endpoints at `now`.
    pub fn value(&self, now: f64) -> (f64, f64) {
        (self.min.value(now), self.max.value(now))
    }

    /// Final endpoints the domain is heading toward.
    pub fn target(&self) -> (f64, f64) {
        (self.min.to, self.max.to)
    }
}
