/// Allows at most one pending frame computation. `H` is whatever handle the
/// host hands back when it schedules a callback.
#[derive(Debug, Clone, Copy)]
pub struct FrameGate<H> {
    pending: Option<H>,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> FrameGate<H> {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedules through `schedule` unless a computation is already pending.
    /// Returns true if something was scheduled.
    pub fn request<E>(&mut self, schedule: impl FnOnce() -> Result<H, E>) -> Result<bool, E> {
        if self.pending.is_some() {
            return Ok(false);
        }
        self.pending = Some(schedule()?);
        Ok(true)
    }

    /// Called from the scheduled callback before doing the work.
    pub fn fire(&mut self) {
        self.pending = None;
    }

    /// Takes the pending handle so the caller can cancel it.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesces_bursts() {
        let mut gate = FrameGate::<u32>::default();
        let mut scheduled = 0;
        for _ in 0..50 {
            gate.request(|| {
                scheduled += 1;
                Ok::<_, ()>(scheduled)
            })
            .unwrap();
        }
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());

        gate.fire();
        assert!(gate.request(|| Ok::<_, ()>(7)).unwrap());
        assert_eq!(gate.cancel(), Some(7));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_failed_schedule_stays_idle() {
        let mut gate = FrameGate::<u32>::default();
        assert_eq!(gate.request(|| Err("no window")), Err("no window"));
        assert!(!gate.is_pending());
    }
}
