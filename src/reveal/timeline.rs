use super::visual::Tween;

/// Places tweens one after another, each step allowed to overlap the end of
/// everything placed before it. Steps come out with their `delay_ms` set to
/// their start time on the timeline.
#[derive(Debug, Default)]
pub struct Timeline {
    end_ms: u32,
    steps: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` is how many elements the tween animates (matters for
    /// staggered steps), `overlap_ms` how far before the current end it starts.
    pub fn then(mut self, tween: Tween, count: usize, overlap_ms: u32) -> Self {
        let start = self.end_ms.saturating_sub(overlap_ms);
        let placed = tween.delayed(start + tween.delay_ms);
        self.end_ms = self.end_ms.max(placed.delay_ms + placed.span_ms(count));
        self.steps.push(placed);
        self
    }

    pub fn end_ms(&self) -> u32 {
        self.end_ms
    }

    pub fn into_steps(self) -> Vec<Tween> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlaps_are_relative_to_timeline_end() {
        let timeline = Timeline::new()
            .then(Tween::fade_up(40.0, 800), 1, 0)
            .then(Tween::fade_up(30.0, 700), 1, 500)
            .then(Tween::fade_up(30.0, 700), 1, 400)
            .then(Tween::fade_from_x(-20.0, 500).staggered(100), 4, 300)
            .then(Tween::fade_up(20.0, 600), 1, 200)
            .then(Tween::fade_scale(0.95, 900), 1, 800);

        assert_eq!(timeline.end_ms(), 2300);
        let starts: Vec<u32> = timeline.into_steps().iter().map(|s| s.delay_ms).collect();
        assert_eq!(starts, vec![0, 300, 600, 1000, 1600, 1400]);
    }

    #[test]
    fn overlap_never_starts_before_zero() {
        let timeline = Timeline::new().then(Tween::fade_up(10.0, 300), 1, 1_000);
        assert_eq!(timeline.end_ms(), 300);
        assert_eq!(timeline.into_steps()[0].delay_ms, 0);
    }

    #[test]
    fn early_step_does_not_shrink_the_end() {
        let timeline = Timeline::new()
            .then(Tween::fade_up(10.0, 1_000), 1, 0)
            .then(Tween::fade_up(10.0, 100), 1, 900);
        assert_eq!(timeline.end_ms(), 1_000);
    }
}
