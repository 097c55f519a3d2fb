use crate::config;

/// Inline-style snapshot of an element during a reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
}

impl VisualState {
    pub const SHOWN: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
    };

    pub const fn hidden() -> Self {
        VisualState {
            opacity: 0.0,
            ..Self::SHOWN
        }
    }

    pub const fn with_x(self, x: f64) -> Self {
        VisualState { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        VisualState { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    pub const fn with_scale_x(self, scale_x: f64) -> Self {
        VisualState { scale_x, ..self }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) scaleX({})",
            self.x, self.y, self.scale, self.scale_x
        )
    }

    pub fn css_properties(&self) -> [(&'static str, String); 2] {
        [
            ("opacity", self.opacity.to_string()),
            ("transform", self.transform()),
        ]
    }
}

/// One-shot transition from `from` to `to`, optionally staggered across
/// several elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub origin: Option<&'static str>,
}

impl Tween {
    pub const fn reveal(from: VisualState, duration_ms: u32) -> Self {
        Tween {
            from,
            to: VisualState::SHOWN,
            duration_ms,
            delay_ms: 0,
            stagger_ms: 0,
            origin: None,
        }
    }

    pub const fn fade_up(offset: f64, duration_ms: u32) -> Self {
        Self::reveal(VisualState::hidden().with_y(offset), duration_ms)
    }

    pub const fn fade_from_x(offset: f64, duration_ms: u32) -> Self {
        Self::reveal(VisualState::hidden().with_x(offset), duration_ms)
    }

    pub const fn fade_scale(scale: f64, duration_ms: u32) -> Self {
        Self::reveal(VisualState::hidden().with_scale(scale), duration_ms)
    }

    pub const fn grow_x(duration_ms: u32) -> Self {
        Self::reveal(VisualState::SHOWN.with_scale_x(0.0), duration_ms)
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Tween { delay_ms, ..self }
    }

    pub const fn staggered(self, stagger_ms: u32) -> Self {
        Tween { stagger_ms, ..self }
    }

    pub const fn from_origin(self, origin: &'static str) -> Self {
        Tween {
            origin: Some(origin),
            ..self
        }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms * index as u32
    }

    /// Time from the first element starting to the last one settling,
    /// not counting the leading delay.
    pub fn span_ms(&self, count: usize) -> u32 {
        self.duration_ms + self.stagger_ms * count.saturating_sub(1) as u32
    }

    pub fn transition(&self, index: usize) -> String {
        let delay = self.delay_for(index);
        format!(
            "opacity {d}ms {ease} {delay}ms, transform {d}ms {ease} {delay}ms",
            d = self.duration_ms,
            ease = config::EASE_OUT_CUBIC,
            delay = delay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_only_drops_opacity() {
        let hidden = VisualState::hidden();
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.transform(), VisualState::SHOWN.transform());
    }

    #[test]
    fn transform_carries_offsets_and_scale() {
        let state = VisualState::hidden().with_y(40.0).with_scale(0.95);
        assert_eq!(state.transform(), "translate(0px, 40px) scale(0.95) scaleX(1)");
        let [(opacity_name, opacity), (transform_name, _)] = state.css_properties();
        assert_eq!(opacity_name, "opacity");
        assert_eq!(opacity, "0");
        assert_eq!(transform_name, "transform");
    }

    #[test]
    fn grow_x_keeps_the_line_opaque() {
        let tween = Tween::grow_x(1200).from_origin("left center");
        assert_eq!(tween.from.opacity, 1.0);
        assert_eq!(tween.from.scale_x, 0.0);
        assert_eq!(tween.to, VisualState::SHOWN);
        assert_eq!(tween.origin, Some("left center"));
    }

    #[test]
    fn stagger_offsets_each_element() {
        let tween = Tween::fade_up(50.0, 700).staggered(200).delayed(300);
        assert_eq!(tween.delay_for(0), 300);
        assert_eq!(tween.delay_for(4), 1100);
        assert_eq!(tween.span_ms(5), 1500);
        assert_eq!(tween.span_ms(0), 700);
    }

    #[test]
    fn transition_uses_fixed_easing() {
        let tween = Tween::fade_from_x(-30.0, 600).staggered(100);
        assert_eq!(
            tween.transition(2),
            format!(
                "opacity 600ms {e} 200ms, transform 600ms {e} 200ms",
                e = config::EASE_OUT_CUBIC
            )
        );
    }
}
