use super::visual::Tween;

/// What starts a binding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Fires as soon as the section mounts.
    Mount,
    /// Fires when the selected element crosses the start line.
    Viewport(&'static str),
}

/// Which elements the tween runs on. Selectors are resolved inside the
/// owning section only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    Element(&'static str),
    ChildrenOf(&'static str),
    Matching(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub trigger: Trigger,
    pub target: Target,
    pub tween: Tween,
}

impl RevealSpec {
    pub const fn on_view(trigger: &'static str, target: Target, tween: Tween) -> Self {
        RevealSpec {
            trigger: Trigger::Viewport(trigger),
            target,
            tween,
        }
    }

    /// Trigger and target are the same element.
    pub const fn element(selector: &'static str, tween: Tween) -> Self {
        Self::on_view(selector, Target::Element(selector), tween)
    }

    pub const fn on_mount(target: Target, tween: Tween) -> Self {
        RevealSpec {
            trigger: Trigger::Mount,
            target,
            tween,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingState {
    Idle,
    Armed,
    Fired,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct RevealBinding {
    spec: RevealSpec,
    state: BindingState,
}

impl RevealBinding {
    pub fn new(spec: RevealSpec) -> Self {
        RevealBinding {
            spec,
            state: BindingState::Idle,
        }
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn arm(&mut self) -> bool {
        if self.state != BindingState::Idle {
            return false;
        }
        self.state = BindingState::Armed;
        true
    }

    /// Hands out the spec exactly once, on the Armed -> Fired edge.
    pub fn fire(&mut self) -> Option<RevealSpec> {
        if self.state != BindingState::Armed {
            return None;
        }
        self.state = BindingState::Fired;
        Some(self.spec)
    }

    pub fn cancel(&mut self) -> bool {
        if self.state == BindingState::Cancelled {
            return false;
        }
        self.state = BindingState::Cancelled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding() -> RevealBinding {
        RevealBinding::new(RevealSpec::element(".heading", Tween::fade_up(40.0, 800)))
    }

    #[test]
    fn fires_once_after_arming() {
        let mut b = binding();
        assert_eq!(b.state(), BindingState::Idle);
        assert!(b.fire().is_none());

        assert!(b.arm());
        assert!(!b.arm());
        assert_eq!(b.state(), BindingState::Armed);

        let fired = b.fire().expect("armed binding fires");
        assert_eq!(fired.target, Target::Element(".heading"));
        assert_eq!(b.state(), BindingState::Fired);

        for _ in 0..5 {
            assert!(b.fire().is_none());
        }
        assert_eq!(b.state(), BindingState::Fired);
    }

    #[test]
    fn cancelled_is_terminal() {
        let mut b = binding();
        b.arm();
        assert!(b.cancel());
        assert!(!b.cancel());
        assert!(!b.arm());
        assert!(b.fire().is_none());
        assert_eq!(b.state(), BindingState::Cancelled);
    }

    #[test]
    fn fired_and_idle_bindings_can_be_cancelled() {
        let mut fired = binding();
        fired.arm();
        fired.fire();
        assert!(fired.cancel());

        let mut idle = binding();
        assert!(idle.cancel());
        assert_eq!(idle.state(), BindingState::Cancelled);
    }

    #[test]
    fn element_spec_watches_its_own_target() {
        let spec = RevealSpec::element(".image", Tween::fade_scale(0.95, 900));
        assert_eq!(spec.trigger, Trigger::Viewport(".image"));
        assert_eq!(spec.target, Target::Element(".image"));
    }
}
