use log::debug;

use super::binding::{BindingState, RevealBinding, RevealSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(usize);

/// Every reveal binding a section registered, released together when the
/// section unmounts. Ids follow registration order.
#[derive(Debug)]
pub struct RevealScope {
    section: &'static str,
    bindings: Vec<RevealBinding>,
    released: bool,
}

impl RevealScope {
    pub fn new(section: &'static str) -> Self {
        RevealScope {
            section,
            bindings: Vec::new(),
            released: false,
        }
    }

    pub fn section(&self) -> &'static str {
        self.section
    }

    pub fn register(&mut self, spec: RevealSpec) -> BindingId {
        let mut binding = RevealBinding::new(spec);
        if self.released {
            binding.cancel();
        }
        self.bindings.push(binding);
        BindingId(self.bindings.len() - 1)
    }

    pub fn arm(&mut self, id: BindingId) -> bool {
        match self.bindings.get_mut(id.0) {
            Some(binding) => binding.arm(),
            None => false,
        }
    }

    pub fn fire(&mut self, id: BindingId) -> Option<RevealSpec> {
        let spec = self.bindings.get_mut(id.0)?.fire()?;
        debug!("{}: binding {} fired", self.section, id.0);
        Some(spec)
    }

    /// Fires every ready binding among `ids`, in registration order no
    /// matter the order the ids arrive in.
    pub fn fire_all<I>(&mut self, ids: I) -> Vec<(BindingId, RevealSpec)>
    where
        I: IntoIterator<Item = BindingId>,
    {
        let mut ids: Vec<BindingId> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();
        ids.into_iter()
            .filter_map(|id| self.fire(id).map(|spec| (id, spec)))
            .collect()
    }

    /// Cancels every binding. Returns how many were still live.
    pub fn release(&mut self) -> usize {
        self.released = true;
        self.bindings
            .iter_mut()
            .map(RevealBinding::cancel)
            .filter(|was_live| *was_live)
            .count()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    #[cfg(test)]
    pub fn state(&self, id: BindingId) -> Option<BindingState> {
        self.bindings.get(id.0).map(RevealBinding::state)
    }

    pub fn armed(&self) -> usize {
        self.bindings
            .iter()
            .filter(|b| b.state() == BindingState::Armed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::binding::Target;
    use crate::reveal::visual::Tween;

    fn spec(selector: &'static str) -> RevealSpec {
        RevealSpec::element(selector, Tween::fade_up(40.0, 800))
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut scope = RevealScope::new("about");
        let a = scope.register(spec(".a"));
        let b = scope.register(spec(".b"));
        assert!(a < b);
        assert_eq!(scope.state(a), Some(BindingState::Idle));
    }

    #[test]
    fn repeated_crossings_fire_once() {
        let mut scope = RevealScope::new("services");
        let id = scope.register(spec(".heading"));
        scope.arm(id);

        let first = scope.fire_all([id]);
        assert_eq!(first.len(), 1);
        for _ in 0..10 {
            assert!(scope.fire_all([id]).is_empty());
        }
        assert_eq!(scope.state(id), Some(BindingState::Fired));
    }

    #[test]
    fn same_frame_crossings_fire_in_registration_order() {
        let mut scope = RevealScope::new("methodology");
        let line = scope.register(RevealSpec::on_view(
            ".steps",
            Target::Element(".line"),
            Tween::grow_x(1200),
        ));
        let cards = scope.register(RevealSpec::on_view(
            ".steps",
            Target::Matching(".step-card"),
            Tween::fade_up(50.0, 700),
        ));
        let heading = scope.register(spec(".heading"));
        for id in [line, cards, heading] {
            scope.arm(id);
        }

        let fired = scope.fire_all([heading, cards, line, cards]);
        let order: Vec<BindingId> = fired.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![line, cards, heading]);
    }

    #[test]
    fn unarmed_bindings_never_fire() {
        let mut scope = RevealScope::new("blog");
        let missing = scope.register(spec(".missing"));
        assert!(scope.fire_all([missing]).is_empty());
        assert_eq!(scope.state(missing), Some(BindingState::Idle));
    }

    #[test]
    fn release_stops_everything() {
        let mut scope = RevealScope::new("contact");
        let fired = scope.register(spec(".heading"));
        let armed = scope.register(spec(".form"));
        let idle = scope.register(spec(".missing"));
        scope.arm(fired);
        scope.arm(armed);
        scope.fire(fired);
        assert_eq!(scope.armed(), 1);

        assert_eq!(scope.release(), 3);
        assert!(scope.is_released());
        assert_eq!(scope.armed(), 0);
        assert!(scope.fire_all([fired, armed, idle]).is_empty());
        for id in [fired, armed, idle] {
            assert_eq!(scope.state(id), Some(BindingState::Cancelled));
        }
        assert_eq!(scope.release(), 0);
    }

    #[test]
    fn register_after_release_is_dead_on_arrival() {
        let mut scope = RevealScope::new("projects");
        scope.release();
        let late = scope.register(spec(".cards"));
        assert!(!scope.arm(late));
        assert!(scope.fire(late).is_none());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut other = RevealScope::new("other");
        other.register(spec(".a"));
        let foreign = other.register(spec(".b"));

        let mut scope = RevealScope::new("hero");
        assert!(!scope.arm(foreign));
        assert!(scope.fire(foreign).is_none());
        assert_eq!(scope.state(foreign), None);
    }
}
