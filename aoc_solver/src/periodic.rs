// resolve the state after a huge number of transformations by detecting a period

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

#[cfg(test)]
use mockall::automock;

/// One deterministic transformation step. Closures `FnMut(&S) -> S` are transitions.
#[cfg_attr(test, automock)]
pub trait StateTransition<S: 'static> {
    fn next_state(&mut self, state: &S) -> S;
}

impl<S: 'static, F> StateTransition<S> for F
where
    F: FnMut(&S) -> S,
{
    fn next_state(&mut self, state: &S) -> S {
        self(state)
    }
}

/// First repeated state: the state at `start` recurs every `length` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: usize,
    pub length: usize,
}

impl Cycle {
    /// History index of the state equal to the state at `target`. Targets before
    /// the start of the cycle are history indices themselves.
    pub fn project(&self, target: u64) -> usize {
        let start = self.start as u64;
        match target.checked_sub(start) {
            Some(offset) => (start + offset % self.length as u64) as usize,
            None => target as usize,
        }
    }
}

// History of states with a lookup from state hash to history indices. The
// history stops growing with the first repeated state.
pub struct PeriodicStateDetector<S> {
    history: Vec<S>,
    seen: HashMap<u64, Vec<usize>>,
    hasher: RandomState,
    cycle: Option<Cycle>,
}

impl<S: Hash + Eq + 'static> PeriodicStateDetector<S> {
    pub fn new(initial: S) -> Self {
        let mut detector = Self {
            history: Vec::new(),
            seen: HashMap::new(),
            hasher: RandomState::new(),
            cycle: None,
        };
        detector.record(initial);
        detector
    }

    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }
    pub fn history(&self) -> &[S] {
        &self.history
    }

    fn find(&self, state: &S) -> Option<usize> {
        self.seen
            .get(&self.hasher.hash_one(state))?
            .iter()
            .copied()
            .find(|&index| self.history[index] == *state)
    }

    fn record(&mut self, state: S) {
        let index = self.history.len();
        self.seen
            .entry(self.hasher.hash_one(&state))
            .or_default()
            .push(index);
        self.history.push(state);
    }

    /// State after `target` transformations of the initial state. Simulates until
    /// either `target` or the first repeated state is reached, never further.
    pub fn state_at<T>(&mut self, transition: &mut T, target: u64) -> &S
    where
        T: StateTransition<S> + ?Sized,
    {
        while self.cycle.is_none() && (self.history.len() as u64) <= target {
            let last = &self.history[self.history.len() - 1];
            let next = transition.next_state(last);
            match self.find(&next) {
                Some(start) => {
                    self.cycle = Some(Cycle {
                        start,
                        length: self.history.len() - start,
                    })
                }
                None => self.record(next),
            }
        }
        if target < self.history.len() as u64 {
            return &self.history[target as usize];
        }
        match self.cycle {
            Some(cycle) => &self.history[cycle.project(target)],
            // loop above only ends without cycle, if target is inside of history
            None => &self.history[self.history.len() - 1],
        }
    }
}

/// Convenience wrapper of [`PeriodicStateDetector`] for a single target.
pub fn state_at<S, T>(initial: S, transition: &mut T, target: u64) -> (S, Option<Cycle>)
where
    S: Hash + Eq + Clone + 'static,
    T: StateTransition<S> + ?Sized,
{
    let mut detector = PeriodicStateDetector::new(initial);
    let state = detector.state_at(transition, target).clone();
    (state, detector.cycle())
}

#[cfg(test)]
mod tests {
    use super::*;

    // A, B, C, B, C, ...: warm up of 1, period of 2
    fn warm_up_then_period(state: &char) -> char {
        match state {
            'A' => 'B',
            'B' => 'C',
            _ => 'B',
        }
    }

    #[test]
    fn test_small_targets_are_simulated() {
        let mut transition = warm_up_then_period;
        let mut detector = PeriodicStateDetector::new('A');
        assert_eq!(*detector.state_at(&mut transition, 0), 'A');
        assert_eq!(detector.cycle(), None);
        assert_eq!(*detector.state_at(&mut transition, 1), 'B');
        assert_eq!(*detector.state_at(&mut transition, 2), 'C');
        assert_eq!(detector.cycle(), None);
        assert_eq!(detector.history(), &['A', 'B', 'C']);
    }

    #[test]
    fn test_both_parities_of_huge_targets() {
        let mut transition = warm_up_then_period;
        let mut detector = PeriodicStateDetector::new('A');
        // (1_000_000 - 1) % 2 == 1
        assert_eq!(*detector.state_at(&mut transition, 1_000_000), 'C');
        assert_eq!(
            detector.cycle(),
            Some(Cycle {
                start: 1,
                length: 2
            })
        );
        // (1_000_001 - 1) % 2 == 0
        assert_eq!(*detector.state_at(&mut transition, 1_000_001), 'B');
        assert_eq!(*detector.state_at(&mut transition, 1_000_000_000_000), 'C');
        assert_eq!(detector.history().len(), 3);
    }

    #[test]
    fn test_fixed_point() {
        let (state, cycle) = state_at(7_u32, &mut |s: &u32| if *s > 1 { s / 2 } else { *s }, u64::MAX);
        assert_eq!(state, 1);
        assert_eq!(cycle, Some(Cycle { start: 2, length: 1 }));
    }

    #[test]
    fn test_simulation_does_not_scale_with_target() {
        let mut mock = MockStateTransition::<u8>::new();
        // 0 -> 1 -> 2 -> 3 -> 1: three new states and one repeat
        mock.expect_next_state()
            .times(4)
            .returning(|state| if *state == 3 { 1 } else { state + 1 });
        let (state, cycle) = state_at(0_u8, &mut mock, 1_000_000_000_000);
        assert_eq!(
            cycle,
            Some(Cycle {
                start: 1,
                length: 3
            })
        );
        // 1 + (10^12 - 1) % 3 == 1
        assert_eq!(state, 1);
    }

    #[test]
    fn test_no_simulation_beyond_target() {
        let mut mock = MockStateTransition::<u8>::new();
        mock.expect_next_state()
            .times(2)
            .returning(|state| state + 1);
        let (state, cycle) = state_at(0_u8, &mut mock, 2);
        assert_eq!(state, 2);
        assert_eq!(cycle, None);
    }

    #[test]
    fn test_cycle_projection() {
        let cycle = Cycle {
            start: 3,
            length: 7,
        };
        assert_eq!(cycle.project(3), 3);
        assert_eq!(cycle.project(10), 3);
        assert_eq!(cycle.project(12), 5);
        assert_eq!(cycle.project(1_000_000_000), 3 + (1_000_000_000 - 3) % 7);
        // warm up states are not part of the cycle
        assert_eq!(cycle.project(0), 0);
        assert_eq!(cycle.project(2), 2);
    }
}
