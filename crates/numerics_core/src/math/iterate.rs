//! Bounded fixed-point iteration with an explicit stopping reason.

/// Why an iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The convergence predicate was met.
    Converged,
    /// The iteration budget ran out first; the state is the last iterate.
    BudgetExhausted,
    /// The step could not be taken (zero derivative, non-finite iterate).
    Degenerate,
}

/// Result of a single step handed back to [`iterate_until`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<S> {
    /// Keep iterating from this state.
    Continue(S),
    /// Stop: this state meets the convergence threshold.
    Converged(S),
    /// Stop: no further step is possible from this state.
    Degenerate(S),
}

/// Final state of a bounded iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationOutcome<S> {
    /// Last state reached.
    pub state: S,
    /// Number of steps taken, never more than the budget.
    pub iterations: usize,
    /// Stopping reason.
    pub termination: Termination,
}

impl<S> IterationOutcome<S> {
    /// True when the convergence predicate was met.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Maps the carried state, keeping the bookkeeping.
    pub fn map<U>(self, f: impl FnOnce(S) -> U) -> IterationOutcome<U> {
        IterationOutcome {
            state: f(self.state),
            iterations: self.iterations,
            termination: self.termination,
        }
    }
}

/// Applies `step` until it reports convergence or degeneracy, or until
/// `max_iterations` steps have been taken.
///
/// Running out of budget is not an error: the outcome carries the last
/// iterate with [`Termination::BudgetExhausted`] and the caller decides
/// whether it is good enough. A zero budget returns `initial` untouched.
///
/// # Examples
/// ```
/// use numerics_core::math::{iterate_until, Step, Termination};
///
/// // Halve until below 1e-3
/// let outcome = iterate_until(1.0_f64, 100, |&x| {
///     let next = x / 2.0;
///     if next < 1e-3 { Step::Converged(next) } else { Step::Continue(next) }
/// });
/// assert_eq!(outcome.iterations, 10);
/// assert_eq!(outcome.termination, Termination::Converged);
///
/// let capped = iterate_until(1.0_f64, 3, |&x| Step::Continue(x / 2.0));
/// assert_eq!(capped.state, 0.125);
/// assert_eq!(capped.termination, Termination::BudgetExhausted);
/// ```
pub fn iterate_until<S, F>(initial: S, max_iterations: usize, mut step: F) -> IterationOutcome<S>
where
    F: FnMut(&S) -> Step<S>,
{
    let mut state = initial;
    for iteration in 1..=max_iterations {
        match step(&state) {
            Step::Continue(next) => state = next,
            Step::Converged(next) => {
                return IterationOutcome {
                    state: next,
                    iterations: iteration,
                    termination: Termination::Converged,
                }
            }
            Step::Degenerate(last) => {
                return IterationOutcome {
                    state: last,
                    iterations: iteration,
                    termination: Termination::Degenerate,
                }
            }
        }
    }
    IterationOutcome {
        state,
        iterations: max_iterations,
        termination: Termination::BudgetExhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_budget() {
        let outcome = iterate_until(7_i32, 0, |_| panic!("step must not run"));
        assert_eq!(outcome.state, 7);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.termination, Termination::BudgetExhausted);
        assert!(!outcome.converged());
    }

    #[test]
    fn test_converges_on_first_step() {
        let outcome = iterate_until(0_i32, 10, |&x| Step::Converged(x + 1));
        assert_eq!(outcome.state, 1);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.converged());
    }

    #[test]
    fn test_degenerate_keeps_state() {
        let outcome = iterate_until(4.0_f64, 10, |&x| {
            if x < 1.0 {
                Step::Degenerate(x)
            } else {
                Step::Continue(x - 1.5)
            }
        });
        assert_eq!(outcome.termination, Termination::Degenerate);
        assert_eq!(outcome.state, -0.5);
        assert_eq!(outcome.iterations, 4);
    }

    #[test]
    fn test_map_preserves_bookkeeping() {
        let outcome = iterate_until(1_u32, 5, |&x| Step::Continue(x * 2)).map(|x| x as f64);
        assert_eq!(outcome.state, 32.0);
        assert_eq!(outcome.iterations, 5);
        assert_eq!(outcome.termination, Termination::BudgetExhausted);
    }

    proptest! {
        #[test]
        fn test_never_exceeds_budget(budget in 0usize..200, stop_at in 0u64..400) {
            let mut calls = 0usize;
            let outcome = iterate_until(0_u64, budget, |&x| {
                calls += 1;
                if x + 1 >= stop_at { Step::Converged(x + 1) } else { Step::Continue(x + 1) }
            });
            prop_assert!(outcome.iterations <= budget);
            prop_assert_eq!(outcome.iterations, calls);
            prop_assert_eq!(outcome.state as usize, calls);
        }
    }
}
