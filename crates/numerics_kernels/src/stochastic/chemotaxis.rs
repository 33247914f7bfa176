//! Run-and-tumble random walk biased by a finite-memory gradient sensor.
//!
//! A walker moves at constant speed and remembers the field values at its
//! last `window` positions. The change across that memory sets the mean run
//! length: climbing the field lengthens runs, descending shortens them down
//! to a floor. Each step the walker survives in its current run with
//! probability `exp(−dt/τ)`, otherwise it tumbles onto a uniformly random
//! heading. The bias in run length alone is enough to drift the walker up
//! the gradient.

use numerics_core::math::ShiftRegister;
use numerics_core::rng::KernelRng;
use numerics_core::traits::ScalarField2;
use numerics_core::types::{
    require_at_least, require_finite, require_positive, KernelError, KernelResult, Point2,
};
use std::f64::consts::LN_2;

/// Walkers in the reference ensemble.
pub const DEFAULT_WALKERS: usize = 20;

/// Walker physics and sensor settings.
///
/// # Examples
///
/// ```
/// use numerics_kernels::stochastic::ChemotaxisParams;
///
/// let params = ChemotaxisParams::builder()
///     .run_time(10.0)
///     .sensitivity(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(params.steps(), 100);
/// assert!(ChemotaxisParams::builder().dt(0.0).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChemotaxisParams {
    run_time: f64,
    dt: f64,
    speed: f64,
    sensitivity: f64,
    base_half_life: f64,
    min_half_life: f64,
    window: usize,
    placeholder: f64,
    initial_heading: f64,
    start: Point2<f64>,
}

impl Default for ChemotaxisParams {
    /// 100 s at 0.1 s steps, 2 µm/s, starting from (30, 20).
    fn default() -> Self {
        Self {
            run_time: 100.0,
            dt: 0.1,
            speed: 2.0,
            sensitivity: 0.2,
            base_half_life: 1.0,
            min_half_life: 0.1,
            window: 10,
            placeholder: 700.0,
            initial_heading: 0.0,
            start: Point2::new(30.0, 20.0),
        }
    }
}

impl ChemotaxisParams {
    /// Creates a builder starting from the defaults.
    #[inline]
    pub fn builder() -> ChemotaxisParamsBuilder {
        ChemotaxisParamsBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `dt` is not positive or `run_time < dt`
    /// - `window < 2`
    /// - `min_half_life` is not positive
    /// - `speed` is negative
    /// - any other value is not finite
    pub fn validate(&self) -> KernelResult<()> {
        require_positive("dt", self.dt)?;
        require_finite("run_time", self.run_time)?;
        if self.run_time < self.dt {
            return Err(KernelError::invalid(
                "run_time",
                format!("must be at least one step ({}), got {}", self.dt, self.run_time),
            ));
        }
        require_finite("speed", self.speed)?;
        if self.speed < 0.0 {
            return Err(KernelError::invalid("speed", "must be non-negative"));
        }
        require_finite("sensitivity", self.sensitivity)?;
        require_finite("base_half_life", self.base_half_life)?;
        require_positive("min_half_life", self.min_half_life)?;
        require_at_least("window", self.window, 2)?;
        require_finite("placeholder", self.placeholder)?;
        if !self.start.is_finite() {
            return Err(KernelError::invalid("start", "must be finite"));
        }
        require_finite("initial_heading", self.initial_heading)?;
        Ok(())
    }

    /// Number of recorded positions, `round(run_time / dt)`.
    pub fn steps(&self) -> usize {
        (self.run_time / self.dt).round() as usize
    }

    /// Time of each recorded position.
    pub fn timebase(&self) -> Vec<f64> {
        (0..self.steps()).map(|i| i as f64 * self.dt).collect()
    }

    /// Simulated duration.
    #[inline]
    pub fn run_time(&self) -> f64 {
        self.run_time
    }

    /// Time step.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Walker speed.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Gain from field-change rate to run half-life.
    #[inline]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Run half-life in a flat field.
    #[inline]
    pub fn base_half_life(&self) -> f64 {
        self.base_half_life
    }

    /// Floor on the run half-life.
    #[inline]
    pub fn min_half_life(&self) -> f64 {
        self.min_half_life
    }

    /// Sensor memory length in steps.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Field value the sensor memory starts with.
    #[inline]
    pub fn placeholder(&self) -> f64 {
        self.placeholder
    }

    /// Starting position.
    #[inline]
    pub fn start(&self) -> Point2<f64> {
        self.start
    }

    /// Heading before the first tumble (radians).
    #[inline]
    pub fn initial_heading(&self) -> f64 {
        self.initial_heading
    }
}

/// Builder for [`ChemotaxisParams`].
#[derive(Debug, Clone, Default)]
pub struct ChemotaxisParamsBuilder {
    params: ChemotaxisParams,
}

impl ChemotaxisParamsBuilder {
    /// Sets the simulated duration.
    #[inline]
    pub fn run_time(mut self, run_time: f64) -> Self {
        self.params.run_time = run_time;
        self
    }

    /// Sets the time step.
    #[inline]
    pub fn dt(mut self, dt: f64) -> Self {
        self.params.dt = dt;
        self
    }

    /// Sets the walker speed.
    #[inline]
    pub fn speed(mut self, speed: f64) -> Self {
        self.params.speed = speed;
        self
    }

    /// Sets the sensitivity `k`.
    #[inline]
    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        self.params.sensitivity = sensitivity;
        self
    }

    /// Sets the half-life in a flat field.
    #[inline]
    pub fn base_half_life(mut self, base_half_life: f64) -> Self {
        self.params.base_half_life = base_half_life;
        self
    }

    /// Sets the half-life floor.
    #[inline]
    pub fn min_half_life(mut self, min_half_life: f64) -> Self {
        self.params.min_half_life = min_half_life;
        self
    }

    /// Sets the sensor memory length.
    #[inline]
    pub fn window(mut self, window: usize) -> Self {
        self.params.window = window;
        self
    }

    /// Sets the initial sensor reading.
    #[inline]
    pub fn placeholder(mut self, placeholder: f64) -> Self {
        self.params.placeholder = placeholder;
        self
    }

    /// Sets the starting position.
    #[inline]
    pub fn start(mut self, start: Point2<f64>) -> Self {
        self.params.start = start;
        self
    }

    /// Sets the heading before the first tumble.
    #[inline]
    pub fn initial_heading(mut self, initial_heading: f64) -> Self {
        self.params.initial_heading = initial_heading;
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    /// See [`ChemotaxisParams::validate`].
    pub fn build(self) -> KernelResult<ChemotaxisParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

/// One recorded step of a walker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkStep {
    /// Position after the move.
    pub position: Point2<f64>,
    /// Heading used for the move.
    pub heading: f64,
    /// Whether the walker tumbled before moving.
    pub tumbled: bool,
}

/// A single run-and-tumble walker.
#[derive(Debug, Clone)]
pub struct Walker {
    params: ChemotaxisParams,
    position: Point2<f64>,
    heading: f64,
    register: ShiftRegister<f64>,
}

impl Walker {
    /// Places a walker at the configured start with a placeholder-filled
    /// sensor memory.
    ///
    /// # Errors
    /// `InvalidParameter` if `params` fails validation.
    pub fn new(params: &ChemotaxisParams) -> KernelResult<Self> {
        params.validate()?;
        Ok(Self {
            params: *params,
            position: params.start,
            heading: params.initial_heading,
            register: ShiftRegister::filled(params.window, params.placeholder)?,
        })
    }

    /// Current position.
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Current heading (radians).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Field change per unit time across the sensor memory.
    pub fn gradient_rate(&self) -> f64 {
        let span = self.register.span().unwrap_or(0.0);
        span / (self.params.window as f64 * self.params.dt)
    }

    /// Probability of keeping the current heading for the next step.
    pub fn survival_probability(&self) -> f64 {
        let sensed = self.params.sensitivity * self.gradient_rate();
        let half_life = (self.params.base_half_life + sensed).max(self.params.min_half_life);
        let tau = half_life / LN_2;
        (-self.params.dt / tau).exp()
    }

    /// Decides whether to tumble, moves one step and records the field at the
    /// new position.
    pub fn step<F: ScalarField2<f64>>(&mut self, field: &F, rng: &mut KernelRng) -> WalkStep {
        let survival = self.survival_probability();
        let tumbled = rng.gen_uniform() > survival;
        if tumbled {
            self.heading = rng.gen_angle();
        }
        self.position = self
            .position
            .advance(self.heading, self.params.speed * self.params.dt);
        self.register
            .push(field.evaluate(self.position.x, self.position.y));
        WalkStep {
            position: self.position,
            heading: self.heading,
            tumbled,
        }
    }
}

/// Recorded path of one walker.
///
/// `headings[i]` and `tumbles[i]` describe the move that produced
/// `positions[i]`; index 0 is the start with the initial heading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkTrace {
    /// Positions, one per time point.
    pub positions: Vec<Point2<f64>>,
    /// Heading of the move into each position.
    pub headings: Vec<f64>,
    /// Whether a tumble preceded the move into each position.
    pub tumbles: Vec<bool>,
}

impl WalkTrace {
    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of tumbles along the path.
    pub fn tumble_count(&self) -> usize {
        self.tumbles.iter().filter(|&&t| t).count()
    }

    /// First and last positions.
    pub fn endpoints(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        Some((*self.positions.first()?, *self.positions.last()?))
    }

    /// Squared distance from `reference` at each time point.
    pub fn square_displacements(&self, reference: Point2<f64>) -> Vec<f64> {
        self.positions
            .iter()
            .map(|p| p.squared_distance_to(reference))
            .collect()
    }
}

/// Simulates one walker for `params.steps()` time points.
///
/// # Errors
/// `InvalidParameter` if `params` fails validation.
///
/// # Examples
///
/// ```
/// use numerics_core::functions::Paraboloid;
/// use numerics_core::rng::KernelRng;
/// use numerics_kernels::stochastic::{simulate_walk, ChemotaxisParams};
///
/// let mut rng = KernelRng::from_seed(5);
/// let field = Paraboloid::<f64>::default();
/// let trace = simulate_walk(&field, &ChemotaxisParams::default(), &mut rng).unwrap();
/// assert_eq!(trace.len(), 1000);
/// ```
pub fn simulate_walk<F: ScalarField2<f64>>(
    field: &F,
    params: &ChemotaxisParams,
    rng: &mut KernelRng,
) -> KernelResult<WalkTrace> {
    let mut walker = Walker::new(params)?;
    let steps = params.steps();
    let mut positions = Vec::with_capacity(steps);
    let mut headings = Vec::with_capacity(steps);
    let mut tumbles = Vec::with_capacity(steps);
    positions.push(walker.position());
    headings.push(walker.heading());
    tumbles.push(false);

    for _ in 1..steps {
        let step = walker.step(field, rng);
        positions.push(step.position);
        headings.push(step.heading);
        tumbles.push(step.tumbled);
    }

    Ok(WalkTrace {
        positions,
        headings,
        tumbles,
    })
}

/// Independent walkers sharing one set of parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ensemble {
    /// One trace per walker, all of equal length.
    pub traces: Vec<WalkTrace>,
}

impl Ensemble {
    /// Number of walkers.
    pub fn walkers(&self) -> usize {
        self.traces.len()
    }

    /// Mean over walkers of the squared distance from `reference`, per time
    /// point.
    pub fn mean_square_displacement(&self, reference: Point2<f64>) -> Vec<f64> {
        let steps = self.traces.iter().map(WalkTrace::len).min().unwrap_or(0);
        let mut msd = vec![0.0; steps];
        for trace in &self.traces {
            for (acc, d2) in msd.iter_mut().zip(trace.square_displacements(reference)) {
                *acc += d2;
            }
        }
        let n = self.traces.len() as f64;
        msd.iter_mut().for_each(|v| *v /= n);
        msd
    }

    /// Start and end of every walker, for a straight-line summary.
    pub fn endpoints(&self) -> Vec<(Point2<f64>, Point2<f64>)> {
        self.traces.iter().filter_map(WalkTrace::endpoints).collect()
    }
}

/// Simulates `walkers` independent walkers, each on its own generator forked
/// from `rng`.
///
/// # Errors
/// `InvalidParameter` when `walkers == 0` or `params` fails validation.
pub fn simulate_ensemble<F: ScalarField2<f64>>(
    field: &F,
    params: &ChemotaxisParams,
    walkers: usize,
    rng: &mut KernelRng,
) -> KernelResult<Ensemble> {
    require_at_least("walkers", walkers, 1)?;
    params.validate()?;
    let traces = (0..walkers)
        .map(|_| simulate_walk(field, params, &mut rng.fork()))
        .collect::<KernelResult<Vec<_>>>()?;
    tracing::debug!(
        walkers,
        steps = params.steps(),
        seed = rng.seed(),
        "simulated chemotaxis ensemble"
    );
    Ok(Ensemble { traces })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use numerics_core::functions::Paraboloid;
    use std::f64::consts::TAU;

    // ========================================
    // Parameters
    // ========================================

    #[test]
    fn test_default_steps() {
        let params = ChemotaxisParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.steps(), 1000);
        assert_eq!(params.timebase().len(), 1000);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(ChemotaxisParams::builder().dt(-0.1).build().is_err());
        assert!(ChemotaxisParams::builder().run_time(0.05).build().is_err());
        assert!(ChemotaxisParams::builder().window(1).build().is_err());
        assert!(ChemotaxisParams::builder().min_half_life(0.0).build().is_err());
        assert!(ChemotaxisParams::builder().speed(-1.0).build().is_err());
        assert!(ChemotaxisParams::builder()
            .start(Point2::new(f64::NAN, 0.0))
            .build()
            .is_err());
    }

    // ========================================
    // Walker
    // ========================================

    #[test]
    fn test_warm_up_sees_flat_memory() {
        let walker = Walker::new(&ChemotaxisParams::default()).unwrap();
        assert_eq!(walker.gradient_rate(), 0.0);
        // Half-life 1 s: survival 2^(−0.1)
        assert_relative_eq!(walker.survival_probability(), 0.5_f64.powf(0.1));
    }

    #[test]
    fn test_descending_step_hits_half_life_floor() {
        // A huge half-life keeps the first move straight
        let params = ChemotaxisParams::builder()
            .base_half_life(1e12)
            .build()
            .unwrap();
        let mut walker = Walker::new(&params).unwrap();
        let mut rng = KernelRng::from_seed(0);
        let step = walker.step(&Paraboloid::<f64>::default(), &mut rng);
        assert!(!step.tumbled);
        assert_relative_eq!(step.position.x, 30.2, max_relative = 1e-12);
        assert_relative_eq!(step.position.y, 20.0);
        // f(30.2, 20) − 700 = −12.04 over one second of memory
        assert_relative_eq!(walker.gradient_rate(), -12.04, max_relative = 1e-9);

        let floored = Walker {
            params: ChemotaxisParams::default(),
            ..walker
        };
        assert_relative_eq!(floored.survival_probability(), 0.5, max_relative = 1e-12);
    }

    // ========================================
    // Traces
    // ========================================

    #[test]
    fn test_trace_invariants() {
        let params = ChemotaxisParams::default();
        let mut rng = KernelRng::from_seed(17);
        let trace = simulate_walk(&Paraboloid::<f64>::default(), &params, &mut rng).unwrap();

        assert_eq!(trace.len(), params.steps());
        assert_eq!(trace.headings.len(), trace.len());
        assert_eq!(trace.tumbles.len(), trace.len());
        assert_eq!(trace.positions[0], params.start());
        assert_eq!(trace.headings[0], 0.0);
        assert!(!trace.tumbles[0]);
        assert!(trace.tumble_count() > 0);

        for i in 1..trace.len() {
            let stride = trace.positions[i].distance_to(trace.positions[i - 1]);
            assert_relative_eq!(stride, 0.2, max_relative = 1e-9);
            if trace.tumbles[i] {
                assert!((0.0..TAU).contains(&trace.headings[i]));
            } else {
                assert_eq!(trace.headings[i], trace.headings[i - 1]);
            }
        }
    }

    #[test]
    fn test_seeded_walk_reproduces() {
        let params = ChemotaxisParams::builder().run_time(5.0).build().unwrap();
        let field = Paraboloid::<f64>::default();
        let a = simulate_walk(&field, &params, &mut KernelRng::from_seed(8)).unwrap();
        let b = simulate_walk(&field, &params, &mut KernelRng::from_seed(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_speed_stays_put() {
        let params = ChemotaxisParams::builder()
            .speed(0.0)
            .run_time(2.0)
            .build()
            .unwrap();
        let field = Paraboloid::<f64>::default();
        let trace = simulate_walk(&field, &params, &mut KernelRng::from_seed(4)).unwrap();
        assert!(trace.positions.iter().all(|&p| p == params.start()));
    }

    // ========================================
    // Ensembles
    // ========================================

    #[test]
    fn test_ensemble_msd_shapes() {
        let params = ChemotaxisParams::builder().run_time(10.0).build().unwrap();
        let mut rng = KernelRng::from_seed(23);
        let field = Paraboloid::<f64>::default();
        let ensemble = simulate_ensemble(&field, &params, 5, &mut rng).unwrap();
        assert_eq!(ensemble.walkers(), 5);

        let from_start = ensemble.mean_square_displacement(params.start());
        assert_eq!(from_start.len(), 100);
        assert_eq!(from_start[0], 0.0);
        // One step in, every walker is exactly v·dt from the start
        assert_relative_eq!(from_start[1], 0.04, max_relative = 1e-9);

        let from_peak = ensemble.mean_square_displacement(field.maximum());
        assert_relative_eq!(from_peak[0], 1300.0);

        let ends = ensemble.endpoints();
        assert_eq!(ends.len(), 5);
        assert!(ends.iter().all(|(s, _)| *s == params.start()));
    }

    #[test]
    fn test_msd_averages_square_displacements() {
        let params = ChemotaxisParams::builder().run_time(3.0).build().unwrap();
        let field = Paraboloid::<f64>::default();
        let ensemble = simulate_ensemble(&field, &params, 3, &mut KernelRng::from_seed(6)).unwrap();
        let reference = Point2::new(1.0, -1.0);

        let per_walker: Vec<Vec<f64>> = ensemble
            .traces
            .iter()
            .map(|t| t.square_displacements(reference))
            .collect();
        let msd = ensemble.mean_square_displacement(reference);
        assert_eq!(msd.len(), 30);
        for (i, &m) in msd.iter().enumerate() {
            let mean = per_walker.iter().map(|d| d[i]).sum::<f64>() / 3.0;
            assert_relative_eq!(m, mean, max_relative = 1e-12);
        }
        assert_relative_eq!(per_walker[0][0], 29.0 * 29.0 + 21.0 * 21.0);
    }

    #[test]
    fn test_ensemble_rejects_zero_walkers() {
        let mut rng = KernelRng::from_seed(1);
        assert!(simulate_ensemble(
            &Paraboloid::<f64>::default(),
            &ChemotaxisParams::default(),
            0,
            &mut rng
        )
        .is_err());
    }
}
