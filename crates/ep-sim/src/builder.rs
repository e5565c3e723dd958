//! Fluent builder for constructing an [`Engine`].

use ep_core::{ParamKey, ParamValue, SimMode, SimRng, SimulationParameters};

use crate::{Engine, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                             |
/// |-----------------|-------------------------------------|
/// | `.params(p)`    | `SimulationParameters::default()`   |
/// | `.mode(m)`      | `SimMode::Simple`                   |
/// | `.set(k, v)?`   | (none) validated single overrides   |
///
/// # Example
///
/// ```rust
/// use ep_core::{ParamKey, SimMode, SimRng};
/// use ep_sim::EngineBuilder;
///
/// let mut rng = SimRng::new(7);
/// let engine = EngineBuilder::new()
///     .mode(SimMode::Communities)
///     .set(ParamKey::NumPerCommunity, 20u32)?
///     .build(&mut rng)?;
/// assert_eq!(engine.arena().len(), 8 * 20);
/// # Ok::<(), ep_sim::SimError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    params: SimulationParameters,
    mode:   SimMode,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole parameter set.  Validated by [`build`](Self::build).
    pub fn params(mut self, params: SimulationParameters) -> Self {
        self.params = params;
        self
    }

    pub fn mode(mut self, mode: SimMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override one parameter.  Fails fast on an invalid value.
    pub fn set(mut self, key: ParamKey, value: impl Into<ParamValue>) -> SimResult<Self> {
        self.params.set(key, value.into())?;
        Ok(self)
    }

    /// Override one parameter addressed by name, e.g. from `key=value`
    /// command-line pairs.
    pub fn set_by_name(mut self, name: &str, value: ParamValue) -> SimResult<Self> {
        self.params.set_by_name(name, value)?;
        Ok(self)
    }

    pub fn build(self, rng: &mut SimRng) -> SimResult<Engine> {
        Engine::initialize(self.params, self.mode, rng)
    }
}
