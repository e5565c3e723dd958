//! Per-agent trait distributions.

use rand_distr::{Exp, Normal};

use ep_core::{ConfigError, ConfigResult, SimRng, SimulationParameters};

use crate::AgentTraits;

/// Draws [`AgentTraits`] for newly spawned agents.
///
/// - susceptibility: `max(floor, Normal(mean, σ))`
/// - recovery modifier: `clamp(Exp(1 / scale), min, max)`
/// - distancing obedience: Bernoulli(`social_distance_obedient`)
#[derive(Clone, Debug)]
pub struct TraitSampler {
    susceptibility:       Normal<f64>,
    susceptibility_floor: f64,
    recovery:             Exp<f64>,
    recovery_min:         f64,
    recovery_max:         f64,
    obedient:             f64,
}

impl TraitSampler {
    pub fn new(params: &SimulationParameters) -> ConfigResult<Self> {
        let susceptibility = Normal::new(params.susceptibility_mean, params.susceptibility_std_dev)
            .map_err(|e| ConfigError::Distribution {
                field:  "susceptibility_std_dev",
                reason: e.to_string(),
            })?;
        let recovery = Exp::new(1.0 / params.recovery_scale).map_err(|e| ConfigError::Distribution {
            field:  "recovery_scale",
            reason: e.to_string(),
        })?;
        Ok(Self {
            susceptibility,
            susceptibility_floor: params.susceptibility_floor,
            recovery,
            recovery_min: params.recovery_modifier_min,
            recovery_max: params.recovery_modifier_max,
            obedient: params.social_distance_obedient,
        })
    }

    pub fn sample(&self, rng: &mut SimRng) -> AgentTraits {
        let susceptibility = rng.sample(&self.susceptibility).max(self.susceptibility_floor);
        let recovery_modifier = rng.sample(&self.recovery).clamp(self.recovery_min, self.recovery_max);
        let obeys_social_distancing = rng.gen_bool(self.obedient);
        AgentTraits { susceptibility, recovery_modifier, obeys_social_distancing }
    }
}
