//! Transmission between nearby agents.

use ep_agent::{AgentArena, EpiState};
use ep_core::{AgentId, SimRng, SimulationParameters, TickRates};
use ep_spatial::SpatialIndex;

/// Resolve one tick of transmission.  Returns the newly infected ids.
///
/// The infectious set is captured before any roll, so an agent infected
/// here starts transmitting next tick.  Each infectious agent is visited
/// once, in id order, and rolls once against each susceptible candidate
/// that
///
/// - lies strictly within `infection_radius`,
/// - shares its quarantine flag (inmates only meet inmates),
/// - shares its community, unless both are inmates or both are visiting
///   the marketplace.
///
/// The success chance is `infection × susceptibility`, per contact per tick.
/// Exposed agents sit in the index but never appear in the infectious set.
///
/// `index` must reflect current positions.
pub fn resolve_infections(
    arena: &mut AgentArena,
    index: &SpatialIndex,
    params: &SimulationParameters,
    rates: &TickRates,
    day: u32,
    rng: &mut SimRng,
) -> Vec<AgentId> {
    let radius_sq = params.infection_radius * params.infection_radius;
    let cells = index.cells_for(params.infection_radius);
    let incubating = params.incubation_days > 0;

    let mut newly_infected = Vec::new();
    let mut candidates = Vec::new();
    for source in arena.infectious_ids() {
        let (origin, quarantined, at_market, community) = {
            let a = arena.get(source);
            (a.position, a.is_quarantined, a.is_visiting_market(), a.community)
        };

        candidates.clear();
        candidates.extend(index.neighbors_of(origin, cells));
        for &target in &candidates {
            let t = arena.get(target);
            if t.state != EpiState::Susceptible
                || t.is_quarantined != quarantined
                || !(quarantined || t.community == community || (at_market && t.is_visiting_market()))
                || origin.distance_sq(t.position) >= radius_sq
            {
                continue;
            }
            let chance = (rates.infection.0 * t.susceptibility).clamp(0.0, 1.0);
            if !rng.gen_bool(chance) {
                continue;
            }
            let asymptomatic = rng.gen_bool(params.prob_no_symptoms);
            arena.get_mut(target).infect(day, asymptomatic, incubating);
            arena.get_mut(source).infections_caused += 1;
            newly_infected.push(target);
        }
    }
    newly_infected
}
