//! Unit tests for ep-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CommunityId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn community_id_rejects_overflow() {
        assert!(CommunityId::try_from(300usize).is_err());
        assert_eq!(CommunityId::try_from(4usize).unwrap(), CommunityId(4));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
        assert_eq!(CommunityId(3).to_string(), "community#3");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Point, SimRng};

    #[test]
    fn distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.norm(), 5.0);
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
        assert!(Point::ORIGIN.is_finite());
    }

    #[test]
    fn bounds_geometry() {
        let b = Bounds::new(-1.0, 1.0, -1.0, 1.0);
        assert_eq!(b.width(), 2.0);
        assert_eq!(b.center(), Point::ORIGIN);
        assert!(b.contains(Point::new(1.0, -1.0)));
        assert!(!b.contains(Point::new(1.01, 0.0)));

        let inner = b.inset(0.15);
        assert!((inner.min_x + 0.85).abs() < 1e-12);
        assert!((inner.max_y - 0.85).abs() < 1e-12);
    }

    #[test]
    fn oversized_inset_collapses() {
        let b = Bounds::new(0.0, 0.2, 0.0, 4.0).inset(0.5);
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.min_x, 0.1);
        assert_eq!(b.height(), 3.0);

        let mut rng = SimRng::new(1);
        let p = b.sample(&mut rng);
        assert_eq!(p.x, 0.1);
    }

    #[test]
    fn disjoint_and_union() {
        let area = Bounds::new(-1.0, 1.0, -1.0, 1.0);
        let side = Bounds::new(1.3, 1.8, -1.0, -0.5);
        assert!(area.is_disjoint(&side));
        assert!(!area.is_disjoint(&Bounds::around(Point::ORIGIN, 0.15)));
        let u = area.union(&side);
        assert_eq!(u, Bounds::new(-1.0, 1.8, -1.0, 1.0));
    }

    #[test]
    fn samples_stay_inside() {
        let b = Bounds::new(-3.0, -1.0, 1.4, 3.4);
        let mut rng = SimRng::new(9);
        for _ in 0..1_000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick::ZERO + 1, Tick(1));
        assert_eq!(t.to_string(), "T10");
    }

    #[test]
    fn day_closes_on_wrap() {
        let mut clock = SimClock::new();
        assert!(clock.is_day_start());
        for _ in 0..23 {
            assert!(!clock.advance(24));
        }
        assert_eq!(clock.tick_in_day, 23);
        assert!(clock.closes_day(24));
        assert!(clock.advance(24));
        assert_eq!(clock.day, 1);
        assert_eq!(clock.tick_in_day, 0);
        assert_eq!(clock.current_tick, Tick(24));
    }

    #[test]
    fn one_tick_days() {
        let mut clock = SimClock::new();
        assert!(clock.advance(1));
        assert!(clock.advance(1));
        assert_eq!(clock.day, 2);
        assert!(clock.is_day_start());
    }

    #[test]
    fn shrinking_day_closes_immediately() {
        let mut clock = SimClock::new();
        for _ in 0..10 {
            clock.advance(24);
        }
        // A live change to 4 ticks per day closes the day in progress.
        assert!(clock.advance(4));
        assert_eq!(clock.day, 1);
    }

    #[test]
    fn time_step() {
        assert_eq!(SimClock::time_step(24), 1.0 / 24.0);
        assert_eq!(SimClock::time_step(0), 1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_with_same_seed() {
        let mut a = SimRng::new(12345);
        let mut b = SimRng::new(12345);
        for _ in 0..100 {
            let x: u64 = a.random();
            let y: u64 = b.random();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn clone_forks_state() {
        let mut a = SimRng::new(5);
        let _: f64 = a.random();
        let mut b = a.clone();
        for _ in 0..10 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(3);
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.2));
    }

    #[test]
    fn jitter_bounds() {
        let mut rng = SimRng::new(3);
        assert_eq!(rng.jitter(0.0), 0.0);
        for _ in 0..1_000 {
            let j = rng.jitter(0.002);
            assert!((-0.002..0.002).contains(&j));
        }
    }

    #[test]
    fn sample_indices_distinct() {
        let mut rng = SimRng::new(77);
        let mut picked = rng.sample_indices(50, 30);
        assert_eq!(picked.len(), 30);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 30);
        assert!(picked.iter().all(|&i| i < 50));
    }

    #[test]
    fn choose_covers_every_item() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));

        let items = [1u8, 2, 3, 5];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let &v = rng.choose(&items).unwrap();
            seen[items.iter().position(|&x| x == v).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

#[cfg(test)]
mod rates {
    use crate::{PerDay, PerTick};

    #[test]
    fn per_day_compounds_back() {
        let daily = PerDay(0.02);
        let tick = daily.per_tick(24);
        assert!(tick.0 > 0.02 / 24.0 && tick.0 < 0.02);
        let back = 1.0 - (1.0 - tick.0).powi(24);
        assert!((back - 0.02).abs() < 1e-12, "got {back}");
    }

    #[test]
    fn extremes() {
        assert_eq!(PerDay(0.0).per_tick(24), PerTick(0.0));
        assert_eq!(PerDay(1.0).per_tick(24), PerTick(1.0));
        assert!((PerDay(0.3).per_tick(1).0 - 0.3).abs() < 1e-12);
    }
}

#[cfg(test)]
mod mode {
    use crate::{ConfigError, SimMode};

    #[test]
    fn parse_roundtrip() {
        for mode in [SimMode::Simple, SimMode::Quarantine, SimMode::Communities] {
            assert_eq!(mode.as_str().parse::<SimMode>().unwrap(), mode);
        }
        assert_eq!("Communities".parse::<SimMode>().unwrap(), SimMode::Communities);
        assert!(matches!("grid".parse::<SimMode>(), Err(ConfigError::UnknownParameter(_))));
    }

    #[test]
    fn community_flag() {
        assert!(SimMode::Communities.has_communities());
        assert!(!SimMode::Quarantine.has_communities());
        assert_eq!(SimMode::default(), SimMode::Simple);
    }
}

#[cfg(test)]
mod params {
    use crate::{ConfigError, ParamKey, ParamValue, PerContact, SimulationParameters, TickRates};

    #[test]
    fn defaults_are_valid() {
        let p = SimulationParameters::default();
        p.validate().unwrap();
        assert_eq!(p.population, 200);
        assert_eq!(p.infection_probability, PerContact(0.15));
        assert_eq!(p.ticks_per_day, 24);
    }

    #[test]
    fn rejection_names_field_and_bound() {
        let p = SimulationParameters { infection_radius: 2.0, ..Default::default() };
        let err = p.validate().unwrap_err();
        assert_eq!(err.field(), "infection_radius");
        assert_eq!(
            err,
            ConfigError::OutOfRange { field: "infection_radius", value: 2.0, min: 0.01, max: 1.0 }
        );
        assert!(err.to_string().contains("infection_radius"));
        assert!(err.to_string().contains("[0.01, 1]"));
    }

    #[test]
    fn zero_ticks_per_day_rejected() {
        let p = SimulationParameters { ticks_per_day: 0, ..Default::default() };
        assert_eq!(p.validate().unwrap_err().field(), "ticks_per_day");
    }

    #[test]
    fn nan_rejected() {
        let p = SimulationParameters { mortality_rate: f64::NAN, ..Default::default() };
        assert_eq!(p.validate().unwrap_err().field(), "mortality_rate");
    }

    #[test]
    fn inverted_recovery_bounds_rejected() {
        let p = SimulationParameters {
            recovery_modifier_min: 2.0,
            recovery_modifier_max: 1.0,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(ConfigError::InvertedRange { .. })));
    }

    #[test]
    fn set_applies_valid_value() {
        let mut p = SimulationParameters::default();
        p.set(ParamKey::MortalityRate, ParamValue::Float(0.3)).unwrap();
        assert_eq!(p.mortality_rate, 0.3);
        p.set_by_name("ticks_per_day", ParamValue::Int(12)).unwrap();
        assert_eq!(p.ticks_per_day, 12);
        p.set_by_name("marketplace_enabled", true.into()).unwrap();
        assert!(p.marketplace_enabled);
        assert_eq!(p.get(ParamKey::MarketplaceEnabled), ParamValue::Bool(true));
    }

    #[test]
    fn failed_set_leaves_parameters_unchanged() {
        let mut p = SimulationParameters::default();
        let before = p.clone();

        let err = p.set(ParamKey::SpeedLimit, ParamValue::Float(5.0)).unwrap_err();
        assert_eq!(err.field(), "speed_limit");
        assert_eq!(p, before);

        let err = p.set(ParamKey::Population, ParamValue::Bool(true)).unwrap_err();
        assert!(matches!(err, ConfigError::WrongType { field: "population", .. }));
        assert_eq!(p, before);

        assert!(p.set(ParamKey::IncubationDays, ParamValue::Int(-1)).is_err());
        assert!(p.set_by_name("warp_speed", ParamValue::Float(1.0)).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn every_key_parses_back() {
        let p = SimulationParameters::default();
        for &key in ParamKey::ALL {
            assert_eq!(key.as_str().parse::<ParamKey>().unwrap(), key);
            let (min, max) = key.range();
            assert!(min <= max, "{}", key.as_str());
            // Re-setting the current value is always accepted.
            let mut copy = p.clone();
            copy.set(key, p.get(key)).unwrap();
        }
    }

    #[test]
    fn initial_infected_count() {
        let p = SimulationParameters { fraction_infected_init: 0.0, ..Default::default() };
        assert_eq!(p.initial_infected(1), 1);
        assert_eq!(p.initial_infected(500), 1);
        let p = SimulationParameters { fraction_infected_init: 0.01, ..Default::default() };
        assert_eq!(p.initial_infected(500), 5);
        let p = SimulationParameters { fraction_infected_init: 1.0, ..Default::default() };
        assert_eq!(p.initial_infected(7), 7);
    }

    #[test]
    fn tick_rates_derived_once() {
        let p = SimulationParameters::default();
        let rates = TickRates::derive(&p);
        assert_eq!(rates.infection, p.infection_probability);
        assert_eq!(rates.time_step, 1.0 / 24.0);
        assert_eq!(rates.travel, p.travel_probability.per_tick(24));
    }
}
