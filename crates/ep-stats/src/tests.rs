//! Unit tests for ep-stats.

#[cfg(test)]
mod recorder {
    use ep_agent::{Agent, AgentArena, AgentTraits};
    use ep_core::{AgentId, Point};

    use crate::{DayTally, StatisticsRecorder};

    fn arena(n: u32) -> AgentArena {
        let mut arena = AgentArena::new();
        for i in 0..n {
            arena.push(Agent::new(AgentId(i), Point::ORIGIN, Point::ORIGIN, AgentTraits::default(), None));
        }
        arena
    }

    #[test]
    fn rows_reflect_arena_and_tally() {
        let mut a = arena(10);
        a.get_mut(AgentId(0)).infect(0, false, false);
        a.get_mut(AgentId(1)).infect(0, true, false);
        a.get_mut(AgentId(2)).infect(0, false, true);

        let mut rec = StatisticsRecorder::new(10);
        let tally = DayTally { new_infections: 3, new_recoveries: 0, new_deaths: 0 };
        let row = rec.record(0, &a, tally);

        assert_eq!(row.susceptible, 7);
        assert_eq!(row.exposed, 1);
        assert_eq!(row.infected(), 2);
        assert_eq!(row.total(), 10);
        assert_eq!(row.new_infections, 3);
        assert_eq!(rec.history().len(), 1);
        assert_eq!(rec.latest(), Some(&row));
    }

    #[test]
    fn peaks_keep_first_maximum() {
        let mut a = arena(10);
        let mut rec = StatisticsRecorder::new(10);
        rec.record(0, &a, DayTally::default());

        for i in 0..4 {
            a.get_mut(AgentId(i)).infect(1, false, false);
        }
        rec.record(1, &a, DayTally::default());

        a.get_mut(AgentId(0)).quarantine(Point::new(1.5, -0.7), Point::ORIGIN);
        rec.record(2, &a, DayTally::default());

        a.get_mut(AgentId(0)).resolve(true);
        a.get_mut(AgentId(1)).resolve(false);
        rec.record(3, &a, DayTally { new_infections: 0, new_recoveries: 1, new_deaths: 1 });

        let peaks = rec.peaks();
        assert_eq!(peaks.max_infected, 4);
        assert_eq!(peaks.max_infected_day, 1);
        assert_eq!(peaks.max_quarantined, 1);
        assert_eq!(peaks.max_exposed, 0);

        let latest = rec.latest().unwrap();
        assert_eq!(latest.dead, 1);
        assert_eq!(latest.removed, 1);
        assert_eq!(latest.quarantined, 0);
    }

    #[test]
    fn resume_recomputes_peaks_and_appends() {
        let mut a = arena(6);
        let mut rec = StatisticsRecorder::new(6);
        rec.record(0, &a, DayTally::default());
        for i in 0..3 {
            a.get_mut(AgentId(i)).infect(0, false, false);
        }
        rec.record(1, &a, DayTally { new_infections: 3, ..DayTally::default() });

        let mut resumed = StatisticsRecorder::resume(6, rec.history().to_vec());
        assert_eq!(resumed.peaks(), rec.peaks());
        assert_eq!(resumed.stats(), rec.stats());

        a.get_mut(AgentId(0)).resolve(false);
        let row = resumed.record(2, &a, DayTally { new_recoveries: 1, ..DayTally::default() });
        assert_eq!(resumed.history().len(), 3);
        assert_eq!(row.infected(), 2);
        assert_eq!(resumed.peaks().max_infected, 3);
        assert_eq!(resumed.peaks().max_infected_day, 1);
    }

    #[test]
    fn recording_does_not_touch_the_arena() {
        let a = arena(5);
        let before = a.clone();
        let mut rec = StatisticsRecorder::new(5);
        rec.record(0, &a, DayTally::default());
        assert_eq!(a, before);
    }
}

#[cfg(test)]
mod summary {
    use crate::{DailyStats, Peaks, Stats, StatisticsRecorder};

    #[test]
    fn percentages_use_initial_population() {
        let stats = Stats {
            latest: DailyStats {
                day: 5,
                susceptible: 150,
                symptomatic: 20,
                asymptomatic: 5,
                dead: 10,
                ..Default::default()
            },
            peaks: Peaks::default(),
            initial_population: 200,
        };
        assert_eq!(stats.infected_percent(), 12.5);
        assert_eq!(stats.dead_percent(), 5.0);
        assert_eq!(stats.attack_rate_percent(), 25.0);
    }

    #[test]
    fn empty_population_reports_zero() {
        let stats = StatisticsRecorder::new(0).stats();
        assert_eq!(stats.percent(3), 0.0);
        assert_eq!(stats.latest, DailyStats::default());
    }
}
