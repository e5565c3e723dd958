//! Simulation parameters, validation, and live updates.
//!
//! `SimulationParameters` is an explicit value owned by the caller and handed
//! to the engine; there is no global parameter object.  The field table below
//! is the single source of truth for each parameter's name, type, default,
//! and closed validity range.  From it the macro generates:
//!
//! - the `SimulationParameters` struct (serde, `#[serde(default)]`),
//! - `ParamKey`: one variant per field, parsed from the field name,
//! - `get` / `set` for string-addressed live updates,
//! - the per-field range checks used by [`SimulationParameters::validate`].
//!
//! Units are part of the names: `*_days` fields are simulated days,
//! `*_ticks` fields are ticks, and probabilities carry their unit type
//! ([`PerContact`], [`PerDay`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::time::SimClock;
use crate::{ConfigError, ConfigResult, PerContact, PerDay, PerTick};

// ── Field conversion ──────────────────────────────────────────────────────────

/// A dynamically typed parameter value, as supplied by a UI or config layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v)   => write!(f, "{v}"),
            ParamValue::Bool(v)  => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Conversion between a typed parameter field and [`ParamValue`].
trait ParamField: Sized + Copy {
    const EXPECTED: &'static str;

    fn to_value(self) -> ParamValue;

    fn from_value(field: &'static str, value: ParamValue) -> ConfigResult<Self>;

    /// Numeric magnitude used for the range check.
    fn magnitude(self) -> f64;
}

impl ParamField for f64 {
    const EXPECTED: &'static str = "float";

    fn to_value(self) -> ParamValue {
        ParamValue::Float(self)
    }

    fn from_value(field: &'static str, value: ParamValue) -> ConfigResult<Self> {
        match value {
            ParamValue::Float(v) => Ok(v),
            ParamValue::Int(v)   => Ok(v as f64),
            ParamValue::Bool(_)  => Err(ConfigError::WrongType { field, expected: Self::EXPECTED }),
        }
    }

    fn magnitude(self) -> f64 {
        self
    }
}

impl ParamField for u32 {
    const EXPECTED: &'static str = "integer";

    fn to_value(self) -> ParamValue {
        ParamValue::Int(i64::from(self))
    }

    fn from_value(field: &'static str, value: ParamValue) -> ConfigResult<Self> {
        match value {
            ParamValue::Int(v) => u32::try_from(v).map_err(|_| ConfigError::OutOfRange {
                field,
                value: v as f64,
                min:   0.0,
                max:   f64::from(u32::MAX),
            }),
            _ => Err(ConfigError::WrongType { field, expected: Self::EXPECTED }),
        }
    }

    fn magnitude(self) -> f64 {
        f64::from(self)
    }
}

impl ParamField for bool {
    const EXPECTED: &'static str = "boolean";

    fn to_value(self) -> ParamValue {
        ParamValue::Bool(self)
    }

    fn from_value(field: &'static str, value: ParamValue) -> ConfigResult<Self> {
        match value {
            ParamValue::Bool(v) => Ok(v),
            _ => Err(ConfigError::WrongType { field, expected: Self::EXPECTED }),
        }
    }

    fn magnitude(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }
}

impl ParamField for PerContact {
    const EXPECTED: &'static str = "float";

    fn to_value(self) -> ParamValue {
        ParamValue::Float(self.0)
    }

    fn from_value(field: &'static str, value: ParamValue) -> ConfigResult<Self> {
        f64::from_value(field, value).map(PerContact)
    }

    fn magnitude(self) -> f64 {
        self.0
    }
}

impl ParamField for PerDay {
    const EXPECTED: &'static str = "float";

    fn to_value(self) -> ParamValue {
        ParamValue::Float(self.0)
    }

    fn from_value(field: &'static str, value: ParamValue) -> ConfigResult<Self> {
        f64::from_value(field, value).map(PerDay)
    }

    fn magnitude(self) -> f64 {
        self.0
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> ConfigResult<()> {
    // Written so NaN fails as well.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, min, max })
    }
}

// ── Field table ───────────────────────────────────────────────────────────────

macro_rules! parameters {
    ($(
        $(#[$doc:meta])*
        $key:ident => $field:ident : $ty:ty = $default:expr, [$min:expr, $max:expr];
    )*) => {
        /// Every tunable of the engine.  See the module docs.
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct SimulationParameters {
            $(
                $(#[$doc])*
                pub $field: $ty,
            )*
        }

        impl Default for SimulationParameters {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }

        /// Name of one field of [`SimulationParameters`].
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum ParamKey {
            $( $key, )*
        }

        impl ParamKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [ParamKey] = &[ $( ParamKey::$key, )* ];

            /// The field name, as accepted by `FromStr`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( ParamKey::$key => stringify!($field), )*
                }
            }

            /// The closed validity range `(min, max)`.
            pub fn range(self) -> (f64, f64) {
                match self {
                    $( ParamKey::$key => (($min) as f64, ($max) as f64), )*
                }
            }
        }

        impl FromStr for ParamKey {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($field) => Ok(ParamKey::$key), )*
                    other => Err(ConfigError::UnknownParameter(other.to_owned())),
                }
            }
        }

        impl SimulationParameters {
            /// Current value of one field.
            pub fn get(&self, key: ParamKey) -> ParamValue {
                match key {
                    $( ParamKey::$key => ParamField::to_value(self.$field), )*
                }
            }

            /// Write one field without validating.
            fn assign(&mut self, key: ParamKey, value: ParamValue) -> ConfigResult<()> {
                match key {
                    $(
                        ParamKey::$key => {
                            self.$field = <$ty as ParamField>::from_value(stringify!($field), value)?;
                        }
                    )*
                }
                Ok(())
            }

            fn check_ranges(&self) -> ConfigResult<()> {
                $(
                    check_range(
                        stringify!($field),
                        ParamField::magnitude(self.$field),
                        ($min) as f64,
                        ($max) as f64,
                    )?;
                )*
                Ok(())
            }
        }
    };
}

parameters! {
    /// Agents spawned in simple and quarantine modes.
    Population => population: u32 = 200, [1, 100_000];

    /// Contact distance for transmission.  Also the spatial grid cell size.
    InfectionRadius => infection_radius: f64 = 0.15, [0.01, 1.0];

    /// Transmission chance per infectious–susceptible pair in range, per tick.
    InfectionProbability => infection_probability: PerContact = PerContact(0.15), [0.0, 1.0];

    /// Share of the population (per seeded community) infected at start.
    FractionInfectedInit => fraction_infected_init: f64 = 0.01, [0.0, 1.0];

    /// Base length of the infectious period, scaled per agent by its
    /// recovery modifier.
    InfectionDurationDays => infection_duration_days: f64 = 25.0, [0.5, 365.0];

    /// Length of the non-infectious Exposed stage.  `0` disables it.
    IncubationDays => incubation_days: u32 = 0, [0, 60];

    /// Chance that an infection ends in death rather than recovery.
    MortalityRate => mortality_rate: f64 = 0.0, [0.0, 1.0];

    /// Chance that a new infection is asymptomatic.
    ProbNoSymptoms => prob_no_symptoms: f64 = 0.20, [0.0, 1.0];

    /// Strength of the repulsion between distancing agents.
    SocialDistanceFactor => social_distance_factor: f64 = 0.0, [0.0, 1.0];

    /// Share of agents that practise distancing.
    SocialDistanceObedient => social_distance_obedient: f64 = 1.0, [0.0, 1.0];

    /// Grid cells scanned in each direction by neighbour queries.
    BoxesToConsider => boxes_to_consider: u32 = 2, [1, 10];

    SpeedLimit => speed_limit: f64 = 0.1, [0.001, 1.0];

    BoundaryForce => boundary_force: f64 = 0.2, [0.0, 10.0];

    TicksPerDay => ticks_per_day: u32 = 24, [1, 1440];

    QuarantineEnabled => quarantine_enabled: bool = false, [0, 1];

    /// Days an agent must have been symptomatic before it is quarantined.
    QuarantineAfterDays => quarantine_after_days: u32 = 5, [0, 365];

    /// First simulation day on which quarantine transfers happen.
    QuarantineActivationDay => quarantine_activation_day: u32 = 10, [0, 100_000];

    MarketplaceEnabled => marketplace_enabled: bool = false, [0, 1];

    /// A gathering starts on every day divisible by this.
    MarketplaceIntervalDays => marketplace_interval_days: u32 = 7, [1, 365];

    /// Ticks an attendee stays at the marketplace.
    MarketplaceDurationTicks => marketplace_duration_ticks: u32 = 2, [1, 1440];

    /// Share of eligible agents attending each gathering.
    MarketplaceAttendance => marketplace_attendance: f64 = 0.6, [0.0, 1.0];

    /// Marketplace centre in simple and quarantine modes.
    MarketplaceX => marketplace_x: f64 = 0.0, [-0.8, 0.8];

    MarketplaceY => marketplace_y: f64 = 0.0, [-0.8, 0.8];

    /// Agents spawned per populated tile in communities mode.
    NumPerCommunity => num_per_community: u32 = 60, [1, 10_000];

    /// Tiles that receive initial infections in communities mode.
    CommunitiesToInfect => communities_to_infect: u32 = 2, [1, 8];

    /// Chance that an agent moves to another tile over one day.
    TravelProbability => travel_probability: PerDay = PerDay(0.02), [0.0, 1.0];

    SusceptibilityMean => susceptibility_mean: f64 = 1.0, [0.1, 10.0];

    SusceptibilityStdDev => susceptibility_std_dev: f64 = 0.2, [0.0, 5.0];

    /// Lower clamp on drawn susceptibility so no agent is immune.
    SusceptibilityFloor => susceptibility_floor: f64 = 0.1, [0.0, 10.0];

    /// Mean of the exponential recovery-time modifier.
    RecoveryScale => recovery_scale: f64 = 1.0, [0.01, 100.0];

    RecoveryModifierMin => recovery_modifier_min: f64 = 0.5, [0.0, 1.0e9];

    RecoveryModifierMax => recovery_modifier_max: f64 = 3.0, [0.0, 1.0e9];
}

impl SimulationParameters {
    /// Check every field against its documented range plus the cross-field
    /// constraints.  Never clamps.
    pub fn validate(&self) -> ConfigResult<()> {
        self.check_ranges()?;
        if self.recovery_modifier_min > self.recovery_modifier_max {
            return Err(ConfigError::InvertedRange {
                low_field:  "recovery_modifier_min",
                high_field: "recovery_modifier_max",
                low:        self.recovery_modifier_min,
                high:       self.recovery_modifier_max,
            });
        }
        Ok(())
    }

    /// Validate `value` for `key` and apply it.  On error `self` is left
    /// untouched.
    pub fn set(&mut self, key: ParamKey, value: ParamValue) -> ConfigResult<()> {
        let mut candidate = self.clone();
        candidate.assign(key, value)?;
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// [`set`](Self::set) addressed by field name.
    pub fn set_by_name(&mut self, name: &str, value: ParamValue) -> ConfigResult<()> {
        self.set(name.parse()?, value)
    }

    /// Initially infected agents out of `n`: `max(1, round(n × fraction))`,
    /// capped at `n`.
    pub fn initial_infected(&self, n: u32) -> u32 {
        let seeded = (f64::from(n) * self.fraction_infected_init).round() as u32;
        seeded.max(1).min(n)
    }
}

// ── Derived per-tick rates ────────────────────────────────────────────────────

/// Rates converted to the engine's per-tick unit.  Derived once whenever the
/// parameters change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickRates {
    /// Per-contact per-tick; used as configured.
    pub infection: PerContact,
    /// Inter-community travel chance per agent per tick.
    pub travel: PerTick,
    /// Integration step `dt` in days.
    pub time_step: f64,
}

impl TickRates {
    pub fn derive(params: &SimulationParameters) -> Self {
        Self {
            infection: params.infection_probability,
            travel:    params.travel_probability.per_tick(params.ticks_per_day),
            time_step: SimClock::time_step(params.ticks_per_day),
        }
    }
}
