//! Cover tiers and quorum tables.
//!
//! A [`TierTable`] is the caller-owned, ordered list of discrete cover
//! levels. Index 0 is "no cover"; the last index is the best cover the
//! map can grant. Each tier carries a [`QuorumTable`]: a 5-entry lookup,
//! indexed by how many of a sub-square's 4 corner rays were blocked at
//! that tier's power, yielding the effective tier granted.

use crate::error::CoverError;
use std::fmt;

/// Number of entries in a quorum table: one per possible blocked-ray
/// count (0 through [`RAYS_PER_CELL`]).
pub const QUORUM_LEN: usize = 5;

/// Corner rays sampled per target sub-square.
pub const RAYS_PER_CELL: usize = 4;

/// A 5-entry lookup from blocked-ray count to granted cover tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuorumTable([usize; QUORUM_LEN]);

impl QuorumTable {
    /// Create a quorum table from explicit entries.
    pub const fn new(entries: [usize; QUORUM_LEN]) -> Self {
        Self(entries)
    }

    /// The all-zero table used by the "no cover" tier.
    pub const fn zero() -> Self {
        Self([0; QUORUM_LEN])
    }

    /// Create a quorum table from a dynamically-sourced slice.
    ///
    /// Fails fast with [`CoverError::MalformedQuorumTable`] when the
    /// slice does not hold exactly [`QUORUM_LEN`] entries. Use this at
    /// the configuration boundary; prefer [`QuorumTable::new`] when the
    /// length is statically known.
    pub fn try_from_slice(entries: &[usize]) -> Result<Self, CoverError> {
        match <[usize; QUORUM_LEN]>::try_from(entries) {
            Ok(arr) => Ok(Self(arr)),
            Err(_) => Err(CoverError::MalformedQuorumTable {
                len: entries.len(),
            }),
        }
    }

    /// Approximate the default quorum table for a tier at `level`.
    ///
    /// Reproduces the historical hand-tuned lookup tables exactly for
    /// levels 0–3 and extrapolates for higher levels:
    ///
    /// - `level > 3`: linear, `entry[i] = ceil(level * i / 4)`.
    /// - `level <= 3`: with `x = i/4`, the cubic
    ///   `(1.4x³ − 2.1x² + 1.7x) * level`, rounded **up** for levels
    ///   below 3 and with "fractional part > 0.5 → up, else down" at
    ///   exactly level 3.
    ///
    /// Both the polynomial coefficients and the asymmetric rounding at
    /// level 3 are load-bearing: downstream defaults depend on the exact
    /// tables this produces. Do not substitute a symmetric rounding rule.
    pub fn approximated(level: usize) -> Self {
        let mut entries = [0usize; QUORUM_LEN];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = approximate_entry(level, i);
        }
        Self(entries)
    }

    /// Effective tier granted when `blocked` of the 4 corner rays were
    /// blocked at this tier's power.
    pub fn grant(&self, blocked: usize) -> usize {
        self.0[blocked.min(RAYS_PER_CELL)]
    }

    /// The raw entries.
    pub fn entries(&self) -> &[usize; QUORUM_LEN] {
        &self.0
    }
}

fn approximate_entry(level: usize, i: usize) -> usize {
    if level > 3 {
        // Anything past the historical tables sits best on a straight line.
        return (level * i).div_ceil(RAYS_PER_CELL);
    }

    let x = i as f64 / RAYS_PER_CELL as f64;
    let raw = (1.4 * x.powi(3) - 2.1 * x.powi(2) + 1.7 * x) * level as f64;

    let rounded = if level < 3 {
        raw.ceil()
    } else if raw.fract() > 0.5 {
        // Level 3 matches its historical table only under this lopsided
        // rule; plain round() produces a different table.
        raw.ceil()
    } else {
        raw.floor()
    };

    rounded as usize
}

/// One entry in the ordered cover-tier list.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverTier {
    /// Display name ("Half Cover", "Three-Quarters Cover", ...). Never
    /// examined by the computation.
    pub label: String,
    /// Defense bonus granted to a target with this cover. The query
    /// result reports its negation as the observer's attack delta.
    pub defense_bonus: i32,
    /// Quorum lookup for this tier's blocking power.
    pub quorum: QuorumTable,
}

impl CoverTier {
    /// Create a tier.
    pub fn new(label: impl Into<String>, defense_bonus: i32, quorum: QuorumTable) -> Self {
        Self {
            label: label.into(),
            defense_bonus,
            quorum,
        }
    }
}

/// The ordered, validated list of cover tiers for a game table.
///
/// Index 0 is "no cover" and by convention carries defense bonus 0 and
/// the all-zero quorum table; the convention is documented rather than
/// enforced so callers with unusual house rules are not rejected. A
/// tier's index doubles as the blocking power obstacles of that tier
/// contribute.
#[derive(Clone, Debug, PartialEq)]
pub struct TierTable {
    tiers: Vec<CoverTier>,
}

impl TierTable {
    /// Create a tier table, failing fast on an empty list.
    pub fn new(tiers: Vec<CoverTier>) -> Result<Self, CoverError> {
        if tiers.is_empty() {
            return Err(CoverError::EmptyTierTable);
        }
        Ok(Self { tiers })
    }

    /// Create a tier table from `(label, defense_bonus)` pairs, deriving
    /// each tier's quorum table from its position via
    /// [`QuorumTable::approximated`].
    pub fn with_default_quorums(
        specs: Vec<(String, i32)>,
    ) -> Result<Self, CoverError> {
        let tiers = specs
            .into_iter()
            .enumerate()
            .map(|(level, (label, bonus))| {
                CoverTier::new(label, bonus, QuorumTable::approximated(level))
            })
            .collect();
        Self::new(tiers)
    }

    /// The historical default table: none / half (+2) / three-quarters
    /// (+5) / full (+40), with the hand-tuned quorum tables.
    pub fn dnd5e() -> Self {
        Self {
            tiers: vec![
                CoverTier::new("No Cover", 0, QuorumTable::zero()),
                CoverTier::new("Half Cover", 2, QuorumTable::new([0, 1, 1, 1, 1])),
                CoverTier::new("Three-Quarters Cover", 5, QuorumTable::new([0, 1, 1, 2, 2])),
                CoverTier::new("Full Cover", 40, QuorumTable::new([0, 1, 1, 2, 3])),
            ],
        }
    }

    /// Highest valid tier index.
    pub fn max_tier(&self) -> usize {
        self.tiers.len() - 1
    }

    /// Number of tiers. Never zero.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always `false` — construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The tier at `index`, if defined.
    pub fn get(&self, index: usize) -> Option<&CoverTier> {
        self.tiers.get(index)
    }

    /// All tiers in order.
    pub fn tiers(&self) -> &[CoverTier] {
        &self.tiers
    }

    /// Defense bonus of `tier`, or 0 for an out-of-range index.
    pub fn defense_bonus(&self, tier: usize) -> i32 {
        self.get(tier).map(|t| t.defense_bonus).unwrap_or(0)
    }

    /// Human-readable label for `tier`: the bare tier name for "no
    /// cover" and the best tier, the name plus signed bonus in between.
    pub fn describe(&self, tier: usize) -> String {
        match self.get(tier) {
            Some(t) if tier == 0 || tier == self.max_tier() => t.label.clone(),
            Some(t) => format!("{} ({:+})", t.label, t.defense_bonus),
            None => format!("tier {tier}"),
        }
    }
}

impl fmt::Display for TierTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.tiers.iter().map(|t| t.label.as_str()).collect();
        write!(f, "[{}]", labels.join(" < "))
    }
}
