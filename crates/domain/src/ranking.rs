// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Base URL for report links.
const REPORT_BASE_URL: &str = "https://www.fflogs.com/reports";

/// The job a parse was logged on.
///
/// Abbreviations are normalized to uppercase (`whm` and `WHM` are the same job).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// The job abbreviation.
    abbreviation: String,
}

impl Job {
    /// Creates a new `Job` from its abbreviation.
    #[must_use]
    pub fn new(abbreviation: &str) -> Self {
        Self {
            abbreviation: abbreviation.trim().to_uppercase(),
        }
    }

    /// Returns the job abbreviation.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

/// An opaque reference to a logged report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Report {
    /// The report code.
    code: String,
    /// The fight within the report, when known.
    fight_id: Option<u32>,
}

impl Report {
    /// Creates a new report reference.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyReportCode` if `code` is blank.
    pub fn new(code: &str, fight_id: Option<u32>) -> Result<Self, DomainError> {
        let code: &str = code.trim();
        if code.is_empty() {
            return Err(DomainError::EmptyReportCode);
        }
        Ok(Self {
            code: code.to_string(),
            fight_id,
        })
    }

    /// Returns the report code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the fight id, if any.
    #[must_use]
    pub const fn fight_id(&self) -> Option<u32> {
        self.fight_id
    }

    /// Builds a link to the report (and fight, when known).
    #[must_use]
    pub fn url(&self) -> String {
        match self.fight_id {
            Some(fight_id) => format!("{REPORT_BASE_URL}/{}#fight={fight_id}", self.code),
            None => format!("{REPORT_BASE_URL}/{}", self.code),
        }
    }
}

/// A single logged parse for an encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Rank {
    /// DPS percentile in `[0, 100]`.
    dps_percent: f64,
    /// The job the parse was logged on.
    job: Job,
    /// When the pull started.
    start_time: OffsetDateTime,
    /// The report the parse came from.
    report: Report,
}

impl Rank {
    /// Creates a new rank.
    ///
    /// # Arguments
    ///
    /// * `dps_percent` - The DPS percentile, `0..=100`
    /// * `job` - The job used
    /// * `unix_time` - Pull start time in seconds since the epoch
    /// * `report` - The source report
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The percentile is NaN or outside `[0, 100]`
    /// - The timestamp is out of range
    pub fn new(
        dps_percent: f64,
        job: Job,
        unix_time: i64,
        report: Report,
    ) -> Result<Self, DomainError> {
        if !(0.0..=100.0).contains(&dps_percent) {
            return Err(DomainError::InvalidPercentile(dps_percent));
        }
        let start_time: OffsetDateTime = OffsetDateTime::from_unix_timestamp(unix_time)
            .map_err(|_| DomainError::InvalidTimestamp(unix_time))?;

        Ok(Self {
            dps_percent,
            job,
            start_time,
            report,
        })
    }

    /// Returns the DPS percentile.
    #[must_use]
    pub const fn dps_percent(&self) -> f64 {
        self.dps_percent
    }

    /// Returns the job.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    /// Returns the pull start time.
    #[must_use]
    pub const fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }

    /// Returns the pull start time as seconds since the epoch.
    #[must_use]
    pub const fn unix_time(&self) -> i64 {
        self.start_time.unix_timestamp()
    }

    /// Returns the report reference.
    #[must_use]
    pub const fn report(&self) -> &Report {
        &self.report
    }

    /// Describes this rank as the member's best parse in `encounter_name`.
    #[must_use]
    pub fn best_dps_parse_string(&self, encounter_name: &str) -> String {
        format!(
            "Best parse was `{:.2}` with `{}` in `{}` on <t:{}:F> ({}).",
            self.dps_percent,
            self.job.abbreviation(),
            encounter_name,
            self.unix_time(),
            self.report.url()
        )
    }
}

/// A member's recorded performance for one encounter id.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// The encounter id this ranking belongs to.
    encounter_id: u32,
    /// Number of recorded kills.
    total_kills: u32,
    /// Every logged parse for this encounter.
    ranks: Vec<Rank>,
}

impl Ranking {
    /// Creates a new ranking.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ClearWithoutRank` if kills are recorded but no
    /// rank is present; a clear must always point at a report.
    pub fn new(encounter_id: u32, total_kills: u32, ranks: Vec<Rank>) -> Result<Self, DomainError> {
        if total_kills > 0 && ranks.is_empty() {
            return Err(DomainError::ClearWithoutRank { encounter_id });
        }
        Ok(Self {
            encounter_id,
            total_kills,
            ranks,
        })
    }

    /// Returns the encounter id.
    #[must_use]
    pub const fn encounter_id(&self) -> u32 {
        self.encounter_id
    }

    /// Returns the number of recorded kills.
    #[must_use]
    pub const fn total_kills(&self) -> u32 {
        self.total_kills
    }

    /// Returns all ranks in the order they were supplied.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Whether the member has cleared this encounter.
    #[must_use]
    pub const fn cleared(&self) -> bool {
        self.total_kills > 0 && !self.ranks.is_empty()
    }

    /// Returns the highest percentile rank. Earlier ranks win ties.
    #[must_use]
    pub fn best_rank(&self) -> Option<&Rank> {
        let mut best: Option<&Rank> = None;
        for rank in &self.ranks {
            match best {
                Some(current) if rank.dps_percent <= current.dps_percent => {}
                _ => best = Some(rank),
            }
        }
        best
    }

    /// Returns ranks ordered most recent first. Equal times keep supply order.
    #[must_use]
    pub fn ranks_by_time(&self) -> Vec<&Rank> {
        let mut ranks: Vec<&Rank> = self.ranks.iter().collect();
        ranks.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        ranks
    }

    /// Returns the most recent rank.
    #[must_use]
    pub fn most_recent_rank(&self) -> Option<&Rank> {
        self.ranks_by_time().into_iter().next()
    }
}

/// A member's rankings keyed by encounter id.
///
/// Holds at most one `Ranking` per encounter id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rankings {
    rankings: BTreeMap<u32, Ranking>,
}

impl Rankings {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rankings: BTreeMap::new(),
        }
    }

    /// Builds a snapshot from a list of rankings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateRanking` if two rankings share an id.
    pub fn from_rankings(rankings: Vec<Ranking>) -> Result<Self, DomainError> {
        let mut snapshot: Self = Self::new();
        for ranking in rankings {
            snapshot.insert(ranking)?;
        }
        Ok(snapshot)
    }

    /// Adds a ranking.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateRanking` if the id is already present.
    pub fn insert(&mut self, ranking: Ranking) -> Result<(), DomainError> {
        let id: u32 = ranking.encounter_id;
        if self.rankings.contains_key(&id) {
            return Err(DomainError::DuplicateRanking(id));
        }
        self.rankings.insert(id, ranking);
        Ok(())
    }

    /// Looks up the ranking for an encounter id.
    #[must_use]
    pub fn get(&self, encounter_id: u32) -> Option<&Ranking> {
        self.rankings.get(&encounter_id)
    }

    /// Number of rankings in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Iterates rankings in encounter id order.
    pub fn iter(&self) -> impl Iterator<Item = &Ranking> {
        self.rankings.values()
    }
}
