//! Finalized ballot handed to reporting.

/// One candidate's final allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultEntry {
    pub candidate: String,
    pub weight: u32,
    pub cost: u64,
}

impl ResultEntry {
    /// This entry's share of `total` points as a whole percentage, rounded
    /// half up. Zero when nothing was spent.
    pub const fn share_percent(&self, total: u64) -> u64 {
        if total == 0 {
            return 0;
        }
        // round(cost / total × 100) without floating point
        ((self.cost as u128 * 200 + total as u128) / (2 * total as u128)) as u64
    }
}

/// Final `{candidate, weight, cost}` tuples in ballot order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSet {
    entries: Vec<ResultEntry>,
}

impl ResultSet {
    pub(crate) fn new(entries: Vec<ResultEntry>) -> Self {
        Self { entries }
    }

    /// Entries in ballot order.
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Points spent across the whole ballot.
    pub fn total_cost(&self) -> u64 {
        self.entries.iter().map(|e| e.cost).sum()
    }

    /// Each entry paired with its share of the points spent.
    pub fn shares(&self) -> impl Iterator<Item = (&ResultEntry, u64)> {
        let total = self.total_cost();
        self.entries.iter().map(move |e| (e, e.share_percent(total)))
    }

    /// Look up an entry by candidate name.
    pub fn get(&self, candidate: &str) -> Option<&ResultEntry> {
        self.entries.iter().find(|e| e.candidate == candidate)
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultEntry;
    type IntoIter = std::vec::IntoIter<ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
