//! Candidate selection before voting.
//!
//! Participants start from a fixed catalog and strike out the entries they
//! do not want to vote on. The survivors, in catalog order, become the
//! ballot.

use quadra_grid::GridSpec;
use tracing::debug;

use crate::error::{Result, SessionError};
use crate::session::Session;

/// The catalog used by the reference ballot.
pub const REFERENCE_CATALOG: [&str; 10] = [
    "Water quality",
    "Ecosystem conservation",
    "Litter control",
    "Fishery resource protection",
    "Invasive species control",
    "Aquatic weed control",
    "Climate change mitigation",
    "Lake cuisine heritage",
    "Leisure management",
    "Environmental education",
];

/// A candidate catalog with per-entry exclusion flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    catalog: Vec<String>,
    excluded: Vec<bool>,
}

impl CandidatePool {
    /// Build a pool from catalog entries. Names must be unique.
    pub fn new<I, S>(catalog: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in catalog {
            let name = name.into();
            if names.contains(&name) {
                return Err(SessionError::DuplicateCandidate(name));
            }
            names.push(name);
        }
        Ok(Self {
            excluded: vec![false; names.len()],
            catalog: names,
        })
    }

    /// The reference catalog with nothing excluded.
    pub fn reference() -> Self {
        Self {
            catalog: REFERENCE_CATALOG.iter().map(|s| s.to_string()).collect(),
            excluded: vec![false; REFERENCE_CATALOG.len()],
        }
    }

    /// Every catalog entry in order.
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.catalog
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SessionError::UnknownCandidate(name.to_string()))
    }

    /// Flip an entry's exclusion. Returns whether it is now excluded.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let i = self.position(name)?;
        self.excluded[i] = !self.excluded[i];
        Ok(self.excluded[i])
    }

    /// Strike an entry from the ballot.
    pub fn exclude(&mut self, name: &str) -> Result<()> {
        let i = self.position(name)?;
        self.excluded[i] = true;
        Ok(())
    }

    /// Put a struck entry back.
    pub fn include(&mut self, name: &str) -> Result<()> {
        let i = self.position(name)?;
        self.excluded[i] = false;
        Ok(())
    }

    pub fn is_excluded(&self, name: &str) -> Result<bool> {
        Ok(self.excluded[self.position(name)?])
    }

    /// Entries still on the ballot, in catalog order.
    pub fn selected(&self) -> Vec<String> {
        self.catalog
            .iter()
            .zip(&self.excluded)
            .filter(|&(_, &excluded)| !excluded)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Whether voting can start.
    pub fn can_start(&self) -> bool {
        self.excluded.iter().any(|&e| !e)
    }

    /// Open a voting session on the selected entries.
    pub fn start_session(&self, spec: GridSpec) -> Result<Session> {
        let selected = self.selected();
        if selected.is_empty() {
            return Err(SessionError::NoCandidates);
        }
        debug!(
            selected = selected.len(),
            excluded = self.catalog.len() - selected.len(),
            "starting session"
        );
        Session::new(selected, spec)
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_has_ten_entries() {
        let pool = CandidatePool::reference();
        assert_eq!(pool.catalog().len(), 10);
        assert_eq!(pool.selected().len(), 10);
        assert!(pool.can_start());
    }

    #[test]
    fn toggle_flips_exclusion() {
        let mut pool = CandidatePool::new(["a", "b", "c"]).unwrap();
        assert!(pool.toggle("b").unwrap());
        assert_eq!(pool.selected(), vec!["a", "c"]);
        assert!(!pool.toggle("b").unwrap());
        assert_eq!(pool.selected(), vec!["a", "b", "c"]);
    }

    #[test]
    fn selection_keeps_catalog_order() {
        let mut pool = CandidatePool::new(["z", "y", "x", "w"]).unwrap();
        pool.exclude("y").unwrap();
        pool.exclude("w").unwrap();
        assert_eq!(pool.selected(), vec!["z", "x"]);
        pool.include("y").unwrap();
        assert_eq!(pool.selected(), vec!["z", "y", "x"]);
        assert!(pool.is_excluded("w").unwrap());
    }

    #[test]
    fn unknown_and_duplicate_names() {
        assert!(matches!(
            CandidatePool::new(["a", "a"]),
            Err(SessionError::DuplicateCandidate(name)) if name == "a"
        ));

        let mut pool = CandidatePool::new(["a"]).unwrap();
        assert!(matches!(
            pool.toggle("nope"),
            Err(SessionError::UnknownCandidate(_))
        ));
    }

    #[test]
    fn cannot_start_with_everything_excluded() {
        let mut pool = CandidatePool::new(["a", "b"]).unwrap();
        pool.exclude("a").unwrap();
        pool.exclude("b").unwrap();
        assert!(!pool.can_start());
        assert!(matches!(
            pool.start_session(GridSpec::standard()),
            Err(SessionError::NoCandidates)
        ));
    }

    #[test]
    fn session_uses_selected_entries() {
        let mut pool = CandidatePool::new(["a", "b", "c"]).unwrap();
        pool.exclude("a").unwrap();
        let session = pool.start_session(GridSpec::standard()).unwrap();
        assert_eq!(session.allocator().candidates(), &["b", "c"]);
    }
}
