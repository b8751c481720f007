//! Plain-text rendering of a ballot.

use quadra_grid::{cost_of, Grid, Occupant};
use quadra_ledger::{Allocator, ResultSet};

/// Width of a full result bar in characters.
const BAR_WIDTH: u64 = 20;

/// Letter used for a candidate on the grid.
pub fn label(candidate: usize) -> char {
    (b'A' + (candidate % 26) as u8) as char
}

/// One character per cell: `.` free, blank reserved, a letter per candidate.
pub fn grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| match cell {
            Occupant::Empty => '.',
            Occupant::Reserved => ' ',
            Occupant::Candidate(index) => label(*index),
        }));
        out.push('\n');
    }
    out
}

/// Grid, remaining budget and one row per candidate.
pub fn status(ballot: &Allocator) -> String {
    let mut out = grid(ballot.grid());
    out.push_str(&format!(
        "remaining points: {} / {}\n",
        ballot.remaining_budget(),
        ballot.budget()
    ));
    for (index, (name, &weight)) in ballot.candidates().iter().zip(ballot.weights()).enumerate() {
        out.push_str(&format!(
            "  [{index}] {} {name}: {weight} votes ({} points)\n",
            label(index),
            cost_of(weight)
        ));
    }
    out
}

/// Final allocation with each candidate's share of the points spent.
pub fn results(results: &ResultSet) -> String {
    let mut out = String::new();
    for (entry, share) in results.shares() {
        let filled = (share * BAR_WIDTH / 100) as usize;
        out.push_str(&format!(
            "{:<30} {:>3} votes {:>4} points |{:<width$}| {share:>3}%\n",
            entry.candidate,
            entry.weight,
            entry.cost,
            "#".repeat(filled),
            width = BAR_WIDTH as usize,
        ));
    }
    out
}
