/*!
 * Resource Safety Detector
 * Banker's-style fixed-point search over a validated resource snapshot
 */

pub mod collect;
pub mod types;

// Re-export for convenience
pub use collect::{collect_snapshot, CellRequest, CellSource};
pub use types::{ResourceSnapshot, SafetyError, SafetyResult};

use log::info;

/// Outcome of the safety search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every process can finish; `sequence` is one admissible completion
    /// order.
    Safe { sequence: Vec<usize> },
    /// At least one process can never obtain its remaining need.
    /// `completed` holds the processes the search did admit, in admission
    /// order.
    Unsafe { completed: Vec<usize> },
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe { .. })
    }

    /// Admission order produced by the search: full on `Safe`, partial on
    /// `Unsafe`.
    pub fn sequence(&self) -> &[usize] {
        match self {
            Verdict::Safe { sequence } => sequence,
            Verdict::Unsafe { completed } => completed,
        }
    }
}

/// Run the safety search over the snapshot.
///
/// Processes are scanned in index order. An admission releases its
/// allocation into `work` immediately, so later indices in the same pass
/// see the updated capacity and one pass can admit several processes whose
/// eligibility only arose mid-pass. The search stops after the first pass
/// that admits nobody.
pub fn check_safety(snapshot: &ResourceSnapshot) -> Verdict {
    let processes = snapshot.processes();
    let resources = snapshot.resources();

    let mut work = snapshot.available().to_vec();
    let mut finish = vec![false; processes];
    let mut sequence = Vec::with_capacity(processes);

    loop {
        let mut admitted = false;
        for i in 0..processes {
            if finish[i] {
                continue;
            }
            if (0..resources).all(|j| snapshot.need(i, j) <= work[j]) {
                for (slot, released) in work.iter_mut().zip(snapshot.allocation(i)) {
                    *slot += released;
                }
                finish[i] = true;
                sequence.push(i);
                admitted = true;
            }
        }
        if !admitted {
            break;
        }
    }

    if finish.iter().all(|&done| done) {
        info!("resource state safe; sequence {:?}", sequence);
        Verdict::Safe { sequence }
    } else {
        info!(
            "resource state unsafe; {} of {} processes can finish",
            sequence.len(),
            processes
        );
        Verdict::Unsafe { completed: sequence }
    }
}
