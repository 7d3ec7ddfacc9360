//! Deterministic random number generation.
//!
//! RULE: rotation logic never calls a platform RNG directly.
//! All randomness flows through DutyRng instances derived from the
//! single master seed chosen for the run.
//!
//! Each duty gets its own RNG stream, seeded deterministically from
//! (master_seed XOR duty_index). This means:
//!   - Adding a new duty never changes existing duties' streams.
//!   - Each duty's draws are fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single duty.
pub struct DutyRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DutyRng {
    /// Create a duty RNG from the master seed and a stable duty index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, duty_index: u64) -> Self {
        let derived_seed = master_seed ^ (duty_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.next_u64() % n
    }

    /// Draw up to `n` items without replacement, in random order.
    /// Returns fewer than `n` items only when the pool is smaller.
    pub fn sample<T: Clone>(&mut self, pool: &[T], n: usize) -> Vec<T> {
        let take = n.min(pool.len());
        let mut idx: Vec<usize> = (0..pool.len()).collect();
        for i in 0..take {
            let j = i + self.next_u64_below((idx.len() - i) as u64) as usize;
            idx.swap(i, j);
        }
        idx[..take].iter().map(|&i| pool[i].clone()).collect()
    }

    /// Uniform draw of a single item, or None on an empty pool.
    pub fn choose<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        if pool.is_empty() {
            return None;
        }
        let i = self.next_u64_below(pool.len() as u64) as usize;
        Some(&pool[i])
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_u64_below((i + 1) as u64) as usize;
            items.swap(i, j);
        }
    }
}

/// All duty RNGs for a single run, derived from one master seed.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_duty(&self, slot: DutySlot) -> DutyRng {
        DutyRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable duty slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every duty's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum DutySlot {
    HelpDesk = 0,
    Operations = 1,
    Onboarding = 2,
    ReducedOps = 3,
    // Add new duties here — append only.
}

impl DutySlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HelpDesk => "help_desk",
            Self::Operations => "operations",
            Self::Onboarding => "onboarding",
            Self::ReducedOps => "reduced_ops",
        }
    }
}
