use super::*;

/// Purely random placement: `mines` distinct cells sampled uniformly without replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        use rand::Rng;
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::{SeedableRng, rngs::SmallRng, seq::index};

        let total_cells = config.total_cells() as usize;
        let columns = usize::from(config.columns());
        let mines = (config.mines as usize).min(total_cells.saturating_sub(1));

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for cell in index::sample(&mut rng, total_cells, mines) {
            mine_mask[[cell / columns, cell % columns]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Generated {}x{} layout with {} mines from seed {}",
            config.rows(),
            config.columns(),
            layout.mine_count(),
            self.seed
        );
        layout
    }
}
