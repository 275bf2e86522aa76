/// SVD truncation policy applied after every two-site update.
#[derive(Clone, Copy, Debug)]
pub struct Truncation {
    /// upper bound on the kept bond dimension
    pub max_bond: usize,
    /// singular values at or below this are discarded
    pub cutoff: f64,
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            max_bond: 64,
            cutoff: 1e-10,
        }
    }
}
