use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic, seed-addressable RNG. Every draw is tagged with a context
/// label so independent streams (data, weights, bias) stay reproducible.
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Seed from an integer, the way the training configuration carries seeds.
    pub fn from_u64(seed: u64, domain: &str) -> Self {
        let tagged = format!("{}-{}", domain, seed);
        Self::new(tagged.as_bytes())
    }

    /// Uniform draw in `[0, 1]`.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"QCLS"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        if self.state[0] < 16 {
            let state = self.state;
            let mut next_state = self.state;
            shake(&[&state, b"SKIP"], &mut next_state);
            self.state = next_state;
        }

        (u64::from_be_bytes(out) as f64) / (u64::MAX as f64)
    }

    /// Uniform draw in `[lo, hi]`.
    pub fn uniform(&mut self, ctx: &[u8], lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64(ctx)
    }

    /// Gaussian draw (Box-Muller).
    pub fn normal(&mut self, ctx: &[u8], mean: f64, std: f64) -> f64 {
        let u1 = self.next_f64(ctx).max(f64::MIN_POSITIVE);
        let u2 = self.next_f64(ctx);
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std * z
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
