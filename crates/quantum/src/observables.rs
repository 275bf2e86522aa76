use crate::env::{left_env, right_env};
use tn::mps::{C64, MPS};

/// Probability weights of |0> and |1> on site `k` (unnormalized).
fn site_weights(psi: &MPS, k: usize) -> [f64; 2] {
    let s = &psi.sites[k];
    let left = left_env(&psi.sites, k);
    let right = right_env(&psi.sites, k);

    let mut weights = [0.0f64; 2];
    for (p, w) in weights.iter_mut().enumerate() {
        let mut acc = C64::new(0.0, 0.0);
        for l in 0..s.dl {
            for lp in 0..s.dl {
                let lval = left[l * s.dl + lp];
                for r in 0..s.dr {
                    for rp in 0..s.dr {
                        let rval = right[r * s.dr + rp];
                        acc += lval * s.get(l, p, r) * s.get(lp, p, rp).conj() * rval;
                    }
                }
            }
        }
        *w = acc.re.max(0.0);
    }
    weights
}

/// Expectation value ⟨Z_k⟩ for a qubit at site k.
pub fn expect_z(psi: &MPS, k: usize) -> f64 {
    assert!(psi.sites[k].dp == 2, "expect_z supports qubits only");

    let [w0, w1] = site_weights(psi, k);
    let denom = w0 + w1;
    if denom == 0.0 {
        return 0.0;
    }

    (w0 - w1) / denom
}
