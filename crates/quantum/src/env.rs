use tn::mps::{C64, Tensor3};

/// Transfer-matrix environment ⟨ψ|ψ⟩ contracted over sites `0..k`, stored as
/// a `dl(k) × dl(k)` matrix indexed `[ket * d + bra]`.
pub(crate) fn left_env(sites: &[Tensor3], k: usize) -> Vec<C64> {
    sites[..k].iter().fold(vec![C64::new(1.0, 0.0)], |env, a| {
        let mut next = vec![C64::new(0.0, 0.0); a.dr * a.dr];
        for l in 0..a.dl {
            for lp in 0..a.dl {
                let lval = env[l * a.dl + lp];
                if lval == C64::new(0.0, 0.0) {
                    continue;
                }
                for p in 0..a.dp {
                    for r in 0..a.dr {
                        let ket = lval * a.get(l, p, r);
                        for rp in 0..a.dr {
                            next[r * a.dr + rp] += ket * a.get(lp, p, rp).conj();
                        }
                    }
                }
            }
        }
        next
    })
}

/// Same as [`left_env`] but over sites `k+1..n`, yielding a `dr(k) × dr(k)` matrix.
pub(crate) fn right_env(sites: &[Tensor3], k: usize) -> Vec<C64> {
    sites[k + 1..].iter().rev().fold(vec![C64::new(1.0, 0.0)], |env, a| {
        let mut next = vec![C64::new(0.0, 0.0); a.dl * a.dl];
        for r in 0..a.dr {
            for rp in 0..a.dr {
                let rval = env[r * a.dr + rp];
                if rval == C64::new(0.0, 0.0) {
                    continue;
                }
                for p in 0..a.dp {
                    for l in 0..a.dl {
                        let ket = a.get(l, p, r) * rval;
                        for lp in 0..a.dl {
                            next[l * a.dl + lp] += ket * a.get(lp, p, rp).conj();
                        }
                    }
                }
            }
        }
        next
    })
}
