use crate::gates::C64;

/// Dense `2^n` amplitude vector. Qubit 0 is the most significant bit, so
/// `Z ⊗ I ⊗ … ⊗ I` acts on qubit 0.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    n: usize,
    amps: Vec<C64>,
}

impl StateVector {
    pub fn new_zero(n: usize) -> Self {
        let mut amps = vec![C64::new(0.0, 0.0); 1 << n];
        amps[0] = C64::new(1.0, 0.0);
        Self { n, amps }
    }

    /// Kronecker product `f_0 ⊗ f_1 ⊗ … ⊗ f_{n-1}`.
    pub fn from_product(factors: &[[C64; 2]]) -> Self {
        let mut amps = vec![C64::new(1.0, 0.0)];
        for f in factors {
            let mut next = Vec::with_capacity(amps.len() * 2);
            for a in &amps {
                next.push(a * f[0]);
                next.push(a * f[1]);
            }
            amps = next;
        }
        Self {
            n: factors.len(),
            amps,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.n
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amps
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    #[inline]
    fn mask(&self, q: usize) -> usize {
        assert!(q < self.n, "qubit {} out of range for {} qubits", q, self.n);
        1 << (self.n - 1 - q)
    }

    pub fn apply_1q(&mut self, q: usize, u: [[C64; 2]; 2]) {
        let m = self.mask(q);
        for i in 0..self.amps.len() {
            if i & m != 0 {
                continue;
            }
            let a0 = self.amps[i];
            let a1 = self.amps[i | m];
            self.amps[i] = u[0][0] * a0 + u[0][1] * a1;
            self.amps[i | m] = u[1][0] * a0 + u[1][1] * a1;
        }
    }

    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        assert!(control != target, "CNOT control and target coincide");
        let c = self.mask(control);
        let t = self.mask(target);
        for i in 0..self.amps.len() {
            if i & c != 0 && i & t == 0 {
                self.amps.swap(i, i | t);
            }
        }
    }

    /// ⟨Z_q⟩, normalized by the state norm.
    pub fn expect_z(&self, q: usize) -> f64 {
        let m = self.mask(q);
        let mut w0 = 0.0;
        let mut w1 = 0.0;
        for (i, a) in self.amps.iter().enumerate() {
            if i & m == 0 {
                w0 += a.norm_sqr();
            } else {
                w1 += a.norm_sqr();
            }
        }

        let denom = w0 + w1;
        if denom == 0.0 {
            return 0.0;
        }
        (w0 - w1) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::ry;

    #[test]
    fn cnot_flips_target_when_control_set() {
        let one = [C64::new(0.0, 0.0), C64::new(1.0, 0.0)];
        let zero = [C64::new(1.0, 0.0), C64::new(0.0, 0.0)];
        let mut psi = StateVector::from_product(&[one, zero, zero]);

        psi.apply_cnot(0, 2);
        // |101>
        assert!((psi.amplitudes()[5].re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ry_pi_moves_z_to_minus_one() {
        let mut psi = StateVector::new_zero(2);
        assert!((psi.expect_z(0) - 1.0).abs() < 1e-12);

        psi.apply_1q(0, ry(std::f64::consts::PI));
        assert!((psi.expect_z(0) + 1.0).abs() < 1e-12);
        assert!((psi.expect_z(1) - 1.0).abs() < 1e-12);
    }
}
