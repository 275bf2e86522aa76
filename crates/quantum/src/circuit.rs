use std::fmt;

use crate::error::{QuantumError, Result};

/// A gate in the ansatz. Rotations carry the index of their parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Rz { qubit: usize, param: usize },
    Ry { qubit: usize, param: usize },
    Cnot { control: usize, target: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    n: usize,
    depth: usize,
    ops: Vec<Op>,
    num_params: usize,
}

impl Circuit {
    /// General rotation layer `Rz·Ry·Rz` on every qubit, then `depth` layers
    /// of a CNOT ring followed by `Ry` on every qubit.
    pub fn classifier_ansatz(n: usize, depth: usize) -> Result<Self> {
        if n < 2 {
            return Err(QuantumError::TooFewQubits(n));
        }

        let mut c = Self {
            n,
            depth,
            ops: Vec::with_capacity(3 * n + depth * 2 * n),
            num_params: 0,
        };

        for q in 0..n {
            c.rz(q);
            c.ry(q);
            c.rz(q);
        }

        for _ in 0..depth {
            for q in 0..n - 1 {
                c.cnot(q, q + 1);
            }
            c.cnot(n - 1, 0);
            for q in 0..n {
                c.ry(q);
            }
        }

        Ok(c)
    }

    fn rz(&mut self, qubit: usize) {
        let param = self.next_param();
        self.ops.push(Op::Rz { qubit, param });
    }

    fn ry(&mut self, qubit: usize) {
        let param = self.next_param();
        self.ops.push(Op::Ry { qubit, param });
    }

    fn cnot(&mut self, control: usize, target: usize) {
        self.ops.push(Op::Cnot { control, target });
    }

    fn next_param(&mut self) -> usize {
        self.num_params += 1;
        self.num_params - 1
    }

    pub fn num_qubits(&self) -> usize {
        self.n
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn num_params(&self) -> usize {
        self.num_params
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn check_params(&self, params: &[f64]) -> Result<()> {
        if params.len() != self.num_params {
            return Err(QuantumError::ParamCount {
                expected: self.num_params,
                actual: params.len(),
            });
        }
        Ok(())
    }

    /// Render with bound parameter values.
    pub fn display_with<'a>(&'a self, params: &'a [f64]) -> BoundCircuit<'a> {
        BoundCircuit {
            circuit: self,
            params: Some(params),
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = BoundCircuit {
            circuit: self,
            params: None,
        };
        fmt::Display::fmt(&bound, f)
    }
}

pub struct BoundCircuit<'a> {
    circuit: &'a Circuit,
    params: Option<&'a [f64]>,
}

impl fmt::Display for BoundCircuit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.circuit;
        writeln!(
            f,
            "Circuit(qubits={}, depth={}, params={})",
            c.n, c.depth, c.num_params
        )?;

        let angle = |p: usize| match self.params.and_then(|ps| ps.get(p)) {
            Some(v) => format!("{:.4}", v),
            None => format!("θ{}", p),
        };

        for op in &c.ops {
            match *op {
                Op::Rz { qubit, param } => writeln!(f, "  rz q{} ({})", qubit, angle(param))?,
                Op::Ry { qubit, param } => writeln!(f, "  ry q{} ({})", qubit, angle(param))?,
                Op::Cnot { control, target } => writeln!(f, "  cnot q{} -> q{}", control, target)?,
            }
        }
        Ok(())
    }
}
