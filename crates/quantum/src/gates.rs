use num_complex::Complex64;

pub type C64 = Complex64;

/// diag(e^{-iθ/2}, e^{iθ/2})
pub fn rz(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    let z = C64::new(0.0, 0.0);
    [[C64::new(c, -s), z], [z, C64::new(c, s)]]
}

pub fn ry(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(-s, 0.0)],
        [C64::new(s, 0.0), C64::new(c, 0.0)],
    ]
}

/// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
pub fn cnot() -> [[C64; 4]; 4] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, o, z, z],
        [z, z, z, o],
        [z, z, o, z],
    ]
}

/// CNOT controlled by the second qubit: |01>→|11>, |11>→|01>
pub fn cnot_reversed() -> [[C64; 4]; 4] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, z, z, o],
        [z, z, o, z],
        [z, o, z, z],
    ]
}

pub fn swap() -> [[C64; 4]; 4] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, z, o, z],
        [z, o, z, z],
        [z, z, z, o],
    ]
}
