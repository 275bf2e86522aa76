use rng::ONDRng;

use crate::error::{ClassifierError, Result};

/// Radius of the decision circle.
pub const RADIUS: f64 = 0.7;

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub train_x: Vec<Vec<f64>>,
    pub train_y: Vec<f64>,
    pub test_x: Vec<Vec<f64>>,
    pub test_y: Vec<f64>,
}

/// Points drawn uniformly from `[-1, 1]^2`. Points inside the circle of
/// radius `0.7 - gap/2` get label 0, points outside `0.7 + gap/2` get label 1,
/// and points in the band between are redrawn.
pub fn circle_data_point_generator(
    n_train: usize,
    n_test: usize,
    boundary_gap: f64,
    seed_data: u64,
) -> Result<Dataset> {
    let inner = RADIUS - boundary_gap / 2.0;
    let outer = RADIUS + boundary_gap / 2.0;
    if boundary_gap.is_nan() || boundary_gap < 0.0 || inner <= 0.0 || outer >= std::f64::consts::SQRT_2 {
        return Err(ClassifierError::InvalidGap(boundary_gap));
    }

    let mut rng = ONDRng::from_u64(seed_data, "circle-data");
    let total = n_train + n_test;
    let mut xs = Vec::with_capacity(total);
    let mut ys = Vec::with_capacity(total);

    while xs.len() < total {
        let p = vec![rng.uniform(b"X0", -1.0, 1.0), rng.uniform(b"X1", -1.0, 1.0)];
        let r = p[0].hypot(p[1]);
        if r < inner {
            xs.push(p);
            ys.push(0.0);
        } else if r > outer {
            xs.push(p);
            ys.push(1.0);
        }
    }

    let test_x = xs.split_off(n_train);
    let test_y = ys.split_off(n_train);
    Ok(Dataset {
        train_x: xs,
        train_y: ys,
        test_x,
        test_y,
    })
}
