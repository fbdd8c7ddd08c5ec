use rand::prelude::*;
use rand_distr::Normal;

use mhboost::prelude::*;
use std::ops::ControlFlow;


/// Four overlapping Gaussian classes in three dimensions,
/// 25 instances each.
fn sample() -> Sample {
    let centers = [
        ("x", [0.0, 0.0, 0.0]),
        ("y", [1.0, 0.5, -0.5]),
        ("z", [-0.5, 1.0, 0.5]),
        ("w", [0.5, -1.0, 1.0]),
    ];
    let noise = Normal::new(0.0, 0.6).unwrap();
    let mut rng = StdRng::seed_from_u64(31);

    let mut rows = Vec::with_capacity(100);
    let mut labels = Vec::with_capacity(100);
    for (name, center) in centers {
        for _ in 0..25 {
            let x = center.iter()
                .map(|c| c + noise.sample(&mut rng))
                .collect::<Vec<f64>>();
            rows.push(x);
            labels.push(name);
        }
    }
    Sample::from_rows(&rows, &labels).unwrap()
}


/// Reproducibility of training.
#[cfg(test)]
pub mod determinism_tests {
    use super::*;

    #[test]
    fn same_input_same_model() {
        let sample = sample();
        let params = Params { iterations: 15, product_size: 3, ..Params::default() };

        let f = mhboost::train(&sample, &params).unwrap();
        let g = mhboost::train(&sample, &params).unwrap();
        assert_eq!(f, g);

        let f = serde_json::to_string(&f).unwrap();
        let g = serde_json::to_string(&g).unwrap();
        assert_eq!(f, g);
    }

    #[test]
    fn run_equals_manual_stepping() {
        let sample = sample();

        let mut booster = AdaBoostMH::init(&sample)
            .iterations(12)
            .product_size(2);
        let wl = booster.default_weak_learner();
        let f = booster.run(&wl).unwrap();

        let mut booster = AdaBoostMH::init(&sample)
            .iterations(12)
            .product_size(2);
        let wl = booster.default_weak_learner();
        booster.preprocess().unwrap();
        let mut iteration = 1;
        while let ControlFlow::Continue(()) = booster.boost(&wl, iteration) {
            iteration += 1;
        }
        let g = booster.postprocess();

        assert_eq!(f, g);
        assert_eq!(
            serde_json::to_string(&f).unwrap(),
            serde_json::to_string(&g).unwrap(),
        );
    }

    #[test]
    fn interrupted_training_is_a_valid_model() {
        let sample = sample();
        let mut booster = AdaBoostMH::init(&sample)
            .iterations(10)
            .product_size(2);
        let wl = booster.default_weak_learner();
        booster.preprocess().unwrap();
        for iteration in 1..=4 {
            assert!(booster.boost(&wl, iteration).is_continue());
        }
        let f = booster.current_hypothesis();
        assert_eq!(f.len(), 4);
        assert_eq!(booster.n_hypotheses(), 4);

        let (x, _) = sample.at(0);
        let p = f.distribution(&x).unwrap();
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
