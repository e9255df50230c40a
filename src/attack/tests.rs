//! Tests for the saliency map attack controller.

#![allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use crate::attack::{Attack, SaliencyMapMethod};
    use crate::classifier::{Classifier, SoftmaxRegression};
    use crate::config::SaliencyMapConfig;
    use crate::error::{AttackError, ClassifierError};
    use crate::targets::{argmax_rows, to_categorical};
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, Array2, ArrayD, IxDyn};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    // -------------------------------------------------------------------------
    // Test classifiers
    // -------------------------------------------------------------------------

    /// Predicts class 1 once the feature sum exceeds `threshold`, class 0
    /// otherwise. Returns the same gradient for every sample and records the
    /// batch size of every call.
    #[derive(Debug)]
    struct ThresholdClassifier {
        gradient: Vec<f32>,
        threshold: f32,
        clip: (f32, f32),
        predict_calls: RefCell<Vec<usize>>,
        gradient_calls: RefCell<Vec<usize>>,
    }

    impl ThresholdClassifier {
        fn new(gradient: &[f32], threshold: f32) -> Self {
            Self {
                gradient: gradient.to_vec(),
                threshold,
                clip: (0.0, 1.0),
                predict_calls: RefCell::new(Vec::new()),
                gradient_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Classifier for ThresholdClassifier {
        fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
            let n = x.shape()[0];
            self.predict_calls.borrow_mut().push(n);
            let mut scores = Array2::zeros((n, 2));
            for (i, sample) in x.outer_iter().enumerate() {
                let class = usize::from(sample.sum() > self.threshold);
                scores[[i, class]] = 1.0;
            }
            Ok(scores)
        }

        fn class_gradient(
            &self,
            x: &ArrayD<f32>,
            labels: &[usize],
        ) -> Result<ArrayD<f32>, ClassifierError> {
            let n = x.shape()[0];
            assert_eq!(labels.len(), n);
            self.gradient_calls.borrow_mut().push(n);
            let f = self.gradient.len();
            let grads = Array2::from_shape_fn((n, f), |(_, j)| self.gradient[j]);
            Ok(grads.into_shape_with_order(x.raw_dim()).unwrap())
        }

        fn clip_values(&self) -> (f32, f32) {
            self.clip
        }

        fn nb_classes(&self) -> usize {
            2
        }
    }

    /// Fails every gradient request.
    #[derive(Debug)]
    struct BrokenGradient;

    impl Classifier for BrokenGradient {
        fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
            let mut scores = Array2::zeros((x.shape()[0], 3));
            scores.column_mut(0).fill(1.0);
            Ok(scores)
        }

        fn class_gradient(
            &self,
            _x: &ArrayD<f32>,
            _labels: &[usize],
        ) -> Result<ArrayD<f32>, ClassifierError> {
            Err(ClassifierError::Backend("out of memory".into()))
        }

        fn clip_values(&self) -> (f32, f32) {
            (0.0, 1.0)
        }

        fn nb_classes(&self) -> usize {
            3
        }
    }

    /// Returns a score matrix with too few columns.
    #[derive(Debug)]
    struct NarrowScores;

    impl Classifier for NarrowScores {
        fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
            Ok(Array2::zeros((x.shape()[0], 1)))
        }

        fn class_gradient(
            &self,
            x: &ArrayD<f32>,
            _labels: &[usize],
        ) -> Result<ArrayD<f32>, ClassifierError> {
            Ok(ArrayD::zeros(x.raw_dim()))
        }

        fn clip_values(&self) -> (f32, f32) {
            (0.0, 1.0)
        }

        fn nb_classes(&self) -> usize {
            2
        }
    }

    /// Class c is driven by features 2c and 2c+1.
    fn block_model() -> SoftmaxRegression {
        let mut w = Array2::zeros((6, 3));
        for c in 0..3 {
            w[[2 * c, c]] = 2.0;
            w[[2 * c + 1, c]] = 2.0;
        }
        SoftmaxRegression::new(w, arr1(&[0.0, 0.0, 0.0])).unwrap()
    }

    fn inputs(rows: &[&[f32]]) -> ArrayD<f32> {
        let f = rows[0].len();
        let flat: Vec<f32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        ArrayD::from_shape_vec(IxDyn(&[rows.len(), f]), flat).unwrap()
    }

    fn config(theta: f32, gamma: f32) -> SaliencyMapConfig {
        SaliencyMapConfig::new().with_theta(theta).with_gamma(gamma)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    // -------------------------------------------------------------------------
    // Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_iteration_perturbs_top_two() {
        let clf = ThresholdClassifier::new(&[4.0, 3.0, 2.0, 1.0], 0.0);
        let attack = SaliencyMapMethod::new(&clf, config(0.3, 1.0)).unwrap();
        let x = inputs(&[&[0.0, 0.0, 0.0, 0.0]]);
        let y = to_categorical(&[1], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert_abs_diff_eq!(x_adv[[0, 0]], 0.3, epsilon = 1e-6);
        assert_abs_diff_eq!(x_adv[[0, 1]], 0.3, epsilon = 1e-6);
        assert_eq!(x_adv[[0, 2]], 0.0);
        assert_eq!(x_adv[[0, 3]], 0.0);
        assert_eq!(report.iterations, vec![1]);
        assert_eq!(report.perturbed_fraction, vec![0.5]);
        assert_eq!(report.adversarial_predictions, vec![1]);
        assert_eq!(report.n_on_target(), 1);
    }

    #[test]
    fn test_budget_exit_regardless_of_prediction() {
        let clf = ThresholdClassifier::new(&[4.0, 3.0, 2.0, 1.0], 100.0);
        let attack = SaliencyMapMethod::new(&clf, config(0.3, 0.25)).unwrap();
        let x = inputs(&[&[0.0, 0.0, 0.0, 0.0]]);
        let y = to_categorical(&[1], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert_eq!(report.iterations, vec![1]);
        assert_eq!(report.perturbed_fraction, vec![0.5]);
        assert_eq!(report.adversarial_predictions, vec![0]);
        assert_eq!(report.n_success(), 0);
        assert_abs_diff_eq!(x_adv[[0, 1]], 0.3, epsilon = 1e-6);
        assert_eq!(clf.gradient_calls.borrow().as_slice(), &[1]);
    }

    #[test]
    fn test_saturated_input_never_enters_loop() {
        let clf = ThresholdClassifier::new(&[1.0, 1.0, 1.0], 100.0);
        let attack = SaliencyMapMethod::new(&clf, config(0.2, 1.0)).unwrap();
        let x = inputs(&[&[1.0, 1.0, 1.0]]);
        let y = to_categorical(&[1], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert_eq!(x_adv, x);
        assert_eq!(report.iterations, vec![0]);
        assert!(clf.gradient_calls.borrow().is_empty());
    }

    #[test]
    fn test_runs_until_search_space_exhausted() {
        let clf = ThresholdClassifier::new(&[4.0, 3.0, 2.0, 1.0], 100.0);
        let attack = SaliencyMapMethod::new(&clf, config(0.3, 1.0)).unwrap();
        let x = inputs(&[&[0.0, 0.0, 0.0, 0.0]]);
        let y = to_categorical(&[1], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        // 0 -> 0.3 -> 0.6 -> 0.9 -> 1.0 for each pair
        assert!(x_adv.iter().all(|&v| v == 1.0));
        assert_eq!(report.iterations, vec![8]);
        assert_eq!(report.perturbed_fraction, vec![1.0]);
    }

    #[test]
    fn test_negative_theta_pushes_down_lowest_gradients() {
        let clf = ThresholdClassifier::new(&[1.0, 2.0, 3.0, 4.0], 3.5);
        let attack = SaliencyMapMethod::new(&clf, config(-0.4, 1.0)).unwrap();
        let x = inputs(&[&[1.0, 1.0, 1.0, 1.0]]);
        // sum 4.0 > 3.5 predicts class 1; ask for class 0
        let y = to_categorical(&[0], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert_abs_diff_eq!(x_adv[[0, 0]], 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(x_adv[[0, 1]], 0.6, epsilon = 1e-6);
        assert_eq!(x_adv[[0, 2]], 1.0);
        assert_eq!(x_adv[[0, 3]], 1.0);
        assert_eq!(report.adversarial_predictions, vec![0]);
    }

    #[test]
    fn test_negative_theta_clamps_at_clip_min() {
        let clf = ThresholdClassifier::new(&[1.0, 2.0], -1.0);
        let attack = SaliencyMapMethod::new(&clf, config(-0.7, 1.0)).unwrap();
        let x = inputs(&[&[0.5, 0.9]]);
        let y = to_categorical(&[0], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        // never reaches class 0, stops once both features hit clip_min
        assert_eq!(x_adv[[0, 0]], 0.0);
        assert_eq!(x_adv[[0, 1]], 0.0);
        assert_eq!(report.iterations, vec![2]);
    }

    // -------------------------------------------------------------------------
    // Batch state handling
    // -------------------------------------------------------------------------

    #[test]
    fn test_non_contiguous_active_rows_are_updated() {
        let clf = ThresholdClassifier::new(&[4.0, 3.0, 2.0, 1.0], 0.5);
        let attack = SaliencyMapMethod::new(&clf, config(0.3, 1.0)).unwrap();
        let x = inputs(&[
            &[0.0, 0.0, 0.0, 0.0],
            &[0.4, 0.4, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0],
        ]);
        // sample 1 is already predicted as its target
        let y = to_categorical(&[1, 1, 1], 2).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        for row in [0, 2] {
            assert_abs_diff_eq!(x_adv[[row, 0]], 0.3, epsilon = 1e-6);
            assert_abs_diff_eq!(x_adv[[row, 1]], 0.3, epsilon = 1e-6);
            assert_eq!(x_adv[[row, 2]], 0.0);
        }
        assert_eq!(x_adv.index_axis(ndarray::Axis(0), 1), x.index_axis(ndarray::Axis(0), 1));
        assert_eq!(report.iterations, vec![1, 0, 1]);
        assert_eq!(clf.gradient_calls.borrow().as_slice(), &[2]);
        assert_eq!(clf.predict_calls.borrow().as_slice(), &[3, 2]);
    }

    #[test]
    fn test_only_unfinished_samples_are_queried() {
        // sample 0 flips after one step, sample 1 needs two
        let clf = ThresholdClassifier::new(&[4.0, 3.0, 2.0, 1.0], 0.7);
        let attack = SaliencyMapMethod::new(&clf, config(0.3, 1.0)).unwrap();
        let x = inputs(&[&[0.2, 0.0, 0.0, 0.0], &[0.0, 0.0, 0.0, 0.0]]);
        let y = to_categorical(&[1, 1], 2).unwrap();

        let (_, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert_eq!(report.iterations, vec![1, 2]);
        assert_eq!(clf.gradient_calls.borrow().as_slice(), &[2, 1]);
    }

    #[test]
    fn test_batches_are_independent() {
        let model = block_model();
        let x = inputs(&[
            &[0.8, 0.8, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.7, 0.9, 0.0, 0.0],
            &[0.1, 0.0, 0.0, 0.0, 0.6, 0.6],
            &[0.3, 0.2, 0.1, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.9],
        ]);
        let run = |batch_size: usize| {
            let attack =
                SaliencyMapMethod::new(&model, config(0.5, 1.0).with_batch_size(batch_size))
                    .unwrap();
            attack.generate(&x, None, &mut rng()).unwrap()
        };
        let whole = run(128);
        assert_eq!(run(2), whole);
        assert_eq!(run(1), whole);
    }

    #[test]
    fn test_batched_calls_respect_batch_size() {
        let clf = ThresholdClassifier::new(&[1.0, 0.5], 100.0);
        let attack =
            SaliencyMapMethod::new(&clf, config(1.0, 1.0).with_batch_size(2)).unwrap();
        let x = inputs(&[&[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0]]);
        let y = to_categorical(&[1; 5], 2).unwrap();

        let (x_adv, _) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert!(x_adv.iter().all(|&v| v == 1.0));
        assert_eq!(clf.gradient_calls.borrow().as_slice(), &[2, 2, 1]);
    }

    // -------------------------------------------------------------------------
    // Softmax regression end to end
    // -------------------------------------------------------------------------

    #[test]
    fn test_flips_softmax_regression_to_target() {
        let model = block_model();
        let attack = SaliencyMapMethod::new(&model, config(0.5, 1.0)).unwrap();
        let x = inputs(&[&[0.8, 0.8, 0.0, 0.0, 0.0, 0.0]]);
        let y = to_categorical(&[2], 3).unwrap();

        let (x_adv, report) = attack.generate_with_report(&x, Some(&y), &mut rng()).unwrap();

        assert_eq!(report.original_predictions, vec![0]);
        assert_eq!(report.adversarial_predictions, vec![2]);
        assert_eq!(report.iterations, vec![2]);
        assert_eq!(x_adv[[0, 4]], 1.0);
        assert_eq!(x_adv[[0, 5]], 1.0);
        assert_eq!(x_adv[[0, 0]], 0.8);
        assert_eq!(report.success_rate(), 1.0);
    }

    #[test]
    fn test_report_matches_recomputed_predictions() {
        let model = block_model();
        let attack = SaliencyMapMethod::new(&model, config(0.4, 0.7)).unwrap();
        let x = inputs(&[
            &[0.75, 0.8, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.1, 0.9, 0.9, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.2, 0.5, 0.5],
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        ]);

        let (x_adv, report) = attack.generate_with_report(&x, None, &mut rng()).unwrap();

        let before = argmax_rows(model.predict(&x).unwrap().view());
        let after = argmax_rows(model.predict(&x_adv).unwrap().view());
        assert_eq!(report.original_predictions, before);
        assert_eq!(report.adversarial_predictions, after);
        let changed = before.iter().zip(&after).filter(|(b, a)| b != a).count();
        assert_eq!(report.n_success(), changed);
        for (t, p) in report.targets.iter().zip(&before) {
            assert_ne!(t, p);
        }
    }

    #[test]
    fn test_preserves_multi_dim_shape_and_bounds() {
        let model = SoftmaxRegression::new(
            Array2::from_shape_fn((8, 4), |(i, j)| ((i * 3 + j * 5) % 7) as f32 / 7.0 - 0.4),
            arr1(&[0.0, 0.1, -0.1, 0.05]),
        )
        .unwrap();
        let attack = SaliencyMapMethod::new(&model, config(0.25, 0.5)).unwrap();
        let x = ArrayD::from_shape_fn(IxDyn(&[3, 2, 4]), |idx| {
            ((idx[0] + idx[1] * 2 + idx[2]) % 5) as f32 / 4.0
        });

        let x_adv = attack.generate(&x, None, &mut rng()).unwrap();

        assert_eq!(x_adv.shape(), x.shape());
        assert!(x_adv.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let model = block_model();
        let attack = SaliencyMapMethod::new(&model, config(0.3, 1.0)).unwrap();
        let x = inputs(&[
            &[0.5, 0.5, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.5, 0.5, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.5, 0.5],
        ]);
        let a = attack.generate_with_report(&x, None, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = attack.generate_with_report(&x, None, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_batch() {
        let model = block_model();
        let attack = SaliencyMapMethod::new(&model, SaliencyMapConfig::default()).unwrap();
        let x = ArrayD::<f32>::zeros(IxDyn(&[0, 6]));
        let (x_adv, report) = attack.generate_with_report(&x, None, &mut rng()).unwrap();
        assert_eq!(x_adv.shape(), &[0, 6]);
        assert_eq!(report.n_samples(), 0);
        assert_eq!(report.success_rate(), 0.0);
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    #[test]
    fn test_invalid_config_rejected_before_any_call() {
        let clf = ThresholdClassifier::new(&[1.0], 0.0);
        let err = SaliencyMapMethod::new(&clf, config(0.1, 0.0)).unwrap_err();
        assert!(matches!(err, AttackError::InvalidConfig { field: "gamma", .. }));
        let err = SaliencyMapMethod::new(&clf, config(0.1, 1.0).with_batch_size(0)).unwrap_err();
        assert!(matches!(err, AttackError::InvalidConfig { field: "batch_size", .. }));
        assert!(clf.predict_calls.borrow().is_empty());
    }

    #[test]
    fn test_set_params_keeps_previous_on_error() {
        let model = block_model();
        let mut attack = SaliencyMapMethod::new(&model, config(0.2, 0.5)).unwrap();
        assert!(attack.set_params(config(0.2, 2.0)).is_err());
        assert_eq!(attack.config().gamma, 0.5);
        attack.set_params(config(-0.1, 0.3)).unwrap();
        assert_eq!(attack.config().theta, -0.1);
        assert_eq!(attack.config().gamma, 0.3);
    }

    #[test]
    fn test_gradient_failure_propagates() {
        let attack = SaliencyMapMethod::new(BrokenGradient, config(0.1, 1.0)).unwrap();
        let x = inputs(&[&[0.0, 0.0]]);
        let err = attack.generate(&x, None, &mut rng()).unwrap_err();
        assert!(matches!(err, AttackError::Classifier(ClassifierError::Backend(_))));
    }

    #[test]
    fn test_target_shape_checked() {
        let model = block_model();
        let attack = SaliencyMapMethod::new(&model, SaliencyMapConfig::default()).unwrap();
        let x = inputs(&[&[0.0; 6], &[0.0; 6]]);
        let y = to_categorical(&[1], 3).unwrap();
        let err = attack.generate(&x, Some(&y), &mut rng()).unwrap_err();
        assert!(matches!(err, AttackError::ShapeMismatch { what: "targets", .. }));
    }

    #[test]
    fn test_score_shape_checked() {
        let attack = SaliencyMapMethod::new(NarrowScores, SaliencyMapConfig::default()).unwrap();
        let x = inputs(&[&[0.0, 0.0]]);
        let err = attack.generate(&x, None, &mut rng()).unwrap_err();
        assert!(matches!(err, AttackError::ShapeMismatch { what: "class scores", .. }));
    }

    #[test]
    fn test_inverted_clip_values_rejected() {
        let mut clf = ThresholdClassifier::new(&[1.0, 1.0], 0.0);
        clf.clip = (1.0, 0.0);
        let attack = SaliencyMapMethod::new(&clf, SaliencyMapConfig::default()).unwrap();
        let x = inputs(&[&[0.5, 0.5]]);
        let err = attack.generate(&x, None, &mut rng()).unwrap_err();
        assert!(matches!(err, AttackError::InvalidConfig { field: "clip_values", .. }));
    }

    #[test]
    fn test_unbounded_clip_values_rejected() {
        let mut clf = ThresholdClassifier::new(&[1.0, 1.0], 10.0);
        clf.clip = (0.0, f32::INFINITY);
        let attack = SaliencyMapMethod::new(&clf, config(0.1, 1.0)).unwrap();
        let x = inputs(&[&[0.5, 0.5]]);
        let err = attack.generate(&x, None, &mut rng()).unwrap_err();
        assert!(matches!(err, AttackError::InvalidConfig { field: "clip_values", .. }));
        assert!(clf.gradient_calls.borrow().is_empty());
    }

    // -------------------------------------------------------------------------
    // Termination
    // -------------------------------------------------------------------------

    #[test]
    fn test_step_below_float_spacing_terminates() {
        // never reaches class 1, and 0.5 + 1e-8 rounds back to 0.5
        let clf = ThresholdClassifier::new(&[1.0, 1.0], 10.0);
        let attack = SaliencyMapMethod::new(&clf, config(1e-8, 1.0)).unwrap();
        let x = inputs(&[&[0.5, 0.5]]);
        let (x_adv, report) = attack.generate_with_report(&x, None, &mut rng()).unwrap();
        assert_eq!(x_adv, x);
        assert_eq!(report.iterations, vec![1]);
        assert_eq!(report.adversarial_predictions, vec![0]);
        assert_eq!(*clf.gradient_calls.borrow(), vec![1]);
    }

    #[test]
    fn test_negative_step_below_float_spacing_terminates() {
        let clf = ThresholdClassifier::new(&[1.0, 1.0, 1.0], 10.0);
        let attack = SaliencyMapMethod::new(&clf, config(-1e-9, 1.0)).unwrap();
        let x = inputs(&[&[0.75, 0.5, 0.25]]);
        let (x_adv, report) = attack.generate_with_report(&x, None, &mut rng()).unwrap();
        assert_eq!(x_adv, x);
        assert_eq!(report.iterations, vec![2]);
    }

    // -------------------------------------------------------------------------
    // Logging
    // -------------------------------------------------------------------------

    /// Collects formatted `tracing` output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured_run(level: tracing::Level) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(level)
            .with_ansi(false)
            .without_time()
            .finish();

        let model = block_model();
        let attack = SaliencyMapMethod::new(&model, config(0.5, 1.0)).unwrap();
        // first sample is pushed to class 2, second already predicts its target
        let x = inputs(&[&[0.8, 0.8, 0.0, 0.0, 0.0, 0.0], &[0.8, 0.8, 0.0, 0.0, 0.0, 0.0]]);
        let y = to_categorical(&[2, 0], 3).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            attack.generate(&x, Some(&y), &mut rng()).unwrap();
        });
        buffer.contents()
    }

    #[test]
    fn test_success_rate_is_logged() {
        let logs = captured_run(tracing::Level::INFO);
        assert!(logs.contains("Success rate of JSMA attack: 50.00%"), "{logs}");
        assert!(logs.contains("on_target=1"), "{logs}");
        assert!(logs.contains("off_target=0"), "{logs}");
        assert!(!logs.contains("JSMA batch complete"), "{logs}");
    }

    #[test]
    fn test_logged_output_is_reproducible() {
        let first = captured_run(tracing::Level::DEBUG);
        assert!(first.contains("JSMA batch complete"), "{first}");
        assert_eq!(first, captured_run(tracing::Level::DEBUG));
    }
}
