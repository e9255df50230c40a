//! Entrenar JSMA: Jacobian-based Saliency Map Attack
//!
//! Crafts targeted adversarial examples by repeatedly pushing the two input
//! features whose gradient most increases the target-class score, until the
//! classifier predicts the target, the perturbation budget is spent, or no
//! feature can move any further (Papernot et al., 2016).
//!
//! # Toyota Way: Jidoka
//!
//! Invalid parameters stop the attack before the first classifier call.
//! Every sample carries its own stop condition, so a batch never runs past
//! the point where all of its samples are settled.
//!
//! # Example
//!
//! ```
//! use entrenar_jsma::{Attack, SaliencyMapConfig, SaliencyMapMethod, SoftmaxRegression};
//! use ndarray::{arr1, arr2, ArrayD, IxDyn};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let model = SoftmaxRegression::new(
//!     arr2(&[[2.0, 0.0], [2.0, 0.0], [0.0, 2.0], [0.0, 2.0]]),
//!     arr1(&[0.0, 0.0]),
//! )
//! .unwrap();
//! let config = SaliencyMapConfig::new().with_theta(0.5).with_gamma(1.0);
//! let attack = SaliencyMapMethod::new(&model, config).unwrap();
//!
//! let x = ArrayD::from_shape_vec(IxDyn(&[1, 4]), vec![0.8, 0.8, 0.0, 0.0]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let (x_adv, report) = attack.generate_with_report(&x, None, &mut rng).unwrap();
//!
//! assert_eq!(x_adv.shape(), x.shape());
//! assert_eq!(report.success_rate(), 1.0);
//! ```
//!
//! # References
//!
//! \[1\] Papernot et al. (2016) - The Limitations of Deep Learning in Adversarial Settings

pub mod attack;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod targets;

pub use attack::{Attack, AttackReport, Direction, SaliencyMapMethod, SampleState};
pub use classifier::{Classifier, SoftmaxRegression};
pub use config::{AttackSpec, SaliencyMapConfig};
pub use error::{AttackError, ClassifierError, Result};
pub use targets::{argmax_rows, random_targets, to_categorical};
