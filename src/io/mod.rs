//! Model and tensor files for the command-line tool.
//!
//! Tensors are stored as `{"shape": [...], "data": [...]}` in row-major
//! order. Models are softmax regressions:
//! `{"weights": [[...], ...], "bias": [...], "clip_values": [0.0, 1.0]}`.

mod load;
mod model;
mod save;

pub use load::{load_model, load_targets, load_tensor, read_file};
pub use model::{ModelFile, TensorFile};
pub use save::{save_tensor, tensor_to_json};
