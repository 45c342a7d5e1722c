mod cut;
mod estimator;
mod frequency;
mod path;

pub use cut::Cut;
pub use estimator::{
    edge_frequencies, estimate, estimate_with_rng, CutConfig, Estimate, DEFAULT_TOP_K,
    DEFAULT_TRIALS,
};
pub use frequency::{Edge, EdgeFrequencies};
pub use path::Path;
