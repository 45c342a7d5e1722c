use std::collections::HashSet;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::cuts::cut::Cut;
use crate::cuts::frequency::{Edge, EdgeFrequencies};
use crate::cuts::path::Path;
use crate::error::CutError;
use crate::wiring::{Node, Wiring, WiringGraph};

pub const DEFAULT_TRIALS: usize = 200;

/// Directed entries removed by default: three wires, each counted both ways.
pub const DEFAULT_TOP_K: usize = 6;

/// Trials sampled between two checks of the stop predicate.
const CHECK_INTERVAL: usize = 25;

/// The partition is measured from the first component in input order.
const START_NODE: Node = 0;

/// Tuning for [`estimate`].
///
/// The heuristic assumes the wiring splits along a small cut of exactly
/// `top_k / 2` wires. Nothing checks that assumption; a wrong guess shows up as
/// [`CutError::NoCutFound`] or as a lopsided split.
#[derive(Clone, Debug, PartialEq)]
pub struct CutConfig {
    /// Distinct node pairs to explore. Capped at the number of pairs the graph has.
    pub trials: usize,
    /// Directed entries to remove, i.e. twice the expected cut size.
    pub top_k: usize,
    /// Seed for the pair sampler. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Explore each batch of pairs on the rayon pool.
    pub parallel: bool,
    /// Stop before `trials` once the selected wires outnumber the rest by this ratio.
    pub separation: Option<f64>,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            top_k: DEFAULT_TOP_K,
            seed: None,
            parallel: false,
            separation: None,
        }
    }
}

impl CutConfig {
    /// Number of undirected wires the cut is expected to have.
    pub fn cut_edges(&self) -> usize {
        self.top_k / 2
    }

    pub fn validate(&self) -> Result<(), CutError> {
        if self.trials == 0 {
            return Err(CutError::InvalidConfig("trials must be positive".into()));
        }
        if self.top_k == 0 || self.top_k % 2 != 0 {
            return Err(CutError::InvalidConfig(format!(
                "top_k counts both directions of each wire and must be a positive even number, got {}",
                self.top_k
            )));
        }
        if let Some(ratio) = self.separation {
            if !ratio.is_finite() || ratio < 1.0 {
                return Err(CutError::InvalidConfig(format!(
                    "separation must be a finite ratio of at least 1, got {}",
                    ratio
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Estimate {
    pub cut: Cut,
    /// Node pairs actually explored.
    pub trials_run: usize,
    pub frequencies: EdgeFrequencies,
}

impl Estimate {
    pub fn product(&self) -> usize {
        self.cut.product()
    }
}

/// Split the wiring into two groups along an approximate minimum cut.
///
/// Seeds a [`StdRng`] from `config.seed`, or from entropy when unset.
pub fn estimate(wiring: &Wiring, config: &CutConfig) -> Result<Estimate, CutError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    estimate_with_rng(wiring, config, &mut rng)
}

/// Like [`estimate`], drawing node pairs from `rng` and ignoring `config.seed`.
pub fn estimate_with_rng<R>(
    wiring: &Wiring,
    config: &CutConfig,
    rng: &mut R,
) -> Result<Estimate, CutError>
where
    R: Rng,
{
    config.validate()?;

    let (frequencies, trials_run) = edge_frequencies(wiring, config, rng);
    let cut_set = frequencies.top(config.cut_edges());
    if cut_set.len() < config.cut_edges() {
        warn!(
            "only {} distinct wires seen, expected a cut of {}",
            cut_set.len(),
            config.cut_edges()
        );
    }

    // the base graph is left alone, the split is measured on a copy
    let cut = Cut::from_removal(wiring, cut_set, START_NODE);
    if !wiring.is_empty() && !cut.is_split() {
        return Err(CutError::NoCutFound {
            reached: cut.source_set.len(),
            total: wiring.node_count(),
            removed: cut.cut_set,
        });
    }

    info!(
        "cut {:?} splits {} components into {} and {}",
        cut.cut_set,
        wiring.node_count(),
        cut.source_set.len(),
        cut.destination_set.len()
    );
    Ok(Estimate {
        cut,
        trials_run,
        frequencies,
    })
}

/// Explore random distinct node pairs and count how often each wire lies on a
/// connecting path. Returns the counts and the number of pairs explored.
pub fn edge_frequencies<R>(
    wiring: &Wiring,
    config: &CutConfig,
    rng: &mut R,
) -> (EdgeFrequencies, usize)
where
    R: Rng,
{
    let graph = wiring.graph();
    let node_count = wiring.node_count();
    let pair_count = node_count * node_count.saturating_sub(1) / 2;
    let target = config.trials.min(pair_count);
    if target < config.trials {
        debug!("only {} node pairs available, capping trials", pair_count);
    }

    let batch_size = match config.separation {
        Some(_) => CHECK_INTERVAL,
        None => target.max(1),
    };

    let mut processed: HashSet<Edge> = HashSet::new();
    let mut frequencies = EdgeFrequencies::new();
    while processed.len() < target {
        let count = batch_size.min(target - processed.len());
        let pairs = sample_pairs(node_count, count, &mut processed, rng);

        let batch = if config.parallel {
            pairs
                .par_iter()
                .map(|&(from, to)| explore(graph, from, to))
                .reduce(EdgeFrequencies::new, |mut left, right| {
                    left.merge(right);
                    left
                })
        } else {
            pairs
                .iter()
                .fold(EdgeFrequencies::new(), |mut total, &(from, to)| {
                    total.merge(explore(graph, from, to));
                    total
                })
        };
        frequencies.merge(batch);
        debug!(
            "{} of {} trials done, {} wires seen",
            processed.len(),
            target,
            frequencies.len()
        );

        if let Some(ratio) = config.separation {
            if frequencies.is_separated(config.cut_edges(), ratio) {
                info!("cut separated after {} trials", processed.len());
                break;
            }
        }
    }

    (frequencies, processed.len())
}

/// Draw `count` unordered pairs not seen before, recording them in `processed`.
fn sample_pairs<R>(
    node_count: usize,
    count: usize,
    processed: &mut HashSet<Edge>,
    rng: &mut R,
) -> Vec<(Node, Node)>
where
    R: Rng,
{
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from == to || !processed.insert(Edge::new(from, to)) {
            continue;
        }
        pairs.push((from, to));
    }
    pairs
}

/// Grow every wire-simple path out of `from` breadth first, counting the wires
/// of each path that touches `to`.
///
/// A directed step is taken by at most one path per exploration, which keeps
/// the frontier from blowing up on dense clusters.
fn explore(graph: &WiringGraph, from: Node, to: Node) -> EdgeFrequencies {
    let mut frequencies = EdgeFrequencies::new();
    let mut used: HashSet<(Node, Node)> = HashSet::new();
    let mut frontier = vec![Path::new(from)];

    while !frontier.is_empty() {
        let mut next = Vec::with_capacity(frontier.len());
        for path in &frontier {
            let tail = path.tail();
            for neighbor in graph.neighbors(tail) {
                if neighbor == to {
                    frequencies.record_path(path, to);
                } else if used.contains(&(tail, neighbor)) {
                    continue;
                } else if path.can_step(neighbor) {
                    let mut extended = path.clone();
                    extended.step(neighbor);
                    next.push(extended);
                    used.insert((tail, neighbor));
                    used.insert((neighbor, tail));
                }
            }
        }
        frontier = next;
    }

    frequencies
}
