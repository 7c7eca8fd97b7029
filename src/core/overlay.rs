//! Named optimal portfolios and a random-portfolio cloud for an efficient frontier chart.

use crate::core::chart::{MarkerColor, MarkerStyle};
use crate::core::frontier::{DEFAULT_RISK_AVERSION, Frontier, FrontierInputs, Objective};
use anyhow::{Context, Result, bail};
use nalgebra::DVector;
use rand::Rng;
use rand_distr::Exp1;
use serde::Serialize;
use tracing::{debug, info, instrument};

pub const DEFAULT_SAMPLES: usize = 10_000;

/// Sharpe ratio reported for a sampled portfolio with zero volatility and a
/// nonzero return, signed like the return.
pub const ZERO_RISK_SHARPE_BOUND: f64 = 1e6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedPortfolioPoint {
    pub objective: Objective,
    pub label: &'static str,
    pub expected_return: f64,
    pub volatility: f64,
    pub marker: MarkerStyle,
    pub color: MarkerColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudPoint {
    pub expected_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
}

/// Sampled portfolios, drawn as small dots coloured by Sharpe ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomPortfolioCloud {
    points: Vec<CloudPoint>,
    marker: MarkerStyle,
    color: MarkerColor,
}

impl RandomPortfolioCloud {
    pub fn from_weights(inputs: &FrontierInputs, weights: &[DVector<f64>]) -> Result<Self> {
        let points = weights
            .iter()
            .map(|w| portfolio_point(inputs, w))
            .collect::<Result<Vec<_>>>()?;
        Ok(RandomPortfolioCloud {
            points,
            marker: MarkerStyle::Dot,
            color: MarkerColor::SharpeScale,
        })
    }

    pub fn points(&self) -> &[CloudPoint] {
        &self.points
    }

    pub fn marker(&self) -> MarkerStyle {
        self.marker
    }

    pub fn color(&self) -> MarkerColor {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn volatilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volatility).collect()
    }

    pub fn returns(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.expected_return).collect()
    }

    pub fn sharpe_ratios(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sharpe_ratio).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayOptions {
    pub samples: usize,
    pub risk_aversion: f64,
    pub show_assets: bool,
    pub show_base_frontier: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        OverlayOptions {
            samples: DEFAULT_SAMPLES,
            risk_aversion: DEFAULT_RISK_AVERSION,
            show_assets: true,
            show_base_frontier: true,
        }
    }
}

/// Everything a canvas needs to draw the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayResult {
    pub named_points: Vec<NamedPortfolioPoint>,
    pub cloud: RandomPortfolioCloud,
    pub show_base_frontier: bool,
    pub show_assets: bool,
}

/// Solves `objective` on a solver instance of its own and reads back its
/// return and volatility.
#[instrument(name = "NamedPortfolio", skip(inputs), fields(objective = %objective))]
pub fn extract_named_portfolio<F: Frontier>(
    inputs: &FrontierInputs,
    objective: Objective,
) -> Result<NamedPortfolioPoint> {
    let mut frontier = F::from_inputs(inputs)
        .with_context(|| format!("Failed to build frontier for {objective} portfolio"))?;
    objective
        .solve(&mut frontier)
        .with_context(|| format!("Failed to solve {objective} portfolio"))?;
    let performance = frontier
        .performance()
        .with_context(|| format!("Failed to evaluate {objective} portfolio"))?;

    debug!(
        expected_return = performance.expected_return,
        volatility = performance.volatility,
        "Solved named portfolio"
    );

    Ok(NamedPortfolioPoint {
        objective,
        label: objective.label(),
        expected_return: performance.expected_return,
        volatility: performance.volatility,
        marker: MarkerStyle::for_objective(&objective),
        color: MarkerColor::for_objective(&objective),
    })
}

/// Draws `n_samples` weight vectors uniformly from the simplex, i.e. a
/// symmetric Dirichlet with concentration 1, via normalised unit exponentials.
pub fn sample_weights<R: Rng + ?Sized>(
    n_assets: usize,
    n_samples: usize,
    rng: &mut R,
) -> Vec<DVector<f64>> {
    (0..n_samples)
        .map(|_| {
            let draws = DVector::from_fn(n_assets, |_, _| rng.sample::<f64, _>(Exp1));
            let total = draws.sum();
            if total > 0.0 {
                draws / total
            } else {
                DVector::from_element(n_assets, 1.0 / n_assets as f64)
            }
        })
        .collect()
}

/// Return, volatility and zero-rate Sharpe ratio of one allocation.
pub fn portfolio_point(inputs: &FrontierInputs, weights: &DVector<f64>) -> Result<CloudPoint> {
    if weights.len() != inputs.n_assets() {
        bail!(
            "Allocation has {} weights but the frontier has {} assets",
            weights.len(),
            inputs.n_assets()
        );
    }

    let expected_return = weights.dot(inputs.expected_returns());
    // Rounding can push a PSD quadratic form a hair below zero.
    let variance = weights.dot(&(inputs.cov_matrix() * weights)).max(0.0);
    let volatility = variance.sqrt();

    Ok(CloudPoint {
        expected_return,
        volatility,
        sharpe_ratio: sharpe_ratio(expected_return, volatility),
    })
}

fn sharpe_ratio(expected_return: f64, volatility: f64) -> f64 {
    if volatility > 0.0 {
        expected_return / volatility
    } else if expected_return == 0.0 {
        0.0
    } else {
        ZERO_RISK_SHARPE_BOUND.copysign(expected_return)
    }
}

pub fn sample_random_portfolios<R: Rng + ?Sized>(
    inputs: &FrontierInputs,
    n_samples: usize,
    rng: &mut R,
) -> Result<RandomPortfolioCloud> {
    let weights = sample_weights(inputs.n_assets(), n_samples, rng);
    RandomPortfolioCloud::from_weights(inputs, &weights)
}

/// Computes the three named portfolios, each on an independent solver
/// instance, followed by the random cloud. Any solver failure aborts the
/// whole build.
pub fn build_overlay<F: Frontier, R: Rng + ?Sized>(
    inputs: &FrontierInputs,
    risk_free_rate: f64,
    options: &OverlayOptions,
    rng: &mut R,
) -> Result<OverlayResult> {
    let objectives = [
        Objective::MaxSharpe { risk_free_rate },
        Objective::MinVolatility,
        Objective::MaxQuadraticUtility {
            risk_aversion: options.risk_aversion,
        },
    ];

    let named_points = objectives
        .into_iter()
        .map(|objective| extract_named_portfolio::<F>(inputs, objective))
        .collect::<Result<Vec<_>>>()?;

    let cloud = sample_random_portfolios(inputs, options.samples, rng)?;
    info!(
        assets = inputs.n_assets(),
        samples = cloud.len(),
        "Built efficient frontier overlay"
    );

    Ok(OverlayResult {
        named_points,
        cloud,
        show_base_frontier: options.show_base_frontier,
        show_assets: options.show_assets,
    })
}
