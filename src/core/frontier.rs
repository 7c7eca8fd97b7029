//! Efficient frontier inputs and the optimizer abstraction.

use anyhow::{Result, anyhow, bail};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

pub const DEFAULT_RISK_AVERSION: f64 = 0.1;

/// Expected returns and covariance of a set of assets.
///
/// Never mutated after construction; every solver instance is built from a
/// shared reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierInputs {
    expected_returns: DVector<f64>,
    cov_matrix: DMatrix<f64>,
}

impl FrontierInputs {
    pub fn new(expected_returns: DVector<f64>, cov_matrix: DMatrix<f64>) -> Result<Self> {
        let n = expected_returns.len();
        if n == 0 {
            bail!("Frontier needs at least one asset");
        }
        if cov_matrix.nrows() != n || cov_matrix.ncols() != n {
            bail!(
                "Covariance matrix is {}x{} but there are {} expected returns",
                cov_matrix.nrows(),
                cov_matrix.ncols(),
                n
            );
        }
        if expected_returns
            .iter()
            .chain(cov_matrix.iter())
            .any(|v| !v.is_finite())
        {
            bail!("Frontier inputs must be finite");
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if (cov_matrix[(i, j)] - cov_matrix[(j, i)]).abs() > SYMMETRY_TOLERANCE {
                    bail!("Covariance matrix is not symmetric at ({}, {})", i, j);
                }
            }
        }

        Ok(FrontierInputs {
            expected_returns,
            cov_matrix,
        })
    }

    /// Builds inputs from plain rows, as read from config or a CSV.
    pub fn from_rows(expected_returns: &[f64], cov_rows: &[Vec<f64>]) -> Result<Self> {
        let n = expected_returns.len();
        if let Some(row) = cov_rows.iter().find(|row| row.len() != n) {
            return Err(anyhow!(
                "Covariance row has {} entries, expected {}",
                row.len(),
                n
            ));
        }
        let cov_matrix = DMatrix::from_fn(cov_rows.len(), n, |i, j| cov_rows[i][j]);
        Self::new(DVector::from_vec(expected_returns.to_vec()), cov_matrix)
    }

    pub fn n_assets(&self) -> usize {
        self.expected_returns.len()
    }

    pub fn expected_returns(&self) -> &DVector<f64> {
        &self.expected_returns
    }

    pub fn cov_matrix(&self) -> &DMatrix<f64> {
        &self.cov_matrix
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub expected_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
}

/// An external mean-variance optimizer.
///
/// Solving mutates the instance (the last solved weights feed
/// [`Frontier::performance`]), so one instance must serve one objective only.
pub trait Frontier: Sized {
    fn from_inputs(inputs: &FrontierInputs) -> Result<Self>;

    fn max_sharpe(&mut self, risk_free_rate: f64) -> Result<Vec<f64>>;

    fn min_volatility(&mut self) -> Result<Vec<f64>>;

    fn max_quadratic_utility(&mut self, risk_aversion: f64) -> Result<Vec<f64>>;

    /// Performance of the most recently solved allocation.
    fn performance(&self) -> Result<Performance>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Objective {
    MaxSharpe { risk_free_rate: f64 },
    MinVolatility,
    MaxQuadraticUtility { risk_aversion: f64 },
}

impl Objective {
    pub fn label(&self) -> &'static str {
        match self {
            Objective::MaxSharpe { .. } => "Max Sharpe",
            Objective::MinVolatility => "Min Volatility",
            Objective::MaxQuadraticUtility { .. } => "Max Quadratic Utility",
        }
    }

    /// Runs this objective on `frontier`, returning the optimal weights.
    pub fn solve<F: Frontier>(&self, frontier: &mut F) -> Result<Vec<f64>> {
        match *self {
            Objective::MaxSharpe { risk_free_rate } => frontier.max_sharpe(risk_free_rate),
            Objective::MinVolatility => frontier.min_volatility(),
            Objective::MaxQuadraticUtility { risk_aversion } => {
                frontier.max_quadratic_utility(risk_aversion)
            }
        }
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
