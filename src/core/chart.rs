//! Charting abstraction for the efficient frontier overlay.

use crate::core::frontier::{Frontier, FrontierInputs, Objective};
use crate::core::overlay::{
    NamedPortfolioPoint, OverlayOptions, OverlayResult, RandomPortfolioCloud, build_overlay,
};
use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

pub const OVERLAY_TITLE: &str = "Efficient Frontier with Random Portfolios";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerStyle {
    Star,
    Pentagon,
    TriangleUp,
    Dot,
}

impl MarkerStyle {
    pub fn for_objective(objective: &Objective) -> Self {
        match objective {
            Objective::MaxSharpe { .. } => MarkerStyle::Star,
            Objective::MinVolatility => MarkerStyle::Pentagon,
            Objective::MaxQuadraticUtility { .. } => MarkerStyle::TriangleUp,
        }
    }
}

impl Display for MarkerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MarkerStyle::Star => "*",
                MarkerStyle::Pentagon => "p",
                MarkerStyle::TriangleUp => "^",
                MarkerStyle::Dot => ".",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerColor {
    Red,
    Green,
    Blue,
    /// Colour mapped from the Sharpe ratio on a reversed viridis scale.
    SharpeScale,
}

impl MarkerColor {
    pub fn for_objective(objective: &Objective) -> Self {
        match objective {
            Objective::MaxSharpe { .. } => MarkerColor::Red,
            Objective::MinVolatility => MarkerColor::Green,
            Objective::MaxQuadraticUtility { .. } => MarkerColor::Blue,
        }
    }
}

/// A drawing surface, typically backed by an external plotting library.
pub trait FrontierCanvas {
    /// Draws the efficient frontier curve for `inputs`, optionally with the
    /// individual assets.
    fn plot_frontier(&mut self, inputs: &FrontierInputs, show_assets: bool) -> Result<()>;

    fn scatter_named(&mut self, point: &NamedPortfolioPoint) -> Result<()>;

    /// Draws the cloud with its own marker and colour scale.
    fn scatter_cloud(&mut self, cloud: &RandomPortfolioCloud) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()>;

    fn show_legend(&mut self) -> Result<()>;
}

/// Draws a computed overlay: base frontier, named portfolios, random cloud,
/// then title and legend.
pub fn render_overlay<C: FrontierCanvas + ?Sized>(
    canvas: &mut C,
    inputs: &FrontierInputs,
    overlay: &OverlayResult,
) -> Result<()> {
    if overlay.show_base_frontier {
        canvas
            .plot_frontier(inputs, overlay.show_assets)
            .context("Failed to plot efficient frontier")?;
    }

    for point in &overlay.named_points {
        debug!(label = point.label, marker = %point.marker, "Drawing named portfolio");
        canvas.scatter_named(point)?;
    }
    debug!(
        samples = overlay.cloud.len(),
        marker = %overlay.cloud.marker(),
        "Drawing random portfolios"
    );
    canvas.scatter_cloud(&overlay.cloud)?;

    canvas.set_title(OVERLAY_TITLE)?;
    canvas.show_legend()
}

/// Builds the overlay and draws it. Nothing is drawn unless every named
/// portfolio solves.
pub fn plot_efficient_frontier_overlay<F, C, R>(
    canvas: &mut C,
    inputs: &FrontierInputs,
    risk_free_rate: f64,
    options: &OverlayOptions,
    rng: &mut R,
) -> Result<OverlayResult>
where
    F: Frontier,
    C: FrontierCanvas + ?Sized,
    R: Rng + ?Sized,
{
    let overlay = build_overlay::<F, R>(inputs, risk_free_rate, options, rng)?;
    render_overlay(canvas, inputs, &overlay)?;
    Ok(overlay)
}
