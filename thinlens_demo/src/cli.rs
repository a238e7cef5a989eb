// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use thinlens_scene::{DEFAULT_ASPECT_RATIO, SceneParams};
use thinlens_svg::RayStyle;

/// Log verbosity accepted by `--log-level`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// How rays are drawn, as accepted by `--ray-style`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum RayStyleArg {
    /// Dashed lines.
    Solid,
    /// One dot per rasterizer sample.
    Sampled,
    /// Dashed lines with the samples on top.
    Both,
}

impl From<RayStyleArg> for RayStyle {
    fn from(style: RayStyleArg) -> Self {
        match style {
            RayStyleArg::Solid => Self::Solid,
            RayStyleArg::Sampled => Self::Sampled,
            RayStyleArg::Both => Self::Both,
        }
    }
}

/// Renders a thin convex lens diagram to SVG.
#[derive(Debug, Parser)]
#[command(name = "thinlens_demo", version)]
pub(crate) struct Args {
    /// Object height (slider range 10-200).
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub(crate) object_size: f64,

    /// Distance from the lens to the object (slider range 10-400).
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub(crate) object_distance: f64,

    /// Lens focal length (slider range 50-200).
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub(crate) focal_length: f64,

    /// Clamp the three values above into their slider ranges.
    #[arg(long)]
    pub(crate) clamp: bool,

    /// Do not draw construction rays.
    #[arg(long)]
    pub(crate) hide_rays: bool,

    /// How construction rays are drawn.
    #[arg(long, value_enum, default_value_t = RayStyleArg::Solid)]
    pub(crate) ray_style: RayStyleArg,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1000)]
    pub(crate) width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 400)]
    pub(crate) height: u32,

    /// Leave out the legend.
    #[arg(long)]
    pub(crate) no_legend: bool,

    /// Leave out the background grid.
    #[arg(long)]
    pub(crate) no_grid: bool,

    /// Output file; standard output when omitted.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Logging level; `RUST_LOG` refines it.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub(crate) log_level: LogLevel,
}

impl Args {
    /// The scene parameters selected on the command line.
    pub(crate) fn scene_params(&self) -> SceneParams {
        let params = SceneParams {
            object_size: self.object_size,
            object_distance: self.object_distance,
            focal_length: self.focal_length,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            show_rays: !self.hide_rays,
        };
        if self.clamp {
            params.clamped_to_sliders()
        } else {
            params
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_reset_state() {
        let args = Args::parse_from(["thinlens_demo"]);
        assert_eq!(args.scene_params(), SceneParams::default());
        assert_eq!(args.log_level, LogLevel::Info);
        assert!(args.output.is_none());
    }

    #[test]
    fn flags_are_applied() {
        let args = Args::parse_from([
            "thinlens_demo",
            "--object-distance",
            "250",
            "--focal-length",
            "125",
            "--hide-rays",
            "--ray-style",
            "sampled",
            "--no-grid",
        ]);
        let params = args.scene_params();
        assert_eq!(params.object_distance, 250.0);
        assert_eq!(params.focal_length, 125.0);
        assert!(!params.show_rays);
        assert_eq!(RayStyle::from(args.ray_style), RayStyle::Sampled);
        assert!(args.no_grid);
    }

    #[test]
    fn clamp_flag_pulls_values_into_range() {
        let args = Args::parse_from(["thinlens_demo", "--focal-length", "-5", "--clamp"]);
        assert_eq!(args.scene_params().focal_length, 50.0);
    }
}
