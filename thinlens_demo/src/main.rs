// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless shell for the Thinlens lens diagram.
//!
//! Reads object size, object distance and focal length from the command line,
//! reports what kind of image the lens forms, and writes the diagram as SVG.
//!
//! ```text
//! thinlens_demo --object-distance 250 --focal-length 125 -o lens.svg
//! ```

mod cli;
mod tree;

use std::fs;
use std::io::{self, Write as _};
use std::process::ExitCode;

use clap::Parser;
use kurbo::Vec2;
use log::{debug, error, info, warn};
use thinlens_optics::{ImageResult, Nature, Orientation, SizeClass};
use thinlens_scene::Scene;
use thinlens_svg::{SvgOptions, render_svg};

use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = args.scene_params();
    debug!("scene parameters: {params:?}");

    let scene = params.compose()?;
    report(&scene);

    let options = SvgOptions {
        width: args.width,
        height: args.height,
        ray_style: args.ray_style.into(),
        texture: Some(tree::tree()),
        legend: !args.no_legend,
        grid: (!args.no_grid).then_some(Vec2::new(100.0, 50.0)),
        ..SvgOptions::default()
    };
    let svg = render_svg(&scene, &options);

    match &args.output {
        Some(path) => {
            fs::write(path, svg.as_bytes())
                .map_err(|err| format!("cannot write {}: {err}", path.display()))?;
            info!("wrote {} bytes to {}", svg.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn report(scene: &Scene) {
    match scene.image_result {
        ImageResult::Undefined => {
            warn!("object sits at the focal point; no image forms");
        }
        ImageResult::Formed(image) => {
            let class = image.classify();
            info!(
                "image at {:.2}, height {:.2}, magnification {:.3}: {}, {}, {}",
                image.distance,
                image.size,
                image.magnification,
                match class.nature {
                    Nature::Real => "real",
                    Nature::Virtual => "virtual",
                },
                match class.orientation {
                    Orientation::Upright => "upright",
                    Orientation::Inverted => "inverted",
                },
                match class.size {
                    SizeClass::Magnified => "magnified",
                    SizeClass::Reduced => "reduced",
                    SizeClass::SameSize => "same size",
                },
            );
            if let Some(placement) = &scene.image
                && scene.viewport.intersect(placement.bounds()).is_zero_area()
            {
                warn!("image lies outside the visible window");
            }
        }
    }
    debug!(
        "scene: {} ray segments, {} legend entries, object extent {:?}",
        scene.rays.len(),
        scene.legend.len(),
        scene.object.extent,
    );
}
