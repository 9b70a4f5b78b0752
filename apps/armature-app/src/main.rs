//! Armature command-line runner.
//!
//! Runs chains headlessly and optionally writes the final pose as SVG:
//! - `fk`: step an oscillating forward-kinematics arm
//! - `ik`: drag (or reach) an inverse-kinematics chain toward a target
//! - `particles`: orbit seeded random particles around a heavy sun
//! - `scene`: load a TOML scene file and run it
//! - `info`: print workspace crate versions

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{info, warn};
use nalgebra::Point2;
use rand::{Rng, SeedableRng};

use armature_core::math::random_range;
use armature_core::prelude::*;
use armature_fk::FkSystem;
use armature_ik::IkSystem;
use armature_particle::{Particle, ParticleSet};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Forward/inverse kinematics chains and particle toys.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a forward-kinematics arm and print its tip.
    Fk {
        /// Number of segments.
        #[arg(short = 'n', long, default_value_t = 2)]
        segments: usize,

        /// Length of every segment.
        #[arg(short, long, default_value_t = 100.0)]
        length: f32,

        /// Frames to simulate.
        #[arg(short, long, default_value_t = 60)]
        frames: u32,

        /// Driving-angle increment per frame.
        #[arg(long, default_value_t = 0.05)]
        speed: f32,

        /// Write the final pose to this SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Drag an inverse-kinematics chain toward a target.
    Ik {
        /// Number of segments.
        #[arg(short = 'n', long, default_value_t = 5)]
        segments: usize,

        /// Length of every segment.
        #[arg(short, long, default_value_t = 50.0)]
        length: f32,

        /// Target point as `X,Y`.
        #[arg(short, long, value_parser = parse_point, default_value = "600,100")]
        target: Point2<f32>,

        /// Pin the root to the base (reach) instead of dragging freely.
        #[arg(short, long)]
        reach: bool,

        /// Frames to simulate.
        #[arg(short, long, default_value_t = 60)]
        frames: u32,

        /// Write the final pose to this SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Orbit random particles around a central sun.
    Particles {
        /// Number of planets.
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,

        /// Frames to simulate.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// Random seed.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },

    /// Run a TOML scene file.
    Scene {
        /// Path to the scene file.
        path: PathBuf,

        /// Write the final pose to this SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

fn parse_point(s: &str) -> Result<Point2<f32>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Point2::new(x, y))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn write_svg(path: &Path, surface: &SvgSurface) -> Result<(), ArmatureError> {
    std::fs::write(path, surface.render()).map_err(|source| ArmatureError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} paths to {}", surface.path_count(), path.display());
    Ok(())
}

fn print_point(label: &str, p: Option<Point2<f32>>) {
    match p {
        Some(p) => println!("{label}: ({:.3}, {:.3})", p.x, p.y),
        None => println!("{label}: -"),
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_fk(config: &FkChainConfig, frames: u32, svg: Option<&Path>) -> Result<(), ArmatureError> {
    config.validate()?;
    let mut arm = FkSystem::from_config(config);
    for _ in 0..frames {
        arm.step();
    }

    println!(
        "fk: segments={}, frames={frames}, driving_angle={:.3}",
        arm.len(),
        arm.driving_angle()
    );
    print_point("tip", arm.tip());

    if let Some(path) = svg {
        let mut surface = SvgSurface::default();
        arm.draw(&mut surface);
        write_svg(path, &surface)?;
    }
    Ok(())
}

fn run_ik(
    config: &IkChainConfig,
    target: Point2<f32>,
    reach: bool,
    frames: u32,
    svg: Option<&Path>,
) -> Result<(), ArmatureError> {
    config.validate()?;
    let mut chain = IkSystem::from_config(config);
    for _ in 0..frames {
        if reach {
            chain.reach(target);
        } else {
            chain.drag(target);
        }
        chain.update();
    }

    let tip = chain.tip();
    println!(
        "ik: segments={}, frames={frames}, state={:?}, reach={:.3}",
        chain.len(),
        chain.state(),
        config.reach()
    );
    print_point("root", chain.get(0).map(armature_ik::IkSegment::origin));
    print_point("tip", tip);
    if let Some(tip) = tip {
        println!("miss: {:.3}", distance(tip, target));
    }

    if let Some(path) = svg {
        let mut surface = SvgSurface::default();
        chain.draw(&mut surface);
        write_svg(path, &surface)?;
    }
    Ok(())
}

fn run_particles(count: usize, frames: u32, seed: u64) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let bounds = Rect::new(Point2::origin(), 800.0, 600.0);
    let center = Point2::new(400.0, 300.0);

    let mut set = ParticleSet::new();
    let sun = set.add(Particle::new(center, 0.0, 0.0).with_mass(10_000.0).with_radius(20.0));
    for _ in 0..count {
        let orbit = random_range(&mut rng, 100.0, 250.0);
        let around = rng.r#gen::<f32>() * std::f32::consts::TAU;
        let start = center + polar(around, orbit);
        // Roughly circular: v = sqrt(M / r), perpendicular to the radius.
        let speed = (10_000.0 / orbit).sqrt();
        let planet = set.add(
            Particle::new(start, speed, around + std::f32::consts::FRAC_PI_2)
                .with_radius(random_range(&mut rng, 2.0, 6.0))
                .with_bounce(0.9),
        );
        if let Err(e) = set.add_gravitation(planet, sun) {
            warn!("skipping gravitation for {planet}: {e}");
        }
    }

    for _ in 0..frames {
        set.update();
        set.confine(&bounds);
    }

    println!("particles: count={count}, frames={frames}, seed={seed}");
    for (id, p) in set.iter() {
        println!(
            "  {id}: pos=({:.2}, {:.2}) speed={:.3}",
            p.position.x,
            p.position.y,
            p.velocity.norm()
        );
    }
}

fn run_scene(path: &Path, svg: Option<&Path>) -> Result<(), ArmatureError> {
    let scene = SceneConfig::from_file(path)?;
    info!("loaded scene {}", path.display());

    let mut surface = SvgSurface::new(scene.svg.clone());

    if let Some(fk) = &scene.fk {
        let mut arm = FkSystem::from_config(fk);
        for _ in 0..scene.frames {
            arm.step();
        }
        print_point("fk tip", arm.tip());
        arm.draw(&mut surface);
    }

    if let Some(ik) = &scene.ik {
        let mut chain = IkSystem::from_config(ik);
        if let Some(target) = scene.ik_target.map(Point2::from) {
            for _ in 0..scene.frames {
                chain.drag(target);
                chain.update();
            }
        }
        print_point("ik tip", chain.tip());
        chain.draw(&mut surface);
    }

    if let Some(path) = svg {
        write_svg(path, &surface)?;
    }
    Ok(())
}

fn run_info() {
    println!("armature v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  armature-core     {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-fk       {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-ik       {}", env!("CARGO_PKG_VERSION"));
    println!("  armature-particle {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("easings: {}", Easing::ALL.len());
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn run(cli: Cli) -> Result<(), ArmatureError> {
    match cli.command {
        Some(Commands::Fk {
            segments,
            length,
            frames,
            speed,
            svg,
        }) => {
            let config = FkChainConfig {
                base: [400.0, 300.0],
                rotation_speed: speed,
                segments: (0..segments)
                    .map(|_| FkSegmentConfig::new(length).with_rotation_range(0.8))
                    .collect(),
            };
            run_fk(&config, frames, svg.as_deref())
        }
        Some(Commands::Ik {
            segments,
            length,
            target,
            reach,
            frames,
            svg,
        }) => {
            let config = IkChainConfig {
                base: [400.0, 300.0],
                fixed_base: false,
                segments: vec![IkSegmentConfig::new(length); segments],
            };
            run_ik(&config, target, reach, frames, svg.as_deref())
        }
        Some(Commands::Particles {
            count,
            frames,
            seed,
        }) => {
            run_particles(count, frames, seed);
            Ok(())
        }
        Some(Commands::Scene { path, svg }) => run_scene(&path, svg.as_deref()),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => {
            // Default: a short walker-style FK run
            let config = FkChainConfig {
                base: [400.0, 300.0],
                rotation_speed: 0.05,
                segments: vec![FkSegmentConfig::new(100.0), FkSegmentConfig::new(100.0)],
            };
            run_fk(&config, 60, None)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_spaces() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point2::new(1.5, -2.0));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_parses_ik_flags() {
        let cli = Cli::parse_from(["armature", "ik", "-n", "3", "--target", "10,20", "--reach"]);
        match cli.command {
            Some(Commands::Ik {
                segments,
                target,
                reach,
                ..
            }) => {
                assert_eq!(segments, 3);
                assert_eq!(target, Point2::new(10.0, 20.0));
                assert!(reach);
            }
            _ => panic!("expected ik subcommand"),
        }
    }

    #[test]
    fn svg_write_failure_names_the_output_path() {
        let path = Path::new("/nonexistent-armature-dir/arm.svg");
        let err = write_svg(path, &SvgSurface::default()).unwrap_err();
        assert!(matches!(err, ArmatureError::Output { .. }));
        assert!(err.to_string().starts_with("Failed to write /nonexistent-armature-dir/arm.svg"));
    }

    #[test]
    fn cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
