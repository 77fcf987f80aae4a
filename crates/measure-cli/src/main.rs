use std::{error::Error, fs, path::Path};

use clap::Parser;
use measure::{
    collect_angle, collect_distance, collect_position, AngleConvention, Calibration,
    LineCalibration, MeasuredAngle, MeasuredDistance, MeasuredPosition, NumberFormat,
    PlaneCalibration, Pt2, Real, VertexAngle,
};
use serde::{Deserialize, Serialize};

/// Measurement collector for annotation geometry.
#[derive(Debug, Parser)]
#[command(author, version, about = "Collect calibrated measurements from annotations")]
struct Args {
    /// Path to JSON file containing the annotation list.
    #[arg(long)]
    input: String,

    /// Optional path to JSON CollectorConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<String>,
}

/// One annotation captured by the overlay, in image-space pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Annotation {
    Position {
        name: String,
        point: [Real; 2],
    },
    Distance {
        name: String,
        a: [Real; 2],
        b: [Real; 2],
    },
    Angle {
        name: String,
        origin: [Real; 2],
        a: [Real; 2],
        b: [Real; 2],
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnnotationInput {
    annotations: Vec<Annotation>,
}

/// How to calibrate image coordinates before measuring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CalibrationConfig {
    /// One pixel is one real-world unit.
    Identity,
    /// Uniform scale from a marked segment of known length.
    Line {
        pixel_length: Real,
        real_length: Real,
        #[serde(default)]
        origin: [Real; 2],
    },
    /// Homography from a marked quadrilateral of known size.
    /// Corner order: top-left, top-right, bottom-right, bottom-left.
    Plane {
        image_quad: [[Real; 2]; 4],
        width: Real,
        height: Real,
    },
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        CalibrationConfig::Identity
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CollectorConfig {
    #[serde(default)]
    calibration: CalibrationConfig,
    #[serde(default)]
    format: NumberFormat,
    #[serde(default)]
    angle: AngleConvention,
}

/// Collected records, grouped by measurement kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MeasurementReport {
    positions: Vec<MeasuredPosition>,
    distances: Vec<MeasuredDistance>,
    angles: Vec<MeasuredAngle>,
}

fn pt(xy: [Real; 2]) -> Pt2 {
    Pt2::new(xy[0], xy[1])
}

fn build_calibration(config: &CollectorConfig) -> Result<Box<dyn Calibration>, Box<dyn Error>> {
    let calibration: Box<dyn Calibration> = match &config.calibration {
        CalibrationConfig::Identity => {
            Box::new(LineCalibration::identity().with_convention(config.angle))
        }
        CalibrationConfig::Line {
            pixel_length,
            real_length,
            origin,
        } => Box::new(
            LineCalibration::new(*pixel_length, *real_length)?
                .with_origin(pt(*origin))
                .with_convention(config.angle),
        ),
        CalibrationConfig::Plane {
            image_quad,
            width,
            height,
        } => {
            let corners = [
                pt(image_quad[0]),
                pt(image_quad[1]),
                pt(image_quad[2]),
                pt(image_quad[3]),
            ];
            Box::new(PlaneCalibration::from_quad(&corners, *width, *height)?.with_convention(config.angle))
        }
    };
    Ok(calibration)
}

fn collect_report(
    input: &AnnotationInput,
    config: &CollectorConfig,
) -> Result<MeasurementReport, Box<dyn Error>> {
    let calibration = build_calibration(config)?;
    let format = &config.format;

    let mut report = MeasurementReport {
        positions: Vec::new(),
        distances: Vec::new(),
        angles: Vec::new(),
    };

    for annotation in &input.annotations {
        match annotation {
            Annotation::Position { name, point } => {
                report
                    .positions
                    .push(collect_position(name, pt(*point), &*calibration, format)?);
            }
            Annotation::Distance { name, a, b } => {
                report
                    .distances
                    .push(collect_distance(name, pt(*a), pt(*b), &*calibration, format)?);
            }
            Annotation::Angle { name, origin, a, b } => {
                let source = VertexAngle::from_points(pt(*origin), pt(*a), pt(*b), &*calibration)?;
                report
                    .angles
                    .push(collect_angle(name, &source, &*calibration, format));
            }
        }
    }

    Ok(report)
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn collect_from_files(
    input_path: &str,
    config_path: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let input: AnnotationInput = load_json_file(Path::new(input_path))?;

    let config = if let Some(cfg_path) = config_path {
        load_json_file::<CollectorConfig>(Path::new(cfg_path))?
    } else {
        CollectorConfig::default()
    };

    let report = collect_report(&input, &config)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = collect_from_files(&args.input, args.config.as_deref())?;
    println!("{}", json);
    Ok(())
}
