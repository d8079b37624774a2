use scatter_rs::api::{ScatterPlot, ScatterPlotConfig};
use scatter_rs::render::{Color, SvgRenderer};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: render_scatter --input <csv> --output <svg> [--legend <svg>] [--config <json>] [--zoom <k> [--anchor <x,y>]] [--pan <dx,dy>] [--png <path>]";

struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    legend: Option<PathBuf>,
    config: Option<PathBuf>,
    zoom: Option<f64>,
    anchor: Option<(f64, f64)>,
    pan: Option<(f64, f64)>,
    png: Option<PathBuf>,
}

fn main() {
    let _ = scatter_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterPlotConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterPlotConfig::default(),
    };

    let renderer = SvgRenderer::new().with_background(Some(Color::rgb(1.0, 1.0, 1.0)));
    let mut plot = ScatterPlot::from_csv_path(renderer, config, &args.input)
        .map_err(|err| format!("failed to load `{}`: {err}", args.input.display()))?;

    if let Some(factor) = args.zoom {
        let area = plot.plot_area();
        let (x, y) = args.anchor.unwrap_or((
            area.left + area.width / 2.0,
            area.top + area.height / 2.0,
        ));
        plot.zoom_by(factor, x, y);
    }
    if let Some((dx, dy)) = args.pan {
        plot.pan_by(dx, dy);
    }

    plot.render().map_err(|err| err.to_string())?;
    plot.renderer()
        .write_to_file(&args.output)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;

    if let Some(path) = &args.legend {
        let mut legend = SvgRenderer::new().with_background(Some(Color::rgb(1.0, 1.0, 1.0)));
        plot.render_legend(&mut legend).map_err(|err| err.to_string())?;
        legend
            .write_to_file(path)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }

    if let Some(path) = &args.png {
        write_png(&plot, path)?;
    }

    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    plot: &ScatterPlot<SvgRenderer>,
    path: &Path,
) -> Result<(), String> {
    use scatter_rs::render::{CairoRenderer, Renderer};

    let viewport = plot.viewport();
    let mut renderer = CairoRenderer::new(viewport.width as i32, viewport.height as i32)
        .map_err(|err| err.to_string())?;
    let frame = plot.build_frame().map_err(|err| err.to_string())?;
    renderer.render(&frame).map_err(|err| err.to_string())?;
    let mut file = fs::File::create(path)
        .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
    renderer.write_png(&mut file).map_err(|err| err.to_string())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _plot: &ScatterPlot<SvgRenderer>,
    _path: &Path,
) -> Result<(), String> {
    Err("--png requires building with `--features cairo-backend`".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut legend = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut zoom = None::<f64>;
    let mut anchor = None::<(f64, f64)>;
    let mut pan = None::<(f64, f64)>;
    let mut png = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--legend" => legend = Some(PathBuf::from(value("--legend")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--png" => png = Some(PathBuf::from(value("--png")?)),
            "--zoom" => {
                let raw = value("--zoom")?;
                let factor = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|factor| factor.is_finite() && *factor > 0.0)
                    .ok_or_else(|| format!("invalid --zoom value `{raw}`"))?;
                zoom = Some(factor);
            }
            "--anchor" => anchor = Some(parse_pair("--anchor", &value("--anchor")?)?),
            "--pan" => pan = Some(parse_pair("--pan", &value("--pan")?)?),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    if anchor.is_some() && zoom.is_none() {
        return Err("--anchor requires --zoom".to_owned());
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        input,
        output,
        legend,
        config,
        zoom,
        anchor,
        pan,
        png,
    })
}

fn parse_pair(flag: &str, raw: &str) -> Result<(f64, f64), String> {
    let invalid = || format!("invalid {flag} value `{raw}`, expected `<x>,<y>`");
    let (left, right) = raw.split_once(',').ok_or_else(invalid)?;
    let x = left.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = right.trim().parse::<f64>().map_err(|_| invalid())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }
    Ok((x, y))
}
