use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use lineeq::{LineEquation, LineKind, Vec2};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "line")]
#[command(about = "Build a 2D line and query it")]
struct Cmd {
    /// Max log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: Level,

    /// Also write the JSON result here, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

/// A line given either by two points or by a slope and a point.
#[derive(Args, Debug, Clone)]
struct LineArgs {
    /// First point "x,y"
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "p2", conflicts_with_all = ["slope", "point"])]
    p1: Option<Vec2<f64>>,
    /// Second point "x,y"
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "p1")]
    p2: Option<Vec2<f64>>,
    /// Slope ("inf" for a vertical line)
    #[arg(long, allow_hyphen_values = true, requires = "point")]
    slope: Option<f64>,
    /// Point "x,y" the sloped line passes through
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "slope")]
    point: Option<Vec2<f64>>,
}

impl LineArgs {
    fn build(&self) -> Result<LineEquation> {
        match (self.p1, self.p2, self.slope, self.point) {
            (Some(p1), Some(p2), _, _) => Ok(LineEquation::from_points(p1, p2)),
            (_, _, Some(slope), Some(point)) => LineEquation::try_from_slope_point(slope, point)
                .with_context(|| format!("invalid line: slope {slope} through {}", fmt_point(point))),
            _ => bail!("a line needs --p1 and --p2, or --slope and --point"),
        }
    }

    fn params(&self) -> Value {
        json!({
            "p1": self.p1.map(pair),
            "p2": self.p2.map(pair),
            "slope": self.slope,
            "point": self.point.map(pair),
        })
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Action {
    /// Print slope, intercepts and kind of the line
    Describe {
        #[command(flatten)]
        line: LineArgs,
    },
    /// x on the line at height y (null for horizontal lines)
    XOfY {
        #[command(flatten)]
        line: LineArgs,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// y on the line at abscissa x (null for vertical lines)
    YOfX {
        #[command(flatten)]
        line: LineArgs,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
    },
    /// Perpendicular distance from a point "x,y" to the line
    Distance {
        #[command(flatten)]
        line: LineArgs,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Vec2<f64>,
    },
    /// Parallel line through a point "x,y"
    Shift {
        #[command(flatten)]
        line: LineArgs,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Vec2<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Describe { .. } => "describe",
            Action::XOfY { .. } => "x-of-y",
            Action::YOfX { .. } => "y-of-x",
            Action::Distance { .. } => "distance",
            Action::Shift { .. } => "shift",
            Action::Report => "report",
        }
    }

    fn params(&self) -> Value {
        match self {
            Action::Describe { line } => json!({ "line": line.params() }),
            Action::XOfY { line, y } => json!({ "line": line.params(), "y": y }),
            Action::YOfX { line, x } => json!({ "line": line.params(), "x": x }),
            Action::Distance { line, to } | Action::Shift { line, to } => {
                json!({ "line": line.params(), "to": pair(*to) })
            }
            Action::Report => json!({}),
        }
    }
}

/// f64 that serializes NaN as `null` and infinities as `"inf"` / `"-inf"`.
#[derive(Clone, Copy, Debug)]
struct Real(f64);

impl Serialize for Real {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_nan() {
            s.serialize_none()
        } else if v.is_infinite() {
            s.serialize_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            s.serialize_f64(v)
        }
    }
}

#[derive(Serialize)]
struct LineSummary {
    kind: &'static str,
    equation: String,
    slope: Real,
    y_intercept: Real,
    x_intercept: Real,
}

impl From<&LineEquation> for LineSummary {
    fn from(l: &LineEquation) -> Self {
        let kind = match l.kind() {
            LineKind::Vertical { .. } => "vertical",
            LineKind::Horizontal { .. } => "horizontal",
            LineKind::Oblique { .. } => "oblique",
        };
        Self {
            kind,
            equation: l.to_string(),
            slope: Real(l.slope()),
            y_intercept: Real(l.y_intercept()),
            x_intercept: Real(l.x_intercept()),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Answer {
    Value(Real),
    Line(LineSummary),
}

#[derive(Serialize)]
struct QueryOutput {
    query: &'static str,
    line: LineSummary,
    result: Answer,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    let doc = execute(&cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    if let Some(out) = &cmd.out {
        write_output(out, &doc, Payload::new(cmd.action.name(), cmd.action.params()))?;
    }
    Ok(())
}

/// Run one subcommand and return its JSON result.
fn execute(action: &Action) -> Result<Value> {
    let query = action.name();
    tracing::info!(cmd = query, params = %action.params(), "execute");
    let (line, result) = match action {
        Action::Report => return Ok(provenance::document(&Payload::new(query, json!({})))),
        Action::Describe { line } => {
            let l = line.build()?;
            (l, Answer::Line(LineSummary::from(&l)))
        }
        Action::XOfY { line, y } => {
            let l = line.build()?;
            (l, Answer::Value(Real(l.x_of_y(*y))))
        }
        Action::YOfX { line, x } => {
            let l = line.build()?;
            (l, Answer::Value(Real(l.y_of_x(*x))))
        }
        Action::Distance { line, to } => {
            let l = line.build()?;
            (l, Answer::Value(Real(l.distance_to_point(*to))))
        }
        Action::Shift { line, to } => {
            let l = line.build()?;
            (l, Answer::Line(LineSummary::from(&l.shift_to(*to))))
        }
    };
    if let Answer::Value(Real(v)) = result {
        if v.is_nan() {
            tracing::warn!(cmd = query, line = %line, "query has no single answer on this line");
        }
    }
    let out = QueryOutput {
        query,
        line: LineSummary::from(&line),
        result,
    };
    Ok(serde_json::to_value(out)?)
}

fn write_output(out: &Path, doc: &Value, payload: Payload) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

/// Parse "x,y" into a point.
fn parse_point(s: &str) -> Result<Vec2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let coord = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {t:?}: {e}"))
    };
    Ok(Vec2::new(coord(x)?, coord(y)?))
}

fn pair(p: Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

fn fmt_point(p: Vec2<f64>) -> String {
    format!("({}, {})", p.x, p.y)
}
