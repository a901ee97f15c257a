// TSPLIB point source: reads NODE_COORD_SECTION records into a position set

use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{Point, PositionSet};

/// TSPLIB coordinates are roughly 1000x the latitude/longitude they describe
pub const COORDINATE_SCALE: f64 = 0.001;

const COORD_SECTION_MARKER: &str = "NODE_COORD_SECTION";
const END_MARKER: &str = "EOF";

/// Anything that can supply the ordered position set
pub trait PositionProvider {
    fn positions(&self) -> Result<PositionSet>;
}

impl PositionProvider for PositionSet {
    fn positions(&self) -> Result<PositionSet> {
        Ok(self.clone())
    }
}

/// Header fields found before the coordinate section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TspHeader {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub problem_type: Option<String>,
    pub dimension: Option<usize>,
    pub edge_weight_type: Option<String>,
}

/// A parsed TSPLIB file
#[derive(Debug, Clone)]
pub struct TspData {
    pub header: TspHeader,
    pub positions: PositionSet,
}

/// A TSPLIB file on disk
#[derive(Debug, Clone)]
pub struct TspFile {
    path: PathBuf,
}

impl TspFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole file
    pub fn load(&self) -> Result<TspData> {
        let file = File::open(&self.path).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("failed to open {}: {e}", self.path.display()),
            ))
        })?;
        log::debug!("reading positions from {}", self.path.display());
        parse_tsp_reader(io::BufReader::new(file))
    }
}

impl PositionProvider for TspFile {
    fn positions(&self) -> Result<PositionSet> {
        self.load().map(|data| data.positions)
    }
}

/// Parses TSPLIB text held in memory
pub fn parse_tsp(input: &str) -> Result<TspData> {
    parse_tsp_reader(input.as_bytes())
}

/// Parses TSPLIB text from any buffered reader
pub fn parse_tsp_reader<R: BufRead>(reader: R) -> Result<TspData> {
    let mut header = TspHeader::default();
    let mut points = Vec::new();
    let mut in_coords = false;
    let mut saw_end = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        if line.contains(END_MARKER) {
            saw_end = true;
            break;
        }
        if in_coords {
            if line.trim().is_empty() {
                continue;
            }
            points.push(parse_record(&line, line_no)?);
        } else if line.contains(COORD_SECTION_MARKER) {
            in_coords = true;
        } else {
            apply_header_line(&mut header, &line);
        }
    }

    if !saw_end {
        log::warn!("tsp: no {END_MARKER} marker, using all records up to the end of input");
    }
    if !in_coords {
        return Err(Error::invalid_data(format!(
            "missing {COORD_SECTION_MARKER}"
        )));
    }
    if let Some(dimension) = header.dimension {
        if dimension != points.len() {
            log::warn!(
                "tsp: DIMENSION is {dimension} but {} coordinate records were read",
                points.len()
            );
        }
    }

    let positions = PositionSet::new(points)?;
    log::debug!(
        "tsp: parsed {} positions (name={:?})",
        positions.len(),
        header.name
    );
    Ok(TspData { header, positions })
}

/// `id x y`: the last two tokens are the coordinates and everything before is the id
fn parse_record(line: &str, line_no: usize) -> Result<Point> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(Error::invalid_data(format!(
            "line {line_no}: expected `id x y`, got {line:?}"
        )));
    }

    let (id_parts, coords) = parts.split_at(parts.len() - 2);
    let id_text = id_parts.join(" ");
    let id = id_text.parse::<usize>().map_err(|e| {
        Error::invalid_data(format!("line {line_no}: bad node id {id_text:?}: {e}"))
    })?;
    let index = id
        .checked_sub(1)
        .ok_or_else(|| Error::invalid_data(format!("line {line_no}: node ids start at 1")))?;

    let x = parse_coordinate(coords[0], line_no)?;
    let y = parse_coordinate(coords[1], line_no)?;

    // x carries the latitude and y the longitude
    Ok(Point::new(index, x * COORDINATE_SCALE, y * COORDINATE_SCALE))
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| Error::invalid_data(format!("line {line_no}: bad coordinate {token:?}: {e}")))
}

fn apply_header_line(header: &mut TspHeader, line: &str) {
    let Some((key, value)) = line.split_once(':') else {
        return;
    };
    let value = value.trim().to_string();

    match key.trim() {
        "NAME" => header.name = Some(value),
        "COMMENT" => header.comment = Some(value),
        "TYPE" => header.problem_type = Some(value),
        "DIMENSION" => match value.parse() {
            Ok(dimension) => header.dimension = Some(dimension),
            Err(_) => log::warn!("tsp: ignoring unparsable DIMENSION {value:?}"),
        },
        "EDGE_WEIGHT_TYPE" => header.edge_weight_type = Some(value),
        _ => {}
    }
}
