//! Reader for CVRP instances in the TSPLIB95 keyword format.
//!
//! Only the subset needed for Euclidean CVRP is understood:
//!
//! ```text
//! NAME : toy
//! TYPE : CVRP
//! DIMENSION : 3
//! EDGE_WEIGHT_TYPE : EUC_2D
//! CAPACITY : 10
//! NODE_COORD_SECTION
//! 1 0 0
//! 2 3 4
//! 3 -3 4
//! DEMAND_SECTION
//! 1 0
//! 2 4
//! 3 6
//! DEPOT_SECTION
//! 1
//! -1
//! EOF
//! ```
//!
//! Other header keys are ignored. Without a depot section node 1 is the
//! depot; when the section lists several ids, the last one is the depot. The depot becomes node 0 and the remaining nodes are numbered
//! `1..=N` in ascending file id order.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::TsplibError;
use crate::models::{Customer, Instance};

/// Reads an instance from any buffered reader.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::tsplib::read_instance;
///
/// let text = "CAPACITY : 10\nNODE_COORD_SECTION\n1 0 0\n2 3 4\n\
///             DEMAND_SECTION\n1 0\n2 7\nEOF\n";
/// let instance = read_instance(text.as_bytes()).unwrap();
/// assert_eq!(instance.num_customers(), 1);
/// assert_eq!(instance.demand(1), 7);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
pub fn read_instance<R: BufRead>(reader: R) -> Result<Instance, TsplibError> {
    let mut data = RawData::default();
    let mut section = Section::Header;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "EOF" => break,
            "NODE_COORD_SECTION" => section = Section::Coords,
            "DEMAND_SECTION" => section = Section::Demands,
            "DEPOT_SECTION" => section = Section::Depots,
            _ => match section {
                Section::Header => data.read_header(line, line_no)?,
                Section::Coords => data.read_coord(line, line_no)?,
                Section::Demands => data.read_demand(line, line_no)?,
                Section::Depots => {
                    if data.read_depot(line, line_no)? {
                        section = Section::Header;
                    }
                }
            },
        }
    }

    data.into_instance()
}

/// Reads an instance from an in-memory string.
pub fn parse_instance(text: &str) -> Result<Instance, TsplibError> {
    read_instance(text.as_bytes())
}

/// Reads an instance from a file.
pub fn read_instance_file<P: AsRef<Path>>(path: P) -> Result<Instance, TsplibError> {
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}

#[derive(Debug, Clone, Copy)]
enum Section {
    Header,
    Coords,
    Demands,
    Depots,
}

#[derive(Debug, Default)]
struct RawData {
    dimension: Option<usize>,
    capacity: Option<i32>,
    coords: BTreeMap<usize, (f64, f64)>,
    demands: BTreeMap<usize, i32>,
    depot: Option<usize>,
}

impl RawData {
    fn read_header(&mut self, line: &str, line_no: usize) -> Result<(), TsplibError> {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| malformed(line_no, format!("expected 'KEY : VALUE', got '{line}'")))?;
        let value = value.trim();

        match key.trim() {
            "DIMENSION" => self.dimension = Some(parse(value, line_no, "DIMENSION")?),
            "CAPACITY" => self.capacity = Some(parse(value, line_no, "CAPACITY")?),
            _ => {}
        }
        Ok(())
    }

    fn read_coord(&mut self, line: &str, line_no: usize) -> Result<(), TsplibError> {
        let [id, x, y] = fields::<3>(line, line_no)?;
        self.coords.insert(
            parse(id, line_no, "node id")?,
            (parse(x, line_no, "x")?, parse(y, line_no, "y")?),
        );
        Ok(())
    }

    fn read_demand(&mut self, line: &str, line_no: usize) -> Result<(), TsplibError> {
        let [id, demand] = fields::<2>(line, line_no)?;
        self.demands
            .insert(parse(id, line_no, "node id")?, parse(demand, line_no, "demand")?);
        Ok(())
    }

    /// Returns `true` on the `-1` terminator.
    fn read_depot(&mut self, line: &str, line_no: usize) -> Result<bool, TsplibError> {
        let id: i64 = parse(line, line_no, "depot id")?;
        if id == -1 {
            return Ok(true);
        }
        let id = usize::try_from(id)
            .map_err(|_| malformed(line_no, format!("invalid depot id '{line}'")))?;
        // a later depot line overrides an earlier one
        self.depot = Some(id);
        Ok(false)
    }

    fn into_instance(self) -> Result<Instance, TsplibError> {
        let capacity = self.capacity.ok_or(TsplibError::MissingCapacity)?;
        if let Some(expected) = self.dimension {
            if expected != self.coords.len() {
                return Err(TsplibError::DimensionMismatch {
                    expected,
                    found: self.coords.len(),
                });
            }
        }
        if let Some(&id) = self.demands.keys().find(|id| !self.coords.contains_key(id)) {
            return Err(TsplibError::MissingCoordinate(id));
        }

        let depot_id = self.depot.unwrap_or(1);
        let &(dx, dy) = self
            .coords
            .get(&depot_id)
            .ok_or(TsplibError::UnknownDepot(depot_id))?;

        let customers = self
            .coords
            .iter()
            .filter(|(&id, _)| id != depot_id)
            .zip(1..)
            .map(|((&id, &(x, y)), new_id)| {
                let demand = *self.demands.get(&id).ok_or(TsplibError::MissingDemand(id))?;
                Ok(Customer::new(new_id, x, y, demand))
            })
            .collect::<Result<Vec<_>, TsplibError>>()?;

        debug!(
            customers = customers.len(),
            capacity,
            depot = depot_id,
            "read TSPLIB instance"
        );
        Ok(Instance::new(Customer::depot(dx, dy), customers, capacity)?)
    }
}

fn fields<const N: usize>(line: &str, line_no: usize) -> Result<[&str; N], TsplibError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    parts
        .try_into()
        .map_err(|_| malformed(line_no, format!("expected {N} fields, got '{line}'")))
}

fn parse<T: std::str::FromStr>(value: &str, line_no: usize, what: &str) -> Result<T, TsplibError> {
    value
        .parse()
        .map_err(|_| malformed(line_no, format!("cannot parse {what} from '{value}'")))
}

fn malformed(line: usize, message: String) -> TsplibError {
    TsplibError::Malformed { line, message }
}
