//! Line-oriented text persistence for [`DenseGraph`].
//!
//! ```text
//! 3
//! 0 2.5 ∞
//! ∞ 0 -1
//! 4 ∞ 0
//! ```
//!
//! The first line holds the vertex count `N`, followed by exactly `N` rows of
//! `N` whitespace-separated cells. A cell is either a decimal number or the
//! [`INFINITY_TOKEN`] marking "no edge". Diagonal cells must be zero.

use std::fmt::{self, Debug, Display};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use log::info;
use num_traits::{Float, Zero};

use crate::graph::dense::DenseGraph;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Token written for a cell without an edge
pub const INFINITY_TOKEN: &str = "∞";

impl<W> Display for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count())?;
        for row in self.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(weight) => write!(f, "{}", weight)?,
                    None => f.write_str(INFINITY_TOKEN)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<W> FromStr for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy + FromStr,
    <W as FromStr>::Err: Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DenseGraph::read_from(s.as_bytes())
    }
}

impl<W> DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Writes the graph in the text format
    pub fn write_to<Wr: Write>(&self, mut writer: Wr) -> Result<()>
    where
        W: Display,
    {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    /// Saves the graph to a file, replacing any existing content
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        W: Display,
    {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        info!("Saved graph with {} vertices to {}", self.vertex_count(), path.display());
        Ok(())
    }

    /// Loads a graph from a file
    ///
    /// On any error nothing is returned; there is no partially loaded graph.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        W: FromStr,
        <W as FromStr>::Err: Display,
    {
        let path = path.as_ref();
        let file = File::open(path)?;
        let graph = DenseGraph::read_from(BufReader::new(file))?;
        info!("Loaded graph with {} vertices from {}", graph.vertex_count(), path.display());
        Ok(graph)
    }

    /// Parses a graph from any buffered reader
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self>
    where
        W: FromStr,
        <W as FromStr>::Err: Display,
    {
        let mut lines = reader.lines().enumerate().map(|(idx, line)| (idx + 1, line));

        let (header_line, header) = loop {
            match lines.next() {
                None => return Err(parse_error(1, "missing vertex count")),
                Some((number, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break (number, line);
                    }
                }
            }
        };

        let vertex_count: usize = header.trim().parse().map_err(|e| {
            parse_error(
                header_line,
                format!("invalid vertex count {:?}: {}", header.trim(), e),
            )
        })?;
        if vertex_count.checked_mul(vertex_count).is_none() {
            return Err(parse_error(header_line, "vertex count too large"));
        }

        let mut weights = Vec::new();
        let mut last_line = header_line;
        for row in 0..vertex_count {
            let (number, line) = match lines.next() {
                Some((number, line)) => (number, line?),
                None => {
                    return Err(parse_error(
                        last_line + 1,
                        format!("expected {} matrix rows, found {}", vertex_count, row),
                    ))
                }
            };
            last_line = number;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != vertex_count {
                return Err(parse_error(
                    number,
                    format!("expected {} cells, found {}", vertex_count, tokens.len()),
                ));
            }

            for (col, token) in tokens.into_iter().enumerate() {
                let cell = parse_cell::<W>(token, number)?;
                if col == row && cell != Some(W::zero()) {
                    return Err(parse_error(
                        number,
                        format!("diagonal cell {} must be 0, found {:?}", col, token),
                    ));
                }
                weights.push(cell);
            }
        }

        for (number, line) in lines {
            if !line?.trim().is_empty() {
                return Err(parse_error(number, "unexpected content after matrix"));
            }
        }

        Ok(DenseGraph::from_rows(vertex_count, weights))
    }
}

fn parse_cell<W>(token: &str, line: usize) -> Result<Option<W>>
where
    W: Float + FromStr,
    <W as FromStr>::Err: Display,
{
    if token == INFINITY_TOKEN {
        return Ok(None);
    }

    let weight: W = token
        .parse()
        .map_err(|e| parse_error(line, format!("invalid weight {:?}: {}", token, e)))?;
    if !weight.is_finite() {
        return Err(parse_error(
            line,
            format!("weight {:?} is not finite; use {} for no edge", token, INFINITY_TOKEN),
        ));
    }
    Ok(Some(weight))
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}
