//! Interactive city entry and lookup loop.
//!
//! The session only talks to the index through `insert` and `find`.

use anyhow::{bail, Context};
use quadtree::{Entry, Index, IndexError, Point};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

/// Prompt-driven session over any line reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read cities into `index`, then answer lookups until the user stops.
    pub fn run(&mut self, index: &mut Index) -> anyhow::Result<()> {
        self.read_cities(index)?;
        self.lookup_loop(index)
    }

    /// Ask for a city count followed by each city's name and coordinates.
    ///
    /// Returns how many cities were stored. Cities outside the world are
    /// reported and skipped.
    pub fn read_cities(&mut self, index: &mut Index) -> anyhow::Result<usize> {
        let count: usize = self.ask_parsed("Enter the number of cities: ")?;
        let mut stored = 0;

        for _ in 0..count {
            let name = self.ask("Enter the name of the city: ")?;
            let x: f64 = self.ask_parsed(&format!("Enter the x coordinate of {name}: "))?;
            let y: f64 = self.ask_parsed(&format!("Enter the y coordinate of {name}: "))?;

            match index.insert(Entry::new(name.clone(), x, y)) {
                Ok(()) => stored += 1,
                Err(err @ IndexError::OutOfBounds { .. }) => {
                    warn!(city = %name, "Skipping city: {err}");
                    writeln!(self.output, "Skipping {name}: {err}")?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        debug!(stored, requested = count, "Finished reading cities");
        Ok(stored)
    }

    /// Repeatedly find cities by exact coordinates.
    pub fn lookup_loop(&mut self, index: &mut Index) -> anyhow::Result<()> {
        loop {
            let x: f64 = self.ask_parsed("Enter the x coordinate of the city to find: ")?;
            let y: f64 = self.ask_parsed("Enter the y coordinate of the city to find: ")?;

            match index.find(Point::new(x, y)) {
                Some(city) => writeln!(self.output, "Found city: {}", city.label())?,
                None => writeln!(self.output, "City not found")?,
            }

            let answer = self.ask("Do you want to search for another city? (yes/no): ")?;
            if !answer.eq_ignore_ascii_case("yes") {
                return Ok(());
            }
        }
    }

    /// Print `prompt` and read one trimmed line. End of input is an error.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            bail!("input ended while waiting for: {}", prompt.trim_end());
        }
        Ok(line.trim().to_string())
    }

    /// Like [`ask`](Self::ask), re-prompting until the answer parses.
    fn ask_parsed<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid number: {answer:?}")?,
            }
        }
    }

    /// Hand back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadtree::Region;
    use std::io::Cursor;

    fn index() -> Index {
        Index::new(Region::new(0.0, 0.0, 100.0, 100.0).unwrap(), 1).unwrap()
    }

    fn run(script: &str, index: &mut Index) -> (anyhow::Result<()>, String) {
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new());
        let result = session.run(index);
        let (_, out) = session.into_parts();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session() {
        let mut index = index();
        let script = "3\nA\n10\n10\nB\n20\n20\nC\n10\n10.0001\n\
                      20\n20\nyes\n50\n50\nyes\n10\n10\nno\n";
        let (result, out) = run(script, &mut index);

        result.unwrap();
        assert_eq!(index.len(), 3);
        assert!(out.contains("Found city: B"));
        assert_eq!(out.matches("Found city: ").count(), 2);
        assert_eq!(out.matches("City not found").count(), 1);
        assert_eq!(index.last_found().unwrap().label(), "A");
    }

    #[test]
    fn test_out_of_bounds_city_is_skipped() {
        let mut index = index();
        let (result, out) = run("2\nFar\n150\n10\nNear\n5\n5\n5\n5\nno\n", &mut index);

        result.unwrap();
        assert_eq!(index.len(), 1);
        assert!(out.contains("Skipping Far"));
        assert!(out.contains("Found city: Near"));
    }

    #[test]
    fn test_bad_number_reprompts() {
        let mut index = index();
        let (result, out) = run("1\nA\nten\n10\n10\n10\n10\nNO\n", &mut index);

        result.unwrap();
        assert!(out.contains("Invalid number: \"ten\""));
        assert!(out.contains("Found city: A"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut index = index();
        let (result, _) = run("2\nA\n1\n1\n", &mut index);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("input ended"));
        assert_eq!(index.len(), 1);
    }
}
