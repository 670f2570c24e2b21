//! CSV position writer.
//!
//! One column triple per body (`<name>X,<name>Y,<name>Z`, in collection
//! order), then one row per completed simulation step with each body's
//! position components.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::output::StepSink;
use crate::simulation::states::Body;

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (or overwrite) the output file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()).into())
    }
}

impl<W: Write> StepSink for CsvSink<W> {
    fn begin(&mut self, bodies: &[Body]) -> Result<()> {
        let mut header = Vec::with_capacity(bodies.len() * 3);
        for body in bodies {
            header.push(format!("{}X", body.name));
            header.push(format!("{}Y", body.name));
            header.push(format!("{}Z", body.name));
        }
        self.writer.write_record(&header)?;
        Ok(())
    }

    fn record_step(&mut self, bodies: &[Body]) -> Result<()> {
        let mut record = Vec::with_capacity(bodies.len() * 3);
        for body in bodies {
            record.push(body.position.x()?.to_string());
            record.push(body.position.y()?.to_string());
            record.push(body.position.z()?.to_string());
        }
        self.writer.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
