use crate::{gain::Gain, parser::parse, record, record::Header};

const END_OF_FILE: &str = "#FIL_SLUT";

/// An SRU document under construction: record blocks in input order, each
/// numbered as it is pushed.
#[derive(Debug)]
pub struct SruFile {
    header: Header,
    records: Vec<String>,
}

impl SruFile {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// Render a gain into its record block, assigning the next 1-based index.
    pub fn push(&mut self, gain: &Gain) {
        let index = self.records.len() + 1;
        self.records.push(record::render(&self.header, gain, index));
    }

    /// Write the whole document in one operation: every record in push
    /// order, then the end-of-file marker with no trailing newline.
    /// With no records the document is the bare marker.
    pub fn serialize(&self, mut output: impl std::io::Write) -> std::io::Result<()> {
        let mut document = self.records.concat();
        document.push_str(END_OF_FILE);
        output.write_all(document.as_bytes())
    }
}

/// Convert a capital-gains CSV into an SRU document on `output`.
///
/// Reads every row through `rdr`, renders one record per row and terminates
/// the file with `#FIL_SLUT`. Fatal on the first unparseable row; nothing
/// is written to `output` in that case.
pub fn convert<R, W>(
    rdr: csv::Reader<R>,
    output: W,
    header: Header,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: std::io::Read,
    W: std::io::Write,
{
    let mut sru = SruFile::new(header);
    for gain in parse(rdr) {
        sru.push(&gain?);
    }
    sru.serialize(output)?;
    Ok(())
}
