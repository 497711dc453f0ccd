//! CSV export of the long table

use csv::{Terminator, WriterBuilder};

use crate::error::{PipelineError, PipelineResult};
use crate::reshape::{OUTPUT_HEADERS, OutputTable};

/// UTF-8 byte-order mark, so spreadsheet apps detect the encoding
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize `table` as BOM-prefixed, comma-separated UTF-8
pub fn write_output_csv(table: &OutputTable) -> PipelineResult<Vec<u8>> {
    // Create CSV writer
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());

    // Write header
    wtr.write_record(OUTPUT_HEADERS)?;

    // Write data rows
    for row in table.rows() {
        wtr.write_record(row.fields())?;
    }

    let bytes = wtr.into_inner().map_err(|e| PipelineError::Export {
        format: "CSV",
        reason: e.to_string(),
    })?;

    log::debug!("CSV output: {} rows, {} bytes", table.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reshape::reshape;
    use crate::table::fixtures::table;

    #[test]
    fn test_csv_layout() {
        let input = table(&["PROMOTER", "UE100", "QE200"], &[&["Ana", "A", ""], &["Bob", "B", "C"]]);
        let out = reshape(&input, "PROMOTER", &["UE100".into(), "QE200".into()]).unwrap();

        let bytes = write_output_csv(&out).unwrap();

        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "PROMOTER,COD PRODUS,LITERA\nAna,UE100,A\nBob,QE200,C\nBob,UE100,B\n"
        );
    }

    #[test]
    fn test_csv_quotes_when_needed() {
        let input = table(&["PROMOTER", "UE100"], &[&["Popescu, Ana", "A\"1"]]);
        let out = reshape(&input, "PROMOTER", &["UE100".into()]).unwrap();

        let bytes = write_output_csv(&out).unwrap();

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "PROMOTER,COD PRODUS,LITERA\n\"Popescu, Ana\",UE100,\"A\"\"1\"\n");
    }

    #[test]
    fn test_csv_reads_back() {
        let input = table(&["PROMOTER", "UE100"], &[&["Ăna", "Ș"]]);
        let out = reshape(&input, "PROMOTER", &["UE100".into()]).unwrap();

        let bytes = write_output_csv(&out).unwrap();

        let mut rdr = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
        let records: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "Ăna");
        assert_eq!(&records[0][2], "Ș");
    }
}
