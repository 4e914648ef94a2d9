use std::{fmt::Debug, fs::File, io::Read, path::PathBuf};

use crate::{
    errors,
    ingest::record::{CsvColumns, Customer, Dataset},
};

// Where the raw customer bytes come from.
pub trait CustomerSource: Debug {
    fn open(&self) -> errors::Result<Box<dyn Read + Send>>;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CustomerSource for CsvFileSource {
    fn open(&self) -> errors::Result<Box<dyn Read + Send>> {
        let file = File::open(&self.path).map_err(|e| {
            errors::Errors::new(errors::ErrorCodes::SourceOpenError)
                .with_message(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Box::new(file))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Streams every row of the source into a new [`Dataset`].
///
/// Ids are assigned 1, 2, 3, ... in row order. Rows shorter or longer than the header
/// are accepted. Any error aborts the read and the rows collected so far are dropped
/// with the local buffer.
pub fn read_dataset(source: &dyn CustomerSource) -> errors::Result<Dataset> {
    let reader = source.open()?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = CsvColumns::from_headers(csv_reader.headers().map_err(map_csv_error)?);

    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();

    while csv_reader.read_record(&mut record).map_err(map_csv_error)? {
        let id = records.len() as u64 + 1;
        records.push(Customer::from_row(id, columns.extract(&record)));
    }

    Ok(Dataset::new(records))
}

fn map_csv_error(error: csv::Error) -> errors::Errors {
    let code = match error.kind() {
        csv::ErrorKind::Io(_) => errors::ErrorCodes::SourceReadError,
        _ => errors::ErrorCodes::IngestionError,
    };

    errors::Errors::new(code).with_message(error.to_string())
}
