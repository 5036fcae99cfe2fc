// AnyTone CSV contact list
//
// Column order is fixed by the AnyTone CPS importer:
// Radio ID, Callsign, Name, City, State, Country, Remarks, Call Type, Call Alert

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{DmrError, Result};
use crate::registry::DmrUser;

pub const ANYTONE_HEADER: [&str; 9] = [
    "Radio ID",
    "Callsign",
    "Name",
    "City",
    "State",
    "Country",
    "Remarks",
    "Call Type",
    "Call Alert",
];

/// Write the header and one row per user; returns the number of rows
pub fn write_anytone<W: Write>(users: &[DmrUser], writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(ANYTONE_HEADER)?;
    for user in users {
        let radio_id = user.radio_id.to_string();
        wtr.write_record([
            radio_id.as_str(),
            user.callsign.as_str(),
            user.fname.as_str(),
            user.city.as_str(),
            user.state.as_str(),
            user.country.as_str(),
            "",
            "Private Call",
            "None",
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(users.len())
}

pub(crate) fn export_anytone(users: &[DmrUser], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| DmrError::io(path, e))?;
    write_anytone(users, file)
}
