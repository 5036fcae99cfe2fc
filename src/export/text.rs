// Fixed-width text listing
//
// Nine left-justified columns, each truncated or padded to its width:
// fname(30) name(30) country(30) callsign(10) city(30) surname(30)
// radio_id(10) id(10) state(30)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DmrError, Result};
use crate::registry::DmrUser;

pub const FIELD_WIDTHS: [usize; 9] = [30, 30, 30, 10, 30, 30, 10, 10, 30];

pub const TEXT_HEADER: [&str; 9] = [
    "fname", "name", "country", "callsign", "city", "surname", "radio_id", "id", "state",
];

pub const DEFAULT_FILL: char = ' ';

/// Left-justify `text` in exactly `width` characters
pub fn left_just(text: &str, width: usize, fill: char) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(fill).take(width - len));
    out
}

fn render_line(fields: &[&str; 9], fill: char) -> String {
    fields
        .iter()
        .zip(FIELD_WIDTHS)
        .map(|(field, width)| left_just(field, width, fill))
        .collect()
}

/// Header line for the listing
pub fn header_line(fill: char) -> String {
    render_line(&TEXT_HEADER, fill)
}

/// One fixed-width line for a user
pub fn user_line(user: &DmrUser, fill: char) -> String {
    let radio_id = user.radio_id.to_string();
    let id = user.id.to_string();
    render_line(
        &[
            &user.fname,
            &user.name,
            &user.country,
            &user.callsign,
            &user.city,
            &user.surname,
            &radio_id,
            &id,
            &user.state,
        ],
        fill,
    )
}

/// Write the header, a blank line and one line per user; returns the number of users
pub fn write_text<W: Write>(
    users: &[DmrUser],
    writer: &mut W,
    fill: char,
) -> std::io::Result<usize> {
    writeln!(writer, "{}\n", header_line(fill))?;
    for user in users {
        writeln!(writer, "{}", user_line(user, fill))?;
    }
    writer.flush()?;
    Ok(users.len())
}

pub(crate) fn export_text(users: &[DmrUser], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| DmrError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_text(users, &mut writer, DEFAULT_FILL).map_err(|e| DmrError::io(path, e))
}
