//! Command-line arguments for the DMR ID exporter.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::export::ExportFormat;
use crate::selection::SelectionCriteria;

#[derive(Debug, Parser)]
#[command(
    name = "dmrids",
    version,
    about = "Creates a formatted file with DMR IDs that can be imported into a DMR transceiver",
    long_about = "Creates a formatted file with DMR IDs, selected by region and country codes, \
                  that can be imported into a DMR transceiver like the AnyTone D878/D578.\n\n\
                  Country codes are signed: -c 242 adds Norway, -c -242 removes it from a \
                  selected region."
)]
pub struct Cli {
    /// Download the DMR database from https://radioid.net
    #[arg(short = 'd', long = "download")]
    pub download: bool,

    /// File format for the formatted file.
    #[arg(short = 'f', long = "format", value_enum, default_value = "anytone")]
    pub format: FormatArg,

    /// Region codes added for the formatted file.
    #[arg(
        short = 'r',
        long = "region",
        value_name = "CODE",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    pub region: Vec<i64>,

    /// Country codes added (positive) or subtracted (negative) for the formatted file.
    #[arg(
        short = 'c',
        long = "country",
        value_name = "CODE",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    pub country: Vec<i64>,

    /// Local DMR database file (default: users.json).
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Output directory for the formatted file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// List the known region codes and exit.
    #[arg(long = "list-regions")]
    pub list_regions: bool,

    /// List the known country codes and exit.
    #[arg(long = "list-countries")]
    pub list_countries: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Anytone,
    Text,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Anytone => ExportFormat::Anytone,
            FormatArg::Text => ExportFormat::Text,
        }
    }
}

impl Cli {
    pub fn criteria(&self) -> SelectionCriteria {
        SelectionCriteria::new(self.region.iter().copied(), self.country.iter().copied())
    }

    /// True if nothing was asked of the program at all
    ///
    /// Any flag counts, including a non-default format or a path option.
    pub fn is_idle(&self) -> bool {
        !self.download
            && !self.list_regions
            && !self.list_countries
            && self.region.is_empty()
            && self.country.is_empty()
            && self.format == FormatArg::Anytone
            && self.database.is_none()
            && self.output_dir == Path::new(".")
    }
}
