// DMR Region Codes
// Source: radioid.net / DMR-MARC numbering plan
//
// The first digit of every DMR ID is its region. Regions group the country
// prefixes in countries.rs: region 2 owns 2xx, region 3 owns 3xx, and so on.

/// A DMR numbering region
#[derive(Debug, Clone)]
pub struct DmrRegion {
    /// Leading digit of the DMR ID
    pub code: u8,
    pub name: &'static str,
}

/// Known DMR regions
pub const DMR_REGIONS: &[DmrRegion] = &[
    DmrRegion { code: 2, name: "Europe" },
    DmrRegion { code: 3, name: "North America and Caribbean" },
    DmrRegion { code: 4, name: "Asia and Middle East" },
    DmrRegion { code: 5, name: "Oceania and South-East Asia" },
    DmrRegion { code: 6, name: "Africa" },
    DmrRegion { code: 7, name: "Central and South America" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_are_single_digits() {
        assert!(DMR_REGIONS.iter().all(|r| r.code <= 9));
        assert_eq!(DMR_REGIONS[0].name, "Europe");
        assert!(!DMR_REGIONS.iter().any(|r| r.code == 0 || r.code == 9));
    }
}
