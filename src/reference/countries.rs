// DMR Country Codes
// Source: radioid.net country allocations (three-digit prefixes derived from ITU MCCs)
//
// The first three digits of a DMR ID identify the issuing country. A country
// can own more than one prefix (e.g. the United States uses 310-316).
//
// Fields:
// - code: three-digit DMR country prefix (first digit is the region)
// - name: country name as shown in the selection report

/// A DMR country prefix allocation
#[derive(Debug, Clone)]
pub struct DmrCountry {
    pub code: u16,
    pub name: &'static str,
}

/// Known DMR country prefixes
pub const DMR_COUNTRIES: &[DmrCountry] = &[
    // =========================================================================
    // EUROPE (region 2)
    // =========================================================================
    DmrCountry { code: 202, name: "Greece" },
    DmrCountry { code: 204, name: "Netherlands" },
    DmrCountry { code: 206, name: "Belgium" },
    DmrCountry { code: 208, name: "France" },
    DmrCountry { code: 212, name: "Monaco" },
    DmrCountry { code: 213, name: "Andorra" },
    DmrCountry { code: 214, name: "Spain" },
    DmrCountry { code: 216, name: "Hungary" },
    DmrCountry { code: 218, name: "Bosnia and Herzegovina" },
    DmrCountry { code: 219, name: "Croatia" },
    DmrCountry { code: 220, name: "Serbia" },
    DmrCountry { code: 221, name: "Kosovo" },
    DmrCountry { code: 222, name: "Italy" },
    DmrCountry { code: 225, name: "Vatican City" },
    DmrCountry { code: 226, name: "Romania" },
    DmrCountry { code: 228, name: "Switzerland" },
    DmrCountry { code: 230, name: "Czech Republic" },
    DmrCountry { code: 231, name: "Slovakia" },
    DmrCountry { code: 232, name: "Austria" },
    DmrCountry { code: 234, name: "United Kingdom" },
    DmrCountry { code: 235, name: "United Kingdom" },
    DmrCountry { code: 238, name: "Denmark" },
    DmrCountry { code: 240, name: "Sweden" },
    DmrCountry { code: 242, name: "Norway" },
    DmrCountry { code: 244, name: "Finland" },
    DmrCountry { code: 246, name: "Lithuania" },
    DmrCountry { code: 247, name: "Latvia" },
    DmrCountry { code: 248, name: "Estonia" },
    DmrCountry { code: 250, name: "Russia" },
    DmrCountry { code: 255, name: "Ukraine" },
    DmrCountry { code: 257, name: "Belarus" },
    DmrCountry { code: 259, name: "Moldova" },
    DmrCountry { code: 260, name: "Poland" },
    DmrCountry { code: 262, name: "Germany" },
    DmrCountry { code: 263, name: "Germany" },
    DmrCountry { code: 264, name: "Germany" },
    DmrCountry { code: 266, name: "Gibraltar" },
    DmrCountry { code: 268, name: "Portugal" },
    DmrCountry { code: 270, name: "Luxembourg" },
    DmrCountry { code: 272, name: "Ireland" },
    DmrCountry { code: 274, name: "Iceland" },
    DmrCountry { code: 276, name: "Albania" },
    DmrCountry { code: 278, name: "Malta" },
    DmrCountry { code: 280, name: "Cyprus" },
    DmrCountry { code: 282, name: "Georgia" },
    DmrCountry { code: 283, name: "Armenia" },
    DmrCountry { code: 284, name: "Bulgaria" },
    DmrCountry { code: 286, name: "Turkey" },
    DmrCountry { code: 288, name: "Faroe Islands" },
    DmrCountry { code: 290, name: "Greenland" },
    DmrCountry { code: 292, name: "San Marino" },
    DmrCountry { code: 293, name: "Slovenia" },
    DmrCountry { code: 294, name: "North Macedonia" },
    DmrCountry { code: 295, name: "Liechtenstein" },
    DmrCountry { code: 297, name: "Montenegro" },
    
    // =========================================================================
    // NORTH AMERICA AND CARIBBEAN (region 3)
    // =========================================================================
    DmrCountry { code: 301, name: "Canada" },
    DmrCountry { code: 302, name: "Canada" },
    DmrCountry { code: 308, name: "Saint Pierre and Miquelon" },
    DmrCountry { code: 310, name: "United States" },
    DmrCountry { code: 311, name: "United States" },
    DmrCountry { code: 312, name: "United States" },
    DmrCountry { code: 313, name: "United States" },
    DmrCountry { code: 314, name: "United States" },
    DmrCountry { code: 315, name: "United States" },
    DmrCountry { code: 316, name: "United States" },
    DmrCountry { code: 330, name: "Puerto Rico" },
    DmrCountry { code: 334, name: "Mexico" },
    DmrCountry { code: 338, name: "Jamaica" },
    DmrCountry { code: 340, name: "Guadeloupe" },
    DmrCountry { code: 342, name: "Barbados" },
    DmrCountry { code: 344, name: "Antigua and Barbuda" },
    DmrCountry { code: 346, name: "Cayman Islands" },
    DmrCountry { code: 348, name: "British Virgin Islands" },
    DmrCountry { code: 350, name: "Bermuda" },
    DmrCountry { code: 352, name: "Grenada" },
    DmrCountry { code: 354, name: "Montserrat" },
    DmrCountry { code: 356, name: "Saint Kitts and Nevis" },
    DmrCountry { code: 358, name: "Saint Lucia" },
    DmrCountry { code: 360, name: "Saint Vincent and the Grenadines" },
    DmrCountry { code: 362, name: "Curacao" },
    DmrCountry { code: 363, name: "Aruba" },
    DmrCountry { code: 364, name: "Bahamas" },
    DmrCountry { code: 365, name: "Anguilla" },
    DmrCountry { code: 366, name: "Dominica" },
    DmrCountry { code: 368, name: "Cuba" },
    DmrCountry { code: 370, name: "Dominican Republic" },
    DmrCountry { code: 372, name: "Haiti" },
    DmrCountry { code: 374, name: "Trinidad and Tobago" },
    DmrCountry { code: 376, name: "Turks and Caicos Islands" },
    
    // =========================================================================
    // ASIA AND MIDDLE EAST (region 4)
    // =========================================================================
    DmrCountry { code: 401, name: "Kazakhstan" },
    DmrCountry { code: 404, name: "India" },
    DmrCountry { code: 405, name: "India" },
    DmrCountry { code: 410, name: "Pakistan" },
    DmrCountry { code: 412, name: "Afghanistan" },
    DmrCountry { code: 413, name: "Sri Lanka" },
    DmrCountry { code: 414, name: "Myanmar" },
    DmrCountry { code: 415, name: "Lebanon" },
    DmrCountry { code: 416, name: "Jordan" },
    DmrCountry { code: 417, name: "Syria" },
    DmrCountry { code: 418, name: "Iraq" },
    DmrCountry { code: 419, name: "Kuwait" },
    DmrCountry { code: 420, name: "Saudi Arabia" },
    DmrCountry { code: 421, name: "Yemen" },
    DmrCountry { code: 422, name: "Oman" },
    DmrCountry { code: 424, name: "United Arab Emirates" },
    DmrCountry { code: 425, name: "Israel" },
    DmrCountry { code: 426, name: "Bahrain" },
    DmrCountry { code: 427, name: "Qatar" },
    DmrCountry { code: 428, name: "Mongolia" },
    DmrCountry { code: 429, name: "Nepal" },
    DmrCountry { code: 432, name: "Iran" },
    DmrCountry { code: 434, name: "Uzbekistan" },
    DmrCountry { code: 436, name: "Tajikistan" },
    DmrCountry { code: 437, name: "Kyrgyzstan" },
    DmrCountry { code: 438, name: "Turkmenistan" },
    DmrCountry { code: 440, name: "Japan" },
    DmrCountry { code: 441, name: "Japan" },
    DmrCountry { code: 450, name: "Korea, Republic of" },
    DmrCountry { code: 452, name: "Vietnam" },
    DmrCountry { code: 454, name: "Hong Kong" },
    DmrCountry { code: 455, name: "Macau" },
    DmrCountry { code: 456, name: "Cambodia" },
    DmrCountry { code: 457, name: "Laos" },
    DmrCountry { code: 460, name: "China" },
    DmrCountry { code: 466, name: "Taiwan" },
    DmrCountry { code: 470, name: "Bangladesh" },
    DmrCountry { code: 472, name: "Maldives" },
    
    // =========================================================================
    // OCEANIA AND SOUTH-EAST ASIA (region 5)
    // =========================================================================
    DmrCountry { code: 502, name: "Malaysia" },
    DmrCountry { code: 505, name: "Australia" },
    DmrCountry { code: 510, name: "Indonesia" },
    DmrCountry { code: 515, name: "Philippines" },
    DmrCountry { code: 520, name: "Thailand" },
    DmrCountry { code: 525, name: "Singapore" },
    DmrCountry { code: 528, name: "Brunei" },
    DmrCountry { code: 530, name: "New Zealand" },
    DmrCountry { code: 537, name: "Papua New Guinea" },
    DmrCountry { code: 539, name: "Tonga" },
    DmrCountry { code: 541, name: "Vanuatu" },
    DmrCountry { code: 542, name: "Fiji" },
    DmrCountry { code: 544, name: "American Samoa" },
    DmrCountry { code: 546, name: "New Caledonia" },
    DmrCountry { code: 547, name: "French Polynesia" },
    DmrCountry { code: 550, name: "Micronesia" },
    DmrCountry { code: 551, name: "Marshall Islands" },
    DmrCountry { code: 552, name: "Palau" },
    
    // =========================================================================
    // AFRICA (region 6)
    // =========================================================================
    DmrCountry { code: 602, name: "Egypt" },
    DmrCountry { code: 603, name: "Algeria" },
    DmrCountry { code: 604, name: "Morocco" },
    DmrCountry { code: 605, name: "Tunisia" },
    DmrCountry { code: 606, name: "Libya" },
    DmrCountry { code: 607, name: "Gambia" },
    DmrCountry { code: 608, name: "Senegal" },
    DmrCountry { code: 609, name: "Mauritania" },
    DmrCountry { code: 610, name: "Mali" },
    DmrCountry { code: 611, name: "Guinea" },
    DmrCountry { code: 612, name: "Ivory Coast" },
    DmrCountry { code: 613, name: "Burkina Faso" },
    DmrCountry { code: 614, name: "Niger" },
    DmrCountry { code: 615, name: "Togo" },
    DmrCountry { code: 616, name: "Benin" },
    DmrCountry { code: 617, name: "Mauritius" },
    DmrCountry { code: 618, name: "Liberia" },
    DmrCountry { code: 619, name: "Sierra Leone" },
    DmrCountry { code: 620, name: "Ghana" },
    DmrCountry { code: 621, name: "Nigeria" },
    DmrCountry { code: 622, name: "Chad" },
    DmrCountry { code: 623, name: "Central African Republic" },
    DmrCountry { code: 624, name: "Cameroon" },
    DmrCountry { code: 625, name: "Cape Verde" },
    DmrCountry { code: 630, name: "Congo, Democratic Republic" },
    DmrCountry { code: 631, name: "Angola" },
    DmrCountry { code: 633, name: "Seychelles" },
    DmrCountry { code: 634, name: "Sudan" },
    DmrCountry { code: 635, name: "Rwanda" },
    DmrCountry { code: 636, name: "Ethiopia" },
    DmrCountry { code: 637, name: "Somalia" },
    DmrCountry { code: 639, name: "Kenya" },
    DmrCountry { code: 640, name: "Tanzania" },
    DmrCountry { code: 641, name: "Uganda" },
    DmrCountry { code: 642, name: "Burundi" },
    DmrCountry { code: 643, name: "Mozambique" },
    DmrCountry { code: 645, name: "Zambia" },
    DmrCountry { code: 646, name: "Madagascar" },
    DmrCountry { code: 647, name: "Reunion" },
    DmrCountry { code: 648, name: "Zimbabwe" },
    DmrCountry { code: 649, name: "Namibia" },
    DmrCountry { code: 650, name: "Malawi" },
    DmrCountry { code: 651, name: "Lesotho" },
    DmrCountry { code: 652, name: "Botswana" },
    DmrCountry { code: 653, name: "Eswatini" },
    DmrCountry { code: 655, name: "South Africa" },
    
    // =========================================================================
    // CENTRAL AND SOUTH AMERICA (region 7)
    // =========================================================================
    DmrCountry { code: 702, name: "Belize" },
    DmrCountry { code: 704, name: "Guatemala" },
    DmrCountry { code: 706, name: "El Salvador" },
    DmrCountry { code: 708, name: "Honduras" },
    DmrCountry { code: 710, name: "Nicaragua" },
    DmrCountry { code: 712, name: "Costa Rica" },
    DmrCountry { code: 714, name: "Panama" },
    DmrCountry { code: 716, name: "Peru" },
    DmrCountry { code: 722, name: "Argentina" },
    DmrCountry { code: 724, name: "Brazil" },
    DmrCountry { code: 730, name: "Chile" },
    DmrCountry { code: 732, name: "Colombia" },
    DmrCountry { code: 734, name: "Venezuela" },
    DmrCountry { code: 736, name: "Bolivia" },
    DmrCountry { code: 738, name: "Guyana" },
    DmrCountry { code: 740, name: "Ecuador" },
    DmrCountry { code: 744, name: "Paraguay" },
    DmrCountry { code: 746, name: "Suriname" },
    DmrCountry { code: 748, name: "Uruguay" },
];
