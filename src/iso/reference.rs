//! ISO 3166-1 reference codes.

use hashbrown::{HashMap, HashSet};
use std::sync::LazyLock;

/// Source of authoritative ISO 3166-1 codes.
///
/// Codes are expected in upper case.
pub trait IsoReference: Send + Sync {
    fn is_alpha2(&self, code: &str) -> bool;

    fn is_alpha3(&self, code: &str) -> bool;

    fn alpha2_for_alpha3(&self, alpha3: &str) -> Option<&str>;
}

/// The officially assigned ISO 3166-1 codes
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166;

struct Tables {
    alpha2: HashSet<&'static str>,
    alpha3_to_alpha2: HashMap<&'static str, &'static str>,
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| Tables {
    alpha2: COUNTRY_CODES.iter().map(|c| c.alpha2).collect(),
    alpha3_to_alpha2: COUNTRY_CODES.iter().map(|c| (c.alpha3, c.alpha2)).collect(),
});

impl Iso3166 {
    /// All entries, in alpha-2 order
    pub fn entries(&self) -> &'static [CountryCode] {
        &COUNTRY_CODES
    }
}

impl IsoReference for Iso3166 {
    fn is_alpha2(&self, code: &str) -> bool {
        TABLES.alpha2.contains(code)
    }

    fn is_alpha3(&self, code: &str) -> bool {
        TABLES.alpha3_to_alpha2.contains_key(code)
    }

    fn alpha2_for_alpha3(&self, alpha3: &str) -> Option<&str> {
        TABLES.alpha3_to_alpha2.get(alpha3).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
}

const fn cc(alpha2: &'static str, alpha3: &'static str, name: &'static str) -> CountryCode {
    CountryCode {
        alpha2,
        alpha3,
        name,
    }
}

const COUNTRY_CODES: [CountryCode; 249] = [
    cc("AD", "AND", "Andorra"),
    cc("AE", "ARE", "United Arab Emirates"),
    cc("AF", "AFG", "Afghanistan"),
    cc("AG", "ATG", "Antigua and Barbuda"),
    cc("AI", "AIA", "Anguilla"),
    cc("AL", "ALB", "Albania"),
    cc("AM", "ARM", "Armenia"),
    cc("AO", "AGO", "Angola"),
    cc("AQ", "ATA", "Antarctica"),
    cc("AR", "ARG", "Argentina"),
    cc("AS", "ASM", "American Samoa"),
    cc("AT", "AUT", "Austria"),
    cc("AU", "AUS", "Australia"),
    cc("AW", "ABW", "Aruba"),
    cc("AX", "ALA", "Åland Islands"),
    cc("AZ", "AZE", "Azerbaijan"),
    cc("BA", "BIH", "Bosnia and Herzegovina"),
    cc("BB", "BRB", "Barbados"),
    cc("BD", "BGD", "Bangladesh"),
    cc("BE", "BEL", "Belgium"),
    cc("BF", "BFA", "Burkina Faso"),
    cc("BG", "BGR", "Bulgaria"),
    cc("BH", "BHR", "Bahrain"),
    cc("BI", "BDI", "Burundi"),
    cc("BJ", "BEN", "Benin"),
    cc("BL", "BLM", "Saint Barthélemy"),
    cc("BM", "BMU", "Bermuda"),
    cc("BN", "BRN", "Brunei Darussalam"),
    cc("BO", "BOL", "Bolivia"),
    cc("BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    cc("BR", "BRA", "Brazil"),
    cc("BS", "BHS", "Bahamas"),
    cc("BT", "BTN", "Bhutan"),
    cc("BV", "BVT", "Bouvet Island"),
    cc("BW", "BWA", "Botswana"),
    cc("BY", "BLR", "Belarus"),
    cc("BZ", "BLZ", "Belize"),
    cc("CA", "CAN", "Canada"),
    cc("CC", "CCK", "Cocos (Keeling) Islands"),
    cc("CD", "COD", "Congo, Democratic Republic of the"),
    cc("CF", "CAF", "Central African Republic"),
    cc("CG", "COG", "Congo"),
    cc("CH", "CHE", "Switzerland"),
    cc("CI", "CIV", "Côte d'Ivoire"),
    cc("CK", "COK", "Cook Islands"),
    cc("CL", "CHL", "Chile"),
    cc("CM", "CMR", "Cameroon"),
    cc("CN", "CHN", "China"),
    cc("CO", "COL", "Colombia"),
    cc("CR", "CRI", "Costa Rica"),
    cc("CU", "CUB", "Cuba"),
    cc("CV", "CPV", "Cabo Verde"),
    cc("CW", "CUW", "Curaçao"),
    cc("CX", "CXR", "Christmas Island"),
    cc("CY", "CYP", "Cyprus"),
    cc("CZ", "CZE", "Czechia"),
    cc("DE", "DEU", "Germany"),
    cc("DJ", "DJI", "Djibouti"),
    cc("DK", "DNK", "Denmark"),
    cc("DM", "DMA", "Dominica"),
    cc("DO", "DOM", "Dominican Republic"),
    cc("DZ", "DZA", "Algeria"),
    cc("EC", "ECU", "Ecuador"),
    cc("EE", "EST", "Estonia"),
    cc("EG", "EGY", "Egypt"),
    cc("EH", "ESH", "Western Sahara"),
    cc("ER", "ERI", "Eritrea"),
    cc("ES", "ESP", "Spain"),
    cc("ET", "ETH", "Ethiopia"),
    cc("FI", "FIN", "Finland"),
    cc("FJ", "FJI", "Fiji"),
    cc("FK", "FLK", "Falkland Islands (Malvinas)"),
    cc("FM", "FSM", "Micronesia"),
    cc("FO", "FRO", "Faroe Islands"),
    cc("FR", "FRA", "France"),
    cc("GA", "GAB", "Gabon"),
    cc("GB", "GBR", "United Kingdom"),
    cc("GD", "GRD", "Grenada"),
    cc("GE", "GEO", "Georgia"),
    cc("GF", "GUF", "French Guiana"),
    cc("GG", "GGY", "Guernsey"),
    cc("GH", "GHA", "Ghana"),
    cc("GI", "GIB", "Gibraltar"),
    cc("GL", "GRL", "Greenland"),
    cc("GM", "GMB", "Gambia"),
    cc("GN", "GIN", "Guinea"),
    cc("GP", "GLP", "Guadeloupe"),
    cc("GQ", "GNQ", "Equatorial Guinea"),
    cc("GR", "GRC", "Greece"),
    cc("GS", "SGS", "South Georgia and the South Sandwich Islands"),
    cc("GT", "GTM", "Guatemala"),
    cc("GU", "GUM", "Guam"),
    cc("GW", "GNB", "Guinea-Bissau"),
    cc("GY", "GUY", "Guyana"),
    cc("HK", "HKG", "Hong Kong"),
    cc("HM", "HMD", "Heard Island and McDonald Islands"),
    cc("HN", "HND", "Honduras"),
    cc("HR", "HRV", "Croatia"),
    cc("HT", "HTI", "Haiti"),
    cc("HU", "HUN", "Hungary"),
    cc("ID", "IDN", "Indonesia"),
    cc("IE", "IRL", "Ireland"),
    cc("IL", "ISR", "Israel"),
    cc("IM", "IMN", "Isle of Man"),
    cc("IN", "IND", "India"),
    cc("IO", "IOT", "British Indian Ocean Territory"),
    cc("IQ", "IRQ", "Iraq"),
    cc("IR", "IRN", "Iran"),
    cc("IS", "ISL", "Iceland"),
    cc("IT", "ITA", "Italy"),
    cc("JE", "JEY", "Jersey"),
    cc("JM", "JAM", "Jamaica"),
    cc("JO", "JOR", "Jordan"),
    cc("JP", "JPN", "Japan"),
    cc("KE", "KEN", "Kenya"),
    cc("KG", "KGZ", "Kyrgyzstan"),
    cc("KH", "KHM", "Cambodia"),
    cc("KI", "KIR", "Kiribati"),
    cc("KM", "COM", "Comoros"),
    cc("KN", "KNA", "Saint Kitts and Nevis"),
    cc("KP", "PRK", "Korea, Democratic People's Republic of"),
    cc("KR", "KOR", "Korea, Republic of"),
    cc("KW", "KWT", "Kuwait"),
    cc("KY", "CYM", "Cayman Islands"),
    cc("KZ", "KAZ", "Kazakhstan"),
    cc("LA", "LAO", "Lao People's Democratic Republic"),
    cc("LB", "LBN", "Lebanon"),
    cc("LC", "LCA", "Saint Lucia"),
    cc("LI", "LIE", "Liechtenstein"),
    cc("LK", "LKA", "Sri Lanka"),
    cc("LR", "LBR", "Liberia"),
    cc("LS", "LSO", "Lesotho"),
    cc("LT", "LTU", "Lithuania"),
    cc("LU", "LUX", "Luxembourg"),
    cc("LV", "LVA", "Latvia"),
    cc("LY", "LBY", "Libya"),
    cc("MA", "MAR", "Morocco"),
    cc("MC", "MCO", "Monaco"),
    cc("MD", "MDA", "Moldova"),
    cc("ME", "MNE", "Montenegro"),
    cc("MF", "MAF", "Saint Martin (French part)"),
    cc("MG", "MDG", "Madagascar"),
    cc("MH", "MHL", "Marshall Islands"),
    cc("MK", "MKD", "North Macedonia"),
    cc("ML", "MLI", "Mali"),
    cc("MM", "MMR", "Myanmar"),
    cc("MN", "MNG", "Mongolia"),
    cc("MO", "MAC", "Macao"),
    cc("MP", "MNP", "Northern Mariana Islands"),
    cc("MQ", "MTQ", "Martinique"),
    cc("MR", "MRT", "Mauritania"),
    cc("MS", "MSR", "Montserrat"),
    cc("MT", "MLT", "Malta"),
    cc("MU", "MUS", "Mauritius"),
    cc("MV", "MDV", "Maldives"),
    cc("MW", "MWI", "Malawi"),
    cc("MX", "MEX", "Mexico"),
    cc("MY", "MYS", "Malaysia"),
    cc("MZ", "MOZ", "Mozambique"),
    cc("NA", "NAM", "Namibia"),
    cc("NC", "NCL", "New Caledonia"),
    cc("NE", "NER", "Niger"),
    cc("NF", "NFK", "Norfolk Island"),
    cc("NG", "NGA", "Nigeria"),
    cc("NI", "NIC", "Nicaragua"),
    cc("NL", "NLD", "Netherlands"),
    cc("NO", "NOR", "Norway"),
    cc("NP", "NPL", "Nepal"),
    cc("NR", "NRU", "Nauru"),
    cc("NU", "NIU", "Niue"),
    cc("NZ", "NZL", "New Zealand"),
    cc("OM", "OMN", "Oman"),
    cc("PA", "PAN", "Panama"),
    cc("PE", "PER", "Peru"),
    cc("PF", "PYF", "French Polynesia"),
    cc("PG", "PNG", "Papua New Guinea"),
    cc("PH", "PHL", "Philippines"),
    cc("PK", "PAK", "Pakistan"),
    cc("PL", "POL", "Poland"),
    cc("PM", "SPM", "Saint Pierre and Miquelon"),
    cc("PN", "PCN", "Pitcairn"),
    cc("PR", "PRI", "Puerto Rico"),
    cc("PS", "PSE", "Palestine, State of"),
    cc("PT", "PRT", "Portugal"),
    cc("PW", "PLW", "Palau"),
    cc("PY", "PRY", "Paraguay"),
    cc("QA", "QAT", "Qatar"),
    cc("RE", "REU", "Réunion"),
    cc("RO", "ROU", "Romania"),
    cc("RS", "SRB", "Serbia"),
    cc("RU", "RUS", "Russian Federation"),
    cc("RW", "RWA", "Rwanda"),
    cc("SA", "SAU", "Saudi Arabia"),
    cc("SB", "SLB", "Solomon Islands"),
    cc("SC", "SYC", "Seychelles"),
    cc("SD", "SDN", "Sudan"),
    cc("SE", "SWE", "Sweden"),
    cc("SG", "SGP", "Singapore"),
    cc("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    cc("SI", "SVN", "Slovenia"),
    cc("SJ", "SJM", "Svalbard and Jan Mayen"),
    cc("SK", "SVK", "Slovakia"),
    cc("SL", "SLE", "Sierra Leone"),
    cc("SM", "SMR", "San Marino"),
    cc("SN", "SEN", "Senegal"),
    cc("SO", "SOM", "Somalia"),
    cc("SR", "SUR", "Suriname"),
    cc("SS", "SSD", "South Sudan"),
    cc("ST", "STP", "Sao Tome and Principe"),
    cc("SV", "SLV", "El Salvador"),
    cc("SX", "SXM", "Sint Maarten (Dutch part)"),
    cc("SY", "SYR", "Syrian Arab Republic"),
    cc("SZ", "SWZ", "Eswatini"),
    cc("TC", "TCA", "Turks and Caicos Islands"),
    cc("TD", "TCD", "Chad"),
    cc("TF", "ATF", "French Southern Territories"),
    cc("TG", "TGO", "Togo"),
    cc("TH", "THA", "Thailand"),
    cc("TJ", "TJK", "Tajikistan"),
    cc("TK", "TKL", "Tokelau"),
    cc("TL", "TLS", "Timor-Leste"),
    cc("TM", "TKM", "Turkmenistan"),
    cc("TN", "TUN", "Tunisia"),
    cc("TO", "TON", "Tonga"),
    cc("TR", "TUR", "Türkiye"),
    cc("TT", "TTO", "Trinidad and Tobago"),
    cc("TV", "TUV", "Tuvalu"),
    cc("TW", "TWN", "Taiwan"),
    cc("TZ", "TZA", "Tanzania"),
    cc("UA", "UKR", "Ukraine"),
    cc("UG", "UGA", "Uganda"),
    cc("UM", "UMI", "United States Minor Outlying Islands"),
    cc("US", "USA", "United States of America"),
    cc("UY", "URY", "Uruguay"),
    cc("UZ", "UZB", "Uzbekistan"),
    cc("VA", "VAT", "Holy See"),
    cc("VC", "VCT", "Saint Vincent and the Grenadines"),
    cc("VE", "VEN", "Venezuela"),
    cc("VG", "VGB", "Virgin Islands (British)"),
    cc("VI", "VIR", "Virgin Islands (U.S.)"),
    cc("VN", "VNM", "Viet Nam"),
    cc("VU", "VUT", "Vanuatu"),
    cc("WF", "WLF", "Wallis and Futuna"),
    cc("WS", "WSM", "Samoa"),
    cc("YE", "YEM", "Yemen"),
    cc("YT", "MYT", "Mayotte"),
    cc("ZA", "ZAF", "South Africa"),
    cc("ZM", "ZMB", "Zambia"),
    cc("ZW", "ZWE", "Zimbabwe"),
];
