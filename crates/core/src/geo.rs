//! ISO 3166-1 country and continent lookup tables.
//!
//! All lookups are pure and return `None` on a miss; callers decide how to
//! surface it. Codes are matched case-insensitively.

/// (alpha-2, alpha-3, country name, continent code)
const COUNTRIES: &[(&str, &str, &str, &str)] = &[
    ("AD", "AND", "Andorra", "EU"),
    ("AE", "ARE", "United Arab Emirates", "AS"),
    ("AF", "AFG", "Afghanistan", "AS"),
    ("AG", "ATG", "Antigua and Barbuda", "NA"),
    ("AI", "AIA", "Anguilla", "NA"),
    ("AL", "ALB", "Albania", "EU"),
    ("AM", "ARM", "Armenia", "AS"),
    ("AO", "AGO", "Angola", "AF"),
    ("AQ", "ATA", "Antarctica", "AN"),
    ("AR", "ARG", "Argentina", "SA"),
    ("AS", "ASM", "American Samoa", "OC"),
    ("AT", "AUT", "Austria", "EU"),
    ("AU", "AUS", "Australia", "OC"),
    ("AW", "ABW", "Aruba", "NA"),
    ("AX", "ALA", "Åland Islands", "EU"),
    ("AZ", "AZE", "Azerbaijan", "AS"),
    ("BA", "BIH", "Bosnia and Herzegovina", "EU"),
    ("BB", "BRB", "Barbados", "NA"),
    ("BD", "BGD", "Bangladesh", "AS"),
    ("BE", "BEL", "Belgium", "EU"),
    ("BF", "BFA", "Burkina Faso", "AF"),
    ("BG", "BGR", "Bulgaria", "EU"),
    ("BH", "BHR", "Bahrain", "AS"),
    ("BI", "BDI", "Burundi", "AF"),
    ("BJ", "BEN", "Benin", "AF"),
    ("BL", "BLM", "Saint Barthélemy", "NA"),
    ("BM", "BMU", "Bermuda", "NA"),
    ("BN", "BRN", "Brunei Darussalam", "AS"),
    ("BO", "BOL", "Bolivia", "SA"),
    ("BQ", "BES", "Bonaire, Sint Eustatius and Saba", "NA"),
    ("BR", "BRA", "Brazil", "SA"),
    ("BS", "BHS", "Bahamas", "NA"),
    ("BT", "BTN", "Bhutan", "AS"),
    ("BV", "BVT", "Bouvet Island", "AN"),
    ("BW", "BWA", "Botswana", "AF"),
    ("BY", "BLR", "Belarus", "EU"),
    ("BZ", "BLZ", "Belize", "NA"),
    ("CA", "CAN", "Canada", "NA"),
    ("CC", "CCK", "Cocos (Keeling) Islands", "AS"),
    ("CD", "COD", "Congo, The Democratic Republic of the", "AF"),
    ("CF", "CAF", "Central African Republic", "AF"),
    ("CG", "COG", "Congo", "AF"),
    ("CH", "CHE", "Switzerland", "EU"),
    ("CI", "CIV", "Côte d'Ivoire", "AF"),
    ("CK", "COK", "Cook Islands", "OC"),
    ("CL", "CHL", "Chile", "SA"),
    ("CM", "CMR", "Cameroon", "AF"),
    ("CN", "CHN", "China", "AS"),
    ("CO", "COL", "Colombia", "SA"),
    ("CR", "CRI", "Costa Rica", "NA"),
    ("CU", "CUB", "Cuba", "NA"),
    ("CV", "CPV", "Cabo Verde", "AF"),
    ("CW", "CUW", "Curaçao", "NA"),
    ("CX", "CXR", "Christmas Island", "AS"),
    ("CY", "CYP", "Cyprus", "AS"),
    ("CZ", "CZE", "Czechia", "EU"),
    ("DE", "DEU", "Germany", "EU"),
    ("DJ", "DJI", "Djibouti", "AF"),
    ("DK", "DNK", "Denmark", "EU"),
    ("DM", "DMA", "Dominica", "NA"),
    ("DO", "DOM", "Dominican Republic", "NA"),
    ("DZ", "DZA", "Algeria", "AF"),
    ("EC", "ECU", "Ecuador", "SA"),
    ("EE", "EST", "Estonia", "EU"),
    ("EG", "EGY", "Egypt", "AF"),
    ("EH", "ESH", "Western Sahara", "AF"),
    ("ER", "ERI", "Eritrea", "AF"),
    ("ES", "ESP", "Spain", "EU"),
    ("ET", "ETH", "Ethiopia", "AF"),
    ("FI", "FIN", "Finland", "EU"),
    ("FJ", "FJI", "Fiji", "OC"),
    ("FK", "FLK", "Falkland Islands (Malvinas)", "SA"),
    ("FM", "FSM", "Micronesia, Federated States of", "OC"),
    ("FO", "FRO", "Faroe Islands", "EU"),
    ("FR", "FRA", "France", "EU"),
    ("GA", "GAB", "Gabon", "AF"),
    ("GB", "GBR", "United Kingdom", "EU"),
    ("GD", "GRD", "Grenada", "NA"),
    ("GE", "GEO", "Georgia", "AS"),
    ("GF", "GUF", "French Guiana", "SA"),
    ("GG", "GGY", "Guernsey", "EU"),
    ("GH", "GHA", "Ghana", "AF"),
    ("GI", "GIB", "Gibraltar", "EU"),
    ("GL", "GRL", "Greenland", "NA"),
    ("GM", "GMB", "Gambia", "AF"),
    ("GN", "GIN", "Guinea", "AF"),
    ("GP", "GLP", "Guadeloupe", "NA"),
    ("GQ", "GNQ", "Equatorial Guinea", "AF"),
    ("GR", "GRC", "Greece", "EU"),
    ("GS", "SGS", "South Georgia and the South Sandwich Islands", "AN"),
    ("GT", "GTM", "Guatemala", "NA"),
    ("GU", "GUM", "Guam", "OC"),
    ("GW", "GNB", "Guinea-Bissau", "AF"),
    ("GY", "GUY", "Guyana", "SA"),
    ("HK", "HKG", "Hong Kong", "AS"),
    ("HM", "HMD", "Heard Island and McDonald Islands", "AN"),
    ("HN", "HND", "Honduras", "NA"),
    ("HR", "HRV", "Croatia", "EU"),
    ("HT", "HTI", "Haiti", "NA"),
    ("HU", "HUN", "Hungary", "EU"),
    ("ID", "IDN", "Indonesia", "AS"),
    ("IE", "IRL", "Ireland", "EU"),
    ("IL", "ISR", "Israel", "AS"),
    ("IM", "IMN", "Isle of Man", "EU"),
    ("IN", "IND", "India", "AS"),
    ("IO", "IOT", "British Indian Ocean Territory", "AS"),
    ("IQ", "IRQ", "Iraq", "AS"),
    ("IR", "IRN", "Iran", "AS"),
    ("IS", "ISL", "Iceland", "EU"),
    ("IT", "ITA", "Italy", "EU"),
    ("JE", "JEY", "Jersey", "EU"),
    ("JM", "JAM", "Jamaica", "NA"),
    ("JO", "JOR", "Jordan", "AS"),
    ("JP", "JPN", "Japan", "AS"),
    ("KE", "KEN", "Kenya", "AF"),
    ("KG", "KGZ", "Kyrgyzstan", "AS"),
    ("KH", "KHM", "Cambodia", "AS"),
    ("KI", "KIR", "Kiribati", "OC"),
    ("KM", "COM", "Comoros", "AF"),
    ("KN", "KNA", "Saint Kitts and Nevis", "NA"),
    ("KP", "PRK", "North Korea", "AS"),
    ("KR", "KOR", "South Korea", "AS"),
    ("KW", "KWT", "Kuwait", "AS"),
    ("KY", "CYM", "Cayman Islands", "NA"),
    ("KZ", "KAZ", "Kazakhstan", "AS"),
    ("LA", "LAO", "Lao People's Democratic Republic", "AS"),
    ("LB", "LBN", "Lebanon", "AS"),
    ("LC", "LCA", "Saint Lucia", "NA"),
    ("LI", "LIE", "Liechtenstein", "EU"),
    ("LK", "LKA", "Sri Lanka", "AS"),
    ("LR", "LBR", "Liberia", "AF"),
    ("LS", "LSO", "Lesotho", "AF"),
    ("LT", "LTU", "Lithuania", "EU"),
    ("LU", "LUX", "Luxembourg", "EU"),
    ("LV", "LVA", "Latvia", "EU"),
    ("LY", "LBY", "Libya", "AF"),
    ("MA", "MAR", "Morocco", "AF"),
    ("MC", "MCO", "Monaco", "EU"),
    ("MD", "MDA", "Moldova", "EU"),
    ("ME", "MNE", "Montenegro", "EU"),
    ("MF", "MAF", "Saint Martin (French part)", "NA"),
    ("MG", "MDG", "Madagascar", "AF"),
    ("MH", "MHL", "Marshall Islands", "OC"),
    ("MK", "MKD", "North Macedonia", "EU"),
    ("ML", "MLI", "Mali", "AF"),
    ("MM", "MMR", "Myanmar", "AS"),
    ("MN", "MNG", "Mongolia", "AS"),
    ("MO", "MAC", "Macao", "AS"),
    ("MP", "MNP", "Northern Mariana Islands", "OC"),
    ("MQ", "MTQ", "Martinique", "NA"),
    ("MR", "MRT", "Mauritania", "AF"),
    ("MS", "MSR", "Montserrat", "NA"),
    ("MT", "MLT", "Malta", "EU"),
    ("MU", "MUS", "Mauritius", "AF"),
    ("MV", "MDV", "Maldives", "AS"),
    ("MW", "MWI", "Malawi", "AF"),
    ("MX", "MEX", "Mexico", "NA"),
    ("MY", "MYS", "Malaysia", "AS"),
    ("MZ", "MOZ", "Mozambique", "AF"),
    ("NA", "NAM", "Namibia", "AF"),
    ("NC", "NCL", "New Caledonia", "OC"),
    ("NE", "NER", "Niger", "AF"),
    ("NF", "NFK", "Norfolk Island", "OC"),
    ("NG", "NGA", "Nigeria", "AF"),
    ("NI", "NIC", "Nicaragua", "NA"),
    ("NL", "NLD", "Netherlands", "EU"),
    ("NO", "NOR", "Norway", "EU"),
    ("NP", "NPL", "Nepal", "AS"),
    ("NR", "NRU", "Nauru", "OC"),
    ("NU", "NIU", "Niue", "OC"),
    ("NZ", "NZL", "New Zealand", "OC"),
    ("OM", "OMN", "Oman", "AS"),
    ("PA", "PAN", "Panama", "NA"),
    ("PE", "PER", "Peru", "SA"),
    ("PF", "PYF", "French Polynesia", "OC"),
    ("PG", "PNG", "Papua New Guinea", "OC"),
    ("PH", "PHL", "Philippines", "AS"),
    ("PK", "PAK", "Pakistan", "AS"),
    ("PL", "POL", "Poland", "EU"),
    ("PM", "SPM", "Saint Pierre and Miquelon", "NA"),
    ("PN", "PCN", "Pitcairn", "OC"),
    ("PR", "PRI", "Puerto Rico", "NA"),
    ("PS", "PSE", "Palestine, State of", "AS"),
    ("PT", "PRT", "Portugal", "EU"),
    ("PW", "PLW", "Palau", "OC"),
    ("PY", "PRY", "Paraguay", "SA"),
    ("QA", "QAT", "Qatar", "AS"),
    ("RE", "REU", "Réunion", "AF"),
    ("RO", "ROU", "Romania", "EU"),
    ("RS", "SRB", "Serbia", "EU"),
    ("RU", "RUS", "Russian Federation", "EU"),
    ("RW", "RWA", "Rwanda", "AF"),
    ("SA", "SAU", "Saudi Arabia", "AS"),
    ("SB", "SLB", "Solomon Islands", "OC"),
    ("SC", "SYC", "Seychelles", "AF"),
    ("SD", "SDN", "Sudan", "AF"),
    ("SE", "SWE", "Sweden", "EU"),
    ("SG", "SGP", "Singapore", "AS"),
    ("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", "AF"),
    ("SI", "SVN", "Slovenia", "EU"),
    ("SJ", "SJM", "Svalbard and Jan Mayen", "EU"),
    ("SK", "SVK", "Slovakia", "EU"),
    ("SL", "SLE", "Sierra Leone", "AF"),
    ("SM", "SMR", "San Marino", "EU"),
    ("SN", "SEN", "Senegal", "AF"),
    ("SO", "SOM", "Somalia", "AF"),
    ("SR", "SUR", "Suriname", "SA"),
    ("SS", "SSD", "South Sudan", "AF"),
    ("ST", "STP", "Sao Tome and Principe", "AF"),
    ("SV", "SLV", "El Salvador", "NA"),
    ("SX", "SXM", "Sint Maarten (Dutch part)", "NA"),
    ("SY", "SYR", "Syrian Arab Republic", "AS"),
    ("SZ", "SWZ", "Eswatini", "AF"),
    ("TC", "TCA", "Turks and Caicos Islands", "NA"),
    ("TD", "TCD", "Chad", "AF"),
    ("TF", "ATF", "French Southern Territories", "AN"),
    ("TG", "TGO", "Togo", "AF"),
    ("TH", "THA", "Thailand", "AS"),
    ("TJ", "TJK", "Tajikistan", "AS"),
    ("TK", "TKL", "Tokelau", "OC"),
    ("TL", "TLS", "Timor-Leste", "AS"),
    ("TM", "TKM", "Turkmenistan", "AS"),
    ("TN", "TUN", "Tunisia", "AF"),
    ("TO", "TON", "Tonga", "OC"),
    ("TR", "TUR", "Turkey", "AS"),
    ("TT", "TTO", "Trinidad and Tobago", "NA"),
    ("TV", "TUV", "Tuvalu", "OC"),
    ("TW", "TWN", "Taiwan", "AS"),
    ("TZ", "TZA", "Tanzania", "AF"),
    ("UA", "UKR", "Ukraine", "EU"),
    ("UG", "UGA", "Uganda", "AF"),
    ("UM", "UMI", "United States Minor Outlying Islands", "OC"),
    ("US", "USA", "United States", "NA"),
    ("UY", "URY", "Uruguay", "SA"),
    ("UZ", "UZB", "Uzbekistan", "AS"),
    ("VA", "VAT", "Holy See (Vatican City State)", "EU"),
    ("VC", "VCT", "Saint Vincent and the Grenadines", "NA"),
    ("VE", "VEN", "Venezuela", "SA"),
    ("VG", "VGB", "Virgin Islands, British", "NA"),
    ("VI", "VIR", "Virgin Islands, U.S.", "NA"),
    ("VN", "VNM", "Viet Nam", "AS"),
    ("VU", "VUT", "Vanuatu", "OC"),
    ("WF", "WLF", "Wallis and Futuna", "OC"),
    ("WS", "WSM", "Samoa", "OC"),
    ("YE", "YEM", "Yemen", "AS"),
    ("YT", "MYT", "Mayotte", "AF"),
    ("ZA", "ZAF", "South Africa", "AF"),
    ("ZM", "ZMB", "Zambia", "AF"),
    ("ZW", "ZWE", "Zimbabwe", "AF"),
];

const CONTINENTS: &[(&str, &str)] = &[
    ("AF", "Africa"),
    ("AN", "Antarctica"),
    ("AS", "Asia"),
    ("EU", "Europe"),
    ("NA", "North America"),
    ("OC", "Oceania"),
    ("SA", "South America"),
];

fn by_alpha2(code: &str) -> Option<&'static (&'static str, &'static str, &'static str, &'static str)> {
    COUNTRIES
        .iter()
        .find(|(a2, _, _, _)| a2.eq_ignore_ascii_case(code))
}

/// Convert an alpha-3 code to its alpha-2 form.
pub fn alpha3_to_alpha2(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(_, a3, _, _)| a3.eq_ignore_ascii_case(code))
        .map(|(a2, _, _, _)| *a2)
}

/// Canonical alpha-2 form of a 2- or 3-letter code.
///
/// 2-letter codes are only upper-cased here; whether they exist is
/// decided by the name lookup.
pub fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim();
    match code.len() {
        2 => Some(code.to_ascii_uppercase()),
        3 => alpha3_to_alpha2(code).map(str::to_string),
        _ => None,
    }
}

pub fn country_name(alpha2: &str) -> Option<&'static str> {
    by_alpha2(alpha2).map(|(_, _, name, _)| *name)
}

pub fn continent_code(alpha2: &str) -> Option<&'static str> {
    by_alpha2(alpha2).map(|(_, _, _, continent)| *continent)
}

pub fn continent_name(continent_code: &str) -> Option<&'static str> {
    CONTINENTS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(continent_code))
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha3_and_alpha2_agree() {
        for (a2, a3, name, _) in COUNTRIES {
            assert_eq!(alpha3_to_alpha2(a3), Some(*a2));
            assert_eq!(country_name(a2), Some(*name));
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut a2: Vec<_> = COUNTRIES.iter().map(|c| c.0).collect();
        let mut a3: Vec<_> = COUNTRIES.iter().map(|c| c.1).collect();
        a2.sort_unstable();
        a2.dedup();
        a3.sort_unstable();
        a3.dedup();
        assert_eq!(a2.len(), COUNTRIES.len());
        assert_eq!(a3.len(), COUNTRIES.len());
    }

    #[test]
    fn every_country_has_a_named_continent() {
        for (a2, _, _, _) in COUNTRIES {
            let code = continent_code(a2).unwrap();
            assert!(continent_name(code).is_some(), "{a2} -> {code}");
        }
    }

    #[test]
    fn normalize_handles_case_and_length() {
        assert_eq!(normalize_code("usa").as_deref(), Some("US"));
        assert_eq!(normalize_code("gb").as_deref(), Some("GB"));
        assert_eq!(normalize_code("XYZ"), None);
        assert_eq!(normalize_code("U"), None);
        assert_eq!(normalize_code(""), None);
    }

    #[test]
    fn misses_return_none() {
        assert_eq!(country_name("ZZ"), None);
        assert_eq!(continent_code("ZZ"), None);
        assert_eq!(continent_name("XX"), None);
    }
}
