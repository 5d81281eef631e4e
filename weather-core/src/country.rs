//! Country name / code normalization.
//!
//! The weather provider wants ISO 3166-1 alpha-2 codes, but people type
//! "United States", "usa" or "UK". Everything here is a lookup against the
//! embedded [`COUNTRIES`] table.

use crate::model::Iso2Code;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' does not name a known country")]
pub struct ConversionError {
    pub input: String,
}

/// One row of the ISO 3166-1 table.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

const fn c(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
) -> Country {
    Country { alpha2, alpha3, name, aliases }
}

/// Convert a country name, alpha-2 or alpha-3 code to an alpha-2 code.
pub fn to_iso2(name_or_code: &str) -> Result<Iso2Code, ConversionError> {
    lookup(name_or_code)
        .and_then(|country| Iso2Code::parse(country.alpha2))
        .ok_or_else(|| ConversionError { input: name_or_code.trim().to_string() })
}

/// Find the table row for a name or code.
pub fn lookup(name_or_code: &str) -> Option<&'static Country> {
    let key = normalize(name_or_code);
    if key.is_empty() {
        return None;
    }

    let by_code = match key.len() {
        2 => COUNTRIES.iter().find(|c| c.alpha2.eq_ignore_ascii_case(&key)),
        3 => COUNTRIES.iter().find(|c| c.alpha3.eq_ignore_ascii_case(&key)),
        _ => None,
    };

    by_code.or_else(|| {
        COUNTRIES.iter().find(|c| {
            normalize(c.name) == key || c.aliases.iter().any(|alias| normalize(alias) == key)
        })
    })
}

/// Lowercase, collapse whitespace, drop punctuation and a leading "the".
fn normalize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| match ch {
            '.' | ',' | '\'' | '’' | '(' | ')' | '-' => ' ',
            other => other,
        })
        .collect::<String>()
        .to_lowercase();

    let mut words = cleaned.split_whitespace().peekable();
    if words.peek() == Some(&"the") {
        words.next();
    }
    words.collect::<Vec<_>>().join(" ")
}

pub static COUNTRIES: &[Country] = &[
    c("AF", "AFG", "Afghanistan", &[]),
    c("AX", "ALA", "Åland Islands", &["Aland Islands", "Aland"]),
    c("AL", "ALB", "Albania", &[]),
    c("DZ", "DZA", "Algeria", &[]),
    c("AS", "ASM", "American Samoa", &[]),
    c("AD", "AND", "Andorra", &[]),
    c("AO", "AGO", "Angola", &[]),
    c("AI", "AIA", "Anguilla", &[]),
    c("AQ", "ATA", "Antarctica", &[]),
    c("AG", "ATG", "Antigua and Barbuda", &["Antigua & Barbuda", "Antigua"]),
    c("AR", "ARG", "Argentina", &[]),
    c("AM", "ARM", "Armenia", &[]),
    c("AW", "ABW", "Aruba", &[]),
    c("AU", "AUS", "Australia", &[]),
    c("AT", "AUT", "Austria", &[]),
    c("AZ", "AZE", "Azerbaijan", &[]),
    c("BS", "BHS", "Bahamas", &["The Bahamas"]),
    c("BH", "BHR", "Bahrain", &[]),
    c("BD", "BGD", "Bangladesh", &[]),
    c("BB", "BRB", "Barbados", &[]),
    c("BY", "BLR", "Belarus", &[]),
    c("BE", "BEL", "Belgium", &[]),
    c("BZ", "BLZ", "Belize", &[]),
    c("BJ", "BEN", "Benin", &[]),
    c("BM", "BMU", "Bermuda", &[]),
    c("BT", "BTN", "Bhutan", &[]),
    c("BO", "BOL", "Bolivia", &["Plurinational State of Bolivia"]),
    c("BQ", "BES", "Bonaire, Sint Eustatius and Saba", &["Caribbean Netherlands", "Bonaire"]),
    c("BA", "BIH", "Bosnia and Herzegovina", &["Bosnia", "Bosnia & Herzegovina"]),
    c("BW", "BWA", "Botswana", &[]),
    c("BV", "BVT", "Bouvet Island", &[]),
    c("BR", "BRA", "Brazil", &["Brasil"]),
    c("IO", "IOT", "British Indian Ocean Territory", &[]),
    c("BN", "BRN", "Brunei", &["Brunei Darussalam"]),
    c("BG", "BGR", "Bulgaria", &[]),
    c("BF", "BFA", "Burkina Faso", &[]),
    c("BI", "BDI", "Burundi", &[]),
    c("CV", "CPV", "Cabo Verde", &["Cape Verde"]),
    c("KH", "KHM", "Cambodia", &[]),
    c("CM", "CMR", "Cameroon", &[]),
    c("CA", "CAN", "Canada", &[]),
    c("KY", "CYM", "Cayman Islands", &[]),
    c("CF", "CAF", "Central African Republic", &[]),
    c("TD", "TCD", "Chad", &[]),
    c("CL", "CHL", "Chile", &[]),
    c("CN", "CHN", "China", &["People's Republic of China", "PRC", "Mainland China"]),
    c("CX", "CXR", "Christmas Island", &[]),
    c("CC", "CCK", "Cocos (Keeling) Islands", &["Cocos Islands", "Keeling Islands"]),
    c("CO", "COL", "Colombia", &[]),
    c("KM", "COM", "Comoros", &[]),
    c("CG", "COG", "Congo", &["Republic of the Congo", "Congo-Brazzaville", "Congo Republic"]),
    c(
        "CD",
        "COD",
        "Democratic Republic of the Congo",
        &["DR Congo", "DRC", "Congo-Kinshasa", "Congo, Democratic Republic"],
    ),
    c("CK", "COK", "Cook Islands", &[]),
    c("CR", "CRI", "Costa Rica", &[]),
    c("CI", "CIV", "Côte d'Ivoire", &["Cote d'Ivoire", "Ivory Coast"]),
    c("HR", "HRV", "Croatia", &["Hrvatska"]),
    c("CU", "CUB", "Cuba", &[]),
    c("CW", "CUW", "Curaçao", &["Curacao"]),
    c("CY", "CYP", "Cyprus", &[]),
    c("CZ", "CZE", "Czechia", &["Czech Republic"]),
    c("DK", "DNK", "Denmark", &[]),
    c("DJ", "DJI", "Djibouti", &[]),
    c("DM", "DMA", "Dominica", &[]),
    c("DO", "DOM", "Dominican Republic", &[]),
    c("EC", "ECU", "Ecuador", &[]),
    c("EG", "EGY", "Egypt", &[]),
    c("SV", "SLV", "El Salvador", &[]),
    c("GQ", "GNQ", "Equatorial Guinea", &[]),
    c("ER", "ERI", "Eritrea", &[]),
    c("EE", "EST", "Estonia", &[]),
    c("SZ", "SWZ", "Eswatini", &["Swaziland"]),
    c("ET", "ETH", "Ethiopia", &[]),
    c("FK", "FLK", "Falkland Islands", &["Falkland Islands (Malvinas)", "Malvinas"]),
    c("FO", "FRO", "Faroe Islands", &["Faroes"]),
    c("FJ", "FJI", "Fiji", &[]),
    c("FI", "FIN", "Finland", &[]),
    c("FR", "FRA", "France", &[]),
    c("GF", "GUF", "French Guiana", &[]),
    c("PF", "PYF", "French Polynesia", &[]),
    c("TF", "ATF", "French Southern Territories", &[]),
    c("GA", "GAB", "Gabon", &[]),
    c("GM", "GMB", "Gambia", &["The Gambia"]),
    c("GE", "GEO", "Georgia", &[]),
    c("DE", "DEU", "Germany", &["Deutschland"]),
    c("GH", "GHA", "Ghana", &[]),
    c("GI", "GIB", "Gibraltar", &[]),
    c("GR", "GRC", "Greece", &["Hellas"]),
    c("GL", "GRL", "Greenland", &[]),
    c("GD", "GRD", "Grenada", &[]),
    c("GP", "GLP", "Guadeloupe", &[]),
    c("GU", "GUM", "Guam", &[]),
    c("GT", "GTM", "Guatemala", &[]),
    c("GG", "GGY", "Guernsey", &[]),
    c("GN", "GIN", "Guinea", &[]),
    c("GW", "GNB", "Guinea-Bissau", &[]),
    c("GY", "GUY", "Guyana", &[]),
    c("HT", "HTI", "Haiti", &[]),
    c("HM", "HMD", "Heard Island and McDonald Islands", &[]),
    c("VA", "VAT", "Holy See", &["Vatican", "Vatican City", "Vatican City State"]),
    c("HN", "HND", "Honduras", &[]),
    c("HK", "HKG", "Hong Kong", &[]),
    c("HU", "HUN", "Hungary", &[]),
    c("IS", "ISL", "Iceland", &[]),
    c("IN", "IND", "India", &[]),
    c("ID", "IDN", "Indonesia", &[]),
    c("IR", "IRN", "Iran", &["Islamic Republic of Iran", "Persia"]),
    c("IQ", "IRQ", "Iraq", &[]),
    c("IE", "IRL", "Ireland", &["Eire", "Republic of Ireland"]),
    c("IM", "IMN", "Isle of Man", &[]),
    c("IL", "ISR", "Israel", &[]),
    c("IT", "ITA", "Italy", &["Italia"]),
    c("JM", "JAM", "Jamaica", &[]),
    c("JP", "JPN", "Japan", &["Nippon"]),
    c("JE", "JEY", "Jersey", &[]),
    c("JO", "JOR", "Jordan", &[]),
    c("KZ", "KAZ", "Kazakhstan", &[]),
    c("KE", "KEN", "Kenya", &[]),
    c("KI", "KIR", "Kiribati", &[]),
    c(
        "KP",
        "PRK",
        "North Korea",
        &["Democratic People's Republic of Korea", "DPRK", "Korea, North"],
    ),
    c("KR", "KOR", "South Korea", &["Republic of Korea", "Korea", "Korea, South"]),
    c("XK", "XKX", "Kosovo", &[]),
    c("KW", "KWT", "Kuwait", &[]),
    c("KG", "KGZ", "Kyrgyzstan", &["Kyrgyz Republic"]),
    c("LA", "LAO", "Laos", &["Lao People's Democratic Republic", "Lao PDR"]),
    c("LV", "LVA", "Latvia", &[]),
    c("LB", "LBN", "Lebanon", &[]),
    c("LS", "LSO", "Lesotho", &[]),
    c("LR", "LBR", "Liberia", &[]),
    c("LY", "LBY", "Libya", &[]),
    c("LI", "LIE", "Liechtenstein", &[]),
    c("LT", "LTU", "Lithuania", &[]),
    c("LU", "LUX", "Luxembourg", &[]),
    c("MO", "MAC", "Macao", &["Macau"]),
    c("MG", "MDG", "Madagascar", &[]),
    c("MW", "MWI", "Malawi", &[]),
    c("MY", "MYS", "Malaysia", &[]),
    c("MV", "MDV", "Maldives", &[]),
    c("ML", "MLI", "Mali", &[]),
    c("MT", "MLT", "Malta", &[]),
    c("MH", "MHL", "Marshall Islands", &[]),
    c("MQ", "MTQ", "Martinique", &[]),
    c("MR", "MRT", "Mauritania", &[]),
    c("MU", "MUS", "Mauritius", &[]),
    c("YT", "MYT", "Mayotte", &[]),
    c("MX", "MEX", "Mexico", &["México"]),
    c("FM", "FSM", "Micronesia", &["Federated States of Micronesia"]),
    c("MD", "MDA", "Moldova", &["Republic of Moldova"]),
    c("MC", "MCO", "Monaco", &[]),
    c("MN", "MNG", "Mongolia", &[]),
    c("ME", "MNE", "Montenegro", &[]),
    c("MS", "MSR", "Montserrat", &[]),
    c("MA", "MAR", "Morocco", &[]),
    c("MZ", "MOZ", "Mozambique", &[]),
    c("MM", "MMR", "Myanmar", &["Burma"]),
    c("NA", "NAM", "Namibia", &[]),
    c("NR", "NRU", "Nauru", &[]),
    c("NP", "NPL", "Nepal", &[]),
    c("NL", "NLD", "Netherlands", &["Holland", "The Netherlands", "Nederland"]),
    c("NC", "NCL", "New Caledonia", &[]),
    c("NZ", "NZL", "New Zealand", &["Aotearoa"]),
    c("NI", "NIC", "Nicaragua", &[]),
    c("NE", "NER", "Niger", &[]),
    c("NG", "NGA", "Nigeria", &[]),
    c("NU", "NIU", "Niue", &[]),
    c("NF", "NFK", "Norfolk Island", &[]),
    c("MK", "MKD", "North Macedonia", &["Macedonia", "Republic of North Macedonia"]),
    c("MP", "MNP", "Northern Mariana Islands", &[]),
    c("NO", "NOR", "Norway", &["Norge"]),
    c("OM", "OMN", "Oman", &[]),
    c("PK", "PAK", "Pakistan", &[]),
    c("PW", "PLW", "Palau", &[]),
    c("PS", "PSE", "Palestine", &["State of Palestine", "Palestinian Territories"]),
    c("PA", "PAN", "Panama", &[]),
    c("PG", "PNG", "Papua New Guinea", &[]),
    c("PY", "PRY", "Paraguay", &[]),
    c("PE", "PER", "Peru", &[]),
    c("PH", "PHL", "Philippines", &[]),
    c("PN", "PCN", "Pitcairn", &["Pitcairn Islands"]),
    c("PL", "POL", "Poland", &["Polska"]),
    c("PT", "PRT", "Portugal", &[]),
    c("PR", "PRI", "Puerto Rico", &[]),
    c("QA", "QAT", "Qatar", &[]),
    c("RE", "REU", "Réunion", &["Reunion"]),
    c("RO", "ROU", "Romania", &[]),
    c("RU", "RUS", "Russia", &["Russian Federation"]),
    c("RW", "RWA", "Rwanda", &[]),
    c("BL", "BLM", "Saint Barthélemy", &["Saint Barthelemy", "St Barts"]),
    c(
        "SH",
        "SHN",
        "Saint Helena, Ascension and Tristan da Cunha",
        &["Saint Helena", "St Helena"],
    ),
    c("KN", "KNA", "Saint Kitts and Nevis", &["St Kitts and Nevis"]),
    c("LC", "LCA", "Saint Lucia", &["St Lucia"]),
    c("MF", "MAF", "Saint Martin", &["Saint Martin (French part)"]),
    c("PM", "SPM", "Saint Pierre and Miquelon", &[]),
    c(
        "VC",
        "VCT",
        "Saint Vincent and the Grenadines",
        &["St Vincent and the Grenadines", "Saint Vincent"],
    ),
    c("WS", "WSM", "Samoa", &[]),
    c("SM", "SMR", "San Marino", &[]),
    c("ST", "STP", "Sao Tome and Principe", &["São Tomé and Príncipe"]),
    c("SA", "SAU", "Saudi Arabia", &["KSA"]),
    c("SN", "SEN", "Senegal", &[]),
    c("RS", "SRB", "Serbia", &[]),
    c("SC", "SYC", "Seychelles", &[]),
    c("SL", "SLE", "Sierra Leone", &[]),
    c("SG", "SGP", "Singapore", &[]),
    c("SX", "SXM", "Sint Maarten", &["Sint Maarten (Dutch part)"]),
    c("SK", "SVK", "Slovakia", &["Slovak Republic"]),
    c("SI", "SVN", "Slovenia", &[]),
    c("SB", "SLB", "Solomon Islands", &[]),
    c("SO", "SOM", "Somalia", &[]),
    c("ZA", "ZAF", "South Africa", &["RSA"]),
    c("GS", "SGS", "South Georgia and the South Sandwich Islands", &["South Georgia"]),
    c("SS", "SSD", "South Sudan", &[]),
    c("ES", "ESP", "Spain", &["España", "Espana"]),
    c("LK", "LKA", "Sri Lanka", &[]),
    c("SD", "SDN", "Sudan", &[]),
    c("SR", "SUR", "Suriname", &[]),
    c("SJ", "SJM", "Svalbard and Jan Mayen", &[]),
    c("SE", "SWE", "Sweden", &["Sverige"]),
    c("CH", "CHE", "Switzerland", &["Swiss Confederation", "Schweiz", "Suisse"]),
    c("SY", "SYR", "Syria", &["Syrian Arab Republic"]),
    c("TW", "TWN", "Taiwan", &["Republic of China", "Chinese Taipei"]),
    c("TJ", "TJK", "Tajikistan", &[]),
    c("TZ", "TZA", "Tanzania", &["United Republic of Tanzania"]),
    c("TH", "THA", "Thailand", &[]),
    c("TL", "TLS", "Timor-Leste", &["East Timor"]),
    c("TG", "TGO", "Togo", &[]),
    c("TK", "TKL", "Tokelau", &[]),
    c("TO", "TON", "Tonga", &[]),
    c("TT", "TTO", "Trinidad and Tobago", &["Trinidad & Tobago", "Trinidad"]),
    c("TN", "TUN", "Tunisia", &[]),
    c("TR", "TUR", "Türkiye", &["Turkey", "Turkiye"]),
    c("TM", "TKM", "Turkmenistan", &[]),
    c("TC", "TCA", "Turks and Caicos Islands", &[]),
    c("TV", "TUV", "Tuvalu", &[]),
    c("UG", "UGA", "Uganda", &[]),
    c("UA", "UKR", "Ukraine", &[]),
    c("AE", "ARE", "United Arab Emirates", &["UAE", "Emirates"]),
    c(
        "GB",
        "GBR",
        "United Kingdom",
        &[
            "UK",
            "Great Britain",
            "Britain",
            "United Kingdom of Great Britain and Northern Ireland",
            "England",
            "Scotland",
            "Wales",
            "Northern Ireland",
        ],
    ),
    c(
        "US",
        "USA",
        "United States",
        &["United States of America", "America", "U.S.", "U.S.A.", "US of A"],
    ),
    c("UM", "UMI", "United States Minor Outlying Islands", &[]),
    c("UY", "URY", "Uruguay", &[]),
    c("UZ", "UZB", "Uzbekistan", &[]),
    c("VU", "VUT", "Vanuatu", &[]),
    c("VE", "VEN", "Venezuela", &["Bolivarian Republic of Venezuela"]),
    c("VN", "VNM", "Vietnam", &["Viet Nam"]),
    c("VG", "VGB", "British Virgin Islands", &["Virgin Islands, British"]),
    c("VI", "VIR", "U.S. Virgin Islands", &["US Virgin Islands", "Virgin Islands, U.S."]),
    c("WF", "WLF", "Wallis and Futuna", &[]),
    c("EH", "ESH", "Western Sahara", &[]),
    c("YE", "YEM", "Yemen", &[]),
    c("ZM", "ZMB", "Zambia", &[]),
    c("ZW", "ZWE", "Zimbabwe", &[]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_names_convert() {
        assert_eq!(to_iso2("United States").unwrap().as_str(), "US");
        assert_eq!(to_iso2("Germany").unwrap().as_str(), "DE");
        assert_eq!(to_iso2("japan").unwrap().as_str(), "JP");
        assert_eq!(to_iso2("  new   zealand ").unwrap().as_str(), "NZ");
    }

    #[test]
    fn aliases_convert() {
        assert_eq!(to_iso2("United States of America").unwrap().as_str(), "US");
        assert_eq!(to_iso2("U.S.A.").unwrap().as_str(), "US");
        assert_eq!(to_iso2("UK").unwrap().as_str(), "GB");
        assert_eq!(to_iso2("Great Britain").unwrap().as_str(), "GB");
        assert_eq!(to_iso2("The Netherlands").unwrap().as_str(), "NL");
        assert_eq!(to_iso2("Ivory Coast").unwrap().as_str(), "CI");
        assert_eq!(to_iso2("Cote d'Ivoire").unwrap().as_str(), "CI");
        assert_eq!(to_iso2("Korea").unwrap().as_str(), "KR");
        assert_eq!(to_iso2("Guinea-Bissau").unwrap().as_str(), "GW");
    }

    #[test]
    fn codes_pass_through() {
        assert_eq!(to_iso2("US").unwrap().as_str(), "US");
        assert_eq!(to_iso2("fr").unwrap().as_str(), "FR");
        assert_eq!(to_iso2("USA").unwrap().as_str(), "US");
        assert_eq!(to_iso2("deu").unwrap().as_str(), "DE");
    }

    #[test]
    fn unknown_names_fail() {
        for input in ["", "   ", "Atlantis", "Narnia", "ZZ", "XYZ"] {
            let err = to_iso2(input).unwrap_err();
            assert_eq!(err.input, input.trim());
        }
    }

    #[test]
    fn every_row_converts_to_its_own_code() {
        for country in COUNTRIES {
            assert_eq!(to_iso2(country.name).unwrap().as_str(), country.alpha2, "{}", country.name);
            assert_eq!(to_iso2(country.alpha3).unwrap().as_str(), country.alpha2);
        }
    }

    #[test]
    fn table_codes_are_unique() {
        let alpha2: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha2).collect();
        let alpha3: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        assert_eq!(alpha2.len(), COUNTRIES.len());
        assert_eq!(alpha3.len(), COUNTRIES.len());
    }
}
