// crates/dropdowns-core/src/data/countries.rs
use crate::raw::CountryRaw;

/// ISO 3166-1 countries, grouped by continent.
pub(crate) static COUNTRIES: &[CountryRaw] = &[
    CountryRaw { name: "Algeria", alpha2: "DZ", alpha3: "DZA", numeric: "012", continent: "Africa" },
    CountryRaw { name: "Angola", alpha2: "AO", alpha3: "AGO", numeric: "024", continent: "Africa" },
    CountryRaw { name: "Benin", alpha2: "BJ", alpha3: "BEN", numeric: "204", continent: "Africa" },
    CountryRaw { name: "Botswana", alpha2: "BW", alpha3: "BWA", numeric: "072", continent: "Africa" },
    CountryRaw { name: "Burkina Faso", alpha2: "BF", alpha3: "BFA", numeric: "854", continent: "Africa" },
    CountryRaw { name: "Burundi", alpha2: "BI", alpha3: "BDI", numeric: "108", continent: "Africa" },
    CountryRaw { name: "Cabo Verde", alpha2: "CV", alpha3: "CPV", numeric: "132", continent: "Africa" },
    CountryRaw { name: "Cameroon", alpha2: "CM", alpha3: "CMR", numeric: "120", continent: "Africa" },
    CountryRaw { name: "Central African Republic", alpha2: "CF", alpha3: "CAF", numeric: "140", continent: "Africa" },
    CountryRaw { name: "Chad", alpha2: "TD", alpha3: "TCD", numeric: "148", continent: "Africa" },
    CountryRaw { name: "Comoros", alpha2: "KM", alpha3: "COM", numeric: "174", continent: "Africa" },
    CountryRaw { name: "Congo (Democratic Republic)", alpha2: "CD", alpha3: "COD", numeric: "180", continent: "Africa" },
    CountryRaw { name: "Congo (Republic)", alpha2: "CG", alpha3: "COG", numeric: "178", continent: "Africa" },
    CountryRaw { name: "Côte d'Ivoire", alpha2: "CI", alpha3: "CIV", numeric: "384", continent: "Africa" },
    CountryRaw { name: "Djibouti", alpha2: "DJ", alpha3: "DJI", numeric: "262", continent: "Africa" },
    CountryRaw { name: "Egypt", alpha2: "EG", alpha3: "EGY", numeric: "818", continent: "Africa" },
    CountryRaw { name: "Equatorial Guinea", alpha2: "GQ", alpha3: "GNQ", numeric: "226", continent: "Africa" },
    CountryRaw { name: "Eritrea", alpha2: "ER", alpha3: "ERI", numeric: "232", continent: "Africa" },
    CountryRaw { name: "Eswatini", alpha2: "SZ", alpha3: "SWZ", numeric: "748", continent: "Africa" },
    CountryRaw { name: "Ethiopia", alpha2: "ET", alpha3: "ETH", numeric: "231", continent: "Africa" },
    CountryRaw { name: "Gabon", alpha2: "GA", alpha3: "GAB", numeric: "266", continent: "Africa" },
    CountryRaw { name: "Gambia", alpha2: "GM", alpha3: "GMB", numeric: "270", continent: "Africa" },
    CountryRaw { name: "Ghana", alpha2: "GH", alpha3: "GHA", numeric: "288", continent: "Africa" },
    CountryRaw { name: "Guinea", alpha2: "GN", alpha3: "GIN", numeric: "324", continent: "Africa" },
    CountryRaw { name: "Guinea-Bissau", alpha2: "GW", alpha3: "GNB", numeric: "624", continent: "Africa" },
    CountryRaw { name: "Kenya", alpha2: "KE", alpha3: "KEN", numeric: "404", continent: "Africa" },
    CountryRaw { name: "Lesotho", alpha2: "LS", alpha3: "LSO", numeric: "426", continent: "Africa" },
    CountryRaw { name: "Liberia", alpha2: "LR", alpha3: "LBR", numeric: "430", continent: "Africa" },
    CountryRaw { name: "Libya", alpha2: "LY", alpha3: "LBY", numeric: "434", continent: "Africa" },
    CountryRaw { name: "Madagascar", alpha2: "MG", alpha3: "MDG", numeric: "450", continent: "Africa" },
    CountryRaw { name: "Malawi", alpha2: "MW", alpha3: "MWI", numeric: "454", continent: "Africa" },
    CountryRaw { name: "Mali", alpha2: "ML", alpha3: "MLI", numeric: "466", continent: "Africa" },
    CountryRaw { name: "Mauritania", alpha2: "MR", alpha3: "MRT", numeric: "478", continent: "Africa" },
    CountryRaw { name: "Mauritius", alpha2: "MU", alpha3: "MUS", numeric: "480", continent: "Africa" },
    CountryRaw { name: "Morocco", alpha2: "MA", alpha3: "MAR", numeric: "504", continent: "Africa" },
    CountryRaw { name: "Mozambique", alpha2: "MZ", alpha3: "MOZ", numeric: "508", continent: "Africa" },
    CountryRaw { name: "Namibia", alpha2: "NA", alpha3: "NAM", numeric: "516", continent: "Africa" },
    CountryRaw { name: "Niger", alpha2: "NE", alpha3: "NER", numeric: "562", continent: "Africa" },
    CountryRaw { name: "Nigeria", alpha2: "NG", alpha3: "NGA", numeric: "566", continent: "Africa" },
    CountryRaw { name: "Rwanda", alpha2: "RW", alpha3: "RWA", numeric: "646", continent: "Africa" },
    CountryRaw { name: "São Tomé and Príncipe", alpha2: "ST", alpha3: "STP", numeric: "678", continent: "Africa" },
    CountryRaw { name: "Senegal", alpha2: "SN", alpha3: "SEN", numeric: "686", continent: "Africa" },
    CountryRaw { name: "Seychelles", alpha2: "SC", alpha3: "SYC", numeric: "690", continent: "Africa" },
    CountryRaw { name: "Sierra Leone", alpha2: "SL", alpha3: "SLE", numeric: "694", continent: "Africa" },
    CountryRaw { name: "Somalia", alpha2: "SO", alpha3: "SOM", numeric: "706", continent: "Africa" },
    CountryRaw { name: "South Africa", alpha2: "ZA", alpha3: "ZAF", numeric: "710", continent: "Africa" },
    CountryRaw { name: "South Sudan", alpha2: "SS", alpha3: "SSD", numeric: "728", continent: "Africa" },
    CountryRaw { name: "Sudan", alpha2: "SD", alpha3: "SDN", numeric: "729", continent: "Africa" },
    CountryRaw { name: "Tanzania", alpha2: "TZ", alpha3: "TZA", numeric: "834", continent: "Africa" },
    CountryRaw { name: "Togo", alpha2: "TG", alpha3: "TGO", numeric: "768", continent: "Africa" },
    CountryRaw { name: "Tunisia", alpha2: "TN", alpha3: "TUN", numeric: "788", continent: "Africa" },
    CountryRaw { name: "Uganda", alpha2: "UG", alpha3: "UGA", numeric: "800", continent: "Africa" },
    CountryRaw { name: "Zambia", alpha2: "ZM", alpha3: "ZMB", numeric: "894", continent: "Africa" },
    CountryRaw { name: "Zimbabwe", alpha2: "ZW", alpha3: "ZWE", numeric: "716", continent: "Africa" },
    CountryRaw { name: "Antarctica", alpha2: "AQ", alpha3: "ATA", numeric: "010", continent: "Antarctica" },
    CountryRaw { name: "Afghanistan", alpha2: "AF", alpha3: "AFG", numeric: "004", continent: "Asia" },
    CountryRaw { name: "Armenia", alpha2: "AM", alpha3: "ARM", numeric: "051", continent: "Asia" },
    CountryRaw { name: "Azerbaijan", alpha2: "AZ", alpha3: "AZE", numeric: "031", continent: "Asia" },
    CountryRaw { name: "Bahrain", alpha2: "BH", alpha3: "BHR", numeric: "048", continent: "Asia" },
    CountryRaw { name: "Bangladesh", alpha2: "BD", alpha3: "BGD", numeric: "050", continent: "Asia" },
    CountryRaw { name: "Bhutan", alpha2: "BT", alpha3: "BTN", numeric: "064", continent: "Asia" },
    CountryRaw { name: "Brunei", alpha2: "BN", alpha3: "BRN", numeric: "096", continent: "Asia" },
    CountryRaw { name: "Cambodia", alpha2: "KH", alpha3: "KHM", numeric: "116", continent: "Asia" },
    CountryRaw { name: "China", alpha2: "CN", alpha3: "CHN", numeric: "156", continent: "Asia" },
    CountryRaw { name: "Cyprus", alpha2: "CY", alpha3: "CYP", numeric: "196", continent: "Asia" },
    CountryRaw { name: "Georgia", alpha2: "GE", alpha3: "GEO", numeric: "268", continent: "Asia" },
    CountryRaw { name: "Hong Kong", alpha2: "HK", alpha3: "HKG", numeric: "344", continent: "Asia" },
    CountryRaw { name: "India", alpha2: "IN", alpha3: "IND", numeric: "356", continent: "Asia" },
    CountryRaw { name: "Indonesia", alpha2: "ID", alpha3: "IDN", numeric: "360", continent: "Asia" },
    CountryRaw { name: "Iran", alpha2: "IR", alpha3: "IRN", numeric: "364", continent: "Asia" },
    CountryRaw { name: "Iraq", alpha2: "IQ", alpha3: "IRQ", numeric: "368", continent: "Asia" },
    CountryRaw { name: "Israel", alpha2: "IL", alpha3: "ISR", numeric: "376", continent: "Asia" },
    CountryRaw { name: "Japan", alpha2: "JP", alpha3: "JPN", numeric: "392", continent: "Asia" },
    CountryRaw { name: "Jordan", alpha2: "JO", alpha3: "JOR", numeric: "400", continent: "Asia" },
    CountryRaw { name: "Kazakhstan", alpha2: "KZ", alpha3: "KAZ", numeric: "398", continent: "Asia" },
    CountryRaw { name: "Kuwait", alpha2: "KW", alpha3: "KWT", numeric: "414", continent: "Asia" },
    CountryRaw { name: "Kyrgyzstan", alpha2: "KG", alpha3: "KGZ", numeric: "417", continent: "Asia" },
    CountryRaw { name: "Laos", alpha2: "LA", alpha3: "LAO", numeric: "418", continent: "Asia" },
    CountryRaw { name: "Lebanon", alpha2: "LB", alpha3: "LBN", numeric: "422", continent: "Asia" },
    CountryRaw { name: "Macau", alpha2: "MO", alpha3: "MAC", numeric: "446", continent: "Asia" },
    CountryRaw { name: "Malaysia", alpha2: "MY", alpha3: "MYS", numeric: "458", continent: "Asia" },
    CountryRaw { name: "Maldives", alpha2: "MV", alpha3: "MDV", numeric: "462", continent: "Asia" },
    CountryRaw { name: "Mongolia", alpha2: "MN", alpha3: "MNG", numeric: "496", continent: "Asia" },
    CountryRaw { name: "Myanmar", alpha2: "MM", alpha3: "MMR", numeric: "104", continent: "Asia" },
    CountryRaw { name: "Nepal", alpha2: "NP", alpha3: "NPL", numeric: "524", continent: "Asia" },
    CountryRaw { name: "North Korea", alpha2: "KP", alpha3: "PRK", numeric: "408", continent: "Asia" },
    CountryRaw { name: "Oman", alpha2: "OM", alpha3: "OMN", numeric: "512", continent: "Asia" },
    CountryRaw { name: "Pakistan", alpha2: "PK", alpha3: "PAK", numeric: "586", continent: "Asia" },
    CountryRaw { name: "Palestine", alpha2: "PS", alpha3: "PSE", numeric: "275", continent: "Asia" },
    CountryRaw { name: "Philippines", alpha2: "PH", alpha3: "PHL", numeric: "608", continent: "Asia" },
    CountryRaw { name: "Qatar", alpha2: "QA", alpha3: "QAT", numeric: "634", continent: "Asia" },
    CountryRaw { name: "Saudi Arabia", alpha2: "SA", alpha3: "SAU", numeric: "682", continent: "Asia" },
    CountryRaw { name: "Singapore", alpha2: "SG", alpha3: "SGP", numeric: "702", continent: "Asia" },
    CountryRaw { name: "South Korea", alpha2: "KR", alpha3: "KOR", numeric: "410", continent: "Asia" },
    CountryRaw { name: "Sri Lanka", alpha2: "LK", alpha3: "LKA", numeric: "144", continent: "Asia" },
    CountryRaw { name: "Syria", alpha2: "SY", alpha3: "SYR", numeric: "760", continent: "Asia" },
    CountryRaw { name: "Taiwan", alpha2: "TW", alpha3: "TWN", numeric: "158", continent: "Asia" },
    CountryRaw { name: "Tajikistan", alpha2: "TJ", alpha3: "TJK", numeric: "762", continent: "Asia" },
    CountryRaw { name: "Thailand", alpha2: "TH", alpha3: "THA", numeric: "764", continent: "Asia" },
    CountryRaw { name: "Timor-Leste", alpha2: "TL", alpha3: "TLS", numeric: "626", continent: "Asia" },
    CountryRaw { name: "Turkey", alpha2: "TR", alpha3: "TUR", numeric: "792", continent: "Asia" },
    CountryRaw { name: "Turkmenistan", alpha2: "TM", alpha3: "TKM", numeric: "795", continent: "Asia" },
    CountryRaw { name: "United Arab Emirates", alpha2: "AE", alpha3: "ARE", numeric: "784", continent: "Asia" },
    CountryRaw { name: "Uzbekistan", alpha2: "UZ", alpha3: "UZB", numeric: "860", continent: "Asia" },
    CountryRaw { name: "Vietnam", alpha2: "VN", alpha3: "VNM", numeric: "704", continent: "Asia" },
    CountryRaw { name: "Yemen", alpha2: "YE", alpha3: "YEM", numeric: "887", continent: "Asia" },
    CountryRaw { name: "Albania", alpha2: "AL", alpha3: "ALB", numeric: "008", continent: "Europe" },
    CountryRaw { name: "Andorra", alpha2: "AD", alpha3: "AND", numeric: "020", continent: "Europe" },
    CountryRaw { name: "Austria", alpha2: "AT", alpha3: "AUT", numeric: "040", continent: "Europe" },
    CountryRaw { name: "Belarus", alpha2: "BY", alpha3: "BLR", numeric: "112", continent: "Europe" },
    CountryRaw { name: "Belgium", alpha2: "BE", alpha3: "BEL", numeric: "056", continent: "Europe" },
    CountryRaw { name: "Bosnia and Herzegovina", alpha2: "BA", alpha3: "BIH", numeric: "070", continent: "Europe" },
    CountryRaw { name: "Bulgaria", alpha2: "BG", alpha3: "BGR", numeric: "100", continent: "Europe" },
    CountryRaw { name: "Croatia", alpha2: "HR", alpha3: "HRV", numeric: "191", continent: "Europe" },
    CountryRaw { name: "Czech Republic", alpha2: "CZ", alpha3: "CZE", numeric: "203", continent: "Europe" },
    CountryRaw { name: "Denmark", alpha2: "DK", alpha3: "DNK", numeric: "208", continent: "Europe" },
    CountryRaw { name: "Estonia", alpha2: "EE", alpha3: "EST", numeric: "233", continent: "Europe" },
    CountryRaw { name: "Finland", alpha2: "FI", alpha3: "FIN", numeric: "246", continent: "Europe" },
    CountryRaw { name: "France", alpha2: "FR", alpha3: "FRA", numeric: "250", continent: "Europe" },
    CountryRaw { name: "Germany", alpha2: "DE", alpha3: "DEU", numeric: "276", continent: "Europe" },
    CountryRaw { name: "Greece", alpha2: "GR", alpha3: "GRC", numeric: "300", continent: "Europe" },
    CountryRaw { name: "Hungary", alpha2: "HU", alpha3: "HUN", numeric: "348", continent: "Europe" },
    CountryRaw { name: "Iceland", alpha2: "IS", alpha3: "ISL", numeric: "352", continent: "Europe" },
    CountryRaw { name: "Ireland", alpha2: "IE", alpha3: "IRL", numeric: "372", continent: "Europe" },
    CountryRaw { name: "Italy", alpha2: "IT", alpha3: "ITA", numeric: "380", continent: "Europe" },
    CountryRaw { name: "Kosovo", alpha2: "XK", alpha3: "XKX", numeric: "383", continent: "Europe" },
    CountryRaw { name: "Latvia", alpha2: "LV", alpha3: "LVA", numeric: "428", continent: "Europe" },
    CountryRaw { name: "Liechtenstein", alpha2: "LI", alpha3: "LIE", numeric: "438", continent: "Europe" },
    CountryRaw { name: "Lithuania", alpha2: "LT", alpha3: "LTU", numeric: "440", continent: "Europe" },
    CountryRaw { name: "Luxembourg", alpha2: "LU", alpha3: "LUX", numeric: "442", continent: "Europe" },
    CountryRaw { name: "Malta", alpha2: "MT", alpha3: "MLT", numeric: "470", continent: "Europe" },
    CountryRaw { name: "Moldova", alpha2: "MD", alpha3: "MDA", numeric: "498", continent: "Europe" },
    CountryRaw { name: "Monaco", alpha2: "MC", alpha3: "MCO", numeric: "492", continent: "Europe" },
    CountryRaw { name: "Montenegro", alpha2: "ME", alpha3: "MNE", numeric: "499", continent: "Europe" },
    CountryRaw { name: "Netherlands", alpha2: "NL", alpha3: "NLD", numeric: "528", continent: "Europe" },
    CountryRaw { name: "North Macedonia", alpha2: "MK", alpha3: "MKD", numeric: "807", continent: "Europe" },
    CountryRaw { name: "Norway", alpha2: "NO", alpha3: "NOR", numeric: "578", continent: "Europe" },
    CountryRaw { name: "Poland", alpha2: "PL", alpha3: "POL", numeric: "616", continent: "Europe" },
    CountryRaw { name: "Portugal", alpha2: "PT", alpha3: "PRT", numeric: "620", continent: "Europe" },
    CountryRaw { name: "Romania", alpha2: "RO", alpha3: "ROU", numeric: "642", continent: "Europe" },
    CountryRaw { name: "Russia", alpha2: "RU", alpha3: "RUS", numeric: "643", continent: "Europe" },
    CountryRaw { name: "San Marino", alpha2: "SM", alpha3: "SMR", numeric: "674", continent: "Europe" },
    CountryRaw { name: "Serbia", alpha2: "RS", alpha3: "SRB", numeric: "688", continent: "Europe" },
    CountryRaw { name: "Slovakia", alpha2: "SK", alpha3: "SVK", numeric: "703", continent: "Europe" },
    CountryRaw { name: "Slovenia", alpha2: "SI", alpha3: "SVN", numeric: "705", continent: "Europe" },
    CountryRaw { name: "Spain", alpha2: "ES", alpha3: "ESP", numeric: "724", continent: "Europe" },
    CountryRaw { name: "Sweden", alpha2: "SE", alpha3: "SWE", numeric: "752", continent: "Europe" },
    CountryRaw { name: "Switzerland", alpha2: "CH", alpha3: "CHE", numeric: "756", continent: "Europe" },
    CountryRaw { name: "Ukraine", alpha2: "UA", alpha3: "UKR", numeric: "804", continent: "Europe" },
    CountryRaw { name: "United Kingdom", alpha2: "GB", alpha3: "GBR", numeric: "826", continent: "Europe" },
    CountryRaw { name: "Vatican City", alpha2: "VA", alpha3: "VAT", numeric: "336", continent: "Europe" },
    CountryRaw { name: "Antigua and Barbuda", alpha2: "AG", alpha3: "ATG", numeric: "028", continent: "North America" },
    CountryRaw { name: "Bahamas", alpha2: "BS", alpha3: "BHS", numeric: "044", continent: "North America" },
    CountryRaw { name: "Barbados", alpha2: "BB", alpha3: "BRB", numeric: "052", continent: "North America" },
    CountryRaw { name: "Belize", alpha2: "BZ", alpha3: "BLZ", numeric: "084", continent: "North America" },
    CountryRaw { name: "Canada", alpha2: "CA", alpha3: "CAN", numeric: "124", continent: "North America" },
    CountryRaw { name: "Costa Rica", alpha2: "CR", alpha3: "CRI", numeric: "188", continent: "North America" },
    CountryRaw { name: "Cuba", alpha2: "CU", alpha3: "CUB", numeric: "192", continent: "North America" },
    CountryRaw { name: "Dominica", alpha2: "DM", alpha3: "DMA", numeric: "212", continent: "North America" },
    CountryRaw { name: "Dominican Republic", alpha2: "DO", alpha3: "DOM", numeric: "214", continent: "North America" },
    CountryRaw { name: "El Salvador", alpha2: "SV", alpha3: "SLV", numeric: "222", continent: "North America" },
    CountryRaw { name: "Grenada", alpha2: "GD", alpha3: "GRD", numeric: "308", continent: "North America" },
    CountryRaw { name: "Guatemala", alpha2: "GT", alpha3: "GTM", numeric: "320", continent: "North America" },
    CountryRaw { name: "Haiti", alpha2: "HT", alpha3: "HTI", numeric: "332", continent: "North America" },
    CountryRaw { name: "Honduras", alpha2: "HN", alpha3: "HND", numeric: "340", continent: "North America" },
    CountryRaw { name: "Jamaica", alpha2: "JM", alpha3: "JAM", numeric: "388", continent: "North America" },
    CountryRaw { name: "Mexico", alpha2: "MX", alpha3: "MEX", numeric: "484", continent: "North America" },
    CountryRaw { name: "Nicaragua", alpha2: "NI", alpha3: "NIC", numeric: "558", continent: "North America" },
    CountryRaw { name: "Panama", alpha2: "PA", alpha3: "PAN", numeric: "591", continent: "North America" },
    CountryRaw { name: "Saint Kitts and Nevis", alpha2: "KN", alpha3: "KNA", numeric: "659", continent: "North America" },
    CountryRaw { name: "Saint Lucia", alpha2: "LC", alpha3: "LCA", numeric: "662", continent: "North America" },
    CountryRaw { name: "Saint Vincent and the Grenadines", alpha2: "VC", alpha3: "VCT", numeric: "670", continent: "North America" },
    CountryRaw { name: "Trinidad and Tobago", alpha2: "TT", alpha3: "TTO", numeric: "780", continent: "North America" },
    CountryRaw { name: "United States", alpha2: "US", alpha3: "USA", numeric: "840", continent: "North America" },
    CountryRaw { name: "Australia", alpha2: "AU", alpha3: "AUS", numeric: "036", continent: "Oceania" },
    CountryRaw { name: "Fiji", alpha2: "FJ", alpha3: "FJI", numeric: "242", continent: "Oceania" },
    CountryRaw { name: "Kiribati", alpha2: "KI", alpha3: "KIR", numeric: "296", continent: "Oceania" },
    CountryRaw { name: "Marshall Islands", alpha2: "MH", alpha3: "MHL", numeric: "584", continent: "Oceania" },
    CountryRaw { name: "Micronesia", alpha2: "FM", alpha3: "FSM", numeric: "583", continent: "Oceania" },
    CountryRaw { name: "Nauru", alpha2: "NR", alpha3: "NRU", numeric: "520", continent: "Oceania" },
    CountryRaw { name: "New Zealand", alpha2: "NZ", alpha3: "NZL", numeric: "554", continent: "Oceania" },
    CountryRaw { name: "Palau", alpha2: "PW", alpha3: "PLW", numeric: "585", continent: "Oceania" },
    CountryRaw { name: "Papua New Guinea", alpha2: "PG", alpha3: "PNG", numeric: "598", continent: "Oceania" },
    CountryRaw { name: "Samoa", alpha2: "WS", alpha3: "WSM", numeric: "882", continent: "Oceania" },
    CountryRaw { name: "Solomon Islands", alpha2: "SB", alpha3: "SLB", numeric: "090", continent: "Oceania" },
    CountryRaw { name: "Tonga", alpha2: "TO", alpha3: "TON", numeric: "776", continent: "Oceania" },
    CountryRaw { name: "Tuvalu", alpha2: "TV", alpha3: "TUV", numeric: "798", continent: "Oceania" },
    CountryRaw { name: "Vanuatu", alpha2: "VU", alpha3: "VUT", numeric: "548", continent: "Oceania" },
    CountryRaw { name: "Argentina", alpha2: "AR", alpha3: "ARG", numeric: "032", continent: "South America" },
    CountryRaw { name: "Bolivia", alpha2: "BO", alpha3: "BOL", numeric: "068", continent: "South America" },
    CountryRaw { name: "Brazil", alpha2: "BR", alpha3: "BRA", numeric: "076", continent: "South America" },
    CountryRaw { name: "Chile", alpha2: "CL", alpha3: "CHL", numeric: "152", continent: "South America" },
    CountryRaw { name: "Colombia", alpha2: "CO", alpha3: "COL", numeric: "170", continent: "South America" },
    CountryRaw { name: "Ecuador", alpha2: "EC", alpha3: "ECU", numeric: "218", continent: "South America" },
    CountryRaw { name: "Guyana", alpha2: "GY", alpha3: "GUY", numeric: "328", continent: "South America" },
    CountryRaw { name: "Paraguay", alpha2: "PY", alpha3: "PRY", numeric: "600", continent: "South America" },
    CountryRaw { name: "Peru", alpha2: "PE", alpha3: "PER", numeric: "604", continent: "South America" },
    CountryRaw { name: "Suriname", alpha2: "SR", alpha3: "SUR", numeric: "740", continent: "South America" },
    CountryRaw { name: "Uruguay", alpha2: "UY", alpha3: "URY", numeric: "858", continent: "South America" },
    CountryRaw { name: "Venezuela", alpha2: "VE", alpha3: "VEN", numeric: "862", continent: "South America" },
];
