// crates/dropdowns-core/src/data/time_zones.rs
use crate::raw::TimeZoneRaw;

/// Representative zones, roughly ordered west to east within each region.
pub(crate) static TIME_ZONES: &[TimeZoneRaw] = &[
    TimeZoneRaw {
        iana_id: "Etc/UTC",
        windows_id: "UTC",
        display_name: "Coordinated Universal Time",
        abbreviation: "UTC",
        abbreviation_dst: None,
        utc_offset_minutes: 0,
        region: "Universal",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Pacific/Honolulu",
        windows_id: "Hawaiian Standard Time",
        display_name: "Hawaii",
        abbreviation: "HST",
        abbreviation_dst: None,
        utc_offset_minutes: -600,
        region: "Americas",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "America/Anchorage",
        windows_id: "Alaskan Standard Time",
        display_name: "Alaska",
        abbreviation: "AKST",
        abbreviation_dst: Some("AKDT"),
        utc_offset_minutes: -540,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Los_Angeles",
        windows_id: "Pacific Standard Time",
        display_name: "Pacific Time (US & Canada)",
        abbreviation: "PST",
        abbreviation_dst: Some("PDT"),
        utc_offset_minutes: -480,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Phoenix",
        windows_id: "US Mountain Standard Time",
        display_name: "Arizona",
        abbreviation: "MST",
        abbreviation_dst: None,
        utc_offset_minutes: -420,
        region: "Americas",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "America/Denver",
        windows_id: "Mountain Standard Time",
        display_name: "Mountain Time (US & Canada)",
        abbreviation: "MST",
        abbreviation_dst: Some("MDT"),
        utc_offset_minutes: -420,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Chicago",
        windows_id: "Central Standard Time",
        display_name: "Central Time (US & Canada)",
        abbreviation: "CST",
        abbreviation_dst: Some("CDT"),
        utc_offset_minutes: -360,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Mexico_City",
        windows_id: "Central Standard Time (Mexico)",
        display_name: "Mexico City",
        abbreviation: "CST",
        abbreviation_dst: None,
        utc_offset_minutes: -360,
        region: "Americas",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "America/New_York",
        windows_id: "Eastern Standard Time",
        display_name: "Eastern Time (US & Canada)",
        abbreviation: "EST",
        abbreviation_dst: Some("EDT"),
        utc_offset_minutes: -300,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Toronto",
        windows_id: "Eastern Standard Time",
        display_name: "Eastern Time (Canada)",
        abbreviation: "EST",
        abbreviation_dst: Some("EDT"),
        utc_offset_minutes: -300,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Halifax",
        windows_id: "Atlantic Standard Time",
        display_name: "Atlantic Time (Canada)",
        abbreviation: "AST",
        abbreviation_dst: Some("ADT"),
        utc_offset_minutes: -240,
        region: "Americas",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "America/Sao_Paulo",
        windows_id: "E. South America Standard Time",
        display_name: "Brasilia",
        abbreviation: "BRT",
        abbreviation_dst: None,
        utc_offset_minutes: -180,
        region: "Americas",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "America/Argentina/Buenos_Aires",
        windows_id: "Argentina Standard Time",
        display_name: "Buenos Aires",
        abbreviation: "ART",
        abbreviation_dst: None,
        utc_offset_minutes: -180,
        region: "Americas",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Atlantic/Azores",
        windows_id: "Azores Standard Time",
        display_name: "Azores",
        abbreviation: "AZOT",
        abbreviation_dst: Some("AZOST"),
        utc_offset_minutes: -60,
        region: "Atlantic",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Atlantic/Reykjavik",
        windows_id: "Greenwich Standard Time",
        display_name: "Reykjavik",
        abbreviation: "GMT",
        abbreviation_dst: None,
        utc_offset_minutes: 0,
        region: "Europe",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Europe/London",
        windows_id: "GMT Standard Time",
        display_name: "London, Dublin, Edinburgh",
        abbreviation: "GMT",
        abbreviation_dst: Some("BST"),
        utc_offset_minutes: 0,
        region: "Europe",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Europe/Paris",
        windows_id: "Romance Standard Time",
        display_name: "Paris, Brussels, Madrid",
        abbreviation: "CET",
        abbreviation_dst: Some("CEST"),
        utc_offset_minutes: 60,
        region: "Europe",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Europe/Berlin",
        windows_id: "W. Europe Standard Time",
        display_name: "Berlin, Amsterdam, Vienna",
        abbreviation: "CET",
        abbreviation_dst: Some("CEST"),
        utc_offset_minutes: 60,
        region: "Europe",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Europe/Helsinki",
        windows_id: "FLE Standard Time",
        display_name: "Helsinki, Kyiv, Riga",
        abbreviation: "EET",
        abbreviation_dst: Some("EEST"),
        utc_offset_minutes: 120,
        region: "Europe",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Europe/Athens",
        windows_id: "GTB Standard Time",
        display_name: "Athens, Bucharest",
        abbreviation: "EET",
        abbreviation_dst: Some("EEST"),
        utc_offset_minutes: 120,
        region: "Europe",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Europe/Moscow",
        windows_id: "Russian Standard Time",
        display_name: "Moscow, St. Petersburg",
        abbreviation: "MSK",
        abbreviation_dst: None,
        utc_offset_minutes: 180,
        region: "Europe",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Africa/Lagos",
        windows_id: "W. Central Africa Standard Time",
        display_name: "West Central Africa",
        abbreviation: "WAT",
        abbreviation_dst: None,
        utc_offset_minutes: 60,
        region: "Africa",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Africa/Cairo",
        windows_id: "Egypt Standard Time",
        display_name: "Cairo",
        abbreviation: "EET",
        abbreviation_dst: None,
        utc_offset_minutes: 120,
        region: "Africa",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Africa/Johannesburg",
        windows_id: "South Africa Standard Time",
        display_name: "Johannesburg, Pretoria",
        abbreviation: "SAST",
        abbreviation_dst: None,
        utc_offset_minutes: 120,
        region: "Africa",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Africa/Nairobi",
        windows_id: "E. Africa Standard Time",
        display_name: "Nairobi",
        abbreviation: "EAT",
        abbreviation_dst: None,
        utc_offset_minutes: 180,
        region: "Africa",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Dubai",
        windows_id: "Arabian Standard Time",
        display_name: "Dubai, Abu Dhabi",
        abbreviation: "GST",
        abbreviation_dst: None,
        utc_offset_minutes: 240,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Karachi",
        windows_id: "Pakistan Standard Time",
        display_name: "Karachi",
        abbreviation: "PKT",
        abbreviation_dst: None,
        utc_offset_minutes: 300,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Kolkata",
        windows_id: "India Standard Time",
        display_name: "Chennai, Kolkata, Mumbai, New Delhi",
        abbreviation: "IST",
        abbreviation_dst: None,
        utc_offset_minutes: 330,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Dhaka",
        windows_id: "Bangladesh Standard Time",
        display_name: "Dhaka",
        abbreviation: "BST",
        abbreviation_dst: None,
        utc_offset_minutes: 360,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Bangkok",
        windows_id: "SE Asia Standard Time",
        display_name: "Bangkok, Hanoi, Jakarta",
        abbreviation: "ICT",
        abbreviation_dst: None,
        utc_offset_minutes: 420,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Singapore",
        windows_id: "Singapore Standard Time",
        display_name: "Singapore, Kuala Lumpur",
        abbreviation: "SGT",
        abbreviation_dst: None,
        utc_offset_minutes: 480,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Hong_Kong",
        windows_id: "China Standard Time",
        display_name: "Hong Kong",
        abbreviation: "HKT",
        abbreviation_dst: None,
        utc_offset_minutes: 480,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Shanghai",
        windows_id: "China Standard Time",
        display_name: "Beijing, Shanghai",
        abbreviation: "CST",
        abbreviation_dst: None,
        utc_offset_minutes: 480,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Taipei",
        windows_id: "Taipei Standard Time",
        display_name: "Taipei",
        abbreviation: "CST",
        abbreviation_dst: None,
        utc_offset_minutes: 480,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Tokyo",
        windows_id: "Tokyo Standard Time",
        display_name: "Tokyo, Osaka, Sapporo",
        abbreviation: "JST",
        abbreviation_dst: None,
        utc_offset_minutes: 540,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Asia/Seoul",
        windows_id: "Korea Standard Time",
        display_name: "Seoul",
        abbreviation: "KST",
        abbreviation_dst: None,
        utc_offset_minutes: 540,
        region: "Asia",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Australia/Perth",
        windows_id: "W. Australia Standard Time",
        display_name: "Perth",
        abbreviation: "AWST",
        abbreviation_dst: None,
        utc_offset_minutes: 480,
        region: "Pacific",
        observes_dst: false,
    },
    TimeZoneRaw {
        iana_id: "Australia/Adelaide",
        windows_id: "Cen. Australia Standard Time",
        display_name: "Adelaide",
        abbreviation: "ACST",
        abbreviation_dst: Some("ACDT"),
        utc_offset_minutes: 570,
        region: "Pacific",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Australia/Sydney",
        windows_id: "AUS Eastern Standard Time",
        display_name: "Sydney, Melbourne, Canberra",
        abbreviation: "AEST",
        abbreviation_dst: Some("AEDT"),
        utc_offset_minutes: 600,
        region: "Pacific",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Pacific/Auckland",
        windows_id: "New Zealand Standard Time",
        display_name: "Auckland, Wellington",
        abbreviation: "NZST",
        abbreviation_dst: Some("NZDT"),
        utc_offset_minutes: 720,
        region: "Pacific",
        observes_dst: true,
    },
    TimeZoneRaw {
        iana_id: "Pacific/Fiji",
        windows_id: "Fiji Standard Time",
        display_name: "Fiji",
        abbreviation: "FJT",
        abbreviation_dst: None,
        utc_offset_minutes: 720,
        region: "Pacific",
        observes_dst: false,
    },
];
