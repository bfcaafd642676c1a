//! Literal statistics from NYC Open Data, 311 Service Requests
//! (dataset erm2-nwe9), December 1-31, 2025.

pub const MONTH_START: (i32, u32, u32) = (2025, 12, 1);

pub const GRAND_TOTAL: u64 = 332_102;

/// Median hours from creation to closure across a 5,000-request sample of
/// closed requests.
pub const MEDIAN_RESPONSE_HOURS: f64 = 3.5;

pub const DAILY_COUNTS: [u64; 31] = [
    12304, 12226, 12507, 13116, 13129, 11185, 10629, 12547, 14078, 12181, //
    11675, 12034, 10474, 11274, 16388, 13946, 10499, 9555, 10170, 8484, //
    8013, 10007, 8354, 7780, 6216, 8510, 7838, 8698, 9452, 10072, 8761,
];

/// (complaint type, total, closed)
pub const COMPLAINTS: &[(&str, u64, u64)] = &[
    ("Heat/Hot Water", 63902, 63843),
    ("Noise - Residential", 57386, 57386),
    ("Illegal Parking", 44161, 44161),
    ("Blocked Driveway", 16409, 16409),
    ("Unsanitary Condition", 9692, 5664),
    ("Snow or Ice", 8700, 8693),
    ("Plumbing", 6841, 4636),
    ("Paint/Plaster", 5183, 3704),
    ("Street Condition", 4830, 4568),
    ("Noise - Street", 4787, 4787),
    ("Door/Window", 4707, 2887),
    ("Abandoned Vehicle", 4576, 4576),
    ("Water System", 4202, 3873),
    ("Traffic Signal", 4152, 4148),
    ("Noise - Commercial", 3964, 3964),
];

/// (code, display name, total, closed, median hours)
pub const AGENCIES: &[(&str, &str, u64, u64, f64)] = &[
    ("NYPD", "Police", 142720, 142720, 0.97),
    ("HPD", "Housing", 105826, 90340, 54.90),
    ("DSNY", "Sanitation", 27485, 26633, 47.02),
    ("DOT", "Transportation", 16414, 15014, 45.21),
    ("DEP", "Environmental", 12611, 11939, 25.57),
    ("DOB", "Buildings", 7870, 7870, 27.22),
    ("DPR", "Parks", 5206, 3440, 44.28),
    ("DOHMH", "Health", 5156, 2648, 12.70),
    ("TLC", "Taxi/Limo", 3087, 1007, 35.96),
    ("DHS", "Homeless Services", 2290, 2263, 20.77),
];

/// (borough, total, closed, median hours)
pub const BOROUGHS: &[(&str, u64, u64, f64)] = &[
    ("Bronx", 96322, 90309, 22.38),
    ("Brooklyn", 93503, 86062, 2.90),
    ("Queens", 69534, 64649, 3.28),
    ("Manhattan", 61500, 53473, 3.95),
    ("Staten Island", 11009, 10314, 22.77),
];

/// Hand-curated borough x complaint counts; not every pair is present.
pub const BOROUGH_COMPLAINTS: &[(&str, &str, u64)] = &[
    ("Bronx", "Noise-Residential", 37472),
    ("Bronx", "Heat/Hot Water", 22787),
    ("Brooklyn", "Illegal Parking", 17623),
    ("Brooklyn", "Heat/Hot Water", 16866),
    ("Manhattan", "Heat/Hot Water", 15586),
    ("Queens", "Illegal Parking", 13828),
    ("Queens", "Heat/Hot Water", 8141),
];

/// (borough, most frequent complaint, count)
pub const BOROUGH_TOP_ISSUES: &[(&str, &str, u64)] = &[
    ("Bronx", "Noise-Residential", 37472),
    ("Brooklyn", "Illegal Parking", 17623),
    ("Manhattan", "Heat/Hot Water", 15586),
    ("Queens", "Illegal Parking", 13828),
    ("Staten Island", "Illegal Parking", 1331),
];

pub const CHANNELS: &[(&str, u64)] = &[
    ("Online", 152801),
    ("Mobile", 88719),
    ("Phone", 69946),
    ("Unknown", 20636),
];

pub const STATUSES: &[(&str, u64)] = &[
    ("Closed", 301350),
    ("Open", 19468),
    ("In Progress", 9308),
    ("Other", 1976),
];
