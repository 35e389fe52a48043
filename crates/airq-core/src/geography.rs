//! Registry of Indian cities grouped by region and state.
//!
//! The registry is the source of truth for city lookups: region and state
//! resolution, size tiers, and the flattened city list offered to callers.
//! Cities missing from the registry still work everywhere else in the
//! platform, they just fall back to neutral defaults.

/// Broad geographic region of India.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    North,
    South,
    East,
    West,
    Northeast,
    /// A city the registry does not know about.
    Other,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Northeast => "Northeast",
            Region::Other => "Other",
        }
    }
}

/// Population tier used when scaling pollution baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Mega,
    Large,
    Other,
}

/// One state and the cities tracked for it.
#[derive(Debug)]
pub struct StateEntry {
    pub state: &'static str,
    pub cities: &'static [&'static str],
}

/// One region and its member states.
#[derive(Debug)]
pub struct RegionEntry {
    pub region: Region,
    pub states: &'static [StateEntry],
}

/// Full registry, scanned top to bottom. A city listed under two states
/// resolves to whichever appears first.
pub static CITY_REGISTRY: &[RegionEntry] = &[
    RegionEntry {
        region: Region::North,
        states: &[
            StateEntry {
                state: "Delhi",
                cities: &["Delhi", "New Delhi", "Dwarka", "Rohini", "Pitampura", "Janakpuri"],
            },
            StateEntry {
                state: "Uttar Pradesh",
                cities: &[
                    "Lucknow", "Kanpur", "Varanasi", "Agra", "Meerut", "Ghaziabad", "Noida",
                    "Allahabad", "Gorakhpur", "Aligarh", "Bareilly", "Moradabad", "Saharanpur",
                ],
            },
            StateEntry {
                state: "Punjab",
                cities: &[
                    "Ludhiana", "Amritsar", "Jalandhar", "Patiala", "Bathinda", "Mohali",
                    "Pathankot", "Hoshiarpur", "Batala", "Moga",
                ],
            },
            StateEntry {
                state: "Haryana",
                cities: &[
                    "Gurugram", "Faridabad", "Panipat", "Ambala", "Yamunanagar", "Rohtak",
                    "Hisar", "Karnal", "Sonipat", "Panchkula",
                ],
            },
            StateEntry {
                state: "Rajasthan",
                cities: &[
                    "Jaipur", "Jodhpur", "Udaipur", "Kota", "Ajmer", "Bikaner", "Bhilwara",
                    "Alwar", "Sikar", "Sri Ganganagar",
                ],
            },
        ],
    },
    RegionEntry {
        region: Region::South,
        states: &[
            StateEntry {
                state: "Karnataka",
                cities: &[
                    "Bangalore", "Mysuru", "Hubli", "Mangalore", "Belgaum", "Gulbarga",
                    "Davanagere", "Bellary", "Shimoga", "Tumkur",
                ],
            },
            StateEntry {
                state: "Tamil Nadu",
                cities: &[
                    "Chennai", "Coimbatore", "Madurai", "Trichy", "Salem", "Tirunelveli",
                    "Vellore", "Erode", "Thoothukkudi", "Dindigul",
                ],
            },
            StateEntry {
                state: "Kerala",
                cities: &[
                    "Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur", "Kollam",
                    "Palakkad", "Alappuzha", "Kannur", "Kottayam",
                ],
            },
            StateEntry {
                state: "Andhra Pradesh",
                cities: &[
                    "Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Kurnool",
                    "Rajahmundry", "Tirupati", "Kakinada", "Kadapa",
                ],
            },
            StateEntry {
                state: "Telangana",
                cities: &[
                    "Hyderabad", "Warangal", "Nizamabad", "Karimnagar", "Khammam",
                    "Ramagundam", "Secunderabad", "Mahbubnagar",
                ],
            },
        ],
    },
    RegionEntry {
        region: Region::East,
        states: &[
            StateEntry {
                state: "West Bengal",
                cities: &[
                    "Kolkata", "Howrah", "Durgapur", "Asansol", "Siliguri", "Bardhaman",
                    "Malda", "Baharampur", "Krishnanagar",
                ],
            },
            StateEntry {
                state: "Bihar",
                cities: &[
                    "Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Darbhanga", "Arrah",
                    "Bihar Sharif", "Begusarai", "Chhapra",
                ],
            },
            StateEntry {
                state: "Odisha",
                cities: &[
                    "Bhubaneswar", "Cuttack", "Rourkela", "Berhampur", "Sambalpur", "Puri",
                    "Balasore", "Brahmapur", "Bargarh",
                ],
            },
            StateEntry {
                state: "Jharkhand",
                cities: &[
                    "Ranchi", "Jamshedpur", "Dhanbad", "Bokaro", "Deoghar", "Hazaribagh",
                    "Giridih", "Ramgarh",
                ],
            },
        ],
    },
    RegionEntry {
        region: Region::West,
        states: &[
            StateEntry {
                state: "Maharashtra",
                cities: &[
                    "Mumbai", "Pune", "Nagpur", "Thane", "Nashik", "Aurangabad", "Solapur",
                    "Kalyan", "Navi Mumbai", "Ahmednagar", "Kolhapur",
                ],
            },
            StateEntry {
                state: "Gujarat",
                cities: &[
                    "Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar", "Jamnagar",
                    "Gandhinagar", "Junagadh", "Anand", "Bharuch",
                ],
            },
            StateEntry {
                state: "Madhya Pradesh",
                cities: &[
                    "Indore", "Bhopal", "Jabalpur", "Gwalior", "Ujjain", "Sagar", "Dewas",
                    "Satna", "Ratlam",
                ],
            },
            StateEntry {
                state: "Goa",
                cities: &["Panaji", "Margao", "Vasco da Gama", "Mapusa", "Ponda"],
            },
        ],
    },
    RegionEntry {
        region: Region::Northeast,
        states: &[
            StateEntry {
                state: "Assam",
                cities: &[
                    "Guwahati", "Silchar", "Dibrugarh", "Jorhat", "Nagaon", "Tinsukia",
                    "Tezpur", "Karimganj",
                ],
            },
            StateEntry {
                state: "Meghalaya",
                cities: &["Shillong", "Tura", "Jowai", "Nongstoin", "Williamnagar"],
            },
            StateEntry {
                state: "Tripura",
                cities: &["Agartala", "Udaipur", "Dharmanagar", "Kailasahar"],
            },
            StateEntry {
                state: "Manipur",
                cities: &["Imphal", "Thoubal", "Kakching", "Ukhrul"],
            },
            StateEntry {
                state: "Nagaland",
                cities: &["Kohima", "Dimapur", "Mokokchung", "Tuensang"],
            },
            StateEntry {
                state: "Arunachal Pradesh",
                cities: &["Itanagar", "Naharlagun", "Pasighat", "Tawang"],
            },
            StateEntry {
                state: "Sikkim",
                cities: &["Gangtok", "Namchi", "Gyalshing", "Mangan"],
            },
        ],
    },
];

/// Cities with populations above ten million.
pub static MEGA_CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bangalore", "Kolkata", "Chennai", "Hyderabad",
];

/// Cities with populations between four and ten million.
pub static LARGE_CITIES: &[&str] = &[
    "Pune", "Ahmedabad", "Surat", "Lucknow", "Jaipur", "Nagpur",
];

/// Resolves a city to its region and state. Lookup is case sensitive and
/// unknown cities map to `(Region::Other, "Other")`.
pub fn region_and_state(city: &str) -> (Region, &'static str) {
    for entry in CITY_REGISTRY {
        for state in entry.states {
            if state.cities.iter().any(|c| *c == city) {
                return (entry.region, state.state);
            }
        }
    }
    (Region::Other, "Other")
}

/// Region of a city, `Region::Other` when unknown.
pub fn region_of(city: &str) -> Region {
    region_and_state(city).0
}

/// Population tier of a city. Cities outside the mega and large lists
/// fall into `SizeTier::Other`.
pub fn size_tier(city: &str) -> SizeTier {
    if MEGA_CITIES.iter().any(|c| *c == city) {
        SizeTier::Mega
    } else if LARGE_CITIES.iter().any(|c| *c == city) {
        SizeTier::Large
    } else {
        SizeTier::Other
    }
}

/// Every registered city, sorted alphabetically with duplicates removed.
pub fn all_cities() -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = CITY_REGISTRY
        .iter()
        .flat_map(|entry| entry.states.iter())
        .flat_map(|state| state.cities.iter().copied())
        .collect();
    cities.sort_unstable();
    cities.dedup();
    cities
}
