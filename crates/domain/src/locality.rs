//! Locality value object and the fixed table of forecast areas

use std::fmt;

/// Administrative division of a locality, read off the trailing
/// marker of its official name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    /// Provincial or special municipality (`市`)
    City,
    /// County (`縣`)
    County,
}

impl Division {
    /// ASCII word used as the slug suffix
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::County => "county",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the fixed set of administrative areas this service reports
/// weather for.
///
/// The official name doubles as the upstream `locationName` query
/// value and the display name. The romanization is the lower-case
/// ASCII base of the route slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locality {
    name: &'static str,
    romanization: &'static str,
}

/// The 22 counties and cities covered by the 36-hour forecast dataset.
/// A `static` so route tables can hold `&'static Locality` borrows.
pub static LOCALITIES: [Locality; 22] = [
    Locality::new("臺北市", "taipei"),
    Locality::new("新北市", "new-taipei"),
    Locality::new("桃園市", "taoyuan"),
    Locality::new("臺中市", "taichung"),
    Locality::new("臺南市", "tainan"),
    Locality::new("高雄市", "kaohsiung"),
    Locality::new("基隆市", "keelung"),
    Locality::new("新竹市", "hsinchu"),
    Locality::new("新竹縣", "hsinchu"),
    Locality::new("苗栗縣", "miaoli"),
    Locality::new("彰化縣", "changhua"),
    Locality::new("南投縣", "nantou"),
    Locality::new("雲林縣", "yunlin"),
    Locality::new("嘉義市", "chiayi"),
    Locality::new("嘉義縣", "chiayi"),
    Locality::new("屏東縣", "pingtung"),
    Locality::new("宜蘭縣", "yilan"),
    Locality::new("花蓮縣", "hualien"),
    Locality::new("臺東縣", "taitung"),
    Locality::new("澎湖縣", "penghu"),
    Locality::new("金門縣", "kinmen"),
    Locality::new("連江縣", "lienchiang"),
];

impl Locality {
    const fn new(name: &'static str, romanization: &'static str) -> Self {
        Self { name, romanization }
    }

    /// Official name, sent upstream as `locationName` and echoed in
    /// responses
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Lower-case ASCII base of the route slug
    #[must_use]
    pub const fn romanization(&self) -> &'static str {
        self.romanization
    }

    /// Division read off the trailing marker of the official name
    #[must_use]
    pub fn division(&self) -> Division {
        if self.name.ends_with('縣') {
            Division::County
        } else {
            Division::City
        }
    }

    /// Route slug: romanization plus the division word, e.g.
    /// `taipei-city`, `changhua-county`
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}-{}", self.romanization, self.division().as_str())
    }

    /// Path this locality's forecast is served under
    #[must_use]
    pub fn route_path(&self) -> String {
        format!("/api/weather/{}", self.slug())
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
