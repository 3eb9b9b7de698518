//! Age banding for goal and activity templates.

/// Developmental age bands used to parameterise templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// Under 3 years.
    Toddler,
    /// 3 through 5 years.
    Preschool,
    /// 6 years and up.
    SchoolAge,
}

impl AgeBand {
    pub fn from_years(age: u32) -> Self {
        if age < 3 {
            AgeBand::Toddler
        } else if age < 6 {
            AgeBand::Preschool
        } else {
            AgeBand::SchoolAge
        }
    }

    /// Pick the band-specific variant of a template fragment.
    pub fn pick<'a>(&self, toddler: &'a str, preschool: &'a str, school_age: &'a str) -> &'a str {
        match self {
            AgeBand::Toddler => toddler,
            AgeBand::Preschool => preschool,
            AgeBand::SchoolAge => school_age,
        }
    }
}
