//! Fuel grade enumeration.

use std::fmt;

/// A fuel grade understood by the price service.
///
/// `All` is the unfiltered view: stations appear regardless of which
/// grades they sell. The other three variants both select the
/// server-side filter and drive the local presence filter and price
/// ranking, always through exhaustive matches so that adding a grade is
/// a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Diesel,
    E10,
    Premium,
    All,
}

impl FuelType {
    /// Wire-level token for the price API `type` parameter.
    ///
    /// Note the asymmetry: the API calls premium petrol "super".
    pub fn api_token(self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::E10 => "e10",
            FuelType::Premium => "super",
            FuelType::All => "all",
        }
    }

    /// Parse a user-facing grade name.
    ///
    /// Matching is case-insensitive; anything unrecognized means the
    /// caller did not narrow the view, so it falls back to `All`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "diesel" => FuelType::Diesel,
            "e10" => FuelType::E10,
            "premium" => FuelType::Premium,
            _ => FuelType::All,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuelType::Diesel => "diesel",
            FuelType::E10 => "e10",
            FuelType::Premium => "premium",
            FuelType::All => "all",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_tokens() {
        assert_eq!(FuelType::Diesel.api_token(), "diesel");
        assert_eq!(FuelType::E10.api_token(), "e10");
        assert_eq!(FuelType::Premium.api_token(), "super");
        assert_eq!(FuelType::All.api_token(), "all");
    }

    #[test]
    fn from_name_known_grades() {
        assert_eq!(FuelType::from_name("diesel"), FuelType::Diesel);
        assert_eq!(FuelType::from_name("e10"), FuelType::E10);
        assert_eq!(FuelType::from_name("premium"), FuelType::Premium);
        assert_eq!(FuelType::from_name("all"), FuelType::All);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(FuelType::from_name("Diesel"), FuelType::Diesel);
        assert_eq!(FuelType::from_name("E10"), FuelType::E10);
        assert_eq!(FuelType::from_name("PREMIUM"), FuelType::Premium);
    }

    #[test]
    fn from_name_unknown_falls_back_to_all() {
        assert_eq!(FuelType::from_name(""), FuelType::All);
        assert_eq!(FuelType::from_name("super"), FuelType::All);
        assert_eq!(FuelType::from_name("lpg"), FuelType::All);
    }

    #[test]
    fn display() {
        assert_eq!(FuelType::Premium.to_string(), "premium");
        assert_eq!(FuelType::All.to_string(), "all");
    }
}
