use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the coefficients of a pseudo-static seismic analysis
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Seismic {
    /// Horizontal seismic coefficient kh
    pub kh: f64,

    /// Vertical seismic coefficient kv (scales the normal force by cos α - kv·sin α)
    pub kv: f64,
}

impl Seismic {
    /// Returns a static (zero) loading
    pub fn none() -> Self {
        Seismic { kh: 0.0, kv: 0.0 }
    }

    /// Allocates a new instance with the horizontal coefficient only
    pub fn horizontal(kh: f64) -> Result<Self, StrError> {
        Seismic::new(kh, 0.0)
    }

    /// Allocates a new instance
    pub fn new(kh: f64, kv: f64) -> Result<Self, StrError> {
        let seismic = Seismic { kh, kv };
        seismic.validate()?;
        Ok(seismic)
    }

    /// Checks the coefficients
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.kh.is_finite() || self.kh < 0.0 {
            return Err("horizontal seismic coefficient must be ≥ 0.0");
        }
        if !self.kv.is_finite() || self.kv < 0.0 || self.kv >= 1.0 {
            return Err("vertical seismic coefficient must be in [0, 1)");
        }
        Ok(())
    }

    /// Returns true if any coefficient is positive
    #[inline]
    pub fn is_active(&self) -> bool {
        self.kh > 0.0 || self.kv > 0.0
    }
}

/// Defines seismic zones with predefined horizontal coefficients
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum SeismicZone {
    Zone0,
    Zone1,
    Zone2,
    Zone2A,
    Zone3,

    /// Custom horizontal coefficient in [0, 0.5]
    Custom(f64),
}

impl SeismicZone {
    /// Returns the horizontal seismic coefficient of the zone
    pub fn kh(&self) -> Result<f64, StrError> {
        match self {
            SeismicZone::Zone0 => Ok(0.0),
            SeismicZone::Zone1 => Ok(0.05),
            SeismicZone::Zone2 => Ok(0.10),
            SeismicZone::Zone2A => Ok(0.15),
            SeismicZone::Zone3 => Ok(0.20),
            SeismicZone::Custom(kh) => {
                if *kh < 0.0 || *kh > 0.5 {
                    Err("custom seismic coefficient must be in [0, 0.5]")
                } else {
                    Ok(*kh)
                }
            }
        }
    }

    /// Returns the horizontal seismic loading of the zone
    pub fn seismic(&self) -> Result<Seismic, StrError> {
        Seismic::horizontal(self.kh()?)
    }
}

impl fmt::Display for Seismic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kv > 0.0 {
            write!(f, "kh={}, kv={}", self.kh, self.kv)
        } else {
            write!(f, "kh={}", self.kh)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Seismic, SeismicZone};

    #[test]
    fn handle_errors() {
        assert_eq!(
            Seismic::horizontal(-0.1).err(),
            Some("horizontal seismic coefficient must be ≥ 0.0")
        );
        assert_eq!(
            Seismic::new(0.1, 1.0).err(),
            Some("vertical seismic coefficient must be in [0, 1)")
        );
        assert_eq!(
            SeismicZone::Custom(0.6).kh().err(),
            Some("custom seismic coefficient must be in [0, 0.5]")
        );
    }

    #[test]
    fn zones_work() {
        assert_eq!(SeismicZone::Zone0.kh(), Ok(0.0));
        assert_eq!(SeismicZone::Zone1.kh(), Ok(0.05));
        assert_eq!(SeismicZone::Zone2.kh(), Ok(0.10));
        assert_eq!(SeismicZone::Zone2A.kh(), Ok(0.15));
        assert_eq!(SeismicZone::Zone3.kh(), Ok(0.20));
        assert_eq!(SeismicZone::Custom(0.12).seismic().unwrap().kh, 0.12);
        assert!(!SeismicZone::Zone0.seismic().unwrap().is_active());
    }

    #[test]
    fn display_works() {
        assert_eq!(format!("{}", Seismic::horizontal(0.15).unwrap()), "kh=0.15");
        assert_eq!(format!("{}", Seismic::new(0.1, 0.05).unwrap()), "kh=0.1, kv=0.05");
        assert_eq!(Seismic::default(), Seismic::none());
    }
}
