use super::FactorOfSafety;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the limit-equilibrium method
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Method {
    /// Swedish (Ordinary) Method of Slices
    Swedish,

    /// Bishop's Simplified Method
    Bishop,

    /// Both methods (Bishop first)
    Both,
}

impl Method {
    /// Returns the single methods corresponding to this selection
    pub fn singles(&self) -> Vec<Method> {
        match self {
            Method::Swedish => vec![Method::Swedish],
            Method::Bishop => vec![Method::Bishop],
            Method::Both => vec![Method::Bishop, Method::Swedish],
        }
    }

    /// Returns the label of the method
    pub fn label(&self) -> &'static str {
        match self {
            Method::Swedish => "Swedish (Ordinary Method)",
            Method::Bishop => "Bishop's Simplified",
            Method::Both => "Bishop's Simplified and Swedish (Ordinary Method)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Method {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "swedish" => Ok(Method::Swedish),
            "bishop" => Ok(Method::Bishop),
            "both" => Ok(Method::Both),
            _ => Err("unknown method (use swedish, bishop, or both)"),
        }
    }
}

/// Classifies a factor of safety against acceptance criteria
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Safety {
    /// Static FS ≥ 1.5 or seismic FS ≥ 1.1
    Safe,

    /// Static 1.0 ≤ FS < 1.5
    Marginal,

    /// Static FS < 1.0 or seismic FS < 1.1
    Unsafe,
}

impl Safety {
    /// Minimum static factor of safety considered safe
    pub const STATIC_SAFE: f64 = 1.5;

    /// Minimum static factor of safety considered marginal
    pub const STATIC_MARGINAL: f64 = 1.0;

    /// Minimum seismic factor of safety considered acceptable
    pub const SEISMIC_ACCEPTABLE: f64 = 1.1;

    /// Classifies the factor of safety of a static analysis
    pub fn of_static(fs: &FactorOfSafety) -> Self {
        match fs {
            FactorOfSafety::Unbounded => Safety::Safe,
            FactorOfSafety::Finite(v) => {
                if *v >= Safety::STATIC_SAFE {
                    Safety::Safe
                } else if *v >= Safety::STATIC_MARGINAL {
                    Safety::Marginal
                } else {
                    Safety::Unsafe
                }
            }
        }
    }

    /// Classifies the factor of safety of a pseudo-static (seismic) analysis
    pub fn of_seismic(fs: &FactorOfSafety) -> Self {
        match fs {
            FactorOfSafety::Unbounded => Safety::Safe,
            FactorOfSafety::Finite(v) => {
                if *v >= Safety::SEISMIC_ACCEPTABLE {
                    Safety::Safe
                } else {
                    Safety::Unsafe
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Method, Safety};
    use crate::base::FactorOfSafety;

    #[test]
    fn method_works() {
        assert_eq!(Method::Swedish.singles(), &[Method::Swedish]);
        assert_eq!(Method::Bishop.singles(), &[Method::Bishop]);
        assert_eq!(Method::Both.singles(), &[Method::Bishop, Method::Swedish]);
        assert_eq!(format!("{}", Method::Bishop), "Bishop's Simplified");
        let json = serde_json::to_string(&Method::Both).unwrap();
        assert_eq!(json, "\"Both\"");
        assert_eq!("Bishop".parse::<Method>(), Ok(Method::Bishop));
        assert_eq!("swedish".parse::<Method>(), Ok(Method::Swedish));
        assert_eq!("BOTH".parse::<Method>(), Ok(Method::Both));
        assert_eq!(
            "janbu".parse::<Method>().err(),
            Some("unknown method (use swedish, bishop, or both)")
        );
    }

    #[test]
    fn safety_works() {
        use FactorOfSafety::{Finite, Unbounded};
        assert_eq!(Safety::of_static(&Finite(1.5)), Safety::Safe);
        assert_eq!(Safety::of_static(&Finite(1.49)), Safety::Marginal);
        assert_eq!(Safety::of_static(&Finite(1.0)), Safety::Marginal);
        assert_eq!(Safety::of_static(&Finite(0.99)), Safety::Unsafe);
        assert_eq!(Safety::of_static(&Unbounded), Safety::Safe);
        assert_eq!(Safety::of_seismic(&Finite(1.1)), Safety::Safe);
        assert_eq!(Safety::of_seismic(&Finite(1.09)), Safety::Unsafe);
        assert_eq!(Safety::of_seismic(&Unbounded), Safety::Safe);
    }
}
