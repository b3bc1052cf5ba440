use super::{ParamCompressibility, SlopeGeometry, SoilLayer, SoilProfile};

/// Holds samples of slope geometries and soil profiles
pub struct SampleData {}

impl SampleData {
    /// Returns an 8 m high embankment with slope 1.5:1, crest width 10 m, and toe at (5, 0)
    pub fn geometry_embankment() -> SlopeGeometry {
        SlopeGeometry {
            height: 8.0,
            slope_ratio: 1.5,
            crest_width: 10.0,
            toe_x: 5.0,
            toe_elevation: 0.0,
        }
    }

    /// Returns a single homogeneous layer (γ = 18, c = 20 kPa, φ = 20°)
    pub fn profile_homogeneous(gwl: f64) -> SoilProfile {
        SoilProfile {
            layers: vec![SampleData::layer_homogeneous(20.0)],
            gwl,
        }
    }

    /// Returns a homogeneous layer with given cohesion (γ = 18, γsat = 19, φ = 20°)
    pub fn layer_homogeneous(cohesion: f64) -> SoilLayer {
        SoilLayer {
            name: String::from("Homogeneous"),
            thickness: 20.0,
            gamma: 18.0,
            gamma_sat: 19.0,
            cohesion,
            phi: 20.0,
            compressibility: None,
        }
    }

    /// Returns two clay layers with compressibility parameters
    pub fn profile_two_clays(gwl: f64) -> SoilProfile {
        let upper = SoilLayer {
            name: String::from("Layer 1 - Clay"),
            thickness: 3.0,
            gamma: 18.0,
            gamma_sat: 19.5,
            cohesion: 25.0,
            phi: 10.0,
            compressibility: Some(ParamCompressibility {
                young: 15_000.0,
                cc: 0.35,
                cr: 0.08,
                e0: 0.8,
                ocr: 1.5,
                cv: 1.0,
            }),
        };
        let lower = SoilLayer {
            name: String::from("Layer 2 - Silty Clay"),
            thickness: 4.0,
            gamma: 17.5,
            gamma_sat: 19.0,
            cohesion: 15.0,
            phi: 18.0,
            compressibility: Some(ParamCompressibility {
                young: 20_000.0,
                cc: 0.25,
                cr: 0.06,
                e0: 0.7,
                ocr: 2.0,
                cv: 2.5,
            }),
        };
        SoilProfile {
            layers: vec![upper, lower],
            gwl,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleData;

    #[test]
    fn samples_are_valid() {
        assert!(SampleData::geometry_embankment().validate().is_ok());
        assert!(SampleData::profile_homogeneous(2.0).validate().is_ok());
        assert!(SampleData::profile_two_clays(2.0).validate().is_ok());
        assert_eq!(SampleData::profile_two_clays(2.0).total_thickness(), 7.0);
    }
}
