use super::SliceForces;
use crate::base::{FactorOfSafety, Method, Safety, Seismic, SlipCircle};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the results of a limit-equilibrium analysis of a slip circle
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnalysisResult {
    /// Method used
    pub method: Method,

    /// Label of the method, including the seismic coefficients
    pub label: String,

    /// Factor of safety
    pub fs: FactorOfSafety,

    /// Forces on each slice, sorted from left to right
    pub slices: Vec<SliceForces>,

    /// The analyzed (critical, after a search) circle
    pub circle: SlipCircle,

    /// Seismic loading used
    pub seismic: Seismic,

    /// Indicates that the iterations converged (always true for the Swedish method)
    pub converged: bool,

    /// Number of iterations
    pub iterations: usize,
}

impl AnalysisResult {
    /// Returns the label of a method, including the seismic coefficients if active
    pub fn make_label(method: Method, seismic: &Seismic) -> String {
        if seismic.is_active() {
            format!("{} + Seismic ({})", method.label(), seismic)
        } else {
            method.label().to_string()
        }
    }

    /// Returns the sum of the resisting contributions
    pub fn sum_resisting(&self) -> f64 {
        self.slices.iter().map(|s| s.resisting).sum()
    }

    /// Returns the sum of the driving contributions
    pub fn sum_driving(&self) -> f64 {
        self.slices.iter().map(|s| s.driving).sum()
    }

    /// Classifies the factor of safety (seismic criterion if the seismic loading is active)
    pub fn safety(&self) -> Safety {
        if self.seismic.is_active() {
            Safety::of_seismic(&self.fs)
        } else {
            Safety::of_static(&self.fs)
        }
    }

    /// Reads a JSON file containing a list of results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Vec<Self>, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with a list of results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(results: &[Self], full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &results).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n", self.label)?;
        write!(f, "FS = {} ({:?})\n", self.fs, self.safety())?;
        write!(
            f,
            "circle: xc = {:.3}, yc = {:.3}, R = {:.3}\n",
            self.circle.xc, self.circle.yc, self.circle.radius
        )?;
        write!(f, "converged = {}, iterations = {}\n", self.converged, self.iterations)?;
        write!(f, "number of slices = {}\n", self.slices.len())?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::AnalysisResult;
    use crate::analysis::SliceForces;
    use crate::base::{FactorOfSafety, Method, Safety, Seismic, SlipCircle, DEFAULT_TEST_DIR};

    fn sample_result(seismic: Seismic) -> AnalysisResult {
        let forces = SliceForces {
            index: 0,
            x_mid: 1.0,
            width: 1.0,
            height: 2.0,
            weight: 36.0,
            alpha_deg: 10.0,
            base_length: 1.0154,
            pore_pressure: 0.0,
            normal: 35.45,
            shear: 6.25,
            m_alpha: None,
            cohesion: 20.0,
            phi: 20.0,
            resisting: 33.2,
            driving: 6.25,
            soil_name: String::from("clay"),
        };
        AnalysisResult {
            method: Method::Swedish,
            label: AnalysisResult::make_label(Method::Swedish, &seismic),
            fs: FactorOfSafety::Finite(1.4),
            slices: vec![forces.clone(), SliceForces { index: 1, ..forces }],
            circle: SlipCircle::new(1.0, 2.0, 3.0),
            seismic,
            converged: true,
            iterations: 1,
        }
    }

    #[test]
    fn label_and_sums_work() {
        let res = sample_result(Seismic::none());
        assert_eq!(res.label, "Swedish (Ordinary Method)");
        assert_eq!(res.sum_resisting(), 66.4);
        assert_eq!(res.sum_driving(), 12.5);
        assert_eq!(res.safety(), Safety::Marginal);
        let res = sample_result(Seismic::horizontal(0.15).unwrap());
        assert_eq!(res.label, "Swedish (Ordinary Method) + Seismic (kh=0.15)");
        assert_eq!(res.safety(), Safety::Safe);
    }

    #[test]
    fn display_works() {
        let res = sample_result(Seismic::none());
        assert_eq!(
            format!("{}", res),
            "Swedish (Ordinary Method)\n\
             FS = 1.400 (Marginal)\n\
             circle: xc = 1.000, yc = 2.000, R = 3.000\n\
             converged = true, iterations = 1\n\
             number of slices = 2\n"
        );
    }

    #[test]
    fn read_and_write_json_work() {
        let res = sample_result(Seismic::none());
        let full_path = format!("{}/test_analysis_result_write.json", DEFAULT_TEST_DIR);
        AnalysisResult::write_json(&[res], &full_path).unwrap();
        let read = AnalysisResult::read_json(&full_path).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].method, Method::Swedish);
        assert_eq!(read[0].fs, FactorOfSafety::Finite(1.4));
        assert_eq!(read[0].slices.len(), 2);
        assert_eq!(read[0].slices[1].index, 1);
        assert_eq!(read[0].slices[0].soil_name, "clay");
        assert_eq!(read[0].circle, SlipCircle::new(1.0, 2.0, 3.0));
        assert_eq!(
            AnalysisResult::read_json("/tmp/slopesim/__does_not_exist__.json").err(),
            Some("file not found")
        );
    }
}
