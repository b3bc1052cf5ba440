use slopesim::prelude::*;

const Q: f64 = 100.0; // net foundation pressure (kPa)
const B: f64 = 2.0; // foundation width (m)

#[test]
fn test_settlement_two_clays() -> Result<(), StrError> {
    // soil layers
    let upper = SoilLayer::new("Layer 1 - Clay", 3.0, 18.0, 19.5, 25.0, 10.0)?.with_compressibility(
        ParamCompressibility {
            young: 15_000.0,
            cc: 0.35,
            cr: 0.08,
            e0: 0.8,
            ocr: 1.5,
            cv: 1.0,
        },
    )?;
    let lower = SoilLayer::new("Layer 2 - Silty Clay", 4.0, 17.5, 19.0, 15.0, 18.0)?.with_compressibility(
        ParamCompressibility {
            young: 20_000.0,
            cc: 0.25,
            cr: 0.06,
            e0: 0.7,
            ocr: 2.0,
            cv: 2.5,
        },
    )?;
    let layers = vec![upper, lower];

    // immediate settlement with E_avg = (3·15000 + 4·20000) / 7
    let si = immediate_settlement(Q, B, &layers, 1.0)?;
    let young = (3.0 * 15_000.0 + 4.0 * 20_000.0) / 7.0;
    let expected = 1000.0 * Q * B * (1.0 - 0.09) * 0.88 / young;
    assert!(f64::abs(si - expected) < 1e-10);

    // consolidation settlement
    let (sc, details) = consolidation_settlement(Q, &layers, 0.0)?;
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].name, "Layer 1 - Clay");
    assert!(details[0].delta_sigma > details[1].delta_sigma);
    assert!(details[0].sigma_v0 < details[1].sigma_v0);
    assert!(details.iter().all(|d| d.settlement > 0.0));
    let sum: f64 = details.iter().map(|d| d.settlement).sum();
    assert!(f64::abs(sc - sum) < 1e-10);

    // time rate with single drainage through the whole deposit (H = 7 m)
    let times = [0.0, 1.0, 5.0, 10.0, 50.0, 200.0];
    let history = time_rate_settlement(sc, 1.0, 7.0, &times)?;
    assert_eq!(history.len(), times.len());
    assert_eq!(history[0].1, 0.0);
    for pair in history.windows(2) {
        assert!(pair[1].1 > pair[0].1);
    }
    assert!(f64::abs(history[5].1 - sc) / sc < 1e-3);
    Ok(())
}
