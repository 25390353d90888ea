//! IPE evaluation for the Atkinson-Wald, Leonard, and Worden-Wald-Worden models.
//!
//! Each model is a fixed-coefficient empirical regression from magnitude and
//! rupture distance to macroseismic intensity (MMI). The coefficients are
//! model constants, not configuration; what varies per call is the
//! `EventScenario` and the distance.
//!
//! All five variants here expect **rupture distance** (see
//! `IpeKind::distance_metric`). Mixing distance conventions across models is a
//! caller error these functions cannot detect.

use crate::domain::{EventScenario, IntensityEstimate, IpeKind, Region, SiteClass};
use crate::error::AppError;
use crate::math::{bilinear_excess, effective_distance};

/// Coefficients for the Atkinson & Wald (2007) functional form.
///
/// `mmi = c1 + c2(M-6) + c3(M-6)^2 + c4 log10(R) + c5 R + c6 B + c7 M log10(R)`
/// with `R = sqrt(rrup^2 + h^2)` and `B = max(0, log10(R / rt))`.
#[derive(Debug, Clone, Copy)]
pub struct AwCoefficients {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub c7: f64,
    /// Pseudo-depth (km) folded into the effective distance.
    pub h: f64,
    /// Far-field transition distance (km).
    pub rt: f64,
    pub sigma: f64,
}

/// Atkinson & Wald (2007), central/eastern US.
pub const AW07_CEUS: AwCoefficients = AwCoefficients {
    c1: 11.72,
    c2: 2.36,
    c3: 0.1155,
    c4: -0.44,
    c5: -0.002044,
    c6: 2.31,
    c7: -0.479,
    h: 17.0,
    rt: 80.0,
    sigma: 0.4,
};

/// Atkinson & Wald (2007), California.
pub const AW07_CA: AwCoefficients = AwCoefficients {
    c1: 12.27,
    c2: 2.27,
    c3: 0.1304,
    c4: -1.30,
    c5: -0.000707,
    c6: 1.95,
    c7: -0.577,
    h: 14.0,
    rt: 30.0,
    sigma: 0.4,
};

/// Coefficients for the WWW14 functional form.
///
/// `mmi = c1 + c2 M + c3 log10(R) + c4 R + c5 B + c6 M log10(R)` with
/// `R = sqrt(rrup^2 + 14^2)` and `B = max(0, log10(R / 50))`.
#[derive(Debug, Clone, Copy)]
pub struct Www14Coefficients {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
}

/// WWW14 pseudo-depth (km), common to all branches.
pub const WWW14_H: f64 = 14.0;
/// WWW14 far-field transition distance (km), common to all branches.
pub const WWW14_RT: f64 = 50.0;
/// WWW14 aleatory sigma, common to all branches.
pub const WWW14_SIGMA: f64 = 0.15;

/// WWW14 California, Vs30 >= 760 m/s.
pub const WWW14_CA_ROCK: Www14Coefficients = Www14Coefficients {
    c1: 0.309,
    c2: 1.864,
    c3: -1.672,
    c4: -0.00219,
    c5: 1.77,
    c6: -0.383,
};

/// WWW14 California, Vs30 < 760 m/s.
pub const WWW14_CA_SOIL: Www14Coefficients = Www14Coefficients {
    c1: 0.289,
    c2: 1.784,
    c3: -1.672,
    c4: -0.00210,
    c5: 1.60,
    c6: -0.350,
};

/// WWW14 central/eastern US (site-independent).
pub const WWW14_CEUS: Www14Coefficients = Www14Coefficients {
    c1: 0.7,
    c2: 1.864,
    c3: -1.672,
    c4: -0.00219,
    c5: 1.77,
    c6: -0.383,
};

/// Select the WWW14 coefficient set for a (region, site-class) pair.
///
/// The match is exhaustive over closed enums, so an unrecognized combination
/// cannot exist at runtime; the CEUS branch is site-independent.
pub fn www14_coefficients(region: Region, site: SiteClass) -> Www14Coefficients {
    match (region, site) {
        (Region::Ca, SiteClass::Rock) => WWW14_CA_ROCK,
        (Region::Ca, SiteClass::Soil) => WWW14_CA_SOIL,
        (Region::Ceus, _) => WWW14_CEUS,
    }
}

/// Evaluate the Atkinson & Wald (2007) form for one distance.
pub fn atkinson_wald(c: &AwCoefficients, mag: f64, rrup: f64) -> IntensityEstimate {
    let r = effective_distance(rrup, c.h);
    let b = bilinear_excess(r, c.rt);
    let log_r = r.log10();
    let dm = mag - 6.0;
    let mmi = c.c1 + c.c2 * dm + c.c3 * dm * dm + c.c4 * log_r + c.c5 * r + c.c6 * b
        + c.c7 * mag * log_r;
    IntensityEstimate {
        mmi,
        sigma: Some(c.sigma),
    }
}

/// Evaluate Leonard (2015) for one distance.
///
/// `mmi = 3.5 + 1.05 M - 1.09 ln(sqrt(rrup^2 + (1 + 1.1 e^(M-5))^2))`.
/// The magnitude-dependent near-field saturation term is always >= 1, so the
/// logarithm is defined for any rrup >= 0. No sigma is published for this
/// form; the estimate carries `sigma: None`.
pub fn leonard15(mag: f64, rrup: f64) -> IntensityEstimate {
    const C0: f64 = 3.5;
    const C1: f64 = 1.05;
    const C2: f64 = -1.09;
    const C3: f64 = 1.1;

    let sat = 1.0 + C3 * (mag - 5.0).exp();
    let mmi = C0 + C1 * mag + C2 * (rrup * rrup + sat * sat).sqrt().ln();
    IntensityEstimate { mmi, sigma: None }
}

/// Evaluate the WWW14 form for one distance.
pub fn www14(c: &Www14Coefficients, mag: f64, rrup: f64) -> IntensityEstimate {
    let r = effective_distance(rrup, WWW14_H);
    let b = bilinear_excess(r, WWW14_RT);
    let log_r = r.log10();
    let mmi = c.c1 + c.c2 * mag + c.c3 * log_r + c.c4 * r + c.c5 * b + c.c6 * mag * log_r;
    IntensityEstimate {
        mmi,
        sigma: Some(WWW14_SIGMA),
    }
}

/// Evaluate one model for one rupture distance.
///
/// Validates the distance domain (finite, non-negative) and resolves the
/// WWW14 site branch from the scenario. The WWW14 CA variant requires a Vs30;
/// there is no silent rock default since that would misattribute coefficients.
pub fn evaluate(
    kind: IpeKind,
    scenario: &EventScenario,
    rrup: f64,
) -> Result<IntensityEstimate, AppError> {
    if !rrup.is_finite() || rrup < 0.0 {
        return Err(AppError::invalid(format!(
            "{}: distance must be finite and non-negative, got {rrup}",
            kind.display_name()
        )));
    }

    let estimate = match kind {
        IpeKind::Aw07Ceus => atkinson_wald(&AW07_CEUS, scenario.mag, rrup),
        IpeKind::Aw07Ca => atkinson_wald(&AW07_CA, scenario.mag, rrup),
        IpeKind::Leonard15 => leonard15(scenario.mag, rrup),
        IpeKind::Www14Ca => {
            let vs30 = scenario.vs30.ok_or_else(|| {
                AppError::invalid("WWW14 CA requires a Vs30 to select its site coefficients")
            })?;
            www14(
                &www14_coefficients(Region::Ca, SiteClass::from_vs30(vs30)),
                scenario.mag,
                rrup,
            )
        }
        IpeKind::Www14Ceus => www14(
            // Site class is irrelevant for the CEUS branch.
            &www14_coefficients(Region::Ceus, SiteClass::Rock),
            scenario.mag,
            rrup,
        ),
    };

    if !estimate.mmi.is_finite() {
        return Err(AppError::numeric(format!(
            "{}: non-finite intensity at rrup = {rrup} km",
            kind.display_name()
        )));
    }
    Ok(estimate)
}

/// Evaluate one model over a distance sequence.
///
/// Output order matches input order. The far-field threshold is applied per
/// element, so a sequence straddling the transition distance gets the
/// correction only where it holds.
pub fn evaluate_curve(
    kind: IpeKind,
    scenario: &EventScenario,
    rrups: &[f64],
) -> Result<Vec<IntensityEstimate>, AppError> {
    rrups.iter().map(|&r| evaluate(kind, scenario, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn woods_point() -> EventScenario {
        let mut s = EventScenario::new(5.9, 12.0);
        s.vs30 = Some(760.0);
        s
    }

    #[test]
    fn aw07_ceus_matches_hand_computed_value() {
        // M 5.9, depth 12 km, rjb 10 km -> rrup = sqrt(244). R = sqrt(533) is
        // below the 80 km transition, so B = 0.
        let s = woods_point();
        let rrup = s.rrup_from_rjb(10.0);
        let est = evaluate(IpeKind::Aw07Ceus, &s, rrup).unwrap();
        assert!(
            (est.mmi - 6.985083726895203).abs() < 1e-9,
            "got {}",
            est.mmi
        );
        assert_eq!(est.sigma, Some(0.4));
    }

    #[test]
    fn aw07_ca_matches_hand_computed_values() {
        let s = woods_point();
        let near = evaluate(IpeKind::Aw07Ca, &s, s.rrup_from_rjb(10.0)).unwrap();
        assert!((near.mmi - 5.811676629889889).abs() < 1e-9, "got {}", near.mmi);

        // rjb 200 km is well past the 30 km transition; B > 0 there.
        let far = evaluate(IpeKind::Aw07Ca, &s, s.rrup_from_rjb(200.0)).unwrap();
        assert!((far.mmi - 2.6791286886643775).abs() < 1e-9, "got {}", far.mmi);
    }

    #[test]
    fn aw07_ceus_far_field_value() {
        let s = woods_point();
        let far = evaluate(IpeKind::Aw07Ceus, &s, s.rrup_from_rjb(200.0)).unwrap();
        assert!((far.mmi - 4.47576032733657).abs() < 1e-9, "got {}", far.mmi);
    }

    #[test]
    fn leonard15_value_and_absent_sigma() {
        let s = woods_point();
        let est = evaluate(IpeKind::Leonard15, &s, s.rrup_from_rjb(10.0)).unwrap();
        assert!((est.mmi - 6.669205135583614).abs() < 1e-9, "got {}", est.mmi);
        assert_eq!(est.sigma, None);
    }

    #[test]
    fn www14_branch_values() {
        let s = woods_point();
        let rrup = s.rrup_from_rjb(10.0);

        let rock = evaluate(IpeKind::Www14Ca, &s, rrup).unwrap();
        assert!((rock.mmi - 6.064030728379777).abs() < 1e-9, "got {}", rock.mmi);
        assert_eq!(rock.sigma, Some(0.15));

        let mut soft = woods_point();
        soft.vs30 = Some(360.0);
        let soil = evaluate(IpeKind::Www14Ca, &soft, rrup).unwrap();
        assert!((soil.mmi - 5.831258702362414).abs() < 1e-9, "got {}", soil.mmi);

        let ceus = evaluate(IpeKind::Www14Ceus, &s, rrup).unwrap();
        assert!((ceus.mmi - 6.455030728379777).abs() < 1e-9, "got {}", ceus.mmi);
    }

    #[test]
    fn www14_ca_without_vs30_is_an_error() {
        let mut s = woods_point();
        s.vs30 = None;
        let err = evaluate(IpeKind::Www14Ca, &s, 10.0).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn www14_site_branch_splits_exactly_at_threshold() {
        // 760 m/s itself selects the rock set (>= threshold).
        assert_eq!(SiteClass::from_vs30(760.0), SiteClass::Rock);
        assert_eq!(SiteClass::from_vs30(759.9), SiteClass::Soil);
    }

    #[test]
    fn negative_distance_is_rejected() {
        let s = woods_point();
        for kind in IpeKind::ALL {
            let err = evaluate(kind, &s, -1.0).unwrap_err();
            assert_eq!(err.exit_code(), 3, "{} accepted a negative distance", kind.display_name());
        }
    }

    #[test]
    fn zero_distance_zero_depth_is_defined() {
        // Pseudo-depth (AW07/WWW14) or the saturation term (L15) keeps the
        // effective distance positive even for a surface rupture at r = 0.
        let s = EventScenario {
            vs30: Some(760.0),
            ..EventScenario::new(5.9, 0.0)
        };
        for kind in IpeKind::ALL {
            let est = evaluate(kind, &s, 0.0).unwrap();
            assert!(est.mmi.is_finite(), "{}", kind.display_name());
        }
    }

    #[test]
    fn far_field_term_applies_per_element() {
        // A grid straddling the WWW14 transition (R = 50 km at rrup = 48 km):
        // predictions must be continuous across it and the slope steepens
        // beyond it, which only happens if B is applied element-wise.
        let s = woods_point();
        let grid = [40.0, 47.9, 48.0, 48.1, 60.0];
        let curve = evaluate_curve(IpeKind::Www14Ceus, &s, &grid).unwrap();
        assert_eq!(curve.len(), grid.len());
        let step = (curve[3].mmi - curve[2].mmi).abs();
        assert!(step < 0.01, "discontinuity at the transition: {step}");
    }

    #[test]
    fn attenuation_is_monotone_beyond_near_field() {
        let s = woods_point();
        let grid = crate::math::log_grid(30.0, 1000.0, 200);
        for kind in [
            IpeKind::Aw07Ceus,
            IpeKind::Aw07Ca,
            IpeKind::Www14Ca,
            IpeKind::Www14Ceus,
        ] {
            let curve = evaluate_curve(kind, &s, &grid).unwrap();
            for w in curve.windows(2) {
                assert!(
                    w[1].mmi <= w[0].mmi + 1e-12,
                    "{} not non-increasing",
                    kind.display_name()
                );
            }
        }
    }
}
