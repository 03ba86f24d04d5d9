/// Gas constant in kcal/(mol·K).
pub const GAS_CONSTANT: f64 = 0.001987;
/// Planck-scale prefactor of the Eyring rate.
pub const PLANCK_CONSTANT: f64 = 6.626e-34;

const GC_STACKING: f64 = 22.5;
const AU_STACKING: f64 = 12.2;
const VISCOSITY_COEFFICIENT: f64 = 0.045;
const DIFFUSION_SCALE: f64 = 1e8;

pub const HILL_HALF_SATURATION: f64 = 5.0; // mM
pub const HILL_COEFFICIENT: f64 = 2.4;
pub const ION_INHIBITION_THRESHOLD: f64 = 30.0; // mM
const ION_INHIBITION_SLOPE: f64 = 0.05;

const BASE_ENTROPY: f64 = 0.055;
const CROWDING_ENTROPY: f64 = 0.18;

pub const SYNC_THRESHOLD: f64 = 0.7;
const WARP_SCALE: f64 = 20.0;
const WARP_EXPONENT: f64 = 3.5;
const SYNERGY_TEMPERATURE_SCALE: f64 = 90.0;

const AFFINITY_FLOOR: f64 = 0.05; // kcal/mol
const RELEASE_UNIT_FACTOR: f64 = 1e-13;
const RELEASE_SYNERGY_GAIN: f64 = 15.0;

const COHERENCE_GC_DECAY: f64 = 3.0;
const COHERENCE_REFERENCE_K: f64 = 325.0;
const COHERENCE_CUTOFF_POWER: f64 = 20.0;
const COHERENCE_CUTOFF_WEIGHT: f64 = 0.02;

const CATALYTIC_PREFACTOR: f64 = 15000.0;
const RATE_EPSILON: f64 = 1e-10;
const SWEET_SPOT_FRACTION: f64 = 0.0008;
const TUNNELING_SCALE: f64 = 1e-7;

#[inline]
pub fn stacking_stability(gc_fraction: f64) -> f64 {
    (gc_fraction * GC_STACKING + (1.0 - gc_fraction) * AU_STACKING).abs()
}

#[inline]
pub fn viscosity(crowding_index: f64) -> f64 {
    (crowding_index * VISCOSITY_COEFFICIENT).exp()
}

/// Smoluchowski-style diffusion-limited rate, min⁻¹.
#[inline]
pub fn diffusion_limit(temp_k: f64, viscosity: f64) -> f64 {
    (8.0 * GAS_CONSTANT * temp_k) / (3000.0 * viscosity) * DIFFUSION_SCALE
}

/// Hill saturation of the catalytic ion site, in `[0, 1)`.
#[inline]
pub fn hill_saturation(ion_concentration: f64) -> f64 {
    let occupied = ion_concentration.powf(HILL_COEFFICIENT);
    occupied / (HILL_HALF_SATURATION.powf(HILL_COEFFICIENT) + occupied)
}

/// Suppression of activity above the optimal ion concentration.
///
/// Exactly `1.0` up to and including the threshold.
#[inline]
pub fn ion_inhibition(ion_concentration: f64) -> f64 {
    if ion_concentration > ION_INHIBITION_THRESHOLD {
        1.0 / (1.0 + (ion_concentration - ION_INHIBITION_THRESHOLD) * ION_INHIBITION_SLOPE)
    } else {
        1.0
    }
}

#[inline]
pub fn enthalpy(stacking_stability: f64) -> f64 {
    -stacking_stability
}

#[inline]
pub fn entropy(crowding_index: f64) -> f64 {
    -(BASE_ENTROPY + (crowding_index / 100.0) * CROWDING_ENTROPY)
}

/// ΔG = ΔH − TΔS.
#[inline]
pub fn gibbs_free_energy(delta_h: f64, delta_s: f64, temp_k: f64) -> f64 {
    delta_h - (temp_k * delta_s)
}

#[inline]
pub fn resonance_synergy(crowding_index: f64, temperature: f64, ion_effect: f64) -> f64 {
    (crowding_index / 100.0) * (temperature / SYNERGY_TEMPERATURE_SCALE) * ion_effect
}

/// Resonance amplification. Exactly `1.0` at or below the sync threshold.
#[inline]
pub fn warp_factor(synergy: f64) -> f64 {
    if synergy > SYNC_THRESHOLD {
        ((synergy - SYNC_THRESHOLD) * WARP_SCALE + 1.0).powf(WARP_EXPONENT)
    } else {
        1.0
    }
}

#[inline]
pub fn product_affinity(free_energy: f64, synergy: f64, warp_factor: f64) -> f64 {
    (free_energy.abs() / (1.0 + synergy * warp_factor)).max(AFFINITY_FLOOR)
}

/// Eyring-style product release rate.
#[inline]
pub fn release_rate(temp_k: f64, product_affinity: f64, synergy: f64) -> f64 {
    let rt = GAS_CONSTANT * temp_k;
    ((GAS_CONSTANT * temp_k) / PLANCK_CONSTANT)
        * (-product_affinity / rt).exp()
        * RELEASE_UNIT_FACTOR
        * (1.0 + synergy * RELEASE_SYNERGY_GAIN)
}

/// GC-dependent coherence with a soft thermal cutoff near 325 K.
#[inline]
pub fn vibrational_coherence(gc_fraction: f64, temp_k: f64) -> f64 {
    (-(gc_fraction * COHERENCE_GC_DECAY)).exp()
        / (1.0
            + (temp_k / COHERENCE_REFERENCE_K).powf(COHERENCE_CUTOFF_POWER)
                * COHERENCE_CUTOFF_WEIGHT)
}

#[inline]
pub fn catalytic_rate(coherence: f64, ion_effect: f64, inhibition: f64, warp_factor: f64) -> f64 {
    CATALYTIC_PREFACTOR * coherence * ion_effect * inhibition * warp_factor
}

/// Parallel combination of the chemical and release steps.
#[inline]
pub fn internal_rate(catalytic_rate: f64, release_rate: f64) -> f64 {
    (catalytic_rate * release_rate) / (catalytic_rate + release_rate + RATE_EPSILON)
}

/// Series combination of the internal and diffusion-limited rates.
///
/// Both rates must be non-zero; callers check this first.
#[inline]
pub fn series_rate(internal_rate: f64, diffusion_limit: f64) -> f64 {
    1.0 / ((1.0 / internal_rate) + (1.0 / diffusion_limit))
}

/// Observed rate as a percentage of the empirical maximum, capped at 100.
#[inline]
pub fn sweet_spot_progress(observed_rate: f64, diffusion_limit: f64) -> f64 {
    ((observed_rate / (diffusion_limit * SWEET_SPOT_FRACTION)) * 100.0).min(100.0)
}

#[inline]
pub fn tunneling_probability(coherence: f64, warp_factor: f64) -> f64 {
    TUNNELING_SCALE * coherence * warp_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn stacking_stability_interpolates_between_au_and_gc() {
        assert!(f64_approx_equal(stacking_stability(0.0), 12.2));
        assert!(f64_approx_equal(stacking_stability(1.0), 22.5));
        assert!(f64_approx_equal(stacking_stability(0.5), 17.35));
    }

    #[test]
    fn viscosity_is_one_without_crowding() {
        assert_eq!(viscosity(0.0), 1.0);
        assert!(viscosity(50.0) > viscosity(25.0));
    }

    #[test]
    fn diffusion_limit_decreases_with_viscosity_and_increases_with_temperature() {
        let base = diffusion_limit(310.15, 1.0);
        assert!(f64_approx_equal(base, 8.0 * GAS_CONSTANT * 310.15 / 3000.0 * 1e8));
        assert!(diffusion_limit(310.15, 2.0) < base);
        assert!(diffusion_limit(350.0, 1.0) > base);
    }

    #[test]
    fn hill_saturation_is_half_at_half_saturation_constant() {
        assert!(f64_approx_equal(hill_saturation(HILL_HALF_SATURATION), 0.5));
    }

    #[test]
    fn hill_saturation_is_zero_without_ions_and_below_one_at_high_concentration() {
        assert_eq!(hill_saturation(0.0), 0.0);
        let high = hill_saturation(1000.0);
        assert!(high < 1.0 && high > 0.999);
    }

    #[test]
    fn ion_inhibition_is_flat_up_to_threshold() {
        assert_eq!(ion_inhibition(0.0), 1.0);
        assert_eq!(ion_inhibition(ION_INHIBITION_THRESHOLD), 1.0);
    }

    #[test]
    fn ion_inhibition_decreases_above_threshold() {
        assert!(f64_approx_equal(ion_inhibition(40.0), 1.0 / 1.5));
        assert!(f64_approx_equal(ion_inhibition(50.0), 0.5));
        assert!(ion_inhibition(30.0 + 1e-6) < 1.0);
    }

    #[test]
    fn gibbs_free_energy_follows_delta_h_minus_t_delta_s() {
        let dh = enthalpy(20.0);
        let ds = entropy(0.0);
        assert!(f64_approx_equal(ds, -0.055));
        assert!(f64_approx_equal(gibbs_free_energy(dh, ds, 300.0), -20.0 + 300.0 * 0.055));
    }

    #[test]
    fn entropy_becomes_more_negative_with_crowding() {
        assert!(f64_approx_equal(entropy(100.0), -(0.055 + 0.18)));
        assert!(entropy(50.0) > entropy(100.0));
    }

    #[test]
    fn resonance_synergy_is_zero_if_any_factor_is_zero() {
        assert_eq!(resonance_synergy(0.0, 37.0, 0.8), 0.0);
        assert_eq!(resonance_synergy(50.0, 0.0, 0.8), 0.0);
        assert_eq!(resonance_synergy(50.0, 37.0, 0.0), 0.0);
    }

    #[test]
    fn warp_factor_is_one_at_threshold_and_rises_above_it() {
        assert_eq!(warp_factor(0.0), 1.0);
        assert_eq!(warp_factor(SYNC_THRESHOLD), 1.0);
        let just_above = warp_factor(SYNC_THRESHOLD + 1e-9);
        assert!(just_above > 1.0);
        assert!(f64_approx_equal(warp_factor(0.75), 2.0_f64.powf(3.5)));
    }

    #[test]
    fn product_affinity_is_floored() {
        assert_eq!(product_affinity(0.0, 0.0, 1.0), 0.05);
        assert!(f64_approx_equal(product_affinity(-10.0, 0.0, 1.0), 10.0));
        assert!(f64_approx_equal(product_affinity(10.0, 1.0, 1.0), 5.0));
    }

    #[test]
    fn release_rate_grows_with_synergy() {
        let calm = release_rate(310.15, 10.0, 0.0);
        let resonant = release_rate(310.15, 10.0, 1.0);
        assert!(f64_approx_equal(resonant / calm, 16.0));
    }

    #[test]
    fn vibrational_coherence_is_suppressed_by_gc_content_and_heat() {
        let au = vibrational_coherence(0.0, 273.15);
        assert!(au <= 1.0 && au > 0.99);
        assert!(vibrational_coherence(1.0, 273.15) < au);
        assert!(vibrational_coherence(0.0, 368.15) < vibrational_coherence(0.0, 310.15));
    }

    #[test]
    fn internal_rate_is_zero_when_either_step_is_zero() {
        assert_eq!(internal_rate(0.0, 1e6), 0.0);
        assert_eq!(internal_rate(1e3, 0.0), 0.0);
    }

    #[test]
    fn series_rate_is_below_both_inputs() {
        let r = series_rate(100.0, 100.0);
        assert!(f64_approx_equal(r, 50.0));
    }

    #[test]
    fn sweet_spot_progress_is_capped_at_one_hundred() {
        assert_eq!(sweet_spot_progress(1e9, 1000.0), 100.0);
        assert!(f64_approx_equal(sweet_spot_progress(0.4, 1000.0), 50.0));
    }

    #[test]
    fn tunneling_probability_scales_coherence_and_warp() {
        assert!(f64_approx_equal(tunneling_probability(0.5, 4.0), 2e-7));
    }
}
