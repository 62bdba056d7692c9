//! Heuristics that turn catalogue designations into model inputs.

use std::f64::consts::PI;

/// mm² per kcmil (MCM).
const MM2_PER_KCMIL: f64 = 0.5067;

/// Area used when a size designation is not in kcmil.
pub(super) const DEFAULT_AREA_MM2: f64 = 100.0;

/// Insulation thickness used when a voltage has no numeric rating.
pub(super) const DEFAULT_INSULATION_MM: f64 = 4.5;

/// Sheath thickness assumed for every catalogue cable.
pub(super) const SHEATH_THICKNESS_MM: f64 = 2.0;

/// Builds the identifier `{size}_{voltage}_{material}_{insulation}`.
///
/// Spaces and slashes in the size and voltage become underscores.
pub(super) fn cable_id(size: &str, voltage: &str, material: &str, insulation: &str) -> String {
    let clean = |s: &str| s.replace([' ', '/'], "_");
    format!("{}_{}_{material}_{insulation}", clean(size), clean(voltage))
}

/// Conductor area in mm² from a size designation such as `"1000 MCM"`.
///
/// AWG aught sizes (`"4/0 MCM"`) map to their kcmil equivalents. Sizes not
/// given in MCM get [`DEFAULT_AREA_MM2`].
///
/// # Errors
///
/// Returns a description of the problem when an MCM size has no usable number.
pub(super) fn conductor_area_mm2(size: &str) -> Result<f64, String> {
    if !size.contains("MCM") {
        tracing::debug!(size, "size is not in MCM, using default conductor area");
        return Ok(DEFAULT_AREA_MM2);
    }

    let token = size.split_whitespace().next().unwrap_or_default();
    let kcmil = if token.contains('/') {
        match token {
            "4/0" => 211.6,
            "3/0" => 167.8,
            "2/0" => 133.1,
            _ => 105.6,
        }
    } else {
        token
            .parse::<f64>()
            .map_err(|_| format!("size {size:?} has no kcmil value"))?
    };

    if kcmil.is_finite() && kcmil > 0.0 {
        Ok(kcmil * MM2_PER_KCMIL)
    } else {
        Err(format!("size {size:?} has a non-positive kcmil value"))
    }
}

/// Diameter of a solid round conductor with the given area.
pub(super) fn conductor_diameter_mm(area_mm2: f64) -> f64 {
    2.0 * (area_mm2 / PI).sqrt()
}

/// Insulation thickness in mm from the leading number of a voltage rating (kV).
pub(super) fn insulation_thickness_mm(voltage: &str) -> f64 {
    let Some(kv) = leading_number(voltage) else {
        tracing::debug!(voltage, "voltage has no numeric rating, using default insulation");
        return DEFAULT_INSULATION_MM;
    };

    match kv {
        kv if kv <= 1.0 => 1.5,
        kv if kv <= 5.0 => 2.5,
        kv if kv <= 15.0 => 4.5,
        kv if kv <= 25.0 => 6.0,
        kv if kv <= 35.0 => 8.0,
        _ => 10.0,
    }
}

/// Maximum operating temperature in °C for an insulation type.
pub(super) fn temperature_limit_c(insulation: &str) -> f64 {
    match insulation {
        "Paper" => 80.0,
        "PILC" => 85.0,
        "PVC" => 70.0,
        // XLPE, EPR, and anything unlisted.
        _ => 90.0,
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}
