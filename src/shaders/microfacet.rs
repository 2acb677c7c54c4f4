// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

/// Mirror `v` about `n`. Both point away from the surface.
pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    2.0 * v.dot(n) * n - v
}

/// Transmitted direction for `v` pointing away from the surface on the
/// side of `n`, with `eta = eta_i / eta_t`. `None` on total internal
/// reflection.
pub fn refract(v: &Vector3f, n: &Vector3f, eta: Float) -> Option<Vector3f> {
    let cos_i = v.dot(n).max(-1.0).min(1.0);
    let sin2_i = (1.0 - cos_i * cos_i).max(0.0);
    let sin2_t = eta * eta * sin2_i;
    if sin2_t > 1.0 {
        return None;
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    Some(-eta * v + (eta * cos_i - cos_t) * n)
}

/// Unpolarized Fresnel reflectance, the mean of the s and p terms. A
/// negative `cos_i` means the light arrives from the `eta_t` side.
pub fn fresnel_dielectric(cos_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_i = cos_i.max(-1.0).min(1.0);
    let entering = cos_i > 0.0;
    let (eta_i, eta_t) = if entering { (eta_i, eta_t) } else { (eta_t, eta_i) };
    cos_i = cos_i.abs();

    let sin2_i = (1.0 - cos_i * cos_i).max(0.0);
    let eta = eta_i / eta_t;
    let sin2_t = eta * eta * sin2_i;
    if sin2_t > 1.0 {
        return 1.0;
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    let r_parl = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let r_perp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
    0.5 * (r_parl * r_parl + r_perp * r_perp)
}

/// Beckmann distribution of microfacet normals, `m` the RMS slope.
pub fn beckmann_d(cos_h: Float, m: Float) -> Float {
    if cos_h <= 0.0 {
        return 0.0;
    }
    let m2 = (m * m).max(1e-8);
    let cos2 = cos_h * cos_h;
    ((cos2 - 1.0) / (m2 * cos2)).exp() / (m2 * cos2 * cos2)
}

/// Cook-Torrance masking and shadowing term.
pub fn geometric_attenuation(n_dot_h: Float, n_dot_v: Float, n_dot_l: Float, v_dot_h: Float) -> Float {
    if v_dot_h <= 0.0 {
        return 0.0;
    }
    let masking = 2.0 * n_dot_h * n_dot_v / v_dot_h;
    let shadowing = 2.0 * n_dot_h * n_dot_l / v_dot_h;
    masking.min(shadowing).min(1.0)
}
