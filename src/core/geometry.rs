//! Reine Geometrie-Funktionen für weiche Übergänge.
//!
//! Layer-neutral: wird von `core::profile` (Klemm-Logik), den Use-Cases und
//! der Render-Seite konsumiert, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

use super::Profile;

/// Kontrollpunkte (p1, p3) des weichen Übergangs um einen Stützpunkt.
///
/// p1 liegt auf dem einlaufenden, p3 auf dem auslaufenden Geradensegment.
/// Am ersten/letzten Punkt dürfen die x-Werte in die benachbarte
/// Periodenkopie fallen (p1.x < 0 bzw. p3.x > period); das Zurückfalten
/// nach [0, period) übernimmt der Konsument via [`wrap_phase`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPoints {
    /// Kontrollpunkt vor dem Stützpunkt
    pub p1: Vec2,
    /// Kontrollpunkt nach dem Stützpunkt
    pub p3: Vec2,
}

/// Lineare Interpolation des y-Werts an der Stelle `x` auf der Geraden p1→p2.
///
/// Voraussetzung: `p1.x != p2.x`. Das Modell stellt sicher, dass keine
/// Segmente der Länge 0 entstehen (streng aufsteigende Punktfolge).
pub fn interpolate(p1: Vec2, p2: Vec2, x: f32) -> f32 {
    (x - p1.x) * (p2.y - p1.y) / (p2.x - p1.x) + p1.y
}

/// Parametrischer Punkt auf der Strecke p1→p2 (`t` unbeschränkt).
pub fn interpolate_t(p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    p1.lerp(p2, t)
}

/// Faltet eine beliebige Phasenposition nach [0, period) zurück.
pub fn wrap_phase(x: f32, period: f32) -> f32 {
    let f = x % period;
    if f < 0.0 {
        f + period
    } else {
        f
    }
}

/// Leitet die Kontrollpunkte des Übergangs am Stützpunkt `i` her.
///
/// Gibt `None` zurück wenn der Punkt keinen Übergang trägt oder `i`
/// außerhalb der Punktfolge liegt. Wird bei Bedarf berechnet, nie gecacht.
pub fn transition_points(profile: &Profile, i: usize) -> Option<TransitionPoints> {
    let points = profile.points();
    let point = points.get(i)?;
    let transition = point.transition?;
    let last = points.len() - 1;

    // Nachbarn; am Rand in die benachbarte Periodenkopie verschoben
    let previous = if i == 0 {
        Vec2::new(points[last].x - profile.period(), points[last].level.value())
    } else {
        Vec2::new(points[i - 1].x, points[i - 1].level.value())
    };
    let next = if i == last {
        Vec2::new(profile.period() + points[0].x, points[0].level.value())
    } else {
        Vec2::new(points[i + 1].x, points[i + 1].level.value())
    };
    let this = Vec2::new(point.x, point.level.value());

    let x_before = point.x - transition.before;
    let x_after = point.x + transition.after;
    Some(TransitionPoints {
        p1: Vec2::new(x_before, interpolate(previous, this, x_before)),
        p3: Vec2::new(x_after, interpolate(this, next, x_after)),
    })
}

/// Aufteilung einer über die Periodengrenze laufenden Übergangskurve.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySplit {
    /// Kurvenparameter an der Schnittstelle
    pub t: f32,
    /// Zwischenpunkt auf p1→p2
    pub mid_before: Vec2,
    /// Zwischenpunkt auf p2→p3
    pub mid_after: Vec2,
    /// Schnittpunkt der Kurve mit der Periodengrenze
    pub cut: Vec2,
}

/// Teilt die Übergangskurve (p1, Scheitel p2, p3) an der Periodengrenze x = 0.
///
/// Die Render-Seite zeichnet damit den Teil vor der Grenze am Periodenende
/// und den Teil nach der Grenze am Periodenanfang. Verschwindet der
/// quadratische Koeffizient, fällt der Parameter auf die Kurvenmitte zurück.
pub fn boundary_split(p1: Vec2, p2: Vec2, p3: Vec2) -> BoundarySplit {
    let b = p1.x - 2.0 * p2.x + p3.x;
    let t = if b == 0.0 {
        0.5
    } else {
        let a = ((p1.x - p2.x) * (p2.x - p3.x)).sqrt();
        let t1 = (p1.x - p2.x + a) / b;
        if (0.0..=1.0).contains(&t1) {
            t1
        } else {
            (p1.x - p2.x - a) / b
        }
    };

    let mid_before = interpolate_t(p1, p2, t);
    let mid_after = interpolate_t(p2, p3, t);
    BoundarySplit {
        t,
        mid_before,
        mid_after,
        cut: interpolate_t(mid_before, mid_after, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_auf_segment() {
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(10.0, 1.0);
        assert_relative_eq!(interpolate(p1, p2, 5.0), 0.5);
        assert_relative_eq!(interpolate(p1, p2, 0.0), 0.0);
        assert_relative_eq!(interpolate(p1, p2, 10.0), 1.0);
    }

    #[test]
    fn test_interpolate_extrapoliert_linear() {
        let p1 = Vec2::new(10.0, 0.0);
        let p2 = Vec2::new(20.0, 1.0);
        assert_relative_eq!(interpolate(p1, p2, 30.0), 2.0);
        assert_relative_eq!(interpolate(p1, p2, 0.0), -1.0);
    }

    #[test]
    fn test_interpolate_t_unbeschraenkt() {
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(10.0, 2.0);
        assert_eq!(interpolate_t(p1, p2, 0.5), Vec2::new(5.0, 1.0));
        assert_eq!(interpolate_t(p1, p2, 1.5), Vec2::new(15.0, 3.0));
        assert_eq!(interpolate_t(p1, p2, -0.5), Vec2::new(-5.0, -1.0));
    }

    #[test]
    fn test_wrap_phase() {
        assert_relative_eq!(wrap_phase(10.0, 360.0), 10.0);
        assert_relative_eq!(wrap_phase(-15.0, 360.0), 345.0);
        assert_relative_eq!(wrap_phase(370.0, 360.0), 10.0);
        assert_relative_eq!(wrap_phase(0.0, 360.0), 0.0);
        assert_relative_eq!(wrap_phase(360.0, 360.0), 0.0);
    }

    #[test]
    fn test_boundary_split_symmetrischer_scheitel() {
        // Scheitel exakt auf der Grenze: Schnittpunkt muss bei x = 0 liegen
        let p1 = Vec2::new(-10.0, 0.0);
        let p2 = Vec2::new(0.0, 1.0);
        let p3 = Vec2::new(20.0, 1.0);
        let split = boundary_split(p1, p2, p3);
        assert_relative_eq!(split.t, std::f32::consts::SQRT_2 - 1.0, epsilon = 1e-6);
        assert_relative_eq!(split.cut.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_boundary_split_fallback_bei_verschwindendem_koeffizienten() {
        // p2 mittig zwischen p1 und p3 → quadratischer Koeffizient 0
        let p1 = Vec2::new(-10.0, 0.0);
        let p2 = Vec2::new(5.0, 1.0);
        let p3 = Vec2::new(20.0, 1.0);
        let split = boundary_split(p1, p2, p3);
        assert_relative_eq!(split.t, 0.5);
    }

    #[test]
    fn test_boundary_split_parameter_im_intervall() {
        let p1 = Vec2::new(-8.0, 0.0);
        let p2 = Vec2::new(2.0, 1.0);
        let p3 = Vec2::new(15.0, 1.0);
        let split = boundary_split(p1, p2, p3);
        assert!((0.0..=1.0).contains(&split.t), "t = {}", split.t);
    }
}
