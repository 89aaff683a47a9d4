//! Das Schaltprofil: periodische Punktfolge mit geschützten Editier-Operationen.

use super::geometry::{self, TransitionPoints};
use super::{Level, ProfilePoint, Transition, TransitionSide};
use crate::shared::options::{DEFAULT_TRANSITION_WIDTH, MIN_GAP};

/// Ergebnis einer Editier-Operation.
///
/// Jede Operation ist atomar: entweder wird das Profil gültig mutiert
/// (`Applied`/`Clamped`) oder gar nicht verändert (`Rejected`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Eingabe unverändert übernommen
    Applied,
    /// Eingabe auf den nächsten gültigen Wert begrenzt und übernommen
    Clamped,
    /// Vorbedingung nicht erfüllt, Zustand unverändert
    Rejected,
}

impl EditOutcome {
    /// Ob die Operation den Zustand verändert hat
    pub fn was_applied(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Periodisches 0/1-Schaltprofil über einer Phasendomäne
#[derive(Debug, Clone)]
pub struct Profile {
    /// Periodenlänge (Phaseneinheiten, > 0)
    period: f32,
    /// Stützpunkte, streng aufsteigend nach x; points[0].x == 0
    points: Vec<ProfilePoint>,
    /// Optionale Startmarkierung in [0, period), rein visueller Versatz
    start: Option<f32>,
}

impl Profile {
    /// Erstellt ein Profil aus einer aufrufer-seitigen Punktfolge.
    ///
    /// Die Folge muss streng aufsteigend sein, bei x = 0 beginnen und
    /// vollständig in [0, period) liegen. Segmente der Länge 0 sind damit
    /// nicht darstellbar und die Interpolation bleibt wohldefiniert.
    pub fn from_points(period: f32, points: Vec<ProfilePoint>) -> anyhow::Result<Self> {
        if period <= 0.0 {
            anyhow::bail!("Periode muss positiv sein: {}", period);
        }
        if points.len() < 2 {
            anyhow::bail!("Profil braucht mindestens 2 Punkte, hat {}", points.len());
        }
        if points[0].x != 0.0 {
            anyhow::bail!("Erster Punkt muss bei x = 0 liegen, liegt bei {}", points[0].x);
        }
        for pair in points.windows(2) {
            if pair[1].x <= pair[0].x {
                anyhow::bail!(
                    "Punktfolge nicht streng aufsteigend: {} folgt auf {}",
                    pair[1].x,
                    pair[0].x
                );
            }
        }
        // windows(2) garantiert: nur der letzte Punkt kann die Periode reißen
        let last_x = points[points.len() - 1].x;
        if last_x >= period {
            anyhow::bail!("Letzter Punkt {} liegt nicht vor der Periode {}", last_x, period);
        }
        for point in &points {
            if let Some(t) = point.transition {
                if t.before <= 0.0 || t.after <= 0.0 {
                    anyhow::bail!(
                        "Übergangsbreiten müssen positiv sein: before = {}, after = {} (x = {})",
                        t.before,
                        t.after,
                        point.x
                    );
                }
            }
        }

        Ok(Self {
            period,
            points,
            start: None,
        })
    }

    /// Periodenlänge
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Read-only Sicht auf die Stützpunkte
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Anzahl der Stützpunkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Aktuelle Startmarkierung
    pub fn start(&self) -> Option<f32> {
        self.start
    }

    /// Kontrollpunkte des Übergangs am Punkt `id` (on demand, nie gecacht)
    pub fn transition_points(&self, id: usize) -> Option<TransitionPoints> {
        geometry::transition_points(self, id)
    }

    fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    // ── AddPoint ────────────────────────────────────────────────────

    /// Einfügen ist immer erlaubt; unpassende Positionen laufen ins Leere
    pub fn can_add_point(&self, _x: f32, _y: f32) -> bool {
        true
    }

    /// Fügt einen Punkt ohne Übergang strikt zwischen zwei Nachbarn ein.
    ///
    /// `y` wird auf den Pegel quantisiert. Liegt `x` auf keinem offenen
    /// Intervall zweier aufeinanderfolgender Punkte (auch bei exakter
    /// Kollision mit einem Stützpunkt), bleibt das Profil unverändert.
    pub fn add_point(&mut self, x: f32, y: f32) -> EditOutcome {
        for id in 0..self.last_index() {
            if x > self.points[id].x && x < self.points[id + 1].x {
                self.points
                    .insert(id + 1, ProfilePoint::new(x, Level::from_value(y)));
                return EditOutcome::Applied;
            }
        }
        EditOutcome::Rejected
    }

    // ── RemovePoint ─────────────────────────────────────────────────

    /// Nur innere Punkte sind löschbar; die Endpunkte sind fixiert
    pub fn can_remove_point(&self, id: usize) -> bool {
        id != 0 && id < self.last_index()
    }

    /// Entfernt den inneren Punkt `id`
    pub fn remove_point(&mut self, id: usize) -> EditOutcome {
        if !self.can_remove_point(id) {
            return EditOutcome::Rejected;
        }
        self.points.remove(id);
        EditOutcome::Applied
    }

    // ── MovePoint ───────────────────────────────────────────────────

    /// Ziel muss innerhalb der Domäne liegen
    pub fn can_move_point(&self, id: usize, new_x: f32, _new_y: f32) -> bool {
        id < self.points.len() && (0.0..=self.period).contains(&new_x)
    }

    /// Verschiebt den Punkt `id` auf die vorgeschlagene Position.
    ///
    /// Der erste Punkt ist an den Ursprung gepinnt und nur im Pegel
    /// beweglich. Alle anderen Punkte werden so geklemmt, dass die
    /// Ausdehnung ihres eigenen Übergangs den Übergang des Nachbarn
    /// (plus Mindestabstand) nicht kreuzt.
    pub fn move_point(&mut self, id: usize, new_x: f32, new_y: f32) -> EditOutcome {
        if !self.can_move_point(id, new_x, new_y) {
            return EditOutcome::Rejected;
        }
        let current = self.points[id];
        let level = Level::from_value(new_y);

        if id == 0 {
            self.points[0] = ProfilePoint {
                x: 0.0,
                level,
                transition: current.transition,
            };
            return if new_x == 0.0 {
                EditOutcome::Applied
            } else {
                EditOutcome::Clamped
            };
        }

        let (min_x, max_x) = self.move_bounds(id);
        // Ausdehnung des eigenen Übergangs an der vorgeschlagenen Position
        let (min_control, max_control) = match current.transition {
            Some(t) => (new_x - t.before, new_x + t.after),
            None => (new_x, new_x),
        };

        let x = if min_control < min_x {
            min_x + current.transition.map_or(0.0, |t| t.before)
        } else if max_control > max_x {
            max_x - current.transition.map_or(0.0, |t| t.after)
        } else {
            new_x
        };

        // Gekreuzte Grenzen (zu eng benachbarte Punkte): verweigern statt
        // die strenge Ordnung zu verletzen
        let upper_ok = if id == self.last_index() {
            x < self.period
        } else {
            x < self.points[id + 1].x
        };
        if x <= self.points[id - 1].x || !upper_ok {
            return EditOutcome::Rejected;
        }

        self.points[id] = ProfilePoint {
            x,
            level,
            transition: current.transition,
        };
        if x == new_x {
            EditOutcome::Applied
        } else {
            EditOutcome::Clamped
        }
    }

    /// Zulässiger Bereich für die Übergangs-Ausdehnung von Punkt `id`
    /// (Mindestabstand bereits eingerechnet, `id > 0`).
    fn move_bounds(&self, id: usize) -> (f32, f32) {
        let previous = self.points[id - 1];
        let min_x = previous.x + previous.transition.map_or(0.0, |t| t.after) + MIN_GAP;

        let max_x = if id < self.last_index() {
            let next = self.points[id + 1];
            next.x - next.transition.map_or(0.0, |t| t.before)
        } else {
            // Letzter Punkt: Grenze ist der ggf. in die Vorperiode
            // umgebrochene Übergangsbeginn des ersten Punkts
            match self.transition_points(0) {
                Some(tp) if tp.p1.x < 0.0 => tp.p1.x + self.period,
                _ => self.period,
            }
        };
        (min_x, max_x - MIN_GAP)
    }

    // ── ApplySmoothTransition / RemoveSmoothTransition ──────────────

    /// Ein Übergang ist anlegbar wenn der Punkt noch keinen trägt
    pub fn can_apply_transition(&self, id: usize) -> bool {
        self.points.get(id).is_some_and(|p| !p.has_transition())
    }

    /// Legt den Standard-Übergang am Punkt `id` an
    pub fn apply_transition(&mut self, id: usize) -> EditOutcome {
        if !self.can_apply_transition(id) {
            return EditOutcome::Rejected;
        }
        self.points[id].transition = Some(Transition {
            before: DEFAULT_TRANSITION_WIDTH,
            after: DEFAULT_TRANSITION_WIDTH,
        });
        EditOutcome::Applied
    }

    /// Ein Übergang ist entfernbar wenn der Punkt einen trägt
    pub fn can_remove_transition(&self, id: usize) -> bool {
        self.points.get(id).is_some_and(|p| p.has_transition())
    }

    /// Setzt den Punkt `id` auf eine harte Flanke zurück
    pub fn remove_transition(&mut self, id: usize) -> EditOutcome {
        if !self.can_remove_transition(id) {
            return EditOutcome::Rejected;
        }
        self.points[id].transition = None;
        EditOutcome::Applied
    }

    // ── MoveTransitionHandle ────────────────────────────────────────

    /// Griffe sind frei beweglich; Gültigkeit entsteht allein durch Klemmen
    pub fn can_move_transition_handle(&self, _id: usize, _side: TransitionSide, _new_x: f32) -> bool {
        true
    }

    /// Formt den Übergang am Punkt `id` über die absolute Griffposition `new_x`.
    ///
    /// Die Breite wird so geklemmt, dass der Kontrollpunkt weder dem Punkt
    /// selbst noch dem Kontrollpunkt des Nachbarn (bzw. dessen Position)
    /// näher als der Mindestabstand kommt. Am ersten/letzten Punkt wird
    /// gegen den in die Nachbarperiode verschobenen Gegenpart geklemmt.
    pub fn move_transition_handle(&mut self, id: usize, side: TransitionSide, new_x: f32) -> EditOutcome {
        let Some(point) = self.points.get(id).copied() else {
            return EditOutcome::Rejected;
        };
        let Some(transition) = point.transition else {
            return EditOutcome::Rejected;
        };

        match side {
            TransitionSide::Before => self.move_before_handle(id, point, transition, new_x),
            TransitionSide::After => self.move_after_handle(id, point, transition, new_x),
        }
    }

    fn move_before_handle(
        &mut self,
        id: usize,
        point: ProfilePoint,
        transition: Transition,
        new_x: f32,
    ) -> EditOutcome {
        let mut x = new_x;
        let before;
        let raw_before;

        if point.x - transition.before < 0.0 {
            // Griff liegt in der Vorperiode und wird am Periodenende gezogen:
            // gegen das Übergangsende des letzten Punkts klemmen
            raw_before = point.x + (self.period - new_x);
            if x > self.period - MIN_GAP {
                x = self.period - MIN_GAP;
            }
            let min_x = match self.transition_points(self.last_index()) {
                Some(tp) => tp.p3.x,
                None => self.points[self.last_index()].x,
            };
            if x < min_x + MIN_GAP {
                x = min_x + MIN_GAP;
            }
            before = (point.x + (self.period - x)).max(MIN_GAP);
        } else {
            raw_before = point.x - new_x;
            let min_x = match self.transition_points(id - 1) {
                Some(tp) => tp.p3.x,
                None => self.points[id - 1].x,
            };
            if x < min_x + MIN_GAP {
                x = min_x + MIN_GAP;
            }
            before = (point.x - x).max(MIN_GAP);
        }

        self.points[id].transition = Some(Transition { before, ..transition });
        if before == raw_before {
            EditOutcome::Applied
        } else {
            EditOutcome::Clamped
        }
    }

    fn move_after_handle(
        &mut self,
        id: usize,
        point: ProfilePoint,
        transition: Transition,
        new_x: f32,
    ) -> EditOutcome {
        let mut x = new_x;

        if id == self.last_index() {
            // Griff darf bis vor den ggf. umgebrochenen Übergangsbeginn
            // des ersten Punkts (in die Folgeperiode verschoben)
            let max_x = match self.transition_points(0) {
                Some(tp) if tp.p1.x < 0.0 => tp.p1.x + self.period,
                _ => self.period,
            };
            if x > max_x - MIN_GAP {
                x = max_x - MIN_GAP;
            }
        } else {
            let max_x = match self.transition_points(id + 1) {
                Some(tp) => tp.p1.x,
                None => self.points[id + 1].x,
            };
            if x > max_x - MIN_GAP {
                x = max_x - MIN_GAP;
            }
        }

        let raw_after = new_x - point.x;
        let after = (x - point.x).max(MIN_GAP);

        self.points[id].transition = Some(Transition { after, ..transition });
        if after == raw_after {
            EditOutcome::Applied
        } else {
            EditOutcome::Clamped
        }
    }

    // ── MoveStart ───────────────────────────────────────────────────

    /// Die Startmarkierung muss innerhalb der Domäne liegen
    pub fn can_move_start(&self, new_x: f32) -> bool {
        (0.0..self.period).contains(&new_x)
    }

    /// Setzt die visuelle Startmarkierung
    pub fn move_start(&mut self, new_x: f32) -> EditOutcome {
        if !self.can_move_start(new_x) {
            return EditOutcome::Rejected;
        }
        self.start = Some(new_x);
        EditOutcome::Applied
    }
}

impl Default for Profile {
    /// Demo-Profil: zwei Schaltfenster über 360° mit weichen Flanken
    fn default() -> Self {
        Self {
            period: 360.0,
            points: vec![
                ProfilePoint::with_transition(0.0, Level::Low, 15.0, 5.0),
                ProfilePoint::with_transition(16.0, Level::High, 5.0, 15.0),
                ProfilePoint::with_transition(180.0, Level::High, 15.0, 5.0),
                ProfilePoint::with_transition(196.0, Level::Low, 5.0, 15.0),
            ],
            start: None,
        }
    }
}
