//! Snap-Engine: Ausrichtung der aktiven Form an der nächstgelegenen platzierten Form.
//!
//! Snap-Punkte sind Eckpunkte und Kanten-Mittelpunkte. Verglichen wird das
//! kartesische Produkt der Snap-Punkte beider Formen (O(n·m)); bei typischen
//! Formen mit 3–6 Ecken sind das höchstens 144 Paare pro Frame.

use glam::Vec2;

use super::shape::Shape;

/// Kandidat für die Ausrichtung eines Snap-Punkts der aktiven Form
/// auf einen Snap-Punkt der Ziel-Form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPair {
    /// Snap-Punkt der aktiven Form (Welt)
    pub active_point: Vec2,
    /// Snap-Punkt der Ziel-Form (Welt)
    pub target_point: Vec2,
    /// Euklidische Distanz zwischen beiden Punkten
    pub distance: f32,
}

impl SnapPair {
    /// Verschiebung, die `active_point` auf `target_point` bringt.
    pub fn offset(&self) -> Vec2 {
        self.target_point - self.active_point
    }
}

/// Ergebnis der Snap-Suche eines Frames.
#[derive(Debug, Clone, Default)]
pub struct SnapState {
    /// Index der nächstgelegenen platzierten Form
    pub target_index: Option<usize>,
    /// Alle Paare unterhalb der Schwelle (für Marker-Darstellung)
    pub candidates: Vec<SnapPair>,
    /// Paar mit minimaler Distanz (None wenn kein Kandidat)
    pub best: Option<SnapPair>,
}

impl SnapState {
    /// Gibt zurück, ob in diesem Frame ein Snap möglich ist.
    pub fn has_snap(&self) -> bool {
        self.best.is_some()
    }
}

/// Alle Snap-Paare zwischen `active` und `target` mit Distanz echt kleiner
/// `max_distance`, unsortiert (aktive Punkte außen, Ziel-Punkte innen).
pub fn find_closest_snap_points(active: &Shape, target: &Shape, max_distance: f32) -> Vec<SnapPair> {
    let target_points = target.snap_points();
    let mut pairs = Vec::new();

    for &active_point in active.snap_points() {
        for &target_point in target_points {
            let distance = active_point.distance(target_point);
            if distance < max_distance {
                pairs.push(SnapPair {
                    active_point,
                    target_point,
                    distance,
                });
            }
        }
    }

    pairs
}

/// Paar mit minimaler Distanz; bei Gleichstand gewinnt das zuerst gesehene.
pub fn select_best_pair(pairs: &[SnapPair]) -> Option<SnapPair> {
    let mut best: Option<SnapPair> = None;
    for pair in pairs {
        match best {
            Some(current) if current.distance <= pair.distance => {}
            _ => best = Some(*pair),
        }
    }
    best
}

/// Verschiebt `active`, sodass `pair.active_point` auf `pair.target_point` liegt.
pub fn apply_snap(active: &mut Shape, pair: &SnapPair) {
    let new_centroid = active.world_centroid() + pair.offset();
    active.move_to(new_centroid);
}

/// Index der Form, deren Welt-Schwerpunkt `position` am nächsten liegt.
pub fn nearest_shape(shapes: &[Shape], position: Vec2) -> Option<usize> {
    let mut nearest: Option<(usize, f32)> = None;
    for (index, shape) in shapes.iter().enumerate() {
        let distance_sq = shape.world_centroid().distance_squared(position);
        match nearest {
            Some((_, best)) if best <= distance_sq => {}
            _ => nearest = Some((index, distance_sq)),
        }
    }
    nearest.map(|(index, _)| index)
}

/// Kombinierte Snap-Suche: nächste Form zu `position`, deren Snap-Kandidaten
/// gegenüber `active` und das beste Paar.
pub fn best_snap(active: &Shape, shapes: &[Shape], position: Vec2, max_distance: f32) -> SnapState {
    let Some(target_index) = nearest_shape(shapes, position) else {
        return SnapState::default();
    };

    let candidates = find_closest_snap_points(active, &shapes[target_index], max_distance);
    let best = select_best_pair(&candidates);

    SnapState {
        target_index: Some(target_index),
        candidates,
        best,
    }
}
